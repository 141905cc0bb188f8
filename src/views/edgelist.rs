use crate::adjacency::*;

/// `(source id, target id, descriptor)` for every out-edge of the graph,
/// grouped by source in vertex order.
///
/// The source id comes from the vertex being walked, so unsourced graphs
/// work too.
pub fn edgelist<G: AdjacencyList + ?Sized>(g: &G) -> EdgeList<'_, G> {
    EdgeList {
        g,
        vertices: vertices(g),
        current: None,
    }
}

pub struct EdgeList<'a, G: AdjacencyList + ?Sized + 'a> {
    g: &'a G,
    vertices: G::VertexIter<'a>,
    current: Option<(G::VertexId, G::EdgeIter<'a>)>,
}

impl<'a, G: AdjacencyList + ?Sized> Clone for EdgeList<'a, G> {
    fn clone(&self) -> Self {
        Self {
            g: self.g,
            vertices: self.vertices.clone(),
            current: self.current.clone(),
        }
    }
}

impl<'a, G: AdjacencyList + ?Sized> Iterator for EdgeList<'a, G> {
    type Item = (G::VertexId, G::VertexId, EdgeDescriptorOf<G>);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((uid, it)) = self.current.as_mut() {
                if let Some(uv) = it.next() {
                    return Some((uid.clone(), self.g.target_id(&uv), uv));
                }
            }
            let u = self.vertices.next()?;
            self.current = Some((vertex_id(self.g, &u), edges(self.g, &u)));
        }
    }
}

impl<'a, G: AdjacencyList + ?Sized> std::iter::FusedIterator for EdgeList<'a, G> {}

#[cfg(test)]
mod tests {
    use crate::container::Ops;
    use crate::prelude::*;
    use quickcheck_macros::quickcheck;

    #[quickcheck]
    fn flattens_every_out_edge(ops: Ops) {
        let g: DynamicGraph<Dol<Value<i32>>> =
            DynamicGraph::from_edge_list(ops.edges.iter().copied()).unwrap();
        let mut got: Vec<_> = edgelist(&g)
            .map(|(s, t, uv)| (s, t, *edge_value(&g, &uv)))
            .collect();
        got.sort();
        let mut want = ops.edges.clone();
        want.sort();
        assert_eq!(got, want);
        assert_eq!(edgelist(&g).count(), num_edges(&g));
    }

    #[test]
    fn skips_vertices_without_edges() {
        let g: Vec<Vec<u8>> = vec![vec![], vec![], vec![0, 1], vec![]];
        let got: Vec<_> = edgelist(&g).map(|(s, t, _)| (s, t)).collect();
        assert_eq!(got, vec![(2, 0), (2, 1)]);
    }
}
