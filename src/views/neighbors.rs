use crate::adjacency::*;

/// `(id, descriptor)` of each vertex an out-edge of `u` reaches.
///
/// A vertex reached by parallel edges shows up once per edge. Edges naming
/// a vertex the graph does not hold are skipped.
pub fn neighbors<'a, G: AdjacencyList + ?Sized>(
    g: &'a G,
    u: &VertexDescriptorOf<G>,
) -> Neighbors<'a, G> {
    Neighbors {
        g,
        inner: edges(g, u),
    }
}

pub struct Neighbors<'a, G: AdjacencyList + ?Sized + 'a> {
    g: &'a G,
    inner: G::EdgeIter<'a>,
}

impl<'a, G: AdjacencyList + ?Sized> Clone for Neighbors<'a, G> {
    fn clone(&self) -> Self {
        Self {
            g: self.g,
            inner: self.inner.clone(),
        }
    }
}

impl<'a, G: AdjacencyList + ?Sized> Iterator for Neighbors<'a, G> {
    type Item = (G::VertexId, VertexDescriptorOf<G>);

    fn next(&mut self) -> Option<Self::Item> {
        for uv in self.inner.by_ref() {
            let vid = self.g.target_id(&uv);
            if let Some(v) = self.g.find_vertex(&vid) {
                return Some((vid, v));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.inner.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;

    #[test]
    fn follows_out_edges_to_their_targets() {
        let g: DynamicGraph<Vov> =
            DynamicGraph::from_edge_list([(0u32, 2u32), (0, 1), (0, 2), (1, 0)]).unwrap();
        let u = find_vertex(&g, &0).unwrap();
        let ids: Vec<u32> = neighbors(&g, &u).map(|(vid, _)| vid).collect();
        assert_eq!(ids, vec![2, 1, 2]);
        for (vid, v) in neighbors(&g, &u) {
            assert_eq!(vertex_id(&g, &v), vid);
        }
        let leaf = find_vertex(&g, &2).unwrap();
        assert_eq!(neighbors(&g, &leaf).count(), 0);
    }

    #[test]
    fn dangling_targets_are_skipped() {
        let g: Vec<Vec<u32>> = vec![vec![1, 7, 0], vec![]];
        let u = find_vertex(&g, &0).unwrap();
        let ids: Vec<u32> = neighbors(&g, &u).map(|(vid, _)| vid).collect();
        assert_eq!(ids, vec![1, 0]);
    }
}
