use crate::adjacency::*;

/// `(id, descriptor)` for every vertex, in container order.
pub fn vertexlist<G: AdjacencyList + ?Sized>(g: &G) -> VertexList<'_, G> {
    VertexList {
        g,
        inner: vertices(g),
    }
}

pub struct VertexList<'a, G: AdjacencyList + ?Sized + 'a> {
    g: &'a G,
    inner: G::VertexIter<'a>,
}

impl<'a, G: AdjacencyList + ?Sized> Clone for VertexList<'a, G> {
    fn clone(&self) -> Self {
        Self {
            g: self.g,
            inner: self.inner.clone(),
        }
    }
}

impl<'a, G: AdjacencyList + ?Sized> Iterator for VertexList<'a, G> {
    type Item = (G::VertexId, VertexDescriptorOf<G>);

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.inner.next()?;
        Some((vertex_id(self.g, &u), u))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, G: AdjacencyList + ?Sized> ExactSizeIterator for VertexList<'a, G> {}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn pairs_ids_with_descriptors() {
        let g: DynamicGraph<Mov<NoValue, NoValue, NoValue, char>> =
            DynamicGraph::from_edge_list([('b', 'a'), ('c', 'a')]).unwrap();
        let view = vertexlist(&g);
        assert_eq!(view.len(), 3);
        let ids: Vec<char> = view.clone().map(|(id, _)| id).collect();
        assert_eq!(ids, vec!['a', 'b', 'c']);
        for (id, u) in view {
            assert_eq!(vertex_id(&g, &u), id);
        }
    }
}
