use crate::adjacency::*;

/// `(target id, descriptor)` for every out-edge of `u`.
pub fn incidence<'a, G: AdjacencyList + ?Sized>(
    g: &'a G,
    u: &VertexDescriptorOf<G>,
) -> Incidence<'a, G> {
    Incidence {
        g,
        inner: edges(g, u),
    }
}

pub struct Incidence<'a, G: AdjacencyList + ?Sized + 'a> {
    g: &'a G,
    inner: G::EdgeIter<'a>,
}

impl<'a, G: AdjacencyList + ?Sized> Clone for Incidence<'a, G> {
    fn clone(&self) -> Self {
        Self {
            g: self.g,
            inner: self.inner.clone(),
        }
    }
}

impl<'a, G: AdjacencyList + ?Sized> Iterator for Incidence<'a, G> {
    type Item = (G::VertexId, EdgeDescriptorOf<G>);

    fn next(&mut self) -> Option<Self::Item> {
        let uv = self.inner.next()?;
        Some((self.g.target_id(&uv), uv))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, G: AdjacencyList + ?Sized> ExactSizeIterator for Incidence<'a, G> {}
