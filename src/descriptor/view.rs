use super::{Direction, EdgeDescriptor, OutEdge, VertexDescriptor, VertexPosition};
use std::iter::FusedIterator;
use std::marker::PhantomData;

/// Lazy range of vertex descriptors over stored positions.
///
/// Descriptors are synthesized on each step, never collected. The length is
/// taken once at construction.
#[derive(Debug, Clone)]
pub struct VertexDescriptorView<I> {
    positions: I,
    remaining: usize,
}

impl<I> VertexDescriptorView<I>
where
    I: Iterator,
    I::Item: VertexPosition,
{
    pub fn new(positions: I, len: usize) -> Self {
        Self {
            positions,
            remaining: len,
        }
    }
}

impl<I> Iterator for VertexDescriptorView<I>
where
    I: Iterator,
    I::Item: VertexPosition,
{
    type Item = VertexDescriptor<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let p = self.positions.next()?;
        self.remaining = self.remaining.saturating_sub(1);
        Some(VertexDescriptor::new(p))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<I> ExactSizeIterator for VertexDescriptorView<I>
where
    I: Iterator,
    I::Item: VertexPosition,
{
}

impl<I> FusedIterator for VertexDescriptorView<I>
where
    I: FusedIterator,
    I::Item: VertexPosition,
{
}

/// Lazy range of edge descriptors over one vertex's edge container.
#[derive(Debug, Clone)]
pub struct EdgeDescriptorView<I, VP, D = OutEdge> {
    positions: I,
    vertex: VertexDescriptor<VP>,
    remaining: usize,
    _direction: PhantomData<D>,
}

impl<I, VP, D> EdgeDescriptorView<I, VP, D>
where
    I: Iterator,
    VP: VertexPosition,
    D: Direction,
{
    pub fn new(positions: I, len: usize, vertex: VertexDescriptor<VP>) -> Self {
        Self {
            positions,
            vertex,
            remaining: len,
            _direction: PhantomData,
        }
    }

    /// The vertex every produced descriptor is tagged with.
    pub fn vertex(&self) -> &VertexDescriptor<VP> {
        &self.vertex
    }
}

impl<I, VP, D> Iterator for EdgeDescriptorView<I, VP, D>
where
    I: Iterator,
    VP: VertexPosition,
    D: Direction,
{
    type Item = EdgeDescriptor<I::Item, VP, D>;

    fn next(&mut self) -> Option<Self::Item> {
        let p = self.positions.next()?;
        self.remaining = self.remaining.saturating_sub(1);
        Some(EdgeDescriptor::new(p, self.vertex.clone()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<I, VP, D> ExactSizeIterator for EdgeDescriptorView<I, VP, D>
where
    I: Iterator,
    VP: VertexPosition,
    D: Direction,
{
}

impl<I, VP, D> FusedIterator for EdgeDescriptorView<I, VP, D>
where
    I: FusedIterator,
    VP: VertexPosition,
    D: Direction,
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{InEdge, Keyed};

    #[test]
    fn vertex_view_is_multi_pass() {
        let view = VertexDescriptorView::new(0..3usize, 3);
        assert_eq!(view.len(), 3);
        let first: Vec<_> = view.clone().map(|u| u.index()).collect();
        let second: Vec<_> = view.map(|u| u.index()).collect();
        assert_eq!(first, vec![0, 1, 2]);
        assert_eq!(first, second);
    }

    #[test]
    fn length_is_tracked_while_consuming() {
        let mut view = VertexDescriptorView::new(vec![Keyed(2), Keyed(9)].into_iter(), 2);
        assert_eq!(view.next().map(|u| *u.vertex_id()), Some(2));
        assert_eq!(view.len(), 1);
    }

    #[test]
    fn edge_view_tags_every_descriptor() {
        let u = VertexDescriptor::new(4usize);
        let view: EdgeDescriptorView<_, _, InEdge> = EdgeDescriptorView::new(0..2usize, 2, u);
        for uv in view {
            assert!(uv.is_in_edge());
            assert_eq!(*uv.target_id(), 4);
        }
    }
}
