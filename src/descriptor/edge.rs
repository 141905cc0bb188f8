use super::{VertexDescriptor, VertexPosition};
use crate::shape::{EdgeShape, SourcedShape};
use crate::store::{EdgeRange, EdgeRangeMut, VertexEdges, VertexEdgesMut, VertexInEdges};
use std::fmt::Debug;
use std::hash::Hash;
use std::marker::PhantomData;

mod sealed {
    pub trait Sealed {}
}

/// Direction tag of an [`EdgeDescriptor`].
pub trait Direction:
    sealed::Sealed + Copy + Clone + Eq + Ord + Hash + Debug + Default + 'static
{
    const IS_IN_EDGE: bool;
    const IS_OUT_EDGE: bool = !Self::IS_IN_EDGE;
}

/// The owning vertex is the source, the edge container yields the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct OutEdge;

/// The owning vertex is the target, the reverse container yields the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct InEdge;

impl sealed::Sealed for OutEdge {}
impl sealed::Sealed for InEdge {}

impl Direction for OutEdge {
    const IS_IN_EDGE: bool = false;
}

impl Direction for InEdge {
    const IS_IN_EDGE: bool = true;
}

/// A position denoting one edge, tagged with the vertex it was reached from.
///
/// Target ids and payloads are not stored here. They are extracted on demand
/// from the owning vertex's edge container through [`EdgeShape`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeDescriptor<EP, VP, D = OutEdge> {
    edge: EP,
    vertex: VertexDescriptor<VP>,
    _direction: PhantomData<D>,
}

pub type OutEdgeDescriptor<EP, VP> = EdgeDescriptor<EP, VP, OutEdge>;
pub type InEdgeDescriptor<EP, VP> = EdgeDescriptor<EP, VP, InEdge>;

impl<EP, VP, D> EdgeDescriptor<EP, VP, D>
where
    VP: VertexPosition,
    D: Direction,
{
    pub fn new(edge: EP, vertex: VertexDescriptor<VP>) -> Self {
        Self {
            edge,
            vertex,
            _direction: PhantomData,
        }
    }

    /// The stored position in the edge container.
    pub fn value(&self) -> &EP {
        &self.edge
    }

    /// The vertex whose container holds this edge.
    pub fn vertex(&self) -> &VertexDescriptor<VP> {
        &self.vertex
    }

    pub fn is_in_edge(&self) -> bool {
        D::IS_IN_EDGE
    }
}

impl<EP, VP: VertexPosition> EdgeDescriptor<EP, VP, OutEdge> {
    pub fn source(&self) -> &VertexDescriptor<VP> {
        &self.vertex
    }

    pub fn source_id(&self) -> &VP::Id {
        self.vertex.vertex_id()
    }

    pub fn target_id<'a, V>(&self, vertex_data: &'a V) -> &'a <V::Edge as EdgeShape>::Id
    where
        V: VertexEdges,
        V::Edges: EdgeRange<Position = EP>,
        V::Edge: EdgeShape,
    {
        self.underlying_value(vertex_data).target_id()
    }

    pub fn underlying_value<'a, V>(&self, vertex_data: &'a V) -> &'a V::Edge
    where
        V: VertexEdges,
        V::Edges: EdgeRange<Position = EP>,
    {
        vertex_data.out_edges().at(&self.edge)
    }

    pub fn underlying_value_mut<'a, V>(&self, vertex_data: &'a mut V) -> &'a mut V::Edge
    where
        V: VertexEdgesMut,
        V::Edges: EdgeRangeMut<Position = EP>,
    {
        vertex_data.out_edges_mut().at_mut(&self.edge)
    }

    pub fn inner_value<'a, V>(&self, vertex_data: &'a V) -> <V::Edge as EdgeShape>::Inner<'a>
    where
        V: VertexEdges,
        V::Edges: EdgeRange<Position = EP>,
        V::Edge: EdgeShape,
    {
        self.underlying_value(vertex_data).inner_value()
    }

    pub fn inner_value_mut<'a, V>(
        &self,
        vertex_data: &'a mut V,
    ) -> <V::Edge as EdgeShape>::InnerMut<'a>
    where
        V: VertexEdgesMut,
        V::Edges: EdgeRangeMut<Position = EP>,
        V::Edge: EdgeShape,
    {
        self.underlying_value_mut(vertex_data).inner_value_mut()
    }
}

impl<EP, VP: VertexPosition> EdgeDescriptor<EP, VP, InEdge> {
    pub fn target(&self) -> &VertexDescriptor<VP> {
        &self.vertex
    }

    pub fn target_id(&self) -> &VP::Id {
        self.vertex.vertex_id()
    }

    /// Navigates the reverse container of the owning vertex.
    pub fn source_id<'a, V>(&self, vertex_data: &'a V) -> &'a <V::InEdge as EdgeShape>::Id
    where
        V: VertexInEdges,
        V::InEdges: EdgeRange<Position = EP>,
        V::InEdge: SourcedShape,
    {
        self.underlying_value(vertex_data).source_id()
    }

    pub fn underlying_value<'a, V>(&self, vertex_data: &'a V) -> &'a V::InEdge
    where
        V: VertexInEdges,
        V::InEdges: EdgeRange<Position = EP>,
    {
        vertex_data.in_edges().at(&self.edge)
    }

    pub fn inner_value<'a, V>(&self, vertex_data: &'a V) -> <V::InEdge as EdgeShape>::Inner<'a>
    where
        V: VertexInEdges,
        V::InEdges: EdgeRange<Position = EP>,
        V::InEdge: EdgeShape,
    {
        self.underlying_value(vertex_data).inner_value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_edge_navigates_the_out_container() {
        let adj: Vec<Vec<(u32, f64)>> = vec![vec![(1, 0.5), (2, 1.5)], vec![], vec![]];
        let uv: OutEdgeDescriptor<usize, usize> = EdgeDescriptor::new(1, VertexDescriptor::new(0));
        assert_eq!(*uv.source_id(), 0);
        assert_eq!(*uv.target_id(&adj[0]), 2);
        assert_eq!(*uv.inner_value(&adj[0]), 1.5);
        assert_eq!(uv.underlying_value(&adj[0]), &(2, 1.5));
        assert!(!uv.is_in_edge());
    }

    #[test]
    fn edge_payload_can_be_rewritten_in_place() {
        let mut adj: Vec<Vec<(u32, i32)>> = vec![vec![(1, 5)], vec![]];
        let uv: OutEdgeDescriptor<usize, usize> = EdgeDescriptor::new(0, VertexDescriptor::new(0));
        *uv.inner_value_mut(&mut adj[0]) += 1;
        assert_eq!(adj[0][0], (1, 6));
    }

    #[test]
    fn descriptors_order_by_vertex_after_edge() {
        let a: OutEdgeDescriptor<usize, usize> = EdgeDescriptor::new(0, VertexDescriptor::new(1));
        let b: OutEdgeDescriptor<usize, usize> = EdgeDescriptor::new(1, VertexDescriptor::new(0));
        assert!(a < b);
        assert_eq!(a, a.clone());
    }
}
