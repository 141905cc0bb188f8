//! [`DynamicGraph`] answering the access protocol.
//!
//! These impls override the structural defaults where the graph knows
//! better: the edge total is a stored counter and partitions come from the
//! partition vector.
use super::facet::{Sourced, Valued};
use super::graph::{
    DynamicGraph, EdgeValueSlot, GraphValueSlot, VertexPosOf, VertexValueSlot,
};
use super::policy::{EdgeOf, GraphTraits, VertexOf};
use crate::adjacency::*;
use crate::descriptor::{EdgeDescriptorView, InEdge, OutEdge, VertexDescriptor, VertexDescriptorView};
use crate::shape::SourcedShape;
use crate::store::{EdgeRange, EdgeRangeMut, VertexInEdges, VertexRange, VertexStore};

type EdgePosOf<Tr> = <<Tr as GraphTraits>::Edges as EdgeRange>::Position;

impl<Tr: GraphTraits> AdjacencyList for DynamicGraph<Tr> {
    type VertexId = Tr::VertexId;
    type VertexStorage = VertexPosOf<Tr>;
    type EdgeStorage = EdgePosOf<Tr>;
    type VertexIter<'a> = VertexDescriptorView<<Tr::Vertices as VertexRange>::VertexPositions<'a>>
    where
        Self: 'a;
    type EdgeIter<'a> = EdgeDescriptorView<
        <Tr::Edges as EdgeRange>::Positions<'a>,
        VertexPosOf<Tr>,
        OutEdge,
    >
    where
        Self: 'a;

    fn vertices(&self) -> Self::VertexIter<'_> {
        VertexDescriptorView::new(self.vertices.vertex_positions(), self.vertices.vertex_count())
    }

    fn num_vertices(&self) -> usize {
        self.vertices.vertex_count()
    }

    fn vertex_id(&self, u: &VertexDescriptorOf<Self>) -> Tr::VertexId {
        self.vertices.id_of(u.value())
    }

    fn find_vertex(&self, uid: &Tr::VertexId) -> Option<VertexDescriptorOf<Self>> {
        self.vertices.position_of(uid).map(VertexDescriptor::new)
    }

    fn edges(&self, u: &VertexDescriptorOf<Self>) -> Self::EdgeIter<'_> {
        let es = &self.vertices.vertex(u.value()).edges;
        EdgeDescriptorView::new(es.positions(), es.size(), u.clone())
    }

    fn target_id(&self, uv: &EdgeDescriptorOf<Self>) -> Tr::VertexId {
        self.out_edge(uv).target_id().clone()
    }

    fn degree(&self, u: &VertexDescriptorOf<Self>) -> usize {
        self.vertices.vertex(u.value()).edges.size()
    }

    fn num_edges(&self) -> usize {
        self.edge_count
    }

    fn has_edge(&self) -> bool {
        self.edge_count > 0
    }

    fn num_partitions(&self) -> usize {
        self.partitions.len().saturating_sub(1).max(1)
    }

    fn partition_id(&self, u: &VertexDescriptorOf<Self>) -> usize {
        let id = self.vertices.id_of(u.value());
        match <Tr::Vertices as VertexStore<Tr::VertexId>>::index_of(&id) {
            Some(idx) => {
                let starts = &self.partitions[..self.partitions.len().saturating_sub(1)];
                starts.partition_point(|&start| start <= idx).saturating_sub(1)
            }
            None => 0,
        }
    }
}

impl<Tr: GraphTraits> DynamicGraph<Tr> {
    fn out_edge(&self, uv: &EdgeDescriptorOf<Self>) -> &EdgeOf<Tr> {
        self.vertices.vertex(uv.source().value()).edges.at(uv.value())
    }
}

impl<Tr> SourcedAdjacencyList for DynamicGraph<Tr>
where
    Tr: GraphTraits<Source = Sourced>,
    EdgeOf<Tr>: SourcedShape<Id = Tr::VertexId>,
{
    fn source_id(&self, uv: &EdgeDescriptorOf<Self>) -> Tr::VertexId {
        SourcedShape::source_id(self.out_edge(uv)).clone()
    }
}

impl<Tr> BidirectionalAdjacencyList for DynamicGraph<Tr>
where
    Tr: GraphTraits<Source = Sourced>,
    VertexOf<Tr>: VertexInEdges<InEdge = EdgeOf<Tr>, InEdges = Tr::Edges>,
    EdgeOf<Tr>: SourcedShape<Id = Tr::VertexId>,
{
    type InEdgeStorage = EdgePosOf<Tr>;
    type InEdgeIter<'a> = EdgeDescriptorView<
        <Tr::Edges as EdgeRange>::Positions<'a>,
        VertexPosOf<Tr>,
        InEdge,
    >
    where
        Self: 'a;

    fn in_edges(&self, u: &VertexDescriptorOf<Self>) -> Self::InEdgeIter<'_> {
        let es = VertexInEdges::in_edges(self.vertices.vertex(u.value()));
        EdgeDescriptorView::new(es.positions(), es.size(), u.clone())
    }

    fn in_degree(&self, u: &VertexDescriptorOf<Self>) -> usize {
        VertexInEdges::in_edges(self.vertices.vertex(u.value())).size()
    }

    fn in_source_id(&self, uv: &InEdgeDescriptorOf<Self>) -> Tr::VertexId {
        let es = VertexInEdges::in_edges(self.vertices.vertex(uv.target().value()));
        SourcedShape::source_id(es.at(uv.value())).clone()
    }
}

impl<Tr> VertexValues for DynamicGraph<Tr>
where
    Tr: GraphTraits,
    Tr::VertexValue: Valued,
{
    type VertexValue = VertexValueSlot<Tr>;

    fn vertex_value(&self, u: &VertexDescriptorOf<Self>) -> &VertexValueSlot<Tr> {
        &self.vertices.vertex(u.value()).value
    }
}

impl<Tr> VertexValuesMut for DynamicGraph<Tr>
where
    Tr: GraphTraits,
    Tr::VertexValue: Valued,
{
    fn vertex_value_mut(&mut self, u: &VertexDescriptorOf<Self>) -> &mut VertexValueSlot<Tr> {
        &mut self.vertices.vertex_mut(u.value()).value
    }
}

impl<Tr> EdgeValues for DynamicGraph<Tr>
where
    Tr: GraphTraits,
    Tr::EdgeValue: Valued,
{
    type EdgeValue<'a> = &'a EdgeValueSlot<Tr> where Self: 'a;

    fn edge_value(&self, uv: &EdgeDescriptorOf<Self>) -> &EdgeValueSlot<Tr> {
        self.out_edge(uv).value_slot()
    }
}

impl<Tr> EdgeValuesMut for DynamicGraph<Tr>
where
    Tr: GraphTraits,
    Tr::EdgeValue: Valued,
    Tr::Edges: EdgeRangeMut,
{
    type EdgeValueMut<'a> = &'a mut EdgeValueSlot<Tr> where Self: 'a;

    fn edge_value_mut(&mut self, uv: &EdgeDescriptorOf<Self>) -> &mut EdgeValueSlot<Tr> {
        self.vertices
            .vertex_mut(uv.source().value())
            .edges
            .at_mut(uv.value())
            .value_slot_mut()
    }
}

impl<Tr> InEdgeValues for DynamicGraph<Tr>
where
    Tr: GraphTraits<Source = Sourced>,
    Tr::EdgeValue: Valued,
    VertexOf<Tr>: VertexInEdges<InEdge = EdgeOf<Tr>, InEdges = Tr::Edges>,
    EdgeOf<Tr>: SourcedShape<Id = Tr::VertexId>,
{
    fn in_edge_value(&self, uv: &InEdgeDescriptorOf<Self>) -> &EdgeValueSlot<Tr> {
        let es = VertexInEdges::in_edges(self.vertices.vertex(uv.target().value()));
        es.at(uv.value()).value_slot()
    }
}

impl<Tr> HasGraphValue for DynamicGraph<Tr>
where
    Tr: GraphTraits,
    Tr::GraphValue: Valued,
{
    type GraphValue = GraphValueSlot<Tr>;

    fn graph_value(&self) -> &GraphValueSlot<Tr> {
        &self.value
    }
}
