//! Direction aware routing for the CPOs that take an edge descriptor.
//!
//! Out- and in-edge descriptors differ only in their tag, so each routing
//! trait has exactly one impl per tag and the tag picks it.
use super::r#trait::*;
use crate::descriptor::{EdgeDescriptor, InEdge, OutEdge};

pub trait EdgeTarget<G: AdjacencyList + ?Sized> {
    fn target_in(&self, g: &G) -> G::VertexId;
}

pub trait EdgeSource<G: AdjacencyList + ?Sized> {
    fn source_in(&self, g: &G) -> G::VertexId;
}

pub trait EdgeValueOf<G: EdgeValues + ?Sized> {
    fn value_in<'a>(&self, g: &'a G) -> G::EdgeValue<'a>;
}

impl<G> EdgeTarget<G> for EdgeDescriptor<G::EdgeStorage, G::VertexStorage, OutEdge>
where
    G: AdjacencyList + ?Sized,
{
    fn target_in(&self, g: &G) -> G::VertexId {
        g.target_id(self)
    }
}

impl<G> EdgeTarget<G> for EdgeDescriptor<G::InEdgeStorage, G::VertexStorage, InEdge>
where
    G: BidirectionalAdjacencyList + ?Sized,
{
    fn target_in(&self, g: &G) -> G::VertexId {
        g.in_target_id(self)
    }
}

impl<G> EdgeSource<G> for EdgeDescriptor<G::EdgeStorage, G::VertexStorage, OutEdge>
where
    G: SourcedAdjacencyList + ?Sized,
{
    fn source_in(&self, g: &G) -> G::VertexId {
        g.source_id(self)
    }
}

impl<G> EdgeSource<G> for EdgeDescriptor<G::InEdgeStorage, G::VertexStorage, InEdge>
where
    G: BidirectionalAdjacencyList + ?Sized,
{
    fn source_in(&self, g: &G) -> G::VertexId {
        g.in_source_id(self)
    }
}

impl<G> EdgeValueOf<G> for EdgeDescriptor<G::EdgeStorage, G::VertexStorage, OutEdge>
where
    G: EdgeValues + ?Sized,
{
    fn value_in<'a>(&self, g: &'a G) -> G::EdgeValue<'a> {
        g.edge_value(self)
    }
}

impl<G> EdgeValueOf<G> for EdgeDescriptor<G::InEdgeStorage, G::VertexStorage, InEdge>
where
    G: InEdgeValues + ?Sized,
{
    fn value_in<'a>(&self, g: &'a G) -> G::EdgeValue<'a> {
        g.in_edge_value(self)
    }
}
