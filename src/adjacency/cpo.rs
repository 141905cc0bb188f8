//! The free functions consumers call. Each one forwards to the single impl
//! the graph type selected, so there is nothing to choose at runtime.
use super::dispatch::{EdgeSource, EdgeTarget, EdgeValueOf};
use super::r#trait::*;

pub fn vertices<G: AdjacencyList + ?Sized>(g: &G) -> G::VertexIter<'_> {
    g.vertices()
}

pub fn num_vertices<G: AdjacencyList + ?Sized>(g: &G) -> usize {
    g.num_vertices()
}

pub fn vertex_id<G: AdjacencyList + ?Sized>(g: &G, u: &VertexDescriptorOf<G>) -> G::VertexId {
    g.vertex_id(u)
}

pub fn find_vertex<G: AdjacencyList + ?Sized>(
    g: &G,
    uid: &G::VertexId,
) -> Option<VertexDescriptorOf<G>> {
    g.find_vertex(uid)
}

pub fn edges<'a, G: AdjacencyList + ?Sized>(
    g: &'a G,
    u: &VertexDescriptorOf<G>,
) -> G::EdgeIter<'a> {
    g.edges(u)
}

/// Out-edges of the vertex with id `uid`, `None` when there is none.
pub fn edges_of<'a, G: AdjacencyList + ?Sized>(
    g: &'a G,
    uid: &G::VertexId,
) -> Option<G::EdgeIter<'a>> {
    g.edges_of(uid)
}

/// Target id of an out- or in-edge.
pub fn target_id<G, E>(g: &G, uv: &E) -> G::VertexId
where
    G: AdjacencyList + ?Sized,
    E: EdgeTarget<G>,
{
    uv.target_in(g)
}

/// Source id of an out-edge of a sourced graph, or of any in-edge.
pub fn source_id<G, E>(g: &G, uv: &E) -> G::VertexId
where
    G: AdjacencyList + ?Sized,
    E: EdgeSource<G>,
{
    uv.source_in(g)
}

pub fn target<G: AdjacencyList + ?Sized>(
    g: &G,
    uv: &EdgeDescriptorOf<G>,
) -> Option<VertexDescriptorOf<G>> {
    g.target(uv)
}

pub fn source<G: SourcedAdjacencyList + ?Sized>(
    g: &G,
    uv: &EdgeDescriptorOf<G>,
) -> VertexDescriptorOf<G> {
    g.source(uv)
}

pub fn degree<G: AdjacencyList + ?Sized>(g: &G, u: &VertexDescriptorOf<G>) -> usize {
    g.degree(u)
}

pub fn num_edges<G: AdjacencyList + ?Sized>(g: &G) -> usize {
    g.num_edges()
}

pub fn has_edge<G: AdjacencyList + ?Sized>(g: &G) -> bool {
    g.has_edge()
}

pub fn contains_edge<G: AdjacencyList + ?Sized>(
    g: &G,
    uid: &G::VertexId,
    vid: &G::VertexId,
) -> bool {
    g.contains_edge(uid, vid)
}

pub fn find_vertex_edge<G: AdjacencyList + ?Sized>(
    g: &G,
    uid: &G::VertexId,
    vid: &G::VertexId,
) -> Option<EdgeDescriptorOf<G>> {
    g.find_vertex_edge(uid, vid)
}

pub fn in_edges<'a, G: BidirectionalAdjacencyList + ?Sized>(
    g: &'a G,
    u: &VertexDescriptorOf<G>,
) -> G::InEdgeIter<'a> {
    g.in_edges(u)
}

pub fn in_degree<G: BidirectionalAdjacencyList + ?Sized>(
    g: &G,
    u: &VertexDescriptorOf<G>,
) -> usize {
    g.in_degree(u)
}

pub fn vertex_value<'a, G: VertexValues + ?Sized>(
    g: &'a G,
    u: &VertexDescriptorOf<G>,
) -> &'a G::VertexValue {
    g.vertex_value(u)
}

pub fn vertex_value_mut<'a, G: VertexValuesMut + ?Sized>(
    g: &'a mut G,
    u: &VertexDescriptorOf<G>,
) -> &'a mut G::VertexValue {
    g.vertex_value_mut(u)
}

/// Payload of an out- or in-edge.
pub fn edge_value<'a, G, E>(g: &'a G, uv: &E) -> G::EdgeValue<'a>
where
    G: EdgeValues + ?Sized,
    E: EdgeValueOf<G>,
{
    uv.value_in(g)
}

pub fn edge_value_mut<'a, G: EdgeValuesMut + ?Sized>(
    g: &'a mut G,
    uv: &EdgeDescriptorOf<G>,
) -> G::EdgeValueMut<'a> {
    g.edge_value_mut(uv)
}

pub fn graph_value<G: HasGraphValue + ?Sized>(g: &G) -> &G::GraphValue {
    g.graph_value()
}

pub fn num_partitions<G: AdjacencyList + ?Sized>(g: &G) -> usize {
    g.num_partitions()
}

pub fn partition_id<G: AdjacencyList + ?Sized>(g: &G, u: &VertexDescriptorOf<G>) -> usize {
    g.partition_id(u)
}
