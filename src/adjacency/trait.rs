use crate::descriptor::{EdgeDescriptor, InEdge, OutEdge, VertexDescriptor, VertexPosition};
use crate::id::VertexKey;
use std::fmt::Debug;
use std::hash::Hash;

pub type VertexDescriptorOf<G> = VertexDescriptor<<G as AdjacencyList>::VertexStorage>;
pub type EdgeDescriptorOf<G> = EdgeDescriptor<
    <G as AdjacencyList>::EdgeStorage,
    <G as AdjacencyList>::VertexStorage,
    OutEdge,
>;
pub type InEdgeDescriptorOf<G> = EdgeDescriptor<
    <G as BidirectionalAdjacencyList>::InEdgeStorage,
    <G as AdjacencyList>::VertexStorage,
    InEdge,
>;

/// The core access protocol every graph container speaks.
///
/// Required methods are the container's own answers. Provided methods are
/// the structural fallback, built on the required ones, and a container may
/// override any of them with something cheaper (a stored counter, say).
/// Consumers call the free functions in [`crate::adjacency`], never the
/// container.
pub trait AdjacencyList {
    type VertexId: VertexKey;
    type VertexStorage: VertexPosition;
    type EdgeStorage: Clone + Eq + Ord + Hash + Debug;
    type VertexIter<'a>: Iterator<Item = VertexDescriptor<Self::VertexStorage>>
        + ExactSizeIterator
        + Clone
    where
        Self: 'a;
    type EdgeIter<'a>: Iterator<Item = EdgeDescriptor<Self::EdgeStorage, Self::VertexStorage, OutEdge>>
        + ExactSizeIterator
        + Clone
    where
        Self: 'a;

    /// All vertices in container order.
    fn vertices(&self) -> Self::VertexIter<'_>;
    fn vertex_id(&self, u: &VertexDescriptorOf<Self>) -> Self::VertexId;
    /// `None` when no vertex has id `uid`.
    fn find_vertex(&self, uid: &Self::VertexId) -> Option<VertexDescriptorOf<Self>>;
    /// Out-edges of `u`.
    fn edges(&self, u: &VertexDescriptorOf<Self>) -> Self::EdgeIter<'_>;
    fn target_id(&self, uv: &EdgeDescriptorOf<Self>) -> Self::VertexId;

    fn num_vertices(&self) -> usize {
        self.vertices().len()
    }

    fn edges_of(&self, uid: &Self::VertexId) -> Option<Self::EdgeIter<'_>> {
        self.find_vertex(uid).map(|u| self.edges(&u))
    }

    fn degree(&self, u: &VertexDescriptorOf<Self>) -> usize {
        self.edges(u).len()
    }

    fn num_edges(&self) -> usize {
        self.vertices().map(|u| self.degree(&u)).sum()
    }

    fn has_edge(&self) -> bool {
        self.vertices().any(|u| self.degree(&u) > 0)
    }

    fn target(&self, uv: &EdgeDescriptorOf<Self>) -> Option<VertexDescriptorOf<Self>> {
        self.find_vertex(&self.target_id(uv))
    }

    /// First out-edge of `uid` that reaches `vid`.
    fn find_vertex_edge(
        &self,
        uid: &Self::VertexId,
        vid: &Self::VertexId,
    ) -> Option<EdgeDescriptorOf<Self>> {
        let u = self.find_vertex(uid)?;
        let mut it = self.edges(&u);
        it.find(|uv| &self.target_id(uv) == vid)
    }

    fn contains_edge(&self, uid: &Self::VertexId, vid: &Self::VertexId) -> bool {
        self.find_vertex_edge(uid, vid).is_some()
    }

    fn num_partitions(&self) -> usize {
        1
    }

    fn partition_id(&self, _u: &VertexDescriptorOf<Self>) -> usize {
        0
    }
}

/// Graphs that can name the source of an out-edge.
pub trait SourcedAdjacencyList: AdjacencyList {
    fn source_id(&self, uv: &EdgeDescriptorOf<Self>) -> Self::VertexId;

    fn source(&self, uv: &EdgeDescriptorOf<Self>) -> VertexDescriptorOf<Self> {
        uv.source().clone()
    }
}

/// Graphs keeping reverse adjacency.
pub trait BidirectionalAdjacencyList: AdjacencyList {
    type InEdgeStorage: Clone + Eq + Ord + Hash + Debug;
    type InEdgeIter<'a>: Iterator<Item = EdgeDescriptor<Self::InEdgeStorage, Self::VertexStorage, InEdge>>
        + ExactSizeIterator
        + Clone
    where
        Self: 'a;

    /// Edges whose target is `u`.
    fn in_edges(&self, u: &VertexDescriptorOf<Self>) -> Self::InEdgeIter<'_>;
    /// The true origin of an in-edge, read from the reverse container.
    fn in_source_id(&self, uv: &InEdgeDescriptorOf<Self>) -> Self::VertexId;

    fn in_degree(&self, u: &VertexDescriptorOf<Self>) -> usize {
        self.in_edges(u).len()
    }

    fn in_target_id(&self, uv: &InEdgeDescriptorOf<Self>) -> Self::VertexId {
        self.vertex_id(uv.target())
    }
}

pub trait VertexValues: AdjacencyList {
    type VertexValue;

    fn vertex_value(&self, u: &VertexDescriptorOf<Self>) -> &Self::VertexValue;
}

pub trait VertexValuesMut: VertexValues {
    fn vertex_value_mut(&mut self, u: &VertexDescriptorOf<Self>) -> &mut Self::VertexValue;
}

/// Graphs whose edges carry a payload.
///
/// The payload is a plain reference for most containers and a tuple of
/// references for multi-property tuple edges.
pub trait EdgeValues: AdjacencyList {
    type EdgeValue<'a>
    where
        Self: 'a;

    fn edge_value(&self, uv: &EdgeDescriptorOf<Self>) -> Self::EdgeValue<'_>;
}

pub trait EdgeValuesMut: EdgeValues {
    type EdgeValueMut<'a>
    where
        Self: 'a;

    fn edge_value_mut(&mut self, uv: &EdgeDescriptorOf<Self>) -> Self::EdgeValueMut<'_>;
}

pub trait InEdgeValues: BidirectionalAdjacencyList + EdgeValues {
    fn in_edge_value(&self, uv: &InEdgeDescriptorOf<Self>) -> Self::EdgeValue<'_>;
}

pub trait HasGraphValue {
    type GraphValue;

    fn graph_value(&self) -> &Self::GraphValue;
}
