use super::facet::{Value, ValueFacet};
use crate::store::{EdgeRange, VertexEdges, VertexEdgesMut, VertexInEdges};
use std::fmt::{self, Debug};

/// A vertex of a [`DynamicGraph`](super::DynamicGraph).
///
/// `E` holds the out-edges. `I` is either [`NoInEdges`](crate::store::NoInEdges) or, for
/// bidirectional graphs, a second `E` holding the in-edges. `VV` selects the
/// optional payload.
pub struct DynamicVertex<E, I, VV: ValueFacet> {
    pub(crate) edges: E,
    pub(crate) in_edges: I,
    pub(crate) value: VV::Slot,
}

impl<E, I, VV: ValueFacet> DynamicVertex<E, I, VV> {
    pub fn edges(&self) -> &E {
        &self.edges
    }

    pub fn edges_mut(&mut self) -> &mut E {
        &mut self.edges
    }
}

impl<E, VV: ValueFacet> DynamicVertex<E, E, VV> {
    pub fn in_edges(&self) -> &E {
        &self.in_edges
    }
}

impl<E, I, T> DynamicVertex<E, I, Value<T>> {
    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }
}

impl<E, I, VV> Default for DynamicVertex<E, I, VV>
where
    E: Default,
    I: Default,
    VV: ValueFacet,
    VV::Slot: Default,
{
    fn default() -> Self {
        Self {
            edges: E::default(),
            in_edges: I::default(),
            value: Default::default(),
        }
    }
}

impl<E, I, VV> Clone for DynamicVertex<E, I, VV>
where
    E: Clone,
    I: Clone,
    VV: ValueFacet,
    VV::Slot: Clone,
{
    fn clone(&self) -> Self {
        Self {
            edges: self.edges.clone(),
            in_edges: self.in_edges.clone(),
            value: self.value.clone(),
        }
    }
}

impl<E, I, VV> Debug for DynamicVertex<E, I, VV>
where
    E: Debug,
    I: Debug,
    VV: ValueFacet,
    VV::Slot: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("DynamicVertex");
        s.field("edges", &self.edges);
        s.field("in_edges", &self.in_edges);
        if VV::PRESENT {
            s.field("value", &self.value);
        }
        s.finish()
    }
}

impl<E: EdgeRange, I, VV: ValueFacet> VertexEdges for DynamicVertex<E, I, VV> {
    type Edge = E::Edge;
    type Edges = E;

    fn out_edges(&self) -> &E {
        &self.edges
    }
}

impl<E: EdgeRange, I, VV: ValueFacet> VertexEdgesMut for DynamicVertex<E, I, VV> {
    fn out_edges_mut(&mut self) -> &mut E {
        &mut self.edges
    }
}

impl<E: EdgeRange, VV: ValueFacet> VertexInEdges for DynamicVertex<E, E, VV> {
    type InEdge = E::Edge;
    type InEdges = E;

    fn in_edges(&self) -> &E {
        &self.in_edges
    }
}
