//! Compile time switches for the optional parts of edges and vertices.
//!
//! An absent facet stores `()` and offers no accessor, so asking for it is a
//! type error rather than a runtime miss.
use crate::id::VertexKey;
use crate::store::NoInEdges;
use std::fmt::Debug;
use std::hash::Hash;
use std::marker::PhantomData;

/// Whether each edge stores the id of the vertex it leaves.
pub trait SourceFacet<VId> {
    const SOURCED: bool;
    type Slot: Clone + Eq + Ord + Hash + Debug;

    fn make(source_id: VId) -> Self::Slot;
}

/// Edges store their source id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Sourced;

/// Edges only know their target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Unsourced;

impl<VId: VertexKey> SourceFacet<VId> for Sourced {
    const SOURCED: bool = true;
    type Slot = VId;

    fn make(source_id: VId) -> VId {
        source_id
    }
}

impl<VId> SourceFacet<VId> for Unsourced {
    const SOURCED: bool = false;
    type Slot = ();

    fn make(_: VId) {}
}

/// An optional user payload on edges, vertices or the graph.
pub trait ValueFacet {
    const PRESENT: bool;
    type Slot;
}

/// No payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct NoValue;

/// A payload of type `T`.
pub struct Value<T>(PhantomData<fn() -> T>);

impl ValueFacet for NoValue {
    const PRESENT: bool = false;
    type Slot = ();
}

impl<T> ValueFacet for Value<T> {
    const PRESENT: bool = true;
    type Slot = T;
}

/// The facets that actually store something.
pub trait Valued: ValueFacet {}

impl<T> Valued for Value<T> {}

/// Whether vertices keep reverse adjacency.
///
/// `C` is the edge container the reverse adjacency would copy. Only
/// [`Sourced`] graphs may be [`Bidirectional`]: an in-edge that does not store
/// its source cannot tell where it came from.
pub trait DirectionFacet<S, C> {
    const BIDIRECTIONAL: bool;
    type InEdges;
}

/// Out-edges only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Unidirectional;

/// Out-edges plus one in-edge container per vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Bidirectional;

impl<S, C> DirectionFacet<S, C> for Unidirectional {
    const BIDIRECTIONAL: bool = false;
    type InEdges = NoInEdges;
}

impl<C> DirectionFacet<Sourced, C> for Bidirectional {
    const BIDIRECTIONAL: bool = true;
    type InEdges = C;
}
