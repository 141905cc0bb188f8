/// A projected edge as consumed by the loaders.
///
/// `EV` is `()` for graphs without edge values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct CopyableEdge<VId, EV = ()> {
    pub source_id: VId,
    pub target_id: VId,
    pub value: EV,
}

impl<VId, EV> CopyableEdge<VId, EV> {
    pub fn new(source_id: VId, target_id: VId, value: EV) -> Self {
        Self {
            source_id,
            target_id,
            value,
        }
    }
}

impl<VId> From<(VId, VId)> for CopyableEdge<VId, ()> {
    fn from((source_id, target_id): (VId, VId)) -> Self {
        Self::new(source_id, target_id, ())
    }
}

impl<VId, EV> From<(VId, VId, EV)> for CopyableEdge<VId, EV> {
    fn from((source_id, target_id, value): (VId, VId, EV)) -> Self {
        Self::new(source_id, target_id, value)
    }
}

/// A projected vertex as consumed by [`load_vertices`](super::DynamicGraph::load_vertices).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct CopyableVertex<VId, VV = ()> {
    pub id: VId,
    pub value: VV,
}

impl<VId, VV> CopyableVertex<VId, VV> {
    pub fn new(id: VId, value: VV) -> Self {
        Self { id, value }
    }
}

impl<VId> From<VId> for CopyableVertex<VId, ()> {
    fn from(id: VId) -> Self {
        Self::new(id, ())
    }
}

impl<VId, VV> From<(VId, VV)> for CopyableVertex<VId, VV> {
    fn from((id, value): (VId, VV)) -> Self {
        Self::new(id, value)
    }
}
