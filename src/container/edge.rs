use super::facet::{SourceFacet, Sourced, Value, ValueFacet};
use crate::id::VertexKey;
use crate::shape::{EdgeShape, SourcedShape};
use crate::store::SetElement;
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt::{self, Debug};
use std::hash::{Hash, Hasher};

/// The identity of a [`DynamicEdge`]: `(source, target)` when sourced, the
/// target alone otherwise.
pub struct EdgeKey<VId, S: SourceFacet<VId>> {
    source: S::Slot,
    target: VId,
}

impl<VId, S: SourceFacet<VId>> EdgeKey<VId, S> {
    pub fn new(source: S::Slot, target: VId) -> Self {
        Self { source, target }
    }

    pub fn target_id(&self) -> &VId {
        &self.target
    }
}

impl<VId: VertexKey> EdgeKey<VId, Sourced> {
    pub fn source_id(&self) -> &VId {
        &self.source
    }
}

impl<VId: Clone, S: SourceFacet<VId>> Clone for EdgeKey<VId, S> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            target: self.target.clone(),
        }
    }
}

impl<VId: PartialEq, S: SourceFacet<VId>> PartialEq for EdgeKey<VId, S> {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source && self.target == other.target
    }
}

impl<VId: Eq, S: SourceFacet<VId>> Eq for EdgeKey<VId, S> {}

impl<VId: Ord, S: SourceFacet<VId>> PartialOrd for EdgeKey<VId, S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<VId: Ord, S: SourceFacet<VId>> Ord for EdgeKey<VId, S> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.source
            .cmp(&other.source)
            .then_with(|| self.target.cmp(&other.target))
    }
}

impl<VId: Hash, S: SourceFacet<VId>> Hash for EdgeKey<VId, S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.source.hash(state);
        self.target.hash(state);
    }
}

impl<VId: Debug, S: SourceFacet<VId>> Debug for EdgeKey<VId, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if S::SOURCED {
            write!(f, "{:?} -> {:?}", self.source, self.target)
        } else {
            write!(f, "-> {:?}", self.target)
        }
    }
}

/// An edge of a [`DynamicGraph`](super::DynamicGraph).
///
/// Always carries its target id. Source id and value are facets selected by
/// `S` and `EV`. Ordering, equality and hashing look at the [`EdgeKey`] only,
/// never at the value.
pub struct DynamicEdge<VId, S: SourceFacet<VId>, EV: ValueFacet> {
    key: EdgeKey<VId, S>,
    value: EV::Slot,
}

impl<VId, S: SourceFacet<VId>, EV: ValueFacet> DynamicEdge<VId, S, EV> {
    pub fn new(source: S::Slot, target: VId, value: EV::Slot) -> Self {
        Self {
            key: EdgeKey::new(source, target),
            value,
        }
    }

    pub fn key(&self) -> &EdgeKey<VId, S> {
        &self.key
    }

    pub fn target_id(&self) -> &VId {
        &self.key.target
    }

    pub(crate) fn value_slot(&self) -> &EV::Slot {
        &self.value
    }

    pub(crate) fn value_slot_mut(&mut self) -> &mut EV::Slot {
        &mut self.value
    }
}

impl<VId: VertexKey, EV: ValueFacet> DynamicEdge<VId, Sourced, EV> {
    pub fn source_id(&self) -> &VId {
        &self.key.source
    }
}

impl<VId, S: SourceFacet<VId>, T> DynamicEdge<VId, S, Value<T>> {
    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }
}

impl<VId, S, EV> Clone for DynamicEdge<VId, S, EV>
where
    VId: Clone,
    S: SourceFacet<VId>,
    EV: ValueFacet,
    EV::Slot: Clone,
{
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            value: self.value.clone(),
        }
    }
}

impl<VId, S, EV> Debug for DynamicEdge<VId, S, EV>
where
    VId: Debug,
    S: SourceFacet<VId>,
    EV: ValueFacet,
    EV::Slot: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if EV::PRESENT {
            write!(f, "{:?} ({:?})", self.key, self.value)
        } else {
            write!(f, "{:?}", self.key)
        }
    }
}

impl<VId: PartialEq, S: SourceFacet<VId>, EV: ValueFacet> PartialEq for DynamicEdge<VId, S, EV> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<VId: Eq, S: SourceFacet<VId>, EV: ValueFacet> Eq for DynamicEdge<VId, S, EV> {}

impl<VId: Ord, S: SourceFacet<VId>, EV: ValueFacet> PartialOrd for DynamicEdge<VId, S, EV> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<VId: Ord, S: SourceFacet<VId>, EV: ValueFacet> Ord for DynamicEdge<VId, S, EV> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

impl<VId: Hash, S: SourceFacet<VId>, EV: ValueFacet> Hash for DynamicEdge<VId, S, EV> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl<VId, S: SourceFacet<VId>, EV: ValueFacet> Borrow<EdgeKey<VId, S>> for DynamicEdge<VId, S, EV> {
    fn borrow(&self) -> &EdgeKey<VId, S> {
        &self.key
    }
}

impl<VId: VertexKey, S: SourceFacet<VId>, EV: ValueFacet> SetElement for DynamicEdge<VId, S, EV> {
    type Key = EdgeKey<VId, S>;

    fn set_key(&self) -> EdgeKey<VId, S> {
        self.key.clone()
    }
}

impl<VId, S: SourceFacet<VId>, EV: ValueFacet> EdgeShape for DynamicEdge<VId, S, EV> {
    type Id = VId;
    type Inner<'a> = &'a EV::Slot where Self: 'a;
    type InnerMut<'a> = &'a mut EV::Slot where Self: 'a;

    fn target_id(&self) -> &VId {
        &self.key.target
    }

    fn inner_value(&self) -> &EV::Slot {
        &self.value
    }

    fn inner_value_mut(&mut self) -> &mut EV::Slot {
        &mut self.value
    }
}

impl<VId: VertexKey, EV: ValueFacet> SourcedShape for DynamicEdge<VId, Sourced, EV> {
    fn source_id(&self) -> &VId {
        &self.key.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::{NoValue, Unsourced};
    use std::collections::BTreeSet;

    type Weighted = DynamicEdge<u32, Sourced, Value<f64>>;

    #[test]
    fn value_is_ignored_by_equality() {
        let a = Weighted::new(0, 1, 1.0);
        let b = Weighted::new(0, 1, 2.0);
        assert_eq!(a, b);
        assert_eq!(*a.value(), 1.0);
    }

    #[test]
    fn sourced_edges_order_by_source_then_target() {
        let mut s = BTreeSet::new();
        s.insert(Weighted::new(1, 0, 0.0));
        s.insert(Weighted::new(0, 2, 0.0));
        s.insert(Weighted::new(0, 1, 0.0));
        let keys: Vec<_> = s.iter().map(|e| (*e.source_id(), *e.target_id())).collect();
        assert_eq!(keys, vec![(0, 1), (0, 2), (1, 0)]);
        assert!(s.contains(&EdgeKey::<u32, Sourced>::new(0, 2)));
    }

    #[test]
    fn unsourced_edges_order_by_target_alone() {
        let a = DynamicEdge::<u8, Unsourced, NoValue>::new((), 5, ());
        let b = DynamicEdge::<u8, Unsourced, NoValue>::new((), 3, ());
        assert!(b < a);
        assert_eq!(format!("{:?}", a), "-> 5");
    }

    #[test]
    fn absent_facets_cost_nothing() {
        assert_eq!(
            std::mem::size_of::<DynamicEdge<u32, Unsourced, NoValue>>(),
            std::mem::size_of::<u32>()
        );
    }
}
