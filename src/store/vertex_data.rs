use super::{EdgeRange, EdgeStore, ForwardList, List, SetElement};
use ahash::RandomState;
use std::collections::{BTreeMap, BTreeSet, HashSet, VecDeque};
use std::fmt::Debug;
use std::hash::Hash;

/// Vertex data owning an out-edge container.
///
/// Raw edge containers are their own vertex data.
pub trait VertexEdges {
    type Edge;
    type Edges: EdgeRange<Edge = Self::Edge>;

    fn out_edges(&self) -> &Self::Edges;
}

pub trait VertexEdgesMut: VertexEdges {
    fn out_edges_mut(&mut self) -> &mut Self::Edges;
}

/// Vertex data that also owns a reverse (in-edge) container.
pub trait VertexInEdges {
    type InEdge;
    type InEdges: EdgeRange<Edge = Self::InEdge>;

    fn in_edges(&self) -> &Self::InEdges;
}

macro_rules! raw_vertex_edges {
    ($({$($gen:tt)*} $container:ty;)*) => {$(
        impl<$($gen)*> VertexEdges for $container {
            type Edge = <$container as EdgeRange>::Edge;
            type Edges = $container;

            fn out_edges(&self) -> &Self {
                self
            }
        }

        impl<$($gen)*> VertexEdgesMut for $container {
            fn out_edges_mut(&mut self) -> &mut Self {
                self
            }
        }
    )*};
}

raw_vertex_edges! {
    {E} Vec<E>;
    {E} VecDeque<E>;
    {E} List<E>;
    {E} ForwardList<E>;
    {E: SetElement} BTreeSet<E>;
    {E: SetElement} HashSet<E, RandomState>;
    {K: Clone + Eq + Ord + Hash + Debug, E} BTreeMap<K, E>;
}

/// Placeholder for the reverse container of unidirectional graphs.
///
/// Zero sized, and it offers no edge access at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct NoInEdges;

/// The reverse container slot of a vertex, which may be absent.
pub trait InEdgeSlot<K, E>: Default {
    const BIDIRECTIONAL: bool;

    /// `edge` is only invoked when the slot really stores in-edges.
    fn insert_in_edge<F: FnOnce() -> E>(&mut self, key: K, edge: F);
    fn reserve_in_edges(&mut self, additional: usize);
}

impl<K, E> InEdgeSlot<K, E> for NoInEdges {
    const BIDIRECTIONAL: bool = false;

    fn insert_in_edge<F: FnOnce() -> E>(&mut self, _: K, _: F) {}

    fn reserve_in_edges(&mut self, _: usize) {}
}

macro_rules! in_edge_slot {
    ($({$($gen:tt)*} $container:ty;)*) => {$(
        impl<$($gen)*> InEdgeSlot<K, E> for $container {
            const BIDIRECTIONAL: bool = true;

            fn insert_in_edge<F: FnOnce() -> E>(&mut self, key: K, edge: F) {
                self.insert_edge(key, edge());
            }

            fn reserve_in_edges(&mut self, additional: usize) {
                EdgeStore::<K>::reserve_edges(self, additional);
            }
        }
    )*};
}

in_edge_slot! {
    {K, E} Vec<E>;
    {K, E} VecDeque<E>;
    {K, E} List<E>;
    {K, E} ForwardList<E>;
    {K, E: SetElement} BTreeSet<E>;
    {K, E: SetElement} HashSet<E, RandomState>;
    {K: Clone + Eq + Ord + Hash + Debug, E} BTreeMap<K, E>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_slot_never_builds_the_edge() {
        let mut slot = NoInEdges;
        InEdgeSlot::<u32, u32>::insert_in_edge(&mut slot, 0, || unreachable!());
        assert!(!<NoInEdges as InEdgeSlot<u32, u32>>::BIDIRECTIONAL);
        assert_eq!(std::mem::size_of::<NoInEdges>(), 0);
    }

    #[test]
    fn present_slot_files_edges_by_key() {
        let mut slot: BTreeMap<u32, (u32, u32)> = BTreeMap::new();
        slot.insert_in_edge(4, || (4, 9));
        slot.insert_in_edge(1, || (1, 9));
        assert_eq!(slot.keys().copied().collect::<Vec<_>>(), vec![1, 4]);
        assert_eq!(slot.out_edges().size(), 2);
    }

    #[test]
    fn present_slot_reserves_room() {
        let mut slot: Vec<(u32, u32)> = vec![];
        InEdgeSlot::<u32, (u32, u32)>::reserve_in_edges(&mut slot, 16);
        assert!(slot.capacity() >= 16);
        InEdgeSlot::<u32, (u32, u32)>::insert_in_edge(&mut slot, 3, || (3, 0));
        assert_eq!(slot, vec![(3, 0)]);

        let mut list: List<u32> = List::new();
        InEdgeSlot::<u32, u32>::reserve_in_edges(&mut list, 4);
        InEdgeSlot::<u32, u32>::insert_in_edge(&mut list, 2, || 2);
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![2]);
    }
}
