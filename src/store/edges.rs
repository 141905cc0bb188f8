use super::list::{ForwardList, List, Slots};
use ahash::RandomState;
use std::borrow::Borrow;
use std::collections::{btree_map, btree_set, hash_set, BTreeMap, BTreeSet, HashSet, VecDeque};
use std::fmt::Debug;
use std::hash::Hash;
use std::iter::Map;
use std::ops::Range;

/// Position based read access to one vertex's edge container.
pub trait EdgeRange {
    type Edge;
    type Position: Clone + Eq + Ord + Hash + Debug;
    type Positions<'a>: Iterator<Item = Self::Position> + Clone
    where
        Self: 'a;

    fn size(&self) -> usize;
    fn positions(&self) -> Self::Positions<'_>;
    /// Panics on a position that does not denote an edge.
    fn at(&self, pos: &Self::Position) -> &Self::Edge;
    fn get_at(&self, pos: &Self::Position) -> Option<&Self::Edge>;
}

/// Edge containers whose elements may be changed in place.
///
/// Sets are left out: mutating a set element could break its ordering.
pub trait EdgeRangeMut: EdgeRange {
    /// Panics on a position that does not denote an edge.
    fn at_mut(&mut self, pos: &Self::Position) -> &mut Self::Edge;
    fn get_at_mut(&mut self, pos: &Self::Position) -> Option<&mut Self::Edge>;
}

/// Edge containers a graph can be loaded into.
///
/// `key` is the id the edge is filed under: the target for out-edges, the
/// source for in-edges. Only keyed containers look at it.
pub trait EdgeStore<K>: EdgeRange + Default {
    /// Appends for sequences, prepends for [`ForwardList`], and inserts if
    /// absent for sets and maps. `false` when the edge was dropped as a
    /// duplicate.
    fn insert_edge(&mut self, key: K, edge: Self::Edge) -> bool;

    /// No-op for containers that cannot reserve.
    fn reserve_edges(&mut self, _additional: usize) {}
}

/// Elements of set based edge containers, looked up by a cloneable key.
pub trait SetElement: Ord + Hash + Borrow<Self::Key> {
    type Key: Clone + Eq + Ord + Hash + Debug;

    fn set_key(&self) -> Self::Key;
}

macro_rules! integral_set_element {
    ($($t:ty),*) => {$(
        impl SetElement for $t {
            type Key = $t;

            fn set_key(&self) -> $t {
                *self
            }
        }
    )*};
}

integral_set_element!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

impl SetElement for String {
    type Key = String;

    fn set_key(&self) -> String {
        self.clone()
    }
}

fn vacant(pos: &dyn Debug) -> ! {
    panic!("no edge at position {:?}", pos)
}

impl<E> EdgeRange for Vec<E> {
    type Edge = E;
    type Position = usize;
    type Positions<'a> = Range<usize> where Self: 'a;

    fn size(&self) -> usize {
        self.len()
    }

    fn positions(&self) -> Range<usize> {
        0..self.len()
    }

    fn at(&self, pos: &usize) -> &E {
        &self[*pos]
    }

    fn get_at(&self, pos: &usize) -> Option<&E> {
        self.as_slice().get(*pos)
    }
}

impl<E> EdgeRangeMut for Vec<E> {
    fn at_mut(&mut self, pos: &usize) -> &mut E {
        &mut self[*pos]
    }

    fn get_at_mut(&mut self, pos: &usize) -> Option<&mut E> {
        self.as_mut_slice().get_mut(*pos)
    }
}

impl<K, E> EdgeStore<K> for Vec<E> {
    fn insert_edge(&mut self, _: K, edge: E) -> bool {
        self.push(edge);
        true
    }

    fn reserve_edges(&mut self, additional: usize) {
        self.reserve(additional);
    }
}

impl<E> EdgeRange for VecDeque<E> {
    type Edge = E;
    type Position = usize;
    type Positions<'a> = Range<usize> where Self: 'a;

    fn size(&self) -> usize {
        self.len()
    }

    fn positions(&self) -> Range<usize> {
        0..self.len()
    }

    fn at(&self, pos: &usize) -> &E {
        &self[*pos]
    }

    fn get_at(&self, pos: &usize) -> Option<&E> {
        VecDeque::get(self, *pos)
    }
}

impl<E> EdgeRangeMut for VecDeque<E> {
    fn at_mut(&mut self, pos: &usize) -> &mut E {
        &mut self[*pos]
    }

    fn get_at_mut(&mut self, pos: &usize) -> Option<&mut E> {
        VecDeque::get_mut(self, *pos)
    }
}

impl<K, E> EdgeStore<K> for VecDeque<E> {
    fn insert_edge(&mut self, _: K, edge: E) -> bool {
        self.push_back(edge);
        true
    }

    fn reserve_edges(&mut self, additional: usize) {
        self.reserve(additional);
    }
}

macro_rules! linked_edges {
    ($($list:ident => $insert:ident),*) => {$(
        // Positions are node slots, so locating an edge is one index.
        impl<E> EdgeRange for $list<E> {
            type Edge = E;
            type Position = usize;
            type Positions<'a> = Slots<'a, E> where Self: 'a;

            fn size(&self) -> usize {
                self.len()
            }

            fn positions(&self) -> Slots<'_, E> {
                self.slots()
            }

            fn at(&self, pos: &usize) -> &E {
                self.get(*pos).unwrap_or_else(|| vacant(pos))
            }

            fn get_at(&self, pos: &usize) -> Option<&E> {
                self.get(*pos)
            }
        }

        impl<E> EdgeRangeMut for $list<E> {
            fn at_mut(&mut self, pos: &usize) -> &mut E {
                let p = *pos;
                match self.get_mut(p) {
                    Some(e) => e,
                    None => vacant(&p),
                }
            }

            fn get_at_mut(&mut self, pos: &usize) -> Option<&mut E> {
                self.get_mut(*pos)
            }
        }

        impl<K, E> EdgeStore<K> for $list<E> {
            fn insert_edge(&mut self, _: K, edge: E) -> bool {
                self.$insert(edge);
                true
            }

            fn reserve_edges(&mut self, additional: usize) {
                self.reserve(additional);
            }
        }
    )*};
}

linked_edges!(List => push_back, ForwardList => push_front);

impl<E: SetElement> EdgeRange for BTreeSet<E> {
    type Edge = E;
    type Position = E::Key;
    type Positions<'a> = Map<btree_set::Iter<'a, E>, fn(&E) -> E::Key> where Self: 'a;

    fn size(&self) -> usize {
        self.len()
    }

    fn positions(&self) -> Self::Positions<'_> {
        self.iter().map(E::set_key as fn(&E) -> E::Key)
    }

    fn at(&self, pos: &E::Key) -> &E {
        self.get_at(pos).unwrap_or_else(|| vacant(pos))
    }

    fn get_at(&self, pos: &E::Key) -> Option<&E> {
        BTreeSet::get(self, pos)
    }
}

impl<K, E: SetElement> EdgeStore<K> for BTreeSet<E> {
    fn insert_edge(&mut self, _: K, edge: E) -> bool {
        self.insert(edge)
    }
}

impl<E: SetElement> EdgeRange for HashSet<E, RandomState> {
    type Edge = E;
    type Position = E::Key;
    type Positions<'a> = Map<hash_set::Iter<'a, E>, fn(&E) -> E::Key> where Self: 'a;

    fn size(&self) -> usize {
        self.len()
    }

    fn positions(&self) -> Self::Positions<'_> {
        self.iter().map(E::set_key as fn(&E) -> E::Key)
    }

    fn at(&self, pos: &E::Key) -> &E {
        self.get_at(pos).unwrap_or_else(|| vacant(pos))
    }

    fn get_at(&self, pos: &E::Key) -> Option<&E> {
        HashSet::get(self, pos)
    }
}

impl<K, E: SetElement> EdgeStore<K> for HashSet<E, RandomState> {
    fn insert_edge(&mut self, _: K, edge: E) -> bool {
        self.insert(edge)
    }

    fn reserve_edges(&mut self, additional: usize) {
        self.reserve(additional);
    }
}

fn cloned_key<K: Clone>(k: &K) -> K {
    k.clone()
}

impl<K, E> EdgeRange for BTreeMap<K, E>
where
    K: Clone + Eq + Ord + Hash + Debug,
{
    type Edge = E;
    type Position = K;
    type Positions<'a> = Map<btree_map::Keys<'a, K, E>, fn(&K) -> K> where Self: 'a;

    fn size(&self) -> usize {
        self.len()
    }

    fn positions(&self) -> Self::Positions<'_> {
        self.keys().map(cloned_key::<K> as fn(&K) -> K)
    }

    fn at(&self, pos: &K) -> &E {
        self.get_at(pos).unwrap_or_else(|| vacant(pos))
    }

    fn get_at(&self, pos: &K) -> Option<&E> {
        BTreeMap::get(self, pos)
    }
}

impl<K, E> EdgeRangeMut for BTreeMap<K, E>
where
    K: Clone + Eq + Ord + Hash + Debug,
{
    fn at_mut(&mut self, pos: &K) -> &mut E {
        match BTreeMap::get_mut(self, pos) {
            Some(e) => e,
            None => vacant(pos),
        }
    }

    fn get_at_mut(&mut self, pos: &K) -> Option<&mut E> {
        BTreeMap::get_mut(self, pos)
    }
}

impl<K, E> EdgeStore<K> for BTreeMap<K, E>
where
    K: Clone + Eq + Ord + Hash + Debug,
{
    fn insert_edge(&mut self, key: K, edge: E) -> bool {
        match self.entry(key) {
            btree_map::Entry::Vacant(slot) => {
                slot.insert(edge);
                true
            }
            btree_map::Entry::Occupied(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load<C: EdgeStore<u32, Edge = u32>>(edges: &[u32]) -> C {
        let mut c = C::default();
        c.reserve_edges(edges.len());
        for e in edges {
            c.insert_edge(*e, *e);
        }
        c
    }

    fn targets<C: EdgeRange<Edge = u32>>(c: &C) -> Vec<u32> {
        c.positions().map(|p| *c.at(&p)).collect()
    }

    #[test]
    fn sequences_keep_insertion_order() {
        assert_eq!(targets(&load::<Vec<u32>>(&[3, 1, 2])), vec![3, 1, 2]);
        assert_eq!(targets(&load::<VecDeque<u32>>(&[3, 1, 2])), vec![3, 1, 2]);
        assert_eq!(targets(&load::<List<u32>>(&[3, 1, 2])), vec![3, 1, 2]);
    }

    #[test]
    fn forward_list_prepends() {
        assert_eq!(targets(&load::<ForwardList<u32>>(&[3, 1, 2])), vec![2, 1, 3]);
    }

    #[test]
    fn sets_and_maps_drop_duplicates() {
        assert_eq!(targets(&load::<BTreeSet<u32>>(&[3, 1, 3, 2])), vec![1, 2, 3]);
        let mut hashed = targets(&load::<HashSet<u32, RandomState>>(&[3, 1, 3]));
        hashed.sort();
        assert_eq!(hashed, vec![1, 3]);
        assert_eq!(targets(&load::<BTreeMap<u32, u32>>(&[5, 4, 5])), vec![4, 5]);
        let mut set = BTreeSet::new();
        assert!(EdgeStore::<u32>::insert_edge(&mut set, 1, 1u32));
        assert!(!EdgeStore::<u32>::insert_edge(&mut set, 1, 1u32));
    }

    #[test]
    fn checked_access_misses_cleanly() {
        let c = load::<List<u32>>(&[1]);
        assert_eq!(c.get_at(&1), None);
        let s = load::<BTreeSet<u32>>(&[1]);
        assert_eq!(s.get_at(&7), None);
        assert_eq!(s.get_at(&1), Some(&1));
    }

    #[test]
    #[should_panic]
    fn unchecked_access_panics_on_a_stale_position() {
        let c = load::<Vec<u32>>(&[1]);
        let _ = c.at(&3);
    }

    #[test]
    fn in_place_mutation() {
        let mut c = load::<ForwardList<u32>>(&[1, 2]);
        let first = c.positions().next().unwrap();
        *c.at_mut(&first) = 7;
        assert_eq!(targets(&c), vec![7, 1]);
    }

    #[test]
    fn list_positions_resolve_without_walking() {
        let c = load::<List<u32>>(&(0..1000).collect::<Vec<_>>());
        let last = c.positions().last().unwrap();
        assert_eq!(last, 999);
        assert_eq!(c.at(&last), &999);
        let f = load::<ForwardList<u32>>(&[4, 5, 6]);
        let pos: Vec<_> = f.positions().collect();
        assert_eq!(pos, vec![2, 1, 0]);
        assert_eq!(f.at(&0), &4);
    }
}
