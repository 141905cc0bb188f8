use crate::descriptor::{Keyed, VertexPosition};
use crate::id::{IndexId, VertexKey};
use ahash::RandomState;
use std::collections::{btree_map, hash_map, BTreeMap, HashMap, VecDeque};
use std::iter::Map;
use std::ops::Range;

/// Position based access to a vertex container, independent of the id type.
pub trait VertexRange: Default {
    type Vertex;
    type VertexPos: VertexPosition;
    type VertexPositions<'a>: Iterator<Item = Self::VertexPos> + Clone
    where
        Self: 'a;
    /// The raw element: `&V`, or `(&K, &V)` for associative containers.
    type Underlying<'a>
    where
        Self: 'a;

    const ASSOCIATIVE: bool;

    fn vertex_count(&self) -> usize;
    fn vertex_positions(&self) -> Self::VertexPositions<'_>;

    /// Panics on a position that does not denote a vertex.
    fn vertex(&self, pos: &Self::VertexPos) -> &Self::Vertex;
    /// Panics on a position that does not denote a vertex.
    fn vertex_mut(&mut self, pos: &Self::VertexPos) -> &mut Self::Vertex;
    fn vertex_get(&self, pos: &Self::VertexPos) -> Option<&Self::Vertex>;
    fn vertex_get_mut(&mut self, pos: &Self::VertexPos) -> Option<&mut Self::Vertex>;
    fn underlying(&self, pos: &Self::VertexPos) -> Self::Underlying<'_>;

    /// Default-constructs vertices up to `len`. Never shrinks.
    /// Associative containers ignore it.
    fn grow_to(&mut self, len: usize);
    fn reserve_vertices(&mut self, additional: usize);
    fn clear_vertices(&mut self);
}

/// Id based access on top of [`VertexRange`].
pub trait VertexStore<Id>: VertexRange {
    fn id_of(&self, pos: &Self::VertexPos) -> Id;
    fn position_of(&self, id: &Id) -> Option<Self::VertexPos>;

    /// Index an id maps to in a sequential container, `None` for
    /// associative ones or ids that are not indices.
    fn index_of(id: &Id) -> Option<usize>;
    /// The id stored at `index` of a sequential container.
    fn id_at_index(index: usize) -> Option<Id>;

    /// The vertex behind `id`. Associative containers insert it on demand,
    /// sequential ones return `None` when it is out of range.
    fn ensure(&mut self, id: &Id) -> Option<&mut Self::Vertex>;
}

macro_rules! sequential_store {
    ($($container:ident),*) => {$(
        impl<V: Default> VertexRange for $container<V> {
            type Vertex = V;
            type VertexPos = usize;
            type VertexPositions<'a> = Range<usize> where Self: 'a;
            type Underlying<'a> = &'a V where Self: 'a;

            const ASSOCIATIVE: bool = false;

            fn vertex_count(&self) -> usize {
                self.len()
            }

            fn vertex_positions(&self) -> Range<usize> {
                0..self.len()
            }

            fn vertex(&self, pos: &usize) -> &V {
                &self[*pos]
            }

            fn vertex_mut(&mut self, pos: &usize) -> &mut V {
                &mut self[*pos]
            }

            fn vertex_get(&self, pos: &usize) -> Option<&V> {
                (*pos < self.len()).then(|| &self[*pos])
            }

            fn vertex_get_mut(&mut self, pos: &usize) -> Option<&mut V> {
                if *pos < self.len() {
                    Some(&mut self[*pos])
                } else {
                    None
                }
            }

            fn underlying(&self, pos: &usize) -> &V {
                &self[*pos]
            }

            fn grow_to(&mut self, len: usize) {
                if self.len() < len {
                    self.resize_with(len, V::default);
                }
            }

            fn reserve_vertices(&mut self, additional: usize) {
                self.reserve(additional);
            }

            fn clear_vertices(&mut self) {
                self.clear();
            }
        }

        impl<V: Default, Id: IndexId> VertexStore<Id> for $container<V> {
            fn id_of(&self, pos: &usize) -> Id {
                Id::from_index(*pos)
            }

            fn position_of(&self, id: &Id) -> Option<usize> {
                id.to_index().filter(|&i| i < self.len())
            }

            fn index_of(id: &Id) -> Option<usize> {
                id.to_index()
            }

            fn id_at_index(index: usize) -> Option<Id> {
                Id::try_from_index(index)
            }

            fn ensure(&mut self, id: &Id) -> Option<&mut V> {
                let idx = id.to_index()?;
                self.vertex_get_mut(&idx)
            }
        }
    )*};
}

sequential_store!(Vec, VecDeque);

fn keyed<K: Clone>(k: &K) -> Keyed<K> {
    Keyed(k.clone())
}

impl<K: VertexKey, V: Default> VertexRange for BTreeMap<K, V> {
    type Vertex = V;
    type VertexPos = Keyed<K>;
    type VertexPositions<'a> = Map<btree_map::Keys<'a, K, V>, fn(&K) -> Keyed<K>> where Self: 'a;
    type Underlying<'a> = (&'a K, &'a V) where Self: 'a;

    const ASSOCIATIVE: bool = true;

    fn vertex_count(&self) -> usize {
        self.len()
    }

    fn vertex_positions(&self) -> Self::VertexPositions<'_> {
        self.keys().map(keyed::<K> as fn(&K) -> Keyed<K>)
    }

    fn vertex(&self, pos: &Keyed<K>) -> &V {
        &self[&pos.0]
    }

    fn vertex_mut(&mut self, pos: &Keyed<K>) -> &mut V {
        match self.get_mut(&pos.0) {
            Some(v) => v,
            None => panic!("no vertex keyed {:?}", pos.0),
        }
    }

    fn vertex_get(&self, pos: &Keyed<K>) -> Option<&V> {
        self.get(&pos.0)
    }

    fn vertex_get_mut(&mut self, pos: &Keyed<K>) -> Option<&mut V> {
        self.get_mut(&pos.0)
    }

    fn underlying(&self, pos: &Keyed<K>) -> (&K, &V) {
        match self.get_key_value(&pos.0) {
            Some(kv) => kv,
            None => panic!("no vertex keyed {:?}", pos.0),
        }
    }

    fn grow_to(&mut self, _: usize) {}

    fn reserve_vertices(&mut self, _: usize) {}

    fn clear_vertices(&mut self) {
        self.clear();
    }
}

impl<K: VertexKey, V: Default> VertexStore<K> for BTreeMap<K, V> {
    fn id_of(&self, pos: &Keyed<K>) -> K {
        pos.0.clone()
    }

    fn position_of(&self, id: &K) -> Option<Keyed<K>> {
        self.contains_key(id).then(|| Keyed(id.clone()))
    }

    fn index_of(_: &K) -> Option<usize> {
        None
    }

    fn id_at_index(_: usize) -> Option<K> {
        None
    }

    fn ensure(&mut self, id: &K) -> Option<&mut V> {
        Some(self.entry(id.clone()).or_default())
    }
}

impl<K: VertexKey, V: Default> VertexRange for HashMap<K, V, RandomState> {
    type Vertex = V;
    type VertexPos = Keyed<K>;
    type VertexPositions<'a> = Map<hash_map::Keys<'a, K, V>, fn(&K) -> Keyed<K>> where Self: 'a;
    type Underlying<'a> = (&'a K, &'a V) where Self: 'a;

    const ASSOCIATIVE: bool = true;

    fn vertex_count(&self) -> usize {
        self.len()
    }

    fn vertex_positions(&self) -> Self::VertexPositions<'_> {
        self.keys().map(keyed::<K> as fn(&K) -> Keyed<K>)
    }

    fn vertex(&self, pos: &Keyed<K>) -> &V {
        &self[&pos.0]
    }

    fn vertex_mut(&mut self, pos: &Keyed<K>) -> &mut V {
        match self.get_mut(&pos.0) {
            Some(v) => v,
            None => panic!("no vertex keyed {:?}", pos.0),
        }
    }

    fn vertex_get(&self, pos: &Keyed<K>) -> Option<&V> {
        self.get(&pos.0)
    }

    fn vertex_get_mut(&mut self, pos: &Keyed<K>) -> Option<&mut V> {
        self.get_mut(&pos.0)
    }

    fn underlying(&self, pos: &Keyed<K>) -> (&K, &V) {
        match self.get_key_value(&pos.0) {
            Some(kv) => kv,
            None => panic!("no vertex keyed {:?}", pos.0),
        }
    }

    fn grow_to(&mut self, _: usize) {}

    fn reserve_vertices(&mut self, additional: usize) {
        self.reserve(additional);
    }

    fn clear_vertices(&mut self) {
        self.clear();
    }
}

impl<K: VertexKey, V: Default> VertexStore<K> for HashMap<K, V, RandomState> {
    fn id_of(&self, pos: &Keyed<K>) -> K {
        pos.0.clone()
    }

    fn position_of(&self, id: &K) -> Option<Keyed<K>> {
        self.contains_key(id).then(|| Keyed(id.clone()))
    }

    fn index_of(_: &K) -> Option<usize> {
        None
    }

    fn id_at_index(_: usize) -> Option<K> {
        None
    }

    fn ensure(&mut self, id: &K) -> Option<&mut V> {
        Some(self.entry(id.clone()).or_default())
    }
}
