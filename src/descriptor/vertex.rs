use crate::store::VertexRange;
use std::fmt::Debug;
use std::hash::Hash;

/// Storage of a [`VertexDescriptor`].
///
/// `usize` for random access vertex containers, [`Keyed`] for associative ones.
pub trait VertexPosition: Clone + Eq + Ord + Hash + Debug {
    /// What [`VertexDescriptor::vertex_id`] hands out.
    type Id: Debug;
    const RANDOM_ACCESS: bool;

    fn id(&self) -> &Self::Id;
}

impl VertexPosition for usize {
    type Id = usize;
    const RANDOM_ACCESS: bool = true;

    fn id(&self) -> &usize {
        self
    }
}

/// A position in an associative vertex container, i.e. the key itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Keyed<K>(pub K);

impl<K: Clone + Eq + Ord + Hash + Debug> VertexPosition for Keyed<K> {
    type Id = K;
    const RANDOM_ACCESS: bool = false;

    fn id(&self) -> &K {
        &self.0
    }
}

/// A position denoting one vertex.
///
/// Two descriptors are equal iff their storage is equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexDescriptor<P> {
    storage: P,
}

impl<P: VertexPosition> VertexDescriptor<P> {
    pub fn new(storage: P) -> Self {
        Self { storage }
    }

    /// The stored index or key.
    pub fn value(&self) -> &P {
        &self.storage
    }

    pub fn into_value(self) -> P {
        self.storage
    }

    /// The index for random access storage, the key for associative storage.
    pub fn vertex_id(&self) -> &P::Id {
        self.storage.id()
    }

    /// The raw stored element: the vertex for sequential stores, the
    /// `(key, vertex)` pair for associative ones.
    pub fn underlying_value<'a, S>(&self, store: &'a S) -> S::Underlying<'a>
    where
        S: VertexRange<VertexPos = P>,
    {
        store.underlying(&self.storage)
    }

    /// The user facing part of the stored element, with any key stripped.
    pub fn inner_value<'a, S>(&self, store: &'a S) -> &'a S::Vertex
    where
        S: VertexRange<VertexPos = P>,
    {
        store.vertex(&self.storage)
    }

    pub fn inner_value_mut<'a, S>(&self, store: &'a mut S) -> &'a mut S::Vertex
    where
        S: VertexRange<VertexPos = P>,
    {
        store.vertex_mut(&self.storage)
    }
}

impl VertexDescriptor<usize> {
    pub fn index(&self) -> usize {
        self.storage
    }

    /// The descriptor of the vertex stored right after this one.
    pub fn next(&self) -> Self {
        Self::new(self.storage + 1)
    }

    pub fn advance(&mut self) {
        self.storage += 1;
    }
}

impl From<usize> for VertexDescriptor<usize> {
    fn from(x: usize) -> Self {
        Self::new(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn index_descriptors_advance_in_container_order() {
        let mut u = VertexDescriptor::new(3usize);
        assert_eq!(*u.vertex_id(), 3);
        u.advance();
        assert_eq!(u, VertexDescriptor::new(4));
        assert!(u < u.next());
    }

    #[test]
    fn index_descriptor_resolves_against_a_vector() {
        let store = vec![vec![1u32], vec![2, 3]];
        let u = VertexDescriptor::new(1usize);
        assert_eq!(u.inner_value(&store), &vec![2, 3]);
        assert_eq!(u.underlying_value(&store), &vec![2, 3]);
    }

    #[test]
    fn keyed_descriptor_strips_the_key() {
        let mut store = BTreeMap::new();
        store.insert("b".to_string(), vec![0u8]);
        let u = VertexDescriptor::new(Keyed("b".to_string()));
        assert_eq!(u.vertex_id(), "b");
        let (k, v) = u.underlying_value(&store);
        assert_eq!(k, "b");
        assert_eq!(v, &vec![0u8]);
        u.inner_value_mut(&mut store).push(1);
        assert_eq!(store["b"], vec![0, 1]);
    }
}
