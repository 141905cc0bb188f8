//! Plain standard containers as adjacency lists.
//!
//! `Vec<Vec<u32>>`, `VecDeque<Vec<(u32, f64)>>`, `BTreeMap<String, Vec<String>>`
//! and friends answer every core CPO through their vertex and edge store
//! adapters, with edge elements decoded by [`EdgeShape`].
use super::r#trait::*;
use crate::descriptor::{EdgeDescriptorView, OutEdge, VertexDescriptor, VertexDescriptorView};
use crate::id::{IndexId, VertexKey};
use crate::shape::EdgeShape;
use crate::store::{EdgeRange, EdgeRangeMut, VertexEdges, VertexEdgesMut, VertexRange, VertexStore};
use ahash::RandomState;
use std::collections::{BTreeMap, HashMap, VecDeque};

macro_rules! raw_adjacency_body {
    () => {
        type VertexStorage = <Self as VertexRange>::VertexPos;
        type EdgeStorage = <C::Edges as EdgeRange>::Position;
        type VertexIter<'a> = VertexDescriptorView<<Self as VertexRange>::VertexPositions<'a>>
        where
            Self: 'a;
        type EdgeIter<'a> = EdgeDescriptorView<
            <C::Edges as EdgeRange>::Positions<'a>,
            <Self as VertexRange>::VertexPos,
            OutEdge,
        >
        where
            Self: 'a;

        fn vertices(&self) -> Self::VertexIter<'_> {
            VertexDescriptorView::new(self.vertex_positions(), self.vertex_count())
        }

        fn num_vertices(&self) -> usize {
            self.vertex_count()
        }

        fn vertex_id(&self, u: &VertexDescriptorOf<Self>) -> Self::VertexId {
            VertexStore::<Self::VertexId>::id_of(self, u.value())
        }

        fn find_vertex(&self, uid: &Self::VertexId) -> Option<VertexDescriptorOf<Self>> {
            VertexStore::<Self::VertexId>::position_of(self, uid).map(VertexDescriptor::new)
        }

        fn edges(&self, u: &VertexDescriptorOf<Self>) -> Self::EdgeIter<'_> {
            let c = self.vertex(u.value()).out_edges();
            EdgeDescriptorView::new(c.positions(), c.size(), u.clone())
        }

        fn degree(&self, u: &VertexDescriptorOf<Self>) -> usize {
            self.vertex(u.value()).out_edges().size()
        }

        fn target_id(&self, uv: &EdgeDescriptorOf<Self>) -> Self::VertexId {
            uv.target_id(self.vertex(uv.source().value())).clone()
        }
    };
}

macro_rules! raw_edge_values {
    ($($header:tt)*) => {
        $($header)* {
            type EdgeValue<'a> = <C::Edge as EdgeShape>::Inner<'a> where Self: 'a;

            fn edge_value(&self, uv: &EdgeDescriptorOf<Self>) -> Self::EdgeValue<'_> {
                uv.inner_value(self.vertex(uv.source().value()))
            }
        }
    };
}

macro_rules! sequential_adjacency {
    ($($container:ident),*) => {$(
        impl<C> AdjacencyList for $container<C>
        where
            C: VertexEdges + Default,
            C::Edge: EdgeShape,
            <C::Edge as EdgeShape>::Id: IndexId,
        {
            type VertexId = <C::Edge as EdgeShape>::Id;
            raw_adjacency_body!();
        }

        raw_edge_values! {
            impl<C> EdgeValues for $container<C>
            where
                C: VertexEdges + Default,
                C::Edge: EdgeShape,
                <C::Edge as EdgeShape>::Id: IndexId,
        }

        impl<C> EdgeValuesMut for $container<C>
        where
            C: VertexEdgesMut + Default,
            C::Edges: EdgeRangeMut,
            C::Edge: EdgeShape,
            <C::Edge as EdgeShape>::Id: IndexId,
        {
            type EdgeValueMut<'a> = <C::Edge as EdgeShape>::InnerMut<'a> where Self: 'a;

            fn edge_value_mut(&mut self, uv: &EdgeDescriptorOf<Self>) -> Self::EdgeValueMut<'_> {
                uv.inner_value_mut(self.vertex_mut(uv.source().value()))
            }
        }
    )*};
}

sequential_adjacency!(Vec, VecDeque);

impl<K, C> AdjacencyList for BTreeMap<K, C>
where
    K: VertexKey,
    C: VertexEdges + Default,
    C::Edge: EdgeShape<Id = K>,
{
    type VertexId = K;
    raw_adjacency_body!();
}

raw_edge_values! {
    impl<K, C> EdgeValues for BTreeMap<K, C>
    where
        K: VertexKey,
        C: VertexEdges + Default,
        C::Edge: EdgeShape<Id = K>,
}

impl<K, C> AdjacencyList for HashMap<K, C, RandomState>
where
    K: VertexKey,
    C: VertexEdges + Default,
    C::Edge: EdgeShape<Id = K>,
{
    type VertexId = K;
    raw_adjacency_body!();
}

raw_edge_values! {
    impl<K, C> EdgeValues for HashMap<K, C, RandomState>
    where
        K: VertexKey,
        C: VertexEdges + Default,
        C::Edge: EdgeShape<Id = K>,
}
