//! Storage policies for [`DynamicGraph`](super::DynamicGraph).
//!
//! A policy names the vertex container and the edge container. The first
//! letter picks vertices, the letters after `o` pick edges:
//!
//! | vertices             | edges                                |
//! |----------------------|--------------------------------------|
//! | `V` `Vec`            | `v` `Vec`                            |
//! | `D` `VecDeque`       | `d` `VecDeque`                       |
//! | `M` `BTreeMap`       | `l` [`List`]                         |
//! | `U` `HashMap`        | `fl` [`ForwardList`]                 |
//! |                      | `s` `BTreeSet`                       |
//! |                      | `us` `HashSet`                       |
//! |                      | `m` `BTreeMap` keyed by adjacent id  |
//!
//! Every policy takes `<EV, VV, GV, VId, S, B>`: edge, vertex and graph
//! values ([`NoValue`] or [`Value<T>`]), the vertex id type, the source facet
//! and the direction facet.
use super::edge::DynamicEdge;
use super::facet::*;
use super::vertex::DynamicVertex;
use crate::id::{IndexId, VertexKey};
use crate::store::{EdgeStore, ForwardList, InEdgeSlot, List, VertexStore};
use ahash::RandomState;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::marker::PhantomData;

pub trait GraphTraits {
    type VertexId: VertexKey;
    type EdgeValue: ValueFacet;
    type VertexValue: ValueFacet;
    type GraphValue: ValueFacet;
    type Source: SourceFacet<Self::VertexId>;
    type Direction;

    type Edges: EdgeStore<Self::VertexId, Edge = EdgeOf<Self>>;
    type InEdges: InEdgeSlot<Self::VertexId, EdgeOf<Self>>;
    type Vertices: VertexStore<Self::VertexId, Vertex = VertexOf<Self>>;
}

pub type EdgeOf<Tr> = DynamicEdge<
    <Tr as GraphTraits>::VertexId,
    <Tr as GraphTraits>::Source,
    <Tr as GraphTraits>::EdgeValue,
>;

pub type VertexOf<Tr> = DynamicVertex<
    <Tr as GraphTraits>::Edges,
    <Tr as GraphTraits>::InEdges,
    <Tr as GraphTraits>::VertexValue,
>;

macro_rules! edge_container {
    (v, $e:ty, $k:ty) => { Vec<$e> };
    (d, $e:ty, $k:ty) => { VecDeque<$e> };
    (l, $e:ty, $k:ty) => { List<$e> };
    (fl, $e:ty, $k:ty) => { ForwardList<$e> };
    (s, $e:ty, $k:ty) => { BTreeSet<$e> };
    (us, $e:ty, $k:ty) => { HashSet<$e, RandomState> };
    (m, $e:ty, $k:ty) => { BTreeMap<$k, $e> };
}

macro_rules! vertex_container {
    (V, $v:ty, $k:ty) => { Vec<$v> };
    (D, $v:ty, $k:ty) => { VecDeque<$v> };
    (M, $v:ty, $k:ty) => { BTreeMap<$k, $v> };
    (U, $v:ty, $k:ty) => { HashMap<$k, $v, RandomState> };
}

macro_rules! policies {
    ($($name:ident: $vc:ident / $ec:ident, $vid:ident;)*) => {$(
        pub struct $name<
            EV = NoValue,
            VV = NoValue,
            GV = NoValue,
            VId = u32,
            S = Unsourced,
            B = Unidirectional,
        >(PhantomData<fn() -> (EV, VV, GV, VId, S, B)>);

        impl<EV, VV, GV, VId, S, B> GraphTraits for $name<EV, VV, GV, VId, S, B>
        where
            EV: ValueFacet,
            VV: ValueFacet,
            VV::Slot: Default,
            GV: ValueFacet,
            VId: $vid,
            S: SourceFacet<VId>,
            B: DirectionFacet<S, edge_container!($ec, DynamicEdge<VId, S, EV>, VId)>,
            B::InEdges: InEdgeSlot<VId, DynamicEdge<VId, S, EV>>,
        {
            type VertexId = VId;
            type EdgeValue = EV;
            type VertexValue = VV;
            type GraphValue = GV;
            type Source = S;
            type Direction = B;

            type Edges = edge_container!($ec, DynamicEdge<VId, S, EV>, VId);
            type InEdges = B::InEdges;
            type Vertices = vertex_container!(
                $vc,
                DynamicVertex<edge_container!($ec, DynamicEdge<VId, S, EV>, VId), B::InEdges, VV>,
                VId
            );
        }
    )*};
}

policies! {
    Vov: V / v, IndexId;
    Vod: V / d, IndexId;
    Vol: V / l, IndexId;
    Vofl: V / fl, IndexId;
    Vos: V / s, IndexId;
    Vous: V / us, IndexId;
    Vom: V / m, IndexId;

    Dov: D / v, IndexId;
    Dod: D / d, IndexId;
    Dol: D / l, IndexId;
    Dofl: D / fl, IndexId;
    Dos: D / s, IndexId;
    Dous: D / us, IndexId;
    Dom: D / m, IndexId;

    Mov: M / v, VertexKey;
    Mod: M / d, VertexKey;
    Mol: M / l, VertexKey;
    Mofl: M / fl, VertexKey;
    Mos: M / s, VertexKey;
    Mous: M / us, VertexKey;
    Mom: M / m, VertexKey;

    Uov: U / v, VertexKey;
    Uod: U / d, VertexKey;
    Uol: U / l, VertexKey;
    Uofl: U / fl, VertexKey;
    Uos: U / s, VertexKey;
    Uous: U / us, VertexKey;
    Uom: U / m, VertexKey;
}
