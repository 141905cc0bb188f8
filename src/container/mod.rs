//! The policy driven adjacency-list graph.
//!
//! [`DynamicGraph`] owns a vertex container chosen by its [`GraphTraits`]
//! policy. Each vertex owns an edge container, an optional in-edge container
//! and an optional value. The policy also selects the optional facets of
//! edges, see [`facet`](self#facets).
//!
//! # Facets
//!
//! | facet           | on                      | off                |
//! |-----------------|-------------------------|--------------------|
//! | edge source id  | [`Sourced`]             | [`Unsourced`]      |
//! | values          | [`Value<T>`]            | [`NoValue`]        |
//! | reverse edges   | [`Bidirectional`]       | [`Unidirectional`] |
//!
//! An absent facet costs no storage and has no accessor.

mod facet;
pub use self::facet::*;
mod edge;
pub use self::edge::*;
mod vertex;
pub use self::vertex::*;
mod copyable;
pub use self::copyable::*;
mod policy;
pub use self::policy::*;
mod graph;
pub use self::graph::{CopyableEdgeOf, DynamicGraph};
mod load;
pub use self::load::*;
mod adjacency;

#[cfg(test)]
pub use self::tests::*;

#[cfg(test)]
mod tests {
    use rs_quickcheck_util::*;

    /// A random edge list over a small vertex range, sorted by source.
    #[derive(Clone)]
    pub struct Ops {
        pub vertex_count: u32,
        pub edges: Vec<(u32, u32, i32)>,
    }

    impl std::fmt::Debug for Ops {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "{} {:?}", self.vertex_count, self.edges)
        }
    }

    impl Ops {
        /// The edges a set or map edge container keeps: the first of each
        /// `(source, target)` pair.
        pub fn deduplicated(&self) -> Vec<(u32, u32, i32)> {
            let mut seen = std::collections::BTreeSet::new();
            self.edges
                .iter()
                .filter(|(s, t, _)| seen.insert((*s, *t)))
                .copied()
                .collect()
        }
    }

    impl quickcheck::Arbitrary for Ops {
        fn arbitrary(g: &mut quickcheck::Gen) -> Self {
            let vertex_count = 1 + u32::from(u8::arbitrary(g) % 12);
            let mut edges: Vec<_> = gen_bytes(g, b"abc.", b'.', 0..)
                .iter()
                .map(|_| {
                    (
                        u32::arbitrary(g) % vertex_count,
                        u32::arbitrary(g) % vertex_count,
                        i32::arbitrary(g) % 100,
                    )
                })
                .collect();
            edges.sort_by_key(|e| e.0);
            Self {
                vertex_count,
                edges,
            }
        }

        fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
            let l = self.edges.len();
            let me = self.clone();
            let it = std::iter::successors(Some(l / 2), move |n| {
                let nxt = (n + l) / 2 + 1;
                if nxt >= l {
                    None
                } else {
                    Some(nxt)
                }
            })
            .map(move |n| {
                let mut res = me.clone();
                res.edges = me.edges[0..n].to_vec();
                res
            });
            Box::new(it)
        }
    }
}

#[cfg(test)]
mod graph_tests {
    use super::*;
    use crate::adjacency::*;
    use crate::error::GraphError;
    use quickcheck_macros::quickcheck;

    type Weighted = Vov<Value<i32>>;
    type BidirWeighted = Vov<Value<i32>, NoValue, NoValue, u32, Sourced, Bidirectional>;

    macro_rules! out_triples {
        ($g:expr) => {{
            let g = $g;
            let mut res = vec![];
            for u in vertices(g) {
                for uv in edges(g, &u) {
                    res.push((vertex_id(g, &u), target_id(g, &uv), *edge_value(g, &uv)));
                }
            }
            res.sort();
            res
        }};
    }

    macro_rules! round_trip {
        ($($name:ident: $policy:ident, $dedup:expr;)*) => {$(
            #[quickcheck]
            fn $name(ops: Ops) {
                let g: DynamicGraph<$policy<Value<i32>>> =
                    DynamicGraph::from_edge_list(ops.edges.iter().copied()).unwrap();
                let mut expected = if $dedup { ops.deduplicated() } else { ops.edges.clone() };
                expected.sort();
                assert_eq!(out_triples!(&g), expected);
                let degrees: usize = vertices(&g).map(|u| degree(&g, &u)).sum();
                assert_eq!(degrees, num_edges(&g));
                assert_eq!(has_edge(&g), !expected.is_empty());
            }
        )*};
    }

    round_trip! {
        round_trip_vov: Vov, false;
        round_trip_vod: Vod, false;
        round_trip_vol: Vol, false;
        round_trip_vofl: Vofl, false;
        round_trip_vos: Vos, true;
        round_trip_vous: Vous, true;
        round_trip_vom: Vom, true;
        round_trip_dov: Dov, false;
        round_trip_dos: Dos, true;
        round_trip_mov: Mov, false;
        round_trip_mofl: Mofl, false;
        round_trip_mom: Mom, true;
        round_trip_uov: Uov, false;
        round_trip_uous: Uous, true;
    }

    #[quickcheck]
    fn sequential_descriptors_are_stable(ops: Ops) {
        let g: DynamicGraph<Dov<Value<i32>>> = DynamicGraph::with_vertex_count(
            ops.vertex_count as usize,
            ops.edges.iter().copied(),
            CopyableEdge::from,
            &[],
        )
        .unwrap();
        assert_eq!(num_vertices(&g), ops.vertex_count as usize);
        for k in 0..ops.vertex_count {
            let u = find_vertex(&g, &k).unwrap();
            assert_eq!(vertex_id(&g, &u), k);
        }
        assert!(find_vertex(&g, &ops.vertex_count).is_none());
    }

    #[quickcheck]
    fn reverse_adjacency_mirrors_forward(ops: Ops) {
        let g: DynamicGraph<BidirWeighted> =
            DynamicGraph::from_edge_list(ops.edges.iter().copied()).unwrap();
        let mut forward = vec![];
        for u in vertices(&g) {
            for uv in edges(&g, &u) {
                assert_eq!(source_id(&g, &uv), vertex_id(&g, &u));
                forward.push((source_id(&g, &uv), target_id(&g, &uv), *edge_value(&g, &uv)));
            }
        }
        let mut backward = vec![];
        for v in vertices(&g) {
            for vu in in_edges(&g, &v) {
                assert_eq!(target_id(&g, &vu), vertex_id(&g, &v));
                backward.push((source_id(&g, &vu), target_id(&g, &vu), *edge_value(&g, &vu)));
            }
        }
        forward.sort();
        backward.sort();
        assert_eq!(forward, backward);
        let in_degrees: usize = vertices(&g).map(|v| in_degree(&g, &v)).sum();
        assert_eq!(in_degrees, num_edges(&g));
    }

    #[test]
    fn vertex_count_is_inferred_from_the_largest_id() {
        let g: DynamicGraph<Vov> = DynamicGraph::from_edge_list([(0u32, 2u32), (1, 4)]).unwrap();
        assert_eq!(num_vertices(&g), 5);
        assert_eq!(num_edges(&g), 2);
        for k in [2u32, 3, 4] {
            let u = find_vertex(&g, &k).unwrap();
            assert_eq!(degree(&g, &u), 0);
        }
    }

    #[test]
    fn empty_edge_list_gives_an_empty_graph() {
        let g: DynamicGraph<Vov> = DynamicGraph::from_edge_list(Vec::<(u32, u32)>::new()).unwrap();
        assert_eq!(num_vertices(&g), 0);
        assert_eq!(num_partitions(&g), 1);
        assert!(!has_edge(&g));
    }

    #[test]
    fn weighted_example_end_to_end() {
        let list = [
            (0u32, 1u32, 10),
            (0, 2, 5),
            (0, 4, 2),
            (1, 3, 1),
            (2, 1, 3),
            (2, 3, 9),
            (2, 4, 2),
            (3, 4, 7),
            (4, 3, 3),
        ];
        let g: DynamicGraph<Weighted> = DynamicGraph::from_edge_list(list).unwrap();
        assert_eq!(num_vertices(&g), 5);
        assert_eq!(num_edges(&g), 9);
        for u in vertices(&g) {
            let uid = vertex_id(&g, &u);
            let got: Vec<_> = edges(&g, &u)
                .map(|uv| (target_id(&g, &uv), *edge_value(&g, &uv)))
                .collect();
            let want: Vec<_> = list
                .iter()
                .filter(|e| e.0 == uid)
                .map(|e| (e.1, e.2))
                .collect();
            assert_eq!(got, want);
        }
        let uv = find_vertex_edge(&g, &2, &3).unwrap();
        assert_eq!(*edge_value(&g, &uv), 9);
        assert!(!contains_edge(&g, &3, &2));
    }

    #[test]
    fn partitions_are_validated() {
        let list = [(0u32, 1u32), (3, 4)];
        let res = DynamicGraph::<Vov>::with_vertex_count(5, list, CopyableEdge::from, &[0, 3, 2]);
        assert_eq!(
            res.unwrap_err(),
            GraphError::PartitionNotIncreasing {
                index: 2,
                prev: 3,
                next: 2
            }
        );
        let res = DynamicGraph::<Vov>::with_vertex_count(5, list, CopyableEdge::from, &[1, 3]);
        assert_eq!(res.unwrap_err(), GraphError::PartitionStart { first: 1 });
        let res = DynamicGraph::<Vov>::with_vertex_count(5, list, CopyableEdge::from, &[0, 6]);
        assert_eq!(
            res.unwrap_err(),
            GraphError::PartitionExceedsVertexCount { id: 6, count: 5 }
        );

        let g = DynamicGraph::<Vov>::with_vertex_count(5, list, CopyableEdge::from, &[0, 3, 5])
            .unwrap();
        assert_eq!(num_partitions(&g), 2);
        assert_eq!(g.partitions(), &[0, 3, 5]);
        assert_eq!(g.partition_range(1), Some(3..5));
        let ids: Vec<_> = vertices(&g).map(|u| partition_id(&g, &u)).collect();
        assert_eq!(ids, vec![0, 0, 0, 1, 1]);

        let g = DynamicGraph::<Vov>::with_vertex_count(5, list, CopyableEdge::from, &[0, 3])
            .unwrap();
        assert_eq!(g.partitions(), &[0, 3, 5]);
    }

    macro_rules! buffered_load {
        ($($name:ident: $tr:ty;)*) => {$(
            #[quickcheck]
            fn $name(ops: Ops) {
                let (first, second) = ops.edges.split_at(ops.edges.len() / 2);
                let mut g: DynamicGraph<$tr> =
                    DynamicGraph::from_edges(first.iter().copied(), CopyableEdge::from, &[]).unwrap();
                let inferred = first.iter().map(|e| e.0.max(e.1) as usize + 1).max().unwrap_or(0);
                assert_eq!(num_vertices(&g), inferred);
                g.load_edges(second.iter().copied(), CopyableEdge::from).unwrap();

                let nv = ops.edges.iter().map(|e| e.0.max(e.1) as usize + 1).max().unwrap_or(0);
                assert_eq!(num_vertices(&g), nv);
                assert_eq!(num_edges(&g), ops.edges.len());
                assert_eq!(g.partitions(), &[0, nv]);
                let mut expected = ops.edges.clone();
                expected.sort();
                assert_eq!(out_triples!(&g), expected);
            }
        )*};
    }

    buffered_load! {
        buffered_load_vov: Weighted;
        buffered_load_dov: Dov<Value<i32>>;
        buffered_load_vol: Vol<Value<i32>>;
        buffered_load_dofl: Dofl<Value<i32>>;
        buffered_load_bidirectional: BidirWeighted;
    }

    #[quickcheck]
    fn buffered_load_fills_reverse_adjacency(ops: Ops) {
        let (first, second) = ops.edges.split_at(ops.edges.len() / 3);
        type Tr = Dol<Value<i32>, NoValue, NoValue, u32, Sourced, Bidirectional>;
        let mut g: DynamicGraph<Tr> =
            DynamicGraph::from_edges(first.iter().copied(), CopyableEdge::from, &[]).unwrap();
        g.load_edges(second.iter().copied(), CopyableEdge::from).unwrap();
        let mut backward = vec![];
        for v in vertices(&g) {
            for vu in in_edges(&g, &v) {
                assert_eq!(target_id(&g, &vu), vertex_id(&g, &v));
                backward.push((source_id(&g, &vu), target_id(&g, &vu), *edge_value(&g, &vu)));
            }
        }
        backward.sort();
        let mut expected = ops.edges.clone();
        expected.sort();
        assert_eq!(backward, expected);
        assert_eq!(out_triples!(&g), expected);
    }

    macro_rules! long_list_row {
        ($($name:ident: $policy:ident;)*) => {$(
            #[test]
            fn $name() {
                let n = 20000u32;
                let g: DynamicGraph<$policy> =
                    DynamicGraph::from_edge_list((1..=n).map(|t| (0u32, t))).unwrap();
                let u = find_vertex(&g, &0).unwrap();
                let row = g.vertex_at(&0).unwrap().edges();
                let mut sum = 0u64;
                let mut seen = 0usize;
                for uv in edges(&g, &u) {
                    let t = target_id(&g, &uv);
                    assert_eq!(row.get(*uv.value()).map(|e| *e.target_id()), Some(t));
                    sum += u64::from(t);
                    seen += 1;
                }
                assert_eq!(seen, n as usize);
                assert_eq!(sum, u64::from(n) * u64::from(n + 1) / 2);
            }
        )*};
    }

    long_list_row! {
        long_list_row_is_addressed_by_slot: Vol;
        long_forward_list_row_is_addressed_by_slot: Vofl;
    }

    #[test]
    fn later_loads_stretch_the_last_partition() {
        let mut g: DynamicGraph<Vov> =
            DynamicGraph::from_edges([(0u32, 1u32), (2, 3)], CopyableEdge::from, &[0, 2]).unwrap();
        assert_eq!(g.partitions(), &[0, 2, 4]);
        g.load_edges([(5u32, 0u32)], CopyableEdge::from).unwrap();
        assert_eq!(num_vertices(&g), 6);
        assert_eq!(g.partitions(), &[0, 2, 6]);
        assert_eq!(num_partitions(&g), 2);
        assert_eq!(g.partition_range(1), Some(2..6));
        let u = find_vertex(&g, &5).unwrap();
        assert_eq!(partition_id(&g, &u), 1);
        assert_eq!(degree(&g, &u), 1);
    }

    #[test]
    fn associative_vertices_ignore_partitions() {
        let g = DynamicGraph::<Mov>::from_edges([(7u32, 9u32)], CopyableEdge::from, &[0, 5]).unwrap();
        assert!(g.partitions().is_empty());
        assert_eq!(num_partitions(&g), 1);
        assert_eq!(num_vertices(&g), 2);
    }

    #[test]
    fn associative_vertices_grow_on_demand() {
        type Tr = Mov<NoValue, NoValue, NoValue, String>;
        let g: DynamicGraph<Tr> = DynamicGraph::from_edge_list([
            ("paris".to_string(), "lyon".to_string()),
            ("lyon".to_string(), "nice".to_string()),
        ])
        .unwrap();
        let ids: Vec<_> = vertices(&g).map(|u| vertex_id(&g, &u)).collect();
        assert_eq!(ids, vec!["lyon", "nice", "paris"]);
        assert!(contains_edge(&g, &"paris".to_string(), &"lyon".to_string()));
        assert!(g.contains_vertex(&"nice".to_string()));
        assert_eq!(
            g.try_find_vertex(&"rome".to_string()).unwrap_err(),
            GraphError::VertexNotFound {
                id: "\"rome\"".to_string()
            }
        );
    }

    #[test]
    fn out_of_range_endpoints_are_reported() {
        let res = DynamicGraph::<Vov>::with_vertex_count(3, [(0u32, 5u32)], CopyableEdge::from, &[]);
        assert_eq!(
            res.unwrap_err(),
            GraphError::EdgeIdOutOfRange {
                field: "target",
                id: 5,
                bound: 3
            }
        );
        let res = DynamicGraph::<Vov<NoValue, NoValue, NoValue, i32>>::from_edge_list([(-1i32, 0i32)]);
        assert_eq!(
            res.unwrap_err(),
            GraphError::InvalidVertexId {
                field: "source",
                id: "-1".to_string()
            }
        );
    }

    #[test]
    fn failed_load_keeps_earlier_edges() {
        let mut g = DynamicGraph::<Vov>::new();
        let res = g.load_edges_with(
            [(0u32, 1u32), (0, 9)],
            CopyableEdge::from,
            LoadOptions::new().vertex_count(3),
        );
        assert!(res.is_err());
        assert_eq!(num_vertices(&g), 3);
        assert_eq!(num_edges(&g), 1);
        assert_eq!(g.partitions(), &[0, 3]);
        let v = find_vertex(&g, &2).unwrap();
        assert_eq!(partition_id(&g, &v), 0);
    }

    #[test]
    fn max_vertex_id_must_leave_room_for_the_count() {
        let res = DynamicGraph::<Vov<NoValue, NoValue, NoValue, u8>>::with_max_vertex_id(
            u8::MAX,
            Vec::<(u8, u8)>::new(),
            CopyableEdge::from,
            &[],
        );
        assert!(matches!(res, Err(GraphError::VertexIdOverflow { .. })));
        let g = DynamicGraph::<Vov<NoValue, NoValue, NoValue, u8>>::with_max_vertex_id(
            254,
            [(0u8, 1u8)],
            CopyableEdge::from,
            &[],
        )
        .unwrap();
        assert_eq!(num_vertices(&g), 255);
    }

    #[test]
    fn vertex_values_load_before_edges() {
        type Tr = Vov<NoValue, Value<String>>;
        let mut g = DynamicGraph::<Tr>::from_edges_and_vertices(
            [(0u32, 1u32)],
            [(0u32, "a".to_string()), (1, "b".to_string())],
            CopyableEdge::from,
            CopyableVertex::from,
            &[],
        )
        .unwrap();
        let u = find_vertex(&g, &1).unwrap();
        assert_eq!(vertex_value(&g, &u), "b");
        vertex_value_mut(&mut g, &u).push('!');
        assert_eq!(g.vertex_at(&1).unwrap().value(), "b!");
        assert!(g.vertex_at(&2).is_err());

        let res = DynamicGraph::<Tr>::from_edges_and_vertices(
            [(0u32, 2u32)],
            [(0u32, "a".to_string()), (1, "b".to_string())],
            CopyableEdge::from,
            CopyableVertex::from,
            &[],
        );
        assert!(matches!(
            res,
            Err(GraphError::EdgeIdOutOfRange { field: "target", .. })
        ));
    }

    #[test]
    fn edge_values_mutate_in_place() {
        let mut g: DynamicGraph<Weighted> = DynamicGraph::from_edge_list([(0u32, 1u32, 1)]).unwrap();
        let u = find_vertex(&g, &0).unwrap();
        let uv = edges(&g, &u).next().unwrap();
        *edge_value_mut(&mut g, &uv) += 41;
        assert_eq!(*edge_value(&g, &uv), 42);
    }

    #[test]
    fn graph_value_travels_with_the_graph() {
        type Tr = Vov<NoValue, NoValue, Value<&'static str>>;
        let mut g = DynamicGraph::<Tr>::with_value_from_edge_list("roads", [(0u32, 1u32)]).unwrap();
        assert_eq!(*graph_value(&g), "roads");
        *g.graph_value_mut() = "rails";
        assert_eq!(*g.graph_value(), "rails");
        g.clear();
        assert_eq!(num_vertices(&g), 0);
        assert_eq!(num_edges(&g), 0);
        assert_eq!(g.partitions(), &[0, 0]);
    }

    #[test]
    fn resize_and_reserve() {
        let mut g = DynamicGraph::<Dov<NoValue, NoValue, NoValue, u8>>::new();
        g.reserve_vertices(8);
        g.resize_vertices(4).unwrap();
        assert_eq!(num_vertices(&g), 4);
        g.resize_vertices(2).unwrap();
        assert_eq!(num_vertices(&g), 4);
        assert!(matches!(
            g.resize_vertices(300),
            Err(GraphError::VertexIdOverflow { .. })
        ));
    }
}
