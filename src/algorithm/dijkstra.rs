use crate::adjacency::*;
use crate::descriptor::VertexDescriptor;
use crate::error::{GraphError, Result};
use ahash::RandomState;
use keyed_priority_queue::KeyedPriorityQueue;
use num_traits::{CheckedAdd, Zero};
use std::cmp::Reverse;
use std::fmt::Debug;
use tracing::debug;

/// Single source shortest paths, indexed by vertex index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPaths<W> {
    /// `None` for vertices the seed cannot reach.
    pub distances: Vec<Option<W>>,
    /// The vertex a shortest path arrives from. `None` for the seed and for
    /// unreachable vertices.
    pub predecessors: Vec<Option<usize>>,
}

impl<W> ShortestPaths<W> {
    /// Vertex indices from the seed to `target`, both included.
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        self.distances.get(target)?.as_ref()?;
        let mut path = vec![target];
        let mut cur = target;
        while let Some(prev) = self.predecessors[cur] {
            path.push(prev);
            cur = prev;
        }
        path.reverse();
        Some(path)
    }
}

/// Dijkstra's algorithm from `seed`, with `weight` giving each out-edge its
/// non-negative length.
///
/// Fails on an unknown seed, on the first negative weight it meets, and
/// when a distance does not fit in `W`.
///
/// ```
/// use dyngraph::algorithm::dijkstra;
/// use dyngraph::prelude::*;
///
/// let g: DynamicGraph<Vov<Value<u32>>> =
///     DynamicGraph::from_edge_list([(0u32, 1u32, 4), (0, 2, 1), (2, 1, 2)]).unwrap();
/// let sp = dijkstra(&g, &0, |uv| *edge_value(&g, uv)).unwrap();
/// assert_eq!(sp.distances, vec![Some(0), Some(3), Some(1)]);
/// assert_eq!(sp.path_to(1), Some(vec![0, 2, 1]));
/// ```
pub fn dijkstra<G, W, F>(g: &G, seed: &G::VertexId, mut weight: F) -> Result<ShortestPaths<W>>
where
    G: AdjacencyList<VertexStorage = usize> + ?Sized,
    W: Copy + Ord + CheckedAdd + Zero + Debug,
    F: FnMut(&EdgeDescriptorOf<G>) -> W,
{
    let s = find_vertex(g, seed).ok_or_else(|| GraphError::not_found(seed))?;
    let n = num_vertices(g);
    let mut distances: Vec<Option<W>> = vec![None; n];
    let mut predecessors = vec![None; n];
    let mut settled = vec![false; n];
    let mut queue: KeyedPriorityQueue<usize, Reverse<W>, RandomState> =
        KeyedPriorityQueue::with_capacity_and_hasher(n, RandomState::new());
    distances[s.index()] = Some(W::zero());
    queue.push(s.index(), Reverse(W::zero()));

    while let Some((ui, Reverse(du))) = queue.pop() {
        settled[ui] = true;
        let u = VertexDescriptor::new(ui);
        for uv in edges(g, &u) {
            let w = weight(&uv);
            if w < W::zero() {
                return Err(GraphError::NegativeEdgeWeight {
                    weight: format!("{:?}", w),
                });
            }
            let vi = match g.target(&uv) {
                Some(v) => v.index(),
                None => continue,
            };
            if settled[vi] {
                continue;
            }
            let dv = du
                .checked_add(&w)
                .ok_or(GraphError::DistanceOverflow { vertex: vi })?;
            if distances[vi].map_or(true, |old| dv < old) {
                distances[vi] = Some(dv);
                predecessors[vi] = Some(ui);
                queue.push(vi, Reverse(dv));
            }
        }
    }
    debug!(
        reached = settled.iter().filter(|x| **x).count(),
        vertices = n,
        "dijkstra finished"
    );
    Ok(ShortestPaths {
        distances,
        predecessors,
    })
}
