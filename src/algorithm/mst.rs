use crate::adjacency::*;
use crate::descriptor::VertexDescriptor;
use crate::error::{GraphError, Result};
use ahash::RandomState;
use keyed_priority_queue::KeyedPriorityQueue;
use num_traits::Zero;
use std::cmp::{Ordering, Reverse};

/// Edges picked by [`kruskal`], as `(source index, target index, weight)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanningForest<W> {
    pub edges: Vec<(usize, usize, W)>,
    pub total: W,
    /// Trees in the forest. Isolated vertices count as one each.
    pub components: usize,
}

/// Minimum spanning forest by Kruskal's algorithm.
///
/// Every stored out-edge is a candidate, so an undirected graph stored with
/// both directions works as is. Equal weights keep edge order.
pub fn kruskal<G, W, F>(g: &G, weight: F) -> SpanningForest<W>
where
    G: AdjacencyList<VertexStorage = usize> + ?Sized,
    W: Copy + Ord + Zero,
    F: FnMut(&EdgeDescriptorOf<G>) -> W,
{
    kruskal_by(g, weight, Ord::cmp)
}

/// Kruskal's algorithm taking edges in the order `compare` sorts them.
/// `|a, b| b.cmp(a)` gives a maximum spanning forest.
pub fn kruskal_by<G, W, F, C>(g: &G, mut weight: F, mut compare: C) -> SpanningForest<W>
where
    G: AdjacencyList<VertexStorage = usize> + ?Sized,
    W: Copy + Zero,
    F: FnMut(&EdgeDescriptorOf<G>) -> W,
    C: FnMut(&W, &W) -> Ordering,
{
    let n = num_vertices(g);
    let mut candidates = vec![];
    for u in vertices(g) {
        for uv in edges(g, &u) {
            if let Some(v) = g.target(&uv) {
                candidates.push((u.index(), v.index(), weight(&uv)));
            }
        }
    }
    candidates.sort_by(|a, b| compare(&a.2, &b.2));

    let mut sets = DisjointSets::new(n);
    let mut res = SpanningForest {
        edges: vec![],
        total: W::zero(),
        components: n,
    };
    for (u, v, w) in candidates {
        if sets.union(u, v) {
            res.edges.push((u, v, w));
            res.total = res.total + w;
            res.components -= 1;
        }
    }
    res
}

struct DisjointSets {
    parents: Vec<usize>,
    ranks: Vec<u8>,
}

impl DisjointSets {
    fn new(n: usize) -> Self {
        Self {
            parents: (0..n).collect(),
            ranks: vec![0; n],
        }
    }

    fn find(&mut self, mut x: usize) -> usize {
        while self.parents[x] != x {
            self.parents[x] = self.parents[self.parents[x]];
            x = self.parents[x];
        }
        x
    }

    /// `false` when `a` and `b` were already joined.
    fn union(&mut self, a: usize, b: usize) -> bool {
        let (ra, rb) = (self.find(a), self.find(b));
        if ra == rb {
            return false;
        }
        match self.ranks[ra].cmp(&self.ranks[rb]) {
            Ordering::Less => self.parents[ra] = rb,
            Ordering::Greater => self.parents[rb] = ra,
            Ordering::Equal => {
                self.parents[rb] = ra;
                self.ranks[ra] += 1;
            }
        }
        true
    }
}

/// The tree [`prim`] grows, indexed by vertex index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimTree<W> {
    pub seed: usize,
    /// The tree neighbor each vertex was attached through. `None` for the
    /// seed and for vertices outside the seed's component.
    pub predecessors: Vec<Option<usize>>,
    /// Weight of the edge attaching each vertex, `None` where there is no
    /// predecessor.
    pub weights: Vec<Option<W>>,
}

impl<W: Copy + Zero> PrimTree<W> {
    pub fn total(&self) -> W {
        self.weights
            .iter()
            .flatten()
            .fold(W::zero(), |acc, w| acc + *w)
    }

    /// Tree edges as `(predecessor, vertex, weight)`.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, W)> + '_ {
        self.predecessors
            .iter()
            .zip(self.weights.iter())
            .enumerate()
            .filter_map(|(v, (p, w))| Some(((*p)?, v, (*w)?)))
    }
}

/// Minimum spanning tree of the component holding `seed`, by Prim's
/// algorithm over out-edges.
pub fn prim<G, W, F>(g: &G, seed: &G::VertexId, mut weight: F) -> Result<PrimTree<W>>
where
    G: AdjacencyList<VertexStorage = usize> + ?Sized,
    W: Copy + Ord,
    F: FnMut(&EdgeDescriptorOf<G>) -> W,
{
    let s = find_vertex(g, seed)
        .ok_or_else(|| GraphError::not_found(seed))?
        .index();
    let n = num_vertices(g);
    let mut predecessors = vec![None; n];
    let mut weights: Vec<Option<W>> = vec![None; n];
    let mut in_tree = vec![false; n];
    let mut queue: KeyedPriorityQueue<usize, Reverse<Option<W>>, RandomState> =
        KeyedPriorityQueue::with_capacity_and_hasher(n, RandomState::new());
    queue.push(s, Reverse(None));

    while let Some((ui, _)) = queue.pop() {
        in_tree[ui] = true;
        for uv in edges(g, &VertexDescriptor::new(ui)) {
            let vi = match g.target(&uv) {
                Some(v) => v.index(),
                None => continue,
            };
            if in_tree[vi] {
                continue;
            }
            let w = weight(&uv);
            if weights[vi].map_or(true, |old| w < old) {
                weights[vi] = Some(w);
                predecessors[vi] = Some(ui);
                queue.push(vi, Reverse(Some(w)));
            }
        }
    }
    Ok(PrimTree {
        seed: s,
        predecessors,
        weights,
    })
}
