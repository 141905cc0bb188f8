use crate::adjacency::*;
use crate::descriptor::VertexDescriptor;
use ahash::RandomState;
use keyed_priority_queue::KeyedPriorityQueue;
use std::cmp::Reverse;

/// Vertex ids in topological order.
///
/// Kahn's algorithm over a queue keyed by remaining in-degree. When only
/// vertices on cycles are left the iterator ends early, so a result shorter
/// than `num_vertices` means the graph is not acyclic.
pub fn toposort<G>(g: &G) -> Toposort<'_, G>
where
    G: AdjacencyList<VertexStorage = usize> + ?Sized,
{
    Toposort::new(g)
}

pub struct Toposort<'a, G>
where
    G: AdjacencyList<VertexStorage = usize> + ?Sized,
{
    graph: &'a G,
    degree_queue: KeyedPriorityQueue<usize, Reverse<usize>, RandomState>,
    blocked: bool,
}

impl<'a, G> Iterator for Toposort<'a, G>
where
    G: AdjacencyList<VertexStorage = usize> + ?Sized,
{
    type Item = G::VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        if self.blocked {
            return None;
        }
        let (vert, in_degree) = self.degree_queue.pop()?;
        if in_degree.0 > 0 {
            self.blocked = true;
            return None;
        }
        let u = VertexDescriptor::new(vert);
        for uv in edges(self.graph, &u) {
            let sink = match self.graph.target(&uv) {
                Some(v) => v.index(),
                None => continue,
            };
            if let Some(d) = self.degree_queue.get_priority(&sink) {
                let d = d.0;
                self.degree_queue
                    .set_priority(&sink, Reverse(d - 1))
                    .unwrap();
            }
        }
        Some(vertex_id(self.graph, &u))
    }
}

impl<'a, G> Toposort<'a, G>
where
    G: AdjacencyList<VertexStorage = usize> + ?Sized,
{
    fn new(graph: &'a G) -> Self {
        let n = num_vertices(graph);
        let mut in_degrees = vec![0usize; n];
        for u in vertices(graph) {
            for uv in edges(graph, &u) {
                if let Some(v) = graph.target(&uv) {
                    in_degrees[v.index()] += 1;
                }
            }
        }
        let mut degree_queue =
            KeyedPriorityQueue::with_capacity_and_hasher(n, RandomState::new());
        for (v, in_degree) in in_degrees.into_iter().enumerate() {
            degree_queue.push(v, Reverse(in_degree));
        }
        Self {
            graph,
            degree_queue,
            blocked: false,
        }
    }
}
