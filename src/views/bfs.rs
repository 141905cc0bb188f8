use super::Cancel;
use crate::adjacency::*;
use crate::error::{GraphError, Result};
use ahash::RandomState;
use std::collections::{HashSet, VecDeque};

/// Vertices reachable from `seed` in breadth first order, the seed first.
///
/// Yields `(id, descriptor)`. A vertex is expanded lazily, right before the
/// search advances past it, so [`VerticesBfs::cancel`] with
/// [`Cancel::Branch`] keeps the children of the vertex just yielded out of
/// the search.
pub fn vertices_bfs<'a, G: AdjacencyList + ?Sized>(
    g: &'a G,
    seed: &G::VertexId,
) -> Result<VerticesBfs<'a, G>> {
    let u = find_vertex(g, seed).ok_or_else(|| GraphError::not_found(seed))?;
    let mut visited = HashSet::default();
    visited.insert(u.value().clone());
    Ok(VerticesBfs {
        g,
        queue: VecDeque::from(vec![(u, 0)]),
        visited,
        pending: None,
        cancel: None,
        done: false,
        depth: 0,
        count: 0,
    })
}

pub struct VerticesBfs<'a, G: AdjacencyList + ?Sized + 'a> {
    g: &'a G,
    queue: VecDeque<(VertexDescriptorOf<G>, usize)>,
    visited: HashSet<G::VertexStorage, RandomState>,
    pending: Option<(VertexDescriptorOf<G>, usize)>,
    cancel: Option<Cancel>,
    done: bool,
    depth: usize,
    count: usize,
}

impl<'a, G: AdjacencyList + ?Sized> VerticesBfs<'a, G> {
    pub fn cancel(&mut self, how: Cancel) {
        self.cancel = Some(how);
    }

    /// Largest distance from the seed, in edges, among the vertices yielded.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Vertices yielded so far, the seed not included.
    pub fn num_visited(&self) -> usize {
        self.count
    }

    fn expand(&mut self, u: VertexDescriptorOf<G>, d: usize) {
        for uv in edges(self.g, &u) {
            if let Some(v) = self.g.target(&uv) {
                if self.visited.insert(v.value().clone()) {
                    self.queue.push_back((v, d + 1));
                }
            }
        }
    }
}

impl<'a, G: AdjacencyList + ?Sized> Iterator for VerticesBfs<'a, G> {
    type Item = (G::VertexId, VertexDescriptorOf<G>);

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.cancel.take() {
            Some(Cancel::All) => {
                self.done = true;
                self.queue.clear();
                self.pending = None;
                return None;
            }
            Some(Cancel::Branch) => self.pending = None,
            None => {}
        }
        if let Some((u, d)) = self.pending.take() {
            self.expand(u, d);
        }
        let (u, d) = self.queue.pop_front()?;
        if d > 0 {
            self.count += 1;
        }
        self.depth = self.depth.max(d);
        self.pending = Some((u.clone(), d));
        Some((vertex_id(self.g, &u), u))
    }
}
