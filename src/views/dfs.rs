use super::Cancel;
use crate::adjacency::*;
use crate::error::{GraphError, Result};
use ahash::RandomState;
use std::collections::HashSet;

/// Vertices reachable from `seed` in depth first preorder, the seed first.
///
/// Out-edges are followed in edge order, the way a recursive search would.
/// Yields `(id, descriptor)`.
pub fn vertices_dfs<'a, G: AdjacencyList + ?Sized>(
    g: &'a G,
    seed: &G::VertexId,
) -> Result<VerticesDfs<'a, G>> {
    let u = find_vertex(g, seed).ok_or_else(|| GraphError::not_found(seed))?;
    let mut visited = HashSet::default();
    visited.insert(u.value().clone());
    Ok(VerticesDfs {
        g,
        seed: Some(u),
        stack: vec![],
        visited,
        pending: None,
        cancel: None,
        done: false,
        depth: 0,
        count: 0,
    })
}

pub struct VerticesDfs<'a, G: AdjacencyList + ?Sized + 'a> {
    g: &'a G,
    seed: Option<VertexDescriptorOf<G>>,
    stack: Vec<G::EdgeIter<'a>>,
    visited: HashSet<G::VertexStorage, RandomState>,
    pending: Option<VertexDescriptorOf<G>>,
    cancel: Option<Cancel>,
    done: bool,
    depth: usize,
    count: usize,
}

impl<'a, G: AdjacencyList + ?Sized> VerticesDfs<'a, G> {
    pub fn cancel(&mut self, how: Cancel) {
        self.cancel = Some(how);
    }

    /// Deepest tree depth reached among the vertices yielded.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Vertices yielded so far, the seed not included.
    pub fn num_visited(&self) -> usize {
        self.count
    }
}

impl<'a, G: AdjacencyList + ?Sized> Iterator for VerticesDfs<'a, G> {
    type Item = (G::VertexId, VertexDescriptorOf<G>);

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.cancel.take() {
            Some(Cancel::All) => {
                self.done = true;
                self.stack.clear();
                self.pending = None;
                return None;
            }
            Some(Cancel::Branch) => self.pending = None,
            None => {}
        }
        if let Some(u) = self.seed.take() {
            self.pending = Some(u.clone());
            return Some((vertex_id(self.g, &u), u));
        }
        if let Some(u) = self.pending.take() {
            self.stack.push(edges(self.g, &u));
        }
        let g = self.g;
        while let Some(it) = self.stack.last_mut() {
            match it.next() {
                Some(uv) => {
                    let v = match g.target(&uv) {
                        Some(v) => v,
                        None => continue,
                    };
                    if self.visited.insert(v.value().clone()) {
                        self.count += 1;
                        self.depth = self.depth.max(self.stack.len());
                        self.pending = Some(v.clone());
                        return Some((vertex_id(g, &v), v));
                    }
                }
                None => {
                    self.stack.pop();
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::Ops;
    use crate::prelude::*;
    use quickcheck_macros::quickcheck;

    fn tree() -> Vec<Vec<u32>> {
        vec![vec![1, 2], vec![3, 4], vec![5], vec![], vec![], vec![]]
    }

    #[test]
    fn preorder() {
        let g = tree();
        let mut dfs = vertices_dfs(&g, &0).unwrap();
        let ids: Vec<u32> = dfs.by_ref().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![0, 1, 3, 4, 2, 5]);
        assert_eq!(dfs.depth(), 2);
        assert_eq!(dfs.num_visited(), 5);
    }

    #[test]
    fn cancel_branch_skips_a_subtree() {
        let g = tree();
        let mut dfs = vertices_dfs(&g, &0).unwrap();
        let mut ids = vec![];
        while let Some((id, _)) = dfs.next() {
            ids.push(id);
            if id == 1 {
                dfs.cancel(Cancel::Branch);
            }
        }
        assert_eq!(ids, vec![0, 1, 2, 5]);
    }

    #[test]
    fn cancel_all_stops_the_search() {
        let g = tree();
        let mut dfs = vertices_dfs(&g, &0).unwrap();
        assert_eq!(dfs.next().map(|(id, _)| id), Some(0));
        dfs.cancel(Cancel::All);
        assert!(dfs.next().is_none());
        assert!(dfs.next().is_none());
    }

    #[quickcheck]
    fn reaches_what_bfs_reaches(ops: Ops) {
        let g: DynamicGraph<Vov<Value<i32>>> =
            DynamicGraph::from_edge_list(ops.edges.iter().copied()).unwrap();
        let seed = match ops.edges.first() {
            Some(e) => e.0,
            None => return,
        };
        let mut by_dfs: Vec<u32> = vertices_dfs(&g, &seed).unwrap().map(|(id, _)| id).collect();
        let mut by_bfs: Vec<u32> = vertices_bfs(&g, &seed).unwrap().map(|(id, _)| id).collect();
        assert_eq!(by_dfs[0], seed);
        assert_eq!(by_bfs[0], seed);
        by_dfs.sort();
        by_bfs.sort();
        assert_eq!(by_dfs, by_bfs);
    }
}
