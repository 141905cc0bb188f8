use crate::adjacency::*;
use crate::descriptor::VertexDescriptor;
use std::collections::VecDeque;

/// Component labels, indexed by vertex index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Components {
    /// Labels run from 0 in order of each component's lowest vertex index.
    pub labels: Vec<usize>,
    pub count: usize,
}

/// Labels the vertices reachable from each other over out-edges.
///
/// Meant for undirected graphs stored with each edge in both directions.
/// On a directed graph a component is whatever a breadth first search from
/// its lowest unlabeled vertex reaches.
pub fn connected_components<G>(g: &G) -> Components
where
    G: AdjacencyList<VertexStorage = usize> + ?Sized,
{
    let n = num_vertices(g);
    let mut labels = vec![usize::MAX; n];
    let mut count = 0;
    let mut queue = VecDeque::new();
    for start in 0..n {
        if labels[start] != usize::MAX {
            continue;
        }
        labels[start] = count;
        queue.push_back(start);
        while let Some(ui) = queue.pop_front() {
            for uv in edges(g, &VertexDescriptor::new(ui)) {
                if let Some(v) = g.target(&uv) {
                    if labels[v.index()] == usize::MAX {
                        labels[v.index()] = count;
                        queue.push_back(v.index());
                    }
                }
            }
        }
        count += 1;
    }
    Components { labels, count }
}
