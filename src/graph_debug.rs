use crate::adjacency::*;
use std::fmt;

type EdgeLabel<'a, G> = Box<dyn Fn(&G, &EdgeDescriptorOf<G>) -> String + 'a>;

/// Dumps any adjacency list, one vertex id per line and one indented line
/// per out-edge.
///
/// Edges print as `-> target`, or as `--label-> target` once
/// [`edge_label`](Self::edge_label) is set.
///
/// ```
/// use dyngraph::prelude::*;
///
/// let g: Vec<Vec<(u32, char)>> = vec![vec![(1, 'a')], vec![]];
/// assert_eq!(format!("{:?}", GraphDebug::new(&g)), "0\n  -> 1\n1\n");
/// let labeled = GraphDebug::new(&g).edge_label(|g, uv| edge_value(g, uv).to_string());
/// assert_eq!(format!("{:?}", labeled), "0\n  --a-> 1\n1\n");
/// ```
pub struct GraphDebug<'a, G>
where
    G: AdjacencyList,
{
    graph: &'a G,
    margin: usize,
    step: usize,
    label: Option<EdgeLabel<'a, G>>,
}

impl<'a, G> GraphDebug<'a, G>
where
    G: AdjacencyList,
{
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            margin: 0,
            step: 2,
            label: None,
        }
    }

    /// `init` spaces before vertex lines, `step` more before edge lines.
    pub fn indent(mut self, init: usize, step: usize) -> Self {
        self.margin = init;
        self.step = step;
        self
    }

    /// Prints `label(graph, uv)` on every edge line.
    pub fn edge_label<F>(mut self, label: F) -> Self
    where
        F: Fn(&G, &EdgeDescriptorOf<G>) -> String + 'a,
    {
        self.label = Some(Box::new(label));
        self
    }

    fn pad(&self, f: &mut fmt::Formatter<'_>, level: usize) -> fmt::Result {
        write!(f, "{:width$}", "", width = self.margin + self.step * level)
    }
}

impl<'a, G> fmt::Debug for GraphDebug<'a, G>
where
    G: AdjacencyList,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let g = self.graph;
        for u in vertices(g) {
            self.pad(f, 0)?;
            writeln!(f, "{:?}", vertex_id(g, &u))?;
            for uv in edges(g, &u) {
                self.pad(f, 1)?;
                match &self.label {
                    Some(label) => writeln!(f, "--{}-> {:?}", label(g, &uv), target_id(g, &uv))?,
                    None => writeln!(f, "-> {:?}", target_id(g, &uv))?,
                }
            }
        }
        Ok(())
    }
}
