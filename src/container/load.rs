use super::copyable::{CopyableEdge, CopyableVertex};
use super::edge::DynamicEdge;
use super::facet::SourceFacet;
use super::graph::{CopyableEdgeOf, DynamicGraph, EdgeValueSlot, VertexValueSlot};
use super::policy::{EdgeOf, GraphTraits};
use crate::error::{GraphError, Result};
use crate::store::{EdgeStore, InEdgeSlot, VertexRange, VertexStore};
use tracing::{debug, trace};

/// Runtime knobs of [`DynamicGraph::load_edges_with`] and
/// [`DynamicGraph::load_vertices_with`].
///
/// A `vertex_count` of 0 asks sequential containers to infer it from the
/// largest id seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadOptions {
    pub vertex_count: usize,
    pub edge_count_hint: usize,
}

impl LoadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertex_count(mut self, n: usize) -> Self {
        self.vertex_count = n;
        self
    }

    pub fn edge_count_hint(mut self, n: usize) -> Self {
        self.edge_count_hint = n;
        self
    }
}

impl<Tr: GraphTraits> DynamicGraph<Tr> {
    pub fn load_vertices<I, F>(&mut self, vertices: I, vproj: F) -> Result<()>
    where
        I: IntoIterator,
        F: FnMut(I::Item) -> CopyableVertex<Tr::VertexId, VertexValueSlot<Tr>>,
    {
        self.load_vertices_with(vertices, vproj, LoadOptions::new())
    }

    /// Assigns vertex values by id. A later entry for the same id wins.
    ///
    /// Associative containers insert missing vertices. Sequential ones first
    /// grow to the larger of `vertex_count` and the range's exact size, then
    /// reject ids past the end.
    pub fn load_vertices_with<I, F>(
        &mut self,
        vertices: I,
        vproj: F,
        opts: LoadOptions,
    ) -> Result<()>
    where
        I: IntoIterator,
        F: FnMut(I::Item) -> CopyableVertex<Tr::VertexId, VertexValueSlot<Tr>>,
    {
        let res = self.assign_vertices(vertices, vproj, opts);
        self.extend_last_partition();
        res
    }

    fn assign_vertices<I, F>(&mut self, vertices: I, mut vproj: F, opts: LoadOptions) -> Result<()>
    where
        I: IntoIterator,
        F: FnMut(I::Item) -> CopyableVertex<Tr::VertexId, VertexValueSlot<Tr>>,
    {
        let it = vertices.into_iter();
        if !<Tr::Vertices as VertexRange>::ASSOCIATIVE {
            let mut len = opts.vertex_count;
            if let (lo, Some(hi)) = it.size_hint() {
                if lo == hi {
                    len = len.max(lo);
                }
            }
            self.resize_vertices(len)?;
        }
        let mut loaded = 0usize;
        for item in it {
            let CopyableVertex { id, value } = vproj(item);
            let bound = self.vertices.vertex_count();
            match self.vertices.ensure(&id) {
                Some(v) => v.value = value,
                None => {
                    let idx = self.sequential_index("vertex", &id)?;
                    return Err(GraphError::VertexIdOutOfRange { id: idx, bound });
                }
            }
            loaded += 1;
        }
        debug!(
            loaded,
            vertices = self.vertices.vertex_count(),
            "loaded vertices"
        );
        Ok(())
    }

    pub fn load_edges<I, F>(&mut self, edges: I, eproj: F) -> Result<()>
    where
        I: IntoIterator,
        F: FnMut(I::Item) -> CopyableEdgeOf<Tr>,
        EdgeValueSlot<Tr>: Clone,
    {
        self.load_edges_with(edges, eproj, LoadOptions::new())
    }

    /// Appends projected edges.
    ///
    /// Associative vertex containers insert any endpoint they have not seen.
    /// Sequential ones require every id below the vertex count, growing to
    /// `opts.vertex_count` first. With no vertex count they buffer the
    /// projected edges, size the container once from the largest id, and
    /// reserve each edge container to its final degree before inserting.
    ///
    /// On error, edges inserted so far stay in the graph.
    pub fn load_edges_with<I, F>(&mut self, edges: I, eproj: F, opts: LoadOptions) -> Result<()>
    where
        I: IntoIterator,
        F: FnMut(I::Item) -> CopyableEdgeOf<Tr>,
        EdgeValueSlot<Tr>: Clone,
    {
        let res = self.insert_edges(edges, eproj, opts);
        self.extend_last_partition();
        res
    }

    fn insert_edges<I, F>(&mut self, edges: I, mut eproj: F, opts: LoadOptions) -> Result<()>
    where
        I: IntoIterator,
        F: FnMut(I::Item) -> CopyableEdgeOf<Tr>,
        EdgeValueSlot<Tr>: Clone,
    {
        let before = self.edge_count;
        if <Tr::Vertices as VertexRange>::ASSOCIATIVE {
            for item in edges {
                let e = eproj(item);
                self.insert_edge(e)?;
            }
        } else if opts.vertex_count == 0 {
            self.load_buffered(edges, eproj, opts.edge_count_hint)?;
        } else {
            self.resize_vertices(opts.vertex_count)?;
            for item in edges {
                let e = eproj(item);
                self.check_endpoints(&e)?;
                self.insert_edge(e)?;
            }
        }
        debug!(
            loaded = self.edge_count - before,
            edges = self.edge_count,
            vertices = self.vertices.vertex_count(),
            "loaded edges"
        );
        Ok(())
    }

    fn load_buffered<I, F>(&mut self, edges: I, mut eproj: F, hint: usize) -> Result<()>
    where
        I: IntoIterator,
        F: FnMut(I::Item) -> CopyableEdgeOf<Tr>,
        EdgeValueSlot<Tr>: Clone,
    {
        let mut projected = Vec::with_capacity(hint);
        let mut max_index = self.vertices.vertex_count().saturating_sub(1);
        for item in edges {
            let e = eproj(item);
            let s = self.sequential_index("source", &e.source_id)?;
            let t = self.sequential_index("target", &e.target_id)?;
            max_index = max_index.max(s).max(t);
            projected.push((s, t, e));
        }
        if projected.is_empty() {
            return Ok(());
        }
        self.vertices.grow_to(max_index + 1);
        trace!(
            vertices = self.vertices.vertex_count(),
            edges = projected.len(),
            "inferred vertex count"
        );

        let len = self.vertices.vertex_count();
        let mut degrees = vec![0usize; len];
        let mut in_degrees = vec![0usize; len];
        for (s, t, _) in projected.iter() {
            degrees[*s] += 1;
            in_degrees[*t] += 1;
        }
        let bidirectional = <Tr::InEdges as InEdgeSlot<Tr::VertexId, EdgeOf<Tr>>>::BIDIRECTIONAL;
        for idx in 0..len {
            if degrees[idx] == 0 && (!bidirectional || in_degrees[idx] == 0) {
                continue;
            }
            let id = match <Tr::Vertices as VertexStore<Tr::VertexId>>::id_at_index(idx) {
                Some(id) => id,
                None => continue,
            };
            if let Some(v) = self.vertices.ensure(&id) {
                if degrees[idx] > 0 {
                    v.edges.reserve_edges(degrees[idx]);
                }
                if bidirectional && in_degrees[idx] > 0 {
                    v.in_edges.reserve_in_edges(in_degrees[idx]);
                }
            }
        }
        trace!(bidirectional, "reserved edge containers to final degree");

        for (_, _, e) in projected {
            self.check_endpoints(&e)?;
            self.insert_edge(e)?;
        }
        Ok(())
    }

    fn check_endpoints(&self, e: &CopyableEdgeOf<Tr>) -> Result<()> {
        let bound = self.vertices.vertex_count();
        for (field, id) in [("source", &e.source_id), ("target", &e.target_id)] {
            let idx = self.sequential_index(field, id)?;
            if idx >= bound {
                return Err(GraphError::EdgeIdOutOfRange {
                    field,
                    id: idx,
                    bound,
                });
            }
        }
        Ok(())
    }

    /// Files one edge under its source and, for bidirectional graphs, a copy
    /// under its target. Duplicates dropped by set and map containers are not
    /// counted.
    fn insert_edge(&mut self, e: CopyableEdgeOf<Tr>) -> Result<()>
    where
        EdgeValueSlot<Tr>: Clone,
    {
        let CopyableEdge {
            source_id,
            target_id,
            value,
        } = e;
        let bound = self.vertices.vertex_count();
        match self.vertices.ensure(&target_id) {
            Some(v) => v.in_edges.insert_in_edge(source_id.clone(), || {
                DynamicEdge::new(
                    <Tr::Source as SourceFacet<Tr::VertexId>>::make(source_id.clone()),
                    target_id.clone(),
                    value.clone(),
                )
            }),
            None => return Err(self.out_of_range("target", &target_id, bound)),
        }
        let inserted = match self.vertices.ensure(&source_id) {
            Some(v) => {
                let source = <Tr::Source as SourceFacet<Tr::VertexId>>::make(source_id);
                v.edges
                    .insert_edge(target_id.clone(), DynamicEdge::new(source, target_id, value))
            }
            None => return Err(self.out_of_range("source", &source_id, bound)),
        };
        if inserted {
            self.edge_count += 1;
        }
        Ok(())
    }

    fn out_of_range(&self, field: &'static str, id: &Tr::VertexId, bound: usize) -> GraphError {
        match self.sequential_index(field, id) {
            Ok(idx) => GraphError::EdgeIdOutOfRange {
                field,
                id: idx,
                bound,
            },
            Err(e) => e,
        }
    }
}
