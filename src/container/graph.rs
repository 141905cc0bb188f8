use super::copyable::{CopyableEdge, CopyableVertex};
use super::facet::{Value, ValueFacet};
use super::load::LoadOptions;
use super::policy::{GraphTraits, VertexOf};
use crate::descriptor::VertexDescriptor;
use crate::error::{GraphError, Result};
use crate::id::IndexId;
use crate::store::{VertexRange, VertexStore};
use std::fmt::{self, Debug};
use std::ops::Range;
use tracing::debug;

pub(crate) type VertexPosOf<Tr> = <<Tr as GraphTraits>::Vertices as VertexRange>::VertexPos;
pub(crate) type EdgeValueSlot<Tr> = <<Tr as GraphTraits>::EdgeValue as ValueFacet>::Slot;
pub(crate) type VertexValueSlot<Tr> = <<Tr as GraphTraits>::VertexValue as ValueFacet>::Slot;
pub(crate) type GraphValueSlot<Tr> = <<Tr as GraphTraits>::GraphValue as ValueFacet>::Slot;

/// Edge as consumed by the loaders of a graph with policy `Tr`.
pub type CopyableEdgeOf<Tr> = CopyableEdge<<Tr as GraphTraits>::VertexId, EdgeValueSlot<Tr>>;

/// A directed adjacency-list graph with policy selected containers.
///
/// Vertices and edges are only ever added. A vertex is identified by its
/// position in sequential containers and by its key in associative ones.
/// The edge total is tracked as a counter since per-vertex containers cannot
/// report it cheaply.
///
/// ```
/// use dyngraph::prelude::*;
///
/// let g: DynamicGraph<Vov<Value<i32>>> =
///     DynamicGraph::from_edge_list([(0u32, 1u32, 10), (1, 2, 20)]).unwrap();
/// let u = find_vertex(&g, &0).unwrap();
/// let uv = edges(&g, &u).next().unwrap();
/// assert_eq!(target_id(&g, &uv), 1);
/// assert_eq!(*edge_value(&g, &uv), 10);
/// ```
pub struct DynamicGraph<Tr: GraphTraits> {
    pub(crate) vertices: Tr::Vertices,
    pub(crate) partitions: Vec<usize>,
    pub(crate) edge_count: usize,
    pub(crate) value: GraphValueSlot<Tr>,
}

impl<Tr: GraphTraits> DynamicGraph<Tr> {
    fn with_slot(value: GraphValueSlot<Tr>) -> Self {
        Self {
            vertices: Tr::Vertices::default(),
            partitions: vec![],
            edge_count: 0,
            value,
        }
    }

    pub fn new() -> Self
    where
        GraphValueSlot<Tr>: Default,
    {
        let mut res = Self::with_slot(Default::default());
        res.seal_empty_partitions();
        res
    }

    /// Builds from edges alone. Sequential vertex containers are sized to
    /// the largest id seen.
    pub fn from_edges<I, F>(edges: I, eproj: F, partition_start_ids: &[usize]) -> Result<Self>
    where
        I: IntoIterator,
        F: FnMut(I::Item) -> CopyableEdgeOf<Tr>,
        EdgeValueSlot<Tr>: Clone,
        GraphValueSlot<Tr>: Default,
    {
        let mut res = Self::with_slot(Default::default());
        res.load_edges(edges, eproj)?;
        res.partitions = partition_start_ids.to_vec();
        res.terminate_partitions()?;
        Ok(res)
    }

    /// Like [`from_edges`](Self::from_edges) with every vertex id below
    /// `vertex_count` present, referenced or not.
    pub fn with_vertex_count<I, F>(
        vertex_count: usize,
        edges: I,
        eproj: F,
        partition_start_ids: &[usize],
    ) -> Result<Self>
    where
        I: IntoIterator,
        F: FnMut(I::Item) -> CopyableEdgeOf<Tr>,
        EdgeValueSlot<Tr>: Clone,
        GraphValueSlot<Tr>: Default,
    {
        let mut res = Self::with_slot(Default::default());
        res.check_vertex_count(vertex_count)?;
        res.load_edges_with(edges, eproj, LoadOptions::new().vertex_count(vertex_count))?;
        res.partitions = partition_start_ids.to_vec();
        res.terminate_partitions()?;
        Ok(res)
    }

    /// Loads vertices first, then edges bounded by the loaded vertex count.
    pub fn from_edges_and_vertices<I, F, J, G>(
        edges: I,
        vertices: J,
        eproj: F,
        vproj: G,
        partition_start_ids: &[usize],
    ) -> Result<Self>
    where
        I: IntoIterator,
        F: FnMut(I::Item) -> CopyableEdgeOf<Tr>,
        J: IntoIterator,
        G: FnMut(J::Item) -> CopyableVertex<Tr::VertexId, VertexValueSlot<Tr>>,
        EdgeValueSlot<Tr>: Clone,
        GraphValueSlot<Tr>: Default,
    {
        let mut res = Self::with_slot(Default::default());
        res.load_vertices(vertices, vproj)?;
        let vertex_count = res.vertices.vertex_count();
        res.load_edges_with(edges, eproj, LoadOptions::new().vertex_count(vertex_count))?;
        res.partitions = partition_start_ids.to_vec();
        res.terminate_partitions()?;
        Ok(res)
    }

    /// Builds from already projected edges.
    ///
    /// Sequential vertex containers are sized to the largest id in the list.
    /// An empty list yields an empty graph.
    pub fn from_edge_list<I, E>(edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<CopyableEdgeOf<Tr>>,
        EdgeValueSlot<Tr>: Clone,
        GraphValueSlot<Tr>: Default,
    {
        Self::with_value_from_edge_list(Default::default(), edges)
    }

    pub fn with_value_from_edge_list<I, E>(value: GraphValueSlot<Tr>, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<CopyableEdgeOf<Tr>>,
        EdgeValueSlot<Tr>: Clone,
    {
        let mut res = Self::with_slot(value);
        let edges: Vec<CopyableEdgeOf<Tr>> = edges.into_iter().map(Into::into).collect();
        let hint = edges.len();
        if <Tr::Vertices as VertexRange>::ASSOCIATIVE {
            res.load_edges_with(edges, |e| e, LoadOptions::new().edge_count_hint(hint))?;
        } else {
            let mut last = None;
            for e in edges.iter() {
                let s = res.sequential_index("source", &e.source_id)?;
                let t = res.sequential_index("target", &e.target_id)?;
                last = last.max(Some(s.max(t)));
            }
            if let Some(last) = last {
                res.vertices.grow_to(last + 1);
            }
            let vertex_count = res.vertices.vertex_count();
            let opts = LoadOptions::new()
                .vertex_count(vertex_count)
                .edge_count_hint(hint);
            res.load_edges_with(edges, |e| e, opts)?;
        }
        res.terminate_partitions()?;
        Ok(res)
    }

    /// Removes every vertex and edge. Partitions collapse to one.
    pub fn clear(&mut self) {
        self.vertices.clear_vertices();
        self.edge_count = 0;
        self.partitions.clear();
        self.seal_empty_partitions();
    }

    pub fn reserve_vertices(&mut self, additional: usize) {
        self.vertices.reserve_vertices(additional);
    }

    /// Grows a sequential vertex container to `len` vertices. Never shrinks,
    /// and associative containers ignore it.
    pub fn resize_vertices(&mut self, len: usize) -> Result<()> {
        self.check_vertex_count(len)?;
        self.vertices.grow_to(len);
        Ok(())
    }

    pub fn contains_vertex(&self, id: &Tr::VertexId) -> bool {
        self.vertices.position_of(id).is_some()
    }

    /// Checked counterpart of [`find_vertex`](crate::adjacency::find_vertex).
    pub fn try_find_vertex(&self, id: &Tr::VertexId) -> Result<VertexDescriptor<VertexPosOf<Tr>>> {
        self.vertices
            .position_of(id)
            .map(VertexDescriptor::new)
            .ok_or_else(|| GraphError::not_found(id))
    }

    /// The vertex data behind `id`, bounds checked.
    pub fn vertex_at(&self, id: &Tr::VertexId) -> Result<&VertexOf<Tr>> {
        match self.vertices.position_of(id) {
            Some(pos) => Ok(self.vertices.vertex(&pos)),
            None => Err(GraphError::not_found(id)),
        }
    }

    pub fn vertex_at_mut(&mut self, id: &Tr::VertexId) -> Result<&mut VertexOf<Tr>> {
        match self.vertices.position_of(id) {
            Some(pos) => Ok(self.vertices.vertex_mut(&pos)),
            None => Err(GraphError::not_found(id)),
        }
    }

    /// The underlying vertex container.
    pub fn vertex_store(&self) -> &Tr::Vertices {
        &self.vertices
    }

    /// Partition boundaries, terminated by the vertex count. Empty for
    /// associative vertex containers.
    pub fn partitions(&self) -> &[usize] {
        &self.partitions
    }

    /// Vertex indices of partition `pid`.
    pub fn partition_range(&self, pid: usize) -> Option<Range<usize>> {
        let start = *self.partitions.get(pid)?;
        let end = *self.partitions.get(pid + 1)?;
        Some(start..end)
    }

    pub(crate) fn sequential_index(&self, field: &'static str, id: &Tr::VertexId) -> Result<usize> {
        <Tr::Vertices as VertexStore<Tr::VertexId>>::index_of(id)
            .ok_or_else(|| GraphError::invalid_id(field, id))
    }

    fn check_vertex_count(&self, len: usize) -> Result<()> {
        if <Tr::Vertices as VertexRange>::ASSOCIATIVE || len == 0 {
            return Ok(());
        }
        match <Tr::Vertices as VertexStore<Tr::VertexId>>::id_at_index(len - 1) {
            Some(_) => Ok(()),
            None => Err(GraphError::VertexIdOverflow {
                max_vertex_id: (len - 1).to_string(),
            }),
        }
    }

    /// Stretches the last partition over vertices added after the graph was
    /// built.
    pub(crate) fn extend_last_partition(&mut self) {
        let count = self.vertices.vertex_count();
        if self.partitions.len() >= 2 {
            if let Some(last) = self.partitions.last_mut() {
                *last = (*last).max(count);
            }
        }
    }

    fn seal_empty_partitions(&mut self) {
        if !<Tr::Vertices as VertexRange>::ASSOCIATIVE && self.partitions.is_empty() {
            self.partitions = vec![0, self.vertices.vertex_count()];
        }
    }

    /// Validates the partition start ids and terminates them with the vertex
    /// count. Associative vertex containers keep no partitions.
    pub(crate) fn terminate_partitions(&mut self) -> Result<()> {
        if <Tr::Vertices as VertexRange>::ASSOCIATIVE {
            self.partitions.clear();
            return Ok(());
        }
        if self.partitions.is_empty() {
            self.seal_empty_partitions();
            return Ok(());
        }
        let count = self.vertices.vertex_count();
        if self.partitions[0] != 0 {
            return Err(GraphError::PartitionStart {
                first: self.partitions[0],
            });
        }
        for (i, w) in self.partitions.windows(2).enumerate() {
            if w[0] >= w[1] {
                return Err(GraphError::PartitionNotIncreasing {
                    index: i + 1,
                    prev: w[0],
                    next: w[1],
                });
            }
        }
        let last = self.partitions[self.partitions.len() - 1];
        if last > count {
            return Err(GraphError::PartitionExceedsVertexCount { id: last, count });
        }
        if last < count || self.partitions.len() == 1 {
            self.partitions.push(count);
        }
        debug!(
            partitions = self.partitions.len() - 1,
            vertices = count,
            "terminated partitions"
        );
        Ok(())
    }
}

impl<Tr> DynamicGraph<Tr>
where
    Tr: GraphTraits,
    Tr::VertexId: IndexId,
{
    /// Every id up to and including `max_vertex_id` becomes a vertex.
    pub fn with_max_vertex_id<I, F>(
        max_vertex_id: Tr::VertexId,
        edges: I,
        eproj: F,
        partition_start_ids: &[usize],
    ) -> Result<Self>
    where
        I: IntoIterator,
        F: FnMut(I::Item) -> CopyableEdgeOf<Tr>,
        EdgeValueSlot<Tr>: Clone,
        GraphValueSlot<Tr>: Default,
    {
        if max_vertex_id == Tr::VertexId::max_id() {
            return Err(GraphError::VertexIdOverflow {
                max_vertex_id: format!("{:?}", max_vertex_id),
            });
        }
        let count = match max_vertex_id.to_index() {
            Some(x) => x + 1,
            None => return Err(GraphError::invalid_id("max_vertex_id", &max_vertex_id)),
        };
        Self::with_vertex_count(count, edges, eproj, partition_start_ids)
    }
}

impl<Tr, T> DynamicGraph<Tr>
where
    Tr: GraphTraits<GraphValue = Value<T>>,
{
    /// An empty graph carrying `value`.
    pub fn with_value(value: T) -> Self {
        let mut res = Self::with_slot(value);
        res.seal_empty_partitions();
        res
    }

    pub fn graph_value(&self) -> &T {
        &self.value
    }

    pub fn graph_value_mut(&mut self) -> &mut T {
        &mut self.value
    }
}

impl<Tr> Default for DynamicGraph<Tr>
where
    Tr: GraphTraits,
    GraphValueSlot<Tr>: Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<Tr> Clone for DynamicGraph<Tr>
where
    Tr: GraphTraits,
    Tr::Vertices: Clone,
    GraphValueSlot<Tr>: Clone,
{
    fn clone(&self) -> Self {
        Self {
            vertices: self.vertices.clone(),
            partitions: self.partitions.clone(),
            edge_count: self.edge_count,
            value: self.value.clone(),
        }
    }
}

impl<Tr> Debug for DynamicGraph<Tr>
where
    Tr: GraphTraits,
    Tr::Vertices: Debug,
    GraphValueSlot<Tr>: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicGraph")
            .field("vertices", &self.vertices)
            .field("partitions", &self.partitions)
            .field("edge_count", &self.edge_count)
            .field("value", &self.value)
            .finish()
    }
}
