/// Errors raised while constructing or loading a graph.
///
/// Every variant names the offending id and, where one exists, the bound it
/// violated. Vertices and edges inserted before the failure stay in place.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    #[error("{field} id {id} exceeds the number of vertices ({bound}) in load_edges")]
    EdgeIdOutOfRange {
        field: &'static str,
        id: usize,
        bound: usize,
    },
    #[error("vertex id {id} in load_vertices exceeds current vertex container size ({bound})")]
    VertexIdOutOfRange { id: usize, bound: usize },
    #[error("{field} id {id} cannot address a sequential vertex container")]
    InvalidVertexId { field: &'static str, id: String },
    #[error("max_vertex_id {max_vertex_id} would overflow vertex count")]
    VertexIdOverflow { max_vertex_id: String },
    #[error("partition_start_ids must start with 0 (found {first})")]
    PartitionStart { first: usize },
    #[error("partition_start_ids must be strictly increasing ({prev} then {next} at index {index})")]
    PartitionNotIncreasing {
        index: usize,
        prev: usize,
        next: usize,
    },
    #[error("partition_start_ids contain id {id} greater than vertex count {count}")]
    PartitionExceedsVertexCount { id: usize, count: usize },
    #[error("vertex {id} not found")]
    VertexNotFound { id: String },
    #[error("negative edge weight {weight} encountered")]
    NegativeEdgeWeight { weight: String },
    #[error("distance to vertex {vertex} overflows the weight type")]
    DistanceOverflow { vertex: usize },
}

pub type Result<T> = std::result::Result<T, GraphError>;

impl GraphError {
    pub(crate) fn invalid_id<Id: std::fmt::Debug>(field: &'static str, id: &Id) -> Self {
        Self::InvalidVertexId {
            field,
            id: format!("{:?}", id),
        }
    }

    pub(crate) fn not_found<Id: std::fmt::Debug>(id: &Id) -> Self {
        Self::VertexNotFound {
            id: format!("{:?}", id),
        }
    }
}
