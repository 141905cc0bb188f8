//! Graph algorithms over index addressed graphs.
//!
//! Everything here takes a graph whose vertex descriptors are plain indices
//! (`AdjacencyList<VertexStorage = usize>`): sequential vertex containers,
//! raw `Vec<Vec<_>>` included. Results are indexed the same way.
mod dijkstra;
pub use self::dijkstra::*;
mod connected_components;
pub use self::connected_components::*;
mod toposort;
pub use self::toposort::*;
mod mst;
pub use self::mst::*;
