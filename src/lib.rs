//! Adjacency-list graphs addressed through lightweight descriptors.
//!
//! # Descriptors and the access protocol
//!
//! Algorithms see vertices and edges as [descriptors](descriptor): a copyable
//! index or key plus, for edges, the vertex the edge was reached from. All
//! data is read through the free functions of [`adjacency`] (`vertices`,
//! `edges`, `target_id`, `edge_value`, ...), which any container can serve.
//! Plain `Vec<Vec<u32>>` or `BTreeMap<String, Vec<String>>` already do.
//!
//! # `DynamicGraph`
//!
//! [`DynamicGraph`](container::DynamicGraph) is the configurable container of
//! this crate. A policy type such as [`Vov`](container::Vov) picks the vertex
//! container, the per-vertex edge container and which optional facets each
//! edge and vertex carries. Facets that are switched off cost no storage and
//! their accessors do not exist.
//!
//! ```
//! use dyngraph::prelude::*;
//!
//! let g: DynamicGraph<Vov<Value<f64>>> =
//!     DynamicGraph::from_edge_list([(0u32, 1u32, 2.5), (0, 2, 1.0), (2, 1, 0.5)]).unwrap();
//! assert_eq!(num_vertices(&g), 3);
//! let u = find_vertex(&g, &0).unwrap();
//! let total: f64 = edges(&g, &u).map(|uv| *edge_value(&g, &uv)).sum();
//! assert_eq!(total, 3.5);
//! ```
//!
//! # Views and algorithms
//!
//! [`views`] and [`algorithm`] are written only against the access protocol.

pub mod adjacency;
pub mod algorithm;
pub mod container;
pub mod descriptor;
mod error;
pub use self::error::*;
pub mod id;
pub mod shape;
pub mod store;
pub mod views;
mod graph_debug;
pub use self::graph_debug::*;

/// Everything needed to build a graph and walk it.
pub mod prelude {
    pub use crate::adjacency::*;
    pub use crate::container::{
        Bidirectional, CopyableEdge, CopyableVertex, DynamicGraph, GraphTraits, LoadOptions,
        NoValue, Sourced, Unidirectional, Unsourced, Value,
    };
    pub use crate::container::{
        Dod, Dofl, Dol, Dom, Dos, Dous, Dov, Mod, Mofl, Mol, Mom, Mos, Mous, Mov, Uod, Uofl, Uol,
        Uom, Uos, Uous, Uov, Vod, Vofl, Vol, Vom, Vos, Vous, Vov,
    };
    pub use crate::descriptor::{EdgeDescriptor, InEdge, OutEdge, VertexDescriptor};
    pub use crate::error::GraphError;
    pub use crate::views::*;
    pub use crate::GraphDebug;
}
