//! The graph access protocol.
//!
//! Every operation is a trait method with a structural default that a
//! container may override, plus a free function of the same name. Algorithms
//! and views are written against the free functions only, so a raw
//! `Vec<Vec<u32>>` and a [`DynamicGraph`](crate::container::DynamicGraph) are
//! interchangeable inputs.
//!
//! Asking for a facet a graph does not carry is a type error:
//!
//! ```compile_fail
//! use dyngraph::prelude::*;
//!
//! let g: DynamicGraph<Vov> = DynamicGraph::from_edge_list([(0u32, 1u32)]).unwrap();
//! let u = find_vertex(&g, &0).unwrap();
//! let uv = edges(&g, &u).next().unwrap();
//! let _ = edge_value(&g, &uv); // edges carry no value
//! ```
//!
//! ```compile_fail
//! use dyngraph::prelude::*;
//!
//! let g: DynamicGraph<Vov> = DynamicGraph::from_edge_list([(0u32, 1u32)]).unwrap();
//! let u = find_vertex(&g, &0).unwrap();
//! let uv = edges(&g, &u).next().unwrap();
//! let _ = source_id(&g, &uv); // edges do not store their source
//! ```
//!
//! ```compile_fail
//! use dyngraph::prelude::*;
//!
//! let g: DynamicGraph<Vov<NoValue, NoValue, NoValue, u32, Sourced>> =
//!     DynamicGraph::from_edge_list([(0u32, 1u32)]).unwrap();
//! let v = find_vertex(&g, &1).unwrap();
//! let _ = in_edges(&g, &v); // no reverse adjacency
//! ```
//!
//! The same calls compile once the facets are switched on:
//!
//! ```
//! use dyngraph::prelude::*;
//!
//! type Tr = Vov<Value<i32>, NoValue, NoValue, u32, Sourced, Bidirectional>;
//! let g: DynamicGraph<Tr> = DynamicGraph::from_edge_list([(0u32, 1u32, 7)]).unwrap();
//! let v = find_vertex(&g, &1).unwrap();
//! let vu = in_edges(&g, &v).next().unwrap();
//! assert_eq!(source_id(&g, &vu), 0);
//! assert_eq!(target_id(&g, &vu), 1);
//! assert_eq!(*edge_value(&g, &vu), 7);
//! ```
mod r#trait;
pub use self::r#trait::*;
mod dispatch;
pub use self::dispatch::*;
mod cpo;
pub use self::cpo::*;
mod raw;
