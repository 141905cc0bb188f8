//! Iterator views built on the access protocol.
//!
//! None of them look at a container directly, so they work for raw standard
//! containers and [`DynamicGraph`](crate::container::DynamicGraph) alike.
mod vertexlist;
pub use self::vertexlist::*;
mod incidence;
pub use self::incidence::*;
mod neighbors;
pub use self::neighbors::*;
mod edgelist;
pub use self::edgelist::*;
mod bfs;
pub use self::bfs::*;
mod dfs;
pub use self::dfs::*;

/// Stops part or all of a running search. Takes effect on the next advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cancel {
    /// Do not descend from the vertex yielded last.
    Branch,
    /// End the search.
    All,
}
