//! Lightweight handles to positions in vertex and edge containers.
//!
//! A descriptor never owns graph data. It stores either an index (random
//! access storage) or a key (node based storage) and is resolved to data only
//! when asked, against the container it was produced from.
//!
//! Descriptors do not borrow their container, so they stay usable while the
//! graph is mutated. Whether they still denote the same element afterwards
//! follows the container's own invalidation rules.
mod vertex;
pub use self::vertex::*;
mod edge;
pub use self::edge::*;
mod view;
pub use self::view::*;
