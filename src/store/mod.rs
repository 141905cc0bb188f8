//! Adapters over the standard containers a graph may be built from.
//!
//! | role            | containers                                                    | position         |
//! |-----------------|---------------------------------------------------------------|------------------|
//! | vertices        | `Vec`, `VecDeque`                                             | `usize`          |
//! | vertices        | `BTreeMap`, `HashMap`                                         | [`Keyed`] key    |
//! | edges           | `Vec`, `VecDeque`                                             | ordinal `usize`  |
//! | edges           | [`List`], [`ForwardList`]                                     | node slot        |
//! | edges           | `BTreeSet`, `HashSet`                                         | element key      |
//! | edges           | `BTreeMap`                                                    | map key          |
//!
//! Hash based containers always use [`ahash::RandomState`].
//!
//! [`Keyed`]: crate::descriptor::Keyed
mod vertices;
pub use self::vertices::*;
mod list;
pub use self::list::*;
mod edges;
pub use self::edges::*;
mod vertex_data;
pub use self::vertex_data::*;
