//! `fixvec-core` — fixed-dimension numeric vectors.
//!
//! The central type is [`FixedVector<T, N>`]: an immutable-shape, ordered
//! sequence of exactly `N` elements of one numeric type, with the length
//! carried as a const generic so dimension errors are caught at compile
//! time wherever the type system allows.
//!
//! # Design
//!
//! - Generic over numeric types via the [`Scalar`] / [`Cast`] / [`Promote`]
//!   traits; mixed-type arithmetic resolves its result type through a single
//!   crate-wide promotion table.
//! - All operations are pure: they return new vectors and never change a
//!   vector's length or element type in place.
//! - Fallible operations (indexing, slicing, integer division) surface
//!   [`VectorError`] to the caller; nothing is retried or swallowed here.
//! - A pair of process-wide atomic [`counters`] tracks instance lifecycles
//!   for diagnostics only.

pub mod counters;
pub mod error;
pub mod scalar;
pub mod vector;

// Re-export key types at crate root for convenience.
pub use error::{Result, VectorError};
pub use scalar::{Cast, Promote, Promoted, Scalar};
pub use vector::{concat, FixedVector};

/// Items intended for glob-import: `use fixvec_core::prelude::*;`
pub mod prelude {
    pub use crate::counters::{live_instances, total_created};
    pub use crate::error::{Result, VectorError};
    pub use crate::scalar::{Cast, Promote, Promoted, Scalar};
    pub use crate::vector::{concat, FixedVector};
}
