//! # fixvec
//!
//! Fixed-dimension numeric vectors with mixed-type promotion, plus an
//! interactive console front end (the `fixvec` binary).
//!
//! One `use fixvec::prelude::*;` gives you [`FixedVector`](fixvec_core::FixedVector),
//! the numeric traits, the concatenation free function, and the lifecycle
//! counter queries.

pub use fixvec_core as core;

/// Glob-import convenience: `use fixvec::prelude::*;`
pub mod prelude {
    pub use fixvec_core::prelude::*;
}
