//! Prelude module for datestep crate.
//!
//! Re-exports the derive macros shared by the date and report types.

pub use derive_more::Display;
