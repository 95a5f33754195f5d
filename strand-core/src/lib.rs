//! Shared primitives and traits for the strand sequence toolkit.
//!
//! `strand-core` provides the foundation the other strand crates build on:
//!
//! - **Error types** — [`StrandError`] and [`Result`] for structured error handling
//! - **Traits** — Core abstractions like [`Sequence`], [`ContentAddressable`], [`Summarizable`]
//! - **Hashing** — SHA-256 content addressing for sequence fingerprints

pub mod error;
pub mod hash;
pub mod traits;

pub use error::{Result, StrandError};
pub use traits::*;
