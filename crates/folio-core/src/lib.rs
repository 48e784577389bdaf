//! Folio Core: shared types, errors, and utilities.
//!
//! This crate provides the foundational types used across all Folio crates.
//! It has no internal Folio dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`theme`]: Highlight theme identities and theme load errors
//! - [`signal`]: Shared completion signals for coalesced async work
//! - [`util`]: Heading anchor-id utilities

#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]

pub mod error;
pub mod signal;
pub mod theme;
pub mod util;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use signal::{CompletionSignal, SignalState};
pub use theme::{Theme, ThemeLoadError};

// Convenience re-exports from util
pub use util::ids::{anchor_id, AnchorIds};
