//! Utility modules shared across Folio crates.
//!
//! # Modules
//!
//! - [`ids`]: Heading anchor-id derivation and de-duplication

pub mod ids;
