//! # folio-cli
//!
//! The `folio` command: configuration loading, logging setup and the
//! `list`, `show`, `search` and `config` commands over the Folio crates.

#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod config;
pub mod logging;

pub use app::App;
pub use cli::{CliArgs, Command};
pub use config::FolioConfig;
