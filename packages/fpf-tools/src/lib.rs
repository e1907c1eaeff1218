//! FPF tools - download, strip, split and assemble the FPF specification.
//!
//! The FPF spec is one large markdown document. This crate treats it as a
//! sequence of lines, some of which are headers with a nesting level, and
//! offers line-exact transformations on top of that view.
//!
//! # Example
//!
//! ```
//! use fpf_tools::split::{split, PartId};
//!
//! let parts = split("Intro\n# Part A\nKernel\n");
//! assert_eq!(parts.ids(), vec![PartId::Preface, PartId::Letter('A')]);
//! assert_eq!(parts.reassemble(), "Intro\n# Part A\nKernel\n");
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Constants, default paths, keyword lists and header patterns
//! - [`error`]: Error types and Result alias
//! - [`document`]: Line and header classification
//! - [`strip`]: Keyword-driven section removal (lite and aggressive)
//! - [`split`]: Part splitting with a round-trip integrity check
//! - [`manifest`]: YAML manifest parsing and writing
//! - [`resolve`]: Reference and profile path resolution
//! - [`assemble`]: Manifest assembly with baseline statistics
//! - [`stats`]: Line statistics and reports
//! - [`http`]: HTTP client
//! - [`download`]: Spec download
//! - [`cli`]: Command-line interface

pub mod assemble;
pub mod cli;
pub mod config;
pub mod document;
pub mod download;
pub mod error;
pub mod fs_util;
pub mod http;
pub mod manifest;
pub mod resolve;
pub mod split;
pub mod stats;
pub mod strip;

pub use error::{FpfError, Result};
