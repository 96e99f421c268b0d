//! # Talentscout Architecture
//!
//! Talentscout is a **filter-editing and predicate-evaluation engine** over a
//! catalog of creator profiles. It is a library that happens to have a CLI
//! client: the staged editor, the compiler and the result view know nothing
//! about terminals.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, runs the shell, formats output         │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, owns the Session              │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Edit, save, clear, list: one module per operation        │
//! │  - Turns engine results into messages                       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Engine (filter/, predicate.rs, results.rs)                 │
//! │  - StagedFilterStore: committed + pending FilterState       │
//! │  - compile(committed) -> Predicate -> ResultView            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Committed and Pending
//!
//! Every edit lands in *pending*. Only a save (per dimension or per section)
//! copies it into *committed*, and only committed drives the result set. A
//! clear writes the default into both at once. See [`filter::store`].
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust arguments and returns
//! regular Rust types. The one interactive step, confirming Clear All, goes
//! through the [`filter::ConfirmPort`] trait so tests can answer it.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`filter`]: Dimensions, filter state, the staged store, section panel
//! - [`predicate`]: Compiles committed state into a record predicate
//! - [`results`]: Filtering, memoized result view, paging
//! - [`range`]: Clamped integer ranges and their display formats
//! - [`codes`]: Label to catalog code dictionaries
//! - [`facets`]: Option lists offered for each label dimension
//! - [`catalog`] / [`model`]: The record collection and record type
//! - [`config`]: Configuration management
//! - [`init`]: Config directory resolution and startup wiring
//! - [`error`]: Error types
//! - `cli`: Argument parsing, the shell, and printing for the binary (not part of the lib API)

pub mod api;
pub mod catalog;
pub mod codes;
pub mod commands;
pub mod config;
pub mod error;
pub mod facets;
pub mod filter;
pub mod init;
pub mod model;
pub mod predicate;
pub mod range;
pub mod results;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
