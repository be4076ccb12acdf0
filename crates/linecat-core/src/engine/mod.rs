//! # Engine Module
//!
//! The stateful part of the library: loading catalog directories, parsing and filtering
//! transitions files, and caching the most recent transition set.
//!
//! - [`directory`] - Best-effort molecule listing with per-file existence probes
//! - [`transitions`] - Fixed-width transition parsing with temperature/intensity filters
//!   and a hard cap on the number of retained lines
//! - [`cache`] - The single-entry cache keyed by the full query tuple
//! - [`config`] - Reader configuration and its builder
//! - [`report`] - Event callbacks (skipped molecules, cache hits, truncation)
//! - [`error`] - The error taxonomy shared by all operations

pub mod cache;
pub mod config;
pub mod directory;
pub mod error;
pub mod report;
pub mod transitions;
