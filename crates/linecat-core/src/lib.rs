//! # linecat Core Library
//!
//! A reader for molecular spectroscopy line catalogs distributed in the fixed-width
//! JPL and COLOGNE (CDMS) formats.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer layout, the same separation used throughout the crate:
//!
//! - **[`core`]: The Foundation.** Stateless pieces: the fixed-width field descriptor, the
//!   transition record layout, the catalog file source abstraction, and the plain data models
//!   (`CatalogKind`, `MoleculeEntry`, `Transition`).
//!
//! - **[`engine`]: The Logic Core.** Directory loading with best-effort file probing, transition
//!   parsing with temperature/intensity filtering and the truncation cap, the single-entry
//!   transition cache, configuration, errors and event reporting.
//!
//! - **[`workflows`]: The Public API.** [`workflows::query::CatalogReader`] ties the engine
//!   together behind molecule and transition lookups.

pub mod core;
pub mod engine;
pub mod workflows;
