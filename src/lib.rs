//! rqlens - a terminal viewer for SPARQL query results.
//!
//! This library exposes the core modules for use in integration tests.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod error;
pub mod headless;
pub mod logging;
pub mod queries;
pub mod results;
pub mod tui;
