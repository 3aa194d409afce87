//! Integration tests for rqlens.

pub mod adapters_test;
pub mod headless_test;
pub mod queries_test;
pub mod results_test;
