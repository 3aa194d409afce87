//! TUI widgets for rqlens.
//!
//! Contains the result views and the surrounding chrome.

pub mod chart_view;
pub mod graph_view;
pub mod header;
pub mod map_view;
pub mod query_panel;
pub mod sidebar;
pub mod table;
