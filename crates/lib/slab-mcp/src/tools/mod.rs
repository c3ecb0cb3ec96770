//! MCP tool modules.
//!
//! One module per Slab operation: full-text search and single-post lookup.

pub mod post;
pub mod search;
