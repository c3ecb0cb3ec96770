//! Core services for slab-mcp.
//!
//! This crate owns the GraphQL client for the Slab API, the Quill delta text
//! extraction, the plain-text rendering of search and post results, and the
//! control plane that ties them together for the MCP tools.

pub mod client;
pub mod control;
pub mod format;
pub mod rich_text;
