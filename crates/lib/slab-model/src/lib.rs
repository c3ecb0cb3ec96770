//! Response models and GraphQL documents for the Slab API.
//!
//! Models mirror the shapes returned by the Slab GraphQL endpoint. Search
//! nodes are resolved into an explicit [`models::SearchResult`] once, at parse
//! time.

pub mod models;
pub mod queries;
