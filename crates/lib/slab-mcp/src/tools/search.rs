use rmcp::{
    ErrorData,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content},
    schemars,
    tool,
    tool_router,
};
use serde::{Deserialize, Serialize};
use slab_core::control::DEFAULT_SEARCH_LIMIT;

use crate::{SlabMcp, helpers};

pub const SEARCH_TOOL_NAME: &str = "slab_search";

/// Parameters for searching Slab posts, users, and comments.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct SearchParams {
    /// Search query string
    pub query: String,
    /// Maximum number of results to return (default: 10)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl SearchParams {
    /// Requested page size; missing or zero falls back to the default.
    #[must_use]
    pub fn limit(&self) -> u32 {
        self.limit
            .filter(|limit| *limit > 0)
            .unwrap_or(DEFAULT_SEARCH_LIMIT)
    }
}

#[tool_router(router = tool_router_search, vis = "pub")]
impl SlabMcp {
    #[tool(description = "Search through Slab documentation and posts")]
    async fn slab_search(
        &self,
        Parameters(params): Parameters<SearchParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let text = self
            .control
            .search(&params.query, params.limit())
            .await
            .map_err(|err| helpers::tool_failed(SEARCH_TOOL_NAME, &err))?;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }
}
