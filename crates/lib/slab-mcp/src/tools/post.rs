use rmcp::{
    ErrorData,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content},
    schemars,
    tool,
    tool_router,
};
use serde::{Deserialize, Serialize};

use crate::{SlabMcp, helpers};

pub const GET_POST_TOOL_NAME: &str = "slab_get_post";

/// Parameters for fetching a single post.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct GetPostParams {
    /// The ID of the post to retrieve
    #[serde(rename = "postId")]
    pub post_id: String,
}

#[tool_router(router = tool_router_post, vis = "pub")]
impl SlabMcp {
    #[tool(description = "Get a specific Slab post by ID")]
    async fn slab_get_post(
        &self,
        Parameters(params): Parameters<GetPostParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let text = self
            .control
            .get_post(&params.post_id)
            .await
            .map_err(|err| helpers::tool_failed(GET_POST_TOOL_NAME, &err))?;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }
}
