//! MCP server implementation for slab-mcp.
//!
//! This crate wires the Slab control plane into rmcp tool handlers and exposes
//! the two MCP tools, `slab_search` and `slab_get_post`.

mod helpers;
mod tools;
pub mod server;

use std::sync::Arc;

use rmcp::{
    ErrorData,
    RoleServer,
    ServerHandler,
    handler::server::tool::{ToolCallContext, ToolRouter},
    model::{
        CallToolRequestParams,
        CallToolResult,
        ListToolsResult,
        PaginatedRequestParams,
        ServerCapabilities,
        ServerInfo,
    },
    service::RequestContext,
};
use slab_core::control::SlabControlPlane;
use tracing::debug;

pub use tools::post::{GET_POST_TOOL_NAME, GetPostParams};
pub use tools::search::{SEARCH_TOOL_NAME, SearchParams};

pub const SERVER_NAME: &str = "slab-mcp-server";

const SERVER_INSTRUCTIONS: &str = r"slab-mcp exposes Slab documentation search and retrieval as MCP tools.

Tools:
- `slab_search` searches posts, users, and comments. Arguments: `query` (required), `limit` (optional, default 10).
  Each hit is rendered as a text block with its type and ID.
- `slab_get_post` fetches one post by `postId` and returns its full text content.

Notes:
- Use the `ID` of a post hit from `slab_search` as the `postId` for `slab_get_post`.
- Only the first page of search results is returned.";

/// MCP server wrapper around the Slab control plane and tool routers.
#[derive(Clone)]
pub struct SlabMcp {
    tool_router: ToolRouter<Self>,
    control: Arc<SlabControlPlane>,
}

impl SlabMcp {
    /// Creates a new server owning the control plane.
    #[must_use]
    pub fn new(control: SlabControlPlane) -> Self {
        Self::with_control(Arc::new(control))
    }

    /// Creates a new server using a shared control plane handle.
    #[must_use]
    pub fn with_control(control: Arc<SlabControlPlane>) -> Self {
        let tool_router = Self::tool_router_search() + Self::tool_router_post();
        Self {
            tool_router,
            control,
        }
    }

    /// Names of the registered tools.
    #[must_use]
    pub fn tool_names(&self) -> Vec<String> {
        self.tool_router
            .list_all()
            .into_iter()
            .map(|tool| tool.name.to_string())
            .collect()
    }

    /// Rejects names that no tool is registered under.
    ///
    /// # Errors
    /// Returns a `METHOD_NOT_FOUND` error for unknown tool names.
    pub fn ensure_tool(&self, name: &str) -> Result<(), ErrorData> {
        if self.tool_router.list_all().iter().any(|tool| tool.name == name) {
            Ok(())
        } else {
            Err(helpers::unknown_tool(name))
        }
    }
}

impl ServerHandler for SlabMcp {
    fn get_info(&self) -> ServerInfo {
        let mut info = ServerInfo {
            instructions: Some(SERVER_INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .build(),
            ..Default::default()
        };
        info.server_info.name = SERVER_NAME.to_string();
        info.server_info.version = env!("CARGO_PKG_VERSION").to_string();
        info
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, ErrorData> {
        Ok(ListToolsResult::with_all_items(self.tool_router.list_all()))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParams,
        context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, ErrorData> {
        self.ensure_tool(&request.name)?;
        debug!(tool = %request.name, "dispatching tool call");
        let tool_context = ToolCallContext::new(self, request, context);
        self.tool_router.call(tool_context).await
    }
}


#[cfg(test)]
mod tests {
    use mockito::Server;
    use rmcp::model::ErrorCode;
    use rmcp::service::ServiceError;
    use rmcp::{serve_client, serve_server};

    use super::*;
    use crate::test_support::mcp_for;

    #[tokio::test]
    async fn registers_exactly_the_slab_tools() {
        let server = Server::new_async().await;
        let mut names = mcp_for(&server).tool_names();
        names.sort();
        assert_eq!(names, vec![GET_POST_TOOL_NAME, SEARCH_TOOL_NAME]);
    }

    #[tokio::test]
    async fn unknown_tool_is_method_not_found() {
        let server = Server::new_async().await;
        let err = mcp_for(&server)
            .ensure_tool("slab_delete_everything")
            .expect_err("unknown tool should be rejected");

        assert_eq!(err.code, ErrorCode::METHOD_NOT_FOUND);
        assert_eq!(err.message, "Unknown tool: slab_delete_everything");
    }

    #[tokio::test]
    async fn server_info_names_the_server() {
        let server = Server::new_async().await;
        let info = mcp_for(&server).get_info();

        assert_eq!(info.server_info.name, SERVER_NAME);
        assert!(info.capabilities.tools.is_some());
    }

    #[tokio::test]
    async fn unknown_tool_call_over_transport_is_method_not_found() {
        let server = Server::new_async().await;
        let service = mcp_for(&server);
        let (server_io, client_io) = tokio::io::duplex(4096);
        tokio::spawn(async move {
            let running = serve_server(service, server_io)
                .await
                .expect("server should start");
            running.waiting().await.expect("server should stop cleanly");
        });

        let client = serve_client((), client_io)
            .await
            .expect("client should connect");

        let mut listed: Vec<String> = client
            .list_all_tools()
            .await
            .expect("tools should list")
            .into_iter()
            .map(|tool| tool.name.to_string())
            .collect();
        listed.sort();
        assert_eq!(listed, vec![GET_POST_TOOL_NAME, SEARCH_TOOL_NAME]);

        let err = client
            .call_tool(CallToolRequestParams {
                meta: None,
                name: "slab_delete_everything".into(),
                arguments: None,
                task: None,
            })
            .await
            .expect_err("unknown tool should be rejected");

        match err {
            ServiceError::McpError(err) => {
                assert_eq!(err.code, ErrorCode::METHOD_NOT_FOUND);
                assert_eq!(err.message, "Unknown tool: slab_delete_everything");
            }
            other => panic!("expected an MCP error, got {other:?}"),
        }
    }
}
