use std::borrow::Cow;
use std::fmt;

use rmcp::ErrorData;
use rmcp::model::ErrorCode;

pub fn mcp_err(code: ErrorCode, message: impl Into<Cow<'static, str>>) -> ErrorData {
    ErrorData {
        code,
        message: message.into(),
        data: None,
    }
}

pub fn unknown_tool(name: &str) -> ErrorData {
    mcp_err(ErrorCode::METHOD_NOT_FOUND, format!("Unknown tool: {name}"))
}

/// Wraps a failure inside a tool as an internal error naming the tool.
pub fn tool_failed(tool: &str, err: &impl fmt::Display) -> ErrorData {
    mcp_err(
        ErrorCode::INTERNAL_ERROR,
        format!("Error executing {tool}: {err}"),
    )
}
