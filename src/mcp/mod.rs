//! Model Context Protocol envelope types and document projections

pub mod assemble;
pub mod protocol;

pub use assemble::{
    context_id, markdown_text, to_legacy, to_mcp, LegacyDocResponse, CONTEXT_TYPE, INSTRUCTION,
};
pub use protocol::{
    build_manifest, Manifest, McpContext, McpResponse, ParamSpec, MCP_PROTOCOL_VERSION, SERVER_NAME,
};
