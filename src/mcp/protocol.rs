//! Model Context Protocol structures
//!
//! Lightweight envelope types for the `contexts[]` response shape, plus the
//! static manifest describing this server's single capability.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

use crate::version::VERSION_NUMBER;

/// Protocol dialect version advertised in the manifest
pub const MCP_PROTOCOL_VERSION: &str = "1.0.0";

/// Name the server registers under
pub const SERVER_NAME: &str = "mdn-web-scraper";

/// One retrieved-and-packaged document plus provenance metadata
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct McpContext {
    pub id: String,
    pub content: Value,
    pub metadata: Map<String, Value>,
    pub attachments: Map<String, Value>,
}

/// Response envelope: an ordered sequence of contexts. This server always
/// emits exactly one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct McpResponse {
    pub contexts: Vec<McpContext>,
    pub metadata: Map<String, Value>,
}

/// Schema of a single manifest parameter
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParamSpec {
    #[serde(rename = "type")]
    pub param_type: String,
    pub description: String,
    pub required: bool,
}

/// Static capability descriptor served at the manifest endpoints
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Manifest {
    pub name: String,
    pub version: String,
    pub description: String,
    pub protocols: HashMap<String, String>,
    pub parameters: HashMap<String, ParamSpec>,
}

/// Build the manifest. Immutable for the life of the process.
pub fn build_manifest() -> Manifest {
    let mut protocols = HashMap::new();
    protocols.insert("mcp".to_string(), MCP_PROTOCOL_VERSION.to_string());

    let mut parameters = HashMap::new();
    parameters.insert(
        "url".to_string(),
        ParamSpec {
            param_type: "string".to_string(),
            description: "MDN URL of the document to fetch".to_string(),
            required: true,
        },
    );

    Manifest {
        name: SERVER_NAME.to_string(),
        version: VERSION_NUMBER.to_string(),
        description: "MCP server that scrapes MDN web documents and serves them as contexts"
            .to_string(),
        protocols,
        parameters,
    }
}
