//! Request and response bodies for the HTTP surface

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Body of `POST /fetch-mdn`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchDocRequest {
    pub url: String,
}

/// Body of `POST /mcp` and `POST /mcp/contexts`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct McpInvokeRequest {
    #[serde(default)]
    pub parameters: HashMap<String, Value>,
    #[serde(default)]
    pub metadata: HashMap<String, Value>,
}

impl McpInvokeRequest {
    /// The `url` parameter, when present and a string
    pub fn url(&self) -> Option<&str> {
        self.parameters.get("url").and_then(Value::as_str)
    }
}
