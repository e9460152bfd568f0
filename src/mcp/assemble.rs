//! Projection of fetched documents into response dialects
//!
//! One internal `Document` representation, two serializations: the legacy
//! flat shape and the nested MCP envelope. Assembly is pure and performs no
//! I/O; identical documents always produce byte-identical envelopes.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use url::Url;

use super::protocol::{McpContext, McpResponse, MCP_PROTOCOL_VERSION, SERVER_NAME};
use crate::scraper::Document;

/// Context type tag carried in envelope metadata
pub const CONTEXT_TYPE: &str = "mdn_document";

/// Fixed directive telling a downstream consumer how to use the content
pub const INSTRUCTION: &str = "The following document was retrieved from the Mozilla Developer \
     Network (MDN). Refer to this material when answering developer questions.";

/// Legacy flat response shape, emitted by `/fetch-mdn`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LegacyDocResponse {
    pub status: String,
    pub url: String,
    pub title: String,
    pub content: String,
    pub source: String,
}

/// Project a document into the legacy flat dialect
pub fn to_legacy(doc: &Document) -> LegacyDocResponse {
    LegacyDocResponse {
        status: "success".to_string(),
        url: doc.url.clone(),
        title: doc.title.clone(),
        content: doc.content.clone(),
        source: doc.source.clone(),
    }
}

/// Derive a context id from the URL's last non-empty path segment.
///
/// Deliberately URL-derived rather than timestamp-derived so that repeated
/// requests for the same document produce identical envelopes. Trailing
/// slashes are ignored; URLs without path segments fall back to "doc".
pub fn context_id(url: &str) -> String {
    let segment = Url::parse(url)
        .ok()
        .and_then(|parsed| {
            parsed.path_segments().and_then(|segments| {
                segments
                    .filter(|s| !s.is_empty())
                    .last()
                    .map(|s| s.to_string())
            })
        })
        .unwrap_or_else(|| "doc".to_string());

    format!("mdn-{}", segment)
}

/// Markdown body for the MCP dialect: H1 title, optional description line,
/// then the extracted content
pub fn markdown_text(doc: &Document) -> String {
    match doc.description.as_deref() {
        Some(desc) if !desc.is_empty() => {
            format!("# {}\n\n{}\n\n{}", doc.title, desc, doc.content)
        }
        _ => format!("# {}\n\n{}", doc.title, doc.content),
    }
}

/// Project a document into the MCP envelope dialect
pub fn to_mcp(doc: &Document) -> McpResponse {
    let mut metadata = Map::new();
    metadata.insert("source".to_string(), json!(doc.source));
    metadata.insert("url".to_string(), json!(doc.url));
    metadata.insert("type".to_string(), json!(CONTEXT_TYPE));
    metadata.insert("instruction".to_string(), json!(INSTRUCTION));

    let context = McpContext {
        id: context_id(&doc.url),
        content: json!({
            "text": markdown_text(doc),
            "format": "markdown",
        }),
        metadata,
        attachments: Map::new(),
    };

    let mut response_metadata = Map::new();
    response_metadata.insert("server".to_string(), json!(SERVER_NAME));
    response_metadata.insert(
        "protocol".to_string(),
        json!(format!("mcp/{}", MCP_PROTOCOL_VERSION)),
    );

    McpResponse {
        contexts: vec![context],
        metadata: response_metadata,
    }
}
