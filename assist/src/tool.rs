//! Tool contract binding: the callable surface the model may invoke.
//!
//! One tool is bound for this flow, [`GetInternshipsTool`]. Its description is
//! part of the model's decision input, not just documentation: it states the
//! capability precisely so the model invokes it for questions about available
//! positions and nothing else.
//!
//! Tools in this subsystem never fail toward the model. A retrieval failure
//! mid-generation would abort the whole turn, whereas "no internships found"
//! is an acceptable user-facing outcome for a transient backend error, so
//! failures degrade to an empty sequence and are logged for operators.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::listing::Listing;
use crate::store::ListingStore;

/// Name of the listings tool as declared to the model runtime.
pub const TOOL_GET_INTERNSHIPS: &str = "getInternships";

/// Tool specification handed to the model runtime.
///
/// `input_schema` and `output_schema` are JSON Schema. Only name, description
/// and input schema are forwarded to the runtime (chat-completions tools carry
/// no output schema); the output schema documents the declared shape, which
/// implementations enforce by construction.
#[derive(Debug, Clone)]
pub struct ToolSpec {
    pub name: String,
    /// Human-readable capability statement for the model.
    pub description: Option<String>,
    pub input_schema: Value,
    pub output_schema: Value,
}

/// Result of one tool call, as text appended to the conversation.
#[derive(Debug, Clone)]
pub struct ToolReply {
    pub text: String,
}

/// A callable the model runtime may invoke mid-generation.
///
/// Infallible by contract: implementations translate internal failures into
/// degraded-but-valid replies rather than erroring into the model turn.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Unique tool name, as referenced in model tool calls.
    fn name(&self) -> &str;

    /// Specification (description and schemas) declared to the runtime.
    fn spec(&self) -> ToolSpec;

    /// Executes the tool with the given JSON arguments.
    async fn call(&self, args: Value) -> ToolReply;
}

/// The `getInternships` tool: reads open listings and returns them as a JSON
/// array of [`Listing`] projections, newest first.
///
/// Each invocation performs exactly one store read; no state is shared
/// between calls, so the runtime may invoke it repeatedly within one turn.
pub struct GetInternshipsTool {
    store: Arc<dyn ListingStore>,
}

impl GetInternshipsTool {
    pub fn new(store: Arc<dyn ListingStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Tool for GetInternshipsTool {
    fn name(&self) -> &str {
        TOOL_GET_INTERNSHIPS
    }

    fn spec(&self) -> ToolSpec {
        ToolSpec {
            name: TOOL_GET_INTERNSHIPS.to_string(),
            description: Some(
                "Get a list of available internships and projects from the InternLink website."
                    .to_string(),
            ),
            input_schema: json!({ "type": "object", "properties": {} }),
            output_schema: json!({
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "id": { "type": "string" },
                        "title": { "type": "string" },
                        "company": { "type": "string" },
                        "location": { "type": "string" },
                        "description": { "type": "string" }
                    },
                    "required": ["id", "title", "company", "location", "description"]
                }
            }),
        }
    }

    async fn call(&self, _args: Value) -> ToolReply {
        let text = match self.store.list_open().await {
            Ok(records) => {
                let listings: Vec<Listing> = records.iter().map(|r| r.project()).collect();
                debug!(count = listings.len(), "getInternships returning listings");
                serde_json::to_string(&listings).unwrap_or_else(|e| {
                    warn!(error = %e, "listing serialization failed, degrading to empty result");
                    "[]".to_string()
                })
            }
            Err(e) => {
                // Deliberate policy: degrade, never propagate into the model turn.
                warn!(error = %e, "listing fetch failed, degrading to empty result");
                "[]".to_string()
            }
        };
        ToolReply { text }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{InMemoryListingStore, StoredListing};
    use chrono::{TimeZone, Utc};

    fn posting(id: &str, ts: i64) -> StoredListing {
        StoredListing {
            id: id.into(),
            title: format!("Role {id}"),
            company: "Acme".into(),
            location: "Remote".into(),
            description: "desc".into(),
            posted_at: Some(Utc.timestamp_opt(ts, 0).unwrap()),
        }
    }

    /// **Scenario**: the tool returns the projected listings as a JSON array,
    /// newest first, without store-only fields.
    #[tokio::test]
    async fn call_returns_projected_json_array() {
        let store = Arc::new(InMemoryListingStore::with_listings(vec![
            posting("old", 1),
            posting("new", 2),
        ]));
        let tool = GetInternshipsTool::new(store);
        let reply = tool.call(json!({})).await;
        let parsed: Vec<Listing> = serde_json::from_str(&reply.text).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].id, "new");
        assert!(!reply.text.contains("postedAt"));
    }

    /// **Scenario**: a failing store degrades to an empty array instead of an
    /// error, and the store was still called exactly once.
    #[tokio::test]
    async fn call_degrades_store_failure_to_empty_array() {
        let store = Arc::new(InMemoryListingStore::new());
        store.set_fail(true);
        let tool = GetInternshipsTool::new(Arc::clone(&store) as Arc<dyn ListingStore>);
        let reply = tool.call(json!({})).await;
        assert_eq!(reply.text, "[]");
        assert_eq!(store.call_count(), 1);
    }

    /// **Scenario**: the declared spec takes no required input and documents
    /// the Listing array output.
    #[test]
    fn spec_declares_no_input_and_listing_output() {
        let tool = GetInternshipsTool::new(Arc::new(InMemoryListingStore::new()));
        let spec = tool.spec();
        assert_eq!(spec.name, TOOL_GET_INTERNSHIPS);
        assert!(spec.input_schema["properties"]
            .as_object()
            .unwrap()
            .is_empty());
        assert_eq!(spec.output_schema["type"], "array");
    }
}
