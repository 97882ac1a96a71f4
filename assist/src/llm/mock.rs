//! Scripted mock LLM for tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;

use crate::error::AssistError;
use crate::message::Message;
use crate::tool::{ToolSpec, TOOL_GET_INTERNSHIPS};

use super::{LlmClient, LlmReply, ToolCallRequest};

/// Mock [`LlmClient`] that plays back a fixed script of replies.
///
/// Each `complete` call consumes the next scripted reply; when the script is
/// exhausted the last reply repeats (so a one-reply script behaves like a
/// model that always answers the same way). An optional per-call delay makes
/// timeout behavior testable without a network.
pub struct MockLlm {
    script: Vec<LlmReply>,
    next: AtomicUsize,
    delay: Option<Duration>,
}

impl MockLlm {
    /// A model that answers directly, never calling a tool.
    pub fn answer(content: impl Into<String>) -> Self {
        Self::script(vec![LlmReply {
            content: content.into(),
            tool_calls: vec![],
        }])
    }

    /// A model that first requests `getInternships`, then gives the final
    /// answer on the next turn.
    pub fn fetch_then_answer(final_answer: impl Into<String>) -> Self {
        Self::script(vec![
            LlmReply {
                content: String::new(),
                tool_calls: vec![get_internships_call("call-1")],
            },
            LlmReply {
                content: final_answer.into(),
                tool_calls: vec![],
            },
        ])
    }

    /// A model that requests `getInternships` on every turn and never
    /// answers; exercises the max-round guard.
    pub fn always_fetch() -> Self {
        Self::script(vec![LlmReply {
            content: String::new(),
            tool_calls: vec![get_internships_call("call-loop")],
        }])
    }

    /// A model playing back the given replies in order.
    pub fn script(script: Vec<LlmReply>) -> Self {
        Self {
            script,
            next: AtomicUsize::new(0),
            delay: None,
        }
    }

    /// Sleeps this long before every reply (builder).
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Number of `complete` calls so far.
    pub fn calls(&self) -> usize {
        self.next.load(Ordering::SeqCst)
    }
}

fn get_internships_call(id: &str) -> ToolCallRequest {
    ToolCallRequest {
        id: Some(id.to_string()),
        name: TOOL_GET_INTERNSHIPS.to_string(),
        arguments: json!({}).to_string(),
    }
}

#[async_trait]
impl LlmClient for MockLlm {
    async fn complete(
        &self,
        _messages: &[Message],
        _tools: &[ToolSpec],
    ) -> Result<LlmReply, AssistError> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        let n = self.next.fetch_add(1, Ordering::SeqCst);
        let idx = n.min(self.script.len().saturating_sub(1));
        self.script
            .get(idx)
            .cloned()
            .ok_or_else(|| AssistError::Llm("mock script is empty".into()))
    }
}
