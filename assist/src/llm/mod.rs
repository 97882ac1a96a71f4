//! LLM client seam for the answering flow.
//!
//! The flow depends on a callable that takes the conversation plus the bound
//! tool specs and returns assistant text and optional tool-call requests.
//! Implementations: [`ChatOpenAI`] (real chat-completions API) and [`MockLlm`]
//! (scripted replies for tests).

mod mock;
mod openai;

pub use mock::MockLlm;
pub use openai::ChatOpenAI;

use async_trait::async_trait;

use crate::error::AssistError;
use crate::message::Message;
use crate::tool::ToolSpec;

/// One tool invocation requested by the model.
#[derive(Debug, Clone, Default)]
pub struct ToolCallRequest {
    /// Provider call id, when the API supplies one.
    pub id: Option<String>,
    /// Tool name as declared in the forwarded [`ToolSpec`]s.
    pub name: String,
    /// Arguments as a JSON string; parsed by the flow before dispatch.
    pub arguments: String,
}

/// One model turn: assistant text plus zero or more tool-call requests.
///
/// Empty `tool_calls` means the model chose a direct answer; the flow treats
/// `content` as the final payload and validates it.
#[derive(Debug, Clone, Default)]
pub struct LlmReply {
    pub content: String,
    pub tool_calls: Vec<ToolCallRequest>,
}

/// Chat-completion client with tool-calling support.
///
/// The runtime decides per turn whether to call a tool; this trait only
/// forwards the declared specs and reports what the model chose.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Runs one completion turn over the conversation with the given tools
    /// offered to the model.
    async fn complete(
        &self,
        messages: &[Message],
        tools: &[ToolSpec],
    ) -> Result<LlmReply, AssistError>;
}
