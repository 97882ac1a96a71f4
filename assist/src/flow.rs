//! Answering flow: validate, prompt, bounded tool round-trips, final answer.
//!
//! Single-shot orchestration with no state across calls: validate the input,
//! assemble the prompt, then run an explicit two-phase protocol: each turn
//! the model either answers directly or requests tool calls; requested calls
//! are executed, their structured results merged into the conversation, and
//! the model re-invoked. Round-trips are bounded by a max-iteration guard and
//! the whole call by one overall timeout.

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::error::AssistError;
use crate::llm::{LlmClient, ToolCallRequest};
use crate::message::Message;
use crate::prompt::PromptConfig;
use crate::store::ListingStore;
use crate::tool::{GetInternshipsTool, Tool, ToolSpec};

/// Default bound on tool round-trips within one question.
pub const DEFAULT_MAX_TOOL_ROUNDS: u32 = 3;

/// Default overall window for one `answer` call, nested tool calls included.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Input schema of the sole public operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerQuestionsInput {
    /// The question from the student.
    pub question: String,
}

impl AnswerQuestionsInput {
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
        }
    }

    /// Schema validation: the question must be non-empty after trimming.
    pub fn validate(&self) -> Result<(), AssistError> {
        if self.question.trim().is_empty() {
            return Err(AssistError::InvalidInput(
                "question must not be empty".into(),
            ));
        }
        Ok(())
    }
}

/// Output schema of the sole public operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerQuestionsOutput {
    /// The answer to the student question.
    pub answer: String,
}

/// The orchestration entry point tying validation, prompting, tool execution
/// and model invocation together.
///
/// Request-scoped: concurrent `answer` calls share no mutable state and may
/// run fully in parallel.
pub struct AnswerFlow {
    llm: Arc<dyn LlmClient>,
    tools: Vec<Arc<dyn Tool>>,
    prompt: PromptConfig,
    max_tool_rounds: u32,
    timeout: Duration,
}

impl AnswerFlow {
    /// Creates a flow over the given model client and listings store, with
    /// the `getInternships` tool bound and default prompt/limits.
    pub fn new(llm: Arc<dyn LlmClient>, store: Arc<dyn ListingStore>) -> Self {
        Self {
            llm,
            tools: vec![Arc::new(GetInternshipsTool::new(store))],
            prompt: PromptConfig::default(),
            max_tool_rounds: DEFAULT_MAX_TOOL_ROUNDS,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Replaces the prompt configuration (builder).
    pub fn with_prompt(mut self, prompt: PromptConfig) -> Self {
        self.prompt = prompt;
        self
    }

    /// Sets the tool round-trip bound (builder).
    pub fn with_max_tool_rounds(mut self, max_tool_rounds: u32) -> Self {
        self.max_tool_rounds = max_tool_rounds;
        self
    }

    /// Sets the overall timeout for one `answer` call (builder).
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Answers one student question.
    ///
    /// # Errors
    ///
    /// - [`AssistError::InvalidInput`] when the question is blank (checked
    ///   before any tool invocation).
    /// - [`AssistError::Llm`] when the model runtime call fails.
    /// - [`AssistError::UpstreamContractViolation`] when the runtime returns
    ///   an empty answer or never converges within the round bound.
    /// - [`AssistError::Timeout`] when the bounded window elapses.
    pub async fn answer(
        &self,
        input: AnswerQuestionsInput,
    ) -> Result<AnswerQuestionsOutput, AssistError> {
        input.validate()?;
        match tokio::time::timeout(self.timeout, self.run(&input.question)).await {
            Ok(result) => result,
            Err(_) => Err(AssistError::Timeout {
                elapsed_secs: self.timeout.as_secs(),
            }),
        }
    }

    async fn run(&self, question: &str) -> Result<AnswerQuestionsOutput, AssistError> {
        let specs: Vec<ToolSpec> = self.tools.iter().map(|t| t.spec()).collect();
        let mut messages = self.prompt.build_messages(question);

        // Phase 1 each turn: the model answers or requests tools. Phase 2:
        // execute the requests, merge results, re-invoke. Bounded so a model
        // that keeps requesting tools cannot loop forever.
        for round in 0..=self.max_tool_rounds {
            let reply = self.llm.complete(&messages, &specs).await?;

            if reply.tool_calls.is_empty() {
                let answer = reply.content;
                if answer.trim().is_empty() {
                    return Err(AssistError::UpstreamContractViolation(
                        "runtime returned an empty answer".into(),
                    ));
                }
                return Ok(AnswerQuestionsOutput { answer });
            }

            if round == self.max_tool_rounds {
                break;
            }

            if !reply.content.is_empty() {
                messages.push(Message::assistant(reply.content));
            }
            for call in &reply.tool_calls {
                let result = self.dispatch(call).await;
                messages.push(Message::user(format!(
                    "Tool {} returned: {}",
                    call.name, result
                )));
            }
        }

        Err(AssistError::UpstreamContractViolation(format!(
            "no final answer after {} tool rounds",
            self.max_tool_rounds
        )))
    }

    /// Executes one requested tool call; unknown tool names degrade to an
    /// explanatory result so the conversation can continue.
    async fn dispatch(&self, call: &ToolCallRequest) -> String {
        let args: Value = if call.arguments.trim().is_empty() {
            json!({})
        } else {
            serde_json::from_str(&call.arguments).unwrap_or_else(|e| {
                warn!(error = %e, arguments = %call.arguments, "tool arguments parse failed, using empty object");
                json!({})
            })
        };
        match self.tools.iter().find(|t| t.name() == call.name) {
            Some(tool) => {
                debug!(tool = %call.name, "calling tool");
                tool.call(args).await.text
            }
            None => {
                warn!(tool = %call.name, "model requested unknown tool");
                format!("Tool {} is not available.", call.name)
            }
        }
    }
}
