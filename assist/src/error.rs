//! Error taxonomy for the answering flow.
//!
//! Validation failures and runtime contract violations surface to the caller;
//! listing-retrieval failures never do (they degrade to an empty result inside
//! [`GetInternshipsTool`](crate::tool::GetInternshipsTool) and are only logged).

use thiserror::Error;

/// Error returned by [`AnswerFlow::answer`](crate::flow::AnswerFlow::answer).
///
/// Callers showing this to end users should render a generic "assistant is
/// temporarily unavailable" message; the variants carry operator detail only.
#[derive(Debug, Error)]
pub enum AssistError {
    /// The question was missing or blank. Surfaced immediately, before any
    /// tool invocation; not retryable without new input.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The model runtime call itself failed (transport, auth, API error).
    #[error("llm call failed: {0}")]
    Llm(String),

    /// The model runtime returned a structurally invalid or empty payload.
    /// Treated as a runtime/configuration defect, not a transient fault.
    #[error("runtime violated its output contract: {0}")]
    UpstreamContractViolation(String),

    /// The answer did not complete within the flow's bounded window,
    /// covering any nested tool round-trips. Retryable by the caller.
    #[error("answer did not complete within {elapsed_secs}s")]
    Timeout {
        /// The configured window that elapsed, in seconds.
        elapsed_secs: u64,
    },
}
