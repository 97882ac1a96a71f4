//! # InternLink Assist
//!
//! The question-answering assistant for InternLink, an internship platform
//! for tech students. Turns a free-form student question into a grounded,
//! tool-augmented answer: the model may call the `getInternships` tool to
//! fetch the current open listings, and must answer about openings from that
//! output alone.
//!
//! ## Design
//!
//! - **One public operation**: [`AnswerFlow::answer`] takes
//!   [`AnswerQuestionsInput`] and returns [`AnswerQuestionsOutput`];
//!   request-scoped, no state across calls, safe to run concurrently.
//! - **Explicit tool protocol**: each model turn either answers or requests
//!   tool calls; the flow executes requests, merges structured results into
//!   the conversation, and re-invokes, bounded by a max-round guard and one
//!   overall timeout.
//! - **Seams as traits**: the model runtime behind [`LlmClient`]
//!   ([`ChatOpenAI`] real, [`MockLlm`] scripted) and the document store
//!   behind [`ListingStore`] ([`HttpListingStore`], [`InMemoryListingStore`]).
//! - **Degrade, don't abort**: a failed listings read becomes an empty tool
//!   result (logged for operators), so the chat turn survives transient
//!   backend faults; see [`GetInternshipsTool`].
//! - **Injectable prompt**: persona and rules live in [`PromptConfig`], a
//!   versioned config object rather than hard-coded text.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use internlink_assist::{
//!     AnswerFlow, AnswerQuestionsInput, AssistConfig, ChatOpenAI, HttpListingStore,
//! };
//!
//! # async fn run() -> Result<(), internlink_assist::AssistError> {
//! let config = AssistConfig::from_env();
//! let store = Arc::new(HttpListingStore::new(
//!     config.listings_base_url.as_deref().unwrap_or("http://localhost:8080"),
//! ));
//! let llm = Arc::new(ChatOpenAI::new(config.model.clone()));
//! let flow = AnswerFlow::new(llm, store)
//!     .with_timeout(config.timeout)
//!     .with_max_tool_rounds(config.max_tool_rounds);
//!
//! let out = flow
//!     .answer(AnswerQuestionsInput::new("What internships are open?"))
//!     .await?;
//! println!("{}", out.answer);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod flow;
pub mod listing;
pub mod llm;
pub mod message;
pub mod prompt;
pub mod store;
pub mod tool;

pub use config::{AssistConfig, DEFAULT_MODEL};
pub use error::AssistError;
pub use flow::{
    AnswerFlow, AnswerQuestionsInput, AnswerQuestionsOutput, DEFAULT_MAX_TOOL_ROUNDS,
    DEFAULT_TIMEOUT,
};
pub use listing::Listing;
pub use llm::{ChatOpenAI, LlmClient, LlmReply, MockLlm, ToolCallRequest};
pub use message::Message;
pub use prompt::{PersonaConfig, PromptConfig, RuleSet, LINK_PATTERN};
pub use store::{
    HttpListingStore, InMemoryListingStore, ListingStore, StoreError, StoredListing,
};
pub use tool::{GetInternshipsTool, Tool, ToolReply, ToolSpec, TOOL_GET_INTERNSHIPS};
