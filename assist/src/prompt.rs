//! Prompt assembly: persona and rule text plus the student's question.
//!
//! The instruction block is not cosmetic text; every rule is a behavioral
//! contract the model is expected to honor (tool-only grounding, exact link
//! format, empty-list wording, off-topic refusal). The block is built from an
//! injectable [`PromptConfig`] so tests can substitute deterministic stub
//! rules and deployments can swap persona variants without touching the flow.

use crate::message::Message;

/// The exact Markdown shape the UI parses for navigable listing references.
pub const LINK_PATTERN: &str = "[Internship Title] at [Company Name](/internships/[id])";

/// Persona lines: who the assistant is and how it speaks.
#[derive(Debug, Clone)]
pub struct PersonaConfig {
    /// Identity statement, e.g. the InternLink assistant introduction.
    pub identity: String,
    /// Register mirroring and emoji guidance.
    pub tone: String,
    /// Language/dialect mirroring guidance.
    pub language: String,
}

/// Ordered list of rule sentences, rendered as `- ` bullet lines.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<String>,
}

impl RuleSet {
    pub fn new<I, S>(rules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            rules: rules.into_iter().map(Into::into).collect(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(String::as_str)
    }
}

/// Versioned, swappable prompt configuration for the assembler.
#[derive(Debug, Clone)]
pub struct PromptConfig {
    pub persona: PersonaConfig,
    /// How listings and empty results are rendered.
    pub formatting_rules: RuleSet,
    /// What the assistant may and may not answer from.
    pub scope_rules: RuleSet,
}

impl Default for PromptConfig {
    /// The authoritative InternLink persona variant: one consistent voice
    /// carrying the full set of behavioral contracts.
    fn default() -> Self {
        Self {
            persona: PersonaConfig {
                identity: "You are a friendly and helpful assistant for InternLink, \
                           an internship platform for tech students."
                    .to_string(),
                tone: "Mirror the user's register: stay formal with formal users, casual with \
                       casual ones, and use light emoji when it fits the conversation."
                    .to_string(),
                language: "Detect the language or dialect the user writes in, including \
                           code-mixed dialects, and reply in that same language."
                    .to_string(),
            },
            scope_rules: RuleSet::new([
                "Your ONLY purpose is to help with the InternLink platform, job applications, \
                 and the internships listed on it."
                    .to_string(),
                "When a user asks about available internships, projects, jobs, or similar \
                 openings, you MUST call the 'getInternships' tool and use its output as your \
                 only source of truth."
                    .to_string(),
                "DO NOT supplement tool output with your general knowledge or invented listings."
                    .to_string(),
                "If a question is completely unrelated to internships, the InternLink platform, \
                 or job applications (e.g. \"what is the capital of France?\"), politely state \
                 that you can only help with InternLink-related questions."
                    .to_string(),
                "NEVER state information you did not obtain from the tool or cannot otherwise \
                 verify; if you don't have the answer, say so explicitly."
                    .to_string(),
            ]),
            formatting_rules: RuleSet::new([
                format!(
                    "Present each internship as a clickable Markdown link. The format is \
                     critical, exactly: \"{LINK_PATTERN}\"."
                ),
                "If the 'getInternships' tool returns an empty list, tell the user there are \
                 currently no open positions and encourage them to check back later; never \
                 suggest internships from other sources."
                    .to_string(),
            ]),
        }
    }
}

impl PromptConfig {
    /// Renders the system instruction block: persona, then scope rules, then
    /// formatting rules as bullet lines.
    pub fn system_prompt(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.persona.identity);
        out.push('\n');
        out.push_str(&self.persona.tone);
        out.push('\n');
        out.push_str(&self.persona.language);
        out.push_str("\n\nHere are your instructions:\n");
        for rule in self.scope_rules.iter().chain(self.formatting_rules.iter()) {
            out.push_str("- ");
            out.push_str(rule);
            out.push('\n');
        }
        out
    }

    /// Builds the full request conversation: system block plus the question
    /// interpolated into its template slot.
    ///
    /// An empty question is forwarded untouched; non-emptiness is the input
    /// schema's responsibility, one level up in the flow.
    pub fn build_messages(&self, question: &str) -> Vec<Message> {
        vec![
            Message::system(self.system_prompt()),
            Message::user(format!("Question: {question}")),
        ]
    }
}
