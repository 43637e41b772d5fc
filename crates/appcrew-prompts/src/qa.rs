use crate::context::{truncate_chars, AgentPrompt};

pub const ROLE: &str = "QA Analyst";
pub const GOAL: &str = "Quick quality check";
pub const BACKSTORY: &str = "Expert at finding issues fast";

/// Characters of the extracted document shown to the reviewer.
pub const CODE_SAMPLE_LIMIT: usize = 800;

/// Final stage: review the extracted document for completeness.
/// Context is a prefix of the extracted document, not the raw model output.
pub fn prompt(document: &str) -> AgentPrompt {
    AgentPrompt::new(
        ROLE,
        GOAL,
        BACKSTORY,
        "Quick review (under 400 words): Is the code complete and functional? \
         Any critical issues?"
            .to_string(),
    )
    .with_context(truncate_chars(document, CODE_SAMPLE_LIMIT).to_string())
}
