use crate::context::{truncate_chars, AgentPrompt};

pub const ROLE: &str = "Software Architect";
pub const GOAL: &str = "Design simple, effective architecture";
pub const BACKSTORY: &str = "Expert in clean, maintainable design";

/// Characters of the requirements text carried into this stage.
pub const REQUIREMENTS_LIMIT: usize = 1000;

/// Second stage: design the single-file app from the requirements.
pub fn prompt(requirements: &str) -> AgentPrompt {
    AgentPrompt::new(
        ROLE,
        GOAL,
        BACKSTORY,
        "Design a simple single-file HTML app (under 600 words). \
         Focus on component structure and key technical decisions."
            .to_string(),
    )
    .with_context(truncate_chars(requirements, REQUIREMENTS_LIMIT).to_string())
}
