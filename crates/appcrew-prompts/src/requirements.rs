use crate::context::AgentPrompt;

pub const ROLE: &str = "Product Manager";
pub const GOAL: &str = "Create clear, actionable requirements";
pub const BACKSTORY: &str = "Expert at turning ideas into specifications";

/// First stage: turn the free-text app request into requirements.
/// Runs with no prior context.
pub fn prompt(request: &str) -> AgentPrompt {
    AgentPrompt::new(
        ROLE,
        GOAL,
        BACKSTORY,
        format!(
            "Create concise requirements (under 800 words) for: {request}. \
             Focus on key features and functionality."
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_request_and_no_context() {
        let p = prompt("Simple calculator");
        assert_eq!(p.role, ROLE);
        assert!(p.task.contains("Simple calculator"));
        assert!(p.task.contains("under 800 words"));
        assert!(p.context.is_none());
    }
}
