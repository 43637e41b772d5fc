use serde::{Deserialize, Serialize};

/// Characters of prior-stage output the shared template will embed at most.
pub const CONTEXT_LIMIT: usize = 1500;

/// Cut a string to its first `limit` characters.
///
/// A plain prefix cut, not word-boundary aware. Downstream prompts depend on
/// this being exact, so it must stay a character count, not a byte count.
pub fn truncate_chars(s: &str, limit: usize) -> &str {
    match s.char_indices().nth(limit) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// One role-scoped stage request: persona, task, and optional context from
/// earlier stages. Built fresh per stage and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentPrompt {
    pub role: String,
    pub goal: String,
    pub backstory: String,
    pub task: String,
    pub context: Option<String>,
}

impl AgentPrompt {
    pub fn new(role: &str, goal: &str, backstory: &str, task: String) -> Self {
        Self {
            role: role.to_string(),
            goal: goal.to_string(),
            backstory: backstory.to_string(),
            task,
            context: None,
        }
    }

    pub fn with_context(mut self, context: String) -> Self {
        self.context = Some(context);
        self
    }

    /// Render the full prompt string sent to the model.
    ///
    /// The context line appears only when context is non-empty, truncated to
    /// its first 1500 characters.
    pub fn render(&self) -> String {
        let mut prompt = format!(
            "You are a {}.\n\nYour goal: {}\nYour background: {}\n\n",
            self.role, self.goal, self.backstory
        );

        match self.context.as_deref() {
            Some(ctx) if !ctx.is_empty() => {
                prompt.push_str("Context from previous agents: ");
                prompt.push_str(truncate_chars(ctx, CONTEXT_LIMIT));
            }
            _ => {}
        }

        prompt.push_str(&format!(
            "\n\nTask: {}\n\nExecute this task professionally and concisely.",
            self.task
        ));
        prompt
    }
}
