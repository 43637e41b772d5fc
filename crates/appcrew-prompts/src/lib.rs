pub mod architecture;
pub mod build;
pub mod context;
pub mod qa;
pub mod requirements;

pub use context::{truncate_chars, AgentPrompt, CONTEXT_LIMIT};

use appcrew_core::{Stage, StageOutputs};

/// Assemble the full prompt string for a stage.
///
/// `outputs` supplies the prior-stage context each stage needs: requirements
/// for architecture and build, the extracted document for QA. Missing context
/// falls back to an empty string; the orchestrator only calls a stage after
/// its predecessor succeeded, so that path is not hit in a normal run.
pub fn assemble(stage: Stage, request: &str, outputs: &StageOutputs) -> String {
    match stage {
        Stage::Requirements => requirements::prompt(request).render(),
        Stage::Architecture => {
            architecture::prompt(outputs.requirements.as_deref().unwrap_or("")).render()
        }
        Stage::Build => build::prompt(request, outputs.requirements.as_deref().unwrap_or("")),
        Stage::Qa => {
            let document = outputs
                .document
                .as_ref()
                .map(|d| d.content.as_str())
                .unwrap_or("");
            qa::prompt(document).render()
        }
    }
}
