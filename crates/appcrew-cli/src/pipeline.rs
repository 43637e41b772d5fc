use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use appcrew_client::{ClientError, ModelBackend};
use appcrew_core::{BuildSession, ExtractedDocument, Stage, StageOutputs};
use chrono::Local;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum PipelineError {
    /// A second build was requested while one was still running.
    #[error("a build is already in progress")]
    BuildInProgress,

    /// A stage's model call failed; the remaining stages were not run.
    /// `partial` holds every output produced before the failure.
    #[error("{stage} stage failed: {source}")]
    StageFailed {
        stage: Stage,
        #[source]
        source: ClientError,
        partial: StageOutputs,
    },
}

impl PipelineError {
    /// Outputs that completed before the failure, if any.
    pub fn partial(&self) -> Option<&StageOutputs> {
        match self {
            PipelineError::StageFailed { partial, .. } => Some(partial),
            PipelineError::BuildInProgress => None,
        }
    }
}

/// Runs the four build stages strictly in sequence.
///
/// Each stage's prompt depends on the previous stage's output, so there is
/// nothing to parallelize. A single-flight guard rejects a second build while
/// one is in progress; the original tool left that unguarded and would race
/// on shared session state.
pub struct BuildPipeline {
    backend: Arc<dyn ModelBackend>,
    in_flight: AtomicBool,
}

impl BuildPipeline {
    pub fn new(backend: Arc<dyn ModelBackend>) -> Self {
        Self {
            backend,
            in_flight: AtomicBool::new(false),
        }
    }

    /// Execute requirements → architecture → build → QA for one request and
    /// return a fresh session. The caller decides how to publish it.
    pub async fn run(&self, request: &str) -> Result<BuildSession, PipelineError> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(PipelineError::BuildInProgress);
        }

        let result = self.run_stages(request).await;
        self.in_flight.store(false, Ordering::SeqCst);
        result
    }

    async fn run_stages(&self, request: &str) -> Result<BuildSession, PipelineError> {
        let mut partial = StageOutputs::default();

        // 1. Product Manager: requirements from the raw request.
        let requirements = self.call(Stage::Requirements, request, &partial).await?;
        partial.requirements = Some(requirements.clone());

        // 2. Software Architect: design, fed the requirements prefix.
        let architecture = self.call(Stage::Architecture, request, &partial).await?;
        partial.architecture = Some(architecture.clone());

        // 3. Developer: the document itself, extracted and repaired.
        let raw = self.call(Stage::Build, request, &partial).await?;
        let created_at = Local::now();
        let document = ExtractedDocument::from_raw(&raw, created_at);
        info!(
            lines = document.line_count(),
            chars = document.char_count(),
            "document extracted"
        );
        partial.document = Some(document.clone());

        // 4. QA Analyst: review of the extracted document prefix.
        let qa_report = self.call(Stage::Qa, request, &partial).await?;

        Ok(BuildSession::new(
            request.to_string(),
            requirements,
            architecture,
            document,
            qa_report,
            created_at,
        ))
    }

    async fn call(
        &self,
        stage: Stage,
        request: &str,
        partial: &StageOutputs,
    ) -> Result<String, PipelineError> {
        info!("running {stage} stage on {}", self.backend.name());
        let prompt = appcrew_prompts::assemble(stage, request, partial);
        self.backend
            .complete(&prompt, stage.max_tokens())
            .await
            .map_err(|source| PipelineError::StageFailed {
                stage,
                source,
                partial: partial.clone(),
            })
    }
}
