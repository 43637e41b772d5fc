use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::document::ExtractedDocument;
use crate::stage::Stage;

/// Stage results accumulated while a build runs.
///
/// Filled strictly in stage order. On failure the outputs produced so far
/// are kept and handed back to the caller; nothing is rolled back.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StageOutputs {
    pub requirements: Option<String>,
    pub architecture: Option<String>,
    pub document: Option<ExtractedDocument>,
    pub qa_report: Option<String>,
}

impl StageOutputs {
    /// Whether the given stage has produced its output.
    pub fn has(&self, stage: Stage) -> bool {
        match stage {
            Stage::Requirements => self.requirements.is_some(),
            Stage::Architecture => self.architecture.is_some(),
            Stage::Build => self.document.is_some(),
            Stage::Qa => self.qa_report.is_some(),
        }
    }
}

/// The result of one successful build.
///
/// Immutable once constructed; a new build produces a fresh session that
/// wholly replaces the previous one. No history is kept.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildSession {
    pub request: String,
    pub requirements: String,
    pub architecture: String,
    pub document: ExtractedDocument,
    pub qa_report: String,
    pub timestamp: String,
}

impl BuildSession {
    pub fn new(
        request: String,
        requirements: String,
        architecture: String,
        document: ExtractedDocument,
        qa_report: String,
        created_at: DateTime<Local>,
    ) -> Self {
        Self {
            request,
            requirements,
            architecture,
            document,
            qa_report,
            timestamp: created_at.format("%Y%m%d_%H%M%S").to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn doc() -> ExtractedDocument {
        ExtractedDocument {
            content: "<html></html>".to_string(),
            filename: "app_20260830_120000.html".to_string(),
        }
    }

    #[test]
    fn has_tracks_each_stage() {
        let mut outputs = StageOutputs::default();
        for stage in Stage::ORDER {
            assert!(!outputs.has(stage));
        }
        outputs.requirements = Some("reqs".into());
        outputs.document = Some(doc());
        assert!(outputs.has(Stage::Requirements));
        assert!(!outputs.has(Stage::Architecture));
        assert!(outputs.has(Stage::Build));
        assert!(!outputs.has(Stage::Qa));
    }

    #[test]
    fn session_timestamp_matches_filename_format() {
        let ts = Local.with_ymd_and_hms(2026, 8, 30, 12, 0, 0).unwrap();
        let session = BuildSession::new(
            "calc".into(),
            "reqs".into(),
            "arch".into(),
            doc(),
            "qa".into(),
            ts,
        );
        assert_eq!(session.timestamp, "20260830_120000");
        assert!(session.document.filename.contains(&session.timestamp));
    }
}
