use std::fmt;

use serde::{Deserialize, Serialize};

/// The four build stages, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Requirements,
    Architecture,
    Build,
    Qa,
}

impl Stage {
    /// Fixed execution order of the pipeline.
    pub const ORDER: [Stage; 4] = [
        Stage::Requirements,
        Stage::Architecture,
        Stage::Build,
        Stage::Qa,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Requirements => "requirements",
            Stage::Architecture => "architecture",
            Stage::Build => "build",
            Stage::Qa => "qa",
        }
    }

    pub fn parse_str(s: &str) -> Option<Self> {
        match s {
            "requirements" => Some(Stage::Requirements),
            "architecture" => Some(Stage::Architecture),
            "build" => Some(Stage::Build),
            "qa" => Some(Stage::Qa),
            _ => None,
        }
    }

    /// Output-token ceiling for the stage's model call.
    /// The build stage emits a whole HTML document and gets the larger budget.
    pub fn max_tokens(&self) -> u32 {
        match self {
            Stage::Build => 4096,
            _ => 2500,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
