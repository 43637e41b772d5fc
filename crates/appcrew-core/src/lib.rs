pub mod document;
pub mod session;
pub mod stage;

pub use document::ExtractedDocument;
pub use session::{BuildSession, StageOutputs};
pub use stage::Stage;
