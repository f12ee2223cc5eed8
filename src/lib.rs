pub mod catalog;
pub mod config;
pub mod error;
pub mod indexing;
pub mod language;
pub mod orchestrator;
pub mod render;
pub mod utils;

pub use catalog::{ExtractedMetadata, ScriptCatalog, SourceFile};
pub use config::OrganizerConfig;
pub use error::{Result, ScriptDocError};
pub use orchestrator::{RunMode, RunOutcome, run};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
