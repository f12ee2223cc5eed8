use crate::error::{Result, ScriptDocError};
use crate::language::SourceLanguage;
use log::debug;
use std::path::{Path, PathBuf};

pub const SCRIPTS_DIR_NAME: &str = "Scripts";
pub const OUTPUT_DIR_NAME: &str = "unity_docs";
pub const ROOT_CATEGORY: &str = "Common";
pub const NO_NAMESPACE_CATEGORY: &str = "NoNamespace";
pub const CONSOLIDATED_FILE_NAME: &str = "all_scripts.md";
pub const DOCUMENT_EXTENSION: &str = "md";

/// Paths and labels for one organizer run.
#[derive(Debug, Clone)]
pub struct OrganizerConfig {
    /// Directory the tool lives in. Relative paths fall back to this.
    pub base_dir: PathBuf,
    /// Scan root: `<base>/Scripts` when present, otherwise the base directory.
    pub scripts_dir: PathBuf,
    pub output_dir: PathBuf,
    pub language: SourceLanguage,
    pub root_category: String,
    pub no_namespace_category: String,
}

impl OrganizerConfig {
    /// Derives every path from the location of the running executable.
    pub fn from_tool_location() -> Result<Self> {
        let exe = std::env::current_exe()
            .map_err(|e| ScriptDocError::Config(format!("cannot locate executable: {}", e)))?;
        let exe = exe.canonicalize().unwrap_or(exe);
        let base_dir = exe.parent().ok_or_else(|| {
            ScriptDocError::Config(format!("executable {:?} has no parent directory", exe))
        })?;

        Ok(Self::for_base_dir(base_dir))
    }

    pub fn for_base_dir(base_dir: &Path) -> Self {
        let base_dir = base_dir.to_path_buf();
        let candidate = base_dir.join(SCRIPTS_DIR_NAME);
        let scripts_dir = if candidate.exists() {
            candidate
        } else {
            base_dir.clone()
        };
        let output_dir = base_dir.join(OUTPUT_DIR_NAME);

        debug!(
            "Config: base {:?}, scripts {:?}, output {:?}",
            base_dir, scripts_dir, output_dir
        );

        OrganizerConfig {
            base_dir,
            scripts_dir,
            output_dir,
            language: SourceLanguage::CSharp,
            root_category: ROOT_CATEGORY.to_string(),
            no_namespace_category: NO_NAMESPACE_CATEGORY.to_string(),
        }
    }

    pub fn document_path(&self, category: &str) -> PathBuf {
        self.output_dir
            .join(format!("{}.{}", category, DOCUMENT_EXTENSION))
    }

    pub fn consolidated_path(&self) -> PathBuf {
        self.output_dir.join(CONSOLIDATED_FILE_NAME)
    }
}
