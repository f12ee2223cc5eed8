use crate::config::OrganizerConfig;
use crate::error::Result;
use crate::indexing::classifier::{Grouping, classify};
use crate::indexing::discovery::discover_source_files;
use crate::render::{RenderMode, write_documents};
use log::{info, warn};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;

/// The three choices offered at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    ByFolder,
    ByNamespace,
    Consolidated,
}

impl RunMode {
    /// Anything other than `2` or `3` selects folder mode.
    pub fn from_choice(choice: &str) -> Self {
        match choice.trim() {
            "2" => RunMode::ByNamespace,
            "3" => RunMode::Consolidated,
            _ => RunMode::ByFolder,
        }
    }

    /// Consolidated output is grouped by folder.
    pub fn grouping(&self) -> Grouping {
        match self {
            RunMode::ByNamespace => Grouping::Namespace,
            RunMode::ByFolder | RunMode::Consolidated => Grouping::Folder,
        }
    }

    pub fn render_mode(&self) -> RenderMode {
        match self {
            RunMode::ByFolder => RenderMode::PerFolder,
            RunMode::ByNamespace => RenderMode::PerNamespace,
            RunMode::Consolidated => RenderMode::Consolidated,
        }
    }

    fn progress_message(&self) -> &'static str {
        match self {
            RunMode::ByFolder => "Organizing by folder structure...",
            RunMode::ByNamespace => "Organizing by namespace...",
            RunMode::Consolidated => "Generating consolidated document...",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Nothing to document; no output was written.
    NoSourceFiles,
    Completed {
        mode: RunMode,
        file_count: usize,
        documents: Vec<PathBuf>,
    },
}

const RULE_WIDTH: usize = 60;

/// One interactive run: discover, prompt, classify, render.
pub fn run(
    config: &OrganizerConfig,
    input: &mut dyn BufRead,
    output: &mut dyn Write,
) -> Result<RunOutcome> {
    let heavy_rule = "=".repeat(RULE_WIDTH);
    let light_rule = "-".repeat(RULE_WIDTH);
    let language = config.language.display_name();

    writeln!(output, "{}", heavy_rule)?;
    writeln!(output, "Unity {} Script Organizer", language)?;
    writeln!(output, "{}", heavy_rule)?;

    writeln!(output, "Scanning: {}", config.scripts_dir.display())?;
    let files = discover_source_files(&config.scripts_dir, &config.output_dir, config.language);

    if files.is_empty() {
        warn!("No source files under {:?}", config.scripts_dir);
        writeln!(output, "⚠ No {} script files found!", language)?;
        writeln!(
            output,
            "Run this tool from a folder containing your Unity Scripts directory"
        )?;
        return Ok(RunOutcome::NoSourceFiles);
    }

    writeln!(output, "✓ Found {} {} script files", files.len(), language)?;

    writeln!(output)?;
    writeln!(output, "Choose how to organize the scripts:")?;
    writeln!(output, "1. By folder structure (recommended)")?;
    writeln!(output, "2. By namespace")?;
    writeln!(output, "3. One consolidated document")?;
    write!(output, "Enter an option (1, 2 or 3): ")?;
    output.flush()?;

    let mut choice = String::new();
    input.read_line(&mut choice)?;
    let mode = RunMode::from_choice(&choice);
    info!("Selected mode: {:?}", mode);

    writeln!(output)?;
    writeln!(output, "{}", light_rule)?;
    writeln!(output, "{}", mode.progress_message())?;

    let start_time = Instant::now();
    let catalog = classify(&files, config, mode.grouping(), output)?;
    let documents = write_documents(&catalog, mode.render_mode(), config, output)?;
    info!("Run completed in {:.2?}", start_time.elapsed());

    writeln!(output, "{}", light_rule)?;
    writeln!(
        output,
        "✓ Done! Documents saved in: {}",
        config.output_dir.display()
    )?;
    writeln!(output, "{}", heavy_rule)?;

    Ok(RunOutcome::Completed {
        mode,
        file_count: catalog.file_count(),
        documents,
    })
}
