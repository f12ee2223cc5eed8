pub mod markdown;

use crate::catalog::ScriptCatalog;
use crate::config::OrganizerConfig;
use crate::error::Result;
use crate::utils::io::{ensure_output_dir, write_document};
use log::info;
use markdown::{HeaderStyle, category_title, render_category, render_consolidated};
use std::io::Write;
use std::path::PathBuf;

/// Output layout, one per run mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    PerFolder,
    PerNamespace,
    Consolidated,
}

/// A rendered document not yet on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub path: PathBuf,
    pub contents: String,
}

/// Builds every document for `catalog` without touching the filesystem.
pub fn render_documents(
    catalog: &ScriptCatalog,
    mode: RenderMode,
    config: &OrganizerConfig,
) -> Vec<Document> {
    let extractor = config.language.extractor();

    match mode {
        RenderMode::PerFolder | RenderMode::PerNamespace => {
            let style = if mode == RenderMode::PerFolder {
                HeaderStyle::Folder
            } else {
                HeaderStyle::Namespace
            };

            catalog
                .groups()
                .map(|(category, files)| {
                    let title = category_title(category, style, &config.no_namespace_category);
                    Document {
                        path: config.document_path(category),
                        contents: render_category(
                            &title,
                            &files,
                            config.language,
                            extractor.as_ref(),
                        ),
                    }
                })
                .collect()
        }
        RenderMode::Consolidated => vec![Document {
            path: config.consolidated_path(),
            contents: render_consolidated(
                catalog.groups(),
                catalog.file_count(),
                config.language,
                extractor.as_ref(),
            ),
        }],
    }
}

/// Renders and writes the documents, overwriting existing ones. Returns the
/// paths written, in order.
pub fn write_documents(
    catalog: &ScriptCatalog,
    mode: RenderMode,
    config: &OrganizerConfig,
    progress: &mut dyn Write,
) -> Result<Vec<PathBuf>> {
    ensure_output_dir(&config.output_dir)?;

    let documents = render_documents(catalog, mode, config);
    info!(
        "Writing {} documents to {:?}",
        documents.len(),
        config.output_dir
    );

    let mut written = Vec::with_capacity(documents.len());
    for document in documents {
        write_document(&document.path, &document.contents)?;
        let name = document
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        writeln!(progress, "✓ Generated: {}", name)?;
        written.push(document.path);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SourceFile;
    use std::fs;
    use tempfile::TempDir;

    fn catalog() -> ScriptCatalog {
        let mut catalog = ScriptCatalog::new();
        catalog.add(
            "NoNamespace",
            SourceFile::new(
                "Enemy.cs".into(),
                "public class Enemy {}".into(),
            ),
        );
        catalog.add(
            "Player",
            SourceFile::new(
                "Player/Move.cs".into(),
                "namespace Game.Player {\npublic class Move {}\n}".into(),
            ),
        );
        catalog
    }

    #[test]
    fn one_document_per_category() {
        let tmp = TempDir::new().unwrap();
        let config = OrganizerConfig::for_base_dir(tmp.path());

        let docs = render_documents(&catalog(), RenderMode::PerNamespace, &config);
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].path, config.document_path("NoNamespace"));
        assert!(docs[0].contents.starts_with("# Scripts Without Namespace\n"));
        assert!(docs[1].contents.starts_with("# Player Namespace\n"));
    }

    #[test]
    fn consolidated_is_a_single_fixed_file() {
        let tmp = TempDir::new().unwrap();
        let config = OrganizerConfig::for_base_dir(tmp.path());

        let docs = render_documents(&catalog(), RenderMode::Consolidated, &config);
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].path, config.consolidated_path());
    }

    #[test]
    fn writing_creates_output_dir_and_overwrites() {
        let tmp = TempDir::new().unwrap();
        let config = OrganizerConfig::for_base_dir(tmp.path());
        fs::create_dir(&config.output_dir).unwrap();
        fs::write(config.document_path("Player"), "stale").unwrap();

        let mut progress = Vec::new();
        let written =
            write_documents(&catalog(), RenderMode::PerFolder, &config, &mut progress).unwrap();

        assert_eq!(written.len(), 2);
        let player = fs::read_to_string(config.document_path("Player")).unwrap();
        assert!(player.starts_with("# Player Folder\n"));
        assert_eq!(
            String::from_utf8(progress).unwrap(),
            "✓ Generated: NoNamespace.md\n✓ Generated: Player.md\n"
        );
    }
}
