use crate::catalog::{ExtractedMetadata, ScriptCatalog, SourceFile};
use crate::config::OrganizerConfig;
use crate::error::Result;
use crate::indexing::extractor::read_source;
use log::{debug, info};
use std::io::Write;
use std::path::{Component, Path, PathBuf};

/// How files are partitioned into documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grouping {
    /// First subfolder under the scan root.
    Folder,
    /// Last segment of the declared namespace.
    Namespace,
}

/// Reads every file and sorts it into a fresh catalog.
///
/// All files are read before anything is returned, so an unreadable file aborts
/// the run before any document exists. One progress line per file goes to
/// `progress`.
pub fn classify(
    files: &[PathBuf],
    config: &OrganizerConfig,
    grouping: Grouping,
    progress: &mut dyn Write,
) -> Result<ScriptCatalog> {
    info!("Classifying {} files by {:?}", files.len(), grouping);

    let extractor = config.language.extractor();
    let mut catalog = ScriptCatalog::new();

    for path in files {
        let relative = relative_path(path, config);
        let content = read_source(path)?;

        let metadata = ExtractedMetadata::extract(&content, extractor.as_ref());

        let (category, label) = match grouping {
            Grouping::Folder => {
                let category = folder_category(&relative, &config.root_category);
                (category.clone(), category)
            }
            Grouping::Namespace => {
                let category = namespace_category(
                    metadata.namespace.as_deref(),
                    &config.no_namespace_category,
                );
                let label = metadata
                    .namespace
                    .clone()
                    .unwrap_or_else(|| config.no_namespace_category.clone());
                (category, label)
            }
        };

        let display = display_path(&relative);
        debug!(
            "{} -> {} (type {})",
            display,
            category,
            metadata.type_name_or_unknown()
        );
        writeln!(progress, "  ✓ {} -> {}", display, label)?;

        catalog.add(category, SourceFile::new(display, content));
    }

    let collisions = catalog.warn_on_collisions();
    info!(
        "Classified {} files into {} categories ({} name collisions)",
        catalog.file_count(),
        catalog.category_count(),
        collisions
    );

    Ok(catalog)
}

/// Path relative to the scan root, or to the base directory when the file
/// lies outside the scan root.
pub fn relative_path(path: &Path, config: &OrganizerConfig) -> PathBuf {
    path.strip_prefix(&config.scripts_dir)
        .or_else(|_| path.strip_prefix(&config.base_dir))
        .map(Path::to_path_buf)
        .unwrap_or_else(|_| path.to_path_buf())
}

pub fn folder_category(relative: &Path, root_category: &str) -> String {
    let mut parts = relative.components().filter_map(|c| match c {
        Component::Normal(part) => Some(part.to_string_lossy()),
        _ => None,
    });

    match (parts.next(), parts.next()) {
        (Some(first), Some(_)) => first.into_owned(),
        _ => root_category.to_string(),
    }
}

pub fn namespace_category(namespace: Option<&str>, fallback: &str) -> String {
    match namespace {
        Some(ns) if !ns.is_empty() => ns.rsplit('.').next().unwrap_or(ns).to_string(),
        _ => fallback.to_string(),
    }
}

fn display_path(relative: &Path) -> String {
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
