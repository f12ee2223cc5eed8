use crate::language::SourceLanguage;
use log::{debug, info, trace, warn};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Collects every `language` source file under `root`, skipping anything
/// inside `output_dir`. Sorted by file name; an empty result means there is
/// nothing to document.
pub fn discover_source_files(
    root: &Path,
    output_dir: &Path,
    language: SourceLanguage,
) -> Vec<PathBuf> {
    info!("Scanning {:?} for .{} files", root, language.extension());

    if !root.is_dir() {
        warn!("Scan root {:?} does not exist or is not a directory", root);
        return Vec::new();
    }

    let mut files = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry under {:?}: {}", root, e);
                continue;
            }
        };
        let path = entry.path();

        if path.is_dir() {
            continue;
        }

        if !language.matches(path) {
            trace!("Skipping unsupported file: {:?}", path);
            continue;
        }

        if path.starts_with(output_dir) {
            trace!("Skipping file inside output directory: {:?}", path);
            continue;
        }

        files.push(path.to_path_buf());
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    debug!("Discovered {} source files", files.len());

    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "class X {}").unwrap();
    }

    fn names(files: &[PathBuf]) -> Vec<String> {
        files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn finds_nested_files_sorted_by_name() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "View/Zeta.cs");
        touch(tmp.path(), "Core/Alpha.cs");
        touch(tmp.path(), "Mid.cs");
        touch(tmp.path(), "Core/notes.txt");

        let files = discover_source_files(
            tmp.path(),
            &tmp.path().join("unity_docs"),
            SourceLanguage::CSharp,
        );
        assert_eq!(names(&files), vec!["Alpha.cs", "Mid.cs", "Zeta.cs"]);
    }

    #[test]
    fn excludes_output_directory() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "Player.cs");
        touch(tmp.path(), "unity_docs/Stale.cs");

        let files = discover_source_files(
            tmp.path(),
            &tmp.path().join("unity_docs"),
            SourceLanguage::CSharp,
        );
        assert_eq!(names(&files), vec!["Player.cs"]);
    }

    #[test]
    fn missing_root_yields_nothing() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("absent");

        let files = discover_source_files(&root, &root.join("out"), SourceLanguage::CSharp);
        assert!(files.is_empty());
    }
}
