use crate::error::{Result, ScriptDocError};
use log::{debug, error, info};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

pub fn ensure_output_dir(output_dir: &Path) -> Result<()> {
    fs::create_dir_all(output_dir).map_err(|e| {
        error!("Failed to create output directory {:?}: {}", output_dir, e);
        ScriptDocError::Write {
            path: output_dir.to_path_buf(),
            source: e,
        }
    })
}

/// Writes `contents` to `output_path`, replacing any existing file.
pub fn write_document(output_path: &Path, contents: &str) -> Result<()> {
    debug!("Writing {} bytes to {:?}", contents.len(), output_path);

    let to_write_error = |e| {
        error!("Failed to write document {:?}: {}", output_path, e);
        ScriptDocError::Write {
            path: output_path.to_path_buf(),
            source: e,
        }
    };

    let file = File::create(output_path).map_err(to_write_error)?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(contents.as_bytes())
        .and_then(|_| writer.flush())
        .map_err(to_write_error)?;

    info!(
        "Successfully wrote {} bytes to {:?}",
        contents.len(),
        output_path
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn ensure_output_dir_is_idempotent() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("unity_docs");

        ensure_output_dir(&out).unwrap();
        ensure_output_dir(&out).unwrap();
        assert!(out.is_dir());
    }

    #[test]
    fn write_into_missing_dir_fails() {
        let tmp = TempDir::new().unwrap();
        let err = write_document(&tmp.path().join("missing/Doc.md"), "x").unwrap_err();
        assert!(matches!(err, ScriptDocError::Write { .. }));
    }
}
