//! Writes rendered source into the output directory.
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

pub const SOURCE_EXTENSION: &str = "java";

#[derive(Debug, Error)]
#[error("failed to write {}", path.display())]
pub struct EmitError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// Write `content` to `<output_dir>/<base_name>.java`, replacing any existing
/// file. Returns the path written.
///
/// The caller is expected to have checked that `output_dir` is a directory.
pub fn emit(output_dir: &Path, base_name: &str, content: &str) -> Result<PathBuf, EmitError> {
    let path = output_dir.join(format!("{base_name}.{SOURCE_EXTENSION}"));
    write_file(&path, content).map_err(|source| EmitError { path: path.clone(), source })?;
    tracing::info!(path = %path.display(), bytes = content.len(), "wrote generated source");
    Ok(path)
}

// The handle is dropped (and closed) on every return path.
fn write_file(path: &Path, content: &str) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(content.as_bytes())?;
    file.flush()
}
