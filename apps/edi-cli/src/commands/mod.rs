pub mod compare;
pub mod highlight;
pub mod inspect;
pub mod stats;
pub mod summary;

use std::path::Path;

use anyhow::Context;
use edi_diff::{ComparisonSession, DiffConfig};
use edi_segment::{FileStore, UploadedFile};

/// A store that types files the same way the session parses them.
pub fn store_for(config: &DiffConfig) -> FileStore {
    if config.delimiters.detect_from_header {
        FileStore::with_fallback(config.delimiters.to_delimiters())
    } else {
        FileStore::with_delimiters(config.delimiters.to_delimiters())
    }
}

/// Read a file through the store.
pub fn load(store: &mut FileStore, path: &Path) -> anyhow::Result<UploadedFile> {
    store
        .load_path(path)
        .with_context(|| format!("failed to read EDI file {}", path.display()))
}

/// Load both files and select them in a fresh session.
pub fn open_pair(
    config: &DiffConfig,
    left: &Path,
    right: &Path,
) -> anyhow::Result<(UploadedFile, UploadedFile, ComparisonSession)> {
    let mut store = store_for(config);
    let left = load(&mut store, left)?;
    let right = load(&mut store, right)?;

    let mut session = ComparisonSession::new(config);
    session.select_left(&left.content);
    session.select_right(&right.content);
    Ok((left, right, session))
}

/// Write rendered output to a file or stdout.
pub fn emit(output: &str, path: Option<&Path>) -> anyhow::Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, output)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), bytes = output.len(), "wrote output");
        }
        None => print!("{}", output),
    }
    Ok(())
}
