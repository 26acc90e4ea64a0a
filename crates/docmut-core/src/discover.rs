use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

/// Extensions collected when an input path is a directory. Explicitly named
/// files are included regardless of extension.
pub const SUPPORTED_EXTENSIONS: [&str; 6] = ["docx", "pdf", "csv", "txt", "json", "doc"];

pub fn is_supported(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| SUPPORTED_EXTENSIONS.contains(&ext))
        .unwrap_or(false)
}

/// Expands files and directories into a deduplicated, first-seen-ordered
/// list of candidate files. Missing paths are skipped.
pub fn discover_files(inputs: &[PathBuf]) -> Vec<PathBuf> {
    let mut seen = HashSet::new();
    let mut files = Vec::new();
    for input in inputs {
        if input.is_dir() {
            for entry in WalkDir::new(input)
                .follow_links(false)
                .into_iter()
                .filter_map(Result::ok)
            {
                if !entry.file_type().is_file() || !is_supported(entry.path()) {
                    continue;
                }
                let path = entry.path().to_path_buf();
                if seen.insert(path.clone()) {
                    files.push(path);
                }
            }
        } else if input.is_file() {
            if seen.insert(input.clone()) {
                files.push(input.clone());
            }
        } else {
            debug!(path = %input.display(), "skipping missing input path");
        }
    }
    files
}
