use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::warn;

use crate::docx;
use crate::fsutil::{self, TimestampReset};
use crate::pdf_meta::PdfMetadataRewriter;

/// Writes a `.sanitized`-tagged copy with document metadata removed.
///
/// DOCX gets a container rewrite, PDF goes through the selected rewriter,
/// everything else degrades to a plain copy. Non-dry-run outputs have their
/// timestamps reset to the epoch, best-effort.
pub fn strip_metadata(
    src: &Path,
    out_dir: Option<&Path>,
    rewriter: &dyn PdfMetadataRewriter,
    dry_run: bool,
) -> Result<PathBuf> {
    let dst = fsutil::tagged_output_path(src, out_dir, "sanitized");
    if dry_run {
        return Ok(dst);
    }
    let ext = src
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());
    match ext.as_deref() {
        Some("docx") => {
            let data = fs::read(src)?;
            fsutil::write_bytes(&dst, &docx::strip_docx_metadata(&data)?)?;
        }
        Some("pdf") => {
            let data = fs::read(src)?;
            fsutil::write_bytes(&dst, &rewriter.strip(&data)?)?;
        }
        _ => fsutil::copy_file(src, &dst)?,
    }
    if fsutil::reset_file_times(&dst) == TimestampReset::Failed {
        warn!(path = %dst.display(), "could not reset output timestamps");
    }
    Ok(dst)
}
