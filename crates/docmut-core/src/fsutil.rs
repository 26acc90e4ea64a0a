use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use filetime::FileTime;
use tracing::debug;

/// Outcome of a best-effort timestamp operation. Callers may log `Failed`
/// but must never treat it as fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampReset {
    Applied,
    Failed,
}

/// Directory a stage writes into: the explicit output directory when given,
/// otherwise the source file's own directory.
pub fn target_dir<'a>(src: &'a Path, out_dir: Option<&'a Path>) -> &'a Path {
    out_dir.unwrap_or_else(|| src.parent().unwrap_or_else(|| Path::new("")))
}

/// Destination path `stem.tag.ext` (or `stem.tag` for extension-less
/// sources) in the stage's target directory.
pub fn tagged_output_path(src: &Path, out_dir: Option<&Path>, tag: &str) -> PathBuf {
    let stem = src
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("output");
    let name = match src.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => format!("{stem}.{tag}.{ext}"),
        None => format!("{stem}.{tag}"),
    };
    target_dir(src, out_dir).join(name)
}

fn ensure_parent(dst: &Path) -> Result<()> {
    if let Some(parent) = dst.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

pub fn write_bytes(dst: &Path, data: &[u8]) -> Result<()> {
    ensure_parent(dst)?;
    fs::write(dst, data)?;
    Ok(())
}

/// Copies bytes and permissions, then carries the source timestamps over on
/// a best-effort basis.
pub fn copy_file(src: &Path, dst: &Path) -> Result<()> {
    ensure_parent(dst)?;
    fs::copy(src, dst)?;
    if carry_file_times(src, dst) == TimestampReset::Failed {
        debug!(src = %src.display(), dst = %dst.display(), "could not carry source timestamps");
    }
    Ok(())
}

pub fn carry_file_times(src: &Path, dst: &Path) -> TimestampReset {
    let Ok(meta) = fs::metadata(src) else {
        return TimestampReset::Failed;
    };
    let atime = FileTime::from_last_access_time(&meta);
    let mtime = FileTime::from_last_modification_time(&meta);
    match filetime::set_file_times(dst, atime, mtime) {
        Ok(()) => TimestampReset::Applied,
        Err(_) => TimestampReset::Failed,
    }
}

/// Resets mtime and atime to the Unix epoch.
pub fn reset_file_times(dst: &Path) -> TimestampReset {
    let epoch = FileTime::zero();
    match filetime::set_file_times(dst, epoch, epoch) {
        Ok(()) => TimestampReset::Applied,
        Err(_) => TimestampReset::Failed,
    }
}

#[cfg(test)]
mod tests {
    use super::tagged_output_path;
    use std::path::{Path, PathBuf};

    #[test]
    fn tagged_path_keeps_extension() {
        let path = tagged_output_path(Path::new("/data/report.docx"), None, "sanitized");
        assert_eq!(path, PathBuf::from("/data/report.sanitized.docx"));
    }

    #[test]
    fn tagged_path_respects_out_dir() {
        let path = tagged_output_path(
            Path::new("/data/report.pdf"),
            Some(Path::new("/out")),
            "corrupt",
        );
        assert_eq!(path, PathBuf::from("/out/report.corrupt.pdf"));
    }

    #[test]
    fn tagged_path_without_extension() {
        let path = tagged_output_path(Path::new("notes"), None, "corrupt");
        assert_eq!(path, PathBuf::from("notes.corrupt"));
    }
}
