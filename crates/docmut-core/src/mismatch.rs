use std::path::{Path, PathBuf};

use anyhow::Result;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::fsutil;

const FALLBACK_EXTENSION: &str = "bin";

/// Plausible-but-wrong extensions for each supported source extension.
fn decoy_extensions(ext: &str) -> &'static [&'static str] {
    match ext {
        "pdf" => &["jpg", "png", "docx"],
        "docx" => &["jpg", "pdf", "csv"],
        "doc" => &["txt", "pdf"],
        "csv" => &["docx", "pdf", "json"],
        "txt" => &["jpg", "pdf", "json"],
        "json" => &["csv", "txt", "docx"],
        _ => &[FALLBACK_EXTENSION],
    }
}

pub fn choose_mismatched_extension<R: Rng>(ext: &str, rng: &mut R) -> &'static str {
    decoy_extensions(&ext.to_ascii_lowercase())
        .choose(rng)
        .copied()
        .unwrap_or(FALLBACK_EXTENSION)
}

/// Copies the file unchanged under a mismatched extension.
pub fn mismatch_extension<R: Rng>(
    src: &Path,
    out_dir: Option<&Path>,
    rng: &mut R,
    dry_run: bool,
) -> Result<PathBuf> {
    let ext = src.extension().and_then(|ext| ext.to_str()).unwrap_or("");
    let decoy = choose_mismatched_extension(ext, rng);
    let stem = src
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("output");
    let dst = fsutil::target_dir(src, out_dir).join(format!("{stem}.{decoy}"));
    if !dry_run {
        fsutil::copy_file(src, &dst)?;
    }
    Ok(dst)
}

#[cfg(test)]
mod tests {
    use super::{choose_mismatched_extension, decoy_extensions};
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn decoys_never_echo_the_source_extension() {
        for ext in ["pdf", "docx", "doc", "csv", "txt", "json"] {
            assert!(!decoy_extensions(ext).contains(&ext), "decoy echoes {ext}");
        }
    }

    #[test]
    fn unknown_extensions_fall_back_to_bin() {
        let mut rng = SmallRng::seed_from_u64(0);
        assert_eq!(choose_mismatched_extension("xyz", &mut rng), "bin");
        assert_eq!(choose_mismatched_extension("", &mut rng), "bin");
    }

    #[test]
    fn upper_case_extensions_use_the_same_table() {
        let mut rng = SmallRng::seed_from_u64(0);
        let decoy = choose_mismatched_extension("PDF", &mut rng);
        assert!(decoy_extensions("pdf").contains(&decoy));
    }
}
