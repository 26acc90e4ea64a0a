use std::path::{Path, PathBuf};

use anyhow::Result;
use rand::distributions::Alphanumeric;
use rand::Rng;

use crate::fsutil;

pub const DEFAULT_NAME_LENGTH: usize = 12;

/// Random ASCII alphanumeric name drawn from the run's generator.
pub fn random_name<R: Rng>(rng: &mut R, length: usize) -> String {
    (0..length)
        .map(|_| rng.sample(Alphanumeric))
        .map(char::from)
        .collect()
}

/// Copies `src` under a freshly generated name, keeping its extension.
/// Dry-run returns the would-be destination without touching the
/// filesystem; the generator is still consumed so seeded runs stay aligned.
pub fn rename_copy<R: Rng>(
    src: &Path,
    out_dir: Option<&Path>,
    rng: &mut R,
    length: usize,
    dry_run: bool,
) -> Result<PathBuf> {
    let mut name = random_name(rng, length);
    if let Some(ext) = src.extension().and_then(|ext| ext.to_str()) {
        name.push('.');
        name.push_str(ext);
    }
    let dst = fsutil::target_dir(src, out_dir).join(name);
    if !dry_run {
        fsutil::copy_file(src, &dst)?;
    }
    Ok(dst)
}
