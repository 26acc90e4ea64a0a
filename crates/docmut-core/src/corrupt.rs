use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::fsutil;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CorruptMode {
    #[default]
    Flip,
    Zero,
    Truncate,
}

impl CorruptMode {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "flip" => Some(CorruptMode::Flip),
            "zero" => Some(CorruptMode::Zero),
            "truncate" => Some(CorruptMode::Truncate),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CorruptMode::Flip => "flip",
            CorruptMode::Zero => "zero",
            CorruptMode::Truncate => "truncate",
        }
    }
}

/// Applies the corruption to the first N bytes, where N is the requested
/// count clamped to `1..=data.len()`. Empty input passes through unchanged.
pub fn corrupt_bytes(data: &[u8], mode: CorruptMode, nbytes: usize) -> Vec<u8> {
    let n = nbytes.max(1).min(data.len());
    match mode {
        CorruptMode::Truncate => data[n..].to_vec(),
        CorruptMode::Zero => {
            let mut out = data.to_vec();
            out[..n].fill(0);
            out
        }
        CorruptMode::Flip => {
            let mut out = data.to_vec();
            for byte in &mut out[..n] {
                *byte ^= 0xFF;
            }
            out
        }
    }
}

/// Writes a `.corrupt`-tagged copy with a damaged header.
pub fn corrupt_header(
    src: &Path,
    out_dir: Option<&Path>,
    mode: CorruptMode,
    nbytes: usize,
    dry_run: bool,
) -> Result<PathBuf> {
    let dst = fsutil::tagged_output_path(src, out_dir, "corrupt");
    if dry_run {
        return Ok(dst);
    }
    let data = fs::read(src)?;
    fsutil::write_bytes(&dst, &corrupt_bytes(&data, mode, nbytes))?;
    Ok(dst)
}
