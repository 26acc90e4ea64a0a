use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{info, warn};

use crate::corrupt::CorruptMode;
use crate::pipeline::MutateOptions;

const MAX_CONFIG_BYTES: u64 = 1024 * 1024;
const MAX_NAME_LENGTH: usize = 255;

/// Optional config-file overlay for mutation options. Values here override
/// the CLI-derived defaults; invalid values are logged and ignored.
#[derive(Debug, Deserialize)]
pub struct Config {
    pub mutate: Option<MutateConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MutateConfig {
    pub mode: Option<String>,
    pub corrupt_bytes: Option<usize>,
    pub name_length: Option<usize>,
    pub out_dir: Option<PathBuf>,
}

impl Config {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if let Ok(meta) = fs::metadata(path) {
            if meta.len() > MAX_CONFIG_BYTES {
                return Err(anyhow::anyhow!(
                    "config {} exceeds {} bytes",
                    path.display(),
                    MAX_CONFIG_BYTES
                ));
            }
        }
        let data = fs::read_to_string(path)?;
        let cfg = match path.extension().and_then(|s| s.to_str()) {
            Some("toml") => toml::from_str::<Config>(&data)?,
            Some("yaml") | Some("yml") => serde_yaml::from_str::<Config>(&data)?,
            _ => toml::from_str::<Config>(&data)
                .or_else(|_| serde_yaml::from_str::<Config>(&data))?,
        };
        Ok(cfg)
    }

    pub fn apply(&self, opts: &mut MutateOptions) {
        if let Some(mutate) = &self.mutate {
            apply_mutate(mutate, opts);
        }
    }
}

fn apply_mutate(cfg: &MutateConfig, opts: &mut MutateOptions) {
    if let Some(name) = &cfg.mode {
        match CorruptMode::from_name(name) {
            Some(mode) => {
                info!(mode = mode.as_str(), "config override corruption mode");
                opts.mode = mode;
            }
            None => warn!(value = %name, "unknown corruption mode in config"),
        }
    }
    if let Some(v) = cfg.corrupt_bytes {
        if v == 0 {
            warn!(value = v, "invalid corrupt_bytes in config");
        } else {
            info!(value = v, "config override corrupt_bytes");
            opts.corrupt_bytes = v;
        }
    }
    if let Some(v) = cfg.name_length {
        if v == 0 || v > MAX_NAME_LENGTH {
            warn!(value = v, limit = MAX_NAME_LENGTH, "invalid name_length in config");
        } else {
            info!(value = v, "config override name_length");
            opts.name_length = v;
        }
    }
    if let Some(dir) = &cfg.out_dir {
        opts.out_dir = Some(dir.clone());
    }
}
