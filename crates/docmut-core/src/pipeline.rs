use std::path::PathBuf;

use anyhow::Result;
use rand::rngs::SmallRng;
use tracing::{debug, info, warn};

use crate::corrupt::{self, CorruptMode};
use crate::discover;
use crate::mismatch;
use crate::pdf_meta;
use crate::rename;
use crate::report::{FileOutcome, MutationReport, Stage, StageRecord};
use crate::stripmeta;

#[derive(Debug, Clone)]
pub struct MutateOptions {
    pub rename: bool,
    pub strip_metadata: bool,
    pub corrupt: bool,
    pub mismatch: bool,
    pub out_dir: Option<PathBuf>,
    pub mode: CorruptMode,
    pub corrupt_bytes: usize,
    pub name_length: usize,
    pub dry_run: bool,
}

impl Default for MutateOptions {
    fn default() -> Self {
        Self {
            rename: false,
            strip_metadata: false,
            corrupt: false,
            mismatch: false,
            out_dir: None,
            mode: CorruptMode::Flip,
            corrupt_bytes: 8,
            name_length: rename::DEFAULT_NAME_LENGTH,
            dry_run: false,
        }
    }
}

impl MutateOptions {
    pub fn any_stage_enabled(&self) -> bool {
        self.rename || self.strip_metadata || self.corrupt || self.mismatch
    }
}

/// Discovers candidate files and runs the enabled stages over each one in
/// fixed order, every stage consuming the previous stage's output path.
/// The first stage error aborts the run.
pub fn run_mutations(
    inputs: &[PathBuf],
    options: &MutateOptions,
    rng: &mut SmallRng,
) -> Result<MutationReport> {
    let files = discover::discover_files(inputs);
    if files.is_empty() {
        warn!("no candidate files discovered");
    }
    let rewriter = pdf_meta::default_rewriter();
    debug!(rewriter = rewriter.name(), "selected PDF metadata rewriter");
    let out_dir = options.out_dir.as_deref();
    let mut outcomes = Vec::with_capacity(files.len());
    for file in files {
        let mut stages = Vec::new();
        let mut current = file.clone();
        if options.rename {
            current =
                rename::rename_copy(&current, out_dir, rng, options.name_length, options.dry_run)?;
            stages.push(StageRecord {
                stage: Stage::Rename,
                output: current.clone(),
            });
        }
        if options.strip_metadata {
            current =
                stripmeta::strip_metadata(&current, out_dir, rewriter.as_ref(), options.dry_run)?;
            stages.push(StageRecord {
                stage: Stage::StripMetadata,
                output: current.clone(),
            });
        }
        if options.corrupt {
            current = corrupt::corrupt_header(
                &current,
                out_dir,
                options.mode,
                options.corrupt_bytes,
                options.dry_run,
            )?;
            stages.push(StageRecord {
                stage: Stage::CorruptHeader,
                output: current.clone(),
            });
        }
        if options.mismatch {
            current = mismatch::mismatch_extension(&current, out_dir, rng, options.dry_run)?;
            stages.push(StageRecord {
                stage: Stage::MismatchExtension,
                output: current.clone(),
            });
        }
        info!(
            input = %file.display(),
            output = %current.display(),
            stages = stages.len(),
            dry_run = options.dry_run,
            "processed file"
        );
        outcomes.push(FileOutcome {
            input: file,
            final_path: current,
            stages,
        });
    }
    Ok(MutationReport {
        dry_run: options.dry_run,
        files: outcomes,
    })
}
