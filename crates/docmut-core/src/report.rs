use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

/// One mutation operation in the fixed pipeline order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Rename,
    StripMetadata,
    CorruptHeader,
    MismatchExtension,
}

impl Stage {
    pub fn as_str(self) -> &'static str {
        match self {
            Stage::Rename => "rename",
            Stage::StripMetadata => "strip_metadata",
            Stage::CorruptHeader => "corrupt_header",
            Stage::MismatchExtension => "mismatch_extension",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single stage's output for one input file.
#[derive(Debug, Clone, Serialize)]
pub struct StageRecord {
    pub stage: Stage,
    pub output: PathBuf,
}

/// The full stage sequence applied to one candidate file.
#[derive(Debug, Clone, Serialize)]
pub struct FileOutcome {
    pub input: PathBuf,
    pub final_path: PathBuf,
    pub stages: Vec<StageRecord>,
}

/// Outcome of a whole run. In dry-run mode the recorded paths are the
/// destinations the stages would have written.
#[derive(Debug, Clone, Serialize)]
pub struct MutationReport {
    pub dry_run: bool,
    pub files: Vec<FileOutcome>,
}
