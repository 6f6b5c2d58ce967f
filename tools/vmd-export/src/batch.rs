//! Directory batch conversion.
//!
//! Every `.gltf` file under the directory gets a sibling `.vmd`. Conversions
//! are independent: a failure is logged and counted, and traversal moves on
//! to the next file. Re-running over the same tree overwrites outputs
//! deterministically.

use std::path::Path;
use walkdir::WalkDir;

use vmd_common::VMD_EXT;

use crate::encoder::convert_gltf;

/// Options for a batch run.
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchOptions {
    /// Descend into subdirectories.
    pub recursive: bool,
    /// Skip `.gltf` files whose sibling `.vmd` already exists.
    pub skip_built: bool,
}

/// Outcome counts of a batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub converted: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Convert all `.gltf` files in `dir` to `.vmd` siblings.
///
/// Only traversal itself can fail (e.g. the directory is unreadable);
/// per-file conversion failures are reported through the summary.
pub fn process_dir(dir: &Path, options: &BatchOptions) -> anyhow::Result<BatchSummary> {
    let max_depth = if options.recursive { usize::MAX } else { 1 };
    let mut summary = BatchSummary::default();

    for entry in WalkDir::new(dir).max_depth(max_depth) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let input = entry.path();
        if input.extension().and_then(|e| e.to_str()) != Some("gltf") {
            continue;
        }

        let output = input.with_extension(VMD_EXT);
        if options.skip_built && output.exists() {
            tracing::debug!("Skipping {:?}, {:?} already built", input, output);
            summary.skipped += 1;
            continue;
        }

        match convert_gltf(input, &output) {
            Ok(()) => summary.converted += 1,
            Err(err) => {
                tracing::error!("{:#}", err);
                summary.failed += 1;
            }
        }
    }

    Ok(summary)
}
