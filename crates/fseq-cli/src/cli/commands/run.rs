//! `fseq run` – copy the frame sequence into the destination.

use anyhow::Result;
use fseq_core::config::FseqConfig;
use fseq_core::renamer::{self, RenameEvent, RenameJob};
use std::io::Write;
use std::path::Path;

/// Run the renamer and print the two progress lines to `out`.
///
/// The first failure (listing, mkdir, any copy, or writing to `out`) aborts
/// the run; frames already copied are left in place.
pub fn run_rename<W: Write>(cfg: &FseqConfig, base_dir: &Path, out: &mut W) -> Result<()> {
    let job = RenameJob::from_config(cfg, base_dir);

    let summary = renamer::run(&job, |ev| {
        if let RenameEvent::Copied(_) = ev {
            tracing::trace!("{}", ev);
            return Ok(());
        }
        writeln!(out, "{}", ev)?;
        out.flush()
    })?;

    tracing::debug!(frames = summary.frames, "run finished");
    Ok(())
}
