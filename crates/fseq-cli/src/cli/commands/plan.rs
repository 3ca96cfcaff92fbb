//! `fseq plan` – dry run listing what `run` would copy.

use anyhow::Result;
use fseq_core::config::FseqConfig;
use fseq_core::renamer::{self, RenameJob};
use std::io::Write;
use std::path::Path;

/// Print the mapping for the current source directory. Reads the source only;
/// the destination is not created.
pub fn run_plan<W: Write>(cfg: &FseqConfig, base_dir: &Path, json: bool, out: &mut W) -> Result<()> {
    let job = RenameJob::from_config(cfg, base_dir);
    let seq = job.collect()?;
    let mappings = renamer::plan(&seq, &job.dest_path(), &job.naming);

    if json {
        let manifest = serde_json::json!({
            "frame_count": mappings.len(),
            "delay_secs": job.naming.delay_secs,
            "frames": mappings,
        });
        serde_json::to_writer_pretty(&mut *out, &manifest)?;
        writeln!(out)?;
        return Ok(());
    }

    if mappings.is_empty() {
        writeln!(out, "No frames in {}.", job.source_dir.display())?;
        return Ok(());
    }
    for m in &mappings {
        writeln!(out, "{:<6} {} -> {}", m.index, m.source.display(), m.dest.display())?;
    }
    writeln!(
        out,
        "{} frames would be copied to {}",
        mappings.len(),
        job.dest_dir.display()
    )?;
    Ok(())
}
