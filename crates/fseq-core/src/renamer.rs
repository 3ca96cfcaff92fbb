//! Copy a frame sequence into the destination under index-based names.
//!
//! Strictly sequential: list, sort, then copy one file at a time. The first
//! failure aborts the loop; files already copied stay where they are.

use serde::Serialize;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::FseqConfig;
use crate::error::FrameError;
use crate::sequence::{self, FrameNaming, FrameSequence};

/// Output file name for the frame at zero-based `index`:
/// `frame_{index}_delay-{delay}s.{ext}`, index without padding.
pub fn output_name(index: usize, naming: &FrameNaming) -> String {
    format!(
        "frame_{}_delay-{}s.{}",
        index, naming.delay_secs, naming.output_extension
    )
}

/// One source file and where it will be copied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrameMapping {
    pub index: usize,
    pub source: PathBuf,
    pub dest: PathBuf,
}

/// Map every frame of `seq` to `dest_dir/output_name(i)`.
pub fn plan(seq: &FrameSequence, dest_dir: &Path, naming: &FrameNaming) -> Vec<FrameMapping> {
    seq.paths()
        .enumerate()
        .map(|(index, source)| FrameMapping {
            index,
            source,
            dest: dest_dir.join(output_name(index, naming)),
        })
        .collect()
}

/// Create `dest_dir` and any missing parents. Existing contents are left alone.
pub fn ensure_dest_dir(dest_dir: &Path) -> Result<(), FrameError> {
    if dest_dir.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(dest_dir).map_err(|source| FrameError::DestinationUncreatable {
        path: dest_dir.to_path_buf(),
        source,
    })?;
    tracing::info!("created destination {}", dest_dir.display());
    Ok(())
}

/// Copy each mapping in order, overwriting existing files. Returns the number
/// copied. Stops at the first failure, from the copy or from `on_copied`,
/// without touching earlier copies.
pub fn execute<F>(mappings: &[FrameMapping], mut on_copied: F) -> Result<usize, FrameError>
where
    F: FnMut(&FrameMapping) -> Result<(), FrameError>,
{
    let mut copied = 0usize;
    for m in mappings {
        let bytes = fs::copy(&m.source, &m.dest).map_err(|source| {
            tracing::error!(
                index = m.index,
                from = %m.source.display(),
                to = %m.dest.display(),
                "copy failed: {}",
                source
            );
            FrameError::Copy {
                from: m.source.clone(),
                to: m.dest.clone(),
                source,
            }
        })?;
        tracing::debug!(
            index = m.index,
            bytes,
            "copied {} -> {}",
            m.source.display(),
            m.dest.display()
        );
        copied += 1;
        on_copied(m)?;
    }
    Ok(copied)
}

/// Inputs for one renaming run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameJob {
    /// Source directory as configured (reported verbatim).
    pub source_dir: PathBuf,
    /// Destination directory as configured (reported verbatim).
    pub dest_dir: PathBuf,
    /// Directory relative paths are resolved against (the working directory for the CLI).
    pub base_dir: PathBuf,
    pub naming: FrameNaming,
}

impl RenameJob {
    pub fn from_config(cfg: &FseqConfig, base_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: cfg.source_dir.clone(),
            dest_dir: cfg.dest_dir.clone(),
            base_dir: base_dir.into(),
            naming: cfg.naming.clone(),
        }
    }

    /// Source directory resolved against `base_dir` (absolute paths pass through).
    pub fn source_path(&self) -> PathBuf {
        self.base_dir.join(&self.source_dir)
    }

    /// Absolute destination directory.
    pub fn dest_path(&self) -> PathBuf {
        self.base_dir.join(&self.dest_dir)
    }

    pub fn collect(&self) -> Result<FrameSequence, FrameError> {
        sequence::collect_frames(&self.source_path(), &self.naming)
    }
}

/// Progress notifications emitted by [`run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameEvent<'a> {
    /// Matching files were listed; emitted before any copy.
    Found { count: usize, source_dir: &'a Path },
    /// One frame was copied.
    Copied(&'a FrameMapping),
    /// All frames were copied.
    Finished { count: usize, dest_dir: &'a Path },
}

impl fmt::Display for RenameEvent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenameEvent::Found { count, source_dir } => {
                write!(f, "Found {} files in {}", count, source_dir.display())
            }
            RenameEvent::Copied(m) => write!(
                f,
                "Copied {} to {}",
                m.source.display(),
                m.dest.display()
            ),
            RenameEvent::Finished { count, dest_dir } => write!(
                f,
                "Successfully processed {} frames to {}",
                count,
                dest_dir.display()
            ),
        }
    }
}

/// Outcome of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameSummary {
    pub frames: usize,
    pub dest_dir: PathBuf,
}

/// Full run: create the destination, collect and sort frames, copy them in
/// order. `on_event` sees `Found` before the first copy and `Finished` last;
/// an error from it aborts the run like any other failure.
pub fn run<F>(job: &RenameJob, mut on_event: F) -> Result<RenameSummary, FrameError>
where
    F: FnMut(&RenameEvent<'_>) -> io::Result<()>,
{
    let dest_dir = job.dest_path();
    ensure_dest_dir(&dest_dir)?;

    let seq = job.collect()?;
    on_event(&RenameEvent::Found {
        count: seq.len(),
        source_dir: &job.source_dir,
    })
    .map_err(FrameError::Report)?;

    if job.naming.extension_mismatch() {
        tracing::warn!(
            "output extension .{} does not match source {}; bytes are copied unchanged",
            job.naming.output_extension,
            job.naming.source_suffix
        );
    }

    let mappings = plan(&seq, &dest_dir, &job.naming);
    let copied = execute(&mappings, |m| {
        on_event(&RenameEvent::Copied(m)).map_err(FrameError::Report)
    })?;

    on_event(&RenameEvent::Finished {
        count: copied,
        dest_dir: &job.dest_dir,
    })
    .map_err(FrameError::Report)?;
    tracing::info!(
        frames = copied,
        "processed {} into {}",
        job.source_path().display(),
        dest_dir.display()
    );

    Ok(RenameSummary {
        frames: copied,
        dest_dir,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_name_default() {
        let naming = FrameNaming::default();
        assert_eq!(output_name(0, &naming), "frame_0_delay-0.04s.webp");
        assert_eq!(output_name(12, &naming), "frame_12_delay-0.04s.webp");
        assert_eq!(output_name(100, &naming), "frame_100_delay-0.04s.webp");
    }

    #[test]
    fn output_name_custom_delay() {
        let naming = FrameNaming {
            delay_secs: "0.1".into(),
            output_extension: "jpg".into(),
            ..FrameNaming::default()
        };
        assert_eq!(output_name(3, &naming), "frame_3_delay-0.1s.jpg");
    }

    #[test]
    fn plan_follows_sequence_order() {
        let naming = FrameNaming::default();
        let seq = FrameSequence::from_names(
            "Frames",
            vec![
                "ezgif-frame-002.jpg".to_string(),
                "ezgif-frame-010.jpg".to_string(),
                "ezgif-frame-001.jpg".to_string(),
            ],
            &naming,
        );
        let mappings = plan(&seq, Path::new("/out"), &naming);
        let pairs: Vec<_> = mappings
            .iter()
            .map(|m| (m.index, m.source.clone(), m.dest.clone()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                (
                    0,
                    PathBuf::from("Frames/ezgif-frame-001.jpg"),
                    PathBuf::from("/out/frame_0_delay-0.04s.webp")
                ),
                (
                    1,
                    PathBuf::from("Frames/ezgif-frame-002.jpg"),
                    PathBuf::from("/out/frame_1_delay-0.04s.webp")
                ),
                (
                    2,
                    PathBuf::from("Frames/ezgif-frame-010.jpg"),
                    PathBuf::from("/out/frame_2_delay-0.04s.webp")
                ),
            ]
        );
    }

    #[test]
    fn events_render_console_lines() {
        let found = RenameEvent::Found {
            count: 3,
            source_dir: Path::new("Frames"),
        };
        let done = RenameEvent::Finished {
            count: 3,
            dest_dir: Path::new("public/frames"),
        };
        assert_eq!(found.to_string(), "Found 3 files in Frames");
        assert_eq!(
            done.to_string(),
            "Successfully processed 3 frames to public/frames"
        );
        let mapping = FrameMapping {
            index: 0,
            source: PathBuf::from("Frames/ezgif-frame-001.jpg"),
            dest: PathBuf::from("out/frame_0_delay-0.04s.webp"),
        };
        assert_eq!(
            RenameEvent::Copied(&mapping).to_string(),
            "Copied Frames/ezgif-frame-001.jpg to out/frame_0_delay-0.04s.webp"
        );
    }

    #[test]
    fn failed_report_stops_before_any_copy() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("Frames");
        fs::create_dir(&src).unwrap();
        fs::write(src.join("ezgif-frame-1.jpg"), b"a").unwrap();
        fs::write(src.join("ezgif-frame-2.jpg"), b"b").unwrap();

        let job = RenameJob::from_config(&FseqConfig::default(), dir.path());
        let err = run(&job, |_| Err(io::Error::from(io::ErrorKind::BrokenPipe))).unwrap_err();
        assert!(matches!(err, FrameError::Report(_)));
        assert_eq!(err.io_kind(), io::ErrorKind::BrokenPipe);
        let dest = dir.path().join("public").join("frames");
        assert_eq!(fs::read_dir(&dest).unwrap().count(), 0);
    }

    #[test]
    fn failed_report_mid_sequence_stops_loop() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("Frames");
        fs::create_dir(&src).unwrap();
        for n in ["ezgif-frame-1.jpg", "ezgif-frame-2.jpg", "ezgif-frame-3.jpg"] {
            fs::write(src.join(n), b"x").unwrap();
        }

        let job = RenameJob::from_config(&FseqConfig::default(), dir.path());
        let mut copied_events = 0;
        let err = run(&job, |ev| match ev {
            RenameEvent::Copied(_) => {
                copied_events += 1;
                Err(io::Error::from(io::ErrorKind::BrokenPipe))
            }
            _ => Ok(()),
        })
        .unwrap_err();
        assert!(matches!(err, FrameError::Report(_)));
        assert_eq!(copied_events, 1);
        let dest = dir.path().join("public").join("frames");
        assert_eq!(fs::read_dir(&dest).unwrap().count(), 1);
    }

    #[test]
    fn ensure_dest_dir_creates_parents_and_keeps_contents() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("public").join("frames");
        ensure_dest_dir(&dest).unwrap();
        assert!(dest.is_dir());

        fs::write(dest.join("stale.webp"), b"old").unwrap();
        ensure_dest_dir(&dest).unwrap();
        assert_eq!(fs::read(dest.join("stale.webp")).unwrap(), b"old");
    }

    #[test]
    fn ensure_dest_dir_fails_on_file() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("public");
        fs::write(&blocker, b"not a dir").unwrap();
        let err = ensure_dest_dir(&blocker.join("frames")).unwrap_err();
        assert!(matches!(err, FrameError::DestinationUncreatable { .. }));
    }

    #[test]
    fn execute_stops_at_first_failure() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("src");
        let dest = dir.path().join("dest");
        fs::create_dir_all(&src).unwrap();
        fs::create_dir_all(&dest).unwrap();
        fs::write(src.join("a.jpg"), b"a").unwrap();
        fs::write(src.join("c.jpg"), b"c").unwrap();

        let mappings = vec![
            FrameMapping {
                index: 0,
                source: src.join("a.jpg"),
                dest: dest.join("frame_0.webp"),
            },
            FrameMapping {
                index: 1,
                source: src.join("vanished.jpg"),
                dest: dest.join("frame_1.webp"),
            },
            FrameMapping {
                index: 2,
                source: src.join("c.jpg"),
                dest: dest.join("frame_2.webp"),
            },
        ];
        let mut seen = Vec::new();
        let err = execute(&mappings, |m| {
            seen.push(m.index);
            Ok(())
        })
        .unwrap_err();
        match err {
            FrameError::Copy { from, .. } => assert_eq!(from, src.join("vanished.jpg")),
            other => panic!("expected Copy, got {:?}", other),
        }
        assert_eq!(seen, vec![0]);
        assert_eq!(fs::read(dest.join("frame_0.webp")).unwrap(), b"a");
        assert!(!dest.join("frame_1.webp").exists());
        assert!(!dest.join("frame_2.webp").exists());
    }

    #[test]
    fn job_resolves_relative_paths() {
        let job = RenameJob::from_config(&FseqConfig::default(), "/work");
        assert_eq!(job.source_path(), PathBuf::from("/work/Frames"));
        assert_eq!(job.dest_path(), PathBuf::from("/work/public/frames"));

        let abs = FseqConfig::default().with_overrides(Some(PathBuf::from("/data/in")), None);
        let job = RenameJob::from_config(&abs, "/work");
        assert_eq!(job.source_path(), PathBuf::from("/data/in"));
    }
}
