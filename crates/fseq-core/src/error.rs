//! Error type for collecting and copying frame sequences.

use std::io;
use std::path::PathBuf;

/// Failure while listing, preparing, or copying a frame sequence.
/// Every variant is fatal to the run; nothing is retried or rolled back.
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    /// Source directory is missing or cannot be listed.
    #[error("cannot read source directory {}", path.display())]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Destination directory could not be created.
    #[error("cannot create destination directory {}", path.display())]
    DestinationUncreatable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A single frame copy failed (permission, disk full, source vanished).
    #[error("failed to copy {} to {}", from.display(), to.display())]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A progress line could not be written (e.g. closed stdout).
    #[error("failed to write progress output")]
    Report(#[source] io::Error),
}

impl FrameError {
    /// Underlying I/O error kind, for callers that want to branch on it.
    pub fn io_kind(&self) -> io::ErrorKind {
        match self {
            FrameError::SourceUnreadable { source, .. }
            | FrameError::DestinationUncreatable { source, .. }
            | FrameError::Copy { source, .. }
            | FrameError::Report(source) => source.kind(),
        }
    }
}
