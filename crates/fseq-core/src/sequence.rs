//! Frame discovery: filter a source directory by naming convention and order
//! the matches.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::FrameError;

/// Source filter and output naming for a frame sequence.
///
/// Defaults match the GIF splitter's export (`ezgif-frame-*.jpg`) and the
/// player's expected `frame_{i}_delay-0.04s.webp`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameNaming {
    /// Literal prefix a source name must start with.
    pub source_prefix: String,
    /// Literal suffix a source name must end with.
    pub source_suffix: String,
    /// Delay hint embedded verbatim in output names (seconds, as text).
    pub delay_secs: String,
    /// Output file extension, without the dot. Bytes are never converted.
    pub output_extension: String,
}

impl Default for FrameNaming {
    fn default() -> Self {
        Self {
            source_prefix: "ezgif-frame-".to_string(),
            source_suffix: ".jpg".to_string(),
            delay_secs: "0.04".to_string(),
            output_extension: "webp".to_string(),
        }
    }
}

impl FrameNaming {
    /// True if `name` belongs to the sequence: starts with the prefix and ends
    /// with the suffix. Nothing else about the file is inspected.
    pub fn matches(&self, name: &str) -> bool {
        name.starts_with(&self.source_prefix) && name.ends_with(&self.source_suffix)
    }

    /// True when the output extension suggests a format the source is not in.
    pub fn extension_mismatch(&self) -> bool {
        let src_ext = self
            .source_suffix
            .rsplit('.')
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        let out_ext = self.output_extension.to_ascii_lowercase();
        let same_format = src_ext == out_ext
            || matches!(
                (src_ext.as_str(), out_ext.as_str()),
                ("jpg", "jpeg") | ("jpeg", "jpg")
            );
        !same_format
    }
}

/// [`FrameNaming::matches`] with the default convention.
pub fn is_frame_name(name: &str) -> bool {
    FrameNaming::default().matches(name)
}

/// Matched source names in sequence order, plus the directory they live in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameSequence {
    dir: PathBuf,
    names: Vec<String>,
}

impl FrameSequence {
    /// Build a sequence from raw names; keeps only matches and sorts them.
    pub fn from_names<I>(dir: impl Into<PathBuf>, names: I, naming: &FrameNaming) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut names: Vec<String> = names.into_iter().filter(|n| naming.matches(n)).collect();
        // Plain string order, not numeric: "ezgif-frame-10.jpg" < "ezgif-frame-9.jpg".
        names.sort();
        Self {
            dir: dir.into(),
            names,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Full source paths in sequence order.
    pub fn paths(&self) -> impl Iterator<Item = PathBuf> + '_ {
        self.names.iter().map(move |n| self.dir.join(n))
    }
}

/// List `dir` (no recursion), keep entries matching `naming`, sort them.
///
/// Only the name is inspected: a directory named like a frame is kept and
/// fails later at copy time. Names that are not valid UTF-8 cannot match the
/// literal prefix and are skipped.
pub fn collect_frames(dir: &Path, naming: &FrameNaming) -> Result<FrameSequence, FrameError> {
    let unreadable = |source| FrameError::SourceUnreadable {
        path: dir.to_path_buf(),
        source,
    };

    let mut names = Vec::new();
    for entry in fs::read_dir(dir).map_err(unreadable)? {
        let entry = entry.map_err(unreadable)?;
        let name = match entry.file_name().into_string() {
            Ok(n) => n,
            Err(raw) => {
                tracing::debug!(name = ?raw, "skipping non-UTF-8 entry");
                continue;
            }
        };
        if !naming.matches(&name) {
            continue;
        }
        names.push(name);
    }

    let seq = FrameSequence::from_names(dir, names, naming);
    tracing::debug!(dir = %dir.display(), count = seq.len(), "collected frames");
    Ok(seq)
}
