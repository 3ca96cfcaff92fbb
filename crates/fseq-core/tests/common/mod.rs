//! Shared fixtures: a throwaway working directory with a `Frames` folder.

use std::fs;
use std::path::{Path, PathBuf};

pub struct Workspace {
    pub dir: tempfile::TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("Frames")).unwrap();
        Workspace { dir }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn frames(&self) -> PathBuf {
        self.root().join("Frames")
    }

    pub fn dest(&self) -> PathBuf {
        self.root().join("public").join("frames")
    }

    /// Write a file into `Frames` with the given content.
    pub fn add(&self, name: &str, content: &[u8]) {
        fs::write(self.frames().join(name), content).unwrap();
    }

    /// Sorted names currently in the destination.
    pub fn dest_names(&self) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(self.dest())
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        names.sort();
        names
    }
}
