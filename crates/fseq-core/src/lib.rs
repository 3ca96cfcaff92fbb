//! Prepare animation frame sequences for an image-sequence player.
//!
//! Frames exported as `ezgif-frame-*.jpg` are listed, sorted by name, and
//! copied to `frame_{i}_delay-0.04s.webp` in a destination directory.

pub mod config;
pub mod error;
pub mod logging;
pub mod renamer;
pub mod sequence;

pub use error::FrameError;
