//! # Songsort Core Library
//!
//! Shared building blocks for the songsort binary: source-tree
//! enumeration, tag reading, destination path construction, file moving
//! and progress reporting. The binary wires these together into a one-shot
//! batch run.

pub mod error;
pub mod metadata;
pub mod mover;
pub mod organize;
pub mod paths;
pub mod progress;
pub mod scan;
