//! File handle value type - the integration point with an external
//! asset-writing pipeline.

use serde::{Deserialize, Serialize};

/// An in-memory file: a base directory, a path and the encoded contents.
///
/// Produced by [`SpriteDocument::to_file`](crate::SpriteDocument::to_file).
/// This crate never writes it to disk; that is the consuming pipeline's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileHandle {
    /// Base directory path
    pub base: String,
    /// File path (relative to `base` by the pipeline's convention)
    pub path: String,
    /// UTF-8 encoded document contents
    pub contents: Vec<u8>,
}

impl FileHandle {
    /// The contents as text, when they are valid UTF-8.
    ///
    /// Handles produced by `to_file` always are.
    pub fn contents_utf8(&self) -> Option<&str> {
        std::str::from_utf8(&self.contents).ok()
    }
}
