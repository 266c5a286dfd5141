use std::fs;

use crate::domain::{RawContentRecord, SourceKind};
use crate::errors::BlogResult;
use crate::sources::document::parse_document;
use crate::sources::traits::ContentSource;

/// Reads an exported content dump from disk.
pub struct JsonFileSource;

impl JsonFileSource {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFileSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentSource for JsonFileSource {
    fn kind(&self) -> SourceKind {
        SourceKind::File
    }

    fn can_handle(&self, _location: &str) -> bool {
        // Fallback: anything that is not a remote URL is treated as a path
        true
    }

    fn fetch_records(&self, location: &str) -> BlogResult<Vec<RawContentRecord>> {
        let path = location.strip_prefix("file://").unwrap_or(location);
        let content = fs::read_to_string(path)?;
        parse_document(&content)
    }
}
