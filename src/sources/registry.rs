use crate::domain::RawContentRecord;
use crate::errors::{BlogError, BlogResult};
use crate::sources::traits::ContentSource;
use crate::sources::{file::JsonFileSource, http::HttpSource};

pub struct SourceRegistry {
    sources: Vec<Box<dyn ContentSource>>,
}

impl SourceRegistry {
    pub fn new(token: Option<String>) -> Self {
        let mut registry = Self {
            sources: Vec::new(),
        };

        // Most specific first; the file source accepts anything
        registry.register(Box::new(HttpSource::new(token)));
        registry.register(Box::new(JsonFileSource::new()));

        registry
    }

    pub fn register(&mut self, source: Box<dyn ContentSource>) {
        self.sources.push(source);
    }

    /// Find appropriate source for a location
    pub fn find_source(&self, location: &str) -> Option<&dyn ContentSource> {
        self.sources
            .iter()
            .find(|s| s.can_handle(location))
            .map(|s| s.as_ref())
    }

    /// Fetch records using the appropriate source
    pub fn fetch_records(&self, location: &str) -> BlogResult<Vec<RawContentRecord>> {
        let source = self
            .find_source(location)
            .ok_or_else(|| BlogError::UnsupportedSource(location.to_string()))?;

        source.fetch_records(location)
    }
}

impl Default for SourceRegistry {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SourceKind;

    #[test]
    fn test_http_detected_first() {
        let registry = SourceRegistry::default();

        let source = registry.find_source("https://cms.example/api/posts").unwrap();
        assert_eq!(source.kind(), SourceKind::Http);
    }

    #[test]
    fn test_paths_fall_back_to_file() {
        let registry = SourceRegistry::default();

        let locations = [
            "./content/posts.json",
            "/var/lib/blog/export.json",
            "file:///tmp/posts.json",
            "posts.json",
        ];

        for location in locations {
            let source = registry.find_source(location).unwrap();
            assert_eq!(
                source.kind(),
                SourceKind::File,
                "Location {} should be read as a file, not {:?}",
                location,
                source.kind()
            );
        }
    }

    #[test]
    fn test_empty_registry_rejects_everything() {
        let registry = SourceRegistry {
            sources: Vec::new(),
        };

        assert!(matches!(
            registry.fetch_records("posts.json"),
            Err(BlogError::UnsupportedSource(_))
        ));
    }
}
