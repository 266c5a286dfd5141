use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use url::Url;

use crate::domain::{RawContentRecord, SourceKind};
use crate::errors::{BlogError, BlogResult};
use crate::sources::document::parse_document;
use crate::sources::traits::ContentSource;

/// Fetches posts from the content platform's JSON endpoint.
pub struct HttpSource {
    client: Client,
    token: Option<String>,
}

impl HttpSource {
    pub fn new(token: Option<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .unwrap_or_else(|_| Client::new()),
            token,
        }
    }
}

impl Default for HttpSource {
    fn default() -> Self {
        Self::new(None)
    }
}

impl ContentSource for HttpSource {
    fn kind(&self) -> SourceKind {
        SourceKind::Http
    }

    fn can_handle(&self, location: &str) -> bool {
        Url::parse(location)
            .map(|url| matches!(url.scheme(), "http" | "https"))
            .unwrap_or(false)
    }

    fn fetch_records(&self, location: &str) -> BlogResult<Vec<RawContentRecord>> {
        let url = Url::parse(location).map_err(|e| BlogError::InvalidSource(e.to_string()))?;

        let mut request = self.client.get(url.as_str()).header(ACCEPT, "application/json");
        if let Some(ref token) = self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(BlogError::HttpStatus {
                url: location.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text()?;
        tracing::debug!(url = location, bytes = body.len(), "fetched content document");

        parse_document(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_can_handle_http_urls() {
        let source = HttpSource::default();

        assert!(source.can_handle("https://cms.example/api/posts"));
        assert!(source.can_handle("http://localhost:8080/posts.json"));
        assert!(!source.can_handle("./content/posts.json"));
        assert!(!source.can_handle("file:///tmp/posts.json"));
    }

    #[test]
    fn test_invalid_url_is_rejected() {
        let source = HttpSource::default();
        assert!(matches!(
            source.fetch_records("not a url"),
            Err(BlogError::InvalidSource(_))
        ));
    }

    #[test]
    fn test_source_kind() {
        assert_eq!(HttpSource::default().kind(), SourceKind::Http);
    }
}
