use thiserror::Error;

use crate::resolver::NotFound;

#[derive(Error, Debug)]
pub enum BlogError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),

    // Source errors
    #[error("Invalid source location: {0}")]
    InvalidSource(String),

    #[error("Unsupported content source: {0}")]
    UnsupportedSource(String),

    // Network errors
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Content source returned status {status} for {url}")]
    HttpStatus { url: String, status: u16 },

    // Parsing errors
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Content parsing failed: {0}")]
    ContentParse(String),

    // Lookup errors
    #[error("{0}")]
    PostNotFound(NotFound),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<NotFound> for BlogError {
    fn from(report: NotFound) -> Self {
        BlogError::PostNotFound(report)
    }
}

pub type BlogResult<T> = Result<T, BlogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_miss_becomes_post_not_found() {
        let report = NotFound {
            raw: "Missing%20Post".to_string(),
            decoded: "Missing Post".to_string(),
            normalized: "missing-post".to_string(),
            available: vec!["alpha".to_string()],
            batch_size: 1,
        };

        let error = BlogError::from(report.clone());
        assert!(matches!(error, BlogError::PostNotFound(ref inner) if *inner == report));
        assert_eq!(error.to_string(), report.to_string());
    }
}
