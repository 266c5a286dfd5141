use crate::errors::{BlogError, BlogResult};
use crate::resolver::{AuthorDirectory, MatchPolicy, ResolverSettings, DEFAULT_PLACEHOLDERS};
use crate::resolver::matcher::DEFAULT_SAMPLE_SIZE;
use crate::resolver::metadata::{DEFAULT_AUTHOR, DEFAULT_WORDS_PER_MINUTE};

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub source: Option<String>,
    pub api_token: Option<String>,
    pub words_per_minute: u32,
    pub default_author: String,
    pub author_images: Option<String>,
    pub default_author_image: Option<String>,
    pub placeholders: Vec<String>,
    pub partial_match: bool,
    pub not_found_sample: usize,
}

impl Config {
    /// Get the directory where the executable is located
    fn exe_dir() -> Option<std::path::PathBuf> {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
    }

    pub fn from_env() -> BlogResult<Self> {
        // Try to load .env from executable's directory first
        if let Some(dir) = Self::exe_dir() {
            let env_path = dir.join(".env");
            if env_path.exists() {
                dotenvy::from_path(&env_path).ok();
            }
        }
        // Fall back to current directory
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from any key lookup (the environment in production).
    pub fn from_lookup<F>(lookup: F) -> BlogResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let words_per_minute = match get("BLOGSYNC_WORDS_PER_MINUTE") {
            Some(raw) => parse_number(&raw, "BLOGSYNC_WORDS_PER_MINUTE")?,
            None => DEFAULT_WORDS_PER_MINUTE,
        };
        if words_per_minute == 0 {
            return Err(BlogError::Config(
                "BLOGSYNC_WORDS_PER_MINUTE must be greater than zero".to_string(),
            ));
        }

        let not_found_sample = match get("BLOGSYNC_NOT_FOUND_SAMPLE") {
            Some(raw) => parse_number(&raw, "BLOGSYNC_NOT_FOUND_SAMPLE")?,
            None => DEFAULT_SAMPLE_SIZE,
        };
        if not_found_sample == 0 {
            return Err(BlogError::Config(
                "BLOGSYNC_NOT_FOUND_SAMPLE must be greater than zero".to_string(),
            ));
        }

        let partial_match = match get("BLOGSYNC_PARTIAL_MATCH") {
            Some(raw) => parse_bool(&raw, "BLOGSYNC_PARTIAL_MATCH")?,
            None => true,
        };

        let placeholders = match get("BLOGSYNC_PLACEHOLDER_SEGMENTS") {
            Some(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
            None => DEFAULT_PLACEHOLDERS.iter().map(|s| s.to_string()).collect(),
        };

        Ok(Self {
            source: get("BLOGSYNC_SOURCE"),
            api_token: get("BLOGSYNC_API_TOKEN"),
            words_per_minute,
            default_author: get("BLOGSYNC_DEFAULT_AUTHOR")
                .unwrap_or_else(|| DEFAULT_AUTHOR.to_string()),
            author_images: get("BLOGSYNC_AUTHOR_IMAGES"),
            default_author_image: get("BLOGSYNC_DEFAULT_AUTHOR_IMAGE"),
            placeholders,
            partial_match,
            not_found_sample,
        })
    }

    pub fn require_source(&self) -> BlogResult<&str> {
        self.source
            .as_deref()
            .ok_or_else(|| BlogError::MissingEnvVar("BLOGSYNC_SOURCE".to_string()))
    }

    /// Resolver settings, loading the author image map from disk if configured.
    pub fn resolver_settings(&self) -> BlogResult<ResolverSettings> {
        let authors = match self.author_images {
            Some(ref path) => AuthorDirectory::from_json_file(path)?,
            None => AuthorDirectory::new(),
        }
        .with_default_image(self.default_author_image.clone());

        Ok(ResolverSettings {
            placeholders: self.placeholders.clone(),
            words_per_minute: self.words_per_minute,
            default_author: self.default_author.clone(),
            authors,
            match_policy: MatchPolicy {
                allow_partial: self.partial_match,
                sample_size: self.not_found_sample,
            },
        })
    }
}

fn parse_number<T: std::str::FromStr>(raw: &str, key: &str) -> BlogResult<T> {
    raw.parse()
        .map_err(|_| BlogError::Config(format!("{} must be a non-negative integer, got '{}'", key, raw)))
}

fn parse_bool(raw: &str, key: &str) -> BlogResult<bool> {
    match raw.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(BlogError::Config(format!("{} must be a boolean, got '{}'", key, raw))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn config_from(pairs: &[(&str, &str)]) -> BlogResult<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.source, None);
        assert_eq!(config.words_per_minute, 200);
        assert_eq!(config.default_author, "Editorial Team");
        assert!(config.partial_match);
        assert_eq!(config.not_found_sample, 10);
        assert!(config.placeholders.contains(&"blog".to_string()));
        assert!(config.require_source().is_err());
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("BLOGSYNC_SOURCE", "https://cms.example/posts"),
            ("BLOGSYNC_API_TOKEN", "secret"),
            ("BLOGSYNC_WORDS_PER_MINUTE", "250"),
            ("BLOGSYNC_DEFAULT_AUTHOR", "The Studio"),
            ("BLOGSYNC_PLACEHOLDER_SEGMENTS", "news, stories ,"),
            ("BLOGSYNC_PARTIAL_MATCH", "off"),
            ("BLOGSYNC_NOT_FOUND_SAMPLE", "3"),
        ])
        .unwrap();

        assert_eq!(config.require_source().unwrap(), "https://cms.example/posts");
        assert_eq!(config.api_token.as_deref(), Some("secret"));
        assert_eq!(config.words_per_minute, 250);
        assert_eq!(config.default_author, "The Studio");
        assert_eq!(config.placeholders, vec!["news", "stories"]);
        assert!(!config.partial_match);

        let settings = config.resolver_settings().unwrap();
        assert!(!settings.match_policy.allow_partial);
        assert_eq!(settings.match_policy.sample_size, 3);
    }

    #[test]
    fn test_blank_values_are_unset() {
        let config = config_from(&[("BLOGSYNC_SOURCE", "  "), ("BLOGSYNC_WORDS_PER_MINUTE", "")]).unwrap();
        assert_eq!(config.source, None);
        assert_eq!(config.words_per_minute, 200);
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            config_from(&[("BLOGSYNC_WORDS_PER_MINUTE", "fast")]),
            Err(BlogError::Config(_))
        ));
        assert!(matches!(
            config_from(&[("BLOGSYNC_WORDS_PER_MINUTE", "0")]),
            Err(BlogError::Config(_))
        ));
        assert!(matches!(
            config_from(&[("BLOGSYNC_NOT_FOUND_SAMPLE", "0")]),
            Err(BlogError::Config(_))
        ));
        assert!(matches!(
            config_from(&[("BLOGSYNC_PARTIAL_MATCH", "maybe")]),
            Err(BlogError::Config(_))
        ));
    }

    #[test]
    fn test_author_images_loaded_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"Dana Reyes": "/images/dana.png"}}"#).unwrap();

        let path = file.path().to_str().unwrap().to_string();
        let config = config_from(&[
            ("BLOGSYNC_AUTHOR_IMAGES", path.as_str()),
            ("BLOGSYNC_DEFAULT_AUTHOR_IMAGE", "/images/logo.png"),
        ])
        .unwrap();

        let settings = config.resolver_settings().unwrap();
        assert_eq!(
            settings.authors.image_for("Dana Reyes").as_deref(),
            Some("/images/dana.png")
        );
        assert_eq!(
            settings.authors.image_for("Guest").as_deref(),
            Some("/images/logo.png")
        );
    }
}
