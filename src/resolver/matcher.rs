use std::fmt;

use serde::Serialize;

use crate::domain::ResolvedRecord;
use crate::resolver::normalize::{decode, normalize};

pub const DEFAULT_SAMPLE_SIZE: usize = 10;

/// Which rule matched a lookup, strongest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchRule {
    /// Normalized request equals the resolved slug.
    ExactSlug,
    /// Decoded request equals the resolved slug or the source's own slug.
    DecodedSlug,
    /// Request is the record's opaque id.
    OriginalId,
    /// One slug contains the other. Lower confidence.
    PartialSlug,
    /// Request appears inside the record's source URL.
    SourceUrl,
}

impl MatchRule {
    const ORDER: [MatchRule; 5] = [
        MatchRule::ExactSlug,
        MatchRule::DecodedSlug,
        MatchRule::OriginalId,
        MatchRule::PartialSlug,
        MatchRule::SourceUrl,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchPolicy {
    /// Enables the substring containment tier.
    pub allow_partial: bool,
    /// How many available slugs a not-found report carries. Never below one.
    pub sample_size: usize,
}

impl Default for MatchPolicy {
    fn default() -> Self {
        Self {
            allow_partial: true,
            sample_size: DEFAULT_SAMPLE_SIZE,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Match<'a> {
    pub record: &'a ResolvedRecord,
    pub rule: MatchRule,
}

/// Diagnostics for a lookup that matched nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotFound {
    pub raw: String,
    pub decoded: String,
    pub normalized: String,
    pub available: Vec<String>,
    pub batch_size: usize,
}

impl fmt::Display for NotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Post not found: '{}' (decoded '{}', normalized '{}'); {} posts available",
            self.raw, self.decoded, self.normalized, self.batch_size
        )?;

        if !self.available.is_empty() {
            write!(f, ", e.g. {}", self.available.join(", "))?;
        }

        Ok(())
    }
}

impl std::error::Error for NotFound {}

/// The three forms of a requested slug that lookups compare against.
struct Requested {
    raw: String,
    decoded: String,
    normalized: String,
}

impl Requested {
    fn new(requested: &str) -> Self {
        let raw = requested.trim().to_string();
        let decoded = decode(&raw).trim().to_string();
        let normalized = normalize(&raw);
        Self {
            raw,
            decoded,
            normalized,
        }
    }

    fn matches(&self, record: &ResolvedRecord, rule: MatchRule) -> bool {
        let slug = record.slug();

        match rule {
            MatchRule::ExactSlug => !self.normalized.is_empty() && slug == self.normalized,
            MatchRule::DecodedSlug => {
                !self.decoded.is_empty()
                    && (slug == self.decoded
                        || record.original_slug.as_deref() == Some(self.decoded.as_str())
                        || record.original_slug.as_deref() == Some(self.raw.as_str()))
            }
            MatchRule::OriginalId => {
                !self.raw.is_empty()
                    && (record.original_id == self.raw || record.original_id == self.decoded)
            }
            MatchRule::PartialSlug => {
                !self.normalized.is_empty()
                    && (slug.contains(self.normalized.as_str()) || self.normalized.contains(slug))
            }
            MatchRule::SourceUrl => {
                !self.raw.is_empty()
                    && record.original_url.as_deref().is_some_and(|url| {
                        url.contains(self.raw.as_str()) || url.contains(self.decoded.as_str())
                    })
            }
        }
    }
}

/// Find the record a requested slug refers to.
///
/// Rules are tried strongest first across the whole batch, so an exact
/// match anywhere beats a weaker match earlier in the batch. Within one rule
/// the first record in batch order wins.
pub fn find<'a>(
    requested: &str,
    batch: &'a [ResolvedRecord],
    policy: &MatchPolicy,
) -> Result<Match<'a>, NotFound> {
    let forms = Requested::new(requested);

    for rule in MatchRule::ORDER {
        if rule == MatchRule::PartialSlug && !policy.allow_partial {
            continue;
        }

        if let Some(record) = batch.iter().find(|r| forms.matches(r, rule)) {
            return Ok(Match { record, rule });
        }
    }

    Err(NotFound {
        available: batch
            .iter()
            .take(policy.sample_size.max(1))
            .map(|r| r.slug().to_string())
            .collect(),
        batch_size: batch.len(),
        raw: forms.raw,
        decoded: forms.decoded,
        normalized: forms.normalized,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Post;

    fn record(slug: &str, id: &str) -> ResolvedRecord {
        ResolvedRecord::new(
            Post::new(slug.to_string(), slug.to_string(), "Editorial Team".to_string()),
            id.to_string(),
            None,
            None,
        )
    }

    fn record_with_source(slug: &str, id: &str, original_slug: &str, url: &str) -> ResolvedRecord {
        ResolvedRecord::new(
            Post::new(slug.to_string(), slug.to_string(), "Editorial Team".to_string()),
            id.to_string(),
            Some(original_slug.to_string()),
            Some(url.to_string()),
        )
    }

    #[test]
    fn test_exact_match_beats_earlier_partial_match() {
        let batch = vec![record("a", "1"), record("a-b", "2")];
        let found = find("a-b", &batch, &MatchPolicy::default()).unwrap();

        assert_eq!(found.record.slug(), "a-b");
        assert_eq!(found.rule, MatchRule::ExactSlug);
    }

    #[test]
    fn test_encoded_request_matches() {
        let batch = vec![record("hello-world", "1")];
        let found = find("hello%20world", &batch, &MatchPolicy::default()).unwrap();

        assert_eq!(found.record.slug(), "hello-world");
        assert_eq!(found.rule, MatchRule::ExactSlug);
    }

    #[test]
    fn test_mixed_case_request_matches() {
        let batch = vec![record("hello-world", "1")];
        let found = find("Hello-World", &batch, &MatchPolicy::default()).unwrap();
        assert_eq!(found.record.slug(), "hello-world");
    }

    #[test]
    fn test_original_slug_match() {
        let batch = vec![record_with_source(
            "caf-crme",
            "1",
            "café-crème",
            "https://x.example/blog/caf%C3%A9-cr%C3%A8me",
        )];

        let found = find("caf%C3%A9-cr%C3%A8me", &batch, &MatchPolicy::default()).unwrap();
        assert_eq!(found.rule, MatchRule::ExactSlug);

        let only_original = vec![record_with_source("renamed", "1", "Café_Crème", "")];
        let found = find("Café_Crème", &only_original, &MatchPolicy::default()).unwrap();
        assert_eq!(found.rule, MatchRule::DecodedSlug);
    }

    #[test]
    fn test_id_match() {
        let batch = vec![record("first", "100"), record("second", "42")];
        let found = find("42", &batch, &MatchPolicy::default()).unwrap();

        assert_eq!(found.record.slug(), "second");
        assert_eq!(found.rule, MatchRule::OriginalId);
    }

    #[test]
    fn test_partial_match_is_last_slug_resort() {
        let batch = vec![record("ai-integration-guide", "1")];
        let found = find("ai-integration", &batch, &MatchPolicy::default()).unwrap();

        assert_eq!(found.rule, MatchRule::PartialSlug);
    }

    #[test]
    fn test_partial_match_can_be_disabled() {
        let batch = vec![record("ai-integration-guide", "1")];
        let policy = MatchPolicy {
            allow_partial: false,
            ..MatchPolicy::default()
        };

        assert!(find("ai-integration", &batch, &policy).is_err());
    }

    #[test]
    fn test_partial_match_first_in_order_wins() {
        let batch = vec![record("ai", "1"), record("ai-integration", "2")];
        let found = find("ai-integration-tips", &batch, &MatchPolicy::default()).unwrap();
        assert_eq!(found.record.slug(), "ai");
    }

    #[test]
    fn test_source_url_match() {
        let batch = vec![record_with_source(
            "launch",
            "1",
            "launch",
            "https://x.example/p/Launch_Day_2024",
        )];

        let policy = MatchPolicy {
            allow_partial: false,
            ..MatchPolicy::default()
        };
        let found = find("Launch_Day_2024", &batch, &policy).unwrap();
        assert_eq!(found.rule, MatchRule::SourceUrl);
    }

    #[test]
    fn test_not_found_carries_diagnostics() {
        let batch = vec![record("alpha", "1"), record("beta", "2")];
        let missing = find("Missing%20Post", &batch, &MatchPolicy::default()).unwrap_err();

        assert_eq!(missing.raw, "Missing%20Post");
        assert_eq!(missing.decoded, "Missing Post");
        assert_eq!(missing.normalized, "missing-post");
        assert_eq!(missing.available, vec!["alpha", "beta"]);
        assert_eq!(missing.batch_size, 2);

        let message = missing.to_string();
        assert!(message.contains("missing-post"));
        assert!(message.contains("alpha"));
    }

    #[test]
    fn test_not_found_sample_is_bounded() {
        let batch: Vec<ResolvedRecord> = (0..25)
            .map(|i| record(&format!("post-{}", i), &i.to_string()))
            .collect();
        let policy = MatchPolicy {
            allow_partial: false,
            sample_size: 5,
        };

        let missing = find("nothing-like-it", &batch, &policy).unwrap_err();
        assert_eq!(missing.available.len(), 5);
        assert_eq!(missing.batch_size, 25);
    }

    #[test]
    fn test_zero_sample_size_still_reports_a_slug() {
        let batch = vec![record("alpha", "1")];
        let policy = MatchPolicy {
            allow_partial: false,
            sample_size: 0,
        };

        let missing = find("zzz", &batch, &policy).unwrap_err();
        assert_eq!(missing.available, vec!["alpha"]);
        assert_eq!(missing.batch_size, 1);
    }

    #[test]
    fn test_empty_batch_is_not_found() {
        let missing = find("anything", &[], &MatchPolicy::default()).unwrap_err();
        assert!(missing.available.is_empty());
        assert_eq!(missing.batch_size, 0);
    }

    #[test]
    fn test_invalid_escape_is_literal() {
        let batch = vec![record("100zz-off", "1")];
        let found = find("100%zz-off", &batch, &MatchPolicy::default()).unwrap();
        assert_eq!(found.record.slug(), "100zz-off");
    }

    #[test]
    fn test_empty_request_matches_nothing() {
        let batch = vec![record("alpha", "1")];
        assert!(find("   ", &batch, &MatchPolicy::default()).is_err());
    }
}
