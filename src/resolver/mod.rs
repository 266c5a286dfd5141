//! Content identity resolution.
//!
//! Turns loosely typed records from the content platform into posts with a
//! stable, URL-safe slug, and maps inbound slugs back to those posts. Every
//! operation here is pure and in-memory; fetching is the job of
//! [`crate::sources`].

pub mod derive;
pub mod matcher;
pub mod metadata;
pub mod normalize;
pub mod transform;

pub use derive::{derive_slug, DerivedSlug, SlugSource};
pub use matcher::{Match, MatchPolicy, MatchRule, NotFound};
pub use metadata::AuthorDirectory;
pub use normalize::normalize;

use crate::domain::{RawContentRecord, ResolvedRecord};

/// Path segments the content platform uses for list roots and alternate
/// renderings; never a post slug on their own.
pub const DEFAULT_PLACEHOLDERS: &[&str] = &["blog", "posts", "post", "articles", "article", "p", "amp"];

#[derive(Debug, Clone, PartialEq)]
pub struct ResolverSettings {
    pub placeholders: Vec<String>,
    pub words_per_minute: u32,
    pub default_author: String,
    pub authors: AuthorDirectory,
    pub match_policy: MatchPolicy,
}

impl Default for ResolverSettings {
    fn default() -> Self {
        Self {
            placeholders: DEFAULT_PLACEHOLDERS.iter().map(|s| s.to_string()).collect(),
            words_per_minute: metadata::DEFAULT_WORDS_PER_MINUTE,
            default_author: metadata::DEFAULT_AUTHOR.to_string(),
            authors: AuthorDirectory::default(),
            match_policy: MatchPolicy::default(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Resolver {
    settings: ResolverSettings,
}

impl Resolver {
    pub fn new(settings: ResolverSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &ResolverSettings {
        &self.settings
    }

    pub fn derive_slug(&self, record: &RawContentRecord) -> String {
        derive::derive_slug(record, &self.settings.placeholders).slug
    }

    pub fn resolve(&self, record: &RawContentRecord) -> ResolvedRecord {
        transform::resolve_record(record, &self.settings)
    }

    pub fn resolve_batch(&self, records: &[RawContentRecord]) -> Vec<ResolvedRecord> {
        transform::resolve_batch(records, &self.settings)
    }

    pub fn find<'a>(
        &self,
        requested: &str,
        batch: &'a [ResolvedRecord],
    ) -> Result<Match<'a>, NotFound> {
        matcher::find(requested, batch, &self.settings.match_policy)
    }
}
