use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate, Utc};

use crate::domain::{Post, ResolvedRecord};
use crate::errors::BlogResult;
use crate::resolver::Resolver;
use crate::sources::ContentSource;

/// Serves the blog listing and single-post lookups.
///
/// Every call fetches a fresh batch from the source; nothing is cached
/// between requests.
pub struct BlogService<S: ContentSource> {
    source: S,
    location: String,
    resolver: Resolver,
}

impl<S: ContentSource> BlogService<S> {
    pub fn new(source: S, location: impl Into<String>, resolver: Resolver) -> Self {
        Self {
            source,
            location: location.into(),
            resolver,
        }
    }

    fn fetch_batch(&self) -> BlogResult<Vec<ResolvedRecord>> {
        let records = self.source.fetch_records(&self.location)?;
        tracing::info!(
            source = %self.source.kind(),
            count = records.len(),
            "fetched content records"
        );

        Ok(self.resolver.resolve_batch(&records))
    }

    /// All posts, newest first. Undated posts keep their source order at the end.
    pub fn list_posts(&self) -> BlogResult<Vec<Post>> {
        let mut posts: Vec<Post> = self
            .fetch_batch()?
            .into_iter()
            .map(ResolvedRecord::into_post)
            .collect();

        sort_newest_first(&mut posts);
        Ok(posts)
    }

    /// Look up a single post by a slug taken from an inbound request.
    pub fn find_post(&self, slug: &str) -> BlogResult<Post> {
        let batch = self.fetch_batch()?;

        match self.resolver.find(slug, &batch) {
            Ok(found) => {
                tracing::debug!(
                    requested = slug,
                    slug = found.record.slug(),
                    rule = ?found.rule,
                    "post matched"
                );
                Ok(found.record.post().clone())
            }
            Err(report) => {
                tracing::warn!(
                    requested = %report.raw,
                    decoded = %report.decoded,
                    normalized = %report.normalized,
                    available = ?report.available,
                    "no post matched requested slug"
                );
                Err(report.into())
            }
        }
    }
}

/// Parse a publish date: RFC 3339, RFC 2822, or a bare `YYYY-MM-DD`.
pub fn parse_published(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(value) {
        return Some(dt.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

pub fn sort_newest_first(posts: &mut [Post]) {
    posts.sort_by(|a, b| {
        let a = a.published.as_deref().and_then(parse_published);
        let b = b.published.as_deref().and_then(parse_published);

        match (a, b) {
            (Some(a), Some(b)) => b.cmp(&a),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    });
}
