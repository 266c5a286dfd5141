use serde_json::Map;

use crate::domain::{fields, Post, RawContentRecord, ResolvedRecord};
use crate::resolver::derive::derive_slug;
use crate::resolver::metadata::{first_image, read_time_minutes};
use crate::resolver::ResolverSettings;

/// Resolve every record independently, preserving input order.
pub fn resolve_batch(records: &[RawContentRecord], settings: &ResolverSettings) -> Vec<ResolvedRecord> {
    records
        .iter()
        .map(|record| resolve_record(record, settings))
        .collect()
}

pub fn resolve_record(record: &RawContentRecord, settings: &ResolverSettings) -> ResolvedRecord {
    let derived = derive_slug(record, &settings.placeholders);

    tracing::debug!(
        id = record.id(),
        slug = %derived.slug,
        source = %derived.source,
        "resolved content record"
    );

    let title = record
        .get(fields::TITLE)
        .unwrap_or_else(|| "Untitled".to_string());
    let body = record.get(fields::BODY);
    let author = record
        .get(fields::AUTHOR)
        .unwrap_or_else(|| settings.default_author.clone());
    let author_image = settings.authors.image_for(&author);
    let thumbnail = record
        .get(fields::THUMBNAIL)
        .or_else(|| body.as_deref().and_then(first_image));
    let read_time = read_time_minutes(body.as_deref(), settings.words_per_minute);

    let extra: Map<_, _> = record
        .fields()
        .iter()
        .filter(|(key, _)| !fields::is_consumed(key))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    let post = Post::new(derived.slug, title, author)
        .with_summary(record.get(fields::SUMMARY))
        .with_author_image(author_image)
        .with_thumbnail(thumbnail)
        .with_published(record.get(fields::PUBLISHED))
        .with_read_time(read_time)
        .with_body(body)
        .with_extra(extra);

    ResolvedRecord::new(
        post,
        record.id().to_string(),
        record.get(fields::SLUG),
        record.get(fields::URL),
    )
}
