use url::Url;

use crate::domain::{fields, RawContentRecord};
use crate::resolver::normalize::{decode, normalize};

/// Base used to resolve relative source URLs such as `/blog/my-post`.
const RELATIVE_BASE: &str = "http://localhost/";

/// Extensions that mark a path segment as a file rather than a page.
const FILE_EXTENSIONS: &[&str] = &[
    "html", "htm", "php", "asp", "aspx", "jsp", "xml", "json", "rss", "atom", "png", "jpg",
    "jpeg", "gif", "webp", "svg", "ico", "pdf", "txt", "md",
];

/// Where a derived slug came from, highest priority first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlugSource {
    Explicit,
    Url,
    Title,
    Id,
}

impl SlugSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            SlugSource::Explicit => "slug",
            SlugSource::Url => "url",
            SlugSource::Title => "title",
            SlugSource::Id => "id",
        }
    }
}

impl std::fmt::Display for SlugSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedSlug {
    pub slug: String,
    pub source: SlugSource,
}

/// Pick the best slug for `record`: its own slug, then the source URL path,
/// then the title, then the opaque id. Never fails and, for a non-empty id,
/// never returns an empty slug.
pub fn derive_slug(record: &RawContentRecord, placeholders: &[String]) -> DerivedSlug {
    if let Some(slug) = record
        .get(fields::SLUG)
        .and_then(|raw| accept(strip_query(&raw), placeholders))
    {
        return DerivedSlug {
            slug,
            source: SlugSource::Explicit,
        };
    }

    if let Some(slug) = record
        .get_all(fields::URL)
        .iter()
        .find_map(|raw| url_segment(raw, placeholders))
    {
        return DerivedSlug {
            slug,
            source: SlugSource::Url,
        };
    }

    if let Some(slug) = record
        .get(fields::TITLE)
        .map(|title| normalize(&title))
        .filter(|slug| !slug.is_empty())
    {
        return DerivedSlug {
            slug,
            source: SlugSource::Title,
        };
    }

    DerivedSlug {
        slug: id_slug(record.id()),
        source: SlugSource::Id,
    }
}

/// Drop any query string or fragment.
fn strip_query(raw: &str) -> &str {
    raw.split(&['?', '#'][..]).next().unwrap_or(raw)
}

/// Normalize a candidate if it passes the sanity filter.
fn accept(candidate: &str, placeholders: &[String]) -> Option<String> {
    if is_placeholder(candidate, placeholders) || has_file_extension(candidate) {
        return None;
    }

    let slug = normalize(candidate);
    if slug.is_empty() {
        None
    } else {
        Some(slug)
    }
}

fn url_segment(raw: &str, placeholders: &[String]) -> Option<String> {
    let parsed = Url::parse(raw)
        .or_else(|_| Url::parse(RELATIVE_BASE).and_then(|base| base.join(raw)))
        .ok()?;

    let segments: Vec<&str> = parsed.path_segments()?.collect();
    let last = segments.last().copied().unwrap_or("");

    if !last.is_empty() && !is_placeholder(last, placeholders) {
        return accept(last, placeholders);
    }

    segments
        .len()
        .checked_sub(2)
        .and_then(|i| segments.get(i))
        .and_then(|segment| accept(segment, placeholders))
}

fn is_placeholder(candidate: &str, placeholders: &[String]) -> bool {
    let slug = normalize(candidate);
    placeholders.iter().any(|p| normalize(p) == slug)
}

fn has_file_extension(candidate: &str) -> bool {
    match decode(candidate).rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => FILE_EXTENSIONS
            .iter()
            .any(|known| known.eq_ignore_ascii_case(ext.trim())),
        _ => false,
    }
}

/// Last-resort slug from the opaque id. Ids with no alphanumerics are
/// hex-encoded so the result stays inside the slug alphabet.
fn id_slug(id: &str) -> String {
    let slug = normalize(id);
    if !slug.is_empty() {
        return slug;
    }

    id.bytes().map(|b| format!("{:02x}", b)).collect()
}
