//! Field alias table for loosely typed source records.
//!
//! Content platforms expose the same logical attribute under different
//! spellings (`canonicalUrl`, `canonical_url`, `link`, ...). Every attribute
//! the resolver reads is declared once here as an ordered list of candidate
//! keys; the first key holding a usable value wins.

use serde_json::{Map, Value};

/// Keys probed, in order, when a field value is a nested object rather than
/// plain text (e.g. `{"author": {"name": "..."}}` or `{"coverImage": {"url": "..."}}`).
const NESTED_TEXT_KEYS: &[&str] = &["rendered", "name", "displayName", "url", "src", "href", "text"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
}

pub const ID: Field = Field {
    name: "id",
    aliases: &["id", "_id", "ID", "Id", "postId", "post_id", "uuid", "guid"],
};

pub const SLUG: Field = Field {
    name: "slug",
    aliases: &["slug", "Slug", "postSlug", "post_slug", "urlSlug", "url_slug"],
};

pub const TITLE: Field = Field {
    name: "title",
    aliases: &["title", "Title", "headline", "name", "Name"],
};

pub const URL: Field = Field {
    name: "url",
    aliases: &[
        "canonicalUrl",
        "canonical_url",
        "canonicalURL",
        "url",
        "URL",
        "Url",
        "link",
        "permalink",
    ],
};

pub const BODY: Field = Field {
    name: "body",
    aliases: &[
        "body",
        "Body",
        "content",
        "Content",
        "contentHtml",
        "content_html",
        "html",
        "markdown",
    ],
};

pub const SUMMARY: Field = Field {
    name: "summary",
    aliases: &["summary", "Summary", "excerpt", "brief", "description", "subtitle"],
};

pub const PUBLISHED: Field = Field {
    name: "published",
    aliases: &[
        "publishedAt",
        "published_at",
        "publishDate",
        "publish_date",
        "published",
        "date",
        "createdAt",
        "created_at",
    ],
};

pub const THUMBNAIL: Field = Field {
    name: "thumbnail",
    aliases: &[
        "thumbnail",
        "thumbnailUrl",
        "coverImage",
        "cover_image",
        "featuredImage",
        "featured_image",
        "image",
        "ogImage",
    ],
};

pub const AUTHOR: Field = Field {
    name: "author",
    aliases: &[
        "author",
        "authorName",
        "author_name",
        "Author",
        "AuthorName",
        "creator",
        "writer",
    ],
};

/// Every field the resolver consumes. Anything else passes through untouched.
pub const ALL: &[Field] = &[ID, SLUG, TITLE, URL, BODY, SUMMARY, PUBLISHED, THUMBNAIL, AUTHOR];

impl Field {
    /// First alias present with a usable text value.
    pub fn text(&self, fields: &Map<String, Value>) -> Option<String> {
        self.aliases
            .iter()
            .filter_map(|key| fields.get(*key))
            .find_map(value_text)
    }

    /// Every usable text value, in alias order.
    pub fn texts<'a>(&'a self, fields: &'a Map<String, Value>) -> impl Iterator<Item = String> + 'a {
        self.aliases
            .iter()
            .filter_map(move |key| fields.get(*key))
            .filter_map(value_text)
    }

    /// Whether `key` is one of this field's aliases.
    pub fn owns(&self, key: &str) -> bool {
        self.aliases.contains(&key)
    }
}

/// Whether any consumed field claims `key`.
pub fn is_consumed(key: &str) -> bool {
    ALL.iter().any(|field| field.owns(key))
}

/// Coerce a JSON value to non-empty trimmed text.
pub fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        Value::Number(n) => Some(n.to_string()),
        Value::Object(map) => NESTED_TEXT_KEYS
            .iter()
            .filter_map(|key| map.get(*key))
            .find_map(value_text),
        Value::Array(items) => items.iter().find_map(value_text),
        Value::Bool(_) | Value::Null => None,
    }
}
