use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A resolved post as exposed to consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub slug: String,
    pub title: String,
    pub summary: Option<String>,
    pub body: Option<String>,
    pub author: String,
    pub author_image: Option<String>,
    pub thumbnail: Option<String>,
    pub published: Option<String>,
    pub read_time_minutes: u32,
    /// Source fields not consumed by the resolver, passed through unchanged.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub extra: Map<String, Value>,
}

impl Post {
    pub fn new(slug: String, title: String, author: String) -> Self {
        Self {
            slug,
            title,
            summary: None,
            body: None,
            author,
            author_image: None,
            thumbnail: None,
            published: None,
            read_time_minutes: 1,
            extra: Map::new(),
        }
    }

    pub fn with_summary(mut self, summary: Option<String>) -> Self {
        self.summary = summary;
        self
    }

    pub fn with_body(mut self, body: Option<String>) -> Self {
        self.body = body;
        self
    }

    pub fn with_author_image(mut self, author_image: Option<String>) -> Self {
        self.author_image = author_image;
        self
    }

    pub fn with_thumbnail(mut self, thumbnail: Option<String>) -> Self {
        self.thumbnail = thumbnail;
        self
    }

    pub fn with_published(mut self, published: Option<String>) -> Self {
        self.published = published;
        self
    }

    pub fn with_read_time(mut self, minutes: u32) -> Self {
        self.read_time_minutes = minutes;
        self
    }

    pub fn with_extra(mut self, extra: Map<String, Value>) -> Self {
        self.extra = extra;
        self
    }
}

/// A post together with the source identity it was resolved from.
///
/// The original id, slug and url only exist for lookup matching and never
/// leave the crate; consumers get a [`Post`] through [`ResolvedRecord::into_post`].
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedRecord {
    post: Post,
    pub(crate) original_id: String,
    pub(crate) original_slug: Option<String>,
    pub(crate) original_url: Option<String>,
}

impl ResolvedRecord {
    pub(crate) fn new(
        post: Post,
        original_id: String,
        original_slug: Option<String>,
        original_url: Option<String>,
    ) -> Self {
        Self {
            post,
            original_id,
            original_slug,
            original_url,
        }
    }

    pub fn slug(&self) -> &str {
        &self.post.slug
    }

    pub fn post(&self) -> &Post {
        &self.post
    }

    pub fn into_post(self) -> Post {
        self.post
    }
}
