use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use scraper::{Html, Selector};

use crate::errors::{BlogError, BlogResult};

pub const DEFAULT_WORDS_PER_MINUTE: u32 = 200;
pub const DEFAULT_AUTHOR: &str = "Editorial Team";

// `![alt](src)`, with an optional angle-bracketed src
static MARKDOWN_IMAGE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"!\[[^\]]*\]\(\s*<?([^)\s>]+)").ok());

/// Extract plain text from HTML markup, skipping script and style contents
pub fn strip_markup(body: &str) -> String {
    let document = Html::parse_fragment(body);
    let mut text = String::new();

    for node in document.root_element().descendants() {
        let Some(text_node) = node.value().as_text() else {
            continue;
        };

        let hidden = node
            .parent()
            .and_then(|parent| parent.value().as_element().map(|e| e.name()))
            .is_some_and(|name| name == "script" || name == "style");

        if !hidden {
            text.push_str(text_node);
            text.push(' ');
        }
    }

    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub fn word_count(body: &str) -> usize {
    strip_markup(body).split_whitespace().count()
}

/// Estimated minutes to read `body`, rounded up, never below one minute.
pub fn read_time_minutes(body: Option<&str>, words_per_minute: u32) -> u32 {
    let words = body.map(word_count).unwrap_or(0);
    let wpm = words_per_minute.max(1) as usize;
    let minutes = words.div_ceil(wpm).max(1);
    u32::try_from(minutes).unwrap_or(u32::MAX)
}

/// First embedded image in the body: an HTML `<img src>`, else a Markdown
/// `![alt](src)` reference.
pub fn first_image(body: &str) -> Option<String> {
    html_image(body).or_else(|| markdown_image(body))
}

fn html_image(body: &str) -> Option<String> {
    let selector = Selector::parse("img[src]").ok()?;
    let document = Html::parse_fragment(body);

    document
        .select(&selector)
        .filter_map(|img| img.value().attr("src"))
        .map(str::trim)
        .find(|src| !src.is_empty())
        .map(str::to_string)
}

fn markdown_image(body: &str) -> Option<String> {
    MARKDOWN_IMAGE
        .as_ref()?
        .captures(body)
        .map(|caps| caps[1].to_string())
}

/// Author display name to local avatar asset.
///
/// The content platform does not reliably link authors to images, so the
/// mapping is supplied by configuration. Names match case-insensitively.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthorDirectory {
    images: HashMap<String, String>,
    default_image: Option<String>,
}

impl AuthorDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default_image(mut self, image: Option<String>) -> Self {
        self.default_image = image;
        self
    }

    pub fn insert(&mut self, name: &str, image: &str) {
        self.images.insert(Self::key(name), image.to_string());
    }

    /// Load a JSON object of `{"Author Name": "/images/author.png"}` pairs.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> BlogResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn from_json_str(content: &str) -> BlogResult<Self> {
        let entries: HashMap<String, String> = serde_json::from_str(content).map_err(|e| {
            BlogError::Config(format!("author image map must be a JSON object of strings: {}", e))
        })?;

        let mut directory = Self::new();
        for (name, image) in &entries {
            directory.insert(name, image);
        }
        Ok(directory)
    }

    pub fn image_for(&self, author: &str) -> Option<String> {
        self.images
            .get(&Self::key(author))
            .or(self.default_image.as_ref())
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    fn key(name: &str) -> String {
        name.trim().to_lowercase()
    }
}
