use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::fields;

/// One piece of content as delivered by the content platform.
///
/// Only the opaque id is guaranteed; every other attribute is read through
/// the alias table in [`fields`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct RawContentRecord {
    id: String,
    fields: Map<String, Value>,
}

impl RawContentRecord {
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        let mut fields = Map::new();
        fields.insert("id".to_string(), Value::String(id.clone()));
        Self { id, fields }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn get(&self, field: fields::Field) -> Option<String> {
        field.text(&self.fields)
    }

    pub fn get_all(&self, field: fields::Field) -> Vec<String> {
        field.texts(&self.fields).collect()
    }

    pub fn with_field(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(key.to_string(), value.into());
        self
    }

    pub fn with_slug(self, slug: &str) -> Self {
        self.with_field("slug", slug)
    }

    pub fn with_title(self, title: &str) -> Self {
        self.with_field("title", title)
    }

    pub fn with_url(self, url: &str) -> Self {
        self.with_field("url", url)
    }

    pub fn with_body(self, body: &str) -> Self {
        self.with_field("body", body)
    }
}

impl TryFrom<Map<String, Value>> for RawContentRecord {
    type Error = String;

    fn try_from(fields: Map<String, Value>) -> Result<Self, Self::Error> {
        let id = fields::ID
            .text(&fields)
            .ok_or_else(|| "content record has no id".to_string())?;

        Ok(Self { id, fields })
    }
}

impl From<RawContentRecord> for Map<String, Value> {
    fn from(record: RawContentRecord) -> Self {
        record.fields
    }
}
