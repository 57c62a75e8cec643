//! Top-level story documents: `{"inkVersion": 17, "root": [...]}`.

use serde_json::{json, Map, Value as Json};
use tale_runtime::Container;

use crate::decode::{as_int, decode_container};
use crate::encode::encode_container;
use crate::error::{malformed, Result};

/// A decoded story file.
#[derive(Debug, Clone, PartialEq)]
pub struct StoryDocument {
    /// Format version recorded by the compiler, when present.
    pub ink_version: Option<i64>,
    pub root: Container,
}

impl StoryDocument {
    pub fn new(root: Container) -> Self {
        Self {
            ink_version: None,
            root,
        }
    }

    /// Reads a story document; a bare container array is accepted as the
    /// root of a document with no version.
    pub fn from_json(doc: &Json) -> Result<Self> {
        match doc {
            Json::Array(arr) => Ok(Self::new(decode_container(arr)?)),
            Json::Object(obj) => Self::from_object(doc, obj),
            _ => Err(malformed(doc, "story document must be an object or array")),
        }
    }

    fn from_object(doc: &Json, obj: &Map<String, Json>) -> Result<Self> {
        let root = obj
            .get("root")
            .and_then(Json::as_array)
            .ok_or_else(|| malformed(doc, "story document has no \"root\" array"))?;
        let ink_version = match obj.get("inkVersion") {
            None => None,
            Some(v) => Some(
                as_int(v).ok_or_else(|| malformed(doc, "\"inkVersion\" must be an integer"))?,
            ),
        };
        Ok(Self {
            ink_version,
            root: decode_container(root)?,
        })
    }

    pub fn to_json(&self) -> Result<Json> {
        let mut doc = Map::new();
        if let Some(version) = self.ink_version {
            doc.insert("inkVersion".into(), json!(version));
        }
        doc.insert("root".into(), encode_container(&self.root)?);
        Ok(Json::Object(doc))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_versioned_document() {
        let doc = json!({"inkVersion": 17, "root": ["^Hello", "\n", "done", {"#f": 1}]});
        let story = StoryDocument::from_json(&doc).unwrap();
        assert_eq!(story.ink_version, Some(17));
        assert_eq!(story.root.content.len(), 3);
        assert_eq!(story.to_json().unwrap(), doc);
    }

    #[test]
    fn missing_root_is_malformed() {
        assert!(StoryDocument::from_json(&json!({"inkVersion": 17})).is_err());
        assert!(StoryDocument::from_json(&json!("root")).is_err());
    }

    #[test]
    fn bare_array_is_a_root() {
        let story = StoryDocument::from_json(&json!(["end", null])).unwrap();
        assert_eq!(story.ink_version, None);
        assert_eq!(story.root.content.len(), 1);
    }
}
