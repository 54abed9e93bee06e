//! Content Collections
//!
//! A collection set maps collection names to their lowered root schemas:
//!
//! ```json
//! {
//!   "docs": { "type": "object", "properties": { "title": { "type": "string" } } },
//!   "posts": { "type": "object", "properties": {} }
//! }
//! ```
//!
//! Collections keep the order they are declared in.

use serde::Serialize;
use serde_json::Value;
use std::path::Path;

use crate::config::RenderConfig;
use crate::error::{OutlineError, Result};
use crate::render::TextRenderer;
use crate::walk::{escape_pointer, SchemaDescription, Walker};

/// One named root schema
#[derive(Debug, Clone, PartialEq)]
pub struct Collection {
    pub name: String,
    pub schema: Value,
}

/// Outline of one collection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollectionOutline {
    pub name: String,
    pub schema: SchemaDescription,
}

/// Ordered set of named collections
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollectionSet {
    collections: Vec<Collection>,
}

impl CollectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a JSON object of `name -> schema`
    pub fn from_json(document: Value) -> Result<Self> {
        let Value::Object(entries) = document else {
            return Err(OutlineError::InvalidCollection(
                "expected an object mapping collection names to schemas".to_string(),
            ));
        };

        let collections = entries
            .into_iter()
            .map(|(name, schema)| Collection { name, schema })
            .collect();
        Ok(Self { collections })
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        Self::from_json(serde_json::from_str(content)?)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "loaded collection set");
        Self::from_json_str(&content)
    }

    /// Add a collection; names must be unique
    pub fn insert(&mut self, name: impl Into<String>, schema: Value) -> Result<()> {
        let name = name.into();
        if self.get(&name).is_some() {
            return Err(OutlineError::InvalidCollection(format!(
                "duplicate collection name `{}`",
                name
            )));
        }
        self.collections.push(Collection { name, schema });
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Collection> {
        self.collections.iter().find(|collection| collection.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.collections.iter().map(|collection| collection.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.collections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
    }

    /// Describe every collection, stopping at the first unclassifiable node
    pub fn outline(&self, walker: &Walker) -> Result<Vec<CollectionOutline>> {
        self.collections
            .iter()
            .map(|collection| {
                let path = format!("#/{}", escape_pointer(&collection.name));
                Ok(CollectionOutline {
                    name: collection.name.clone(),
                    schema: walker.describe_at(&collection.schema, &path)?,
                })
            })
            .collect()
    }
}

/// Text outline of several collections, each under a `# name` heading
pub fn render_outlines(outlines: &[CollectionOutline], config: &RenderConfig) -> String {
    outlines
        .iter()
        .map(|outline| {
            format!(
                "# {}\n{}",
                outline.name,
                TextRenderer::render(&outline.schema, config)
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_collections_keep_declared_order() {
        let set = CollectionSet::from_json_str(
            r#"{
                "posts": { "type": "object", "properties": {} },
                "docs": { "type": "object", "properties": {} },
                "authors": { "type": "object", "properties": {} }
            }"#,
        )
        .unwrap();

        let names: Vec<&str> = set.names().collect();
        assert_eq!(names, vec!["posts", "docs", "authors"]);
    }

    #[test]
    fn test_rejects_non_object_document() {
        let err = CollectionSet::from_json(json!([1, 2])).unwrap_err();
        assert!(matches!(err, OutlineError::InvalidCollection(_)));
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let mut set = CollectionSet::new();
        set.insert("docs", json!({})).unwrap();
        assert!(set.insert("docs", json!({})).is_err());
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_outline_errors_name_the_collection() {
        let mut set = CollectionSet::new();
        set.insert("docs", json!({ "type": "object", "properties": {} })).unwrap();
        set.insert("posts", json!({ "$ref": "#/definitions/Post" })).unwrap();

        match set.outline(&Walker::default()) {
            Err(OutlineError::UnsupportedConstruct { path, .. }) => assert_eq!(path, "#/posts"),
            other => panic!("Expected UnsupportedConstruct, got {:?}", other),
        }
    }

    #[test]
    fn test_error_path_escapes_collection_name() {
        let mut set = CollectionSet::new();
        set.insert("a/b~c", json!({ "oneOf": [] })).unwrap();

        match set.outline(&Walker::default()) {
            Err(OutlineError::UnsupportedConstruct { path, .. }) => assert_eq!(path, "#/a~1b~0c"),
            other => panic!("Expected UnsupportedConstruct, got {:?}", other),
        }
    }

    #[test]
    fn test_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("collections.json");
        std::fs::write(&path, r#"{ "docs": { "type": "object", "properties": {} } }"#).unwrap();

        let set = CollectionSet::from_path(&path).unwrap();
        assert!(!set.is_empty());
        assert_eq!(set.len(), 1);
        assert!(set.get("docs").is_some());

        let empty = CollectionSet::from_json_str("{}").unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_render_outlines() {
        let mut set = CollectionSet::new();
        set.insert(
            "docs",
            json!({
                "type": "object",
                "properties": { "title": { "type": "string" } },
                "required": ["title"]
            }),
        )
        .unwrap();
        set.insert("drafts", json!({ "type": "object", "properties": {} })).unwrap();

        let outlines = set.outline(&Walker::default()).unwrap();
        let text = render_outlines(&outlines, &RenderConfig::default());
        assert_eq!(text, "# docs\nobject\n  title: string\n\n# drafts\n(no properties)");
    }
}
