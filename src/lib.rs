//! Schema Outline
//!
//! Renders human-readable structural summaries of content schemas that have been
//! lowered to JSON Schema (draft 7). Lowered documents have no discriminant tag,
//! so every node is classified into one of a closed set of variants before it is
//! rendered.
//!
//! ## Pipeline
//!
//! ```text
//! serde_json::Value ──classify──▶ SchemaVariant (+ nullable)
//!        │
//!        └──Walker::describe──▶ SchemaDescription ──SchemaVisitor──▶ text / JSON
//! ```
//!
//! ## Example
//!
//! ```
//! use schema_outline::{Walker, TextRenderer, RenderConfig};
//! use serde_json::json;
//!
//! let schema = json!({
//!     "type": "object",
//!     "properties": { "title": { "type": "string" } },
//!     "required": ["title"]
//! });
//!
//! let description = Walker::default().describe(&schema).unwrap();
//! let text = TextRenderer::render(&description, &RenderConfig::default());
//! assert_eq!(text, "object\n  title: string");
//! ```

pub mod classify;
pub mod collection;
pub mod config;
pub mod error;
pub mod loader;
pub mod render;
pub mod walk;

pub use classify::{classify, Classification, SchemaNode, SchemaVariant};
pub use collection::{render_outlines, Collection, CollectionOutline, CollectionSet};
pub use config::{OutlineConfig, OutputFormat, RenderConfig, WalkerConfig};
pub use error::{OutlineError, Result};
pub use loader::{collect_schema_files, load_document};
pub use render::{render, TextRenderer};
pub use walk::{
    ChildLabel, DescriptionKind, PropertyDescription, SchemaDescription, SchemaVisitor, Walker,
};
