//! Outline Rendering
//!
//! Turns a description tree into text. `TextRenderer` is a `SchemaVisitor`
//! producing an indented outline:
//!
//! ```text
//! object
//!   title: string
//!   tags?: array
//!     []: string
//!   meta?: record (nullable)
//!     [key: string]: number
//! ```
//!
//! Optional properties carry a `?` after their name. JSON output serializes the
//! description tree itself.

use serde_json::Value;

use crate::classify::SchemaVariant;
use crate::config::{OutputFormat, RenderConfig};
use crate::error::Result;
use crate::walk::{PropertyDescription, SchemaDescription, SchemaVisitor};

/// Render a description in the configured format
pub fn render(description: &SchemaDescription, config: &RenderConfig) -> Result<String> {
    match config.format {
        OutputFormat::Text => Ok(TextRenderer::render(description, config)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(description)?),
        OutputFormat::Compact => Ok(serde_json::to_string(description)?),
    }
}

/// Indented text outline writer
pub struct TextRenderer<'a> {
    config: &'a RenderConfig,
    out: String,
    depth: usize,
}

impl<'a> TextRenderer<'a> {
    pub fn new(config: &'a RenderConfig) -> Self {
        Self {
            config,
            out: String::new(),
            depth: 0,
        }
    }

    /// Render one root description
    pub fn render(description: &SchemaDescription, config: &'a RenderConfig) -> String {
        let mut renderer = Self::new(config);
        description.accept(&mut renderer);
        renderer.finish()
    }

    pub fn finish(self) -> String {
        self.out
    }

    fn header(&mut self, schema: &SchemaDescription, text: &str) {
        self.out.push_str(text);
        if schema.nullable {
            self.out.push_str(" (nullable)");
        }
        if self.config.show_descriptions {
            if let Some(description) = &schema.description {
                self.out.push_str("  // ");
                self.out.push_str(description);
            }
        }
    }

    /// Write `label: <child>` on a new line one level deeper
    fn child(&mut self, label: &str, child: &SchemaDescription) {
        self.depth += 1;
        self.out.push('\n');
        self.out.push_str(&" ".repeat(self.config.indent * self.depth));
        self.out.push_str(label);
        self.out.push_str(": ");
        child.accept(self);
        self.depth -= 1;
    }
}

impl SchemaVisitor for TextRenderer<'_> {
    type Output = ();

    fn visit_object(&mut self, schema: &SchemaDescription, properties: &[PropertyDescription]) {
        self.header(schema, "object");
        for property in properties {
            let label = if property.required {
                property.name.clone()
            } else {
                format!("{}?", property.name)
            };
            self.child(&label, &property.schema);
        }
    }

    fn visit_empty_object(&mut self, schema: &SchemaDescription) {
        if self.depth == 0 {
            let config = self.config;
            self.header(schema, &config.root_placeholder);
        } else {
            self.header(schema, "object");
        }
    }

    fn visit_record(&mut self, schema: &SchemaDescription, value: &SchemaDescription) {
        self.header(schema, "record");
        self.child("[key: string]", value);
    }

    fn visit_array(&mut self, schema: &SchemaDescription, items: &SchemaDescription) {
        self.header(schema, "array");
        self.child("[]", items);
    }

    fn visit_tuple(
        &mut self,
        schema: &SchemaDescription,
        items: &[SchemaDescription],
        rest: Option<&SchemaDescription>,
    ) {
        self.header(schema, "tuple");
        for (index, item) in items.iter().enumerate() {
            self.child(&format!("[{}]", index), item);
        }
        if let Some(rest) = rest {
            self.child("[...]", rest);
        }
    }

    fn visit_literal(&mut self, schema: &SchemaDescription, value: &Value) {
        self.header(schema, &value.to_string());
    }

    fn visit_enum(&mut self, schema: &SchemaDescription, values: &[Value]) {
        let values: Vec<String> = values.iter().map(Value::to_string).collect();
        self.header(schema, &format!("enum: {}", values.join(" | ")));
    }

    fn visit_scalar(&mut self, schema: &SchemaDescription, variant: SchemaVariant) {
        self.header(schema, variant.as_str());
    }
}
