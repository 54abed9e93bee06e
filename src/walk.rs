//! Recursive Descent
//!
//! Walks a schema document, classifying every node and descending into the
//! children of composite variants. The result is a `SchemaDescription` tree
//! that renderers consume through `SchemaVisitor`, matching on a real tag
//! instead of re-deriving it from the raw JSON.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;

use crate::classify::{classify_at, SchemaVariant};
use crate::config::WalkerConfig;
use crate::error::{OutlineError, Result};

// =============================================================================
// Description Tree
// =============================================================================

/// Renderable description of one schema node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaDescription {
    pub kind: DescriptionKind,
    /// Rendered as an annotation next to the variant
    pub nullable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Variant-specific payload of a description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "variant", rename_all = "snake_case")]
pub enum DescriptionKind {
    /// Named properties, in declared order
    Object { properties: Vec<PropertyDescription> },
    /// Object without properties: open-ended, rendered as a placeholder
    EmptyObject,
    /// Keys are always strings
    Record { value: Box<SchemaDescription> },
    String,
    Number,
    #[serde(rename = "bigint")]
    BigInt,
    Boolean,
    Date,
    Literal { value: Value },
    #[serde(rename = "enum")]
    EnumLike { values: Vec<Value> },
    Array { items: Box<SchemaDescription> },
    /// Fixed positional items, plus a repeating tail for variadic tuples
    Tuple {
        items: Vec<SchemaDescription>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        rest: Option<Box<SchemaDescription>>,
    },
    Undefined,
    Unknown,
    Null,
}

/// A property of an object description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyDescription {
    pub name: String,
    pub required: bool,
    pub schema: SchemaDescription,
}

/// Label of a child edge in the description tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChildLabel<'a> {
    Property { name: &'a str, required: bool },
    /// Record key, always a string
    Key,
    /// Array element
    Element,
    /// Tuple slot
    Position(usize),
    /// Variadic tuple tail
    Rest,
}

impl SchemaDescription {
    fn new(kind: DescriptionKind) -> Self {
        Self {
            kind,
            nullable: false,
            title: None,
            description: None,
        }
    }

    /// The classifier variant this description was built from
    pub fn variant(&self) -> SchemaVariant {
        match &self.kind {
            DescriptionKind::Object { .. } | DescriptionKind::EmptyObject => SchemaVariant::Object,
            DescriptionKind::Record { .. } => SchemaVariant::Record,
            DescriptionKind::String => SchemaVariant::String,
            DescriptionKind::Number => SchemaVariant::Number,
            DescriptionKind::BigInt => SchemaVariant::BigInt,
            DescriptionKind::Boolean => SchemaVariant::Boolean,
            DescriptionKind::Date => SchemaVariant::Date,
            DescriptionKind::Literal { .. } => SchemaVariant::Literal,
            DescriptionKind::EnumLike { .. } => SchemaVariant::EnumLike,
            DescriptionKind::Array { .. } => SchemaVariant::Array,
            DescriptionKind::Tuple { rest: Some(_), .. } => SchemaVariant::VariadicTuple,
            DescriptionKind::Tuple { rest: None, .. } => SchemaVariant::Tuple,
            DescriptionKind::Undefined => SchemaVariant::Undefined,
            DescriptionKind::Unknown => SchemaVariant::Unknown,
            DescriptionKind::Null => SchemaVariant::Null,
        }
    }

    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    /// Child descriptions with their labels, in display order
    pub fn children(&self) -> Vec<(ChildLabel<'_>, &SchemaDescription)> {
        match &self.kind {
            DescriptionKind::Object { properties } => properties
                .iter()
                .map(|property| {
                    let label = ChildLabel::Property {
                        name: &property.name,
                        required: property.required,
                    };
                    (label, &property.schema)
                })
                .collect(),
            DescriptionKind::Record { value } => vec![(ChildLabel::Key, value.as_ref())],
            DescriptionKind::Array { items } => vec![(ChildLabel::Element, items.as_ref())],
            DescriptionKind::Tuple { items, rest } => {
                let mut children: Vec<_> = items
                    .iter()
                    .enumerate()
                    .map(|(index, item)| (ChildLabel::Position(index), item))
                    .collect();
                if let Some(rest) = rest {
                    children.push((ChildLabel::Rest, rest.as_ref()));
                }
                children
            }
            _ => Vec::new(),
        }
    }

    /// Dispatch to the visitor method for this variant
    pub fn accept<V: SchemaVisitor>(&self, visitor: &mut V) -> V::Output {
        match &self.kind {
            DescriptionKind::Object { properties } => visitor.visit_object(self, properties),
            DescriptionKind::EmptyObject => visitor.visit_empty_object(self),
            DescriptionKind::Record { value } => visitor.visit_record(self, value),
            DescriptionKind::Array { items } => visitor.visit_array(self, items),
            DescriptionKind::Tuple { items, rest } => {
                visitor.visit_tuple(self, items, rest.as_deref())
            }
            DescriptionKind::Literal { value } => visitor.visit_literal(self, value),
            DescriptionKind::EnumLike { values } => visitor.visit_enum(self, values),
            DescriptionKind::String
            | DescriptionKind::Number
            | DescriptionKind::BigInt
            | DescriptionKind::Boolean
            | DescriptionKind::Date
            | DescriptionKind::Undefined
            | DescriptionKind::Unknown
            | DescriptionKind::Null => visitor.visit_scalar(self, self.variant()),
        }
    }
}

/// Visitor over the closed set of description variants
pub trait SchemaVisitor {
    type Output;

    fn visit_object(
        &mut self,
        schema: &SchemaDescription,
        properties: &[PropertyDescription],
    ) -> Self::Output;

    fn visit_empty_object(&mut self, schema: &SchemaDescription) -> Self::Output;

    fn visit_record(&mut self, schema: &SchemaDescription, value: &SchemaDescription)
        -> Self::Output;

    fn visit_array(&mut self, schema: &SchemaDescription, items: &SchemaDescription)
        -> Self::Output;

    fn visit_tuple(
        &mut self,
        schema: &SchemaDescription,
        items: &[SchemaDescription],
        rest: Option<&SchemaDescription>,
    ) -> Self::Output;

    fn visit_literal(&mut self, schema: &SchemaDescription, value: &Value) -> Self::Output;

    fn visit_enum(&mut self, schema: &SchemaDescription, values: &[Value]) -> Self::Output;

    /// Terminal variants without a payload (string, number, bigint, boolean,
    /// date, undefined, unknown, null)
    fn visit_scalar(&mut self, schema: &SchemaDescription, variant: SchemaVariant)
        -> Self::Output;
}

// =============================================================================
// Walker
// =============================================================================

/// Builds description trees from schema documents
#[derive(Debug, Clone)]
pub struct Walker {
    max_depth: usize,
}

impl Default for Walker {
    fn default() -> Self {
        Self::new(&WalkerConfig::default())
    }
}

impl Walker {
    pub fn new(config: &WalkerConfig) -> Self {
        Self {
            max_depth: config.max_depth,
        }
    }

    pub fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// Describe a root schema
    pub fn describe(&self, schema: &Value) -> Result<SchemaDescription> {
        self.describe_with(schema, false)
    }

    /// Describe a schema whose nullability may come from an enclosing wrapper
    pub fn describe_with(&self, schema: &Value, nullable: bool) -> Result<SchemaDescription> {
        self.walk(schema, nullable, "#", 0)
    }

    /// Describe a schema embedded in a larger document at `path`
    pub fn describe_at(&self, schema: &Value, path: &str) -> Result<SchemaDescription> {
        self.walk(schema, false, path, 0)
    }

    fn walk(
        &self,
        schema: &Value,
        inherited_nullable: bool,
        path: &str,
        depth: usize,
    ) -> Result<SchemaDescription> {
        if depth > self.max_depth {
            return Err(OutlineError::DepthLimitExceeded {
                path: path.to_string(),
                limit: self.max_depth,
            });
        }

        let classification = classify_at(schema, path)?;
        let node = classification.node.value();

        let kind = match classification.variant {
            SchemaVariant::Object => self.walk_object(node, path, depth)?,
            SchemaVariant::Record => DescriptionKind::Record {
                value: Box::new(self.walk_record_value(node, path, depth)?),
            },
            SchemaVariant::Array => {
                let items_path = child_path(path, "items");
                DescriptionKind::Array {
                    items: Box::new(self.walk_open_child(node.get("items"), &items_path, depth)?),
                }
            }
            SchemaVariant::Tuple => self.walk_tuple(node, false, path, depth)?,
            SchemaVariant::VariadicTuple => self.walk_tuple(node, true, path, depth)?,
            SchemaVariant::Literal => DescriptionKind::Literal {
                value: node
                    .get("const")
                    .cloned()
                    .ok_or_else(|| OutlineError::unrecognized(path, "literal without `const`"))?,
            },
            SchemaVariant::EnumLike => DescriptionKind::EnumLike {
                values: node
                    .get("enum")
                    .and_then(Value::as_array)
                    .cloned()
                    .ok_or_else(|| OutlineError::unrecognized(path, "`enum` must be an array"))?,
            },
            SchemaVariant::String => DescriptionKind::String,
            SchemaVariant::Number => DescriptionKind::Number,
            SchemaVariant::BigInt => DescriptionKind::BigInt,
            SchemaVariant::Boolean => DescriptionKind::Boolean,
            SchemaVariant::Date => DescriptionKind::Date,
            SchemaVariant::Undefined => DescriptionKind::Undefined,
            SchemaVariant::Unknown => DescriptionKind::Unknown,
            SchemaVariant::Null => DescriptionKind::Null,
        };

        Ok(SchemaDescription {
            kind,
            nullable: inherited_nullable || classification.nullable,
            title: annotation(schema, node, "title"),
            description: annotation(schema, node, "description"),
        })
    }

    fn walk_object(&self, node: &Value, path: &str, depth: usize) -> Result<DescriptionKind> {
        let Some(properties) = node.get("properties").and_then(Value::as_object) else {
            return Err(OutlineError::unrecognized(path, "`properties` must be an object"));
        };

        if properties.is_empty() {
            return Ok(DescriptionKind::EmptyObject);
        }

        let required: HashSet<&str> = node
            .get("required")
            .and_then(Value::as_array)
            .map(|names| names.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default();

        // serde_json preserves declaration order, which is display order
        let properties = properties
            .iter()
            .map(|(name, property)| {
                let property_path = format!("{}/properties/{}", path, escape_pointer(name));
                tracing::trace!(path = %property_path, "descending into property");
                Ok(PropertyDescription {
                    name: name.clone(),
                    required: required.contains(name.as_str()),
                    schema: self.walk(property, false, &property_path, depth + 1)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(DescriptionKind::Object { properties })
    }

    fn walk_record_value(&self, node: &Value, path: &str, depth: usize) -> Result<SchemaDescription> {
        let value_path = child_path(path, "additionalProperties");
        match node.get("additionalProperties") {
            Some(Value::Bool(false)) => Err(OutlineError::unrecognized(
                path,
                "record with `additionalProperties: false` admits no values",
            )),
            other => self.walk_open_child(other, &value_path, depth),
        }
    }

    fn walk_tuple(
        &self,
        node: &Value,
        variadic: bool,
        path: &str,
        depth: usize,
    ) -> Result<DescriptionKind> {
        let items_path = child_path(path, "items");
        let items = node
            .get("items")
            .and_then(Value::as_array)
            .ok_or_else(|| OutlineError::unrecognized(path, "tuple `items` must be an array"))?
            .iter()
            .enumerate()
            .map(|(index, item)| {
                self.walk(item, false, &format!("{}/{}", items_path, index), depth + 1)
            })
            .collect::<Result<Vec<_>>>()?;

        let rest = if variadic {
            let tail_path = child_path(path, "additionalItems");
            let tail = self.walk_open_child(node.get("additionalItems"), &tail_path, depth)?;
            Some(Box::new(tail))
        } else {
            None
        };

        Ok(DescriptionKind::Tuple { items, rest })
    }

    /// Child positions where an absent schema or `true` means "anything"
    fn walk_open_child(
        &self,
        child: Option<&Value>,
        path: &str,
        depth: usize,
    ) -> Result<SchemaDescription> {
        match child {
            None | Some(Value::Bool(true)) => Ok(SchemaDescription::new(DescriptionKind::Unknown)),
            Some(child) => {
                tracing::trace!(path, "descending into child schema");
                self.walk(child, false, path, depth + 1)
            }
        }
    }
}

fn child_path(path: &str, keyword: &str) -> String {
    format!("{}/{}", path, keyword)
}

/// JSON Pointer escaping for property and collection names
pub(crate) fn escape_pointer(name: &str) -> String {
    name.replace('~', "~0").replace('/', "~1")
}

/// Annotation on the wrapper, falling back to the unwrapped node
fn annotation(schema: &Value, node: &Value, key: &str) -> Option<String> {
    schema
        .get(key)
        .or_else(|| node.get(key))
        .and_then(Value::as_str)
        .map(String::from)
}
