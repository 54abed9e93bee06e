//! Schema Node Classification
//!
//! Lowered schema documents carry no discriminant tag: a plain string node and a
//! string literal are both `{"type": "string", ...}`. This module recovers the
//! semantic kind of a node with a set of pure predicates, one per variant, and
//! `classify`, which evaluates them in a fixed precedence order and produces a
//! closed `SchemaVariant` tag.
//!
//! Nullability is a modifier, not a variant. It is detected first, the node is
//! unwrapped to its inner schema, and the inner schema is classified.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::error::{OutlineError, Result};

// =============================================================================
// Variants
// =============================================================================

/// Semantic kind of a schema node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemaVariant {
    /// `{"type": "object", "properties": {...}}`
    Object,
    /// `{"type": "object", "additionalProperties": {...}}`
    Record,
    String,
    Number,
    /// `{"type": "integer", "format": "int64"}`
    BigInt,
    Boolean,
    /// `{"type": "string", "format": "date-time"}`
    Date,
    /// `{"type": "string", "const": "st"}`
    Literal,
    /// Any node with an `enum` field
    EnumLike,
    /// `{"type": "array", "items": {...}}`
    Array,
    /// `{"type": "array", "items": [...]}`
    Tuple,
    /// Tuple with an open `additionalItems` tail and no `maxItems`
    VariadicTuple,
    /// `{"not": {}}`
    Undefined,
    /// `{}`
    Unknown,
    Null,
}

impl SchemaVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Object => "object",
            Self::Record => "record",
            Self::String => "string",
            Self::Number => "number",
            Self::BigInt => "bigint",
            Self::Boolean => "boolean",
            Self::Date => "date",
            Self::Literal => "literal",
            Self::EnumLike => "enum",
            Self::Array => "array",
            Self::Tuple => "tuple",
            Self::VariadicTuple => "variadic_tuple",
            Self::Undefined => "undefined",
            Self::Unknown => "unknown",
            Self::Null => "null",
        }
    }
}

impl fmt::Display for SchemaVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =============================================================================
// Schema Nodes
// =============================================================================

/// Borrowed view of a schema node, as the predicates see it.
///
/// Unwrapping `{"type": [T, "null"]}` never copies the node: the view keeps
/// pointing at the original object and reports `T` as its type name.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SchemaNode<'a> {
    value: &'a Value,
    type_override: Option<&'a str>,
}

impl<'a> SchemaNode<'a> {
    pub fn new(value: &'a Value) -> Self {
        Self {
            value,
            type_override: None,
        }
    }

    /// The underlying JSON, with `type` as written
    pub fn value(&self) -> &'a Value {
        self.value
    }

    /// The single type name of the node, after nullable unwrapping
    pub fn type_name(&self) -> Option<&'a str> {
        self.type_override
            .or_else(|| self.value.get("type").and_then(Value::as_str))
    }

    pub fn get(&self, field: &str) -> Option<&'a Value> {
        self.value.get(field)
    }

    fn has(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    /// Keys of the node that carry structure (annotations excluded)
    fn structural_keys(&self) -> Vec<&'a str> {
        self.value
            .as_object()
            .map(|fields| {
                fields
                    .keys()
                    .map(String::as_str)
                    .filter(|key| !is_annotation(key))
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl<'a> From<&'a Value> for SchemaNode<'a> {
    fn from(value: &'a Value) -> Self {
        Self::new(value)
    }
}

// =============================================================================
// Classification Result
// =============================================================================

/// A classified node: base variant, nullable modifier, and the node the
/// variant applies to (the inner schema when the input was a nullable wrapper)
#[derive(Debug, Clone, PartialEq)]
pub struct Classification<'a> {
    pub variant: SchemaVariant,
    pub nullable: bool,
    pub node: SchemaNode<'a>,
}

// =============================================================================
// Annotation Keys
// =============================================================================

/// Keys that never take part in classification
pub const ANNOTATION_KEYS: &[&str] = &[
    "$schema",
    "$id",
    "$comment",
    "title",
    "description",
    "default",
    "examples",
    "deprecated",
    "readOnly",
    "writeOnly",
    "markdownDescription",
];

fn is_annotation(key: &str) -> bool {
    ANNOTATION_KEYS.contains(&key)
}

// =============================================================================
// Helper Predicates
// =============================================================================

/// `type` is a single type name
pub fn is_typed<'a>(schema: impl Into<SchemaNode<'a>>) -> bool {
    schema.into().type_name().is_some()
}

/// `const` holds a string, number or boolean
pub fn is_const<'a>(schema: impl Into<SchemaNode<'a>>) -> bool {
    matches!(
        schema.into().get("const"),
        Some(Value::String(_)) | Some(Value::Number(_)) | Some(Value::Bool(_))
    )
}

/// `{"type": [T, "null"]}`
pub fn is_typed_nullable<'a>(schema: impl Into<SchemaNode<'a>>) -> bool {
    let node = schema.into();
    if node.type_override.is_some() {
        return false;
    }
    match node.get("type").and_then(Value::as_array) {
        Some(types) => {
            types.len() == 2 && types[0].is_string() && types[1].as_str() == Some("null")
        }
        None => false,
    }
}

/// `{"anyOf": [T, {"type": "null"}]}` on a node without a single `type`
pub fn is_any_of_nullable<'a>(schema: impl Into<SchemaNode<'a>>) -> bool {
    let node = schema.into();
    if is_typed(node) {
        return false;
    }
    match node.get("anyOf").and_then(Value::as_array) {
        Some(members) => {
            members.len() == 2 && SchemaNode::new(&members[1]).type_name() == Some("null")
        }
        None => false,
    }
}

// =============================================================================
// Variant Predicates
// =============================================================================

pub fn is_object<'a>(schema: impl Into<SchemaNode<'a>>) -> bool {
    let node = schema.into();
    !is_enum_like(node) && node.type_name() == Some("object") && node.has("properties")
}

pub fn is_record<'a>(schema: impl Into<SchemaNode<'a>>) -> bool {
    let node = schema.into();
    !is_enum_like(node) && node.type_name() == Some("object") && !node.has("properties")
}

pub fn is_string<'a>(schema: impl Into<SchemaNode<'a>>) -> bool {
    let node = schema.into();
    !is_const(node)
        && !is_enum_like(node)
        && node.type_name() == Some("string")
        && node.get("format").and_then(Value::as_str) != Some("date-time")
}

pub fn is_number<'a>(schema: impl Into<SchemaNode<'a>>) -> bool {
    let node = schema.into();
    !is_const(node)
        && !is_enum_like(node)
        && match node.type_name() {
            Some("number") => true,
            Some("integer") => !node.has("format"),
            _ => false,
        }
}

/// Integers too large for a native number are lowered with a `format`
pub fn is_bigint<'a>(schema: impl Into<SchemaNode<'a>>) -> bool {
    let node = schema.into();
    !is_const(node)
        && !is_enum_like(node)
        && node.type_name() == Some("integer")
        && node.has("format")
}

pub fn is_boolean<'a>(schema: impl Into<SchemaNode<'a>>) -> bool {
    let node = schema.into();
    !is_const(node) && !is_enum_like(node) && node.type_name() == Some("boolean")
}

pub fn is_date<'a>(schema: impl Into<SchemaNode<'a>>) -> bool {
    let node = schema.into();
    !is_const(node)
        && !is_enum_like(node)
        && node.type_name() == Some("string")
        && node.get("format").and_then(Value::as_str) == Some("date-time")
}

/// A `const` whose scalar kind matches the declared type
pub fn is_literal<'a>(schema: impl Into<SchemaNode<'a>>) -> bool {
    let node = schema.into();
    if is_enum_like(node) {
        return false;
    }
    match (node.type_name(), node.get("const")) {
        (Some("string"), Some(Value::String(_))) => true,
        (Some("number") | Some("integer"), Some(Value::Number(_))) => true,
        (Some("boolean"), Some(Value::Bool(_))) => true,
        _ => false,
    }
}

/// Value-set enumerations and named-constant groups lower identically and are
/// not told apart.
pub fn is_enum_like<'a>(schema: impl Into<SchemaNode<'a>>) -> bool {
    schema.into().has("enum")
}

pub fn is_array_or_tuple<'a>(schema: impl Into<SchemaNode<'a>>) -> bool {
    let node = schema.into();
    !is_enum_like(node) && node.type_name() == Some("array")
}

pub fn is_tuple<'a>(schema: impl Into<SchemaNode<'a>>) -> bool {
    let node = schema.into();
    is_array_or_tuple(node) && node.get("items").is_some_and(Value::is_array)
}

/// A tuple with an open tail. `additionalItems: false` closes the tail.
pub fn is_variadic_tuple<'a>(schema: impl Into<SchemaNode<'a>>) -> bool {
    let node = schema.into();
    is_tuple(node)
        && !node.has("maxItems")
        && node
            .get("additionalItems")
            .is_some_and(|tail| *tail != Value::Bool(false))
}

/// `{"not": {}}` and nothing else
pub fn is_undefined<'a>(schema: impl Into<SchemaNode<'a>>) -> bool {
    let node = schema.into();
    node.structural_keys() == ["not"]
        && node
            .get("not")
            .is_some_and(|inner| inner.is_object() && is_unknown(inner))
}

/// No structural fields at all
pub fn is_unknown<'a>(schema: impl Into<SchemaNode<'a>>) -> bool {
    let node = schema.into();
    node.value.is_object() && node.structural_keys().is_empty()
}

pub fn is_null<'a>(schema: impl Into<SchemaNode<'a>>) -> bool {
    let node = schema.into();
    !is_enum_like(node) && node.type_name() == Some("null")
}

pub fn is_nullable<'a>(schema: impl Into<SchemaNode<'a>>) -> bool {
    let node = schema.into();
    is_typed_nullable(node) || is_any_of_nullable(node)
}

// =============================================================================
// Classification
// =============================================================================

type Predicate = fn(SchemaNode<'_>) -> bool;

/// Evaluation order. Enum and const detection come before the base types
/// they share a `type` with.
const PRECEDENCE: &[(Predicate, SchemaVariant)] = &[
    (|node| is_enum_like(node), SchemaVariant::EnumLike),
    (|node| is_literal(node), SchemaVariant::Literal),
    (|node| is_object(node), SchemaVariant::Object),
    (|node| is_record(node), SchemaVariant::Record),
    (|node| is_date(node), SchemaVariant::Date),
    (|node| is_string(node), SchemaVariant::String),
    (|node| is_bigint(node), SchemaVariant::BigInt),
    (|node| is_number(node), SchemaVariant::Number),
    (|node| is_boolean(node), SchemaVariant::Boolean),
    (|node| is_null(node), SchemaVariant::Null),
    (|node| is_variadic_tuple(node), SchemaVariant::VariadicTuple),
    (|node| is_tuple(node), SchemaVariant::Tuple),
    (|node| is_array_or_tuple(node), SchemaVariant::Array),
    (|node| is_undefined(node), SchemaVariant::Undefined),
    (|node| is_unknown(node), SchemaVariant::Unknown),
];

/// Classify a root node
pub fn classify(schema: &Value) -> Result<Classification<'_>> {
    classify_at(schema, "#")
}

/// Classify a node located at `path` (used for error reporting)
pub fn classify_at<'a>(schema: &'a Value, path: &str) -> Result<Classification<'a>> {
    let mut node = SchemaNode::new(schema);
    let mut nullable = false;

    // Nullable of nullable is still just nullable
    while let Some(inner) = unwrap_nullable(node) {
        node = inner;
        nullable = true;
    }

    let variant = base_variant(node, path)?;
    tracing::debug!(path, %variant, nullable, "classified schema node");
    Ok(Classification {
        variant,
        nullable,
        node,
    })
}

/// The schema wrapped by a nullable encoding, or `None` if the node is not nullable.
///
/// `{"type": [T, "null"]}` becomes the same node typed as `T`;
/// `{"anyOf": [T, {"type": "null"}]}` becomes `T`.
pub fn unwrap_nullable<'a>(schema: impl Into<SchemaNode<'a>>) -> Option<SchemaNode<'a>> {
    let node = schema.into();

    if is_typed_nullable(node) {
        let base = node.get("type")?.get(0)?.as_str()?;
        return Some(SchemaNode {
            value: node.value,
            type_override: Some(base),
        });
    }

    if is_any_of_nullable(node) {
        return node.get("anyOf")?.get(0).map(SchemaNode::new);
    }

    None
}

fn base_variant(node: SchemaNode<'_>, path: &str) -> Result<SchemaVariant> {
    let Some(fields) = node.value.as_object() else {
        return Err(OutlineError::unrecognized(
            path,
            format!("expected a schema object, found {}", json_kind(node.value)),
        ));
    };

    for keyword in ["$ref", "allOf", "oneOf"] {
        if fields.contains_key(keyword) {
            return Err(OutlineError::unsupported(path, format!("`{}`", keyword)));
        }
    }

    if let Some(members) = fields.get("anyOf") {
        let count = members.as_array().map(Vec::len).unwrap_or_default();
        return Err(OutlineError::unsupported(
            path,
            format!("`anyOf` union with {} members", count),
        ));
    }

    if let Some((_, variant)) = PRECEDENCE.iter().find(|(predicate, _)| predicate(node)) {
        return Ok(*variant);
    }

    Err(diagnose(node, path))
}

/// Explain why a node matched no predicate
fn diagnose(node: SchemaNode<'_>, path: &str) -> OutlineError {
    if let Some(value) = node.get("const") {
        if !is_const(node) {
            return OutlineError::unrecognized(
                path,
                format!("`const` must be a string, number or boolean, found {}", json_kind(value)),
            );
        }
        let declared = match (node.type_name(), node.get("type")) {
            (Some(name), _) => format!("\"{}\"", name),
            (None, Some(other)) => other.to_string(),
            (None, None) => "(none)".to_string(),
        };
        return OutlineError::unrecognized(
            path,
            format!("`const` {} does not match declared type {}", value, declared),
        );
    }

    if let Some(name) = node.type_name() {
        return OutlineError::unrecognized(path, format!("unknown type name `{}`", name));
    }

    match node.get("type") {
        Some(Value::Array(types)) => OutlineError::unsupported(
            path,
            format!("multi-type `type` array with {} members", types.len()),
        ),
        Some(other) => OutlineError::unrecognized(
            path,
            format!("`type` must be a string or an array, found {}", json_kind(other)),
        ),
        None if node.has("not") => {
            OutlineError::unsupported(path, "`not` with a non-empty schema")
        }
        None => OutlineError::unrecognized(
            path,
            format!(
                "untyped schema with fields [{}]",
                node.structural_keys().join(", ")
            ),
        ),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn variant_of(schema: &Value) -> SchemaVariant {
        classify(schema).unwrap().variant
    }

    const BASE_PREDICATES: &[(Predicate, &str)] = &[
        (|node| is_object(node), "object"),
        (|node| is_record(node), "record"),
        (|node| is_string(node), "string"),
        (|node| is_number(node), "number"),
        (|node| is_bigint(node), "bigint"),
        (|node| is_boolean(node), "boolean"),
        (|node| is_date(node), "date"),
        (|node| is_literal(node), "literal"),
        (|node| is_enum_like(node), "enum"),
        (|node| is_array_or_tuple(node), "array"),
        (|node| is_undefined(node), "undefined"),
        (|node| is_unknown(node), "unknown"),
        (|node| is_null(node), "null"),
    ];

    #[test]
    fn test_exactly_one_base_predicate_holds() {
        let shapes = vec![
            json!({ "type": "object", "properties": { "a": { "type": "string" } } }),
            json!({ "type": "object", "properties": {} }),
            json!({ "type": "object", "additionalProperties": { "type": "number" } }),
            json!({ "type": "string" }),
            json!({ "type": "string", "minLength": 3, "format": "email" }),
            json!({ "type": "number" }),
            json!({ "type": "integer" }),
            json!({ "type": "integer", "format": "int64" }),
            json!({ "type": "boolean" }),
            json!({ "type": "string", "format": "date-time" }),
            json!({ "type": "string", "const": "st" }),
            json!({ "type": "number", "const": 42 }),
            json!({ "type": "integer", "const": 7 }),
            json!({ "type": "boolean", "const": true }),
            json!({ "type": "string", "enum": ["a", "b"] }),
            json!({ "type": "integer", "enum": [1, 2, 3] }),
            json!({ "type": ["string", "number"], "enum": ["a", 1] }),
            json!({ "type": "array", "items": { "type": "string" } }),
            json!({ "type": "array", "items": [{ "type": "string" }], "maxItems": 1 }),
            json!({ "type": "array", "items": [{ "type": "string" }], "additionalItems": {} }),
            json!({ "not": {} }),
            json!({}),
            json!({ "description": "anything at all" }),
            json!({ "type": "null" }),
        ];

        for shape in &shapes {
            let matching: Vec<&str> = BASE_PREDICATES
                .iter()
                .filter(|(predicate, _)| predicate(SchemaNode::new(shape)))
                .map(|(_, name)| *name)
                .collect();
            assert_eq!(matching.len(), 1, "{} matched {:?}", shape, matching);
            assert!(!is_nullable(shape), "{} should not be nullable", shape);
        }
    }

    #[test]
    fn test_string_literal_is_not_a_string() {
        let schema = json!({ "type": "string", "const": "ab" });
        assert!(is_literal(&schema));
        assert!(!is_string(&schema));
        assert_eq!(variant_of(&schema), SchemaVariant::Literal);
    }

    #[test]
    fn test_integer_enum_is_not_a_number() {
        let schema = json!({ "type": "integer", "enum": [1, 2, 3] });
        assert!(is_enum_like(&schema));
        assert!(!is_number(&schema));
        assert_eq!(variant_of(&schema), SchemaVariant::EnumLike);
    }

    #[test]
    fn test_object_versus_record() {
        let object = json!({ "type": "object", "properties": {} });
        let record = json!({ "type": "object", "additionalProperties": { "type": "number" } });
        assert_eq!(variant_of(&object), SchemaVariant::Object);
        assert_eq!(variant_of(&record), SchemaVariant::Record);
    }

    #[test]
    fn test_integer_format_selects_bigint() {
        assert_eq!(variant_of(&json!({ "type": "integer" })), SchemaVariant::Number);
        assert_eq!(
            variant_of(&json!({ "type": "integer", "format": "int64" })),
            SchemaVariant::BigInt
        );
    }

    #[test]
    fn test_date_time_format_selects_date() {
        assert_eq!(
            variant_of(&json!({ "type": "string", "format": "date-time" })),
            SchemaVariant::Date
        );
        assert_eq!(
            variant_of(&json!({ "type": "string", "format": "uuid" })),
            SchemaVariant::String
        );
    }

    #[test]
    fn test_array_family() {
        let array = json!({ "type": "array", "items": { "type": "string" } });
        let tuple = json!({
            "type": "array",
            "items": [{ "type": "string" }, { "type": "number" }],
            "minItems": 2,
            "maxItems": 2
        });
        let variadic = json!({
            "type": "array",
            "items": [{ "type": "string" }],
            "minItems": 1,
            "additionalItems": { "type": "number" }
        });

        assert_eq!(variant_of(&array), SchemaVariant::Array);
        assert_eq!(variant_of(&tuple), SchemaVariant::Tuple);
        assert_eq!(variant_of(&variadic), SchemaVariant::VariadicTuple);
        assert!(is_tuple(&variadic));
        assert!(!is_variadic_tuple(&tuple));
    }

    #[test]
    fn test_max_items_disables_variadic_tail() {
        let schema = json!({
            "type": "array",
            "items": [{ "type": "string" }],
            "maxItems": 1,
            "additionalItems": { "type": "number" }
        });
        assert_eq!(variant_of(&schema), SchemaVariant::Tuple);
    }

    #[test]
    fn test_closed_tail_is_a_plain_tuple() {
        let schema = json!({
            "type": "array",
            "items": [{ "type": "string" }, { "type": "number" }],
            "additionalItems": false
        });
        assert!(is_tuple(&schema));
        assert!(!is_variadic_tuple(&schema));
        assert_eq!(variant_of(&schema), SchemaVariant::Tuple);

        let open = json!({ "type": "array", "items": [{ "type": "string" }], "additionalItems": true });
        assert_eq!(variant_of(&open), SchemaVariant::VariadicTuple);
    }

    #[test]
    fn test_undefined_and_unknown() {
        assert_eq!(variant_of(&json!({ "not": {} })), SchemaVariant::Undefined);
        assert_eq!(variant_of(&json!({})), SchemaVariant::Unknown);
        assert_eq!(
            variant_of(&json!({ "$schema": "http://json-schema.org/draft-07/schema#" })),
            SchemaVariant::Unknown
        );
    }

    #[test]
    fn test_typed_nullable() {
        let schema = json!({ "type": ["string", "null"] });
        assert!(is_typed_nullable(&schema));
        assert!(is_nullable(&schema));

        let classification = classify(&schema).unwrap();
        assert_eq!(classification.variant, SchemaVariant::String);
        assert!(classification.nullable);
        assert_eq!(classification.node.type_name(), Some("string"));
        assert!(std::ptr::eq(classification.node.value(), &schema));
    }

    #[test]
    fn test_any_of_nullable() {
        let schema = json!({ "anyOf": [{ "type": "object", "properties": {} }, { "type": "null" }] });
        assert!(is_any_of_nullable(&schema));

        let classification = classify(&schema).unwrap();
        assert_eq!(classification.variant, SchemaVariant::Object);
        assert!(classification.nullable);
        assert!(std::ptr::eq(classification.node.value(), &schema["anyOf"][0]));
    }

    #[test]
    fn test_only_two_nullable_encodings() {
        assert!(!is_nullable(&json!({ "type": ["null", "string"] })));
        assert!(!is_nullable(&json!({ "type": ["string", "number", "null"] })));
        assert!(!is_nullable(&json!({ "anyOf": [{ "type": "null" }, { "type": "string" }] })));
        assert!(!is_nullable(&json!({ "type": "string", "anyOf": [{}, { "type": "null" }] })));
    }

    #[test]
    fn test_nested_nullable_unwraps_fully() {
        let schema = json!({ "anyOf": [{ "type": ["number", "null"] }, { "type": "null" }] });
        let classification = classify(&schema).unwrap();
        assert_eq!(classification.variant, SchemaVariant::Number);
        assert!(classification.nullable);
    }

    #[test]
    fn test_typed_nullable_keeps_the_original_node() {
        let schema = json!({
            "type": ["object", "null"],
            "properties": {
                "inner": {
                    "type": ["object", "null"],
                    "properties": { "leaf": { "type": ["string", "null"] } }
                }
            }
        });

        let outer = classify(&schema).unwrap();
        assert_eq!(outer.variant, SchemaVariant::Object);
        assert!(outer.nullable);
        assert!(std::ptr::eq(outer.node.value(), &schema));
        assert_eq!(outer.node.value()["type"], json!(["object", "null"]));

        let inner_schema = &schema["properties"]["inner"];
        let inner = classify(inner_schema).unwrap();
        assert_eq!(inner.variant, SchemaVariant::Object);
        assert!(std::ptr::eq(inner.node.value(), inner_schema));

        let leaf = classify(&inner_schema["properties"]["leaf"]).unwrap();
        assert_eq!(leaf.variant, SchemaVariant::String);
        assert!(leaf.nullable);
    }

    #[test]
    fn test_unwrapped_node_is_not_nullable_again() {
        let schema = json!({ "type": ["string", "null"] });
        let inner = unwrap_nullable(&schema).unwrap();
        assert_eq!(inner.type_name(), Some("string"));
        assert!(!is_typed_nullable(inner));
        assert!(!is_nullable(inner));
        assert!(unwrap_nullable(inner).is_none());
    }

    #[test]
    fn test_nullable_enum() {
        let schema = json!({ "type": ["string", "null"], "enum": ["a", "b", null] });
        let classification = classify(&schema).unwrap();
        assert_eq!(classification.variant, SchemaVariant::EnumLike);
        assert!(classification.nullable);
    }

    #[test]
    fn test_ref_is_unsupported() {
        let err = classify(&json!({ "$ref": "#/definitions/Post" })).unwrap_err();
        assert!(matches!(err, OutlineError::UnsupportedConstruct { .. }));
    }

    #[test]
    fn test_general_union_is_unsupported_not_unknown() {
        let schema = json!({ "anyOf": [{ "type": "string" }, { "type": "number" }] });
        match classify(&schema) {
            Err(OutlineError::UnsupportedConstruct { construct, .. }) => {
                assert!(construct.contains("anyOf"));
            }
            other => panic!("Expected UnsupportedConstruct, got {:?}", other),
        }
    }

    #[test]
    fn test_unrecognized_shapes() {
        let cases = vec![
            json!({ "type": "color" }),
            json!({ "type": ["color", "null"] }),
            json!({ "type": "string", "const": 3 }),
            json!({ "const": { "a": 1 } }),
            json!({ "minLength": 3 }),
            json!("string"),
        ];
        for schema in &cases {
            match classify(schema) {
                Err(OutlineError::UnrecognizedShape { path, .. }) => assert_eq!(path, "#"),
                other => panic!("Expected UnrecognizedShape for {}, got {:?}", schema, other),
            }
        }
    }

    #[test]
    fn test_multi_type_without_enum_is_unsupported() {
        let err = classify(&json!({ "type": ["string", "number"] })).unwrap_err();
        assert!(matches!(err, OutlineError::UnsupportedConstruct { .. }));
        assert!(err.is_classification_error());
    }

    #[test]
    fn test_classification_is_repeatable() {
        let schema = json!({ "anyOf": [{ "type": "boolean" }, { "type": "null" }] });
        assert_eq!(classify(&schema).unwrap(), classify(&schema).unwrap());
    }
}
