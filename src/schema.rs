//! In-memory JSON Schema (draft-07) shapes.
//!
//! `Schema` mirrors the handful of schema node shapes this back-end emits;
//! serialization is implemented by hand so the wire layout is fixed:
//! - entry order never depends on construction order (`type` first, then
//!   payload fields),
//! - `const` appears only when a shape carries a literal value,
//! - objects always carry `required`, even when it is empty.

use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Dialect tag emitted in every document.
pub const SCHEMA_URL: &str = "http://json-schema.org/draft-07/schema#";

/// One schema node, before text serialization. Scalar variants carry an
/// optional `const` value; `None` means the bare, unconstrained type.
#[derive(Debug, Clone, PartialEq)]
pub enum Schema {
    Object {
        properties: IndexMap<String, Schema>, // declaration order
        required: Vec<String>,                // non-optional names, declaration order
    },
    Array(Box<Schema>),
    OneOf(Vec<Schema>),
    Null,
    Boolean(Option<bool>),
    String(Option<String>),
    Number(Option<f64>),
    Integer(Option<i64>),
    Ref(String),             // full pointer, e.g. "#/definitions/Point"
}

/// The assembled output document: dialect tag plus one definition per
/// contract type. Built once per compilation, immutable afterwards.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Document {
    #[serde(rename = "$schema")]
    pub schema: &'static str,
    pub definitions: IndexMap<String, Schema>,
}

impl Document {
    pub fn new(definitions: IndexMap<String, Schema>) -> Self {
        Document { schema: SCHEMA_URL, definitions }
    }
}

// ————————————————————————————————————————————————————————————————————————————
// SERIALIZATION
// ————————————————————————————————————————————————————————————————————————————

impl Serialize for Schema {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Schema::Object { properties, required } => {
                let mut map = serializer.serialize_map(Some(3))?;
                map.serialize_entry("type", "object")?;
                map.serialize_entry("properties", properties)?;
                map.serialize_entry("required", required)?;
                map.end()
            }
            Schema::Array(items) => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("type", "array")?;
                map.serialize_entry("items", items)?;
                map.end()
            }
            Schema::OneOf(members) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("oneOf", members)?;
                map.end()
            }
            Schema::Null => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("type", "null")?;
                map.end()
            }
            Schema::Boolean(constant) => scalar(serializer, "boolean", constant),
            Schema::String(constant) => scalar(serializer, "string", constant),
            Schema::Number(constant) => scalar(serializer, "number", constant),
            Schema::Integer(constant) => scalar(serializer, "integer", constant),
            Schema::Ref(pointer) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("$ref", pointer)?;
                map.end()
            }
        }
    }
}

fn scalar<S, T>(serializer: S, name: &str, constant: &Option<T>) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    T: Serialize,
{
    let len = 1 + usize::from(constant.is_some());
    let mut map = serializer.serialize_map(Some(len))?;
    map.serialize_entry("type", name)?;
    if let Some(value) = constant {
        map.serialize_entry("const", value)?;
    }
    map.end()
}
