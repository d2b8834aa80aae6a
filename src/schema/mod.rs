//! Declarative request-body validation.
//!
//! Each resource declares its accepted fields as a static [`Schema`]. A body
//! is first checked for the presence of all required fields, then filtered
//! down to the declared fields before it is deserialized into a typed record.

use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub required: bool,
}

impl FieldSpec {
    pub const REQUIRED: FieldSpec = FieldSpec { required: true };
    pub const OPTIONAL: FieldSpec = FieldSpec { required: false };
}

pub type Schema = &'static [(&'static str, FieldSpec)];

/// Returns false if `body` is not a JSON object or any required field of the
/// schema is missing. Fields not declared in the schema are ignored; a `null`
/// value counts as missing.
pub fn validate(body: &Value, schema: Schema) -> bool {
    let Some(obj) = body.as_object() else {
        return false;
    };

    schema
        .iter()
        .filter(|(_, spec)| spec.required)
        .all(|(name, _)| matches!(obj.get(*name), Some(value) if !value.is_null()))
}

/// Filters `body` down to the fields declared in the schema, required and
/// optional alike. `null`-valued fields are dropped along with undeclared
/// ones.
pub fn extract(body: &Value, schema: Schema) -> Map<String, Value> {
    let mut fields = Map::new();

    if let Some(obj) = body.as_object() {
        for (name, _) in schema {
            if let Some(value) = obj.get(*name) {
                if !value.is_null() {
                    fields.insert((*name).to_string(), value.clone());
                }
            }
        }
    }

    fields
}
