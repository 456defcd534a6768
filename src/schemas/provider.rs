//! Conversions from the cached JSON schema into provider-specific dialects.

use serde_json::{json, Map, Value};

/// Keywords the Gemini `responseSchema` field accepts besides `type`,
/// `properties` and `items`, which are rewritten separately.
const GEMINI_PASSTHROUGH_KEYS: &[&str] = &["description", "enum", "required", "minItems", "maxItems"];

/// Rewrite the schema into the OpenAPI subset Gemini understands.
///
/// Type names are upper-cased, `["T", "null"]` unions become `nullable`, and
/// `propertyOrdering` pins fields to declaration order. Everything else
/// (`$schema`, `title`, `format`, numeric bounds, `additionalProperties`) is
/// dropped.
pub fn to_gemini_schema(schema: &Value) -> Value {
    convert_gemini_node(schema)
}

fn convert_gemini_node(node: &Value) -> Value {
    let Some(object) = node.as_object() else {
        return node.clone();
    };

    let mut out = Map::new();

    match object.get("type") {
        Some(Value::String(kind)) => {
            out.insert("type".to_string(), json!(kind.to_uppercase()));
        }
        Some(Value::Array(kinds)) => {
            let mut nullable = false;
            for kind in kinds.iter().filter_map(Value::as_str) {
                if kind == "null" {
                    nullable = true;
                } else if !out.contains_key("type") {
                    out.insert("type".to_string(), json!(kind.to_uppercase()));
                }
            }
            if nullable {
                out.insert("nullable".to_string(), Value::Bool(true));
            }
        }
        _ => {}
    }

    for key in GEMINI_PASSTHROUGH_KEYS {
        if let Some(value) = object.get(*key) {
            out.insert((*key).to_string(), value.clone());
        }
    }

    if let Some(Value::Object(properties)) = object.get("properties") {
        let converted: Map<String, Value> = properties
            .iter()
            .map(|(name, child)| (name.clone(), convert_gemini_node(child)))
            .collect();
        let ordering: Vec<&String> = properties.keys().collect();
        out.insert("propertyOrdering".to_string(), json!(ordering));
        out.insert("properties".to_string(), Value::Object(converted));
    }

    if let Some(items) = object.get("items") {
        out.insert("items".to_string(), convert_gemini_node(items));
    }

    Value::Object(out)
}

/// Wrap the schema in the OpenAI-compatible `response_format` envelope.
pub fn to_json_schema_response_format(name: &str, schema: &Value) -> Value {
    let mut body = schema.clone();
    if let Some(object) = body.as_object_mut() {
        object.remove("$schema");
        object.remove("definitions");
    }

    json!({
        "type": "json_schema",
        "json_schema": {
            "name": name,
            "schema": body,
        }
    })
}
