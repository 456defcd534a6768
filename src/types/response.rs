use std::any::{type_name, TypeId};

use serde_json::Value;

use crate::{
    error::{PlannerError, Result},
    schemas::{validation::validate_structured_payload, CompletionSchema, SchemaHandle},
};

/// How much checking a parsed response gets before it becomes a typed value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResponseValidation {
    /// Typed deserialization only; missing or mistyped fields still fail.
    SerdeOnly,
    /// JSON Schema check of the untyped document, then typed deserialization.
    #[default]
    Strict,
}

/// Turn raw model text into a typed response.
///
/// The text is trimmed and parsed as untyped JSON first so that malformed
/// output, schema mismatches and deserialization failures all surface as
/// [`PlannerError::Parse`].
pub fn parse_structured_response<T>(raw: &str, validation: ResponseValidation) -> Result<T>
where
    T: CompletionSchema,
{
    let schema = T::schema();
    let payload: Value = serde_json::from_str(raw.trim()).map_err(|err| {
        PlannerError::Parse(format!("response is not valid JSON: {}", err))
    })?;

    if validation == ResponseValidation::Strict {
        validate_structured_payload(schema, &payload)?;
    }

    deserialize_structured_response(&payload, schema)
}

pub fn deserialize_structured_response<T>(payload: &Value, schema: &SchemaHandle) -> Result<T>
where
    T: CompletionSchema,
{
    ensure_schema_matches::<T>(schema)?;

    let raw = payload.to_string();
    let mut deserializer = serde_json::Deserializer::from_str(&raw);
    let value = serde_path_to_error::deserialize(&mut deserializer).map_err(|err| {
        let path = err.path().to_string();
        let location = if path.is_empty() || path == "." {
            "<root>".to_string()
        } else {
            path
        };
        PlannerError::Parse(format!(
            "failed to deserialize `{}` at {}: {}",
            schema.schema_name(),
            location,
            err.inner()
        ))
    })?;

    Ok(value)
}

fn ensure_schema_matches<T: 'static>(schema: &SchemaHandle) -> Result<()> {
    let expected = TypeId::of::<T>();
    if schema.type_id() != expected {
        return Err(PlannerError::Unknown(format!(
            "schema `{}` does not match target type `{}`",
            schema.schema_name(),
            type_name::<T>(),
        )));
    }
    Ok(())
}
