use jsonschema::validator_for;
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("input schema must be a JSON object")]
    NotAnObject,
    #[error("input schema must declare \"type\": \"object\"")]
    NotObjectTyped,
    #[error("schema compile error: {0}")]
    Compile(String),
}

/// Check that a tool input schema is an object schema that compiles (draft 2020-12).
pub fn check_input_schema(schema: &Value) -> Result<(), SchemaError> {
    let object = schema.as_object().ok_or(SchemaError::NotAnObject)?;
    if object.get("type").and_then(Value::as_str) != Some("object") {
        return Err(SchemaError::NotObjectTyped);
    }

    validator_for(schema).map_err(|e| SchemaError::Compile(e.to_string()))?;
    Ok(())
}

/// Validate a JSON instance against a JSON Schema.
/// Returns whether the instance conforms; Err only if the schema does not compile.
pub fn validate_instance(schema: &Value, instance: &Value) -> Result<bool, SchemaError> {
    let validator = validator_for(schema).map_err(|e| SchemaError::Compile(e.to_string()))?;
    Ok(validator.is_valid(instance))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn empty_object_schema_is_accepted() {
        let schema = json!({ "type": "object", "properties": {}, "required": [] });
        check_input_schema(&schema).expect("empty object schema compiles");
        assert!(validate_instance(&schema, &json!({})).unwrap());
    }

    #[test]
    fn non_object_schemas_are_rejected() {
        assert!(matches!(
            check_input_schema(&json!("object")),
            Err(SchemaError::NotAnObject)
        ));
        assert!(matches!(
            check_input_schema(&json!({ "type": "string" })),
            Err(SchemaError::NotObjectTyped)
        ));
    }

    #[test]
    fn uncompilable_schema_is_rejected() {
        let schema = json!({ "type": "object", "properties": { "a": { "type": 12 } } });
        assert!(matches!(
            check_input_schema(&schema),
            Err(SchemaError::Compile(_))
        ));
    }
}
