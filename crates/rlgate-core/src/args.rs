//! Canonical token form of a parameter map
//!
//! Every algorithm family consumes the same flat `--key value` token
//! sequence, mirroring the command-line convention of the training
//! runners. This translation is the single step feeding schema validation,
//! so its rules must agree with the schemas exactly: booleans are presence
//! flags, list elements are separate tokens, and null or empty-string
//! values are omitted entirely.

use serde_json::{Map, Value};

/// Convert a parameter map into the token sequence consumed by schema
/// validation.
pub fn config_to_arg_tokens(config: &Map<String, Value>) -> Vec<String> {
    let mut tokens = Vec::new();

    for (key, value) in config {
        match value {
            Value::Null => {}
            Value::String(s) if s.is_empty() => {}
            Value::Bool(flag) => {
                if *flag {
                    tokens.push(format!("--{}", key));
                }
            }
            Value::Array(items) => {
                tokens.push(format!("--{}", key));
                // elements of the list must be separate tokens
                for item in items {
                    tokens.push(scalar_token(item));
                }
            }
            other => {
                tokens.push(format!("--{}", key));
                tokens.push(scalar_token(other));
            }
        }
    }

    tokens
}

fn scalar_token(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
