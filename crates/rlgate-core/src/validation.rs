//! Schema-directed validation of algorithm configurations
//!
//! Validation emulates a command-line parser over the materialized token
//! sequence: tokens are consumed left to right, the first violation wins,
//! and required parameters are swept at the end. The parse is a pure
//! function reporting errors to its caller; it never exits the process and
//! never panics on submitted data.

use crate::algorithm::Algorithm;
use crate::args::config_to_arg_tokens;
use crate::errors::GatewayError;
use crate::schema::{ParameterKind, ParameterSchema, ParameterSpec};
use serde_json::{Map, Value};
use std::collections::HashSet;
use thiserror::Error;

/// A single schema violation; its `Display` form is the message returned
/// verbatim to the submitter.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaViolation {
    #[error("unrecognized arguments: {0}")]
    UnrecognizedArgument(String),
    #[error("argument --{parameter}: invalid {expected} value: '{value}'")]
    TypeMismatch {
        parameter: String,
        expected: &'static str,
        value: String,
    },
    #[error("argument --{parameter}: invalid choice: '{value}' (choose from {allowed})")]
    InvalidChoice {
        parameter: String,
        value: String,
        allowed: String,
    },
    #[error("argument --{parameter}: expected at least one argument")]
    MissingValue { parameter: String },
    #[error("argument --{parameter}: does not take a value (got '{value}')")]
    UnexpectedValue { parameter: String, value: String },
    #[error("the following argument is required: --{0}")]
    MissingRequired(String),
}

/// Validate an identifier/parameter-map pair.
///
/// Fails fast with `UnknownAlgorithm` before any schema lookup when the
/// identifier is outside the known set; otherwise the schema verdict is
/// folded into `InvalidConfiguration` carrying the violation message.
pub fn validate_config(algorithm: &str, config: &Map<String, Value>) -> Result<(), GatewayError> {
    let algorithm: Algorithm = algorithm.parse()?;
    validate_algorithm_config(algorithm, config).map_err(|violation| {
        GatewayError::InvalidConfiguration {
            algorithm: algorithm.to_string(),
            message: violation.to_string(),
        }
    })
}

/// Validate a parameter map against the schema for `algorithm`.
pub fn validate_algorithm_config(
    algorithm: Algorithm,
    config: &Map<String, Value>,
) -> Result<(), SchemaViolation> {
    let schema = algorithm.family().schema();
    let tokens = config_to_arg_tokens(config);
    parse_tokens(schema, &tokens)
}

fn parse_tokens(schema: &ParameterSchema, tokens: &[String]) -> Result<(), SchemaViolation> {
    let mut seen: HashSet<&str> = HashSet::new();
    // Name of a flag that consumed no value, for attributing stray tokens.
    let mut pending_flag: Option<&str> = None;
    let mut i = 0;

    while i < tokens.len() {
        let token = &tokens[i];
        let name = match option_name(token) {
            Some(name) => name,
            None => {
                return Err(match pending_flag {
                    Some(parameter) => SchemaViolation::UnexpectedValue {
                        parameter: parameter.to_string(),
                        value: token.clone(),
                    },
                    None => SchemaViolation::UnrecognizedArgument(token.clone()),
                });
            }
        };

        let spec = schema
            .get(name)
            .ok_or_else(|| SchemaViolation::UnrecognizedArgument(token.clone()))?;
        seen.insert(spec.name());
        pending_flag = None;
        i += 1;

        match spec.kind() {
            ParameterKind::Flag => {
                pending_flag = Some(spec.name());
            }
            ParameterKind::Str | ParameterKind::Float | ParameterKind::Int => {
                let value = next_value(tokens, i).ok_or_else(|| SchemaViolation::MissingValue {
                    parameter: spec.name().to_string(),
                })?;
                coerce_scalar(spec, value)?;
                check_choice(spec, value)?;
                i += 1;
            }
            ParameterKind::IntList { min_values } => {
                let mut count = 0;
                while let Some(value) = next_value(tokens, i) {
                    if value.parse::<i64>().is_err() {
                        return Err(SchemaViolation::TypeMismatch {
                            parameter: spec.name().to_string(),
                            expected: "int",
                            value: value.to_string(),
                        });
                    }
                    count += 1;
                    i += 1;
                }
                if count < min_values {
                    return Err(SchemaViolation::MissingValue {
                        parameter: spec.name().to_string(),
                    });
                }
            }
        }
    }

    // Required sweep, in schema order so the reported parameter is stable.
    for spec in schema.params() {
        if spec.is_required() && !seen.contains(spec.name()) {
            return Err(SchemaViolation::MissingRequired(spec.name().to_string()));
        }
    }

    Ok(())
}

/// The parameter name of an option token, `None` for value tokens.
/// Negative numbers ("-1") are value tokens, not options.
fn option_name(token: &str) -> Option<&str> {
    token.strip_prefix("--")
}

fn next_value(tokens: &[String], i: usize) -> Option<&str> {
    tokens
        .get(i)
        .map(String::as_str)
        .filter(|token| option_name(token).is_none())
}

fn coerce_scalar(spec: &ParameterSpec, value: &str) -> Result<(), SchemaViolation> {
    let ok = match spec.kind() {
        ParameterKind::Float => value.parse::<f64>().is_ok(),
        ParameterKind::Int => value.parse::<i64>().is_ok(),
        _ => true,
    };
    if ok {
        Ok(())
    } else {
        Err(SchemaViolation::TypeMismatch {
            parameter: spec.name().to_string(),
            expected: spec.kind().expected_name(),
            value: value.to_string(),
        })
    }
}

fn check_choice(spec: &ParameterSpec, value: &str) -> Result<(), SchemaViolation> {
    if let Some(choices) = spec.choice_set() {
        if !choices.contains(&value) {
            return Err(SchemaViolation::InvalidChoice {
                parameter: spec.name().to_string(),
                value: value.to_string(),
                allowed: choices.join(", "),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn as_map(value: Value) -> Map<String, Value> {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn accepts_a_minimal_ppo_config() {
        let config = as_map(json!({"algo": "PPO", "env": "Humanoid-v2", "gamma": 1.5}));
        assert!(validate_config("PPO", &config).is_ok());
    }

    #[test]
    fn accepts_a_full_acer_config() {
        let config = as_map(json!({
            "algo": "acer",
            "env_name": "CartPole-v0",
            "gamma": 0.95,
            "actor_layers": [64, 64],
            "critic_layers": [64, 64],
            "standardize_obs": true,
            "use_cpu": true,
            "max_time_steps": -1,
            "rescale_rewards": -1
        }));
        assert!(validate_config("acer", &config).is_ok());
    }

    #[test]
    fn rejects_unknown_algorithms_before_schema_lookup() {
        let config = as_map(json!({}));
        let err = validate_config("unknown_algo", &config).unwrap_err();
        assert!(matches!(err, GatewayError::UnknownAlgorithm(_)));
    }

    #[test]
    fn rejects_an_algo_value_outside_the_family() {
        let config = as_map(json!({"algo": "bogus"}));
        let err = validate_algorithm_config(Algorithm::Acer, &config).unwrap_err();
        assert_eq!(
            err,
            SchemaViolation::InvalidChoice {
                parameter: "algo".to_string(),
                value: "bogus".to_string(),
                allowed: "acer, acerac".to_string(),
            }
        );
        assert!(err.to_string().contains("choose from acer, acerac"));
    }

    #[test]
    fn rejects_unknown_parameters_strictly() {
        let config = as_map(json!({"algo": "acer", "warp_factor": 9}));
        let err = validate_algorithm_config(Algorithm::Acer, &config).unwrap_err();
        assert_eq!(
            err,
            SchemaViolation::UnrecognizedArgument("--warp_factor".to_string())
        );
    }

    #[test]
    fn rejects_a_non_numeric_float() {
        let config = as_map(json!({"gamma": "fast"}));
        let err = validate_algorithm_config(Algorithm::Acerac, &config).unwrap_err();
        assert_eq!(
            err,
            SchemaViolation::TypeMismatch {
                parameter: "gamma".to_string(),
                expected: "float",
                value: "fast".to_string(),
            }
        );
    }

    #[test]
    fn rejects_a_fractional_int() {
        let config = as_map(json!({"algo": "PPO", "buffer_size": 1.5}));
        let err = validate_algorithm_config(Algorithm::Ppo, &config).unwrap_err();
        assert!(matches!(err, SchemaViolation::TypeMismatch { .. }));
    }

    #[test]
    fn integer_valued_floats_pass_float_parameters() {
        let config = as_map(json!({"gamma": 1}));
        assert!(validate_algorithm_config(Algorithm::Acer, &config).is_ok());
    }

    #[test]
    fn requires_algo_for_the_ppo_sac_family() {
        let config = as_map(json!({"env": "Humanoid-v2"}));
        let err = validate_algorithm_config(Algorithm::Sac, &config).unwrap_err();
        assert_eq!(err, SchemaViolation::MissingRequired("algo".to_string()));
        assert_eq!(
            err.to_string(),
            "the following argument is required: --algo"
        );
    }

    #[test]
    fn an_empty_acer_config_is_valid() {
        // Every acer/acerac parameter has a default.
        let config = as_map(json!({}));
        assert!(validate_algorithm_config(Algorithm::Acer, &config).is_ok());
    }

    #[test]
    fn flags_reject_explicit_values() {
        let config = as_map(json!({"standardize_obs": "yes"}));
        let err = validate_algorithm_config(Algorithm::Acer, &config).unwrap_err();
        assert_eq!(
            err,
            SchemaViolation::UnexpectedValue {
                parameter: "standardize_obs".to_string(),
                value: "yes".to_string(),
            }
        );
    }

    #[test]
    fn int_lists_reject_non_integer_elements() {
        let config = as_map(json!({"actor_layers": [100, "wide"]}));
        let err = validate_algorithm_config(Algorithm::Acer, &config).unwrap_err();
        assert_eq!(
            err,
            SchemaViolation::TypeMismatch {
                parameter: "actor_layers".to_string(),
                expected: "int",
                value: "wide".to_string(),
            }
        );
    }

    #[test]
    fn int_lists_require_at_least_one_element() {
        let config = as_map(json!({"actor_layers": []}));
        let err = validate_algorithm_config(Algorithm::Acer, &config).unwrap_err();
        assert_eq!(
            err,
            SchemaViolation::MissingValue {
                parameter: "actor_layers".to_string(),
            }
        );
    }

    #[test]
    fn dump_accepts_an_empty_list() {
        let config = as_map(json!({"dump": []}));
        assert!(validate_algorithm_config(Algorithm::Acer, &config).is_ok());
    }

    #[test]
    fn extra_scalars_after_a_consumed_value_are_unrecognized() {
        // A list handed to a scalar parameter leaves stray value tokens.
        let config = as_map(json!({"gamma": [0.9, 0.8]}));
        let err = validate_algorithm_config(Algorithm::Acer, &config).unwrap_err();
        assert_eq!(
            err,
            SchemaViolation::UnrecognizedArgument("0.8".to_string())
        );
    }

    #[test]
    fn negative_numbers_are_values_not_options() {
        let config = as_map(json!({"rescale_rewards": -1, "max_time_steps": -1}));
        assert!(validate_algorithm_config(Algorithm::Acer, &config).is_ok());
    }

    #[test]
    fn validation_never_panics_on_arbitrary_maps() {
        let configs = vec![
            json!({"algo": {"nested": true}}),
            json!({"gamma": {"a": 1}}),
            json!({"dump": [[1, 2]]}),
            json!({"noise_type": 42}),
        ];
        for config in configs {
            let config = as_map(config);
            for algorithm in Algorithm::ALL {
                let _ = validate_algorithm_config(algorithm, &config);
            }
        }
    }
}
