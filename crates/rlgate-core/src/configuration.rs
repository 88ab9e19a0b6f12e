//! The validated configuration entity
//!
//! A `Configuration` is only ever constructed through validating
//! constructors and is immutable afterwards; "updating" one means
//! constructing a new value. This removes the order-of-assignment hazards
//! of re-validating on every field write: the algorithm is always fixed
//! before its configuration is checked.

use crate::algorithm::{Algorithm, AlgorithmFamily};
use crate::errors::GatewayError;
use crate::utils::random_id;
use crate::validation::validate_algorithm_config;
use serde::Serialize;
use serde_json::{json, Map, Value};

/// Top-level keys a submission must carry, exactly.
const REQUIRED_CONFIG_FIELDS: [&str; 2] = ["algorithm", "algorithm_config"];

/// A validated, immutable training configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Configuration {
    algorithm: Algorithm,
    algorithm_config: Map<String, Value>,
}

impl Configuration {
    /// Validate and construct a configuration.
    ///
    /// For the acer/acerac family a missing `experiment_name` is filled in
    /// with a random identifier before validation runs, so every persisted
    /// configuration of that family carries one.
    pub fn new(
        algorithm: Algorithm,
        mut algorithm_config: Map<String, Value>,
    ) -> Result<Self, GatewayError> {
        if algorithm.family() == AlgorithmFamily::AcerAcerac {
            add_random_experiment_name(&mut algorithm_config);
        }

        validate_algorithm_config(algorithm, &algorithm_config).map_err(|violation| {
            GatewayError::InvalidConfiguration {
                algorithm: algorithm.to_string(),
                message: violation.to_string(),
            }
        })?;

        Ok(Self {
            algorithm,
            algorithm_config,
        })
    }

    /// Parse and validate a raw submission document.
    ///
    /// The submission must be a JSON object with exactly the keys
    /// `algorithm` and `algorithm_config`; anything else is rejected
    /// before schema validation runs.
    pub fn from_submission(submission: &Value) -> Result<Self, GatewayError> {
        let fields = submission
            .as_object()
            .ok_or(GatewayError::MissingRequiredFields)?;

        if fields.len() != REQUIRED_CONFIG_FIELDS.len()
            || !REQUIRED_CONFIG_FIELDS
                .iter()
                .all(|key| fields.contains_key(*key))
        {
            return Err(GatewayError::MissingRequiredFields);
        }

        let algorithm = fields["algorithm"]
            .as_str()
            .ok_or_else(|| GatewayError::UnknownAlgorithm(fields["algorithm"].to_string()))?;
        let algorithm: Algorithm = algorithm.parse()?;

        let algorithm_config = match fields["algorithm_config"].as_object() {
            Some(config) => config.clone(),
            None => {
                return Err(GatewayError::InvalidConfiguration {
                    algorithm: algorithm.to_string(),
                    message: "algorithm_config must be a JSON object".to_string(),
                })
            }
        };

        Self::new(algorithm, algorithm_config)
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn algorithm_config(&self) -> &Map<String, Value> {
        &self.algorithm_config
    }

    /// The Gym environment name, resolved through the family's key
    /// convention (`env_name` for acer/acerac, `env` for PPO/SAC).
    ///
    /// Falls back to the schema's declared default when the submission
    /// omitted the key; both family schemas declare one.
    pub fn environment_name(&self) -> &str {
        let family = self.algorithm.family();
        let key = family.environment_name_key();
        self.algorithm_config
            .get(key)
            .and_then(Value::as_str)
            .or_else(|| family.schema().default_for(key).and_then(Value::as_str))
            .unwrap_or_default()
    }

    /// The canonical `{algorithm, algorithm_config}` document persisted to
    /// disk and returned to callers.
    pub fn to_json(&self) -> Value {
        json!({
            "algorithm": self.algorithm,
            "algorithm_config": self.algorithm_config,
        })
    }
}

fn add_random_experiment_name(config: &mut Map<String, Value>) {
    if !config.contains_key("experiment_name") {
        config.insert("experiment_name".to_string(), Value::String(random_id()));
    }
}
