//! Algorithm identifiers and their schema families
//!
//! Every known algorithm belongs to exactly one family, and every
//! per-family behavior (parameter schema, environment-name key) dispatches
//! on the family enum. Unknown identifiers are rejected at parse time,
//! before any schema lookup happens.

use crate::errors::GatewayError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed set of algorithm identifiers accepted by the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    #[serde(rename = "acer")]
    Acer,
    #[serde(rename = "acerac")]
    Acerac,
    #[serde(rename = "PPO")]
    Ppo,
    #[serde(rename = "SAC")]
    Sac,
}

/// Schema groups partitioning the known algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgorithmFamily {
    /// `acer` and `acerac`.
    AcerAcerac,
    /// `PPO` and `SAC`.
    PpoSac,
}

impl Algorithm {
    /// All known algorithms, in their canonical order.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Acer,
        Algorithm::Acerac,
        Algorithm::Ppo,
        Algorithm::Sac,
    ];

    /// The schema family this algorithm validates against.
    pub fn family(self) -> AlgorithmFamily {
        match self {
            Algorithm::Acer | Algorithm::Acerac => AlgorithmFamily::AcerAcerac,
            Algorithm::Ppo | Algorithm::Sac => AlgorithmFamily::PpoSac,
        }
    }

    /// Canonical spelling, as used in submissions and filenames.
    pub fn as_str(self) -> &'static str {
        match self {
            Algorithm::Acer => "acer",
            Algorithm::Acerac => "acerac",
            Algorithm::Ppo => "PPO",
            Algorithm::Sac => "SAC",
        }
    }
}

impl AlgorithmFamily {
    /// Key under which this family's configurations store the Gym
    /// environment name.
    pub fn environment_name_key(self) -> &'static str {
        match self {
            AlgorithmFamily::AcerAcerac => "env_name",
            AlgorithmFamily::PpoSac => "env",
        }
    }
}

impl FromStr for Algorithm {
    type Err = GatewayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "acer" => Ok(Algorithm::Acer),
            "acerac" => Ok(Algorithm::Acerac),
            "PPO" => Ok(Algorithm::Ppo),
            "SAC" => Ok(Algorithm::Sac),
            other => Err(GatewayError::UnknownAlgorithm(other.to_string())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
