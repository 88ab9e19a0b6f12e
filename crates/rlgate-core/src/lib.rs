//! Core library for validating and persisting RL training configurations.
//!
//! This crate accepts job-configuration submissions (an algorithm name
//! plus a free-form parameter map), validates each submission against an
//! algorithm-specific schema, and tracks accepted configurations through a
//! directory-based lifecycle an external worker drives.
//!
//! # Architecture Overview
//!
//! - **Schema registry**: declarative per-family parameter tables (types,
//!   defaults, choice sets, required flags)
//! - **Argument materializer**: parameter maps flattened into the
//!   `--key value` token convention shared with the training runners
//! - **Config validator**: schema-directed token parsing with
//!   first-error-wins reporting, recovered into results at the boundary
//! - **Configuration entity**: immutable validated domain object built
//!   only through validating constructors
//! - **File gateway**: exclusive-create JSON persistence plus
//!   lifecycle-partitioned listings (unprocessed/processing/done/failed)
//! - **Algorithm repository**: name-to-id lookup for the results store,
//!   memoized behind a small fixed-capacity cache

pub mod algorithm;
pub mod args;
pub mod configuration;
pub mod errors;
pub mod gateway;
pub mod repository;
pub mod schema;
pub mod settings;
pub mod utils;
pub mod validation;

pub use algorithm::{Algorithm, AlgorithmFamily};
pub use configuration::Configuration;
pub use errors::GatewayError;
pub use gateway::{
    ConfigurationFileGateway, ConfigurationFileGatewayFactory, JsonFileGateway, LifecycleState,
    SavedConfiguration,
};
pub use repository::{
    AlgorithmRecord, AlgorithmRepository, CachedAlgorithmRepository, StaticAlgorithmRepository,
};
pub use settings::GatewaySettings;
pub use validation::{validate_config, SchemaViolation};
