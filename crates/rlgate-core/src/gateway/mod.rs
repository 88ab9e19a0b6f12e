//! File-backed gateway for accepted configurations
//!
//! The gateway materializes accepted configurations as JSON files in the
//! unprocessed directory and observes the lifecycle directories an
//! external worker moves them through. It never performs a lifecycle
//! transition itself.

mod json_file;

pub use json_file::JsonFileGateway;

use crate::configuration::Configuration;
use crate::errors::GatewayError;
use crate::settings::GatewaySettings;
use serde_json::Value;

/// Result of persisting one configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct SavedConfiguration {
    /// Name of the file created in the unprocessed directory.
    pub filename: String,
    /// The document as written to disk.
    pub configuration: Value,
}

/// Lifecycle states of a stored configuration, realized purely as
/// directory placement. `Unprocessed` is the initial state; `Processing`,
/// `Done` and `Failed` are reached only through the external worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifecycleState {
    Unprocessed,
    Processing,
    Done,
    Failed,
}

impl LifecycleState {
    /// Subdirectory of the configurations root for this state; the
    /// unprocessed state lives in the root itself.
    pub fn subdirectory(self) -> Option<&'static str> {
        match self {
            LifecycleState::Unprocessed => None,
            LifecycleState::Processing => Some("processing"),
            LifecycleState::Done => Some("done"),
            LifecycleState::Failed => Some("error"),
        }
    }
}

/// Persistence boundary for accepted configurations.
pub trait ConfigurationFileGateway: std::fmt::Debug + Send + Sync {
    /// Persist a configuration into the unprocessed directory under a
    /// freshly generated filename. Creation is exclusive: a filename
    /// collision surfaces as `FileAlreadyExists`, never as an overwrite.
    fn save(&self, configuration: &Configuration) -> Result<SavedConfiguration, GatewayError>;

    /// All configuration documents awaiting processing.
    fn list_unprocessed(&self) -> Result<Vec<Value>, GatewayError>;

    /// All configuration documents currently being processed.
    fn list_processing(&self) -> Result<Vec<Value>, GatewayError>;

    /// All configuration documents whose training finished.
    fn list_done(&self) -> Result<Vec<Value>, GatewayError>;

    /// All configuration documents whose training failed.
    fn list_failed(&self) -> Result<Vec<Value>, GatewayError>;
}

/// Selects a concrete gateway implementation by type key.
///
/// Only the JSON-on-filesystem implementation exists today; the factory is
/// the seam where an object-storage gateway would slot in without touching
/// callers.
pub struct ConfigurationFileGatewayFactory;

impl ConfigurationFileGatewayFactory {
    /// Gateway for a type key; `"json"` and `"default"` route to the JSON
    /// filesystem implementation.
    pub fn gateway(
        kind: &str,
        settings: &GatewaySettings,
    ) -> Result<Box<dyn ConfigurationFileGateway>, GatewayError> {
        match kind {
            "json" | "default" => Ok(Box::new(JsonFileGateway::new(settings.clone()))),
            other => Err(GatewayError::UnknownGatewayType(other.to_string())),
        }
    }

    /// The gateway used when no type key is given.
    pub fn default_gateway(settings: &GatewaySettings) -> Box<dyn ConfigurationFileGateway> {
        Box::new(JsonFileGateway::new(settings.clone()))
    }
}
