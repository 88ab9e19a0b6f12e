//! JSON-on-filesystem gateway implementation
//!
//! Stores each configuration as one JSON file under the configured root.
//! Writes use exclusive creation so two near-simultaneous submissions with
//! colliding names never silently clobber each other; listings tolerate
//! the external worker moving files away mid-scan.

use super::{ConfigurationFileGateway, LifecycleState, SavedConfiguration};
use crate::configuration::Configuration;
use crate::errors::GatewayError;
use crate::settings::GatewaySettings;
use crate::utils::{current_time_as_string, random_id};
use serde_json::Value;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Gateway persisting configurations as JSON files on a local filesystem.
#[derive(Debug)]
pub struct JsonFileGateway {
    settings: GatewaySettings,
}

impl JsonFileGateway {
    pub fn new(settings: GatewaySettings) -> Self {
        Self { settings }
    }

    fn state_directory(&self, state: LifecycleState) -> PathBuf {
        match state.subdirectory() {
            Some(sub) => self.settings.configurations_dir.join(sub),
            None => self.settings.configurations_dir.clone(),
        }
    }

    fn configuration_file_name(configuration: &Configuration) -> String {
        format!(
            "{}_{}_{}_{}.json",
            configuration.environment_name(),
            configuration.algorithm(),
            random_id(),
            current_time_as_string(),
        )
    }

    /// Write the document to a path that must not exist yet. The file is
    /// fully written and closed before this returns, so no truncated file
    /// is ever observable alongside a success.
    fn write_new(path: &Path, document: &Value) -> Result<(), GatewayError> {
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .map_err(|err| {
                if err.kind() == ErrorKind::AlreadyExists {
                    GatewayError::FileAlreadyExists(path.display().to_string())
                } else {
                    GatewayError::IoError(err.to_string())
                }
            })?;
        file.write_all(document.to_string().as_bytes())?;
        Ok(())
    }

    fn list_state(&self, state: LifecycleState) -> Result<Vec<Value>, GatewayError> {
        let directory = self.state_directory(state);
        let mut documents = Vec::new();

        for filename in json_files_in_directory(&directory)? {
            let path = directory.join(&filename);
            let contents = match fs::read_to_string(&path) {
                Ok(contents) => contents,
                // The worker may have moved the file between the directory
                // scan and this read; skip just that entry.
                Err(err) if err.kind() == ErrorKind::NotFound => {
                    log::debug!(
                        "Configuration file vanished during listing: {}",
                        path.display()
                    );
                    continue;
                }
                Err(err) => return Err(err.into()),
            };

            let document = serde_json::from_str(&contents).map_err(|err| {
                GatewayError::MalformedConfigurationFile {
                    file: filename.clone(),
                    message: err.to_string(),
                }
            })?;
            documents.push(document);
        }

        Ok(documents)
    }
}

fn json_files_in_directory(directory: &Path) -> Result<Vec<String>, GatewayError> {
    let mut filenames = Vec::new();
    for entry in fs::read_dir(directory)? {
        let entry = entry?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if name.ends_with(".json") && entry.path().is_file() {
            filenames.push(name.to_string());
        }
    }
    filenames.sort();
    Ok(filenames)
}

impl ConfigurationFileGateway for JsonFileGateway {
    fn save(&self, configuration: &Configuration) -> Result<SavedConfiguration, GatewayError> {
        let filename = Self::configuration_file_name(configuration);
        let path = self.settings.configurations_dir.join(&filename);
        let document = configuration.to_json();

        Self::write_new(&path, &document)?;
        log::info!("Stored configuration file: {}", filename);

        Ok(SavedConfiguration {
            filename,
            configuration: document,
        })
    }

    fn list_unprocessed(&self) -> Result<Vec<Value>, GatewayError> {
        self.list_state(LifecycleState::Unprocessed)
    }

    fn list_processing(&self) -> Result<Vec<Value>, GatewayError> {
        self.list_state(LifecycleState::Processing)
    }

    fn list_done(&self) -> Result<Vec<Value>, GatewayError> {
        self.list_state(LifecycleState::Done)
    }

    fn list_failed(&self) -> Result<Vec<Value>, GatewayError> {
        self.list_state(LifecycleState::Failed)
    }
}
