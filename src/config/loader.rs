//! Configuration loading and validation

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{SwitchyardError, SwitchyardResult};

use super::types::WorkflowConfig;

/// Non-fatal configuration warning (e.g. unknown keys) surfaced to callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
}

/// Load a workflow configuration from a YAML file.
pub fn load(path: &Path) -> SwitchyardResult<WorkflowConfig> {
    load_with_warnings(path).map(|(config, _)| config)
}

/// Load a workflow configuration and collect unknown-key warnings.
pub fn load_with_warnings(path: &Path) -> SwitchyardResult<(WorkflowConfig, Vec<ConfigWarning>)> {
    if !path.exists() {
        return Err(SwitchyardError::configuration(format!(
            "configuration file not found: {}",
            path.display()
        )));
    }

    let content = fs::read_to_string(path).map_err(|e| {
        SwitchyardError::configuration(format!(
            "failed to read configuration {}: {e}",
            path.display()
        ))
    })?;

    let (config, unknown_keys) = parse(&content).map_err(|e| {
        SwitchyardError::configuration(format!(
            "failed to load configuration from {}: {e}",
            path.display()
        ))
    })?;

    let warnings = unknown_keys
        .into_iter()
        .map(|key| ConfigWarning {
            key,
            file: path.to_path_buf(),
        })
        .collect();

    Ok((config, warnings))
}

/// Parse a workflow configuration from YAML content.
pub fn parse_str(content: &str) -> SwitchyardResult<WorkflowConfig> {
    let (config, _) = parse(content)
        .map_err(|e| SwitchyardError::configuration(format!("invalid configuration: {e}")))?;
    Ok(config)
}

fn parse(content: &str) -> Result<(WorkflowConfig, Vec<String>), String> {
    let mut unknown_keys: Vec<String> = Vec::new();
    let deserializer = serde_yaml_ng::Deserializer::from_str(content);

    let config: WorkflowConfig = serde_ignored::deserialize(deserializer, |path| {
        unknown_keys.push(path.to_string());
    })
    .map_err(|e| e.to_string())?;

    validate(&config)?;
    Ok((config, unknown_keys))
}

/// Structural validation beyond what serde enforces.
fn validate(config: &WorkflowConfig) -> Result<(), String> {
    if config.environments.is_empty() {
        return Err("environments must not be empty".to_string());
    }

    for env in &config.environments {
        if env.environment.is_empty() {
            return Err("environment entries must have a non-empty name".to_string());
        }
    }

    if config.directory_conventions.is_empty() {
        return Err("directory_conventions must not be empty".to_string());
    }

    for convention in &config.directory_conventions {
        if !convention.path.contains("{service}") {
            return Err(format!(
                "directory convention for stack '{}' must contain a {{service}} placeholder",
                convention.stack
            ));
        }
    }

    for service in &config.services {
        if service.name.is_empty() {
            return Err("service entries must have a non-empty name".to_string());
        }
    }

    Ok(())
}
