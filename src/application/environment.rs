//! Resolve Environment Use Case
//!
//! Determines the target environment for a branch and classifies the
//! deployment pattern for observability. An unresolved branch is an input
//! failure; a resolved environment missing from the configuration is a
//! configuration failure.

use tracing::info;

use crate::config::{EnvironmentConfig, WorkflowConfig};
use crate::domain::services::{deployment_pattern, resolve_environment};
use crate::domain::value_objects::DeploymentPattern;
use crate::error::{SwitchyardError, SwitchyardResult};

/// Successful environment resolution
#[derive(Debug, Clone)]
pub struct EnvironmentResolution {
    pub target_environment: String,
    pub branch_name: String,
    pub deployment_pattern: DeploymentPattern,
    pub environment_config: EnvironmentConfig,
}

/// Resolve environment use case
pub struct ResolveEnvironmentUseCase;

impl ResolveEnvironmentUseCase {
    pub fn new() -> Self {
        Self
    }

    /// Execute environment resolution for a branch.
    pub fn execute(
        &self,
        branch_name: &str,
        config: &WorkflowConfig,
    ) -> SwitchyardResult<EnvironmentResolution> {
        let pattern = deployment_pattern(branch_name);

        let target_environment = resolve_environment(branch_name, config)?.ok_or_else(|| {
            SwitchyardError::input(format!(
                "no target environment determined for branch '{branch_name}'"
            ))
        })?;

        let environment_config = config.environment_config(&target_environment)?.clone();

        info!(
            branch = branch_name,
            environment = target_environment.as_str(),
            pattern = %pattern,
            "resolved target environment"
        );

        Ok(EnvironmentResolution {
            target_environment,
            branch_name: branch_name.to_string(),
            deployment_pattern: pattern,
            environment_config,
        })
    }
}

impl Default for ResolveEnvironmentUseCase {
    fn default() -> Self {
        Self::new()
    }
}
