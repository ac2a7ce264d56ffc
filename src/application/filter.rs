//! Filter Labels Use Case
//!
//! Narrows a deploy label set to one target environment. Exact environment
//! equality only; the excluded complement is returned for audit. An empty
//! filtered set is a failure: a run must never proceed with zero work.

use tracing::info;

use crate::config::WorkflowConfig;
use crate::domain::entities::DeployLabel;
use crate::error::{SwitchyardError, SwitchyardResult};

/// Result of filtering deploy labels by environment
#[derive(Debug, Clone)]
pub struct FilterResult {
    pub filtered: Vec<DeployLabel>,
    pub excluded: Vec<DeployLabel>,
    pub target_environment: String,
    pub total: usize,
    pub filtered_count: usize,
}

/// Filter labels use case
pub struct FilterLabelsUseCase;

impl FilterLabelsUseCase {
    pub fn new() -> Self {
        Self
    }

    /// Execute label filtering against a target environment.
    pub fn execute(
        &self,
        deploy_labels: &[DeployLabel],
        target_environment: &str,
        config: &WorkflowConfig,
    ) -> SwitchyardResult<FilterResult> {
        if !config.has_environment(target_environment) {
            return Err(SwitchyardError::configuration(format!(
                "unknown target environment: {target_environment}"
            )));
        }

        let (filtered, excluded): (Vec<DeployLabel>, Vec<DeployLabel>) = deploy_labels
            .iter()
            .cloned()
            .partition(|label| label.environment() == target_environment);

        if filtered.is_empty() {
            return Err(SwitchyardError::input(format!(
                "no deployment labels match target environment '{target_environment}'"
            )));
        }

        info!(
            environment = target_environment,
            total = deploy_labels.len(),
            filtered = filtered.len(),
            excluded = excluded.len(),
            "filtered deploy labels"
        );

        Ok(FilterResult {
            total: deploy_labels.len(),
            filtered_count: filtered.len(),
            filtered,
            excluded,
            target_environment: target_environment.to_string(),
        })
    }
}

impl Default for FilterLabelsUseCase {
    fn default() -> Self {
        Self::new()
    }
}
