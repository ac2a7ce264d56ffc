//! Matrix Result
//!
//! The deployment matrix handed to the CI layer. Serializes directly so
//! the caller can emit it as a build-matrix document.

use serde::Serialize;

use crate::domain::entities::DeploymentTarget;
use crate::error::{SwitchyardError, SwitchyardResult};

/// Result of building the deployment matrix
#[derive(Debug, Clone, Serialize)]
pub struct MatrixResult {
    pub targets: Vec<DeploymentTarget>,
    pub has_deployments: bool,
    pub total: usize,
}

impl MatrixResult {
    pub fn new(targets: Vec<DeploymentTarget>) -> Self {
        Self {
            has_deployments: !targets.is_empty(),
            total: targets.len(),
            targets,
        }
    }

    /// Rows targeting the Kubernetes stack, the GitOps publisher's input.
    pub fn kubernetes_targets(&self) -> impl Iterator<Item = &DeploymentTarget> {
        self.targets.iter().filter(|t| t.is_kubernetes())
    }

    /// Render the matrix as the JSON document the CI layer emits.
    pub fn to_json(&self) -> SwitchyardResult<String> {
        serde_json::to_string(self).map_err(|e| SwitchyardError::Configuration {
            message: format!("failed to serialize deployment matrix: {e}"),
        })
    }
}
