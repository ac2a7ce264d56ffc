//! Deployment target entity
//!
//! One row of the deployment matrix: everything a downstream build-tool
//! invocation needs for a single (service, environment, stack) deployment.
//! Serializes to JSON so the CI layer can emit it as a matrix item.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A single deployment matrix row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentTarget {
    pub service: String,
    pub environment: String,
    pub stack: String,
    pub iam_role_plan: String,
    pub iam_role_apply: String,
    pub aws_region: String,
    pub working_directory: PathBuf,
    pub terraform_version: String,
    pub terragrunt_version: String,
}

impl DeploymentTarget {
    /// A target is valid iff service, environment, and stack are non-empty.
    ///
    /// The working directory is only guaranteed to have existed when the
    /// matrix was built; existence is not re-checked here.
    pub fn is_valid(&self) -> bool {
        !self.service.is_empty() && !self.environment.is_empty() && !self.stack.is_empty()
    }

    /// Whether this row targets the Kubernetes stack.
    pub fn is_kubernetes(&self) -> bool {
        self.stack == "kubernetes"
    }
}
