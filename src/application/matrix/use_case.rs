//! Build Matrix Use Case
//!
//! Cross-products filtered deploy labels against the stacks actually
//! present on disk. Directory existence is checked twice: once during
//! stack detection and again just before a row is emitted, with rows
//! silently dropped if the directory vanished in between. The remaining
//! window between the second check and downstream execution is accepted.

use std::path::PathBuf;

use tracing::{info, warn};

use crate::config::WorkflowConfig;
use crate::domain::entities::{DeployLabel, DeploymentTarget};
use crate::domain::ports::FileSystem;
use crate::domain::services::{
    discover_repository_root, StackAvailabilityDetector, DEFAULT_VCS_MARKER,
};
use crate::error::SwitchyardResult;

use super::result::MatrixResult;

/// Build matrix use case
///
/// Parameterized by the filesystem port so tests can run against an
/// in-memory tree.
pub struct BuildMatrixUseCase<FS: FileSystem> {
    file_system: FS,
    start_path: PathBuf,
    vcs_marker: String,
}

impl<FS: FileSystem> BuildMatrixUseCase<FS> {
    /// Use case rooted at the repository containing `start_path`.
    pub fn new(file_system: FS, start_path: impl Into<PathBuf>) -> Self {
        Self {
            file_system,
            start_path: start_path.into(),
            vcs_marker: DEFAULT_VCS_MARKER.to_string(),
        }
    }

    /// Override the version-control marker used for root discovery.
    pub fn with_vcs_marker(mut self, marker: impl Into<String>) -> Self {
        self.vcs_marker = marker.into();
        self
    }

    /// Build the deployment matrix for the filtered labels.
    pub fn execute(
        &self,
        deploy_labels: &[DeployLabel],
        target_environment: &str,
        config: &WorkflowConfig,
    ) -> SwitchyardResult<MatrixResult> {
        let environment = config.environment_config(target_environment)?;
        let repository_root =
            discover_repository_root(&self.file_system, &self.start_path, &self.vcs_marker)?;
        let detector = StackAvailabilityDetector::new(&self.file_system, &repository_root);

        let mut targets: Vec<DeploymentTarget> = Vec::new();

        for label in deploy_labels {
            if !label.is_valid() {
                warn!(label = label.raw(), "skipping malformed deploy label");
                continue;
            }

            for stack in detector.available_stacks(label.service(), target_environment, config) {
                // The directory may have vanished since detection
                if !detector.directory_exists(&stack.working_directory) {
                    continue;
                }

                targets.push(DeploymentTarget {
                    service: label.service().to_string(),
                    environment: target_environment.to_string(),
                    stack: stack.stack,
                    iam_role_plan: environment.iam_role_plan.clone(),
                    iam_role_apply: environment.iam_role_apply.clone(),
                    aws_region: environment.aws_region.clone(),
                    working_directory: stack.working_directory,
                    terraform_version: config.terraform_version.clone(),
                    terragrunt_version: config.terragrunt_version.clone(),
                });
            }
        }

        info!(
            environment = target_environment,
            labels = deploy_labels.len(),
            targets = targets.len(),
            "built deployment matrix"
        );

        Ok(MatrixResult::new(targets))
    }
}
