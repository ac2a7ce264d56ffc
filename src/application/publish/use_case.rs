//! Publish Manifest Use Case
//!
//! Strict sequential step machine that lands one rendered manifest in the
//! GitOps repository: configure identity, read the manifest, check out the
//! feature branch, write and stage the file, diff, then commit, push, open
//! a pull request, and enable auto-merge. The first failing step aborts
//! the run, tagged with the step name. A clean staged diff terminates
//! early with `has_changes = false`, which is what makes re-execution
//! against unchanged content side-effect free.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::domain::entities::GitOpsRequest;
use crate::domain::ports::{
    CodeHostGateway, FileSystem, GatewayError, PullRequestSpec, VersionControlGateway,
};
use crate::error::{SwitchyardError, SwitchyardResult};

use super::result::PublishResult;

/// Fixed commit author for published manifests.
pub const COMMIT_AUTHOR_NAME: &str = "switchyard-bot";
pub const COMMIT_AUTHOR_EMAIL: &str = "switchyard-bot@users.noreply.github.com";

/// Steps of the publish sequence, in execution order.
///
/// Used to tag each step's failure with its component name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishStep {
    ConfigureIdentity,
    ReadManifest,
    CreateBranch,
    EnsureEnvironmentDir,
    WriteManifest,
    DetectChanges,
    Commit,
    Push,
    OpenPullRequest,
    EnableAutoMerge,
}

impl PublishStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            PublishStep::ConfigureIdentity => "configure_identity",
            PublishStep::ReadManifest => "read_manifest",
            PublishStep::CreateBranch => "create_branch",
            PublishStep::EnsureEnvironmentDir => "ensure_environment_dir",
            PublishStep::WriteManifest => "write_manifest",
            PublishStep::DetectChanges => "detect_changes",
            PublishStep::Commit => "commit",
            PublishStep::Push => "push",
            PublishStep::OpenPullRequest => "open_pull_request",
            PublishStep::EnableAutoMerge => "enable_auto_merge",
        }
    }
}

/// Publish manifest use case
///
/// Parameterized by its ports so the step machine is transport-agnostic
/// and failure-injectable in tests.
pub struct PublishManifestUseCase<FS, VC, CH>
where
    FS: FileSystem,
    VC: VersionControlGateway,
    CH: CodeHostGateway,
{
    file_system: FS,
    version_control: VC,
    code_host: CH,
    /// Root of the GitOps repository checkout.
    workdir: PathBuf,
}

impl<FS, VC, CH> PublishManifestUseCase<FS, VC, CH>
where
    FS: FileSystem,
    VC: VersionControlGateway,
    CH: CodeHostGateway,
{
    pub fn new(
        file_system: FS,
        version_control: VC,
        code_host: CH,
        workdir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            file_system,
            version_control,
            code_host,
            workdir: workdir.into(),
        }
    }

    /// Execute the publish sequence for one Kubernetes-stack target.
    pub fn execute(&self, request: &GitOpsRequest) -> SwitchyardResult<PublishResult> {
        if !request.is_valid() {
            return Err(SwitchyardError::input("invalid GitOps request"));
        }

        let feature_branch = request.feature_branch_name();

        self.version_control
            .configure_identity(COMMIT_AUTHOR_NAME, COMMIT_AUTHOR_EMAIL)
            .map_err(|e| step_error(PublishStep::ConfigureIdentity, e))?;

        let manifest_content = self
            .file_system
            .read(&request.manifest_file_path)
            .map_err(|e| {
                SwitchyardError::external(
                    PublishStep::ReadManifest.as_str(),
                    format!(
                        "failed to read manifest {}: {e}",
                        request.manifest_file_path.display()
                    ),
                )
            })?;

        self.version_control
            .checkout_branch(&feature_branch)
            .map_err(|e| step_error(PublishStep::CreateBranch, e))?;

        let environment_dir = self.workdir.join(&request.environment);
        self.file_system
            .create_dir_all(&environment_dir)
            .map_err(|e| {
                SwitchyardError::external(PublishStep::EnsureEnvironmentDir.as_str(), e.to_string())
            })?;

        let target_path = request.target_file_path();
        self.file_system
            .write(&self.workdir.join(&target_path), &manifest_content)
            .map_err(|e| {
                SwitchyardError::external(PublishStep::WriteManifest.as_str(), e.to_string())
            })?;
        self.version_control
            .stage(&target_path)
            .map_err(|e| step_error(PublishStep::WriteManifest, e))?;

        let has_changes = self
            .version_control
            .has_staged_changes()
            .map_err(|e| step_error(PublishStep::DetectChanges, e))?;

        if !has_changes {
            info!(
                service = request.service.as_str(),
                environment = request.environment.as_str(),
                branch = feature_branch.as_str(),
                "manifest unchanged, nothing to publish"
            );
            return Ok(PublishResult::unchanged(feature_branch));
        }

        self.version_control
            .commit(&request.commit_message())
            .map_err(|e| step_error(PublishStep::Commit, e))?;

        self.version_control
            .push(&feature_branch)
            .map_err(|e| step_error(PublishStep::Push, e))?;

        let spec = PullRequestSpec {
            repository: request.target_repository.clone(),
            base: request.target_branch.clone(),
            head: feature_branch.clone(),
            title: request.pull_request_title(),
            body: request.pull_request_body(),
            labels: request.pull_request_labels(),
        };
        debug!(
            repository = spec.repository.as_str(),
            head = spec.head.as_str(),
            "opening pull request"
        );
        let pull_request_url = self
            .code_host
            .open_pull_request(&spec)
            .map_err(|e| step_error(PublishStep::OpenPullRequest, e))?;

        self.code_host
            .enable_auto_merge(&pull_request_url)
            .map_err(|e| step_error(PublishStep::EnableAutoMerge, e))?;

        info!(
            service = request.service.as_str(),
            environment = request.environment.as_str(),
            pull_request = pull_request_url.as_str(),
            "manifest published"
        );

        Ok(PublishResult {
            has_changes: true,
            pull_request_url: Some(pull_request_url),
            feature_branch,
        })
    }

    /// The workdir the use case writes into.
    pub fn workdir(&self) -> &Path {
        &self.workdir
    }
}

fn step_error(step: PublishStep, err: GatewayError) -> SwitchyardError {
    SwitchyardError::external(step.as_str(), err.to_string())
}
