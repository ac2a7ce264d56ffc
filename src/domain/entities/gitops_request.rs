//! GitOps request entity
//!
//! Everything one manifest publication needs: where the rendered manifest
//! lives, which repository receives it, and the provenance of the change.
//! Created per Kubernetes deployment target, consumed immediately.

use std::path::PathBuf;

use crate::domain::entities::DeploymentTarget;

/// Git refs are kept comfortably under the common 63-byte component limit.
const MAX_BRANCH_LEN: usize = 63;

/// One manifest publication into a GitOps repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitOpsRequest {
    pub service: String,
    pub environment: String,
    pub manifest_file_path: PathBuf,
    pub target_repository: String,
    pub target_branch: String,
    pub source_sha: String,
    pub source_repository: String,
    pub pr_number: Option<u64>,
    pub workflow_run_url: Option<String>,
}

impl GitOpsRequest {
    /// Build a request from a deployment target and PR provenance.
    #[allow(clippy::too_many_arguments)]
    pub fn from_deployment_target(
        target: &DeploymentTarget,
        manifest_file_path: impl Into<PathBuf>,
        target_repository: impl Into<String>,
        target_branch: impl Into<String>,
        source_sha: impl Into<String>,
        source_repository: impl Into<String>,
        pr_number: Option<u64>,
    ) -> Self {
        Self {
            service: target.service.clone(),
            environment: target.environment.clone(),
            manifest_file_path: manifest_file_path.into(),
            target_repository: target_repository.into(),
            target_branch: target_branch.into(),
            source_sha: source_sha.into(),
            source_repository: source_repository.into(),
            pr_number,
            workflow_run_url: None,
        }
    }

    /// Attach the CI workflow run URL surfaced in the pull request body.
    pub fn with_workflow_run_url(mut self, url: impl Into<String>) -> Self {
        self.workflow_run_url = Some(url.into());
        self
    }

    /// Deterministic feature branch for this (service, environment, PR).
    ///
    /// Re-runs for the same triple converge onto the same branch.
    pub fn feature_branch_name(&self) -> String {
        let name = match self.pr_number {
            Some(n) => format!("auto-update/{}-{}-pr{}", self.service, self.environment, n),
            None => format!("auto-update/{}-{}", self.service, self.environment),
        };
        truncate_ref(&name, MAX_BRANCH_LEN)
    }

    /// Path of the manifest inside the GitOps repository.
    pub fn target_file_path(&self) -> PathBuf {
        PathBuf::from(format!("{}/{}.yaml", self.environment, self.service))
    }

    /// Commit message for the manifest update.
    pub fn commit_message(&self) -> String {
        format!(
            "Update {service} manifests for {environment} environment\n\
             \n\
             Generated from: {repo}@{sha}\n\
             Service: {service}\n\
             Environment: {environment}\n\
             Target branch: {branch}",
            service = self.service,
            environment = self.environment,
            repo = self.source_repository,
            sha = self.source_sha,
            branch = self.target_branch,
        )
    }

    /// Pull request title.
    pub fn pull_request_title(&self) -> String {
        format!(
            "[Auto] Update {} manifests for {} environment",
            self.service, self.environment
        )
    }

    /// Structured pull request body.
    pub fn pull_request_body(&self) -> String {
        let mut body = String::new();

        body.push_str("## Automated Manifest Update\n\n");
        body.push_str(&format!("**Service**: {}\n", self.service));
        body.push_str(&format!("**Environment**: {}\n", self.environment));
        body.push_str(&format!(
            "**Source Repository**: {}\n",
            self.source_repository
        ));
        body.push_str(&format!(
            "**Source Commit**: [{sha}](https://github.com/{repo}/commit/{sha})\n",
            sha = self.source_sha,
            repo = self.source_repository,
        ));
        body.push_str(&format!(
            "**Generated File**: `{}`\n",
            self.target_file_path().display()
        ));

        if let Some(pr) = self.pr_number {
            body.push_str("\n### Source Pull Request\n");
            body.push_str(&format!(
                "- **PR**: [#{pr}](https://github.com/{repo}/pull/{pr})\n",
                repo = self.source_repository,
            ));
        }

        body.push_str("\n### Changes\n");
        body.push_str(
            "This PR contains automatically generated Kubernetes manifests \
             based on the latest kustomize build.\n",
        );

        body.push_str("\n### Source Details\n");
        body.push_str(&format!("- **Branch**: {}\n", self.target_branch));
        if let Some(url) = &self.workflow_run_url {
            body.push_str(&format!("- **Workflow**: [GitHub Actions Run]({url})\n"));
        }

        body.push_str("\n---\n");
        body.push_str(
            "*This PR was created automatically by the Kubernetes manifest \
             generation workflow.*\n",
        );

        body
    }

    /// Labels attached to the pull request.
    pub fn pull_request_labels(&self) -> Vec<String> {
        vec![
            format!("environment:{}", self.environment),
            format!("service:{}", self.service),
            "auto-generated".to_string(),
        ]
    }

    /// Check that all required fields are present and well-formed.
    pub fn is_valid(&self) -> bool {
        !self.service.is_empty()
            && !self.environment.is_empty()
            && !self.target_repository.is_empty()
            && !self.target_branch.is_empty()
            && !self.source_sha.is_empty()
            && !self.source_repository.is_empty()
            && is_ref_token(&self.service)
            && is_ref_token(&self.environment)
    }
}

/// Service/environment tokens are restricted to path- and ref-safe chars.
fn is_ref_token(token: &str) -> bool {
    token
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

fn truncate_ref(name: &str, max: usize) -> String {
    name.chars().take(max).collect()
}
