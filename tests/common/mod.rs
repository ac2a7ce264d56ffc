//! Shared test environment for integration tests
//!
//! Builds a temporary repository tree with a version-control marker,
//! stack directories, and a workflow configuration.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use switchyard::config::{self, WorkflowConfig};

/// Three-environment configuration with a custom qa pattern and strict
/// safety policy.
pub const WORKFLOW_CONFIG: &str = r#"
environments:
  - environment: develop
    iam_role_plan: arn:aws:iam::123456789012:role/github-oidc-develop-plan
    iam_role_apply: arn:aws:iam::123456789012:role/github-oidc-develop-apply
    aws_region: ap-northeast-1
  - environment: staging
    iam_role_plan: arn:aws:iam::123456789012:role/github-oidc-staging-plan
    iam_role_apply: arn:aws:iam::123456789012:role/github-oidc-staging-apply
    aws_region: ap-northeast-1
  - environment: production
    iam_role_plan: arn:aws:iam::123456789012:role/github-oidc-production-plan
    iam_role_apply: arn:aws:iam::123456789012:role/github-oidc-production-apply
    aws_region: ap-northeast-1

branch_patterns:
  - name: qa
    pattern: "qa/*"
    target_environment: staging

safety_checks:
  require_merged_pr: true
  fail_on_missing_pr: true

directory_conventions:
  - stack: terragrunt
    path: "{service}/terragrunt/envs/{environment}"
  - stack: kubernetes
    path: "{service}/kubernetes/overlays/{environment}"
"#;

pub struct TestEnv {
    root: TempDir,
    config: WorkflowConfig,
}

impl TestEnv {
    pub fn builder() -> TestEnvBuilder {
        TestEnvBuilder {
            config_yaml: WORKFLOW_CONFIG.to_string(),
            stack_dirs: Vec::new(),
        }
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }

    pub fn config(&self) -> &WorkflowConfig {
        &self.config
    }

    /// Create a directory under the repository root after the fact.
    #[allow(dead_code)]
    pub fn add_dir(&self, relative: &str) {
        fs::create_dir_all(self.root().join(relative)).unwrap();
    }

    /// Remove a directory under the repository root.
    #[allow(dead_code)]
    pub fn remove_dir(&self, relative: &str) {
        fs::remove_dir_all(self.root().join(relative)).unwrap();
    }
}

pub struct TestEnvBuilder {
    config_yaml: String,
    stack_dirs: Vec<String>,
}

impl TestEnvBuilder {
    #[allow(dead_code)]
    pub fn with_config(mut self, yaml: &str) -> Self {
        self.config_yaml = yaml.to_string();
        self
    }

    pub fn with_stack_dir(mut self, relative: &str) -> Self {
        self.stack_dirs.push(relative.to_string());
        self
    }

    pub fn build(self) -> TestEnv {
        let root = TempDir::new().unwrap();
        fs::create_dir_all(root.path().join(".git")).unwrap();

        for dir in &self.stack_dirs {
            fs::create_dir_all(root.path().join(dir)).unwrap();
        }

        let config = config::parse_str(&self.config_yaml).unwrap();
        TestEnv { root, config }
    }
}
