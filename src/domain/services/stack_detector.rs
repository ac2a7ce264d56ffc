//! Stack availability detection
//!
//! Filesystem-backed check of which infrastructure stacks exist for a
//! service: each directory convention template is expanded and kept only
//! when the resolved directory is actually present under the repository
//! root.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::WorkflowConfig;
use crate::domain::ports::FileSystem;

/// One stack present on disk for a service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailableStack {
    pub stack: String,
    pub working_directory: PathBuf,
}

/// Detects which stacks exist for a service under the repository root.
pub struct StackAvailabilityDetector<'a, FS: FileSystem> {
    file_system: &'a FS,
    repository_root: PathBuf,
}

impl<'a, FS: FileSystem> StackAvailabilityDetector<'a, FS> {
    pub fn new(file_system: &'a FS, repository_root: impl Into<PathBuf>) -> Self {
        Self {
            file_system,
            repository_root: repository_root.into(),
        }
    }

    /// Stacks whose expanded convention directory exists for the service.
    pub fn available_stacks(
        &self,
        service: &str,
        environment: &str,
        config: &WorkflowConfig,
    ) -> Vec<AvailableStack> {
        let mut available = Vec::new();

        for convention in config.conventions_for(service) {
            let relative = expand_template(&convention.path, service, environment);
            let working_directory = self.repository_root.join(&relative);

            if self.file_system.is_dir(&working_directory) {
                available.push(AvailableStack {
                    stack: convention.stack.clone(),
                    working_directory,
                });
            } else {
                debug!(
                    service,
                    stack = convention.stack.as_str(),
                    directory = %working_directory.display(),
                    "stack directory absent, skipping"
                );
            }
        }

        available
    }

    /// Re-check that a working directory still exists.
    pub fn directory_exists(&self, working_directory: &Path) -> bool {
        self.file_system.is_dir(working_directory)
    }
}

/// Expand `{service}` and `{environment}` placeholders in a template.
pub fn expand_template(template: &str, service: &str, environment: &str) -> String {
    template
        .replace("{service}", service)
        .replace("{environment}", environment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_str;
    use crate::infrastructure::fs::MemoryFs;

    fn config() -> WorkflowConfig {
        parse_str(
            r#"
environments:
  - environment: staging
    iam_role_plan: p
    iam_role_apply: a
    aws_region: r

directory_conventions:
  - stack: terragrunt
    path: "{service}/terragrunt/envs/{environment}"
  - stack: kubernetes
    path: "{service}/kubernetes/overlays/{environment}"
"#,
        )
        .unwrap()
    }

    #[test]
    fn expand_template_substitutes_both_placeholders() {
        assert_eq!(
            expand_template("{service}/envs/{environment}", "auth", "staging"),
            "auth/envs/staging"
        );
    }

    #[test]
    fn detects_only_existing_stack_directories() {
        let fs = MemoryFs::new();
        fs.add_dir("/repo/auth/terragrunt/envs/staging");
        // kubernetes overlay intentionally absent

        let detector = StackAvailabilityDetector::new(&fs, "/repo");
        let stacks = detector.available_stacks("auth", "staging", &config());

        assert_eq!(stacks.len(), 1);
        assert_eq!(stacks[0].stack, "terragrunt");
        assert_eq!(
            stacks[0].working_directory,
            PathBuf::from("/repo/auth/terragrunt/envs/staging")
        );
    }

    #[test]
    fn no_directories_means_no_stacks() {
        let fs = MemoryFs::new();
        let detector = StackAvailabilityDetector::new(&fs, "/repo");
        assert!(detector
            .available_stacks("auth", "staging", &config())
            .is_empty());
    }

    #[test]
    fn a_file_at_the_convention_path_does_not_count() {
        let fs = MemoryFs::new();
        fs.add_file("/repo/auth/terragrunt/envs/staging", "not a directory");

        let detector = StackAvailabilityDetector::new(&fs, "/repo");
        let stacks = detector.available_stacks("auth", "staging", &config());
        assert!(stacks.iter().all(|s| s.stack != "terragrunt"));
    }
}
