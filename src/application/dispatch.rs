//! Change Dispatch Use Case
//!
//! Decides which services a set of changed files touches, and what label
//! reconciliation a PR needs. Both operations are pure: the CI layer
//! supplies the changed-file list (it owns the git diff) and applies the
//! label plan through the host API.

use std::collections::BTreeSet;

use tracing::debug;

use crate::config::WorkflowConfig;
use crate::domain::entities::DeployLabel;

/// Detect changed services use case
pub struct DetectChangedServicesUseCase;

impl DetectChangedServicesUseCase {
    pub fn new() -> Self {
        Self
    }

    /// Services affected by the changed files, sorted and deduplicated.
    ///
    /// A service is affected when a changed file lives under
    /// `<service>/` or under one of its directory-convention prefixes.
    /// Services are also discovered from global convention templates by
    /// capturing the path segment where `{service}` sits.
    pub fn execute(&self, changed_files: &[String], config: &WorkflowConfig) -> Vec<String> {
        let mut services: BTreeSet<String> = BTreeSet::new();

        // Explicitly configured services first
        for service in &config.services {
            if self.service_has_changes(&service.name, changed_files, config) {
                services.insert(service.name.clone());
            }
        }

        // Discover services from global convention templates
        for convention in &config.directory_conventions {
            let Some((prefix, _)) = convention.path.split_once("{service}") else {
                continue;
            };
            for file in changed_files {
                if let Some(name) = capture_segment(file, prefix) {
                    if !name.starts_with('.') {
                        services.insert(name);
                    }
                }
            }
        }

        debug!(
            changed = changed_files.len(),
            services = services.len(),
            "detected changed services"
        );

        services.into_iter().collect()
    }

    fn service_has_changes(
        &self,
        service: &str,
        changed_files: &[String],
        config: &WorkflowConfig,
    ) -> bool {
        let simple_prefix = format!("{service}/");
        if changed_files.iter().any(|f| f.starts_with(&simple_prefix)) {
            return true;
        }

        config.conventions_for(service).iter().any(|convention| {
            let Some((prefix, _)) = convention.path.split_once("{service}") else {
                return false;
            };
            let service_prefix = format!("{prefix}{service}");
            changed_files.iter().any(|f| f.starts_with(&service_prefix))
        })
    }
}

impl Default for DetectChangedServicesUseCase {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract the path segment following `prefix` in `file`.
fn capture_segment(file: &str, prefix: &str) -> Option<String> {
    let rest = file.strip_prefix(prefix)?;
    let segment = rest.split('/').next()?;
    if segment.is_empty() {
        return None;
    }
    Some(segment.to_string())
}

/// Label reconciliation for one pull request: what to add and what to
/// remove so the PR carries exactly the required deploy labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelSyncPlan {
    pub to_add: Vec<DeployLabel>,
    pub to_remove: Vec<DeployLabel>,
}

impl LabelSyncPlan {
    pub fn new(current: &[DeployLabel], required: &[DeployLabel]) -> Self {
        let to_add = required
            .iter()
            .filter(|label| !current.contains(label))
            .cloned()
            .collect();
        let to_remove = current
            .iter()
            .filter(|label| !required.contains(label))
            .cloned()
            .collect();
        Self { to_add, to_remove }
    }

    /// Whether the PR's labels already match the required set.
    pub fn is_noop(&self) -> bool {
        self.to_add.is_empty() && self.to_remove.is_empty()
    }
}
