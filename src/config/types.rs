//! Workflow configuration type definitions

use serde::{Deserialize, Serialize};

use crate::error::{SwitchyardError, SwitchyardResult};

// Re-export PatternSpec from domain layer
pub use crate::domain::value_objects::PatternSpec;

/// Immutable workflow configuration, loaded once per run.
///
/// Declaration order of `branch_patterns` is resolution order, so the
/// section deserializes from a YAML sequence rather than a mapping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowConfig {
    pub environments: Vec<EnvironmentConfig>,

    #[serde(default)]
    pub branch_patterns: Vec<BranchPatternEntry>,

    #[serde(default)]
    pub safety_checks: SafetyChecksConfig,

    pub directory_conventions: Vec<DirectoryConvention>,

    #[serde(default)]
    pub services: Vec<ServiceConfig>,

    #[serde(default = "default_terraform_version")]
    pub terraform_version: String,

    #[serde(default = "default_terragrunt_version")]
    pub terragrunt_version: String,
}

fn default_terraform_version() -> String {
    "1.9.8".to_string()
}

fn default_terragrunt_version() -> String {
    "0.68.4".to_string()
}

/// Per-environment deployment settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub iam_role_plan: String,
    pub iam_role_apply: String,
    pub aws_region: String,
}

/// One configured branch pattern.
///
/// An entry carrying a `pattern` matches branch names against it; an entry
/// without one matches only by exact equality of `name` to the branch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BranchPatternEntry {
    pub name: String,

    #[serde(default)]
    pub pattern: Option<PatternSpec>,

    #[serde(default)]
    pub target_environment: Option<String>,
}

/// Safety gate policy switches
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SafetyChecksConfig {
    #[serde(default)]
    pub require_merged_pr: bool,

    #[serde(default)]
    pub fail_on_missing_pr: bool,
}

/// One infrastructure stack and its directory template.
///
/// `path` may contain `{service}` and `{environment}` placeholders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryConvention {
    pub stack: String,
    pub path: String,
}

/// Optional per-service settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub name: String,

    #[serde(default)]
    pub directory_conventions: Vec<DirectoryConvention>,
}

impl WorkflowConfig {
    /// Look up an environment's configuration, failing on unknown names.
    pub fn environment_config(&self, name: &str) -> SwitchyardResult<&EnvironmentConfig> {
        self.environments
            .iter()
            .find(|env| env.environment == name)
            .ok_or_else(|| {
                SwitchyardError::configuration(format!(
                    "target environment '{name}' not found in configuration"
                ))
            })
    }

    /// Check whether an environment is configured.
    pub fn has_environment(&self, name: &str) -> bool {
        self.environments.iter().any(|env| env.environment == name)
    }

    /// Per-service configuration, if any.
    pub fn service_config(&self, service: &str) -> Option<&ServiceConfig> {
        self.services.iter().find(|svc| svc.name == service)
    }

    /// Directory conventions applicable to a service.
    ///
    /// Global conventions come first; service overrides are additive and
    /// only contribute stacks not already present globally.
    pub fn conventions_for(&self, service: &str) -> Vec<&DirectoryConvention> {
        let mut conventions: Vec<&DirectoryConvention> =
            self.directory_conventions.iter().collect();

        if let Some(svc) = self.service_config(service) {
            for convention in &svc.directory_conventions {
                if !conventions.iter().any(|c| c.stack == convention.stack) {
                    conventions.push(convention);
                }
            }
        }

        conventions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_override() -> WorkflowConfig {
        WorkflowConfig {
            environments: vec![EnvironmentConfig {
                environment: "develop".to_string(),
                iam_role_plan: "arn:aws:iam::1:role/plan".to_string(),
                iam_role_apply: "arn:aws:iam::1:role/apply".to_string(),
                aws_region: "ap-northeast-1".to_string(),
            }],
            branch_patterns: vec![],
            safety_checks: SafetyChecksConfig::default(),
            directory_conventions: vec![DirectoryConvention {
                stack: "terragrunt".to_string(),
                path: "{service}/terragrunt/envs/{environment}".to_string(),
            }],
            services: vec![ServiceConfig {
                name: "auth".to_string(),
                directory_conventions: vec![
                    DirectoryConvention {
                        stack: "terragrunt".to_string(),
                        path: "legacy/{service}".to_string(),
                    },
                    DirectoryConvention {
                        stack: "kubernetes".to_string(),
                        path: "{service}/kubernetes/overlays/{environment}".to_string(),
                    },
                ],
            }],
            terraform_version: default_terraform_version(),
            terragrunt_version: default_terragrunt_version(),
        }
    }

    #[test]
    fn environment_config_unknown_name_fails() {
        let config = config_with_override();
        let err = config.environment_config("qa").unwrap_err();
        assert!(err.to_string().contains("'qa'"));
    }

    #[test]
    fn conventions_for_overrides_are_additive_only() {
        let config = config_with_override();
        let conventions = config.conventions_for("auth");

        // Global terragrunt entry wins over the service override
        let terragrunt = conventions
            .iter()
            .find(|c| c.stack == "terragrunt")
            .unwrap();
        assert_eq!(terragrunt.path, "{service}/terragrunt/envs/{environment}");

        // The kubernetes stack only exists in the override and is added
        assert!(conventions.iter().any(|c| c.stack == "kubernetes"));
        assert_eq!(conventions.len(), 2);
    }

    #[test]
    fn conventions_for_unknown_service_uses_globals() {
        let config = config_with_override();
        let conventions = config.conventions_for("billing");
        assert_eq!(conventions.len(), 1);
        assert_eq!(conventions[0].stack, "terragrunt");
    }
}
