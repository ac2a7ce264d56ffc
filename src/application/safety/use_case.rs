//! Safety Gate Use Case
//!
//! Runs every check unconditionally so all results are reportable
//! together, then aggregates per policy: strict policy turns any failure
//! into a hard `SafetyViolation`, lenient policy downgrades to a warning
//! and lets the deployment proceed.

use tracing::{info, warn};

use crate::config::WorkflowConfig;
use crate::domain::entities::DeployLabel;
use crate::domain::value_objects::ValidationCheck;
use crate::error::{SwitchyardError, SwitchyardResult};

use super::checks;

/// Overall gate status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SafetyStatus {
    Passed,
    Warning,
}

impl SafetyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SafetyStatus::Passed => "passed",
            SafetyStatus::Warning => "warning",
        }
    }
}

/// Inputs to one gate evaluation
#[derive(Debug, Clone)]
pub struct SafetyInput<'a> {
    pub deploy_labels: &'a [DeployLabel],
    pub branch_name: &'a str,
    pub commit_sha: &'a str,
    pub merged_pr_number: Option<u64>,
}

/// Aggregated gate verdict
#[derive(Debug, Clone)]
pub struct SafetyVerdict {
    pub safety_status: SafetyStatus,
    pub deploy_allowed: bool,
    pub checks: Vec<ValidationCheck>,
    pub failed_checks: Vec<ValidationCheck>,
}

/// Safety gate use case
pub struct SafetyGateUseCase;

impl SafetyGateUseCase {
    pub fn new() -> Self {
        Self
    }

    /// Evaluate all safety checks and aggregate per policy.
    pub fn execute(
        &self,
        input: &SafetyInput<'_>,
        config: &WorkflowConfig,
    ) -> SwitchyardResult<SafetyVerdict> {
        let policy = &config.safety_checks;
        let mut results: Vec<ValidationCheck> = Vec::new();

        if policy.require_merged_pr {
            results.push(checks::check_merged_pr(input.merged_pr_number));
        }
        results.push(checks::check_labels_presence(input.deploy_labels));
        results.push(checks::check_branch_pattern(input.branch_name));
        results.push(checks::check_environment_consistency(
            input.deploy_labels,
            input.branch_name,
        ));

        let failed: Vec<ValidationCheck> =
            results.iter().filter(|c| !c.passed).cloned().collect();

        if failed.is_empty() {
            info!(
                branch = input.branch_name,
                checks = results.len(),
                "safety validation passed"
            );
            return Ok(SafetyVerdict {
                safety_status: SafetyStatus::Passed,
                deploy_allowed: true,
                checks: results,
                failed_checks: Vec::new(),
            });
        }

        if policy.fail_on_missing_pr {
            return Err(SwitchyardError::SafetyViolation {
                message: failure_block(&failed, input.branch_name, input.commit_sha),
            });
        }

        warn!(
            branch = input.branch_name,
            failed = failed.len(),
            "safety validation degraded to warning by policy"
        );
        Ok(SafetyVerdict {
            safety_status: SafetyStatus::Warning,
            deploy_allowed: true,
            checks: results,
            failed_checks: failed,
        })
    }
}

impl Default for SafetyGateUseCase {
    fn default() -> Self {
        Self::new()
    }
}

/// The hard-failure block shown verbatim in CI logs and PR comments.
fn failure_block(failed: &[ValidationCheck], branch_name: &str, commit_sha: &str) -> String {
    let mut message = String::new();
    message.push_str("DEPLOYMENT STOPPED - safety validation failed\n");
    message.push_str(&format!("Branch: {branch_name}\n"));
    message.push_str(&format!("Commit: {commit_sha}\n"));
    message.push('\n');

    for check in failed {
        message.push_str(&format!("- {}: {}\n", check.check_name, check.message));
    }

    message.push('\n');
    message.push_str("This safety check prevents accidental or unauthorized deployments.\n");
    message.push_str("Resolve the failed checks above or adjust the safety policy, then re-run.");

    message
}
