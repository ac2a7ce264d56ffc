//! Individual safety checks
//!
//! Each check is independent and always produces a `ValidationCheck`.
//! The branch allow-list here is fixed on purpose: it stays narrower than
//! the configurable resolver patterns, so a branch can resolve an
//! environment through a custom pattern and still fail the gate.

use crate::domain::entities::DeployLabel;
use crate::domain::services::built_in_environment;
use crate::domain::value_objects::ValidationCheck;

pub const CHECK_MERGED_PR: &str = "merged_pr_requirement";
pub const CHECK_LABELS_PRESENCE: &str = "labels_presence";
pub const CHECK_BRANCH_PATTERN: &str = "branch_pattern";
pub const CHECK_ENVIRONMENT_CONSISTENCY: &str = "environment_consistency";

/// Deployments must originate from a merged pull request.
pub fn check_merged_pr(merged_pr_number: Option<u64>) -> ValidationCheck {
    match merged_pr_number {
        Some(n) => ValidationCheck::passed(CHECK_MERGED_PR, format!("merged PR #{n} found")),
        None => ValidationCheck::failed(
            CHECK_MERGED_PR,
            "no merged PR found - deployment may be from direct push",
        ),
    }
}

/// At least one deploy label must be present.
pub fn check_labels_presence(deploy_labels: &[DeployLabel]) -> ValidationCheck {
    if deploy_labels.is_empty() {
        ValidationCheck::failed(CHECK_LABELS_PRESENCE, "no deployment labels provided")
    } else {
        ValidationCheck::passed(
            CHECK_LABELS_PRESENCE,
            format!("{} deployment labels found", deploy_labels.len()),
        )
    }
}

/// The branch must match the fixed deployment allow-list.
pub fn check_branch_pattern(branch_name: &str) -> ValidationCheck {
    if branch_is_allowed(branch_name) {
        ValidationCheck::passed(
            CHECK_BRANCH_PATTERN,
            format!("branch '{branch_name}' follows expected pattern"),
        )
    } else {
        ValidationCheck::failed(
            CHECK_BRANCH_PATTERN,
            format!("branch '{branch_name}' does not follow expected deployment patterns"),
        )
    }
}

/// Fixed allow-list: `develop`, `main`, `staging/*`, `production/*`,
/// `deploy/*/*`. Custom configured patterns are deliberately not
/// consulted here.
fn branch_is_allowed(branch_name: &str) -> bool {
    built_in_environment(branch_name).is_some()
}

/// Every label's environment must agree with the branch-implied one.
pub fn check_environment_consistency(
    deploy_labels: &[DeployLabel],
    branch_name: &str,
) -> ValidationCheck {
    let Some(expected) = built_in_environment(branch_name) else {
        // No expectation derivable from this branch, nothing to compare
        return ValidationCheck::passed(
            CHECK_ENVIRONMENT_CONSISTENCY,
            format!("no expected environment derived from branch '{branch_name}'"),
        );
    };

    let mismatched: Vec<&DeployLabel> = deploy_labels
        .iter()
        .filter(|label| label.environment() != expected)
        .collect();

    if mismatched.is_empty() {
        ValidationCheck::passed(
            CHECK_ENVIRONMENT_CONSISTENCY,
            format!("all labels target the '{expected}' environment implied by '{branch_name}'"),
        )
    } else {
        let labels: Vec<String> = mismatched.iter().map(|l| l.raw().to_string()).collect();
        ValidationCheck::failed(
            CHECK_ENVIRONMENT_CONSISTENCY,
            format!(
                "labels [{}] do not target the '{expected}' environment implied by '{branch_name}'",
                labels.join(", ")
            ),
        )
    }
}
