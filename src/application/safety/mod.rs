//! Deployment safety gate

mod checks;
mod use_case;

pub use checks::{
    check_branch_pattern, check_environment_consistency, check_labels_presence, check_merged_pr,
    CHECK_BRANCH_PATTERN, CHECK_ENVIRONMENT_CONSISTENCY, CHECK_LABELS_PRESENCE, CHECK_MERGED_PR,
};
pub use use_case::{SafetyGateUseCase, SafetyInput, SafetyStatus, SafetyVerdict};
