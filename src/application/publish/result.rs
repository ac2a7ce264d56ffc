//! Publish Result

/// Outcome of one GitOps publication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishResult {
    /// Whether the manifest differed from the target repository's HEAD.
    /// `false` means the run terminated early with zero side effects
    /// beyond the branch checkout: no commit, no push, no pull request.
    pub has_changes: bool,
    /// URL of the opened pull request, when changes existed.
    pub pull_request_url: Option<String>,
    /// The deterministic feature branch the run operated on.
    pub feature_branch: String,
}

impl PublishResult {
    /// Early termination: staged tree matched HEAD.
    pub fn unchanged(feature_branch: impl Into<String>) -> Self {
        Self {
            has_changes: false,
            pull_request_url: None,
            feature_branch: feature_branch.into(),
        }
    }
}
