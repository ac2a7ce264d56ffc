//! Code host port
//!
//! Abstracts the source-control host API surface the publisher needs:
//! opening a pull request and enabling auto-merge.

use super::version_control::GatewayResult;

/// Everything needed to open one pull request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestSpec {
    pub repository: String,
    pub base: String,
    pub head: String,
    pub title: String,
    pub body: String,
    pub labels: Vec<String>,
}

/// Host API operations against the GitOps repository.
pub trait CodeHostGateway {
    /// Open a pull request, returning its URL
    fn open_pull_request(&self, spec: &PullRequestSpec) -> GatewayResult<String>;

    /// Enable auto-merge (squash) on an open pull request
    fn enable_auto_merge(&self, pull_request_url: &str) -> GatewayResult<()>;
}
