//! Version control port
//!
//! Abstracts the git operations the publisher needs, so the step machine
//! is transport-agnostic and failure-injectable for testing.

use std::path::Path;

/// Error from a gateway operation (git command or code-host call)
#[derive(Debug, Clone)]
pub enum GatewayError {
    /// Underlying command or call failed
    CommandFailed(String),
    /// Tool or transport not available on this system
    NotAvailable(String),
}

impl std::fmt::Display for GatewayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CommandFailed(msg) => write!(f, "command failed: {}", msg),
            Self::NotAvailable(msg) => write!(f, "not available: {}", msg),
        }
    }
}

impl std::error::Error for GatewayError {}

/// Result type for gateway operations
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Git operations against the checked-out GitOps repository.
pub trait VersionControlGateway {
    /// Set the commit author identity for subsequent commits
    fn configure_identity(&self, name: &str, email: &str) -> GatewayResult<()>;

    /// Check out the named branch, creating it if it does not exist.
    ///
    /// Reruns land on the same deterministic branch name.
    fn checkout_branch(&self, branch: &str) -> GatewayResult<()>;

    /// Stage a path for commit
    fn stage(&self, path: &Path) -> GatewayResult<()>;

    /// Whether the staged tree differs from HEAD
    fn has_staged_changes(&self) -> GatewayResult<bool>;

    /// Commit staged changes with the given message
    fn commit(&self, message: &str) -> GatewayResult<()>;

    /// Push the named branch to the origin remote
    fn push(&self, branch: &str) -> GatewayResult<()>;
}
