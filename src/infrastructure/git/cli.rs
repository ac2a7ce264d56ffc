//! Git CLI gateway
//!
//! Implements the VersionControlGateway port by shelling out to `git`
//! inside the checked-out GitOps repository. Failures carry the trimmed
//! stderr of the underlying command; nothing is retried here.

use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use crate::domain::ports::version_control::{GatewayError, GatewayResult, VersionControlGateway};

/// VersionControlGateway backed by the `git` binary.
pub struct GitCli {
    workdir: PathBuf,
}

impl GitCli {
    /// Gateway operating inside the given repository checkout.
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
        }
    }

    /// Check if git is installed and available
    pub fn check_available() -> bool {
        Command::new("git")
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }

    fn output(&self, args: &[&str]) -> GatewayResult<Output> {
        Command::new("git")
            .arg("-C")
            .arg(&self.workdir)
            .args(args)
            .output()
            .map_err(|e| GatewayError::NotAvailable(format!("git: {e}")))
    }

    fn run(&self, args: &[&str]) -> GatewayResult<()> {
        let output = self.output(args)?;
        if output.status.success() {
            Ok(())
        } else {
            Err(GatewayError::CommandFailed(format!(
                "git {} failed: {}",
                args.first().copied().unwrap_or_default(),
                String::from_utf8_lossy(&output.stderr).trim()
            )))
        }
    }
}

impl VersionControlGateway for GitCli {
    fn configure_identity(&self, name: &str, email: &str) -> GatewayResult<()> {
        self.run(&["config", "user.name", name])?;
        self.run(&["config", "user.email", email])
    }

    fn checkout_branch(&self, branch: &str) -> GatewayResult<()> {
        // Reruns land on the existing branch instead of failing on -b
        if self.run(&["checkout", "-b", branch]).is_ok() {
            return Ok(());
        }
        self.run(&["checkout", branch])
    }

    fn stage(&self, path: &Path) -> GatewayResult<()> {
        self.run(&["add", &path.to_string_lossy()])
    }

    fn has_staged_changes(&self) -> GatewayResult<bool> {
        // Exit 1 means the staged tree differs from HEAD
        let output = self.output(&["diff", "--cached", "--quiet"])?;
        match output.status.code() {
            Some(0) => Ok(false),
            Some(1) => Ok(true),
            _ => Err(GatewayError::CommandFailed(format!(
                "git diff --cached failed: {}",
                String::from_utf8_lossy(&output.stderr).trim()
            ))),
        }
    }

    fn commit(&self, message: &str) -> GatewayResult<()> {
        self.run(&["commit", "-m", message])
    }

    fn push(&self, branch: &str) -> GatewayResult<()> {
        self.run(&["push", "origin", branch])
    }
}
