//! GitHub CLI gateway
//!
//! Implements the CodeHostGateway port through the `gh` binary, which
//! handles authentication and API plumbing. The pull request URL printed
//! by `gh pr create` is the handle for follow-up operations.

use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

use crate::domain::ports::code_host::{CodeHostGateway, PullRequestSpec};
use crate::domain::ports::version_control::{GatewayError, GatewayResult};

/// CodeHostGateway backed by the `gh` CLI.
pub struct GhCli {
    workdir: PathBuf,
}

impl GhCli {
    /// Gateway running inside the given repository checkout.
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
        }
    }

    /// Check if gh is installed and available
    pub fn check_available() -> bool {
        Command::new("gh")
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }

    fn output(&self, args: &[&str]) -> GatewayResult<Output> {
        Command::new("gh")
            .current_dir(&self.workdir)
            .args(args)
            .output()
            .map_err(|e| GatewayError::NotAvailable(format!("gh: {e}")))
    }

    fn run(&self, args: &[&str]) -> GatewayResult<String> {
        let output = self.output(args)?;
        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
        } else {
            Err(GatewayError::CommandFailed(format!(
                "gh {} failed: {}",
                args.first().copied().unwrap_or_default(),
                String::from_utf8_lossy(&output.stderr).trim()
            )))
        }
    }
}

impl CodeHostGateway for GhCli {
    fn open_pull_request(&self, spec: &PullRequestSpec) -> GatewayResult<String> {
        let mut args = vec![
            "pr",
            "create",
            "--repo",
            spec.repository.as_str(),
            "--base",
            spec.base.as_str(),
            "--head",
            spec.head.as_str(),
            "--title",
            spec.title.as_str(),
            "--body",
            spec.body.as_str(),
        ];
        for label in &spec.labels {
            args.push("--label");
            args.push(label.as_str());
        }

        self.run(&args)
    }

    fn enable_auto_merge(&self, pull_request_url: &str) -> GatewayResult<()> {
        self.run(&["pr", "merge", pull_request_url, "--squash", "--auto"])
            .map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_available_does_not_panic() {
        let _ = GhCli::check_available();
    }
}
