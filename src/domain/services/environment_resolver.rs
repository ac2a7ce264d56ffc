//! Branch to environment resolution
//!
//! Pure resolution logic: configured branch patterns walked in declaration
//! order, then the fixed built-in conventions. No I/O.

use tracing::debug;

use crate::config::WorkflowConfig;
use crate::domain::value_objects::DeploymentPattern;
use crate::error::SwitchyardResult;

/// Resolve a branch name to its target environment.
///
/// Configured entries win in declaration order: an entry with a pattern
/// matches against it, an entry without one matches only by exact key
/// equality. A configured match is final even when its
/// `target_environment` is absent. Built-ins apply only when nothing
/// configured matched; `None` means unresolved and the caller must treat
/// it as a failure.
pub fn resolve_environment(
    branch_name: &str,
    config: &WorkflowConfig,
) -> SwitchyardResult<Option<String>> {
    for entry in &config.branch_patterns {
        match &entry.pattern {
            Some(pattern) => {
                if pattern.matches(branch_name)? {
                    debug!(
                        branch = branch_name,
                        pattern = entry.name.as_str(),
                        "branch matched configured pattern"
                    );
                    return Ok(entry.target_environment.clone());
                }
            }
            None => {
                if entry.name == branch_name {
                    debug!(
                        branch = branch_name,
                        pattern = entry.name.as_str(),
                        "branch matched configured name"
                    );
                    return Ok(entry.target_environment.clone());
                }
            }
        }
    }

    Ok(built_in_environment(branch_name))
}

/// The fixed built-in branch conventions.
///
/// Also the only tier the safety gate derives expectations from.
pub fn built_in_environment(branch_name: &str) -> Option<String> {
    match branch_name {
        "develop" | "main" => return Some("develop".to_string()),
        _ => {}
    }

    if let Some(rest) = branch_name.strip_prefix("staging/") {
        if !rest.is_empty() {
            return Some("staging".to_string());
        }
    }

    if let Some(rest) = branch_name.strip_prefix("production/") {
        if !rest.is_empty() {
            return Some("production".to_string());
        }
    }

    if let Some((_, environment)) = parse_deploy_branch(branch_name) {
        return Some(environment);
    }

    None
}

/// Classify a branch name for observability. Independent of resolution.
pub fn deployment_pattern(branch_name: &str) -> DeploymentPattern {
    if branch_name.starts_with("hotfix/") {
        return DeploymentPattern::HotfixDeployment;
    }
    if branch_name.starts_with("release/") {
        return DeploymentPattern::ReleaseDeployment;
    }

    match branch_name {
        "develop" | "main" => return DeploymentPattern::AllServicesDevelop,
        _ => {}
    }

    if branch_name.strip_prefix("staging/").is_some_and(|r| !r.is_empty()) {
        return DeploymentPattern::SingleServiceStaging;
    }
    if branch_name
        .strip_prefix("production/")
        .is_some_and(|r| !r.is_empty())
    {
        return DeploymentPattern::SingleServiceProduction;
    }
    if parse_deploy_branch(branch_name).is_some() {
        return DeploymentPattern::CustomServiceEnvironment;
    }

    DeploymentPattern::UnknownPattern
}

/// Split `deploy/<service>/<environment>` into its captured parts.
fn parse_deploy_branch(branch_name: &str) -> Option<(String, String)> {
    let rest = branch_name.strip_prefix("deploy/")?;
    let mut parts = rest.split('/');
    let service = parts.next()?;
    let environment = parts.next()?;
    if service.is_empty() || environment.is_empty() || parts.next().is_some() {
        return None;
    }
    Some((service.to_string(), environment.to_string()))
}
