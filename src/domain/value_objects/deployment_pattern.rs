//! Deployment pattern tag
//!
//! Observability classification of a branch name, computed independently of
//! environment resolution. Never drives behavior.

use serde::{Deserialize, Serialize};

/// Shape of deployment implied by a branch name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeploymentPattern {
    AllServicesDevelop,
    SingleServiceStaging,
    SingleServiceProduction,
    CustomServiceEnvironment,
    HotfixDeployment,
    ReleaseDeployment,
    UnknownPattern,
}

impl DeploymentPattern {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeploymentPattern::AllServicesDevelop => "all_services_develop",
            DeploymentPattern::SingleServiceStaging => "single_service_staging",
            DeploymentPattern::SingleServiceProduction => "single_service_production",
            DeploymentPattern::CustomServiceEnvironment => "custom_service_environment",
            DeploymentPattern::HotfixDeployment => "hotfix_deployment",
            DeploymentPattern::ReleaseDeployment => "release_deployment",
            DeploymentPattern::UnknownPattern => "unknown_pattern",
        }
    }
}

impl std::fmt::Display for DeploymentPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
