//! Domain Entities
//!
//! Core domain entities of the deployment pipeline.
//! - `DeployLabel` - one (service, environment) deployment intent
//! - `DeploymentTarget` - one deployment matrix row
//! - `GitOpsRequest` - one manifest publication into a GitOps repository

mod deploy_label;
mod deployment_target;
mod gitops_request;

pub use deploy_label::DeployLabel;
pub use deployment_target::DeploymentTarget;
pub use gitops_request::GitOpsRequest;
