//! Switchyard - label-driven deployment matrix and GitOps publishing
//!
//! Switchyard decides, for a merged pull request, which services must be
//! deployed to which environments. It resolves branch naming conventions
//! and operator labels into a filesystem-verified deployment matrix, gates
//! execution behind configurable safety policy, and publishes rendered
//! Kubernetes manifests into a GitOps repository through an idempotent
//! branch/commit/PR/auto-merge flow.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{
    BuildMatrixUseCase, DetectChangedServicesUseCase, EnvironmentResolution, FilterLabelsUseCase,
    FilterResult, LabelSyncPlan, MatrixResult, PublishManifestUseCase, PublishResult,
    ResolveEnvironmentUseCase, SafetyGateUseCase, SafetyInput, SafetyStatus, SafetyVerdict,
};
pub use config::{EnvironmentConfig, WorkflowConfig};
pub use domain::entities::{DeployLabel, DeploymentTarget, GitOpsRequest};
pub use domain::value_objects::{DeploymentPattern, PatternSpec, ValidationCheck};
pub use error::{SwitchyardError, SwitchyardResult};
