//! Application Layer
//!
//! Use cases that orchestrate the deployment pipeline. This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `ResolveEnvironmentUseCase` - branch name to target environment
//! - `FilterLabelsUseCase` - narrow deploy labels to one environment
//! - `SafetyGateUseCase` - pre-deployment checks with policy aggregation
//! - `BuildMatrixUseCase` - cross-product labels against on-disk stacks
//! - `PublishManifestUseCase` - land one manifest in the GitOps repository
//! - `DetectChangedServicesUseCase` - changed files to affected services

pub mod dispatch;
pub mod environment;
pub mod filter;
pub mod matrix;
pub mod publish;
pub mod safety;

pub use dispatch::{DetectChangedServicesUseCase, LabelSyncPlan};
pub use environment::{EnvironmentResolution, ResolveEnvironmentUseCase};
pub use filter::{FilterLabelsUseCase, FilterResult};
pub use matrix::{BuildMatrixUseCase, MatrixResult};
pub use publish::{
    PublishManifestUseCase, PublishResult, PublishStep, COMMIT_AUTHOR_EMAIL, COMMIT_AUTHOR_NAME,
};
pub use safety::{SafetyGateUseCase, SafetyInput, SafetyStatus, SafetyVerdict};
