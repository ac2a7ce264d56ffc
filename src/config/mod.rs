//! Workflow configuration
//!
//! Types and loading for the immutable per-run `WorkflowConfig`.
//! Configuration is YAML; declaration order of branch patterns matters.

mod loader;
mod types;

pub use loader::{load, load_with_warnings, parse_str, ConfigWarning};
pub use types::{
    BranchPatternEntry, DirectoryConvention, EnvironmentConfig, PatternSpec, SafetyChecksConfig,
    ServiceConfig, WorkflowConfig,
};
