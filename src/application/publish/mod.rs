//! GitOps manifest publishing

mod result;
mod use_case;

pub use result::PublishResult;
pub use use_case::{
    PublishManifestUseCase, PublishStep, COMMIT_AUTHOR_EMAIL, COMMIT_AUTHOR_NAME,
};
