//! Deployment matrix construction

mod result;
mod use_case;

pub use result::MatrixResult;
pub use use_case::BuildMatrixUseCase;
