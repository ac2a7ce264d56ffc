//! GitHub adapters

mod cli;

pub use cli::GhCli;
