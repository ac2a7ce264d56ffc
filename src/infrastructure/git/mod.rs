//! Git adapters

mod cli;

pub use cli::GitCli;
