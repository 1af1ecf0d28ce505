//! CLI module - argument parsing and interactive prompts

mod args;
mod prompts;

pub use args::{validate_threshold, Cli};
pub use prompts::*;
