//! Command handlers for CLI subcommands
//!
//! This module contains the implementation logic for each CLI subcommand.

mod check_name;
mod completions;
mod config;
mod disabled;
mod utils;
mod validate;

pub use check_name::handle_check_name;
pub use completions::handle_completions;
pub use config::handle_config;
pub use disabled::handle_disabled_reason;
pub use validate::handle_validate;
