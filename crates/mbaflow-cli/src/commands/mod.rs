//! Subcommand handlers. One module per subcommand.

pub mod completions;
pub mod config;
pub mod frameworks;
pub mod new;
