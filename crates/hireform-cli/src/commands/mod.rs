//! Command handlers, one module per subcommand.

pub mod completions;
pub mod config;
pub mod fill;
pub mod init;
pub mod replay;
pub mod validate;
