//! Fleet console - CLI front end over the case derivation engine.

pub mod cli;
pub mod config;
pub mod report;

pub use cli::{Cli, Command, OutputFormat, TabArg};
pub use config::{ConsoleConfig, LimitsConfig};
pub use report::run;
