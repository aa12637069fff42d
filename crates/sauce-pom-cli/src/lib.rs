//! saucepom CLI library
//!
//! Command-line tooling for the locator documents that back the sauce-pom
//! page objects.

#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]

mod commands;
mod config;
mod error;
pub mod handlers;
pub mod output;

pub use commands::{CheckArgs, Cli, ColorArg, Commands, PagesArgs, ShowArgs};
pub use config::{CliConfig, ColorChoice, Verbosity};
pub use error::{CliError, CliResult};
