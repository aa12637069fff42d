//! CLI command definitions using clap

use clap::{Parser, Subcommand, ValueEnum};
use sauce_pom::PageId;
use std::path::PathBuf;

/// saucepom: inspect and validate page locator documents
#[derive(Parser, Debug)]
#[command(name = "saucepom")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorArg,

    /// Directory holding the locator documents
    /// [default: $SAUCE_POM_LOCATOR_DIR, else the bundled locators]
    #[arg(long, global = true, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List known pages and their locator documents
    Pages(PagesArgs),

    /// Print a page's locators, or a single selector
    Show(ShowArgs),

    /// Validate locator documents against the page objects
    ///
    /// Every page object resolves a fixed set of locator keys when it is
    /// constructed. This loads each document and reports unreadable
    /// documents and keys a page object needs but the document lacks.
    Check(CheckArgs),
}

/// Arguments for the pages command
#[derive(Parser, Debug)]
pub struct PagesArgs {
    /// Emit JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the show command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Page identifier (e.g. LoginPage)
    pub page: PageId,

    /// Locator key; prints the whole document when omitted
    pub key: Option<String>,

    /// Emit JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the check command
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Only check this page
    #[arg(long)]
    pub page: Option<PageId>,

    /// Emit JSON
    #[arg(long)]
    pub json: bool,
}

/// Color argument for CLI
#[derive(ValueEnum, Debug, Clone, Copy, Default)]
pub enum ColorArg {
    /// Automatic color detection
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for crate::config::ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}
