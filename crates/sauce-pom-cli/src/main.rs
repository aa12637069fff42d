//! saucepom: inspect and validate page locator documents
//!
//! ## Usage
//!
//! ```bash
//! saucepom pages                          # List pages and their documents
//! saucepom show LoginPage                 # Print a page's locators
//! saucepom show CartPage checkoutButton   # Print one selector
//! saucepom check                          # Validate every document
//! ```

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use console::style;
use sauce_pom::logging::{self, LogFormat};
use sauce_pom::{PageId, SuiteConfig};
use sauce_pom_cli::{
    handlers, output, CheckArgs, Cli, CliConfig, CliError, CliResult, ColorChoice, Commands,
    PagesArgs, ShowArgs, Verbosity,
};
use tracing::debug;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e}", style("Error:").red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    let config = build_config(&cli);

    let _ = logging::init_with(config.verbosity.log_level(), LogFormat::Text);
    let colors = config.color.should_color();
    console::set_colors_enabled(colors);
    console::set_colors_enabled_stderr(colors);
    debug!(root = %config.suite.locator_root.display(), "locator root");

    match cli.command {
        Commands::Pages(args) => run_pages(&config, &args),
        Commands::Show(args) => run_show(&config, &args),
        Commands::Check(args) => run_check(&config, &args),
    }
}

fn build_config(cli: &Cli) -> CliConfig {
    let color: ColorChoice = cli.color.into();

    CliConfig::new()
        .with_verbosity(Verbosity::from_flags(cli.quiet, cli.verbose))
        .with_color(color)
        .with_suite(SuiteConfig::from_env())
        .with_root(cli.root.clone())
}

fn run_pages(config: &CliConfig, args: &PagesArgs) -> CliResult<()> {
    let listings = handlers::list_pages(&config.suite.store());
    let mut out = io::stdout().lock();
    if args.json {
        output::write_json(&mut out, &listings)
    } else {
        output::write_pages(&mut out, &listings)
    }
}

fn run_show(config: &CliConfig, args: &ShowArgs) -> CliResult<()> {
    let resolver = config.suite.resolver();
    let mut out = io::stdout().lock();

    match &args.key {
        Some(key) => {
            let report = handlers::show_selector(&resolver, args.page, key)?;
            if args.json {
                output::write_json(&mut out, &report)
            } else {
                output::write_selector(&mut out, &report)
            }
        }
        None => {
            let document = resolver.load(args.page)?;
            if args.json {
                output::write_json(&mut out, &*document)
            } else {
                output::write_document(&mut out, &document)
            }
        }
    }
}

fn run_check(config: &CliConfig, args: &CheckArgs) -> CliResult<()> {
    let pages: Vec<PageId> = args.page.map_or_else(|| PageId::ALL.to_vec(), |page| vec![page]);
    let resolver = config.suite.resolver();
    let reports = handlers::check_pages(&resolver, &pages);

    let mut out = io::stdout().lock();
    if args.json {
        output::write_json(&mut out, &reports)?;
    } else if !config.verbosity.is_quiet() {
        output::write_check(&mut out, &reports)?;
    }
    out.flush()?;

    let failed = reports.iter().filter(|r| !r.is_ok()).count();
    if failed > 0 {
        return Err(CliError::check_failed(failed, reports.len()));
    }
    Ok(())
}
