//! cantus CLI: lint first-species counterpoint exercises.
//!
//! Provides the `cantus` command with subcommands for linting excerpts and
//! managing the rule catalog. See `cantus --help` for usage.

use clap::Parser;
use tracing::debug;

mod cli_args;
mod commands;

use cli_args::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.debug);

    let formatter: Box<dyn cantus_output::OutputFormatter> = if cli.json {
        Box::new(cantus_output::json::JsonFormatter)
    } else {
        Box::new(cantus_output::human::HumanFormatter)
    };

    let catalog_path = commands::catalog_path(cli.rules.as_deref());

    let exit_code = match cli.command {
        Commands::Lint {
            excerpt,
            key,
            cantus_upper,
            strict,
            only,
        } => commands::lint::run(
            &*formatter,
            &catalog_path,
            commands::lint::LintArgs {
                excerpt,
                key,
                cantus_upper,
                strict,
                only,
            },
        ),
        Commands::Rules => commands::rules::run(&*formatter, &catalog_path),
        Commands::Explain { rule } => commands::explain::run(&*formatter, &catalog_path, &rule),
        Commands::Init { force } => commands::init::run(&catalog_path, cli.verbose, force),
        Commands::Config { key, value } => commands::config::run(&catalog_path, key, value),
        Commands::Completion { shell } => commands::completion::run(&shell),
    };

    std::process::exit(exit_code);
}

fn init_logging(verbose: bool, debug: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let level = if debug {
        "debug"
    } else if verbose {
        "info"
    } else {
        "warn"
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    debug!("logging initialized at level: {}", level);
}
