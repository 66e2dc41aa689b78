//! docsite - load, validate and resolve documentation site configuration.

mod cli;
mod config;
mod logger;
mod route;
mod site;
mod utils;
mod validate;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands, init::InitMode};

fn main() {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => logger::set_color(Some(true)),
        ColorChoice::Never => logger::set_color(Some(false)),
        ColorChoice::Auto => logger::set_color(None),
    }
    logger::set_verbose(cli.verbose);

    if let Err(err) = run(&cli) {
        report(&err);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let options = cli.load_options();
    match &cli.command {
        Commands::Check { .. } => cli::check::run_check(&options),
        Commands::Resolve { pretty, output, .. } => {
            cli::resolve::run_resolve(&options, *pretty, output.as_deref())
        }
        Commands::Routes { pretty } => cli::routes::run_routes(&options, *pretty),
        Commands::Init { name, dry } => {
            let cwd = std::env::current_dir()?;
            let (root, mode) = match name {
                Some(name) => (cwd.join(name), InitMode::NewDir),
                None => (cwd, InitMode::CurrentDir),
            };
            cli::init::new_site(&root, mode, *dry)
        }
    }
}

/// Print an error, using the typed renderings where available.
fn report(err: &anyhow::Error) {
    if let Some(links) = err.downcast_ref::<validate::LinkError>() {
        log!("error"; "broken links found, aborting");
        eprintln!("{}", links.report());
    } else if let Some(config::ConfigError::Diagnostics(diag)) = err.downcast_ref::<config::ConfigError>() {
        log!("error"; "invalid {}", config::CONFIG_FILE);
        eprintln!("{}", diag);
    } else {
        log!("error"; "{:#}", err);
    }
}
