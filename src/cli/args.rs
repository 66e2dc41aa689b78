//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{CONFIG_FILE, LoadOptions};

/// Documentation site config loader CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: docsite.toml)
    #[arg(short = 'C', long, global = true, default_value = CONFIG_FILE, value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Validate the config and check links
    #[command(visible_alias = "c")]
    Check {
        /// Every broken link fails the check
        #[arg(long, conflicts_with = "warn_only")]
        strict: bool,

        /// Report broken links without failing
        #[arg(long, short = 'w')]
        warn_only: bool,

        #[command(flatten)]
        load: LoadArgs,
    },

    /// Print the resolved site manifest as JSON
    #[command(visible_alias = "r")]
    Resolve {
        /// Pretty-print JSON output
        #[arg(short, long)]
        pretty: bool,

        /// Write output to file instead of stdout
        #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
        output: Option<PathBuf>,

        #[command(flatten)]
        load: LoadArgs,
    },

    /// List the routes derived from content
    Routes {
        /// Pretty-print JSON output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Initialize a new site from template
    #[command(visible_alias = "i")]
    Init {
        /// Site directory name/path (relative to current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        name: Option<PathBuf>,

        /// Print the config template instead of writing files
        #[arg(long)]
        dry: bool,
    },
}

/// Arguments shared by commands that run the full load.
#[derive(clap::Args, Debug, Clone)]
pub struct LoadArgs {
    /// Skip content scanning and link checks
    #[arg(long)]
    pub no_links: bool,

    /// Override site URL.
    ///
    /// Useful for preview deployments where the URL differs from the
    /// one in docsite.toml.
    #[arg(short = 'U', long = "site-url", value_hint = clap::ValueHint::Url)]
    pub site_url: Option<String>,

    /// Read the config from stdin; content paths resolve against the
    /// current directory
    #[arg(long)]
    pub stdin: bool,
}

impl Cli {
    /// Load options for the current command.
    pub fn load_options(&self) -> LoadOptions {
        let mut options = LoadOptions {
            config: self.config.clone(),
            ..Default::default()
        };
        match &self.command {
            Commands::Check {
                strict,
                warn_only,
                load,
            } => {
                options.strict = *strict;
                options.warn_only = *warn_only;
                load.apply(&mut options);
            }
            Commands::Resolve { load, .. } => load.apply(&mut options),
            Commands::Routes { .. } | Commands::Init { .. } => {}
        }
        options
    }
}

impl LoadArgs {
    fn apply(&self, options: &mut LoadOptions) {
        options.check_links = !self.no_links;
        options.site_url = self.site_url.clone();
        options.stdin = self.stdin;
    }
}
