//! nscert - Netskope certificate bundle provisioning
//!
//! A command line tool that builds a locally trusted certificate bundle for
//! the Netskope inspection proxy and points CLI tools, cloud CLIs, package
//! managers and language runtimes at it.

use clap::Parser;

mod bundle;
mod cli;
mod commands;
mod config;
mod env_store;
mod error;
mod installer;
mod net;
mod tools;
mod ui;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Provision(args) => commands::provision::run(args, cli.debug, cli.yes),
        Commands::Check(args) => commands::check::run(args),
        Commands::Bundle(args) => commands::bundle::run(args, cli.debug, cli.yes),
        Commands::Configure(args) => commands::configure::run(args, cli.debug),
        Commands::Tools(args) => commands::tools::run(args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
