//! Quill CLI - a local, offline note store encrypted with a master password.
//!
//! This is the command-line interface for Quill. All cryptographic and
//! storage logic lives in `quill-core`; this crate only collects input,
//! drives a session and renders results.

use clap::Parser;

mod app;
mod cli;
mod commands;
mod config;
mod errors;
mod helpers;
mod output;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let ctx = app::AppContext::from_cli(cli)?;
    match &cli.command {
        Commands::Init => commands::init::handle_init(&ctx),
        Commands::Status => commands::maintenance::handle_status(&ctx),
        Commands::Add(args) => commands::notes::handle_add(&ctx, args),
        Commands::Show(args) => commands::notes::handle_show(&ctx, args),
        Commands::List(args) => commands::notes::handle_list(&ctx, args),
        Commands::Delete(args) => commands::notes::handle_delete(&ctx, args),
        Commands::Erase(args) => commands::maintenance::handle_erase(&ctx, args),
    }
}
