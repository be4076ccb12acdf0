mod cli;
mod commands;
mod config;
mod error;
mod logging;

use crate::cli::{Cli, Commands};
use crate::error::Result;
use clap::Parser;
use std::io::Write;
use tracing::{debug, error, info};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.clone())?;

    info!("linecat CLI v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    let config = config::build_config(&cli)?;
    let mut reader = commands::open_reader(&config);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let command_result = match &cli.command {
        Commands::Molecules { kind } => {
            info!("Dispatching to 'molecules' command.");
            commands::molecules::list(&mut reader, *kind, &mut out)
        }
        Commands::Molecule { name, kind } => {
            info!("Dispatching to 'molecule' command.");
            commands::molecules::show(&mut reader, name, *kind, &mut out)
        }
        Commands::Transition(args) => {
            info!("Dispatching to 'transition' command.");
            commands::transitions::transition(&mut reader, args, &mut out)
        }
        Commands::Window(args) => {
            info!("Dispatching to 'window' command.");
            commands::transitions::window(&mut reader, args, &mut out)
        }
    };
    let command_result = command_result.and_then(|()| Ok(out.flush()?));

    match &command_result {
        Ok(()) => info!("Command completed successfully."),
        Err(e) => error!("Command failed: {}", e),
    }
    command_result
}
