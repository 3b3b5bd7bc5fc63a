//! CLI for global pairwise sequence alignment.

mod commands;
mod data;
mod matrices;
mod utils;

use clap::Parser;

use commands::Commands;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The stem of the log file, written under `./logs`.
    #[arg(short('l'), long, default_value = "align-shell")]
    log_name: String,

    /// The subcommand to run.
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<(), String> {
    let args = Args::parse();

    // We need the `_guard` in scope to ensure proper logging.
    let (_guard, log_path) = utils::configure_logger(&args.log_name)?;
    ftlog::info!("{args:?}");
    ftlog::info!("Log file: {log_path:?}");

    match args.command {
        Commands::Align { inputs } => commands::align(&inputs)?,
        Commands::Score { inputs } => commands::score(&inputs)?,
    }

    Ok(())
}
