mod cli;

use clap::{Parser, Subcommand};
use plankwise::init_logging;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "plankwise",
    version,
    about = "Plans the cutting and placement of floor planks in a rectilinear room"
)]
struct Cli {
    /// Log every column, retry and banked offcut.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Lay out a room file and write the result as a room file.
    Plan {
        /// Room file with the outline and, optionally, the parameters.
        room: PathBuf,
        /// Where to write the planned room. Printed to stdout when omitted.
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Seed for a reproducible shuffle.
        #[arg(long)]
        seed: Option<u64>,
        /// Keep columns in reading order.
        #[arg(long)]
        no_shuffle: bool,
        /// Lay out again even if the room file already has columns.
        #[arg(long)]
        relayout: bool,
        /// Planner config file (JSON or TOML).
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Also print the cutting schedule.
        #[arg(long)]
        schedule: bool,
    },
    /// Print the cutting schedule of a room file.
    Schedule {
        /// Room file, laid out or not.
        room: PathBuf,
        /// Planner config file (JSON or TOML).
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Decimals printed per length.
        #[arg(short, long)]
        precision: Option<usize>,
    },
    /// Write a config file holding the default settings.
    InitConfig {
        /// Target file. Defaults to the platform config directory.
        path: Option<PathBuf>,
        /// Replace an existing file.
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose)?;

    match cli.command {
        Command::Plan {
            room,
            output,
            seed,
            no_shuffle,
            relayout,
            config,
            schedule,
        } => cli::plan::run(cli::plan::PlanArgs {
            room,
            output,
            seed,
            no_shuffle,
            relayout,
            config,
            schedule,
        }),
        Command::Schedule {
            room,
            config,
            precision,
        } => cli::schedule::run(&room, config.as_deref(), precision),
        Command::InitConfig { path, force } => cli::init_config::run(path, force),
    }
}
