use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use toy_robot::core::robot::Robot;
use toy_robot::exit_codes;
use toy_robot::io::config::load_config;
use toy_robot::io::line_source::{self, LineSource};
use toy_robot::logging;
use toy_robot::simulate::run_simulation;

#[derive(Parser)]
#[command(
    name = "toy-robot",
    version,
    about = "Simulate a toy robot on a square table"
)]
struct Cli {
    /// Read commands from this file instead of standard input.
    #[arg(short, long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Board configuration (TOML). A missing file means the default 5x5 table.
    #[arg(short, long, value_name = "PATH", default_value = "toy-robot.toml")]
    config: PathBuf,
}

fn main() {
    logging::init();
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        eprintln!("An error has occurred: {err:#}");
        std::process::exit(exit_codes::FAILURE);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = load_config(&cli.config).context("load config")?;
    let board = config.board()?;
    let mut robot = Robot::new(board);

    let source: Box<dyn LineSource> = match &cli.file {
        Some(path) => Box::new(line_source::open_file(path)?),
        None => Box::new(line_source::stdin(std::io::stdin())),
    };
    info!(
        width = board.width(),
        height = board.height(),
        file = ?cli.file,
        "starting simulation"
    );

    let stdout = std::io::stdout();
    run_simulation(source, &mut robot, &mut stdout.lock())?;
    Ok(())
}
