//! Draughts move generator CLI
//!
//! Prints every board reachable in one turn for each board given on the
//! command line.

use std::process::ExitCode;

use checkers::{generate_moves_batch, Board, Color, MoveGenError};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "checkers",
    version,
    about = "List legal English draughts moves as resulting boards"
)]
struct Cli {
    /// Side to move: red or black
    #[arg(short, long)]
    player: String,

    /// Print 8x8 diagrams instead of the 32-symbol encoding
    #[arg(long)]
    pretty: bool,

    /// Boards in the 32-symbol encoding (_ r R b B)
    #[arg(required = true)]
    boards: Vec<String>,
}

fn parse_input(cli: &Cli) -> Result<(Vec<Board>, Color), MoveGenError> {
    let boards = cli
        .boards
        .iter()
        .map(|b| b.parse::<Board>())
        .collect::<Result<Vec<_>, _>>()?;
    let player = cli.player.parse::<Color>()?;
    Ok((boards, player))
}

fn main() -> ExitCode {
    // Logs go to stderr so stdout carries only boards
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    let (boards, player) = match parse_input(&cli) {
        Ok(input) => input,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let results = generate_moves_batch(&boards, player);
    info!(boards = boards.len(), player = %player, "move generation finished");

    for (i, moves) in results.iter().enumerate() {
        if i > 0 {
            println!();
        }
        for next in moves {
            if cli.pretty {
                println!("{}", next.pretty());
            } else {
                println!("{next}");
            }
        }
    }

    ExitCode::SUCCESS
}
