use anyhow::{Context, Result};
use clap::Parser;
use slider_solver::board::Board;
use slider_solver::solver::Solver;
use slider_solver::utils::board_from_str;
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Also print how many search nodes were expanded and enqueued
    #[clap(short, long)]
    stats: bool,

    /// Path to the board file (dimension followed by the tiles, row by row)
    board_file: PathBuf,
}

fn read_board_file(path: &PathBuf) -> Result<Board> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    board_from_str(&content)
        .with_context(|| format!("Invalid board format in {}", path.display()))
}

fn main() -> Result<()> {
    let args = Args::parse();

    let initial = read_board_file(&args.board_file)?;
    let solver = Solver::new(initial);

    match solver.solution() {
        Some(path) => {
            println!("Minimum number of moves = {}", solver.moves());
            for board in path {
                println!("{}", board);
            }
        }
        None => println!("No solution possible"),
    }

    if args.stats {
        let stats = solver.stats();
        println!("Expanded: {}, Enqueued: {}", stats.expanded, stats.enqueued);
    }

    Ok(())
}
