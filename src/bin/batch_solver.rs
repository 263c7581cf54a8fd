use anyhow::Result;
use clap::Parser;
use slider_solver::board::Board;
use slider_solver::solver::Solver;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Solves a batch of seeded random boards", long_about = None)]
struct Args {
    /// Board dimension N
    #[clap(short, long, default_value_t = 3)]
    dimension: usize,

    /// Number of boards to generate and solve
    #[clap(short, long, default_value_t = 20)]
    count: u64,

    /// Scramble each board with this many random slides from the goal
    /// (always solvable). Without it, tiles are shuffled uniformly.
    #[clap(long)]
    steps: Option<usize>,

    /// Seed of the first board; board `i` uses `seed + i` (wrapping)
    #[clap(long, default_value_t = 0)]
    seed: u64,
}

fn main() -> Result<()> {
    let args = Args::parse();

    println!("Solving {} boards of dimension {}...", args.count, args.dimension);

    let mut solvable = 0u64;
    let mut total_moves = 0u64;
    let mut total_expanded = 0u64;

    for board_idx in 0..args.count {
        let current_seed = args.seed.wrapping_add(board_idx);
        let initial = match args.steps {
            Some(steps) => Board::scrambled_with_seed(args.dimension, steps, current_seed)?,
            None => Board::new_random_with_seed(args.dimension, current_seed)?,
        };

        let solver = Solver::new(initial);
        let stats = solver.stats();
        total_expanded += stats.expanded;

        if solver.is_solvable() {
            solvable += 1;
            total_moves += solver.moves() as u64;
            println!(
                "  Board {:<4} (Seed: {:<6}) Moves: {:<4} Expanded: {}",
                board_idx,
                current_seed,
                solver.moves(),
                stats.expanded
            );
        } else {
            println!(
                "  Board {:<4} (Seed: {:<6}) Unsolvable  Expanded: {}",
                board_idx, current_seed, stats.expanded
            );
        }
    }

    println!("\n--- Batch Complete ---");
    println!("Solvable boards: {} of {}", solvable, args.count);
    if solvable > 0 {
        println!("Average moves: {:.2}", total_moves as f64 / solvable as f64);
    }
    println!("Total nodes expanded: {}", total_expanded);

    Ok(())
}
