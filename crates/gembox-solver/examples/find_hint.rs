//! Example demonstrating the hint engine on a random instance.
//!
//! This example shows how to:
//! - Build a random global pool and visible window
//! - Run the three-tier hint solver over one round requirement
//! - Inspect which tiers were attempted
//!
//! # Usage
//!
//! ```sh
//! cargo run --example find_hint
//! ```
//!
//! Control the instance shape:
//!
//! ```sh
//! cargo run --example find_hint -- --categories 3 --target 12 --rounds 2
//! ```
//!
//! Reproduce a run with a fixed seed:
//!
//! ```sh
//! cargo run --example find_hint -- --seed 42
//! ```

use clap::Parser;
use gembox_core::{Category, GlobalPool, Item, ItemId, RoundRequirement, VisibleWindow};
use gembox_solver::{HintOutcome, HintSolver};
use rand::{RngExt as _, SeedableRng as _};
use rand_pcg::Pcg64Mcg;
use std::process;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Number of gem categories.
    #[arg(long, value_name = "COUNT", default_value_t = 3)]
    categories: usize,

    /// Target sum for the current round.
    #[arg(long, value_name = "SUM", default_value_t = 12)]
    target: u32,

    /// Remaining rounds, including the current one.
    #[arg(long, value_name = "COUNT", default_value_t = 2)]
    rounds: u32,

    /// Visible window size.
    #[arg(long, value_name = "SLOTS", default_value_t = 12)]
    window: usize,

    /// Hidden pool gems per category (beyond the visible ones).
    #[arg(long, value_name = "COUNT", default_value_t = 3)]
    hidden: usize,

    /// Seed for instance generation; random when omitted.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if args.categories == 0 || args.categories > 256 {
        eprintln!("--categories must be between 1 and 256.");
        process::exit(2);
    }
    let Ok(requirement) = RoundRequirement::new(args.target, args.rounds) else {
        eprintln!("--target and --rounds must be positive.");
        process::exit(2);
    };

    let seed = args.seed.unwrap_or_else(rand::random);
    let (pool, window) = generate_instance(&args, seed);

    println!("Seed:");
    println!("  {seed}");
    println!();
    println!("Instance:");
    println!(
        "  {} categories, target {}, {} rounds remaining",
        args.categories, args.target, args.rounds
    );
    println!("  pool: {} gems, window: {} visible", pool.len(), window.occupied_count());
    for item in window.items() {
        println!("    {item}");
    }
    println!();

    let solver = HintSolver::with_all_strategies();
    let mut stats = solver.new_stats();
    let outcome = solver.solve_with_stats(&pool, &window, &requirement, args.categories, &mut stats);

    match outcome {
        HintOutcome::Witness(witness) => {
            println!("Hint ({} gems, total {}):", witness.len(), witness.total_weight());
            for item in witness.items() {
                println!("  {item}");
            }
        }
        HintOutcome::Infeasible => {
            println!("Infeasible: no valid selection exists for this window.");
        }
    }
    println!();

    println!("Tier attempts:");
    for (i, count) in stats.attempts().iter().enumerate() {
        let name = solver.strategies()[i].name();
        println!("  {name}: {count}");
    }
}

fn generate_instance(args: &Args, seed: u64) -> (GlobalPool, VisibleWindow) {
    let mut rng = Pcg64Mcg::seed_from_u64(seed);
    let mut pool = GlobalPool::new();
    let mut window = VisibleWindow::new(args.window);
    let mut next_id = 0_u32;

    for slot in 0..args.window {
        #[expect(clippy::cast_possible_truncation)]
        let category = Category::new((slot % args.categories) as u8);
        let item = Item::new(ItemId::new(next_id), category, rng.random_range(1..=6));
        next_id += 1;
        pool.add(item.clone()).expect("generated ids are unique");
        window.place_first_empty(item).expect("window sized to fit");
    }
    for category in Category::all(args.categories) {
        for _ in 0..args.hidden {
            let item = Item::new(ItemId::new(next_id), category, rng.random_range(1..=6));
            next_id += 1;
            pool.add(item).expect("generated ids are unique");
        }
    }

    (pool, window)
}
