// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line entry point: solve the sample knapsack problem.
//!
//! Takes no flags. Loads the built-in 15-item catalog, reports the top 5
//! valid inventories under a 4000 g budget, then the single first-best
//! inventory under the same budget. Set `RUST_LOG=debug` to see search
//! progress on stderr.

use knapsack_search::{search, Catalog};

const MAX_GRAMS_WEIGHT: u32 = 4000;
const TOP_K: usize = 5;

fn main() {
    env_logger::init();

    let catalog = Catalog::sample();

    let best_inventories = search::best_inventories(&catalog, MAX_GRAMS_WEIGHT, TOP_K);
    if best_inventories.is_empty() {
        println!("No inventory match the requirements.");
    } else {
        println!(
            "Best {} inventories in descending order of value are:",
            best_inventories.len()
        );
    }
    for inventory in &best_inventories {
        println!("{}", inventory.display(&catalog));
    }

    let first_best = search::first_best(&catalog, MAX_GRAMS_WEIGHT);
    println!("Best inventory found: ");
    println!("{}", first_best.display(&catalog));
}
