// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

use knapsack_search::{Belonging, Catalog};

/// The three-item catalog used by the scenario tests.
///
/// Small enough to reason about every one of its 8 subsets by hand:
/// map 90 g / 150, compass 130 g / 35, water 1530 g / 300.
pub fn three_item_catalog() -> Catalog {
    Catalog::new(vec![
        Belonging::new(0, "map", 90, 150),
        Belonging::new(1, "compass", 130, 35),
        Belonging::new(2, "water", 1530, 300),
    ])
}
