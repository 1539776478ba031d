// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Integration tests for the exhaustive knapsack search, end-to-end.
//!
//! The three-item scenarios mirror the hand-checkable cases; the 15-item
//! scenarios pin the full sample catalog against independently computed
//! reference values (brute force over all 32768 subsets).

mod common;

use common::three_item_catalog;
use knapsack_search::{search, Catalog, Gear};

#[test]
fn test_first_best_three_item_scenario() {
    let catalog = three_item_catalog();
    let best = search::first_best(&catalog, 220);

    // map + compass is the unique winner at 220 g: weight 220, value 185.
    // Water alone would beat it on value but never fits the budget.
    assert!(catalog.get(1).is_in(best.gear()), "compass must be packed");
    assert!(!catalog.get(2).is_in(best.gear()), "water must not fit");
    assert_eq!(best.total_value(&catalog), 185);
}

#[test]
fn test_valid_inventories_three_item_counts() {
    let catalog = three_item_catalog();

    // Nothing except the empty inventory fits under 5 g.
    assert_eq!(search::valid_inventories(&catalog, 5).len(), 1);

    // The budget exceeds the whole catalog, so every subset of the three
    // belongings fits: 8 inventories including the empty one.
    assert_eq!(search::valid_inventories(&catalog, 5000).len(), 8);
}

#[test]
fn test_valid_inventories_monotonic_in_budget() {
    let catalog = three_item_catalog();
    let budgets = [0, 90, 220, 1750, 5000];

    for pair in budgets.windows(2) {
        let narrow = search::valid_inventories(&catalog, pair[0]);
        let wide = search::valid_inventories(&catalog, pair[1]);
        assert!(narrow.len() <= wide.len());
        for inventory in &narrow {
            assert!(
                wide.contains(inventory),
                "gear {} valid at {} g but not at {} g",
                inventory.gear(),
                pair[0],
                pair[1]
            );
        }
    }
}

#[test]
fn test_full_catalog_valid_inventory_count() {
    let catalog = Catalog::sample();
    let valid = search::valid_inventories(&catalog, 4000);

    // Reference count over all 2^15 subsets of the sample table.
    assert_eq!(valid.len(), 14361);
    assert!(valid[0].gear().is_empty(), "empty gear enumerates first");
}

#[test]
fn test_full_catalog_first_best() {
    let catalog = Catalog::sample();
    let best = search::first_best(&catalog, 4000);

    // Reference optimum: everything except Gold bar, tin, beer and
    // trousers. 3960 g, value 950.
    assert_eq!(best.gear(), Gear::from_bits(0b011_1011_1011_0111));
    assert_eq!(best.total_grams_weight(&catalog), 3960);
    assert_eq!(best.total_value(&catalog), 950);
}

#[test]
fn test_full_catalog_top_five_ranking() {
    let catalog = Catalog::sample();
    let top = search::best_inventories(&catalog, 4000, 5);

    let values: Vec<u32> = top
        .iter()
        .map(|inventory| inventory.total_value(&catalog))
        .collect();
    assert_eq!(values, vec![950, 935, 925, 920, 920]);

    // Stable sort over the ascending enumeration makes the full ranking
    // deterministic, ties included.
    let gears: Vec<u32> = top.iter().map(|inventory| inventory.gear().bits()).collect();
    assert_eq!(gears, vec![15287, 7095, 10999, 2551, 11191]);

    // The ranking agrees with the single-winner search.
    assert_eq!(top[0].gear(), search::first_best(&catalog, 4000).gear());
}

#[test]
fn test_full_catalog_everything_fits_large_budget() {
    let catalog = Catalog::sample();
    let total_weight: u32 = catalog.iter().map(|b| b.grams_weight()).sum();

    let best = search::first_best(&catalog, total_weight);
    assert_eq!(best.gear().len(), catalog.len());
    assert_eq!(
        best.total_value(&catalog),
        catalog.iter().map(|b| b.value()).sum::<u32>()
    );
}

#[test]
fn test_report_block_format() {
    let catalog = three_item_catalog();
    let best = search::first_best(&catalog, 220);
    let rendered = format!("{}", best.display(&catalog));

    assert!(rendered.starts_with("---- Inventory Start:\n"));
    assert!(rendered.contains("map, 90 g, valued at 150\n"));
    assert!(rendered.contains("compass, 130 g, valued at 35\n"));
    assert!(rendered.ends_with("---- Inventory End: Total Weight: 220 g, Total Value: 185"));
}
