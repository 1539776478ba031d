// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Exhaustive search over the gear space.
//!
//! Every subset of an N-item catalog is a gear value in `0..2^N`, so the
//! whole search space is a single integer range. The routines here walk that
//! range in ascending order, which is what pins down the tie-break: the
//! first (numerically smallest) gear reaching the maximum value wins,
//! because only strict improvements replace the incumbent.
//!
//! This is brute force by design. No pruning, no branch-and-bound, no
//! dynamic programming: N is capped at [`crate::catalog::MAX_ITEMS`] and the
//! O(2^N * N) walk is the intended behavior, quirks included. In
//! particular [`first_best`] returns the empty inventory when nothing else
//! fits, and the empty gear always satisfies a non-negative budget, so
//! "no solution" and "the empty solution" are deliberately the same answer.

use crate::catalog::Catalog;
use crate::gear::Gear;
use log::debug;
use std::fmt;

/// An evaluated subset: a gear plus access to its derived totals.
///
/// Totals are computed on demand from the catalog rather than cached, so an
/// `Inventory` is just a gear with a richer API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Inventory {
    gear: Gear,
}

impl Inventory {
    /// Create an inventory for the given gear.
    pub fn new(gear: Gear) -> Self {
        Self { gear }
    }

    /// The underlying gear selection.
    pub fn gear(&self) -> Gear {
        self.gear
    }

    /// Total weight in grams of the selected belongings.
    pub fn total_grams_weight(&self, catalog: &Catalog) -> u32 {
        catalog.total_grams_weight(self.gear)
    }

    /// Total value of the selected belongings.
    pub fn total_value(&self, catalog: &Catalog) -> u32 {
        catalog.total_value(self.gear)
    }

    /// Borrow the catalog for display.
    ///
    /// Renders the original report block:
    ///
    /// ```text
    /// ---- Inventory Start:
    /// map, 90 g, valued at 150
    /// compass, 130 g, valued at 35
    /// ---- Inventory End: Total Weight: 220 g, Total Value: 185
    /// ```
    pub fn display<'a>(&self, catalog: &'a Catalog) -> InventoryDisplay<'a> {
        InventoryDisplay {
            inventory: *self,
            catalog,
        }
    }
}

/// Display adapter pairing an [`Inventory`] with the catalog it refers to.
pub struct InventoryDisplay<'a> {
    inventory: Inventory,
    catalog: &'a Catalog,
}

impl fmt::Display for InventoryDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "---- Inventory Start:")?;
        for belonging in self.catalog.iter() {
            if belonging.is_in(self.inventory.gear()) {
                writeln!(f, "{}", belonging)?;
            }
        }
        write!(
            f,
            "---- Inventory End: Total Weight: {} g, Total Value: {}",
            self.inventory.total_grams_weight(self.catalog),
            self.inventory.total_value(self.catalog)
        )
    }
}

/// Find the first best inventory under the weight budget.
///
/// Walks gear values `0..=catalog.combinations()` in ascending order and
/// keeps the gear with the highest total value among those whose total
/// weight is within `max_grams_weight`. Only a strict improvement replaces
/// the incumbent, so ties go to the numerically smallest gear.
///
/// If no gear with positive value fits, the empty inventory is returned.
/// The empty gear weighs 0 and therefore always satisfies the budget, so
/// callers get a valid (if vacuous) inventory even for budgets below the
/// lightest item.
pub fn first_best(catalog: &Catalog, max_grams_weight: u32) -> Inventory {
    let combinations = catalog.combinations();
    debug!(
        "searching {} gear combinations for the first best under {} g",
        combinations as u64 + 1,
        max_grams_weight
    );

    let mut best = Inventory::default();
    let mut best_value = 0;

    for bits in 0..=combinations {
        let gear = Gear::from_bits(bits);
        if catalog.total_grams_weight(gear) <= max_grams_weight {
            let value = catalog.total_value(gear);
            if value > best_value {
                best = Inventory::new(gear);
                best_value = value;
            }
        }
    }

    debug!(
        "first best gear {} has value {}",
        best.gear(),
        best_value
    );
    best
}

/// Collect every inventory whose total weight is within the budget.
///
/// Gears come back in ascending numeric order. The empty gear weighs 0, so
/// the result always contains at least the empty inventory.
pub fn valid_inventories(catalog: &Catalog, max_grams_weight: u32) -> Vec<Inventory> {
    let combinations = catalog.combinations();
    let mut valid = Vec::new();

    for bits in 0..=combinations {
        let gear = Gear::from_bits(bits);
        if catalog.total_grams_weight(gear) <= max_grams_weight {
            valid.push(Inventory::new(gear));
        }
    }

    debug!(
        "{} of {} gear combinations fit within {} g",
        valid.len(),
        combinations as u64 + 1,
        max_grams_weight
    );
    valid
}

/// The top `k` valid inventories in descending order of total value.
///
/// Sorting is stable, so inventories with equal value stay in ascending
/// gear order.
pub fn best_inventories(catalog: &Catalog, max_grams_weight: u32, k: usize) -> Vec<Inventory> {
    let mut inventories = valid_inventories(catalog, max_grams_weight);
    inventories.sort_by(|a, b| b.total_value(catalog).cmp(&a.total_value(catalog)));
    inventories.truncate(k);
    inventories
}
