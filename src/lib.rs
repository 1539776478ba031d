// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Brute-force 0/1 knapsack over bitmask-encoded inventories.
//!
//! Given a fixed catalog of items, each with a weight in grams and a value,
//! find the subset(s) maximizing total value under a weight budget by
//! exhaustively enumerating every subset.
//!
//! # Architecture
//!
//! Two tiers, the immutable one feeding the derived one:
//!
//! ## Tier 1: Catalog (Immutable)
//!
//! The ordered item table, built once and never mutated:
//! - [`catalog::Belonging`] - one item: index, name, weight, value
//! - [`catalog::Catalog`] - the table, with the position-equals-index
//!   invariant the bitmask representation depends on
//!
//! ## Tier 2: Search (Derived)
//!
//! Pure functions of (catalog, gear):
//! - [`gear::Gear`] - a subset of the catalog as a u32 bitset
//! - [`search::Inventory`] - a gear with on-demand weight/value totals
//! - [`search::first_best`], [`search::valid_inventories`],
//!   [`search::best_inventories`] - the enumeration and ranking routines
//!
//! # Search Algorithm
//!
//! Every subset of an N-item catalog is a gear value in `0..2^N`, so the
//! search is a single ascending walk over that integer range, filtering by
//! total weight and ranking by total value. O(2^N * N), exhaustive by
//! design: N is small and the naive walk's behavior (ascending order,
//! strict-improvement tie-break) is the contract, not an accident to be
//! optimized away.

pub mod catalog;
pub mod gear;
pub mod search;

// Re-export commonly used types
pub use catalog::{Belonging, Catalog};
pub use gear::Gear;
pub use search::Inventory;
