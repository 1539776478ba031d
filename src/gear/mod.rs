// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Gear type for representing item subsets as bitsets.
//!
//! A Gear is a compact representation of a subset of the catalog using a
//! bitset, where bit i represents the presence of the belonging with index i.
//!
//! # Examples
//!
//! ```
//! use knapsack_search::gear::Gear;
//!
//! // Create a gear selection
//! let mut gear = Gear::empty();
//! gear.insert(0);  // map
//! gear.insert(2);  // water
//!
//! assert_eq!(gear.len(), 2);
//! assert!(gear.contains(2));
//!
//! // Iterate over item indices in the gear
//! let indices: Vec<u8> = gear.iter().collect();
//! assert_eq!(indices, vec![0, 2]);
//! ```

use crate::catalog::MAX_ITEMS;
use std::fmt;

/// A subset of catalog items represented as a bitset.
///
/// Bit i (counting from LSB) is set if the belonging with index i is
/// selected. This provides O(1) insert, remove, and contains operations.
///
/// Uses u32: the catalog size ceiling ([`MAX_ITEMS`]) keeps the top bit
/// clear, so every valid gear is also a valid loop counter for the
/// exhaustive enumeration in [`crate::search`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Gear(u32);

impl Gear {
    /// Create an empty gear selection.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Create a gear from a raw bit value.
    ///
    /// Useful when enumerating the search space, where gear values are
    /// produced directly by a counter over `0..=catalog.combinations()`.
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// Check whether the belonging with the given index is selected.
    pub fn contains(self, index: u8) -> bool {
        (self.0 >> index) & 1 != 0
    }

    /// Select the belonging with the given index.
    ///
    /// Idempotent: inserting an already-selected index is a no-op.
    pub fn insert(&mut self, index: u8) {
        self.0 |= 1 << index;
    }

    /// Deselect the belonging with the given index.
    ///
    /// Idempotent: removing an absent index is a no-op.
    pub fn remove(&mut self, index: u8) {
        self.0 &= !(1 << index);
    }

    /// Get the number of selected items (population count).
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Check if no items are selected.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Get the underlying bitset value.
    pub fn bits(self) -> u32 {
        self.0
    }

    /// Iterate over the indices of all selected items.
    ///
    /// Indices are yielded in ascending order (0, 1, 2, ...), which is also
    /// catalog order.
    pub fn iter(self) -> impl Iterator<Item = u8> {
        GearIter {
            bits: self.0,
            index: 0,
        }
    }
}

/// Iterator over item indices in a Gear.
struct GearIter {
    bits: u32,
    index: u8,
}

impl Iterator for GearIter {
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        while (self.index as usize) < MAX_ITEMS {
            let idx = self.index;
            self.index += 1;

            if (self.bits >> idx) & 1 != 0 {
                return Some(idx);
            }
        }
        None
    }
}

impl fmt::Display for Gear {
    /// Format a gear as "{0,2,5}" (selected indices in ascending order).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (n, index) in self.iter().enumerate() {
            if n > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", index)?;
        }
        write!(f, "}}")
    }
}
