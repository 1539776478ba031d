// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Item catalog: the immutable table of belongings the search draws from.
//!
//! The catalog is built once before any search runs and never mutated
//! afterwards. Every enumeration routine takes it by shared reference, so
//! independent searches (including concurrently running tests) cannot
//! interfere with each other.
//!
//! # Invariant
//!
//! `catalog.get(i).index() == i` for every position `i`. The bitmask
//! representation in [`crate::gear`] relies on this: bit `i` of a gear means
//! "the belonging at catalog position `i`", so a duplicate or out-of-order
//! index would silently corrupt the bit-to-item mapping. [`Catalog::new`]
//! asserts the invariant at construction; nothing re-checks it later.

use crate::gear::Gear;
use std::fmt;

/// Structural ceiling on catalog size.
///
/// One bit per item in a u32 gear, keeping the top bit clear so a gear value
/// never collides with the sign bit of any narrower signed interpretation.
pub const MAX_ITEMS: usize = 31;

/// A single item that can be packed: a catalog entry with weight and value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Belonging {
    index: u8,
    name: &'static str,
    grams_weight: u32,
    value: u32,
}

impl Belonging {
    /// Create a new belonging.
    ///
    /// # Panics
    ///
    /// Panics if `index >= MAX_ITEMS`.
    pub fn new(index: u8, name: &'static str, grams_weight: u32, value: u32) -> Self {
        assert!(
            (index as usize) < MAX_ITEMS,
            "Belonging index out of range: {}",
            index
        );
        Self {
            index,
            name,
            grams_weight,
            value,
        }
    }

    /// The catalog position of this belonging, which is also its bit in a gear.
    pub fn index(&self) -> u8 {
        self.index
    }

    /// The item name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Weight in grams.
    pub fn grams_weight(&self) -> u32 {
        self.grams_weight
    }

    /// Value (unitless).
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Check whether this belonging is selected in the given gear.
    pub fn is_in(&self, gear: Gear) -> bool {
        gear.contains(self.index)
    }

    /// Return the gear with this belonging selected.
    ///
    /// Idempotent: adding a belonging already in the gear changes nothing.
    pub fn add_to(&self, gear: Gear) -> Gear {
        let mut gear = gear;
        gear.insert(self.index);
        gear
    }

    /// Return the gear with this belonging deselected. Idempotent.
    pub fn remove_from(&self, gear: Gear) -> Gear {
        let mut gear = gear;
        gear.remove(self.index);
        gear
    }

    /// This belonging's weight if it is in the gear, else 0.
    pub fn grams_weight_in(&self, gear: Gear) -> u32 {
        if self.is_in(gear) {
            self.grams_weight
        } else {
            0
        }
    }

    /// This belonging's value if it is in the gear, else 0.
    pub fn value_in(&self, gear: Gear) -> u32 {
        if self.is_in(gear) {
            self.value
        } else {
            0
        }
    }
}

impl fmt::Display for Belonging {
    /// Format a belonging as "map, 90 g, valued at 150".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {} g, valued at {}",
            self.name, self.grams_weight, self.value
        )
    }
}

/// The ordered, read-only collection of belongings.
#[derive(Debug, Clone)]
pub struct Catalog {
    belongings: Vec<Belonging>,
}

impl Catalog {
    /// Create a catalog from an ordered list of belongings.
    ///
    /// # Panics
    ///
    /// Panics if the list has more than [`MAX_ITEMS`] entries, or if any
    /// belonging's index does not equal its position in the list.
    pub fn new(belongings: Vec<Belonging>) -> Self {
        match Self::try_new(belongings) {
            Some(catalog) => catalog,
            None => panic!("Catalog indices must be contiguous from 0 and fit in the gear width"),
        }
    }

    /// Try to create a catalog, returning None if the size or the
    /// position-equals-index invariant is violated.
    pub fn try_new(belongings: Vec<Belonging>) -> Option<Self> {
        if belongings.len() > MAX_ITEMS {
            return None;
        }
        for (position, belonging) in belongings.iter().enumerate() {
            if belonging.index() as usize != position {
                return None;
            }
        }
        Some(Self { belongings })
    }

    /// The built-in 15-item sample catalog.
    pub fn sample() -> Self {
        Self::new(vec![
            Belonging::new(0, "map", 90, 150),
            Belonging::new(1, "compass", 130, 35),
            Belonging::new(2, "water", 1530, 300),
            Belonging::new(3, "Gold bar", 3000, 130),
            Belonging::new(4, "sandwich", 500, 160),
            Belonging::new(5, "glucose", 150, 60),
            Belonging::new(6, "tin", 680, 45),
            Belonging::new(7, "banana", 270, 60),
            Belonging::new(8, "apple", 390, 40),
            Belonging::new(9, "cheese", 230, 30),
            Belonging::new(10, "beer", 620, 10),
            Belonging::new(11, "suntan cream", 110, 70),
            Belonging::new(12, "camera", 320, 30),
            Belonging::new(13, "T-shirt", 240, 15),
            Belonging::new(14, "trousers", 480, 10),
        ])
    }

    /// Number of belongings in the catalog.
    pub fn len(&self) -> usize {
        self.belongings.len()
    }

    /// Whether the catalog has no belongings.
    pub fn is_empty(&self) -> bool {
        self.belongings.is_empty()
    }

    /// The belonging at the given catalog position.
    pub fn get(&self, index: usize) -> &Belonging {
        &self.belongings[index]
    }

    /// Iterate over all belongings in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Belonging> {
        self.belongings.iter()
    }

    /// The highest gear value: `2^len - 1`, every item selected.
    ///
    /// The exhaustive search loops over `0..=combinations()`, visiting each
    /// of the `2^len` subsets exactly once.
    pub fn combinations(&self) -> u32 {
        (1u32 << self.belongings.len()) - 1
    }

    /// Total weight in grams of the belongings selected by `gear`.
    ///
    /// Pure and O(len); the empty gear weighs 0.
    pub fn total_grams_weight(&self, gear: Gear) -> u32 {
        self.belongings
            .iter()
            .map(|belonging| belonging.grams_weight_in(gear))
            .sum()
    }

    /// Total value of the belongings selected by `gear`.
    pub fn total_value(&self, gear: Gear) -> u32 {
        self.belongings
            .iter()
            .map(|belonging| belonging.value_in(gear))
            .sum()
    }
}
