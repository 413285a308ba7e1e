//! Frozen catalog of accelerator slices.
//!
//! The catalog maps user-facing accelerator names (e.g., "v4-8") to their
//! [`SystemCharacteristics`]. It is constant data: the table is a single
//! `static` slice and the name index is built once on first use, pointing
//! into that same slice, then only read.
//!
//! # Lookup contract
//!
//! - Matching is exact and case-sensitive; input is never normalized.
//! - An unknown name is an ordinary outcome and yields `None`.
//! - Use [`TopologyCatalog::require`] when absence should be an error.

mod table;
pub mod validate;

use std::collections::HashMap;
use std::sync::LazyLock;

use thiserror::Error;

use crate::domain::{AcceleratorName, SystemCharacteristics};
use table::SLICES;

pub use validate::{CatalogViolation, validate_entries};

static INDEX: LazyLock<HashMap<&'static str, &'static SystemCharacteristics>> =
    LazyLock::new(|| SLICES.iter().map(|(name, entry)| (*name, entry)).collect());

/// Errors returned by catalog operations that treat absence as fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Unknown accelerator '{name}'")]
    NotFound { name: String },
}

/// Read-only handle to the accelerator slice table.
///
/// Zero-sized and `Copy`; every handle sees the same process-wide data.
#[derive(Debug, Clone, Copy, Default)]
pub struct TopologyCatalog;

impl TopologyCatalog {
    /// Create a handle to the shipped catalog.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Look up an accelerator by exact name.
    #[must_use]
    pub fn lookup(self, name: &str) -> Option<&'static SystemCharacteristics> {
        let found = INDEX.get(name).copied();
        if found.is_none() {
            tracing::debug!(name, "accelerator not in catalog");
        }
        found
    }

    /// Look up an accelerator, failing with [`CatalogError::NotFound`].
    pub fn require(self, name: &str) -> Result<&'static SystemCharacteristics, CatalogError> {
        self.lookup(name).ok_or_else(|| CatalogError::NotFound {
            name: name.to_string(),
        })
    }

    /// Returns true if the name is a known accelerator.
    #[must_use]
    pub fn contains(self, name: &str) -> bool {
        INDEX.contains_key(name)
    }

    /// Number of entries in the catalog.
    #[must_use]
    pub fn len(self) -> usize {
        SLICES.len()
    }

    /// Returns true if the catalog has no entries.
    #[must_use]
    pub fn is_empty(self) -> bool {
        SLICES.is_empty()
    }

    /// All entries in table order.
    pub fn entries(self) -> impl Iterator<Item = (&'static str, &'static SystemCharacteristics)> {
        SLICES.iter().map(|(name, entry)| (*name, entry))
    }

    /// All accelerator names in table order.
    pub fn names(self) -> impl Iterator<Item = &'static str> {
        SLICES.iter().map(|(name, _)| *name)
    }

    /// Entries whose name belongs to the given generation (e.g., "v5p").
    ///
    /// The generation is compared exactly, like lookups.
    pub fn by_generation(
        self,
        generation: &str,
    ) -> impl Iterator<Item = (&'static str, &'static SystemCharacteristics)> + '_ {
        self.entries().filter(move |(name, _)| {
            name.parse::<AcceleratorName>()
                .is_ok_and(|parsed| parsed.generation() == generation)
        })
    }

    /// Distinct generations in the order they first appear.
    #[must_use]
    pub fn generations(self) -> Vec<String> {
        let mut generations: Vec<String> = Vec::new();
        for name in self.names() {
            if let Ok(parsed) = name.parse::<AcceleratorName>()
                && !generations.iter().any(|g| g == parsed.generation())
            {
                generations.push(parsed.generation().to_string());
            }
        }
        generations
    }

    /// Check the shipped table against its invariants.
    #[must_use]
    pub fn validate(self) -> Vec<CatalogViolation> {
        validate_entries(SLICES)
    }
}

/// Look up an accelerator in the shipped catalog.
///
/// Shorthand for `TopologyCatalog::new().lookup(name)`.
#[must_use]
pub fn get_system_characteristics(name: &str) -> Option<&'static SystemCharacteristics> {
    TopologyCatalog::new().lookup(name)
}
