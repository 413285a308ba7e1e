//! Consistency checks over a slice table.
//!
//! The shipped table is hand-maintained, so these checks catch typos such
//! as a device count that no longer matches its topology.

use std::collections::HashSet;

use thiserror::Error;

use crate::domain::{
    AcceleratorName, AcceleratorNameError, ChipConfig, SystemCharacteristics, TopologyParseError,
};

/// A single inconsistency found in a slice table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogViolation {
    #[error("Duplicate accelerator name '{name}'")]
    DuplicateName { name: String },

    #[error("Malformed accelerator name '{name}': {source}")]
    MalformedName {
        name: String,
        source: AcceleratorNameError,
    },

    #[error("'{name}' has malformed topology '{topology}': {source}")]
    MalformedTopology {
        name: String,
        topology: String,
        source: TopologyParseError,
    },

    #[error("'{name}' declares {declared} devices but topology '{topology}' has {expected} chips")]
    DeviceCountMismatch {
        name: String,
        topology: String,
        declared: u32,
        expected: u64,
    },

    #[error(
        "'{name}' advertises {advertised} cores but {devices} {chip_config} devices provide {actual}"
    )]
    CoreCountMismatch {
        name: String,
        advertised: u32,
        devices: u32,
        chip_config: ChipConfig,
        actual: u64,
    },

    #[error("'{name}' has a zero chips-per-host bound")]
    EmptyHostBounds { name: String },
}

impl CatalogViolation {
    /// Accelerator name the violation was found on.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::DuplicateName { name }
            | Self::MalformedName { name, .. }
            | Self::MalformedTopology { name, .. }
            | Self::DeviceCountMismatch { name, .. }
            | Self::CoreCountMismatch { name, .. }
            | Self::EmptyHostBounds { name } => name,
        }
    }
}

/// Check every entry of a table and collect all violations.
///
/// Returns an empty vector when the table is consistent. Checks do not
/// short-circuit: an entry with a bad name still has its topology checked.
pub fn validate_entries(entries: &[(&str, SystemCharacteristics)]) -> Vec<CatalogViolation> {
    let mut violations = Vec::new();
    let mut seen = HashSet::with_capacity(entries.len());

    for &(name, characteristics) in entries {
        if !seen.insert(name) {
            violations.push(CatalogViolation::DuplicateName {
                name: name.to_string(),
            });
        }
        check_entry(name, &characteristics, &mut violations);
    }

    for violation in &violations {
        tracing::warn!(name = violation.name(), "{violation}");
    }

    violations
}

fn check_entry(
    name: &str,
    characteristics: &SystemCharacteristics,
    violations: &mut Vec<CatalogViolation>,
) {
    if !characteristics.chips_per_host_bounds.is_positive() {
        violations.push(CatalogViolation::EmptyHostBounds {
            name: name.to_string(),
        });
    }

    match characteristics.topology() {
        Ok(topology) => {
            let expected = topology.chip_count();
            if u64::from(characteristics.devices_per_slice) != expected {
                violations.push(CatalogViolation::DeviceCountMismatch {
                    name: name.to_string(),
                    topology: characteristics.topology_name.to_string(),
                    declared: characteristics.devices_per_slice,
                    expected,
                });
            }
        }
        Err(source) => violations.push(CatalogViolation::MalformedTopology {
            name: name.to_string(),
            topology: characteristics.topology_name.to_string(),
            source,
        }),
    }

    match name.parse::<AcceleratorName>() {
        Ok(parsed) => {
            let actual = characteristics.tensor_cores();
            if u64::from(parsed.cores()) != actual {
                violations.push(CatalogViolation::CoreCountMismatch {
                    name: name.to_string(),
                    advertised: parsed.cores(),
                    devices: characteristics.devices_per_slice,
                    chip_config: characteristics.chip_config,
                    actual,
                });
            }
        }
        Err(source) => violations.push(CatalogViolation::MalformedName {
            name: name.to_string(),
            source,
        }),
    }
}
