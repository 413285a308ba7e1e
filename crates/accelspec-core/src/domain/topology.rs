//! Interconnect topology and per-host chip bounds.
//!
//! A topology name such as `v4:2x2x4` encodes the generation tag followed
//! by the chip grid dimensions. Two-dimensional grids (`v5e:8x16`) are used
//! by generations without a third torus axis.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::parse_count;

const MIN_TOPOLOGY_DIMS: usize = 2;
const MAX_TOPOLOGY_DIMS: usize = 3;

/// Errors produced when parsing a topology name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TopologyParseError {
    #[error("Topology name is missing the ':' separator")]
    MissingSeparator,

    #[error("Topology name has an empty generation")]
    EmptyGeneration,

    #[error("Invalid topology dimension '{0}'")]
    InvalidDimension(String),

    #[error("Topology dimensions must be positive")]
    ZeroDimension,

    #[error("Topology must have 2 or 3 dimensions, got {0}")]
    DimensionCount(usize),
}

/// Parsed form of a topology name (`<generation>:<d1>x<d2>[x<d3>]`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Topology {
    generation: String,
    dims: Vec<u32>,
}

impl Topology {
    /// Generation tag (e.g., "v4", "v5e").
    #[must_use]
    pub fn generation(&self) -> &str {
        &self.generation
    }

    /// Grid dimensions in declaration order.
    #[must_use]
    pub fn dims(&self) -> &[u32] {
        &self.dims
    }

    /// Total number of physical chips in the grid.
    #[must_use]
    pub fn chip_count(&self) -> u64 {
        self.dims.iter().map(|&d| u64::from(d)).product()
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.generation)?;
        for (i, dim) in self.dims.iter().enumerate() {
            if i > 0 {
                f.write_str("x")?;
            }
            write!(f, "{dim}")?;
        }
        Ok(())
    }
}

impl FromStr for Topology {
    type Err = TopologyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (generation, grid) = s
            .split_once(':')
            .ok_or(TopologyParseError::MissingSeparator)?;

        if generation.is_empty() {
            return Err(TopologyParseError::EmptyGeneration);
        }

        let dims = grid
            .split('x')
            .map(|part| {
                let dim = parse_count(part)
                    .ok_or_else(|| TopologyParseError::InvalidDimension(part.to_string()))?;
                if dim == 0 {
                    return Err(TopologyParseError::ZeroDimension);
                }
                Ok(dim)
            })
            .collect::<Result<Vec<_>, _>>()?;

        if !(MIN_TOPOLOGY_DIMS..=MAX_TOPOLOGY_DIMS).contains(&dims.len()) {
            return Err(TopologyParseError::DimensionCount(dims.len()));
        }

        Ok(Self {
            generation: generation.to_string(),
            dims,
        })
    }
}

/// Shape of the chip grid attached to a single host.
///
/// Serialized as a three-element array, e.g. `[2, 2, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct HostBounds(pub u32, pub u32, pub u32);

impl HostBounds {
    /// Number of chips attached to one host.
    #[must_use]
    pub const fn chips(&self) -> u32 {
        self.0 * self.1 * self.2
    }

    /// Returns true if every bound is positive.
    #[must_use]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0 && self.1 > 0 && self.2 > 0
    }

    /// The bounds as a tuple.
    #[must_use]
    pub const fn as_tuple(&self) -> (u32, u32, u32) {
        (self.0, self.1, self.2)
    }
}

impl fmt::Display for HostBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.0, self.1, self.2)
    }
}
