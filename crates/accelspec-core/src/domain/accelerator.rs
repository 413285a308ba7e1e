//! User-facing accelerator names.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::parse_count;

/// Errors produced when parsing an accelerator name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AcceleratorNameError {
    #[error("Accelerator name is missing the '-' separator")]
    MissingSeparator,

    #[error("Accelerator name has an empty generation")]
    EmptyGeneration,

    #[error("Invalid core count '{0}'")]
    InvalidCoreCount(String),
}

/// Parsed form of an accelerator name such as `v5p-128`.
///
/// The numeric suffix counts TensorCores, not chips or devices.
/// Catalog lookups never go through this type; it exists for
/// filtering and consistency checks.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct AcceleratorName {
    generation: String,
    cores: u32,
}

impl AcceleratorName {
    /// Generation prefix (e.g., "v4", "v5p", "v5e").
    #[must_use]
    pub fn generation(&self) -> &str {
        &self.generation
    }

    /// TensorCore count advertised by the name.
    #[must_use]
    pub const fn cores(&self) -> u32 {
        self.cores
    }
}

impl fmt::Display for AcceleratorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.generation, self.cores)
    }
}

impl FromStr for AcceleratorName {
    type Err = AcceleratorNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (generation, cores) = s
            .rsplit_once('-')
            .ok_or(AcceleratorNameError::MissingSeparator)?;

        if generation.is_empty() {
            return Err(AcceleratorNameError::EmptyGeneration);
        }

        let cores = parse_count(cores)
            .filter(|&c| c > 0)
            .ok_or_else(|| AcceleratorNameError::InvalidCoreCount(cores.to_string()))?;

        Ok(Self {
            generation: generation.to_string(),
            cores,
        })
    }
}
