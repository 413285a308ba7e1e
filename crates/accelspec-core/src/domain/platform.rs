//! Accelerator platform and per-chip core configuration.
//!
//! Pure data types with no I/O dependencies.

use serde::Serialize;
use std::fmt;

/// Accelerator family a slice belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Tensor Processing Unit.
    Tpu,
}

impl Platform {
    /// Get the canonical string tag (e.g., "tpu").
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Tpu => "tpu",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// How the TensorCores of a physical chip are exposed to the host.
///
/// The serialized form matches the `chip_config_name` tag used by the
/// training launcher (`"megacore"` or `"default"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChipConfig {
    /// Both TensorCores of a chip are fused into a single device.
    Megacore,
    /// One TensorCore per chip, exposed as one device.
    Default,
}

impl ChipConfig {
    /// Get the canonical string tag.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Megacore => "megacore",
            Self::Default => "default",
        }
    }

    /// Number of TensorCores backing each physical chip.
    ///
    /// Accelerator names count cores, so a megacore `v4-8` slice has
    /// eight cores on four chips.
    #[must_use]
    pub const fn cores_per_chip(&self) -> u32 {
        match self {
            Self::Megacore => 2,
            Self::Default => 1,
        }
    }
}

impl fmt::Display for ChipConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
