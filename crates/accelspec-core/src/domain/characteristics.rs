//! Hardware characteristics of a named accelerator slice.

use serde::Serialize;

use super::platform::{ChipConfig, Platform};
use super::topology::{HostBounds, Topology, TopologyParseError};

/// Fixed topology metadata for one accelerator slice.
///
/// Records are constant data: every catalog entry is built in a `const`
/// context and handed out by shared reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SystemCharacteristics {
    /// Accelerator family.
    pub platform: Platform,
    /// Interconnect topology name (e.g., "v4:2x2x1").
    pub topology_name: &'static str,
    /// Whether chips expose fused megacore devices.
    #[serde(rename = "chip_config_name")]
    pub chip_config: ChipConfig,
    /// Chip grid attached to each host.
    pub chips_per_host_bounds: HostBounds,
    /// Addressable devices in the whole slice.
    pub devices_per_slice: u32,
}

impl SystemCharacteristics {
    /// Create a new record.
    #[must_use]
    pub const fn new(
        platform: Platform,
        topology_name: &'static str,
        chip_config: ChipConfig,
        chips_per_host_bounds: HostBounds,
        devices_per_slice: u32,
    ) -> Self {
        Self {
            platform,
            topology_name,
            chip_config,
            chips_per_host_bounds,
            devices_per_slice,
        }
    }

    /// Parse the topology name into its generation and grid dimensions.
    pub fn topology(&self) -> Result<Topology, TopologyParseError> {
        self.topology_name.parse()
    }

    /// Number of chips attached to a single host.
    #[must_use]
    pub const fn chips_per_host(&self) -> u32 {
        self.chips_per_host_bounds.chips()
    }

    /// Number of hosts needed to serve every device in the slice.
    ///
    /// Partial hosts round up. Returns 0 if the host bounds are empty.
    #[must_use]
    pub const fn hosts_per_slice(&self) -> u32 {
        let per_host = self.chips_per_host();
        if per_host == 0 {
            return 0;
        }
        self.devices_per_slice.div_ceil(per_host)
    }

    /// Total TensorCores backing the slice's devices.
    #[must_use]
    pub const fn tensor_cores(&self) -> u64 {
        self.devices_per_slice as u64 * self.chip_config.cores_per_chip() as u64
    }
}
