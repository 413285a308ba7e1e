//! # accelspec-core
//!
//! Static catalog of accelerator slices and their hardware topology.
//!
//! Maps user-facing accelerator names such as `v4-8` or `v5p-128` to fixed
//! metadata: platform, interconnect topology, chip configuration, per-host
//! chip bounds and device count. Training launchers key device mesh layout
//! off these facts.
//!
//! ```rust
//! use accelspec_core::{ChipConfig, TopologyCatalog};
//!
//! let catalog = TopologyCatalog::new();
//! let v4 = catalog.lookup("v4-8").unwrap();
//! assert_eq!(v4.topology_name, "v4:2x2x1");
//! assert_eq!(v4.chip_config, ChipConfig::Megacore);
//! assert!(catalog.lookup("v4-9").is_none());
//! ```
//!
//! ## Modules
//!
//! - [`domain`] - Record and value types (no I/O)
//! - [`catalog`] - The frozen table, lookups and consistency checks
//! - [`settings`] - Adapter-facing settings and validation
#![deny(unused_crate_dependencies)]

pub mod catalog;
pub mod domain;
pub mod settings;

// Re-export commonly used types for convenience
pub use catalog::{
    CatalogError, CatalogViolation, TopologyCatalog, get_system_characteristics, validate_entries,
};
pub use domain::{
    AcceleratorName, AcceleratorNameError, ChipConfig, HostBounds, Platform,
    SystemCharacteristics, Topology, TopologyParseError,
};
pub use settings::{
    DEFAULT_LOG_LEVEL, ENV_FAIL_ON_UNKNOWN, ENV_LOG_LEVEL, ENV_OUTPUT_FORMAT, OutputFormat,
    Settings, SettingsError, validate_settings,
};
