//! Contract tests for the shipped accelerator catalog.
//!
//! These pin the literal table contents that launchers depend on.

use std::collections::HashSet;

use accelspec_core::{CatalogViolation, ChipConfig, HostBounds, Platform, TopologyCatalog};

#[test]
fn test_every_entry_is_well_formed() {
    let catalog = TopologyCatalog::new();
    for name in catalog.names() {
        let entry = catalog
            .lookup(name)
            .unwrap_or_else(|| panic!("{name} is listed but not indexed"));
        assert_eq!(entry.platform, Platform::Tpu, "{name}");
        assert!(!entry.topology_name.is_empty(), "{name}");
        assert!(entry.chips_per_host_bounds.is_positive(), "{name}");
        assert!(entry.devices_per_slice > 0, "{name}");
    }
}

#[test]
fn test_names_are_unique() {
    let catalog = TopologyCatalog::new();
    let unique: HashSet<&str> = catalog.names().collect();
    assert_eq!(unique.len(), catalog.len());
    assert_eq!(catalog.len(), 113);
}

#[test]
fn test_shipped_table_has_single_known_discrepancy() {
    // v5p-3072 carries topology 4x12x16 (768 chips) with 1536 devices.
    let violations = TopologyCatalog::new().validate();
    assert_eq!(
        violations,
        vec![CatalogViolation::DeviceCountMismatch {
            name: "v5p-3072".to_string(),
            topology: "v5:4x12x16".to_string(),
            declared: 1536,
            expected: 768,
        }]
    );
}

#[test]
fn test_v4_8() {
    let entry = TopologyCatalog::new().lookup("v4-8").unwrap();
    assert_eq!(entry.platform, Platform::Tpu);
    assert_eq!(entry.topology_name, "v4:2x2x1");
    assert_eq!(entry.chip_config, ChipConfig::Megacore);
    assert_eq!(entry.chips_per_host_bounds, HostBounds(2, 2, 1));
    assert_eq!(entry.devices_per_slice, 4);
}

#[test]
fn test_v5e_16() {
    let entry = TopologyCatalog::new().lookup("v5e-16").unwrap();
    assert_eq!(entry.platform, Platform::Tpu);
    assert_eq!(entry.topology_name, "v5e:4x4");
    assert_eq!(entry.chip_config, ChipConfig::Default);
    assert_eq!(entry.chips_per_host_bounds.as_tuple(), (2, 2, 1));
    assert_eq!(entry.devices_per_slice, 16);
    assert_eq!(entry.hosts_per_slice(), 4);
}

#[test]
fn test_largest_v5p_slice() {
    let entry = TopologyCatalog::new().lookup("v5p-17920").unwrap();
    assert_eq!(entry.topology_name, "v5:16x20x28");
    assert_eq!(entry.devices_per_slice, 8960);
    assert_eq!(entry.tensor_cores(), 17920);
    assert_eq!(entry.hosts_per_slice(), 2240);
}

#[test]
fn test_v5p_uses_v5_topology_generation() {
    let entry = TopologyCatalog::new().lookup("v5p-128").unwrap();
    assert_eq!(entry.topology().unwrap().generation(), "v5");
}

#[test]
fn test_unknown_names_are_absent() {
    let catalog = TopologyCatalog::new();
    for name in ["nonexistent-name", "v4-4", "v5p-8704x", "V5E-16", "v5litepod-16"] {
        assert!(catalog.lookup(name).is_none(), "{name}");
    }
}

#[test]
fn test_repeated_lookups_are_equal() {
    let catalog = TopologyCatalog::new();
    for name in catalog.names() {
        assert_eq!(catalog.lookup(name), catalog.lookup(name));
    }
}

#[test]
fn test_concurrent_readers_see_same_records() {
    let handles: Vec<_> = (0..4)
        .map(|_| {
            std::thread::spawn(|| {
                let catalog = TopologyCatalog::new();
                catalog
                    .names()
                    .map(|name| *catalog.lookup(name).unwrap())
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(results.windows(2).all(|pair| pair[0] == pair[1]));
}
