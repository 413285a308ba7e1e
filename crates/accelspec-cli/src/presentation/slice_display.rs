//! Rendering of catalog entries.
//!
//! Text output is for people; JSON output keeps the launcher field names
//! and adds the derived counts alongside.

use accelspec_core::SystemCharacteristics;
use serde::Serialize;

use super::tables::{separator, truncate_string};

const TABLE_WIDTH: usize = 72;

/// Serializable view of one entry with its derived counts.
#[derive(Debug, Serialize)]
pub struct SliceView<'a> {
    pub name: &'a str,
    #[serde(flatten)]
    pub characteristics: &'a SystemCharacteristics,
    pub chips_per_host: u32,
    pub hosts_per_slice: u32,
    pub tensor_cores: u64,
}

impl<'a> SliceView<'a> {
    pub const fn new(name: &'a str, characteristics: &'a SystemCharacteristics) -> Self {
        Self {
            name,
            characteristics,
            chips_per_host: characteristics.chips_per_host(),
            hosts_per_slice: characteristics.hosts_per_slice(),
            tensor_cores: characteristics.tensor_cores(),
        }
    }
}

/// Multi-line description of a single entry.
pub fn format_slice_details(name: &str, characteristics: &SystemCharacteristics) -> String {
    let view = SliceView::new(name, characteristics);
    [
        format!("Accelerator:     {}", view.name),
        format!("Platform:        {}", characteristics.platform),
        format!("Topology:        {}", characteristics.topology_name),
        format!("Chip config:     {}", characteristics.chip_config),
        format!("Chips per host:  {}", characteristics.chips_per_host_bounds),
        format!("Devices:         {}", characteristics.devices_per_slice),
        format!("Hosts:           {}", view.hosts_per_slice),
        format!("TensorCores:     {}", view.tensor_cores),
    ]
    .join("\n")
}

/// Table of entries, one per row, with a header.
pub fn format_slice_table<'a, I>(entries: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a SystemCharacteristics)>,
{
    let mut lines = vec![
        format!(
            "{:<12} {:<14} {:<9} {:<11} {:>8} {:>6}",
            "Name", "Topology", "Config", "Host grid", "Devices", "Hosts"
        ),
        separator(TABLE_WIDTH),
    ];

    for (name, characteristics) in entries {
        lines.push(format!(
            "{:<12} {:<14} {:<9} {:<11} {:>8} {:>6}",
            truncate_string(name, 12),
            truncate_string(characteristics.topology_name, 14),
            characteristics.chip_config,
            characteristics.chips_per_host_bounds.to_string(),
            characteristics.devices_per_slice,
            characteristics.hosts_per_slice(),
        ));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use accelspec_core::TopologyCatalog;

    #[test]
    fn test_details_include_every_field() {
        let entry = TopologyCatalog::new().lookup("v4-8").unwrap();
        let text = format_slice_details("v4-8", entry);
        assert!(text.contains("Accelerator:     v4-8"));
        assert!(text.contains("Platform:        tpu"));
        assert!(text.contains("Topology:        v4:2x2x1"));
        assert!(text.contains("Chip config:     megacore"));
        assert!(text.contains("Chips per host:  (2, 2, 1)"));
        assert!(text.contains("Devices:         4"));
        assert!(text.contains("TensorCores:     8"));
    }

    #[test]
    fn test_view_serializes_flat() {
        let entry = TopologyCatalog::new().lookup("v5e-16").unwrap();
        let json = serde_json::to_value(SliceView::new("v5e-16", entry)).unwrap();
        assert_eq!(json["name"], "v5e-16");
        assert_eq!(json["topology_name"], "v5e:4x4");
        assert_eq!(json["chip_config_name"], "default");
        assert_eq!(json["devices_per_slice"], 16);
        assert_eq!(json["hosts_per_slice"], 4);
        assert_eq!(json["tensor_cores"], 16);
    }

    #[test]
    fn test_table_has_header_and_rows() {
        let catalog = TopologyCatalog::new();
        let table = format_slice_table(catalog.by_generation("v5e"));
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 2 + 5);
        assert!(lines[0].starts_with("Name"));
        assert!(lines[2].starts_with("v5e-16"));
    }
}
