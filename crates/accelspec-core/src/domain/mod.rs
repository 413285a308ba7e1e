//! Domain types for accelerator slices.
//!
//! These are pure data types with no infrastructure dependencies.

pub mod accelerator;
pub mod characteristics;
pub mod platform;
pub mod topology;

pub use accelerator::{AcceleratorName, AcceleratorNameError};
pub use characteristics::SystemCharacteristics;
pub use platform::{ChipConfig, Platform};
pub use topology::{HostBounds, Topology, TopologyParseError};

/// Parse a count written in canonical decimal form.
///
/// Only a non-empty run of ASCII digits without a leading zero is accepted
/// (`"0"` itself is allowed), so every accepted string prints back unchanged.
/// Signs, whitespace and padding zeros are rejected.
pub(crate) fn parse_count(s: &str) -> Option<u32> {
    let canonical = !s.is_empty()
        && s.bytes().all(|b| b.is_ascii_digit())
        && (s == "0" || !s.starts_with('0'));
    if canonical { s.parse().ok() } else { None }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_count_accepts_canonical_digits() {
        assert_eq!(parse_count("0"), Some(0));
        assert_eq!(parse_count("8"), Some(8));
        assert_eq!(parse_count("17920"), Some(17920));
    }

    #[test]
    fn test_parse_count_rejects_non_canonical_forms() {
        for input in ["", "+8", "-8", "08", "00", " 8", "8 ", "8\n", "1_000", "99999999999"] {
            assert_eq!(parse_count(input), None, "{input:?}");
        }
    }
}
