//! Literal accelerator slice table.
//!
//! When adding or changing an entry here, update the matching
//! user-facing name table in the cluster provisioning tool as well.
//! The two lists are kept in lockstep by hand.

use crate::domain::{ChipConfig, HostBounds, Platform, SystemCharacteristics};

/// Chip grid of a single TPU VM host.
const HOST_2X2X1: HostBounds = HostBounds(2, 2, 1);

const fn tpu(
    topology_name: &'static str,
    chip_config: ChipConfig,
    chips_per_host_bounds: HostBounds,
    devices_per_slice: u32,
) -> SystemCharacteristics {
    SystemCharacteristics::new(
        Platform::Tpu,
        topology_name,
        chip_config,
        chips_per_host_bounds,
        devices_per_slice,
    )
}

/// Every known slice, keyed by accelerator name.
///
/// Grouped by generation, each group ascending by size.
pub(crate) static SLICES: &[(&str, SystemCharacteristics)] = &[
    // v5e
    ("v5e-16", tpu("v5e:4x4", ChipConfig::Default, HOST_2X2X1, 16)),
    ("v5e-32", tpu("v5e:4x8", ChipConfig::Default, HOST_2X2X1, 32)),
    ("v5e-64", tpu("v5e:8x8", ChipConfig::Default, HOST_2X2X1, 64)),
    ("v5e-128", tpu("v5e:8x16", ChipConfig::Default, HOST_2X2X1, 128)),
    ("v5e-256", tpu("v5e:16x16", ChipConfig::Default, HOST_2X2X1, 256)),
    // v4
    ("v4-8", tpu("v4:2x2x1", ChipConfig::Megacore, HOST_2X2X1, 4)),
    ("v4-16", tpu("v4:2x2x2", ChipConfig::Megacore, HOST_2X2X1, 8)),
    ("v4-32", tpu("v4:2x2x4", ChipConfig::Megacore, HOST_2X2X1, 16)),
    ("v4-64", tpu("v4:2x4x4", ChipConfig::Megacore, HOST_2X2X1, 32)),
    ("v4-128", tpu("v4:4x4x4", ChipConfig::Megacore, HOST_2X2X1, 64)),
    ("v4-256", tpu("v4:4x4x8", ChipConfig::Megacore, HOST_2X2X1, 128)),
    ("v4-384", tpu("v4:4x4x12", ChipConfig::Megacore, HOST_2X2X1, 192)),
    ("v4-512", tpu("v4:4x8x8", ChipConfig::Megacore, HOST_2X2X1, 256)),
    ("v4-1024", tpu("v4:8x8x8", ChipConfig::Megacore, HOST_2X2X1, 512)),
    ("v4-1536", tpu("v4:8x8x12", ChipConfig::Megacore, HOST_2X2X1, 768)),
    ("v4-2048", tpu("v4:8x8x16", ChipConfig::Megacore, HOST_2X2X1, 1024)),
    ("v4-4096", tpu("v4:8x16x16", ChipConfig::Megacore, HOST_2X2X1, 2048)),
    // v5p
    ("v5p-8", tpu("v5:2x2x1", ChipConfig::Megacore, HOST_2X2X1, 4)),
    ("v5p-16", tpu("v5:2x2x2", ChipConfig::Megacore, HOST_2X2X1, 8)),
    ("v5p-32", tpu("v5:2x2x4", ChipConfig::Megacore, HOST_2X2X1, 16)),
    ("v5p-64", tpu("v5:2x4x4", ChipConfig::Megacore, HOST_2X2X1, 32)),
    ("v5p-128", tpu("v5:4x4x4", ChipConfig::Megacore, HOST_2X2X1, 64)),
    ("v5p-256", tpu("v5:4x4x8", ChipConfig::Megacore, HOST_2X2X1, 128)),
    ("v5p-384", tpu("v5:4x4x12", ChipConfig::Megacore, HOST_2X2X1, 192)),
    ("v5p-512", tpu("v5:4x8x8", ChipConfig::Megacore, HOST_2X2X1, 256)),
    ("v5p-640", tpu("v5:4x4x20", ChipConfig::Megacore, HOST_2X2X1, 320)),
    ("v5p-768", tpu("v5:4x8x12", ChipConfig::Megacore, HOST_2X2X1, 384)),
    ("v5p-896", tpu("v5:4x4x28", ChipConfig::Megacore, HOST_2X2X1, 448)),
    ("v5p-1024", tpu("v5:8x8x8", ChipConfig::Megacore, HOST_2X2X1, 512)),
    ("v5p-1152", tpu("v5:4x12x12", ChipConfig::Megacore, HOST_2X2X1, 576)),
    ("v5p-1280", tpu("v5:4x8x20", ChipConfig::Megacore, HOST_2X2X1, 640)),
    ("v5p-1408", tpu("v5:4x4x44", ChipConfig::Megacore, HOST_2X2X1, 704)),
    ("v5p-1536", tpu("v5:8x8x12", ChipConfig::Megacore, HOST_2X2X1, 768)),
    ("v5p-1664", tpu("v5:4x4x52", ChipConfig::Megacore, HOST_2X2X1, 832)),
    ("v5p-1792", tpu("v5:4x8x28", ChipConfig::Megacore, HOST_2X2X1, 896)),
    ("v5p-1920", tpu("v5:4x12x20", ChipConfig::Megacore, HOST_2X2X1, 960)),
    ("v5p-2048", tpu("v5:8x8x16", ChipConfig::Megacore, HOST_2X2X1, 1024)),
    ("v5p-2176", tpu("v5:4x4x68", ChipConfig::Megacore, HOST_2X2X1, 1088)),
    ("v5p-2304", tpu("v5:8x12x12", ChipConfig::Megacore, HOST_2X2X1, 1152)),
    ("v5p-2432", tpu("v5:4x4x76", ChipConfig::Megacore, HOST_2X2X1, 1216)),
    ("v5p-2560", tpu("v5:8x8x20", ChipConfig::Megacore, HOST_2X2X1, 1280)),
    ("v5p-2688", tpu("v5:4x12x28", ChipConfig::Megacore, HOST_2X2X1, 1344)),
    ("v5p-2816", tpu("v5:4x8x44", ChipConfig::Megacore, HOST_2X2X1, 1408)),
    ("v5p-2944", tpu("v5:4x4x92", ChipConfig::Megacore, HOST_2X2X1, 1472)),
    ("v5p-3072", tpu("v5:4x12x16", ChipConfig::Megacore, HOST_2X2X1, 1536)),
    ("v5p-3200", tpu("v5:4x20x20", ChipConfig::Megacore, HOST_2X2X1, 1600)),
    ("v5p-3328", tpu("v5:4x8x52", ChipConfig::Megacore, HOST_2X2X1, 1664)),
    ("v5p-3456", tpu("v5:12x12x12", ChipConfig::Megacore, HOST_2X2X1, 1728)),
    ("v5p-3584", tpu("v5:8x8x28", ChipConfig::Megacore, HOST_2X2X1, 1792)),
    ("v5p-3712", tpu("v5:4x4x116", ChipConfig::Megacore, HOST_2X2X1, 1856)),
    ("v5p-3840", tpu("v5:8x12x20", ChipConfig::Megacore, HOST_2X2X1, 1920)),
    ("v5p-3968", tpu("v5:4x4x124", ChipConfig::Megacore, HOST_2X2X1, 1984)),
    ("v5p-4096", tpu("v5:8x16x16", ChipConfig::Megacore, HOST_2X2X1, 2048)),
    ("v5p-4224", tpu("v5:4x12x44", ChipConfig::Megacore, HOST_2X2X1, 2112)),
    ("v5p-4352", tpu("v5:4x8x68", ChipConfig::Megacore, HOST_2X2X1, 2176)),
    ("v5p-4480", tpu("v5:4x20x28", ChipConfig::Megacore, HOST_2X2X1, 2240)),
    ("v5p-4608", tpu("v5:12x12x16", ChipConfig::Megacore, HOST_2X2X1, 2304)),
    ("v5p-4736", tpu("v5:4x4x148", ChipConfig::Megacore, HOST_2X2X1, 2368)),
    ("v5p-4864", tpu("v5:4x8x76", ChipConfig::Megacore, HOST_2X2X1, 2432)),
    ("v5p-4992", tpu("v5:4x12x52", ChipConfig::Megacore, HOST_2X2X1, 2496)),
    ("v5p-5120", tpu("v5:8x16x20", ChipConfig::Megacore, HOST_2X2X1, 2560)),
    ("v5p-5248", tpu("v5:4x4x164", ChipConfig::Megacore, HOST_2X2X1, 2624)),
    ("v5p-5376", tpu("v5:8x12x28", ChipConfig::Megacore, HOST_2X2X1, 2688)),
    ("v5p-5504", tpu("v5:4x4x172", ChipConfig::Megacore, HOST_2X2X1, 2752)),
    ("v5p-5632", tpu("v5:8x8x44", ChipConfig::Megacore, HOST_2X2X1, 2816)),
    ("v5p-5760", tpu("v5:12x12x20", ChipConfig::Megacore, HOST_2X2X1, 2880)),
    ("v5p-5888", tpu("v5:4x8x92", ChipConfig::Megacore, HOST_2X2X1, 2944)),
    ("v5p-6016", tpu("v5:4x4x188", ChipConfig::Megacore, HOST_2X2X1, 3008)),
    ("v5p-6144", tpu("v5:12x16x16", ChipConfig::Megacore, HOST_2X2X1, 3072)),
    ("v5p-6272", tpu("v5:4x28x28", ChipConfig::Megacore, HOST_2X2X1, 3136)),
    ("v5p-6400", tpu("v5:8x20x20", ChipConfig::Megacore, HOST_2X2X1, 3200)),
    ("v5p-6528", tpu("v5:4x12x68", ChipConfig::Megacore, HOST_2X2X1, 3264)),
    ("v5p-6656", tpu("v5:8x8x52", ChipConfig::Megacore, HOST_2X2X1, 3328)),
    ("v5p-6784", tpu("v5:4x4x212", ChipConfig::Megacore, HOST_2X2X1, 3392)),
    ("v5p-6912", tpu("v5:12x12x24", ChipConfig::Megacore, HOST_2X2X1, 3456)),
    ("v5p-7040", tpu("v5:4x20x44", ChipConfig::Megacore, HOST_2X2X1, 3520)),
    ("v5p-7168", tpu("v5:8x16x28", ChipConfig::Megacore, HOST_2X2X1, 3584)),
    ("v5p-7296", tpu("v5:4x12x76", ChipConfig::Megacore, HOST_2X2X1, 3648)),
    ("v5p-7424", tpu("v5:4x8x116", ChipConfig::Megacore, HOST_2X2X1, 3712)),
    ("v5p-7552", tpu("v5:4x4x236", ChipConfig::Megacore, HOST_2X2X1, 3776)),
    ("v5p-7680", tpu("v5:12x16x20", ChipConfig::Megacore, HOST_2X2X1, 3840)),
    ("v5p-7808", tpu("v5:4x4x244", ChipConfig::Megacore, HOST_2X2X1, 3904)),
    ("v5p-7936", tpu("v5:4x8x124", ChipConfig::Megacore, HOST_2X2X1, 3968)),
    ("v5p-8064", tpu("v5:12x12x28", ChipConfig::Megacore, HOST_2X2X1, 4032)),
    ("v5p-8192", tpu("v5:16x16x16", ChipConfig::Megacore, HOST_2X2X1, 4096)),
    ("v5p-8320", tpu("v5:4x20x52", ChipConfig::Megacore, HOST_2X2X1, 4160)),
    ("v5p-8448", tpu("v5:8x12x44", ChipConfig::Megacore, HOST_2X2X1, 4224)),
    ("v5p-8704", tpu("v5:8x8x68", ChipConfig::Megacore, HOST_2X2X1, 4352)),
    ("v5p-8832", tpu("v5:4x12x92", ChipConfig::Megacore, HOST_2X2X1, 4416)),
    ("v5p-8960", tpu("v5:8x20x28", ChipConfig::Megacore, HOST_2X2X1, 4480)),
    ("v5p-9216", tpu("v5:12x16x24", ChipConfig::Megacore, HOST_2X2X1, 4608)),
    ("v5p-9472", tpu("v5:4x8x148", ChipConfig::Megacore, HOST_2X2X1, 4736)),
    ("v5p-9600", tpu("v5:12x20x20", ChipConfig::Megacore, HOST_2X2X1, 4800)),
    ("v5p-9728", tpu("v5:8x8x76", ChipConfig::Megacore, HOST_2X2X1, 4864)),
    ("v5p-9856", tpu("v5:4x28x44", ChipConfig::Megacore, HOST_2X2X1, 4928)),
    ("v5p-9984", tpu("v5:8x12x52", ChipConfig::Megacore, HOST_2X2X1, 4992)),
    ("v5p-10240", tpu("v5:16x16x20", ChipConfig::Megacore, HOST_2X2X1, 5120)),
    ("v5p-10368", tpu("v5:12x12x36", ChipConfig::Megacore, HOST_2X2X1, 5184)),
    ("v5p-10496", tpu("v5:4x8x164", ChipConfig::Megacore, HOST_2X2X1, 5248)),
    ("v5p-10752", tpu("v5:12x16x28", ChipConfig::Megacore, HOST_2X2X1, 5376)),
    ("v5p-10880", tpu("v5:4x20x68", ChipConfig::Megacore, HOST_2X2X1, 5440)),
    ("v5p-11008", tpu("v5:4x8x172", ChipConfig::Megacore, HOST_2X2X1, 5504)),
    ("v5p-11136", tpu("v5:4x12x116", ChipConfig::Megacore, HOST_2X2X1, 5568)),
    ("v5p-11264", tpu("v5:8x16x44", ChipConfig::Megacore, HOST_2X2X1, 5632)),
    ("v5p-11520", tpu("v5:12x20x24", ChipConfig::Megacore, HOST_2X2X1, 5760)),
    ("v5p-11648", tpu("v5:4x28x52", ChipConfig::Megacore, HOST_2X2X1, 5824)),
    ("v5p-11776", tpu("v5:8x8x92", ChipConfig::Megacore, HOST_2X2X1, 5888)),
    ("v5p-11904", tpu("v5:4x12x124", ChipConfig::Megacore, HOST_2X2X1, 5952)),
    ("v5p-12032", tpu("v5:4x8x188", ChipConfig::Megacore, HOST_2X2X1, 6016)),
    ("v5p-12160", tpu("v5:4x20x76", ChipConfig::Megacore, HOST_2X2X1, 6080)),
    ("v5p-12288", tpu("v5:16x16x24", ChipConfig::Megacore, HOST_2X2X1, 6144)),
    ("v5p-13824", tpu("v5:12x24x24", ChipConfig::Megacore, HOST_2X2X1, 6912)),
    ("v5p-17920", tpu("v5:16x20x28", ChipConfig::Megacore, HOST_2X2X1, 8960)),
];
