//! The supported ZX Spectrum machine types and their static metadata
//!
//! The set of machines is closed: six variants, one compiled-in descriptor
//! each. A descriptor carries everything the emitter needs - the display
//! name shown in the selection prompt, the model/edition pair written to
//! `spconf.json`, the ROM folder in the template store, how many ROM images
//! the machine has, and whether it takes a floppy drive.

use std::fmt;
use std::str::FromStr;

use crate::error::ScaffoldError;

/// Static metadata for one supported machine type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantDescriptor {
    /// Short key accepted on the command line, e.g. "+3F1"
    pub key: &'static str,
    /// Label shown in the interactive machine-type prompt
    pub display_name: &'static str,
    /// Hardware model name written to spconf.json
    pub model: &'static str,
    /// Hardware edition/region tag written to spconf.json
    pub edition: &'static str,
    /// Template-store folder holding this machine's ROM images
    pub rom_folder: &'static str,
    /// Number of ROM image files to copy
    pub rom_count: usize,
    /// Whether a sample floppy image is emitted
    pub has_floppy: bool,
}

/// One of the six supported ZX Spectrum machine types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpectrumType {
    Spectrum48,
    Spectrum48Ntsc,
    Spectrum128,
    SpectrumP2A,
    SpectrumP3F1,
    SpectrumP3F2,
}

impl SpectrumType {
    /// All supported machine types, in prompt order
    pub const ALL: [SpectrumType; 6] = [
        SpectrumType::Spectrum48,
        SpectrumType::Spectrum48Ntsc,
        SpectrumType::Spectrum128,
        SpectrumType::SpectrumP2A,
        SpectrumType::SpectrumP3F1,
        SpectrumType::SpectrumP3F2,
    ];

    pub fn descriptor(self) -> &'static VariantDescriptor {
        match self {
            SpectrumType::Spectrum48 => &VariantDescriptor {
                key: "48",
                display_name: "Spectrum 48K",
                model: "ZX Spectrum 48K",
                edition: "PAL",
                rom_folder: "ZXSpectrum48",
                rom_count: 1,
                has_floppy: false,
            },
            SpectrumType::Spectrum48Ntsc => &VariantDescriptor {
                key: "48NTSC",
                display_name: "Spectrum 48K, NTSC",
                model: "ZX Spectrum 48K",
                edition: "NTSC",
                rom_folder: "ZXSpectrum48",
                rom_count: 1,
                has_floppy: false,
            },
            SpectrumType::Spectrum128 => &VariantDescriptor {
                key: "128",
                display_name: "Spectrum 128K",
                model: "ZX Spectrum 128K",
                edition: "PAL",
                rom_folder: "ZXSpectrum128",
                rom_count: 2,
                has_floppy: false,
            },
            SpectrumType::SpectrumP2A => &VariantDescriptor {
                key: "+2A",
                display_name: "Spectrum +2A",
                model: "ZX Spectrum +3E",
                edition: "PAL",
                rom_folder: "ZXSpectrumP3E",
                rom_count: 4,
                has_floppy: false,
            },
            SpectrumType::SpectrumP3F1 => &VariantDescriptor {
                key: "+3F1",
                display_name: "Spectrum +3E",
                model: "ZX Spectrum +3E",
                edition: "FLOPPY1",
                rom_folder: "ZXSpectrumP3E",
                rom_count: 4,
                has_floppy: true,
            },
            SpectrumType::SpectrumP3F2 => &VariantDescriptor {
                key: "+3F2",
                display_name: "Spectrum +3E, double FDD",
                model: "ZX Spectrum +3E",
                edition: "FLOPPY2",
                rom_folder: "ZXSpectrumP3E",
                rom_count: 4,
                has_floppy: true,
            },
        }
    }

    pub fn key(self) -> &'static str {
        self.descriptor().key
    }

    pub fn display_name(self) -> &'static str {
        self.descriptor().display_name
    }
}

impl fmt::Display for SpectrumType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for SpectrumType {
    type Err = ScaffoldError;

    /// Resolve a machine-type key, case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_uppercase();
        SpectrumType::ALL
            .into_iter()
            .find(|t| t.key() == key)
            .ok_or_else(|| ScaffoldError::UnknownVariant(s.to_string()))
    }
}
