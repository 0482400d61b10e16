//! Embedded template store
//!
//! Every asset a generated project can contain is compiled into the binary
//! from `resources/templates/`. The store is keyed by the asset's path
//! relative to that folder; ROM images and their paired annotation files
//! live under `roms/<folder>/`, everything else at the top level. Assets
//! are opaque blobs, the emitter never looks inside them.

use crate::error::ScaffoldError;

pub const SETTINGS_FOLDER: &str = ".zxspectrum";
pub const ROMS_FOLDER: &str = "roms";
pub const ANN_FOLDER: &str = "annotations";
pub const SRC_FOLDER: &str = "src";
pub const TAPE_FOLDER: &str = "tape";
pub const FLOPPY_FOLDER: &str = "floppy";

pub const SPCONF_FILE: &str = "spconf.json";
pub const ANN_FILE: &str = "annotations.disann";
pub const CODE_FILE: &str = "code.z80asm";
pub const TAPE_FILE: &str = "welcome.tzx";
pub const FLOPPY_FILE: &str = "floppy.vfdd";
pub const ROM_EXT: &str = ".rom";
pub const DISANN_EXT: &str = ".disann";

static TEMPLATES: &[(&str, &[u8])] = &[
    (
        "roms/ZXSpectrum48/ZXSpectrum48.rom",
        include_bytes!("../resources/templates/roms/ZXSpectrum48/ZXSpectrum48.rom"),
    ),
    (
        "roms/ZXSpectrum48/ZXSpectrum48.disann",
        include_bytes!("../resources/templates/roms/ZXSpectrum48/ZXSpectrum48.disann"),
    ),
    (
        "roms/ZXSpectrum128/ZXSpectrum128-0.rom",
        include_bytes!("../resources/templates/roms/ZXSpectrum128/ZXSpectrum128-0.rom"),
    ),
    (
        "roms/ZXSpectrum128/ZXSpectrum128-0.disann",
        include_bytes!("../resources/templates/roms/ZXSpectrum128/ZXSpectrum128-0.disann"),
    ),
    (
        "roms/ZXSpectrum128/ZXSpectrum128-1.rom",
        include_bytes!("../resources/templates/roms/ZXSpectrum128/ZXSpectrum128-1.rom"),
    ),
    (
        "roms/ZXSpectrum128/ZXSpectrum128-1.disann",
        include_bytes!("../resources/templates/roms/ZXSpectrum128/ZXSpectrum128-1.disann"),
    ),
    (
        "roms/ZXSpectrumP3E/ZXSpectrumP3E-0.rom",
        include_bytes!("../resources/templates/roms/ZXSpectrumP3E/ZXSpectrumP3E-0.rom"),
    ),
    (
        "roms/ZXSpectrumP3E/ZXSpectrumP3E-0.disann",
        include_bytes!("../resources/templates/roms/ZXSpectrumP3E/ZXSpectrumP3E-0.disann"),
    ),
    (
        "roms/ZXSpectrumP3E/ZXSpectrumP3E-1.rom",
        include_bytes!("../resources/templates/roms/ZXSpectrumP3E/ZXSpectrumP3E-1.rom"),
    ),
    (
        "roms/ZXSpectrumP3E/ZXSpectrumP3E-1.disann",
        include_bytes!("../resources/templates/roms/ZXSpectrumP3E/ZXSpectrumP3E-1.disann"),
    ),
    (
        "roms/ZXSpectrumP3E/ZXSpectrumP3E-2.rom",
        include_bytes!("../resources/templates/roms/ZXSpectrumP3E/ZXSpectrumP3E-2.rom"),
    ),
    (
        "roms/ZXSpectrumP3E/ZXSpectrumP3E-2.disann",
        include_bytes!("../resources/templates/roms/ZXSpectrumP3E/ZXSpectrumP3E-2.disann"),
    ),
    (
        "roms/ZXSpectrumP3E/ZXSpectrumP3E-3.rom",
        include_bytes!("../resources/templates/roms/ZXSpectrumP3E/ZXSpectrumP3E-3.rom"),
    ),
    (
        "roms/ZXSpectrumP3E/ZXSpectrumP3E-3.disann",
        include_bytes!("../resources/templates/roms/ZXSpectrumP3E/ZXSpectrumP3E-3.disann"),
    ),
    (
        "annotations.disann",
        include_bytes!("../resources/templates/annotations.disann"),
    ),
    (
        "code.z80asm",
        include_bytes!("../resources/templates/code.z80asm"),
    ),
    (
        "welcome.tzx",
        include_bytes!("../resources/templates/welcome.tzx"),
    ),
    (
        "floppy.vfdd",
        include_bytes!("../resources/templates/floppy.vfdd"),
    ),
];

/// Look up a template asset by its store path
pub fn template(path: &str) -> Result<&'static [u8], ScaffoldError> {
    TEMPLATES
        .iter()
        .find(|(key, _)| *key == path)
        .map(|(_, bytes)| *bytes)
        .ok_or_else(|| ScaffoldError::TemplateMissing(path.to_string()))
}

/// Store path of a ROM-folder asset, e.g. `roms/ZXSpectrum128/ZXSpectrum128-0.rom`
pub fn rom_asset_path(folder: &str, file: &str) -> String {
    format!("{}/{}/{}", ROMS_FOLDER, folder, file)
}
