//! Project tree emission
//!
//! Takes a resolved [`ProjectRequest`] and writes the project directory:
//! the machine configuration, one ROM/annotation pair per ROM index, the
//! default custom annotation file, a sample Z80 source file, a sample tape
//! image, and - for floppy-capable machines - a sample floppy image.
//!
//! Writes are sequential and not transactional; a failure partway through
//! leaves the files written so far in place.

use std::fs;
use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::error::ScaffoldError;
use crate::templates::{
    self, ANN_FILE, ANN_FOLDER, CODE_FILE, DISANN_EXT, FLOPPY_FILE, FLOPPY_FOLDER, ROM_EXT,
    SETTINGS_FOLDER, SPCONF_FILE, SRC_FOLDER, TAPE_FILE, TAPE_FOLDER,
};
use crate::variant::SpectrumType;

/// Default project name offered by the interactive prompt
pub const DEFAULT_PROJECT_NAME: &str = "ZxSpectrum";

/// One scaffolding invocation: everything resolved from arguments and prompts
#[derive(Debug, Clone)]
pub struct ProjectRequest {
    pub name: String,
    pub machine: SpectrumType,
    pub git_init: bool,
}

/// Contents of `.zxspectrum/spconf.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineConfig {
    pub model: String,
    pub edition: String,
}

impl MachineConfig {
    pub fn for_machine(machine: SpectrumType) -> Self {
        let d = machine.descriptor();
        Self {
            model: d.model.to_string(),
            edition: d.edition.to_string(),
        }
    }
}

/// Write the full project tree under `<base_dir>/<request.name>/`
pub fn emit_project(base_dir: &Path, request: &ProjectRequest) -> Result<()> {
    let project_dir = base_dir.join(&request.name);

    write_machine_config(&project_dir, request.machine)?;
    write_rom_files(&project_dir, request.machine)?;
    write_asset(&project_dir.join(ANN_FOLDER).join(ANN_FILE), ANN_FILE)?;
    write_asset(&project_dir.join(SRC_FOLDER).join(CODE_FILE), CODE_FILE)?;
    write_asset(&project_dir.join(TAPE_FOLDER).join(TAPE_FILE), TAPE_FILE)?;

    if request.machine.descriptor().has_floppy {
        write_asset(&project_dir.join(FLOPPY_FOLDER).join(FLOPPY_FILE), FLOPPY_FILE)?;
    }

    Ok(())
}

/// Serialize the model/edition pair to `.zxspectrum/spconf.json`
fn write_machine_config(project_dir: &Path, machine: SpectrumType) -> Result<()> {
    let config = MachineConfig::for_machine(machine);
    let path = project_dir.join(SETTINGS_FOLDER).join(SPCONF_FILE);
    let contents = serde_json::to_string_pretty(&config)?;
    write_file(&path, contents.as_bytes())?;
    Ok(())
}

/// Copy the machine's ROM images and their paired annotation files
///
/// A single-ROM machine uses the bare folder name as the filename stem;
/// multi-ROM machines append `-<index>` for each ROM.
fn write_rom_files(project_dir: &Path, machine: SpectrumType) -> Result<()> {
    let d = machine.descriptor();
    let settings_dir = project_dir.join(SETTINGS_FOLDER);

    for index in 0..d.rom_count {
        let stem = rom_file_stem(d.rom_folder, d.rom_count, index);
        for ext in [ROM_EXT, DISANN_EXT] {
            let file = format!("{}{}", stem, ext);
            let asset = templates::rom_asset_path(d.rom_folder, &file);
            let bytes = templates::template(&asset)?;
            write_file(&settings_dir.join(&file), bytes)?;
        }
    }

    Ok(())
}

/// Filename stem for ROM index `index`, suffixed only for multi-ROM machines
pub fn rom_file_stem(folder: &str, rom_count: usize, index: usize) -> String {
    if rom_count == 1 {
        folder.to_string()
    } else {
        format!("{}-{}", folder, index)
    }
}

/// Copy one top-level template asset to its destination
fn write_asset(dest: &Path, asset: &str) -> Result<()> {
    let bytes = templates::template(asset)?;
    write_file(dest, bytes)?;
    Ok(())
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<(), ScaffoldError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| ScaffoldError::write_failure(parent, e))?;
    }
    fs::write(path, bytes).map_err(|e| ScaffoldError::write_failure(path, e))?;
    Ok(())
}
