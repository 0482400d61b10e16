//! End-to-end project generation scenarios
//!
//! Drives the library's emitter against a scratch directory and checks the
//! exact file set each machine type produces.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use spectgen::emitter::{emit_project, MachineConfig, ProjectRequest};
use spectgen::variant::SpectrumType;

fn generate(machine: SpectrumType) -> TempDir {
    let tmp = TempDir::new().unwrap();
    let request = ProjectRequest {
        name: "ZxSpectrum".to_string(),
        machine,
        git_init: false,
    };
    emit_project(tmp.path(), &request).unwrap();
    tmp
}

fn assert_files(root: &Path, files: &[&str]) {
    for file in files {
        assert!(root.join(file).is_file(), "expected file {}", file);
    }
}

#[test]
fn spectrum_48_files_generated() {
    let tmp = generate(SpectrumType::Spectrum48);
    let project = tmp.path().join("ZxSpectrum");
    assert_files(
        &project,
        &[
            ".zxspectrum/spconf.json",
            ".zxspectrum/ZXSpectrum48.rom",
            ".zxspectrum/ZXSpectrum48.disann",
            "tape/welcome.tzx",
            "src/code.z80asm",
            "annotations/annotations.disann",
        ],
    );
    assert!(!project.join("floppy").exists());
    // single-ROM machine uses no index suffix
    assert!(!project.join(".zxspectrum/ZXSpectrum48-0.rom").exists());
}

#[test]
fn spectrum_128_files_generated() {
    let tmp = generate(SpectrumType::Spectrum128);
    let project = tmp.path().join("ZxSpectrum");
    assert_files(
        &project,
        &[
            ".zxspectrum/spconf.json",
            ".zxspectrum/ZXSpectrum128-0.rom",
            ".zxspectrum/ZXSpectrum128-0.disann",
            ".zxspectrum/ZXSpectrum128-1.rom",
            ".zxspectrum/ZXSpectrum128-1.disann",
            "tape/welcome.tzx",
            "src/code.z80asm",
            "annotations/annotations.disann",
        ],
    );
    assert!(!project.join("floppy").exists());
    assert!(!project.join(".zxspectrum/ZXSpectrum128.rom").exists());
}

#[test]
fn spectrum_plus2a_files_generated() {
    let tmp = generate(SpectrumType::SpectrumP2A);
    let project = tmp.path().join("ZxSpectrum");
    for i in 0..4 {
        assert_files(
            &project,
            &[
                &format!(".zxspectrum/ZXSpectrumP3E-{}.rom", i),
                &format!(".zxspectrum/ZXSpectrumP3E-{}.disann", i),
            ],
        );
    }
    // +2A has the +3E ROM set but no floppy drive
    assert!(!project.join("floppy").exists());
}

#[test]
fn spectrum_plus3_single_floppy_files_generated() {
    let tmp = generate(SpectrumType::SpectrumP3F1);
    let project = tmp.path().join("ZxSpectrum");
    for i in 0..4 {
        assert_files(
            &project,
            &[
                &format!(".zxspectrum/ZXSpectrumP3E-{}.rom", i),
                &format!(".zxspectrum/ZXSpectrumP3E-{}.disann", i),
            ],
        );
    }
    assert_files(&project, &["floppy/floppy.vfdd"]);
}

#[test]
fn spectrum_plus3_double_floppy_files_generated() {
    let tmp = generate(SpectrumType::SpectrumP3F2);
    let project = tmp.path().join("ZxSpectrum");
    assert_files(
        &project,
        &[
            ".zxspectrum/spconf.json",
            ".zxspectrum/ZXSpectrumP3E-0.rom",
            ".zxspectrum/ZXSpectrumP3E-3.disann",
            "floppy/floppy.vfdd",
        ],
    );
}

#[test]
fn emitted_file_counts_match_descriptor() {
    for machine in SpectrumType::ALL {
        let tmp = generate(machine);
        let settings = tmp.path().join("ZxSpectrum/.zxspectrum");
        let d = machine.descriptor();

        let mut roms = 0;
        let mut anns = 0;
        for entry in fs::read_dir(&settings).unwrap() {
            let name = entry.unwrap().file_name();
            let name = name.to_string_lossy().to_string();
            if name.ends_with(".rom") {
                roms += 1;
            } else if name.ends_with(".disann") {
                anns += 1;
            }
        }
        assert_eq!(roms, d.rom_count, "{} ROM count", d.key);
        assert_eq!(anns, d.rom_count, "{} annotation count", d.key);
        assert_eq!(
            tmp.path().join("ZxSpectrum/floppy/floppy.vfdd").is_file(),
            d.has_floppy,
            "{} floppy",
            d.key
        );
    }
}

#[test]
fn spconf_round_trips_model_and_edition() {
    let tmp = generate(SpectrumType::Spectrum48Ntsc);
    let raw = fs::read_to_string(tmp.path().join("ZxSpectrum/.zxspectrum/spconf.json")).unwrap();
    let config: MachineConfig = serde_json::from_str(&raw).unwrap();
    assert_eq!(config.model, "ZX Spectrum 48K");
    assert_eq!(config.edition, "NTSC");
}

#[test]
fn project_name_becomes_root_folder() {
    let tmp = TempDir::new().unwrap();
    let request = ProjectRequest {
        name: "my-demo".to_string(),
        machine: SpectrumType::Spectrum48,
        git_init: false,
    };
    emit_project(tmp.path(), &request).unwrap();
    assert!(tmp.path().join("my-demo/.zxspectrum/spconf.json").is_file());
}

#[test]
fn unknown_variant_resolves_to_error_before_any_write() {
    let err = "PENTAGON".parse::<SpectrumType>().unwrap_err();
    assert!(matches!(
        err,
        spectgen::ScaffoldError::UnknownVariant(ref key) if key == "PENTAGON"
    ));
}

#[test]
fn emitted_rom_bytes_match_template() {
    let tmp = generate(SpectrumType::Spectrum48);
    let written = fs::read(tmp.path().join("ZxSpectrum/.zxspectrum/ZXSpectrum48.rom")).unwrap();
    let template =
        spectgen::templates::template("roms/ZXSpectrum48/ZXSpectrum48.rom").unwrap();
    assert_eq!(written, template);
}
