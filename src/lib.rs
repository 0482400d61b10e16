//! spectgen - ZX Spectrum project scaffolding
//!
//! Resolves a target machine type and a project name, then writes a
//! ready-to-use SpectNet project tree: machine configuration, ROM images
//! with paired disassembly annotations, a sample Z80 source file, a sample
//! tape image and, for floppy-capable machines, a sample floppy image.

pub mod emitter;
pub mod error;
pub mod git;
pub mod prompt;
pub mod templates;
pub mod variant;

// Re-export commonly used types
pub use emitter::{emit_project, MachineConfig, ProjectRequest, DEFAULT_PROJECT_NAME};
pub use error::ScaffoldError;
pub use variant::{SpectrumType, VariantDescriptor};
