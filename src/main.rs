use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use std::env;
use std::str::FromStr;

use spectgen::emitter::{self, ProjectRequest, DEFAULT_PROJECT_NAME};
use spectgen::variant::SpectrumType;
use spectgen::{git, prompt};

#[derive(Parser)]
#[command(author, version = env!("CARGO_PKG_VERSION"), about = "Generates ZX Spectrum project trees for SpectNet development", long_about = None)]
struct Cli {
    /// The name of the folder in which the ZX Spectrum project is generated
    project_name: Option<String>,

    /// The type of ZX Spectrum virtual machine this project uses
    /// (48, 48NTSC, 128, +2A, +3F1, +3F2)
    spectrum_type: Option<String>,

    /// Initialize a git repository in the generated project
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    git: Option<bool>,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {:#}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    println!(
        "Welcome to the {} ZX Spectrum project generator!",
        "spectgen".green().bold()
    );

    let request = resolve_request(cli)?;
    let base_dir = env::current_dir()?;

    emitter::emit_project(&base_dir, &request)?;
    println!(
        "  {} Generated {} project in {}",
        "✓".green(),
        request.machine.display_name(),
        request.name.bold()
    );

    if request.git_init {
        match git::init_repository(&base_dir.join(&request.name)) {
            Ok(()) => println!("  {} Initialized git repository", "✓".green()),
            Err(e) => eprintln!("  {} Skipped git init: {:#}", "⚠".yellow(), e),
        }
    }

    println!();
    println!(
        "Open the project with the {} tooling to develop ZX Spectrum applications.",
        "SpectNet IDE".green()
    );

    Ok(())
}

/// Resolve each option by precedence: CLI argument, then prompt, then default
///
/// A machine-type argument that does not resolve is fatal; the interactive
/// list is offered only when the argument is absent.
fn resolve_request(cli: Cli) -> Result<ProjectRequest> {
    let name = match cli.project_name {
        Some(name) if !name.trim().is_empty() => name,
        _ => prompt::input("Project name", DEFAULT_PROJECT_NAME)?,
    };

    let machine = match cli.spectrum_type {
        Some(key) => SpectrumType::from_str(&key)?,
        None => {
            let labels: Vec<&str> = SpectrumType::ALL.map(|t| t.display_name()).to_vec();
            let choice = prompt::select("What type of ZX Spectrum do you target?", &labels)?;
            SpectrumType::ALL[choice]
        }
    };

    let git_init = match cli.git {
        Some(flag) => flag,
        None => prompt::confirm("Initialize a git repository?", true)?,
    };

    Ok(ProjectRequest {
        name,
        machine,
        git_init,
    })
}
