//! Interactive prompt utilities
//!
//! Used only for options not supplied on the command line. Each prompt
//! blocks on stdin and applies its default on empty input.

use anyhow::Result;
use std::io::{self, Write};

/// Free-text prompt with a default
pub fn input(prompt: &str, default: &str) -> Result<String> {
    print!("{} [{}]: ", prompt, default);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;

    let trimmed = line.trim();
    Ok(if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    })
}

/// Numbered single-choice prompt; returns the chosen index
///
/// Empty or unparseable input selects the first option.
pub fn select(prompt: &str, options: &[&str]) -> Result<usize> {
    println!("{}", prompt);
    for (i, option) in options.iter().enumerate() {
        println!("  {}) {}", i + 1, option);
    }
    print!("Choice [1]: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;

    let choice = line
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|n| (1..=options.len()).contains(n))
        .unwrap_or(1);
    Ok(choice - 1)
}

/// Confirm prompt (Y/n or y/N depending on the default)
pub fn confirm(prompt: &str, default: bool) -> Result<bool> {
    let hint = if default { "Y/n" } else { "y/N" };
    print!("{} [{}]: ", prompt, hint);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;

    let trimmed = line.trim().to_lowercase();
    Ok(match trimmed.as_str() {
        "" => default,
        "y" | "yes" => true,
        _ => false,
    })
}
