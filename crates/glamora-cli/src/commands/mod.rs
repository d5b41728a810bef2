//! Command handlers

pub mod lead;
pub mod product;
pub mod reset;
pub mod settings;
pub mod status;

use anyhow::Result;

/// Ask the user a yes/no question on stdin
pub fn confirm(prompt: &str) -> Result<bool> {
    use std::io::{self, Write};

    print!("{} [y/N]: ", prompt);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(matches!(input.trim().to_lowercase().as_str(), "y" | "yes"))
}
