//! Reset command handler

use anyhow::{Context, Result};

use glamora_core::Store;

use crate::commands::confirm;
use crate::output::Output;

/// Delete all persisted state and restore seed data
pub fn reset(store: &mut Store, yes: bool, output: &Output) -> Result<()> {
    if !yes && output.should_prompt() {
        println!("This deletes all products, leads, and settings changes.");
        if !confirm("Reset to seed data?")? {
            output.message("Cancelled.");
            return Ok(());
        }
    }

    store.reset().context("Failed to reset store")?;

    output.success("Store reset to seed data");
    Ok(())
}
