//! Lead command handlers

use anyhow::{bail, Context, Result};

use glamora_core::{LeadDraft, LeadType, Store};

use crate::output::Output;

/// Capture a lead, the command-line equivalent of the public inquiry forms
pub fn add(
    store: &mut Store,
    bulk_order: bool,
    name: String,
    email: String,
    phone: Option<String>,
    message: String,
    output: &Output,
) -> Result<()> {
    let draft = LeadDraft {
        lead_type: if bulk_order {
            LeadType::BulkOrder
        } else {
            LeadType::Contact
        },
        name,
        email,
        phone,
        message,
    };

    let lead = store.add_lead(draft).context("Failed to capture lead")?;

    output.success("Thank you! Your inquiry has been received.");
    output.print_lead(&lead);
    Ok(())
}

/// List all leads, newest first
pub fn list(store: &Store, output: &Output) -> Result<()> {
    output.print_leads(store.leads());
    Ok(())
}

/// Show a single lead
pub fn show(store: &Store, id: &str, output: &Output) -> Result<()> {
    match store.get_lead(id) {
        Some(lead) => {
            output.print_lead(lead);
            Ok(())
        }
        None => bail!("Lead not found: {}", id),
    }
}
