//! Settings command handlers

use anyhow::{Context, Result};

use glamora_core::Store;

use crate::output::Output;

/// Flag values for `settings set`; each provided flag overrides the
/// corresponding field before the singleton is replaced wholesale.
#[derive(Debug, Default)]
pub struct SettingsFields {
    pub site_name: Option<String>,
    pub primary_color: Option<String>,
    pub secondary_color: Option<String>,
    pub accent_color: Option<String>,
    pub dark_color: Option<String>,
    pub hero_headline: Option<String>,
    pub hero_subheadline: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub address: Option<String>,
    pub facebook_url: Option<String>,
    pub instagram_url: Option<String>,
}

/// Show the current settings
pub fn show(store: &Store, output: &Output) -> Result<()> {
    output.print_settings(store.settings());
    Ok(())
}

/// Replace the settings singleton.
///
/// Builds the full replacement object from the current settings plus the
/// provided flags, then applies it in one wholesale set - no partial-field
/// write path exists.
pub fn set(store: &mut Store, fields: SettingsFields, output: &Output) -> Result<()> {
    let mut settings = store.settings().clone();

    if let Some(v) = fields.site_name {
        settings.site_name = v;
    }
    if let Some(v) = fields.primary_color {
        settings.primary_color = v;
    }
    if let Some(v) = fields.secondary_color {
        settings.secondary_color = v;
    }
    if let Some(v) = fields.accent_color {
        settings.accent_color = v;
    }
    if let Some(v) = fields.dark_color {
        settings.dark_color = v;
    }
    if let Some(v) = fields.hero_headline {
        settings.hero_headline = v;
    }
    if let Some(v) = fields.hero_subheadline {
        settings.hero_subheadline = v;
    }
    if let Some(v) = fields.contact_email {
        settings.contact_email = v;
    }
    if let Some(v) = fields.contact_phone {
        settings.contact_phone = v;
    }
    if let Some(v) = fields.address {
        settings.address = v;
    }
    if let Some(v) = fields.facebook_url {
        settings.facebook_url = v;
    }
    if let Some(v) = fields.instagram_url {
        settings.instagram_url = v;
    }

    store
        .set_settings(settings)
        .context("Failed to save settings")?;

    output.success("Settings updated");
    output.print_settings(store.settings());
    Ok(())
}
