//! Glamora CLI
//!
//! Command-line interface for Glamora - beauty-supply storefront and
//! admin console. Running without a subcommand launches the TUI.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use glamora_core::Store;

mod commands;
mod output;
mod tui;

use commands::product::ProductFields;
use commands::settings::SettingsFields;
use output::{Output, OutputFormat};

#[derive(Parser)]
#[command(name = "glamora")]
#[command(about = "Glamora - beauty-supply storefront and admin console")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Quiet mode - minimal output
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the storefront/admin TUI
    Tui,
    /// Manage the product catalog
    Product {
        #[command(subcommand)]
        command: ProductCommands,
    },
    /// List and capture leads
    Lead {
        #[command(subcommand)]
        command: LeadCommands,
    },
    /// Show or change site settings
    Settings {
        #[command(subcommand)]
        command: Option<SettingsCommands>,
    },
    /// Show collection counts and the data directory
    Status,
    /// Delete all persisted state and restore seed data
    Reset {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum ProductCommands {
    /// Add a product to the catalog
    #[command(alias = "create")]
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        price: String,
        #[arg(long)]
        stock: Option<String>,
        /// Hair, Skin, Makeup, Salon Equipment, or Professional Tools
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        image: Option<String>,
        #[arg(long)]
        description: Option<String>,
        /// Show in the featured section on the home page
        #[arg(long)]
        featured: bool,
    },
    /// List all products
    #[command(alias = "ls")]
    List,
    /// Show product details
    Show { id: String },
    /// Edit a product (only the provided fields change)
    Edit {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        price: Option<String>,
        #[arg(long)]
        stock: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        image: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        featured: Option<bool>,
    },
    /// Delete a product
    #[command(alias = "rm")]
    Delete { id: String },
}

#[derive(Subcommand)]
enum LeadCommands {
    /// Capture an inquiry (equivalent to submitting a public form)
    #[command(alias = "create")]
    Add {
        /// Capture as a bulk-order inquiry instead of a contact inquiry
        #[arg(long)]
        bulk_order: bool,
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        message: String,
    },
    /// List all leads, newest first
    #[command(alias = "ls")]
    List,
    /// Show lead details
    Show { id: String },
}

#[derive(Subcommand)]
enum SettingsCommands {
    /// Show current settings
    Show,
    /// Change settings (the singleton is replaced wholesale)
    Set {
        #[arg(long)]
        site_name: Option<String>,
        #[arg(long)]
        primary_color: Option<String>,
        #[arg(long)]
        secondary_color: Option<String>,
        #[arg(long)]
        accent_color: Option<String>,
        #[arg(long)]
        dark_color: Option<String>,
        #[arg(long)]
        hero_headline: Option<String>,
        #[arg(long)]
        hero_subheadline: Option<String>,
        #[arg(long)]
        contact_email: Option<String>,
        #[arg(long)]
        contact_phone: Option<String>,
        #[arg(long)]
        address: Option<String>,
        #[arg(long)]
        facebook_url: Option<String>,
        #[arg(long)]
        instagram_url: Option<String>,
    },
}

fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();
    let output = Output::new(OutputFormat::from_flags(cli.json, cli.quiet));

    match cli.command.unwrap_or(Commands::Tui) {
        Commands::Tui => tui::run(),

        Commands::Product { command } => {
            match command {
                ProductCommands::Add {
                    name,
                    price,
                    stock,
                    category,
                    image,
                    description,
                    featured,
                } => {
                    let mut store = Store::open()?;
                    let fields = ProductFields {
                        name: Some(name),
                        price: Some(price),
                        stock,
                        category,
                        image,
                        description,
                        featured: Some(featured),
                    };
                    commands::product::add(&mut store, fields, &output)
                }
                ProductCommands::List => {
                    let store = Store::open()?;
                    commands::product::list(&store, &output)
                }
                ProductCommands::Show { id } => {
                    let store = Store::open()?;
                    commands::product::show(&store, &id, &output)
                }
                ProductCommands::Edit {
                    id,
                    name,
                    price,
                    stock,
                    category,
                    image,
                    description,
                    featured,
                } => {
                    let mut store = Store::open()?;
                    let fields = ProductFields {
                        name,
                        price,
                        stock,
                        category,
                        image,
                        description,
                        featured,
                    };
                    commands::product::edit(&mut store, &id, fields, &output)
                }
                ProductCommands::Delete { id } => {
                    let mut store = Store::open()?;
                    commands::product::delete(&mut store, &id, &output)
                }
            }
        }

        Commands::Lead { command } => match command {
            LeadCommands::Add {
                bulk_order,
                name,
                email,
                phone,
                message,
            } => {
                let mut store = Store::open()?;
                commands::lead::add(&mut store, bulk_order, name, email, phone, message, &output)
            }
            LeadCommands::List => {
                let store = Store::open()?;
                commands::lead::list(&store, &output)
            }
            LeadCommands::Show { id } => {
                let store = Store::open()?;
                commands::lead::show(&store, &id, &output)
            }
        },

        Commands::Settings { command } => match command.unwrap_or(SettingsCommands::Show) {
            SettingsCommands::Show => {
                let store = Store::open()?;
                commands::settings::show(&store, &output)
            }
            SettingsCommands::Set {
                site_name,
                primary_color,
                secondary_color,
                accent_color,
                dark_color,
                hero_headline,
                hero_subheadline,
                contact_email,
                contact_phone,
                address,
                facebook_url,
                instagram_url,
            } => {
                let mut store = Store::open()?;
                let fields = SettingsFields {
                    site_name,
                    primary_color,
                    secondary_color,
                    accent_color,
                    dark_color,
                    hero_headline,
                    hero_subheadline,
                    contact_email,
                    contact_phone,
                    address,
                    facebook_url,
                    instagram_url,
                };
                commands::settings::set(&mut store, fields, &output)
            }
        },

        Commands::Status => {
            let store = Store::open()?;
            commands::status::status(&store, &output)
        }

        Commands::Reset { yes } => {
            let mut store = Store::open()?;
            commands::reset::reset(&mut store, yes, &output)
        }
    }
}

/// Initialize logging for CLI commands
///
/// Only active when GLAMORA_LOG is set, so normal command output stays
/// clean.
fn init_logging() {
    let Ok(log_level) = std::env::var("GLAMORA_LOG") else {
        return;
    };

    let env_filter = EnvFilter::new(format!(
        "glamora_core={},glamora_cli={}",
        log_level, log_level
    ));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
