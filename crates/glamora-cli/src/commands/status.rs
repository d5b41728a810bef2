//! Status command handler

use anyhow::Result;

use glamora_core::Store;

use crate::output::{Output, OutputFormat};

/// Show collection counts and the data directory
pub fn status(store: &Store, output: &Output) -> Result<()> {
    match output.format {
        OutputFormat::Human => {
            println!("Site:         {}", store.settings().site_name);
            println!("Data dir:     {:?}", store.config().data_dir);
            println!();
            println!("Products:     {}", store.products().len());
            println!("Blog posts:   {}", store.posts().len());
            println!("Testimonials: {}", store.testimonials().len());
            println!("FAQs:         {}", store.faqs().len());
            println!(
                "Leads:        {} ({} new)",
                store.leads().len(),
                store.new_lead_count()
            );
        }
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "site_name": store.settings().site_name,
                    "data_dir": store.config().data_dir,
                    "products": store.products().len(),
                    "posts": store.posts().len(),
                    "testimonials": store.testimonials().len(),
                    "faqs": store.faqs().len(),
                    "leads": store.leads().len(),
                    "new_leads": store.new_lead_count(),
                })
            );
        }
        OutputFormat::Quiet => {}
    }
    Ok(())
}
