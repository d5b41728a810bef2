//! Output formatting for CLI
//!
//! Provides consistent output formatting across all commands:
//! - Human-readable default output
//! - JSON output (--json flag)
//! - Quiet mode for scripting (--quiet flag)

use glamora_core::{Lead, Product, SiteSettings};

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output (default)
    Human,
    /// JSON output
    Json,
    /// Quiet mode - minimal output
    Quiet,
}

impl OutputFormat {
    /// Create format from CLI flags
    pub fn from_flags(json: bool, quiet: bool) -> Self {
        if quiet {
            OutputFormat::Quiet
        } else if json {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        }
    }
}

/// Output helper for consistent formatting
pub struct Output {
    /// The output format
    pub format: OutputFormat,
}

impl Output {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Print a single product
    pub fn print_product(&self, product: &Product) {
        match self.format {
            OutputFormat::Human => {
                println!("ID:          {}", product.id);
                println!("Name:        {}", product.name);
                println!("Price:       ${:.2}", product.price);
                println!("Category:    {}", product.category);
                println!("Stock:       {}", product.stock);
                println!("Featured:    {}", if product.is_featured { "yes" } else { "no" });
                if !product.image.is_empty() {
                    println!("Image:       {}", product.image);
                }
                if !product.description.is_empty() {
                    println!("Description: {}", product.description);
                }
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(product).unwrap());
            }
            OutputFormat::Quiet => {
                println!("{}", product.id);
            }
        }
    }

    /// Print a list of products
    pub fn print_products(&self, products: &[Product]) {
        match self.format {
            OutputFormat::Human => {
                if products.is_empty() {
                    println!("No products found.");
                    return;
                }
                for product in products {
                    let featured = if product.is_featured { " *" } else { "" };
                    println!(
                        "{} | {} | ${:.2} | stock {}{}",
                        product.id,
                        truncate(&product.name, 35),
                        product.price,
                        product.stock,
                        featured
                    );
                }
                println!("\n{} product(s)", products.len());
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(products).unwrap());
            }
            OutputFormat::Quiet => {
                for product in products {
                    println!("{}", product.id);
                }
            }
        }
    }

    /// Print a single lead
    pub fn print_lead(&self, lead: &Lead) {
        match self.format {
            OutputFormat::Human => {
                println!("ID:      {}", lead.id);
                println!("Type:    {}", lead.lead_type);
                println!("Name:    {}", lead.name);
                println!("Email:   {}", lead.email);
                if let Some(ref phone) = lead.phone {
                    println!("Phone:   {}", phone);
                }
                println!("Date:    {}", lead.date.format("%Y-%m-%d %H:%M"));
                println!("Status:  {:?}", lead.status);
                println!("Message: {}", lead.message);
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(lead).unwrap());
            }
            OutputFormat::Quiet => {
                println!("{}", lead.id);
            }
        }
    }

    /// Print a list of leads (newest first, as stored)
    pub fn print_leads(&self, leads: &[Lead]) {
        match self.format {
            OutputFormat::Human => {
                if leads.is_empty() {
                    println!("No leads captured yet.");
                    return;
                }
                for lead in leads {
                    println!(
                        "{} | {} | {} | {} | {:?}",
                        lead.id,
                        lead.date.format("%Y-%m-%d"),
                        lead.lead_type,
                        truncate(&lead.name, 25),
                        lead.status
                    );
                }
                println!("\n{} lead(s)", leads.len());
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(leads).unwrap());
            }
            OutputFormat::Quiet => {
                for lead in leads {
                    println!("{}", lead.id);
                }
            }
        }
    }

    /// Print the settings singleton
    pub fn print_settings(&self, settings: &SiteSettings) {
        match self.format {
            OutputFormat::Human => {
                println!("Site name:        {}", settings.site_name);
                println!("Primary color:    {}", settings.primary_color);
                println!("Secondary color:  {}", settings.secondary_color);
                println!("Accent color:     {}", settings.accent_color);
                println!("Dark color:       {}", settings.dark_color);
                println!("Hero headline:    {}", settings.hero_headline);
                println!("Hero subheadline: {}", settings.hero_subheadline);
                println!("Contact email:    {}", settings.contact_email);
                println!("Contact phone:    {}", settings.contact_phone);
                println!("Address:          {}", settings.address);
                println!("Facebook:         {}", settings.facebook_url);
                println!("Instagram:        {}", settings.instagram_url);
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(settings).unwrap());
            }
            OutputFormat::Quiet => {}
        }
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        match self.format {
            OutputFormat::Human => println!("✓ {}", message),
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::json!({"status": "success", "message": message})
                );
            }
            OutputFormat::Quiet => {}
        }
    }

    /// Check if we should prompt for confirmation
    pub fn should_prompt(&self) -> bool {
        self.format == OutputFormat::Human
    }

    /// Print an informational message
    pub fn message(&self, msg: &str) {
        match self.format {
            OutputFormat::Human => println!("{}", msg),
            OutputFormat::Json => {
                println!("{}", serde_json::json!({"message": msg}));
            }
            OutputFormat::Quiet => {}
        }
    }
}

/// Truncate a string to max length in characters, adding "..." if truncated.
///
/// Counts chars rather than bytes so the cut never lands inside a
/// multibyte character.
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_flags() {
        assert_eq!(OutputFormat::from_flags(false, false), OutputFormat::Human);
        assert_eq!(OutputFormat::from_flags(true, false), OutputFormat::Json);
        assert_eq!(OutputFormat::from_flags(false, true), OutputFormat::Quiet);
        // Quiet takes precedence
        assert_eq!(OutputFormat::from_flags(true, true), OutputFormat::Quiet);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("this is a long string", 10), "this is...");
    }

    #[test]
    fn test_truncate_multibyte_names() {
        // The cut must land on a char boundary, not a byte offset
        let name = format!("{}è{}", "a".repeat(31), "tail!");
        let truncated = truncate(&name, 35);
        assert_eq!(truncated, format!("{}è...", "a".repeat(31)));

        assert_eq!(truncate("Crème Brûlée Body Butter", 10), "Crème B...");
        assert_eq!(truncate("Crème", 5), "Crème");
    }
}
