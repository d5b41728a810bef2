//! The persistent store
//!
//! The `Store` is the single source of truth for all domain data: five
//! record collections plus the settings singleton. On open, each piece of
//! state is rehydrated from its JSON file, falling back to compiled-in
//! seed data when nothing usable is persisted. After every mutation the
//! entire state set is written back (full-store write-through), and the
//! derived brand theme is recomputed whenever settings change.
//!
//! ## Usage
//!
//! ```ignore
//! let mut store = Store::open()?;  // Seeds or rehydrates
//!
//! // Capture a lead
//! store.add_lead(draft)?;
//!
//! // Read state
//! let products = store.products();
//! let theme = store.theme();
//! ```

use anyhow::{Context, Result};
use chrono::Utc;

use crate::config::Config;
use crate::models::{
    new_id, BlogPost, Faq, Lead, LeadDraft, LeadStatus, Product, SiteSettings, Testimonial,
};
use crate::seed;
use crate::storage::{JsonPersistence, StorageKey};
use crate::theme::Theme;

/// Single source of truth for the storefront and admin console.
///
/// Constructed once at startup and passed by reference to all consumers.
pub struct Store {
    products: Vec<Product>,
    posts: Vec<BlogPost>,
    testimonials: Vec<Testimonial>,
    leads: Vec<Lead>,
    settings: SiteSettings,
    faqs: Vec<Faq>,
    /// Brand theme derived from settings
    theme: Theme,
    persistence: JsonPersistence,
    config: Config,
}

impl Store {
    /// Open the store using the default configuration
    pub fn open() -> Result<Self> {
        let config = Config::load().context("Failed to load configuration")?;
        Self::open_with_config(config)
    }

    /// Open the store with a specific configuration
    ///
    /// For each entity class, the persisted value is the authoritative
    /// initial state when present; otherwise the seed default is used
    /// (leads default to the empty collection). Nothing is written back
    /// until the first mutation.
    pub fn open_with_config(config: Config) -> Result<Self> {
        config.ensure_data_dir()?;
        let persistence = JsonPersistence::new(config.clone());

        let products = persistence
            .load(StorageKey::Products)
            .context("Failed to load products")?
            .unwrap_or_else(seed::products);
        let posts = persistence
            .load(StorageKey::Posts)
            .context("Failed to load posts")?
            .unwrap_or_else(seed::posts);
        let testimonials = persistence
            .load(StorageKey::Testimonials)
            .context("Failed to load testimonials")?
            .unwrap_or_else(seed::testimonials);
        let leads = persistence
            .load(StorageKey::Leads)
            .context("Failed to load leads")?
            .unwrap_or_default();
        let settings: SiteSettings = persistence
            .load(StorageKey::Settings)
            .context("Failed to load settings")?
            .unwrap_or_else(seed::default_settings);
        let faqs = persistence
            .load(StorageKey::Faqs)
            .context("Failed to load FAQs")?
            .unwrap_or_else(seed::faqs);

        let theme = Theme::from_settings(&settings);

        Ok(Self {
            products,
            posts,
            testimonials,
            leads,
            settings,
            faqs,
            theme,
            persistence,
            config,
        })
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    // ==================== Readers ====================

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn posts(&self) -> &[BlogPost] {
        &self.posts
    }

    pub fn testimonials(&self) -> &[Testimonial] {
        &self.testimonials
    }

    pub fn leads(&self) -> &[Lead] {
        &self.leads
    }

    pub fn settings(&self) -> &SiteSettings {
        &self.settings
    }

    pub fn faqs(&self) -> &[Faq] {
        &self.faqs
    }

    /// The brand theme derived from the current settings
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Look up a product by id
    pub fn get_product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Look up a lead by id
    pub fn get_lead(&self, id: &str) -> Option<&Lead> {
        self.leads.iter().find(|l| l.id == id)
    }

    /// Number of leads still in `new` status
    pub fn new_lead_count(&self) -> usize {
        self.leads
            .iter()
            .filter(|l| l.status == LeadStatus::New)
            .count()
    }

    // ==================== Lead Operations ====================

    /// Capture a lead from a form submission.
    ///
    /// Stamps a fresh identity, the current time, and `new` status, then
    /// prepends the lead so the newest inquiry is always first.
    pub fn add_lead(&mut self, draft: LeadDraft) -> Result<Lead> {
        let lead = Lead {
            id: new_id(),
            lead_type: draft.lead_type,
            name: draft.name,
            email: draft.email,
            phone: draft.phone,
            message: draft.message,
            date: Utc::now(),
            status: LeadStatus::New,
        };
        self.leads.insert(0, lead.clone());
        self.persist_all()?;
        Ok(lead)
    }

    // ==================== Product Operations ====================

    /// Add a new product to the catalog
    pub fn add_product(&mut self, product: Product) -> Result<()> {
        self.products.push(product);
        self.persist_all()
    }

    /// Replace the product whose id matches.
    ///
    /// Silently a no-op when no product has the given id.
    pub fn update_product(&mut self, product: Product) -> Result<()> {
        if let Some(existing) = self.products.iter_mut().find(|p| p.id == product.id) {
            *existing = product;
        }
        self.persist_all()
    }

    /// Remove the product with the given id.
    ///
    /// Silently a no-op when no product has the given id.
    pub fn delete_product(&mut self, id: &str) -> Result<()> {
        self.products.retain(|p| p.id != id);
        self.persist_all()
    }

    // ==================== Bulk Setters ====================

    /// Replace the product collection wholesale
    pub fn set_products(&mut self, products: Vec<Product>) -> Result<()> {
        self.products = products;
        self.persist_all()
    }

    /// Replace the post collection wholesale
    pub fn set_posts(&mut self, posts: Vec<BlogPost>) -> Result<()> {
        self.posts = posts;
        self.persist_all()
    }

    /// Replace the testimonial collection wholesale
    pub fn set_testimonials(&mut self, testimonials: Vec<Testimonial>) -> Result<()> {
        self.testimonials = testimonials;
        self.persist_all()
    }

    /// Replace the lead collection wholesale
    pub fn set_leads(&mut self, leads: Vec<Lead>) -> Result<()> {
        self.leads = leads;
        self.persist_all()
    }

    /// Replace the FAQ collection wholesale
    pub fn set_faqs(&mut self, faqs: Vec<Faq>) -> Result<()> {
        self.faqs = faqs;
        self.persist_all()
    }

    // ==================== Settings ====================

    /// Replace the settings singleton wholesale and recompute the theme
    pub fn set_settings(&mut self, settings: SiteSettings) -> Result<()> {
        self.settings = settings;
        self.theme = Theme::from_settings(&self.settings);
        self.persist_all()
    }

    // ==================== Maintenance ====================

    /// Delete all persisted state and reload seed data
    pub fn reset(&mut self) -> Result<()> {
        self.persistence
            .wipe()
            .context("Failed to delete persisted state")?;

        self.products = seed::products();
        self.posts = seed::posts();
        self.testimonials = seed::testimonials();
        self.leads = Vec::new();
        self.settings = seed::default_settings();
        self.faqs = seed::faqs();
        self.theme = Theme::from_settings(&self.settings);

        Ok(())
    }

    /// Write the entire state set back to disk.
    ///
    /// Every entity class is re-serialized after any single mutation, not
    /// just the one that changed.
    fn persist_all(&self) -> Result<()> {
        self.persistence
            .save(StorageKey::Products, &self.products)
            .context("Failed to persist products")?;
        self.persistence
            .save(StorageKey::Posts, &self.posts)
            .context("Failed to persist posts")?;
        self.persistence
            .save(StorageKey::Testimonials, &self.testimonials)
            .context("Failed to persist testimonials")?;
        self.persistence
            .save(StorageKey::Leads, &self.leads)
            .context("Failed to persist leads")?;
        self.persistence
            .save(StorageKey::Settings, &self.settings)
            .context("Failed to persist settings")?;
        self.persistence
            .save(StorageKey::Faqs, &self.faqs)
            .context("Failed to persist FAQs")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, LeadType};
    use crate::theme::Rgb;
    use std::fs;
    use tempfile::TempDir;

    fn test_config(temp_dir: &TempDir) -> Config {
        Config {
            data_dir: temp_dir.path().to_path_buf(),
        }
    }

    fn sample_draft() -> LeadDraft {
        LeadDraft {
            lead_type: LeadType::BulkOrder,
            name: "Acme Salon".to_string(),
            email: "a@acme.com".to_string(),
            phone: None,
            message: "Need 200 units".to_string(),
        }
    }

    #[test]
    fn test_open_seeds_every_collection() {
        let temp_dir = TempDir::new().unwrap();
        let store = Store::open_with_config(test_config(&temp_dir)).unwrap();

        assert_eq!(store.products(), seed::products().as_slice());
        assert_eq!(store.posts(), seed::posts().as_slice());
        assert_eq!(store.testimonials(), seed::testimonials().as_slice());
        assert_eq!(store.faqs(), seed::faqs().as_slice());
        assert_eq!(*store.settings(), seed::default_settings());
        assert!(store.leads().is_empty());
    }

    #[test]
    fn test_open_writes_nothing_before_first_mutation() {
        let temp_dir = TempDir::new().unwrap();
        let store = Store::open_with_config(test_config(&temp_dir)).unwrap();

        for key in StorageKey::ALL {
            assert!(!store.persistence.exists(key));
        }
    }

    #[test]
    fn test_rehydration_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let config = test_config(&temp_dir);

        // Mutate so everything is persisted
        {
            let mut store = Store::open_with_config(config.clone()).unwrap();
            store.add_lead(sample_draft()).unwrap();
            store.delete_product("2").unwrap();
        }

        // Reopen twice; state must be identical each time
        let first = Store::open_with_config(config.clone()).unwrap();
        let second = Store::open_with_config(config).unwrap();

        assert_eq!(first.products(), second.products());
        assert_eq!(first.leads(), second.leads());
        assert_eq!(*first.settings(), *second.settings());
        assert_eq!(first.products().len(), 3);
        assert_eq!(first.leads().len(), 1);
    }

    #[test]
    fn test_add_lead_invariants() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = Store::open_with_config(test_config(&temp_dir)).unwrap();

        store.add_lead(sample_draft()).unwrap();
        let existing_id = store.leads()[0].id.clone();

        let draft = LeadDraft {
            lead_type: LeadType::Contact,
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone: Some("555-0100".to_string()),
            message: "Order status?".to_string(),
        };
        let before = Utc::now();
        let lead = store.add_lead(draft.clone()).unwrap();

        // Size +1, new entry at index 0
        assert_eq!(store.leads().len(), 2);
        assert_eq!(store.leads()[0], lead);

        // Fresh id, new status, stamped date, draft fields preserved
        assert_ne!(lead.id, existing_id);
        assert_eq!(lead.status, LeadStatus::New);
        assert!(lead.date >= before);
        assert_eq!(lead.lead_type, draft.lead_type);
        assert_eq!(lead.name, draft.name);
        assert_eq!(lead.email, draft.email);
        assert_eq!(lead.phone, draft.phone);
        assert_eq!(lead.message, draft.message);
    }

    #[test]
    fn test_update_product_targets_only_matching_id() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = Store::open_with_config(test_config(&temp_dir)).unwrap();

        let others: Vec<Product> = store
            .products()
            .iter()
            .filter(|p| p.id != "1")
            .cloned()
            .collect();

        let mut updated = store.get_product("1").unwrap().clone();
        updated.price = 95.00;
        store.update_product(updated.clone()).unwrap();

        assert_eq!(store.get_product("1").unwrap(), &updated);
        let after: Vec<Product> = store
            .products()
            .iter()
            .filter(|p| p.id != "1")
            .cloned()
            .collect();
        assert_eq!(after, others);
    }

    #[test]
    fn test_update_product_unknown_id_is_silent_noop() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = Store::open_with_config(test_config(&temp_dir)).unwrap();

        let before = store.products().to_vec();

        let stranger = Product {
            id: "P-new".to_string(),
            name: "Unknown".to_string(),
            price: 1.0,
            description: String::new(),
            category: Category::Skin,
            image: String::new(),
            is_featured: false,
            stock: 0,
            meta_title: None,
            meta_description: None,
        };
        store.update_product(stranger).unwrap();

        assert_eq!(store.products(), before.as_slice());
    }

    #[test]
    fn test_delete_product_removes_exactly_one() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = Store::open_with_config(test_config(&temp_dir)).unwrap();

        assert_eq!(store.products().len(), 4);
        store.delete_product("2").unwrap();

        assert_eq!(store.products().len(), 3);
        assert!(store.get_product("2").is_none());

        // Deleting again is a no-op
        store.delete_product("2").unwrap();
        assert_eq!(store.products().len(), 3);
    }

    #[test]
    fn test_add_product_appends() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = Store::open_with_config(test_config(&temp_dir)).unwrap();

        let product = Product {
            id: new_id(),
            name: "Keratin Mask".to_string(),
            price: 28.0,
            description: "Weekly repair mask.".to_string(),
            category: Category::Hair,
            image: String::new(),
            is_featured: false,
            stock: 40,
            meta_title: None,
            meta_description: None,
        };
        store.add_product(product.clone()).unwrap();

        assert_eq!(store.products().len(), 5);
        assert_eq!(store.products().last().unwrap(), &product);
    }

    #[test]
    fn test_any_mutation_writes_through_every_key() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = Store::open_with_config(test_config(&temp_dir)).unwrap();

        // A single lead mutation must persist all six entity classes
        store.add_lead(sample_draft()).unwrap();

        for key in StorageKey::ALL {
            assert!(store.persistence.exists(key), "missing {:?}", key);
        }

        // And each persisted value matches the in-memory state
        let persistence = JsonPersistence::new(store.config().clone());
        let products: Vec<Product> = persistence.load(StorageKey::Products).unwrap().unwrap();
        let leads: Vec<Lead> = persistence.load(StorageKey::Leads).unwrap().unwrap();
        let settings: SiteSettings = persistence.load(StorageKey::Settings).unwrap().unwrap();
        assert_eq!(products.as_slice(), store.products());
        assert_eq!(leads.as_slice(), store.leads());
        assert_eq!(settings, *store.settings());
    }

    #[test]
    fn test_set_settings_replaces_wholesale() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = Store::open_with_config(test_config(&temp_dir)).unwrap();

        let mut settings = seed::default_settings();
        settings.site_name = "Glamora Pro".to_string();
        settings.hero_headline = "Wholesale Beauty".to_string();

        store.set_settings(settings.clone()).unwrap();
        assert_eq!(*store.settings(), settings);
    }

    #[test]
    fn test_settings_change_propagates_to_theme() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = Store::open_with_config(test_config(&temp_dir)).unwrap();

        let mut settings = seed::default_settings();
        settings.primary_color = "#FF0000".to_string();
        store.set_settings(settings).unwrap();

        let theme = store.theme();
        assert_eq!(theme.primary, Rgb(0xFF, 0, 0));
        assert_eq!(theme.secondary, Rgb(0xFD, 0xF5, 0xE6));
        assert_eq!(theme.accent, Rgb(0xE1, 0x9A, 0x9A));
        assert_eq!(theme.dark, Rgb(0x33, 0x33, 0x33));
    }

    #[test]
    fn test_bulk_setters_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = Store::open_with_config(test_config(&temp_dir)).unwrap();

        store.set_products(Vec::new()).unwrap();
        assert!(store.products().is_empty());

        store.set_faqs(Vec::new()).unwrap();
        assert!(store.faqs().is_empty());

        // Persisted state reflects the overwrite
        let reopened = Store::open_with_config(store.config().clone()).unwrap();
        assert!(reopened.products().is_empty());
        assert!(reopened.faqs().is_empty());
    }

    #[test]
    fn test_corrupt_state_file_falls_back_to_seed() {
        let temp_dir = TempDir::new().unwrap();
        let config = test_config(&temp_dir);

        fs::write(temp_dir.path().join("products.json"), "][ nonsense").unwrap();

        let store = Store::open_with_config(config).unwrap();
        assert_eq!(store.products(), seed::products().as_slice());
    }

    #[test]
    fn test_reset_restores_seed_state() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = Store::open_with_config(test_config(&temp_dir)).unwrap();

        store.add_lead(sample_draft()).unwrap();
        store.delete_product("1").unwrap();

        store.reset().unwrap();

        assert_eq!(store.products(), seed::products().as_slice());
        assert!(store.leads().is_empty());
        for key in StorageKey::ALL {
            assert!(!store.persistence.exists(key));
        }
    }

    #[test]
    fn test_new_lead_count() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = Store::open_with_config(test_config(&temp_dir)).unwrap();

        assert_eq!(store.new_lead_count(), 0);
        store.add_lead(sample_draft()).unwrap();
        store.add_lead(sample_draft()).unwrap();
        assert_eq!(store.new_lead_count(), 2);

        let mut leads = store.leads().to_vec();
        leads[0].status = LeadStatus::Resolved;
        store.set_leads(leads).unwrap();
        assert_eq!(store.new_lead_count(), 1);
    }

    #[test]
    fn test_example_scenario() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = Store::open_with_config(test_config(&temp_dir)).unwrap();

        // Lead capture
        store.add_lead(sample_draft()).unwrap();
        assert_eq!(store.leads().len(), 1);
        assert_eq!(store.leads()[0].status, LeadStatus::New);

        // Targeted price update
        let mut updated = store.get_product("1").unwrap().clone();
        updated.price = 95.00;
        store.update_product(updated).unwrap();
        assert_eq!(store.get_product("1").unwrap().price, 95.00);
        assert_eq!(store.get_product("3").unwrap().price, 34.50);

        // Delete drops the collection from 4 to 3
        store.delete_product("2").unwrap();
        assert_eq!(store.products().len(), 3);
        assert!(store.products().iter().all(|p| p.id != "2"));
    }
}
