//! Data models for Glamora
//!
//! Defines the domain records: Product, BlogPost, Testimonial, Lead, Faq,
//! and the SiteSettings singleton. Field names and enum values follow the
//! persisted JSON shape, so data written by earlier versions keeps loading.

use chrono::{DateTime, Utc};
use rand::distributions::Alphanumeric;
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Generate a fresh record identity: 9 lowercase alphanumeric characters.
pub fn new_id() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(9)
        .map(char::from)
        .collect::<String>()
        .to_lowercase()
}

/// Product category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Category {
    Hair,
    Skin,
    Makeup,
    #[serde(rename = "Salon Equipment")]
    SalonEquipment,
    #[serde(rename = "Professional Tools")]
    ProfessionalTools,
}

impl Category {
    /// All categories, in catalog order
    pub const ALL: [Category; 5] = [
        Category::Hair,
        Category::Skin,
        Category::Makeup,
        Category::SalonEquipment,
        Category::ProfessionalTools,
    ];

    /// Display name (matches the serialized value)
    pub fn name(&self) -> &'static str {
        match self {
            Category::Hair => "Hair",
            Category::Skin => "Skin",
            Category::Makeup => "Makeup",
            Category::SalonEquipment => "Salon Equipment",
            Category::ProfessionalTools => "Professional Tools",
        }
    }

    /// Parse a category from its display name
    pub fn parse(s: &str) -> Option<Self> {
        Category::ALL.iter().copied().find(|c| c.name() == s)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A catalog product
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier
    pub id: String,
    pub name: String,
    /// Retail price in dollars
    pub price: f64,
    pub description: String,
    pub category: Category,
    /// Image URL
    pub image: String,
    /// Shown in the featured section on the home page
    pub is_featured: bool,
    /// Units in stock
    pub stock: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,
}

/// A blog post
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub excerpt: String,
    pub image: String,
    /// Publication date (ISO date string)
    pub date: String,
    pub author: String,
    /// Free-text category label
    pub category: String,
    pub is_published: bool,
}

/// A customer testimonial
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Testimonial {
    pub id: String,
    pub name: String,
    pub role: String,
    pub content: String,
    /// Star rating, 1-5
    pub rating: u8,
    /// Avatar image URL
    pub avatar: String,
}

/// Which public form produced a lead
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LeadType {
    Contact,
    BulkOrder,
}

impl std::fmt::Display for LeadType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LeadType::Contact => write!(f, "contact"),
            LeadType::BulkOrder => write!(f, "bulk order"),
        }
    }
}

/// Lead triage status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LeadStatus {
    New,
    Viewed,
    Resolved,
}

/// A captured contact or bulk-order inquiry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Lead {
    pub id: String,
    #[serde(rename = "type")]
    pub lead_type: LeadType,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub message: String,
    /// When the inquiry was submitted
    pub date: DateTime<Utc>,
    pub status: LeadStatus,
}

/// Lead fields supplied by a form submission.
///
/// Identity, timestamp, and status are stamped by the store when the draft
/// is captured.
#[derive(Debug, Clone, PartialEq)]
pub struct LeadDraft {
    pub lead_type: LeadType,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
}

/// A frequently asked question
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Faq {
    pub id: String,
    pub question: String,
    pub answer: String,
}

/// The site settings singleton: branding, hero copy, contact info.
///
/// Replaced wholesale on edit; there is no partial-field merge.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettings {
    pub site_name: String,
    pub primary_color: String,
    pub secondary_color: String,
    pub accent_color: String,
    pub dark_color: String,
    pub hero_headline: String,
    pub hero_subheadline: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub address: String,
    pub facebook_url: String,
    pub instagram_url: String,
}

/// Errors from committing a product draft
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DraftError {
    #[error("Product name cannot be empty")]
    EmptyName,

    #[error("Invalid price: '{0}'")]
    InvalidPrice(String),

    #[error("Price cannot be negative: {0}")]
    NegativePrice(String),

    #[error("Invalid stock count: '{0}'")]
    InvalidStock(String),
}

/// An in-progress product edit.
///
/// Numeric fields are held as raw text while the user types; they are
/// parsed and validated only at commit, and a failed commit leaves the
/// catalog untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub id: String,
    pub name: String,
    pub price: String,
    pub description: String,
    pub category: Category,
    pub image: String,
    pub is_featured: bool,
    pub stock: String,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
}

impl ProductDraft {
    /// Start a draft for a new product with a fresh identity
    pub fn new() -> Self {
        Self {
            id: new_id(),
            name: String::new(),
            price: "0".to_string(),
            description: String::new(),
            category: Category::Skin,
            image: String::new(),
            is_featured: false,
            stock: "0".to_string(),
            meta_title: None,
            meta_description: None,
        }
    }

    /// Start a draft editing an existing product
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            price: format!("{:.2}", product.price),
            description: product.description.clone(),
            category: product.category,
            image: product.image.clone(),
            is_featured: product.is_featured,
            stock: product.stock.to_string(),
            meta_title: product.meta_title.clone(),
            meta_description: product.meta_description.clone(),
        }
    }

    /// Validate and convert to a canonical product record.
    ///
    /// Rejects an empty name, an unparseable or negative price, and an
    /// unparseable stock count.
    pub fn commit(&self) -> Result<Product, DraftError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(DraftError::EmptyName);
        }

        let price: f64 = self
            .price
            .trim()
            .parse()
            .map_err(|_| DraftError::InvalidPrice(self.price.clone()))?;
        if !price.is_finite() {
            return Err(DraftError::InvalidPrice(self.price.clone()));
        }
        if price < 0.0 {
            return Err(DraftError::NegativePrice(self.price.clone()));
        }

        let stock: u32 = self
            .stock
            .trim()
            .parse()
            .map_err(|_| DraftError::InvalidStock(self.stock.clone()))?;

        Ok(Product {
            id: self.id.clone(),
            name: name.to_string(),
            price,
            description: self.description.clone(),
            category: self.category,
            image: self.image.clone(),
            is_featured: self.is_featured,
            stock,
            meta_title: self.meta_title.clone(),
            meta_description: self.meta_description.clone(),
        })
    }
}

impl Default for ProductDraft {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_id_shape() {
        let id = new_id();
        assert_eq!(id.len(), 9);
        assert!(id.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[test]
    fn test_new_ids_are_unique() {
        let a = new_id();
        let b = new_id();
        assert_ne!(a, b);
    }

    #[test]
    fn test_category_serialization() {
        assert_eq!(
            serde_json::to_string(&Category::SalonEquipment).unwrap(),
            "\"Salon Equipment\""
        );
        assert_eq!(serde_json::to_string(&Category::Hair).unwrap(), "\"Hair\"");

        let cat: Category = serde_json::from_str("\"Professional Tools\"").unwrap();
        assert_eq!(cat, Category::ProfessionalTools);
    }

    #[test]
    fn test_category_parse() {
        assert_eq!(Category::parse("Skin"), Some(Category::Skin));
        assert_eq!(Category::parse("Salon Equipment"), Some(Category::SalonEquipment));
        assert_eq!(Category::parse("Nails"), None);
    }

    #[test]
    fn test_product_json_field_names() {
        let product = Product {
            id: "1".to_string(),
            name: "Serum".to_string(),
            price: 85.0,
            description: "A serum".to_string(),
            category: Category::Skin,
            image: "https://example.com/serum.jpg".to_string(),
            is_featured: true,
            stock: 25,
            meta_title: None,
            meta_description: None,
        };

        let json = serde_json::to_string(&product).unwrap();
        assert!(json.contains("\"isFeatured\":true"));
        assert!(!json.contains("metaTitle"));

        let parsed: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, product);
    }

    #[test]
    fn test_lead_wire_format() {
        let lead = Lead {
            id: "abc123def".to_string(),
            lead_type: LeadType::BulkOrder,
            name: "Acme Salon".to_string(),
            email: "a@acme.com".to_string(),
            phone: None,
            message: "Need 200 units".to_string(),
            date: Utc::now(),
            status: LeadStatus::New,
        };

        let json = serde_json::to_string(&lead).unwrap();
        assert!(json.contains("\"type\":\"bulk_order\""));
        assert!(json.contains("\"status\":\"new\""));
        assert!(!json.contains("phone"));

        let parsed: Lead = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, lead);
    }

    #[test]
    fn test_settings_roundtrip() {
        let settings = crate::seed::default_settings();
        let json = serde_json::to_string(&settings).unwrap();
        assert!(json.contains("\"siteName\""));
        assert!(json.contains("\"heroHeadline\""));

        let parsed: SiteSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, settings);
    }

    #[test]
    fn test_draft_commit_valid() {
        let mut draft = ProductDraft::new();
        draft.name = "Argan Oil Treatment".to_string();
        draft.price = "42.50".to_string();
        draft.stock = "30".to_string();
        draft.category = Category::Hair;

        let product = draft.commit().unwrap();
        assert_eq!(product.name, "Argan Oil Treatment");
        assert_eq!(product.price, 42.5);
        assert_eq!(product.stock, 30);
        assert_eq!(product.id, draft.id);
    }

    #[test]
    fn test_draft_commit_rejects_empty_name() {
        let draft = ProductDraft::new();
        assert_eq!(draft.commit(), Err(DraftError::EmptyName));
    }

    #[test]
    fn test_draft_commit_rejects_bad_price() {
        let mut draft = ProductDraft::new();
        draft.name = "Thing".to_string();

        draft.price = "abc".to_string();
        assert!(matches!(draft.commit(), Err(DraftError::InvalidPrice(_))));

        draft.price = "NaN".to_string();
        assert!(matches!(draft.commit(), Err(DraftError::InvalidPrice(_))));

        draft.price = "-1".to_string();
        assert!(matches!(draft.commit(), Err(DraftError::NegativePrice(_))));
    }

    #[test]
    fn test_draft_commit_rejects_bad_stock() {
        let mut draft = ProductDraft::new();
        draft.name = "Thing".to_string();
        draft.stock = "-5".to_string();
        assert!(matches!(draft.commit(), Err(DraftError::InvalidStock(_))));

        draft.stock = "lots".to_string();
        assert!(matches!(draft.commit(), Err(DraftError::InvalidStock(_))));
    }

    #[test]
    fn test_draft_from_product_roundtrip() {
        let product = crate::seed::products().remove(0);
        let draft = ProductDraft::from_product(&product);
        let committed = draft.commit().unwrap();
        assert_eq!(committed, product);
    }
}
