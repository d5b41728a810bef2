//! Glamora Core Library
//!
//! This crate provides the core functionality for Glamora, a beauty-supply
//! storefront and admin console. All state lives in memory and is mirrored
//! to local JSON files; there is no server and no network I/O.
//!
//! # Architecture
//!
//! - **Store**: single source of truth for products, posts, testimonials,
//!   leads, FAQs, and the site settings singleton
//! - **Persistence**: one JSON file per entity class, rewritten in full
//!   after every mutation
//! - **Theme**: four brand color tokens derived from settings, recomputed
//!   whenever settings change
//!
//! # Quick Start
//!
//! ```text
//! let mut store = Store::open()?;
//!
//! // Capture a bulk-order inquiry
//! store.add_lead(LeadDraft {
//!     lead_type: LeadType::BulkOrder,
//!     name: "Acme Salon".into(),
//!     email: "a@acme.com".into(),
//!     phone: None,
//!     message: "Need 200 units".into(),
//! })?;
//!
//! // Read state
//! let featured: Vec<_> = store.products().iter().filter(|p| p.is_featured).collect();
//! ```
//!
//! # Modules
//!
//! - `store`: the persistent store (main entry point)
//! - `models`: domain records and drafts
//! - `seed`: compiled-in default data
//! - `storage`: JSON persistence
//! - `theme`: brand theme derived from settings
//! - `config`: application configuration

pub mod config;
pub mod models;
pub mod seed;
pub mod storage;
pub mod store;
pub mod theme;

pub use config::Config;
pub use models::{
    BlogPost, Category, DraftError, Faq, Lead, LeadDraft, LeadStatus, LeadType, Product,
    ProductDraft, SiteSettings, Testimonial,
};
pub use storage::{JsonPersistence, StorageError, StorageKey};
pub use store::Store;
pub use theme::{Rgb, Theme};
