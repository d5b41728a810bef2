//! Compiled-in seed data
//!
//! Used whenever no persisted value exists for an entity class. Leads are
//! the exception: they only ever come from form submissions, so their
//! default is the empty collection.

use crate::models::{BlogPost, Category, Faq, Product, SiteSettings, Testimonial};

/// Default product catalog
pub fn products() -> Vec<Product> {
    vec![
        Product {
            id: "1".to_string(),
            name: "Silk Radiance Facial Serum".to_string(),
            price: 85.00,
            description: "A premium professional-grade serum for unmatched hydration and glow."
                .to_string(),
            category: Category::Skin,
            image: "https://picsum.photos/seed/skin1/600/600".to_string(),
            is_featured: true,
            stock: 25,
            meta_title: None,
            meta_description: None,
        },
        Product {
            id: "2".to_string(),
            name: "Titanium Ionic Hair Dryer".to_string(),
            price: 189.99,
            description: "The choice of top salon professionals for fast, frizz-free drying."
                .to_string(),
            category: Category::ProfessionalTools,
            image: "https://picsum.photos/seed/tool1/600/600".to_string(),
            is_featured: true,
            stock: 12,
            meta_title: None,
            meta_description: None,
        },
        Product {
            id: "3".to_string(),
            name: "Ceramide Fusion Shampoo".to_string(),
            price: 34.50,
            description: "Repair and strengthen damaged hair with our salon-exclusive formula."
                .to_string(),
            category: Category::Hair,
            image: "https://picsum.photos/seed/hair1/600/600".to_string(),
            is_featured: true,
            stock: 50,
            meta_title: None,
            meta_description: None,
        },
        Product {
            id: "4".to_string(),
            name: "Luxe Matte Lipstick Set".to_string(),
            price: 65.00,
            description: "Highly pigmented, long-lasting shades for the ultimate makeup kit."
                .to_string(),
            category: Category::Makeup,
            image: "https://picsum.photos/seed/makeup1/600/600".to_string(),
            is_featured: false,
            stock: 100,
            meta_title: None,
            meta_description: None,
        },
    ]
}

/// Default blog posts
pub fn posts() -> Vec<BlogPost> {
    vec![BlogPost {
        id: "1".to_string(),
        title: "Top 5 Salon Trends for 2024".to_string(),
        slug: "salon-trends-2024".to_string(),
        content: "Discover the latest in color techniques and customer service...".to_string(),
        excerpt: "The beauty industry is evolving faster than ever. Stay ahead with these key trends."
            .to_string(),
        image: "https://picsum.photos/seed/blog1/800/400".to_string(),
        date: "2024-03-20".to_string(),
        author: "Admin".to_string(),
        category: "Industry".to_string(),
        is_published: true,
    }]
}

/// Default testimonials
pub fn testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            id: "1".to_string(),
            name: "Sarah Jenkins".to_string(),
            role: "Owner, Luminous Salon".to_string(),
            content: "Glamora has been our primary supplier for 3 years. The quality is unmatched and delivery is always on time."
                .to_string(),
            rating: 5,
            avatar: "https://i.pravatar.cc/150?u=sarah".to_string(),
        },
        Testimonial {
            id: "2".to_string(),
            name: "Michael Chen".to_string(),
            role: "Lead Stylist".to_string(),
            content: "The professional tools here are game changers. My clients notice the difference in their hair health."
                .to_string(),
            rating: 5,
            avatar: "https://i.pravatar.cc/150?u=michael".to_string(),
        },
    ]
}

/// Default FAQs
pub fn faqs() -> Vec<Faq> {
    vec![
        Faq {
            id: "1".to_string(),
            question: "Do you offer bulk discounts for salons?".to_string(),
            answer: "Yes! We have a specialized Bulk Orders program for verified salon owners and professionals."
                .to_string(),
        },
        Faq {
            id: "2".to_string(),
            question: "What is your shipping policy?".to_string(),
            answer: "We offer free standard shipping on all orders over $150.".to_string(),
        },
    ]
}

/// Default site settings
pub fn default_settings() -> SiteSettings {
    SiteSettings {
        site_name: "Glamora Beauty".to_string(),
        primary_color: "#D4AF37".to_string(),
        secondary_color: "#FDF5E6".to_string(),
        accent_color: "#E19A9A".to_string(),
        dark_color: "#333333".to_string(),
        hero_headline: "Professional Beauty for the Modern Artist".to_string(),
        hero_subheadline:
            "Premium salon supplies and curated beauty products trusted by experts worldwide."
                .to_string(),
        contact_email: "hello@glamora.com".to_string(),
        contact_phone: "+1 (555) 012-3456".to_string(),
        address: "123 Beauty Lane, Glamour City, GC 90210".to_string(),
        facebook_url: "https://facebook.com".to_string(),
        instagram_url: "https://instagram.com".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_product_ids_are_unique() {
        let products = products();
        assert_eq!(products.len(), 4);
        for (i, a) in products.iter().enumerate() {
            for b in &products[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_seed_featured_products() {
        let featured: Vec<_> = products().into_iter().filter(|p| p.is_featured).collect();
        assert_eq!(featured.len(), 3);
    }

    #[test]
    fn test_seed_posts_published() {
        assert!(posts().iter().all(|p| p.is_published));
    }

    #[test]
    fn test_default_settings_colors() {
        let settings = default_settings();
        assert_eq!(settings.primary_color, "#D4AF37");
        assert_eq!(settings.secondary_color, "#FDF5E6");
        assert_eq!(settings.accent_color, "#E19A9A");
        assert_eq!(settings.dark_color, "#333333");
    }
}
