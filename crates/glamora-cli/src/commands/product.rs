//! Product command handlers

use anyhow::{bail, Context, Result};

use glamora_core::{Category, ProductDraft, Store};

use crate::commands::confirm;
use crate::output::Output;

/// Flag values shared by `product add` and `product edit`
#[derive(Debug, Default)]
pub struct ProductFields {
    pub name: Option<String>,
    pub price: Option<String>,
    pub stock: Option<String>,
    pub category: Option<String>,
    pub image: Option<String>,
    pub description: Option<String>,
    pub featured: Option<bool>,
}

impl ProductFields {
    /// Apply the provided flags onto a draft
    fn apply(self, draft: &mut ProductDraft) -> Result<()> {
        if let Some(name) = self.name {
            draft.name = name;
        }
        if let Some(price) = self.price {
            draft.price = price;
        }
        if let Some(stock) = self.stock {
            draft.stock = stock;
        }
        if let Some(category) = self.category {
            draft.category = Category::parse(&category).with_context(|| {
                format!(
                    "Unknown category '{}'. Expected one of: {}",
                    category,
                    Category::ALL.map(|c| c.name()).join(", ")
                )
            })?;
        }
        if let Some(image) = self.image {
            draft.image = image;
        }
        if let Some(description) = self.description {
            draft.description = description;
        }
        if let Some(featured) = self.featured {
            draft.is_featured = featured;
        }
        Ok(())
    }
}

/// Add a new product to the catalog
pub fn add(store: &mut Store, fields: ProductFields, output: &Output) -> Result<()> {
    let mut draft = ProductDraft::new();
    fields.apply(&mut draft)?;

    let product = draft.commit().context("Invalid product")?;
    let id = product.id.clone();
    store.add_product(product).context("Failed to add product")?;

    output.success(&format!("Added product: {}", id));
    Ok(())
}

/// List all products
pub fn list(store: &Store, output: &Output) -> Result<()> {
    output.print_products(store.products());
    Ok(())
}

/// Show a single product
pub fn show(store: &Store, id: &str, output: &Output) -> Result<()> {
    let product = find_product(store, id)?;
    output.print_product(product);
    Ok(())
}

/// Edit an existing product
///
/// The store's `update_product` is silent about unknown ids, so the lookup
/// and not-found report happen here where there is a user to talk to.
pub fn edit(store: &mut Store, id: &str, fields: ProductFields, output: &Output) -> Result<()> {
    let mut draft = ProductDraft::from_product(find_product(store, id)?);
    fields.apply(&mut draft)?;

    let product = draft.commit().context("Invalid product")?;
    store
        .update_product(product.clone())
        .context("Failed to update product")?;

    output.success("Product updated");
    output.print_product(&product);
    Ok(())
}

/// Delete a product
pub fn delete(store: &mut Store, id: &str, output: &Output) -> Result<()> {
    let product = find_product(store, id)?;

    if output.should_prompt() {
        println!("Delete product: {} - {}", product.id, product.name);
        if !confirm("Are you sure?")? {
            output.message("Cancelled.");
            return Ok(());
        }
    }

    let id = product.id.clone();
    store
        .delete_product(&id)
        .context("Failed to delete product")?;

    output.success(&format!("Deleted product: {}", id));
    Ok(())
}

fn find_product<'a>(store: &'a Store, id: &str) -> Result<&'a glamora_core::Product> {
    match store.get_product(id) {
        Some(product) => Ok(product),
        None => bail!("Product not found: {}", id),
    }
}
