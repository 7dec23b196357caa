//! Product row model and its storage-form write DTOs.
//!
//! The API layer works with `f64` prices; everything in this module holds
//! the column's [`Decimal`] form. Conversions go through
//! [`gearshelf_core::price`] in both directions.

use gearshelf_core::patch::Patch;
use gearshelf_core::price::{self, PriceError};
use gearshelf_core::product::{CreateProductInput, Product, UpdateProductInput};
use gearshelf_core::types::{DbId, Timestamp};
use rust_decimal::Decimal;
use sqlx::FromRow;

/// A row from the `products` table.
#[derive(Debug, Clone, FromRow)]
pub struct ProductRow {
    pub id: DbId,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub image_url: Option<String>,
    pub category_id: DbId,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub is_featured: bool,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl TryFrom<ProductRow> for Product {
    type Error = PriceError;

    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        Ok(Product {
            id: row.id,
            name: row.name,
            slug: row.slug,
            description: row.description,
            price: price::from_storage(row.price)?,
            image_url: row.image_url,
            category_id: row.category_id,
            brand: row.brand,
            model: row.model,
            is_featured: row.is_featured,
            meta_title: row.meta_title,
            meta_description: row.meta_description,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// Insert payload for `products`.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub image_url: Option<String>,
    pub category_id: DbId,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub is_featured: bool,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
}

impl TryFrom<&CreateProductInput> for NewProduct {
    type Error = PriceError;

    fn try_from(input: &CreateProductInput) -> Result<Self, Self::Error> {
        Ok(NewProduct {
            name: input.name.clone(),
            slug: input.slug.clone(),
            description: input.description.clone(),
            price: price::to_storage(input.price)?,
            image_url: input.image_url.clone(),
            category_id: input.category_id,
            brand: input.brand.clone(),
            model: input.model.clone(),
            is_featured: input.is_featured,
            meta_title: input.meta_title.clone(),
            meta_description: input.meta_description.clone(),
        })
    }
}

/// Column changes for a partial product update. `Absent` fields are left
/// untouched, `Null` clears a nullable column.
#[derive(Debug, Clone, Default)]
pub struct ProductChanges {
    pub name: Patch<String>,
    pub slug: Patch<String>,
    pub description: Patch<String>,
    pub price: Patch<Decimal>,
    pub image_url: Patch<String>,
    pub category_id: Patch<DbId>,
    pub brand: Patch<String>,
    pub model: Patch<String>,
    pub is_featured: Patch<bool>,
    pub meta_title: Patch<String>,
    pub meta_description: Patch<String>,
}

impl TryFrom<&UpdateProductInput> for ProductChanges {
    type Error = PriceError;

    fn try_from(input: &UpdateProductInput) -> Result<Self, Self::Error> {
        let price = match input.price {
            Patch::Absent => Patch::Absent,
            Patch::Null => Patch::Null,
            Patch::Value(p) => Patch::Value(price::to_storage(p)?),
        };
        Ok(ProductChanges {
            name: input.name.clone(),
            slug: input.slug.clone(),
            description: input.description.clone(),
            price,
            image_url: input.image_url.clone(),
            category_id: input.category_id.clone(),
            brand: input.brand.clone(),
            model: input.model.clone(),
            is_featured: input.is_featured.clone(),
            meta_title: input.meta_title.clone(),
            meta_description: input.meta_description.clone(),
        })
    }
}
