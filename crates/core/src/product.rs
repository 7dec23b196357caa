//! Product contracts.
//!
//! Products carry `price` as a plain number here; the storage layer holds
//! it as a fixed-point decimal and converts through [`crate::price`].

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::patch::Patch;
use crate::types::{DbId, Timestamp};
use crate::validation;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: DbId,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub price: f64,
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

/// Input for `createProduct`.
///
/// Nullable fields must be present in the payload; `is_featured` defaults
/// to `false` when omitted.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProductInput {
    pub name: String,
    pub slug: String,
    #[serde(deserialize_with = "Option::deserialize")]
    pub description: Option<String>,
    pub price: f64,
    #[serde(deserialize_with = "Option::deserialize")]
    pub image_url: Option<String>,
    pub category_id: DbId,
    #[serde(deserialize_with = "Option::deserialize")]
    pub brand: Option<String>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub model: Option<String>,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(deserialize_with = "Option::deserialize")]
    pub meta_title: Option<String>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub meta_description: Option<String>,
}

impl Validate for CreateProductInput {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        validation::non_empty(&mut errors, "name", &self.name);
        validation::non_empty(&mut errors, "slug", &self.slug);
        validation::price(&mut errors, "price", self.price);
        if let Some(url) = &self.image_url {
            validation::url(&mut errors, "image_url", url);
        }
        validation::finish(errors)
    }
}

/// Input for `updateProduct`.
///
/// Only fields that are present are written. Nullable columns accept an
/// explicit `null` to clear them; the rest reject it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProductInput {
    pub id: DbId,
    #[serde(default)]
    pub name: Patch<String>,
    #[serde(default)]
    pub slug: Patch<String>,
    #[serde(default)]
    pub description: Patch<String>,
    #[serde(default)]
    pub price: Patch<f64>,
    #[serde(default)]
    pub image_url: Patch<String>,
    #[serde(default)]
    pub category_id: Patch<DbId>,
    #[serde(default)]
    pub brand: Patch<String>,
    #[serde(default)]
    pub model: Patch<String>,
    #[serde(default)]
    pub is_featured: Patch<bool>,
    #[serde(default)]
    pub meta_title: Patch<String>,
    #[serde(default)]
    pub meta_description: Patch<String>,
}

impl Validate for UpdateProductInput {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        match &self.name {
            Patch::Null => validation::not_null(&mut errors, "name"),
            Patch::Value(name) => validation::non_empty(&mut errors, "name", name),
            Patch::Absent => {}
        }
        match &self.slug {
            Patch::Null => validation::not_null(&mut errors, "slug"),
            Patch::Value(slug) => validation::non_empty(&mut errors, "slug", slug),
            Patch::Absent => {}
        }
        match self.price {
            Patch::Null => validation::not_null(&mut errors, "price"),
            Patch::Value(price) => validation::price(&mut errors, "price", price),
            Patch::Absent => {}
        }
        if self.category_id.is_null() {
            validation::not_null(&mut errors, "category_id");
        }
        if self.is_featured.is_null() {
            validation::not_null(&mut errors, "is_featured");
        }
        if let Patch::Value(url) = &self.image_url {
            validation::url(&mut errors, "image_url", url);
        }

        validation::finish(errors)
    }
}
