//! Repository for the `products` table.

use gearshelf_core::types::DbId;
use sqlx::PgPool;

use crate::models::product::{NewProduct, ProductChanges, ProductRow};

/// Column list for products queries.
const COLUMNS: &str = "id, name, slug, description, price, image_url, category_id, brand, model, \
                       is_featured, meta_title, meta_description, created_at, updated_at";

/// Column list qualified with the `p` alias, for joins.
const P_COLUMNS: &str = "p.id, p.name, p.slug, p.description, p.price, p.image_url, \
                         p.category_id, p.brand, p.model, p.is_featured, p.meta_title, \
                         p.meta_description, p.created_at, p.updated_at";

/// Provides create, read and partial-update operations for products.
///
/// Every list query orders newest first; rows sharing a `created_at`
/// fall back to the higher id first.
pub struct ProductRepo;

impl ProductRepo {
    /// Insert a new product, returning the created row.
    ///
    /// An unknown `category_id` fails with the `fk_products_category_id`
    /// violation; a duplicate slug with `uq_products_slug`.
    pub async fn create(pool: &PgPool, input: &NewProduct) -> Result<ProductRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO products
                (name, slug, description, price, image_url, category_id, brand, model,
                 is_featured, meta_title, meta_description)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProductRow>(&query)
            .bind(&input.name)
            .bind(&input.slug)
            .bind(&input.description)
            .bind(input.price)
            .bind(&input.image_url)
            .bind(input.category_id)
            .bind(&input.brand)
            .bind(&input.model)
            .bind(input.is_featured)
            .bind(&input.meta_title)
            .bind(&input.meta_description)
            .fetch_one(pool)
            .await
    }

    /// List all products, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<ProductRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, ProductRow>(&query)
            .fetch_all(pool)
            .await
    }

    /// List the products of the category with the given slug, newest first.
    ///
    /// Returns an empty list both for an unknown slug and for a category
    /// without products.
    pub async fn list_by_category_slug(
        pool: &PgPool,
        category_slug: &str,
    ) -> Result<Vec<ProductRow>, sqlx::Error> {
        let query = format!(
            "SELECT {P_COLUMNS}
             FROM products p
             INNER JOIN categories c ON c.id = p.category_id
             WHERE c.slug = $1
             ORDER BY p.created_at DESC, p.id DESC"
        );
        sqlx::query_as::<_, ProductRow>(&query)
            .bind(category_slug)
            .fetch_all(pool)
            .await
    }

    /// Find a product by its slug.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<ProductRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE slug = $1");
        sqlx::query_as::<_, ProductRow>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// List featured products, newest first, at most `limit` rows.
    pub async fn list_featured(pool: &PgPool, limit: i64) -> Result<Vec<ProductRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM products
             WHERE is_featured = TRUE
             ORDER BY created_at DESC, id DESC
             LIMIT $1"
        );
        sqlx::query_as::<_, ProductRow>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Apply a partial update by ID, returning the updated row, or `None`
    /// when no product has that ID.
    ///
    /// Non-nullable columns use `COALESCE`, so only supplied values are
    /// written. Nullable columns take a presence flag and a value, which
    /// lets an explicit `Null` clear them. `updated_at` is always refreshed.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        changes: &ProductChanges,
    ) -> Result<Option<ProductRow>, sqlx::Error> {
        let query = format!(
            "UPDATE products SET
                name             = COALESCE($2, name),
                slug             = COALESCE($3, slug),
                price            = COALESCE($4, price),
                category_id      = COALESCE($5, category_id),
                is_featured      = COALESCE($6, is_featured),
                description      = CASE WHEN $7 THEN $8 ELSE description END,
                image_url        = CASE WHEN $9 THEN $10 ELSE image_url END,
                brand            = CASE WHEN $11 THEN $12 ELSE brand END,
                model            = CASE WHEN $13 THEN $14 ELSE model END,
                meta_title       = CASE WHEN $15 THEN $16 ELSE meta_title END,
                meta_description = CASE WHEN $17 THEN $18 ELSE meta_description END,
                updated_at       = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProductRow>(&query)
            .bind(id)
            .bind(changes.name.value())
            .bind(changes.slug.value())
            .bind(changes.price.value().copied())
            .bind(changes.category_id.value().copied())
            .bind(changes.is_featured.value().copied())
            .bind(changes.description.is_present())
            .bind(changes.description.value())
            .bind(changes.image_url.is_present())
            .bind(changes.image_url.value())
            .bind(changes.brand.is_present())
            .bind(changes.brand.value())
            .bind(changes.model.is_present())
            .bind(changes.model.value())
            .bind(changes.meta_title.is_present())
            .bind(changes.meta_title.value())
            .bind(changes.meta_description.is_present())
            .bind(changes.meta_description.value())
            .fetch_optional(pool)
            .await
    }
}
