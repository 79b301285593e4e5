//! Persistent repositories backed by PostgreSQL.
//!
//! Each operation is a single SQL statement executed through a shared
//! pool; identifier assignment is delegated to the `BIGSERIAL` key, which
//! gives the same monotonic, never-reused semantics as the in-memory
//! counter. No explicit transactions: every operation is self-contained.

use async_trait::async_trait;
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};

use crate::domain::error::ApiError;
use crate::domain::model::{Category, Product};
use crate::storage::repository::Repository;

pub async fn connect(database_url: &str) -> anyhow::Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await?;
    Ok(pool)
}

/// Creates the resource tables if they do not exist yet.
pub async fn ensure_schema(pool: &PgPool) -> anyhow::Result<()> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS products (
            id BIGSERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            price BIGINT NOT NULL,
            stock BIGINT NOT NULL
        )",
    )
    .execute(pool)
    .await?;
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS categories (
            id BIGSERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            description TEXT
        )",
    )
    .execute(pool)
    .await?;
    Ok(())
}

fn product_from_row(row: &PgRow) -> Result<Product, ApiError> {
    Ok(Product {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        price: row.try_get("price")?,
        stock: row.try_get("stock")?,
    })
}

fn category_from_row(row: &PgRow) -> Result<Category, ApiError> {
    Ok(Category {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        description: row.try_get("description")?,
    })
}

#[derive(Clone)]
pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Product> for PgProductRepository {
    async fn get_all(&self) -> Result<Vec<Product>, ApiError> {
        let rows = sqlx::query("SELECT id, name, price, stock FROM products ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        rows.iter().map(product_from_row).collect()
    }

    async fn get_by_id(&self, id: i64) -> Result<Product, ApiError> {
        let row = sqlx::query("SELECT id, name, price, stock FROM products WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        match row {
            Some(row) => product_from_row(&row),
            None => Err(ApiError::not_found("product", id)),
        }
    }

    async fn create(&self, data: Product) -> Result<Product, ApiError> {
        let row = sqlx::query(
            "INSERT INTO products (name, price, stock) VALUES ($1, $2, $3)
             RETURNING id, name, price, stock",
        )
        .bind(&data.name)
        .bind(data.price)
        .bind(data.stock)
        .fetch_one(&self.pool)
        .await?;
        product_from_row(&row)
    }

    async fn update(&self, id: i64, data: Product) -> Result<Product, ApiError> {
        let row = sqlx::query(
            "UPDATE products SET name = $2, price = $3, stock = $4 WHERE id = $1
             RETURNING id, name, price, stock",
        )
        .bind(id)
        .bind(&data.name)
        .bind(data.price)
        .bind(data.stock)
        .fetch_optional(&self.pool)
        .await?;
        match row {
            Some(row) => product_from_row(&row),
            None => Err(ApiError::not_found("product", id)),
        }
    }

    async fn delete(&self, id: i64) -> Result<(), ApiError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(ApiError::not_found("product", id));
        }
        Ok(())
    }
}

#[derive(Clone)]
pub struct PgCategoryRepository {
    pool: PgPool,
}

impl PgCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Category> for PgCategoryRepository {
    async fn get_all(&self) -> Result<Vec<Category>, ApiError> {
        let rows = sqlx::query("SELECT id, name, description FROM categories ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        rows.iter().map(category_from_row).collect()
    }

    async fn get_by_id(&self, id: i64) -> Result<Category, ApiError> {
        let row = sqlx::query("SELECT id, name, description FROM categories WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        match row {
            Some(row) => category_from_row(&row),
            None => Err(ApiError::not_found("category", id)),
        }
    }

    async fn create(&self, data: Category) -> Result<Category, ApiError> {
        let row = sqlx::query(
            "INSERT INTO categories (name, description) VALUES ($1, $2)
             RETURNING id, name, description",
        )
        .bind(&data.name)
        .bind(&data.description)
        .fetch_one(&self.pool)
        .await?;
        category_from_row(&row)
    }

    async fn update(&self, id: i64, data: Category) -> Result<Category, ApiError> {
        let row = sqlx::query(
            "UPDATE categories SET name = $2, description = $3 WHERE id = $1
             RETURNING id, name, description",
        )
        .bind(id)
        .bind(&data.name)
        .bind(&data.description)
        .fetch_optional(&self.pool)
        .await?;
        match row {
            Some(row) => category_from_row(&row),
            None => Err(ApiError::not_found("category", id)),
        }
    }

    async fn delete(&self, id: i64) -> Result<(), ApiError> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(ApiError::not_found("category", id));
        }
        Ok(())
    }
}
