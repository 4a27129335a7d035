//! Shared test utilities.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test rows with sensible defaults.

use crate::{
    config::database::{DbConfig, connect, create_tables},
    core::{cart, category, product, user},
    entities,
    errors::Result,
};
use rust_decimal::Decimal;
use sea_orm::DatabaseConnection;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = connect(&DbConfig::from_url("sqlite::memory:")).await?;
    create_tables(&db).await?;
    Ok(db)
}

/// Creates a test user without a phone number.
pub async fn create_test_user(
    db: &DatabaseConnection,
    name: &str,
    telegram: i64,
) -> Result<entities::user::Model> {
    user::create_user(db, name.to_string(), telegram, None).await
}

/// Creates a test category.
pub async fn create_test_category(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entities::category::Model> {
    category::create_category(db, name.to_string()).await
}

/// Creates a test product with sensible defaults.
///
/// # Defaults
/// * `price`: 10.00
/// * `description`: `"Test description"`
/// * `image`: `"test.png"`
pub async fn create_test_product(
    db: &DatabaseConnection,
    name: &str,
    category_id: i32,
) -> Result<entities::product::Model> {
    create_custom_product(db, name, Decimal::new(1000, 2), category_id).await
}

/// Creates a test product with a custom price.
pub async fn create_custom_product(
    db: &DatabaseConnection,
    name: &str,
    price: Decimal,
    category_id: i32,
) -> Result<entities::product::Model> {
    product::create_product(
        db,
        category_id,
        name.to_string(),
        price,
        "Test description".to_string(),
        "test.png".to_string(),
    )
    .await
}

/// Sets up a test environment with one category.
/// Returns (db, category).
pub async fn setup_with_category() -> Result<(DatabaseConnection, entities::category::Model)> {
    let db = setup_test_db().await?;
    let category = create_test_category(&db, "Test Category").await?;
    Ok((db, category))
}

/// Sets up a test environment with a category and one product in it.
/// Returns (db, category, product).
pub async fn setup_with_product() -> Result<(
    DatabaseConnection,
    entities::category::Model,
    entities::product::Model,
)> {
    let (db, category) = setup_with_category().await?;
    let product = create_test_product(&db, "Test Product", category.id).await?;
    Ok((db, category, product))
}

/// Sets up a test environment with a user and their empty cart.
/// Returns (db, user, cart).
pub async fn setup_with_cart() -> Result<(
    DatabaseConnection,
    entities::user::Model,
    entities::cart::Model,
)> {
    let db = setup_test_db().await?;
    let user = create_test_user(&db, "Test User", 1_000_001).await?;
    let cart = cart::create_cart(&db, user.id).await?;
    Ok((db, user, cart))
}
