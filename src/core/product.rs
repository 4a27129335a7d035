//! Product business logic - Catalog items and their category links.
//!
//! Product names are unique across the whole shop, not just within a category.
//! Prices are exact decimals; nothing here goes through floating point.

use crate::{
    entities::{Category, Product, category, product},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};

/// Creates a new product under a category.
///
/// # Errors
/// Returns an error if:
/// - A product with the same name exists ([`Error::UniqueViolation`])
/// - The category does not exist ([`Error::ForeignKeyViolation`])
pub async fn create_product<C>(
    db: &C,
    category_id: i32,
    product_name: String,
    price: Decimal,
    description: String,
    image: String,
) -> Result<product::Model>
where
    C: ConnectionTrait,
{
    let product = product::ActiveModel {
        product_name: Set(product_name),
        description: Set(description),
        image: Set(image),
        price: Set(price),
        category_id: Set(category_id),
        ..Default::default()
    };
    product.insert(db).await.map_err(Into::into)
}

/// Retrieves a specific product by its unique ID.
pub async fn get_product_by_id<C>(db: &C, product_id: i32) -> Result<Option<product::Model>>
where
    C: ConnectionTrait,
{
    Product::find_by_id(product_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Finds a specific product by its name.
pub async fn get_product_by_name<C>(db: &C, name: &str) -> Result<Option<product::Model>>
where
    C: ConnectionTrait,
{
    Product::find()
        .filter(product::Column::ProductName.eq(name))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Retrieves every product listed under a category, in creation order.
pub async fn get_products_for_category<C>(
    db: &C,
    category_id: i32,
) -> Result<Vec<product::Model>>
where
    C: ConnectionTrait,
{
    Product::find()
        .filter(product::Column::CategoryId.eq(category_id))
        .order_by_asc(product::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Loads the category a product is listed under.
///
/// # Errors
/// Returns [`Error::CategoryNotFound`] if the category row is missing.
pub async fn get_category_for_product<C>(
    db: &C,
    product: &product::Model,
) -> Result<category::Model>
where
    C: ConnectionTrait,
{
    product
        .find_related(Category)
        .one(db)
        .await?
        .ok_or(Error::CategoryNotFound {
            id: product.category_id,
        })
}

/// Deletes a product.
///
/// # Errors
/// Returns [`Error::ProductNotFound`] if no product has this id.
pub async fn delete_product<C>(db: &C, product_id: i32) -> Result<()>
where
    C: ConnectionTrait,
{
    let result = Product::delete_by_id(product_id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(Error::ProductNotFound { id: product_id });
    }
    Ok(())
}
