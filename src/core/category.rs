//! Category operations - Creating and looking up product groupings.

use crate::{
    entities::{Category, category},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};

/// Inserts a new category.
///
/// # Errors
/// Returns [`Error::UniqueViolation`] if the name is already taken.
pub async fn create_category<C>(db: &C, category_name: String) -> Result<category::Model>
where
    C: ConnectionTrait,
{
    let category = category::ActiveModel {
        category_name: Set(category_name),
        ..Default::default()
    };
    category.insert(db).await.map_err(Into::into)
}

/// Retrieves all categories in creation order.
pub async fn get_all_categories<C>(db: &C) -> Result<Vec<category::Model>>
where
    C: ConnectionTrait,
{
    Category::find()
        .order_by_asc(category::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds a category by its name.
pub async fn get_category_by_name<C>(db: &C, name: &str) -> Result<Option<category::Model>>
where
    C: ConnectionTrait,
{
    Category::find()
        .filter(category::Column::CategoryName.eq(name))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Deletes a category.
///
/// Categories that still list products are not removed; there is no cascade.
///
/// # Errors
/// Returns an error if:
/// - The category does not exist
/// - Products still reference it ([`Error::ForeignKeyViolation`])
pub async fn delete_category<C>(db: &C, category_id: i32) -> Result<()>
where
    C: ConnectionTrait,
{
    let result = Category::delete_by_id(category_id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(Error::CategoryNotFound { id: category_id });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_create_and_find_category() -> Result<()> {
        let db = setup_test_db().await?;

        let wool = create_category(&db, "Wool".to_string()).await?;
        let cotton = create_category(&db, "Cotton".to_string()).await?;

        assert_eq!(get_category_by_name(&db, "Wool").await?.unwrap(), wool);
        assert!(get_category_by_name(&db, "Silk").await?.is_none());
        assert_eq!(get_all_categories(&db).await?, vec![wool, cotton]);
        Ok(())
    }

    #[tokio::test]
    async fn test_duplicate_category_rejected() -> Result<()> {
        let db = setup_test_db().await?;
        create_category(&db, "Wool".to_string()).await?;

        let result = create_category(&db, "Wool".to_string()).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::UniqueViolation { message: _ }
        ));
        assert_eq!(get_all_categories(&db).await?.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_delete_empty_category() -> Result<()> {
        let db = setup_test_db().await?;
        let velvet = create_category(&db, "Velvet".to_string()).await?;

        delete_category(&db, velvet.id).await?;
        assert!(get_all_categories(&db).await?.is_empty());

        let result = delete_category(&db, velvet.id).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::CategoryNotFound { id: _ }
        ));
        Ok(())
    }

    #[tokio::test]
    async fn test_delete_category_with_products_rejected() -> Result<()> {
        let (db, category, product) = setup_with_product().await?;

        let result = delete_category(&db, category.id).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::ForeignKeyViolation { message: _ }
        ));

        // Nothing was removed
        assert!(get_category_by_name(&db, &category.category_name).await?.is_some());
        assert!(
            crate::core::product::get_product_by_id(&db, product.id)
                .await?
                .is_some()
        );
        Ok(())
    }
}
