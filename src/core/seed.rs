//! Seed procedure - Populates a fresh store with the catalog.
//!
//! All rows are inserted inside one database transaction, so a failed seed leaves
//! nothing behind. Seeding is not an upsert: running it against a store that
//! already holds the same names fails with [`Error::UniqueViolation`] and keeps the
//! existing rows untouched.

use crate::{
    config::catalog::Catalog,
    core::{category, product},
    errors::{Error, Result},
};
use sea_orm::{DatabaseConnection, TransactionTrait};
use tracing::{debug, info, instrument};

/// Number of rows a seed run inserted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    /// Categories inserted
    pub categories: usize,
    /// Products inserted
    pub products: usize,
}

/// Inserts every category, then every product of `catalog`.
///
/// Product category indexes are resolved to the ids of the categories inserted by this
/// same run.
///
/// # Errors
/// Returns an error if:
/// - A product references a category index outside the catalog (nothing is inserted)
/// - A category or product name already exists ([`Error::UniqueViolation`])
/// - Any other insert fails
#[instrument(skip_all, fields(categories = catalog.categories.len(), products = catalog.products.len()))]
pub async fn seed_catalog(db: &DatabaseConnection, catalog: &Catalog) -> Result<SeedSummary> {
    catalog.validate()?;

    let txn = db.begin().await?;

    let mut category_ids = Vec::with_capacity(catalog.categories.len());
    for name in &catalog.categories {
        let row = category::create_category(&txn, name.clone()).await?;
        debug!(id = row.id, name = %row.category_name, "Category inserted");
        category_ids.push(row.id);
    }

    for item in &catalog.products {
        let category_id =
            category_ids
                .get(item.category)
                .copied()
                .ok_or_else(|| Error::UnknownCategory {
                    index: item.category,
                    product: item.name.clone(),
                })?;
        let row = product::create_product(
            &txn,
            category_id,
            item.name.clone(),
            item.price,
            item.description.clone(),
            item.image.clone(),
        )
        .await?;
        debug!(id = row.id, name = %row.product_name, category_id, "Product inserted");
    }

    txn.commit().await?;

    let summary = SeedSummary {
        categories: category_ids.len(),
        products: catalog.products.len(),
    };
    info!(
        "Seeded {} categories and {} products",
        summary.categories, summary.products
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::config::catalog::SeedProduct;
    use crate::entities::{Category, Product};
    use crate::test_utils::*;
    use rust_decimal_macros::dec;
    use sea_orm::{EntityTrait, PaginatorTrait};

    fn fabric_catalog() -> Catalog {
        Catalog {
            categories: vec!["Wool".to_string(), "Cotton".to_string()],
            products: vec![
                SeedProduct {
                    category: 0,
                    name: "Fabric A".to_string(),
                    price: dec!(2000),
                    description: "desc".to_string(),
                    image: "img1".to_string(),
                },
                SeedProduct {
                    category: 1,
                    name: "Fabric B".to_string(),
                    price: dec!(2500),
                    description: "desc".to_string(),
                    image: "img2".to_string(),
                },
            ],
        }
    }

    async fn row_counts(db: &DatabaseConnection) -> Result<(u64, u64)> {
        Ok((
            Category::find().count(db).await?,
            Product::find().count(db).await?,
        ))
    }

    #[tokio::test]
    async fn test_seed_links_products_to_categories() -> Result<()> {
        let db = setup_test_db().await?;

        let summary = seed_catalog(&db, &fabric_catalog()).await?;
        assert_eq!(
            summary,
            SeedSummary {
                categories: 2,
                products: 2
            }
        );
        assert_eq!(row_counts(&db).await?, (2, 2));

        let wool = category::get_category_by_name(&db, "Wool").await?.unwrap();
        let fabric_a = product::get_product_by_name(&db, "Fabric A").await?.unwrap();
        assert_eq!(fabric_a.category_id, wool.id);
        assert_eq!(fabric_a.price, dec!(2000.00));

        let cotton = category::get_category_by_name(&db, "Cotton").await?.unwrap();
        let fabric_b = product::get_product_by_name(&db, "Fabric B").await?.unwrap();
        assert_eq!(fabric_b.category_id, cotton.id);
        Ok(())
    }

    #[tokio::test]
    async fn test_reseed_fails_and_keeps_first_run() -> Result<()> {
        let db = setup_test_db().await?;
        seed_catalog(&db, &fabric_catalog()).await?;

        let result = seed_catalog(&db, &fabric_catalog()).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::UniqueViolation { message: _ }
        ));

        assert_eq!(row_counts(&db).await?, (2, 2));
        assert!(category::get_category_by_name(&db, "Wool").await?.is_some());
        Ok(())
    }

    #[tokio::test]
    async fn test_failed_seed_inserts_nothing() -> Result<()> {
        let db = setup_test_db().await?;

        // Second product clashes with the first after both categories went in
        let mut catalog = fabric_catalog();
        catalog.products[1].name = "Fabric A".to_string();

        let result = seed_catalog(&db, &catalog).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::UniqueViolation { message: _ }
        ));
        assert_eq!(row_counts(&db).await?, (0, 0));
        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_category_index_rejected_up_front() -> Result<()> {
        let db = setup_test_db().await?;

        let mut catalog = fabric_catalog();
        catalog.products[0].category = 5;

        let result = seed_catalog(&db, &catalog).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::UnknownCategory { index: 5, .. }
        ));
        assert_eq!(row_counts(&db).await?, (0, 0));
        Ok(())
    }

    #[tokio::test]
    async fn test_seed_builtin_catalog() -> Result<()> {
        let db = setup_test_db().await?;
        let catalog = Catalog::builtin();

        let summary = seed_catalog(&db, &catalog).await?;
        assert_eq!(summary.categories, catalog.categories.len());
        assert_eq!(summary.products, catalog.products.len());

        // Every wool fabric landed in the first category
        let wool = category::get_category_by_name(&db, &catalog.categories[0])
            .await?
            .unwrap();
        assert_eq!(product::get_products_for_category(&db, wool.id).await?.len(), 3);
        Ok(())
    }
}
