//! Seed catalog - the categories and products a fresh store is populated with.
//!
//! The built-in catalog is compiled in. A TOML file with the same shape can replace it:
//!
//! ```toml
//! categories = ["Wool", "Cotton"]
//!
//! [[products]]
//! category = 0
//! name = "Fabric A"
//! price = "2000.00"
//! description = "desc"
//! image = "img1"
//! ```
//!
//! `category` is a zero-based index into `categories`.

use crate::errors::{Error, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::path::Path;

/// Everything the seed procedure inserts
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Catalog {
    /// Category names, in insertion order
    pub categories: Vec<String>,
    /// Products referencing `categories` by position
    #[serde(default)]
    pub products: Vec<SeedProduct>,
}

/// A single product row of the catalog
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SeedProduct {
    /// Zero-based index into [`Catalog::categories`]
    pub category: usize,
    /// Product name
    pub name: String,
    /// Unit price
    pub price: Decimal,
    /// Description text
    pub description: String,
    /// Image path
    pub image: String,
}

impl SeedProduct {
    fn new(category: usize, name: &str, price: i64, description: &str, image: &str) -> Self {
        Self {
            category,
            name: name.to_string(),
            price: Decimal::from(price),
            description: description.to_string(),
            image: image.to_string(),
        }
    }
}

impl Catalog {
    /// The fabric shop's starting assortment.
    #[must_use]
    pub fn builtin() -> Self {
        let categories = ["Шерсть", "Хлопок", "Бархат", "Плащевая", "Шелк"]
            .into_iter()
            .map(String::from)
            .collect();

        let products = vec![
            SeedProduct::new(
                0,
                "9/21/2/П Синий",
                2000,
                "Шерсть 70%, п/а 30%",
                "image_path_category_1",
            ),
            SeedProduct::new(
                0,
                "Твид 16976/0220",
                3000,
                "Ширина: 140 см; Состав: 80% ШЕРСТЬ, 20% ПОЛИЭСТЕР; Производитель: Италия",
                "image_path_category_1",
            ),
            SeedProduct::new(
                0,
                "Твид 40/21/2/Ш",
                4000,
                "Ширина: 140 см; Состав: 60% ШЕРСТЬ, 20% ВИСКОЗА, 20% ПОЛИЭСТЕР; Производитель: Италия",
                "image_path_category_1",
            ),
            SeedProduct::new(
                1,
                "Клетка FZG2021 #7",
                5000,
                "В клетку, арт. FZG2021 #7 /22/1. Ширина: 140 см; Состав: 100% ХЛОПОК; Производитель: Италия",
                "image_path_category_2",
            ),
            SeedProduct::new(
                1,
                "Гладкий JTC-5141",
                2500,
                "Однотонный, арт. JTC-5141 #18-3929. Ширина: 140 см; Состав: 100% ХЛОПОК; Производитель: Италия",
                "image_path_category_2",
            ),
            SeedProduct::new(
                1,
                "Полоска STRIBE NEW2",
                2700,
                "В полоску, арт. STRIBE NEW2#6 s.cotton /03/21/. Ширина: 140 см; Состав: 100% ХЛОПОК; Производитель: Италия",
                "image_path_category_2",
            ),
        ];

        Self {
            categories,
            products,
        }
    }

    /// Checks that every product points at an existing category.
    ///
    /// # Errors
    /// Returns [`Error::UnknownCategory`] for the first product whose index is out of range.
    pub fn validate(&self) -> Result<()> {
        match self
            .products
            .iter()
            .find(|p| p.category >= self.categories.len())
        {
            Some(product) => Err(Error::UnknownCategory {
                index: product.category,
                product: product.name.clone(),
            }),
            None => Ok(()),
        }
    }
}

/// Loads a catalog from a TOML file and validates its category references.
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid or required fields are missing
/// - A product references a category index that does not exist
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog> {
    let path_ref = path.as_ref();
    tracing::debug!("Attempting to load seed catalog from: {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read catalog file {}: {e}", path_ref.display()),
    })?;

    let catalog: Catalog = toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse catalog file {}: {e}", path_ref.display()),
    })?;
    catalog.validate()?;
    Ok(catalog)
}
