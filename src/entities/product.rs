//! Product entity - A sellable item listed in the bot's catalog.
//!
//! Product names are unique shop-wide. Prices are exact decimals with two
//! fractional digits.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Product database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    /// Unique identifier for the product
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Product name shown in the catalog
    #[sea_orm(column_type = "String(StringLen::N(20))", unique)]
    pub product_name: String,
    /// Free-form description (width, composition, origin)
    #[sea_orm(column_type = "Text")]
    pub description: String,
    /// Path or URL of the product image
    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub image: String,
    /// Price per unit
    #[sea_orm(column_type = "Decimal(Some((12, 2)))")]
    pub price: Decimal,
    /// Category this product is listed under
    pub category_id: i32,
}

/// Defines relationships between Product and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each product belongs to one category
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::CategoryId",
        to = "super::category::Column::Id"
    )]
    Category,
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
