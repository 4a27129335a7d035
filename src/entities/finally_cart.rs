//! Finally cart entity - A product line locked in at checkout.
//!
//! A cart may hold each product name at most once; the composite unique
//! index on `(cart_id, product_name)` is created alongside the table in
//! [`crate::config::database::create_tables`].

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Finalized cart line database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "finally_carts")]
pub struct Model {
    /// Unique identifier for the line
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Name of the product as it was at checkout
    #[sea_orm(column_type = "String(StringLen::N(50))")]
    pub product_name: String,
    /// Purchased quantity
    pub quantity: f64,
    /// Price of the whole line
    #[sea_orm(column_type = "Decimal(Some((12, 2)))")]
    pub final_price: Decimal,
    /// Cart this line belongs to
    pub cart_id: i32,
}

/// Defines relationships between a finalized line and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each line belongs to one cart
    #[sea_orm(
        belongs_to = "super::cart::Entity",
        from = "Column::CartId",
        to = "super::cart::Column::Id"
    )]
    Cart,
}

impl Related<super::cart::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Cart.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
