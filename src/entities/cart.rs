//! Cart entity - A user's in-progress selection, kept until checkout.
//!
//! The cart tracks running totals only; the locked-in lines live in
//! `finally_carts`. `user_id` is unique, so a user can never own two carts.

use sea_orm::{Set, entity::prelude::*};
use serde::{Deserialize, Serialize};

/// Cart database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "carts")]
pub struct Model {
    /// Unique identifier for the cart
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Sum of all selected items
    #[sea_orm(column_type = "Decimal(Some((12, 2)))")]
    pub total_price: Decimal,
    /// Number of selected items (fractional for goods sold by length)
    pub total_products: f64,
    /// Owning user
    #[sea_orm(unique)]
    pub user_id: i32,
}

/// Defines relationships between Cart and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each cart belongs to one user
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
    /// One cart has many finalized lines
    #[sea_orm(has_many = "super::finally_cart::Entity")]
    FinallyCarts,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::finally_cart::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FinallyCarts.def()
    }
}

impl ActiveModelBehavior for ActiveModel {
    /// New carts start empty.
    fn new() -> Self {
        Self {
            total_price: Set(Decimal::ZERO),
            total_products: Set(0.0),
            ..ActiveModelTrait::default()
        }
    }
}
