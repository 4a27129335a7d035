//! User entity - A customer talking to the shop through the Telegram bot.
//!
//! Users are identified externally by their Telegram id, which is unique.
//! Each user owns at most one cart.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// User database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// Unique identifier for the user
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Display name
    #[sea_orm(column_type = "String(StringLen::N(50))")]
    pub name: String,
    /// Telegram user id
    #[sea_orm(unique)]
    pub telegram: i64,
    /// Optional phone number, digits only
    #[sea_orm(column_type = "String(StringLen::N(11))", nullable)]
    pub phone: Option<String>,
}

/// Defines relationships between User and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One user has one cart
    #[sea_orm(has_one = "super::cart::Entity")]
    Cart,
}

impl Related<super::cart::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Cart.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
