//! Finalized cart lines - Products locked in at checkout.
//!
//! Lines are written once and read back in insertion order. A cart cannot hold two
//! lines for the same product name; the composite unique index rejects the second one.

use crate::{
    entities::{FinallyCart, finally_cart},
    errors::Result,
};
use sea_orm::{QueryOrder, Set, prelude::*};

/// Records a checkout line for a cart.
///
/// # Errors
/// Returns an error if:
/// - The cart already has a line with this product name ([`crate::errors::Error::UniqueViolation`])
/// - The cart does not exist ([`crate::errors::Error::ForeignKeyViolation`])
pub async fn add_line<C>(
    db: &C,
    cart_id: i32,
    product_name: String,
    quantity: f64,
    final_price: Decimal,
) -> Result<finally_cart::Model>
where
    C: ConnectionTrait,
{
    let line = finally_cart::ActiveModel {
        product_name: Set(product_name),
        quantity: Set(quantity),
        final_price: Set(final_price),
        cart_id: Set(cart_id),
        ..Default::default()
    };
    line.insert(db).await.map_err(Into::into)
}

/// Retrieves every line of a cart, oldest first.
pub async fn get_lines_for_cart<C>(db: &C, cart_id: i32) -> Result<Vec<finally_cart::Model>>
where
    C: ConnectionTrait,
{
    FinallyCart::find()
        .filter(finally_cart::Column::CartId.eq(cart_id))
        .order_by_asc(finally_cart::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}
