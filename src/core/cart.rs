//! Cart operations - Each user gets exactly one cart holding running totals.
//!
//! Carts are created empty (zero price, zero items). The store enforces one cart per
//! user through the unique `user_id` column.

use crate::{
    entities::{Cart, User, cart, user},
    errors::{Error, Result},
};
use sea_orm::{Set, prelude::*};

/// Creates an empty cart for a user.
///
/// # Errors
/// Returns an error if:
/// - The user already has a cart ([`Error::UniqueViolation`])
/// - The user does not exist ([`Error::ForeignKeyViolation`])
pub async fn create_cart<C>(db: &C, user_id: i32) -> Result<cart::Model>
where
    C: ConnectionTrait,
{
    let cart = cart::ActiveModel {
        user_id: Set(user_id),
        ..Default::default()
    };
    cart.insert(db).await.map_err(Into::into)
}

/// Retrieves a cart by primary key.
pub async fn get_cart_by_id<C>(db: &C, cart_id: i32) -> Result<Option<cart::Model>>
where
    C: ConnectionTrait,
{
    Cart::find_by_id(cart_id).one(db).await.map_err(Into::into)
}

/// Finds the cart owned by a user, if any.
pub async fn get_cart_for_user<C>(db: &C, user_id: i32) -> Result<Option<cart::Model>>
where
    C: ConnectionTrait,
{
    Cart::find()
        .filter(cart::Column::UserId.eq(user_id))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Loads the owner of a cart by following the cart -> user relation.
///
/// # Errors
/// Returns [`Error::UserNotFound`] if the owner row is missing.
pub async fn get_user_for_cart<C>(db: &C, cart: &cart::Model) -> Result<user::Model>
where
    C: ConnectionTrait,
{
    cart.find_related(User)
        .one(db)
        .await?
        .ok_or(Error::UserNotFound { id: cart.user_id })
}

/// Deletes a cart.
///
/// # Errors
/// Returns an error if:
/// - The cart does not exist
/// - The cart still has finalized lines ([`Error::ForeignKeyViolation`])
pub async fn delete_cart<C>(db: &C, cart_id: i32) -> Result<()>
where
    C: ConnectionTrait,
{
    let result = Cart::delete_by_id(cart_id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(Error::CartNotFound { id: cart_id });
    }
    Ok(())
}
