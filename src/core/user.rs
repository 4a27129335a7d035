//! User operations - Registering bot users and looking them up.
//!
//! Users are keyed externally by their Telegram id. The store rejects a second
//! user with the same Telegram id; the error surfaces as [`Error::UniqueViolation`].

use crate::{
    entities::{User, user},
    errors::{Error, Result},
};
use sea_orm::{Set, prelude::*};

/// Inserts a new user.
///
/// # Errors
/// Returns [`Error::UniqueViolation`] if a user with the same `telegram` id exists,
/// or another error if the insert fails.
pub async fn create_user<C>(
    db: &C,
    name: String,
    telegram: i64,
    phone: Option<String>,
) -> Result<user::Model>
where
    C: ConnectionTrait,
{
    let user = user::ActiveModel {
        name: Set(name),
        telegram: Set(telegram),
        phone: Set(phone),
        ..Default::default()
    };
    user.insert(db).await.map_err(Into::into)
}

/// Retrieves a user by primary key.
pub async fn get_user_by_id<C>(db: &C, user_id: i32) -> Result<Option<user::Model>>
where
    C: ConnectionTrait,
{
    User::find_by_id(user_id).one(db).await.map_err(Into::into)
}

/// Finds the user registered under a Telegram id.
///
/// This is the lookup the bot performs on every incoming message.
pub async fn get_user_by_telegram<C>(db: &C, telegram: i64) -> Result<Option<user::Model>>
where
    C: ConnectionTrait,
{
    User::find()
        .filter(user::Column::Telegram.eq(telegram))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Deletes a user.
///
/// There is no cascade: a user that still owns a cart cannot be deleted.
///
/// # Errors
/// Returns an error if:
/// - The user does not exist
/// - The user still owns a cart ([`Error::ForeignKeyViolation`])
pub async fn delete_user<C>(db: &C, user_id: i32) -> Result<()>
where
    C: ConnectionTrait,
{
    let result = User::delete_by_id(user_id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(Error::UserNotFound { id: user_id });
    }
    Ok(())
}
