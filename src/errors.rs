//! Unified error types for schema creation, seeding and row operations.
//!
//! Store errors are classified on the way in: unique and foreign-key
//! violations get their own variants so callers can tell a re-seed or a
//! referenced delete apart from a broken connection.

use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

/// Errors produced by this crate
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid configuration or catalog input
    #[error("Configuration error: {message}")]
    Config {
        /// What was wrong
        message: String,
    },

    /// A required environment variable is not set
    #[error("Missing environment variable: {name}")]
    MissingEnv {
        /// Variable name
        name: &'static str,
    },

    /// The store could not be reached with the configured parameters
    #[error("Failed to connect to {url}: {source}")]
    Connection {
        /// Connection URL with the password redacted
        url: String,
        /// Underlying driver error
        source: DbErr,
    },

    /// A unique constraint rejected the write
    #[error("Unique constraint violation: {message}")]
    UniqueViolation {
        /// Message reported by the store
        message: String,
    },

    /// A foreign key constraint rejected the write or delete
    #[error("Foreign key constraint violation: {message}")]
    ForeignKeyViolation {
        /// Message reported by the store
        message: String,
    },

    /// Any other store error
    #[error("Database error: {0}")]
    Database(DbErr),

    /// A seed product points at a category index that does not exist
    #[error("Product {product:?} references unknown category index {index}")]
    UnknownCategory {
        /// Zero-based category index from the catalog
        index: usize,
        /// Product name
        product: String,
    },

    /// No user with the given id
    #[error("User not found: {id}")]
    UserNotFound {
        /// User id
        id: i32,
    },

    /// No cart with the given id
    #[error("Cart not found: {id}")]
    CartNotFound {
        /// Cart id
        id: i32,
    },

    /// No category with the given id
    #[error("Category not found: {id}")]
    CategoryNotFound {
        /// Category id
        id: i32,
    },

    /// No product with the given id
    #[error("Product not found: {id}")]
    ProductNotFound {
        /// Product id
        id: i32,
    },
}

impl From<DbErr> for Error {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(message)) => Self::UniqueViolation { message },
            Some(SqlErr::ForeignKeyConstraintViolation(message)) => {
                Self::ForeignKeyViolation { message }
            }
            _ => Self::Database(err),
        }
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
