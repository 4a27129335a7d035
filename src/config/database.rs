//! Database configuration module.
//!
//! This module handles connection parameters, connecting to the store, and table creation
//! using `SeaORM`. Tables are generated with `Schema::create_table_from_entity` from the
//! entity models, so the database schema always matches the Rust struct definitions. Every
//! statement is issued with `IF NOT EXISTS`, which makes [`create_tables`] safe to run on
//! every start.

use crate::entities::{Cart, Category, FinallyCart, Product, User, finally_cart};
use crate::errors::{Error, Result};
use sea_orm::sea_query::Index;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, EntityTrait, Schema};
use std::time::Duration;
use tracing::{debug, info, instrument};
use url::Url;

/// Name of the composite unique index over `(cart_id, product_name)`.
pub const FINALLY_CART_PRODUCT_INDEX: &str = "idx-finally_carts-cart_id-product_name";

/// Upper bound for opening the first connection to the store.
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Connection parameters for the backing store.
///
/// Built from the `DB_*` environment variables by [`DbConfig::from_env`], or directly
/// in tests. `url_override` takes precedence over the composed Postgres URL.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DbConfig {
    /// Database role
    pub user: String,
    /// Role password
    pub password: String,
    /// `host` or `host:port`
    pub address: String,
    /// Database name
    pub name: String,
    /// Log every SQL statement
    pub debug: bool,
    /// Full connection URL, used verbatim when set (`DATABASE_URL`)
    pub url_override: Option<String>,
}

impl DbConfig {
    /// Config pointing straight at `url`, e.g. `sqlite::memory:`.
    #[must_use]
    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            url_override: Some(url.into()),
            ..Self::default()
        }
    }

    /// Reads `DB_USER`, `DB_PASSWORD`, `DB_ADDRESS`, `DB_NAME`, `DB_DEBUG` and
    /// `DATABASE_URL` from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`DbConfig::from_env`] but with a caller-supplied variable lookup.
    ///
    /// When `DATABASE_URL` is present the `DB_*` connection variables become optional.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let url_override = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty());
        let required = |name: &'static str| -> Result<String> {
            match lookup(name) {
                Some(value) => Ok(value),
                None if url_override.is_some() => Ok(String::new()),
                None => Err(Error::MissingEnv { name }),
            }
        };

        Ok(Self {
            user: required("DB_USER")?,
            password: required("DB_PASSWORD")?,
            address: required("DB_ADDRESS")?,
            name: required("DB_NAME")?,
            debug: parse_flag(lookup("DB_DEBUG").as_deref()),
            url_override,
        })
    }

    /// The URL handed to the driver.
    #[must_use]
    pub fn url(&self) -> String {
        self.url_override.clone().unwrap_or_else(|| {
            format!(
                "postgres://{}:{}@{}/{}",
                self.user, self.password, self.address, self.name
            )
        })
    }

    /// The URL with the password masked, safe for logs and error messages.
    #[must_use]
    pub fn redacted_url(&self) -> String {
        redact_password(&self.url())
    }
}

/// Replaces the password of `raw` with `***`.
///
/// URLs that cannot be parsed are hidden entirely, since there is no telling where
/// the credentials are.
fn redact_password(raw: &str) -> String {
    match Url::parse(raw) {
        Ok(mut url) => {
            if url.password().is_some() {
                // Only fails for URLs without a host, which carry no password
                let _ = url.set_password(Some("***"));
            }
            url.to_string()
        }
        Err(_) => "<unparseable database url>".to_string(),
    }
}

/// Interprets `DB_DEBUG`-style toggles. Anything but `1/true/yes/on` is off.
fn parse_flag(value: Option<&str>) -> bool {
    value.is_some_and(|v| {
        matches!(
            v.trim().to_ascii_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        )
    })
}

/// Establishes a connection to the store described by `config`.
///
/// Fails with [`Error::Connection`] when the URL has no supporting driver, or when no
/// connection could be opened within [`CONNECT_TIMEOUT`].
#[instrument(skip(config), fields(url = %config.redacted_url()))]
pub async fn connect(config: &DbConfig) -> Result<DatabaseConnection> {
    let mut options = ConnectOptions::new(config.url());
    options
        .connect_timeout(CONNECT_TIMEOUT)
        .acquire_timeout(CONNECT_TIMEOUT)
        .sqlx_logging(config.debug);

    debug!("Opening database connection");
    let db = Database::connect(options)
        .await
        .map_err(|source| Error::Connection {
            url: config.redacted_url(),
            source,
        })?;
    info!("Database connection established");
    Ok(db)
}

/// Creates one entity's table if it does not exist yet.
async fn create_table<C, E>(db: &C, schema: &Schema, entity: E) -> Result<()>
where
    C: ConnectionTrait,
    E: EntityTrait,
{
    let builder = db.get_database_backend();
    let mut table = schema.create_table_from_entity(entity);
    table.if_not_exists();
    db.execute(builder.build(&table)).await?;
    debug!(table = entity.table_name(), "Table ensured");
    Ok(())
}

/// Creates all tables and indexes that are missing.
///
/// Tables are created parents first so foreign keys always resolve: users, carts,
/// finally carts, categories, products. Running this against an up-to-date store
/// changes nothing.
#[instrument(skip(db))]
pub async fn create_tables<C>(db: &C) -> Result<()>
where
    C: ConnectionTrait,
{
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    create_table(db, &schema, User).await?;
    create_table(db, &schema, Cart).await?;
    create_table(db, &schema, FinallyCart).await?;
    create_table(db, &schema, Category).await?;
    create_table(db, &schema, Product).await?;

    // No duplicate product lines within one cart
    let line_index = Index::create()
        .name(FINALLY_CART_PRODUCT_INDEX)
        .table(FinallyCart)
        .col(finally_cart::Column::CartId)
        .col(finally_cart::Column::ProductName)
        .unique()
        .if_not_exists()
        .to_owned();
    db.execute(builder.build(&line_index)).await?;

    info!("Database schema ensured");
    Ok(())
}
