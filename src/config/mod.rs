/// Database configuration and connection management
pub mod database;

/// Seed catalog loading from the built-in list or a TOML file
pub mod catalog;
