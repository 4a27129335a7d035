//! Core module - Framework-agnostic row operations and the seed procedure.
//!
//! Every operation takes any `ConnectionTrait`, so it runs the same on a plain
//! connection or inside an open transaction.

pub mod cart;
pub mod category;
pub mod finally_cart;
pub mod product;
pub mod seed;
pub mod user;
