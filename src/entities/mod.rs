//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod cart;
pub mod category;
pub mod finally_cart;
pub mod product;
pub mod user;

// Re-export specific types to avoid conflicts
pub use cart::{Column as CartColumn, Entity as Cart, Model as CartModel};
pub use category::{Column as CategoryColumn, Entity as Category, Model as CategoryModel};
pub use finally_cart::{
    Column as FinallyCartColumn, Entity as FinallyCart, Model as FinallyCartModel,
};
pub use product::{Column as ProductColumn, Entity as Product, Model as ProductModel};
pub use user::{Column as UserColumn, Entity as User, Model as UserModel};
