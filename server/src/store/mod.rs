pub mod catalog;
pub mod models;

pub use catalog::CatalogStore;
pub use models::{AccessToken, Brand, LoginCredentials, Product, User};
