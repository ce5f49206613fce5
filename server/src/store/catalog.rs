use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

use super::models::{Brand, Product, User};
use crate::error::{CatalogError, Result};

pub const BRANDS_FILE: &str = "brands.json";
pub const PRODUCTS_FILE: &str = "products.json";
pub const USERS_FILE: &str = "users.json";

/// Read-only catalog data, loaded once at startup and shared with every handler.
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    brands: Vec<Brand>,
    products: Vec<Product>,
    users: Vec<User>,
}

impl CatalogStore {
    pub fn new(brands: Vec<Brand>, products: Vec<Product>, users: Vec<User>) -> Self {
        Self {
            brands,
            products,
            users,
        }
    }

    pub fn load_from_dir<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();

        let brands: Vec<Brand> = read_json(&dir.join(BRANDS_FILE))?;
        let products: Vec<Product> = read_json(&dir.join(PRODUCTS_FILE))?;
        let users: Vec<User> = read_json(&dir.join(USERS_FILE))?;

        log::info!(
            "Loaded {} brands, {} products, {} users from {}",
            brands.len(),
            products.len(),
            users.len(),
            dir.display()
        );

        Ok(Self::new(brands, products, users))
    }

    pub fn brands(&self) -> &[Brand] {
        &self.brands
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn search_products(&self, query: &str) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|product| product.matches_query(query))
            .collect()
    }

    pub fn products_by_brand(&self, brand_id: &str) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|product| product.belongs_to(brand_id))
            .collect()
    }

    pub fn find_user(&self, username: &str, password: &str) -> Option<&User> {
        self.users.iter().find(|user| user.matches(username, password))
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).map_err(|source| CatalogError::DataLoad {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| CatalogError::DataParse {
        path: path.to_path_buf(),
        source,
    })
}
