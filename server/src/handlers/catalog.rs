use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::{
    error::{CatalogError, Result},
    store::CatalogStore,
};

#[derive(Debug, Deserialize)]
pub struct ProductQuery {
    pub query: Option<String>,
}

pub async fn list_brands(store: web::Data<CatalogStore>) -> Result<HttpResponse> {
    let brands = store.brands();
    if brands.is_empty() {
        return Err(CatalogError::NoBrands);
    }

    Ok(HttpResponse::Ok().json(brands))
}

pub async fn list_products(
    params: web::Query<ProductQuery>,
    store: web::Data<CatalogStore>,
) -> Result<HttpResponse> {
    if store.products().is_empty() {
        return Err(CatalogError::NoProducts);
    }

    match params.query.as_deref() {
        Some(query) => {
            let matches = store.search_products(query);
            log::debug!("Product query {:?} matched {} products", query, matches.len());

            if matches.is_empty() {
                return Err(CatalogError::NoMatchingProducts);
            }
            Ok(HttpResponse::Ok().json(matches))
        }
        None => Ok(HttpResponse::Ok().json(store.products())),
    }
}

pub async fn list_brand_products(
    path: web::Path<String>,
    store: web::Data<CatalogStore>,
) -> Result<HttpResponse> {
    let brand_id = path.into_inner();
    let products = store.products_by_brand(&brand_id);

    if products.is_empty() {
        return Err(CatalogError::NoBrandProducts);
    }

    Ok(HttpResponse::Ok().json(products))
}
