pub mod auth;
pub mod catalog;

use actix_web::{middleware::from_fn, middleware::Condition, web};

use crate::middleware::token_middleware;

pub use auth::login;
pub use catalog::{list_brand_products, list_brands, list_products};

/// Mounts every route under `/api`. With `require_token` each catalog
/// resource demands a valid `token` header; login never does, and paths
/// that match no resource still fall through to 404.
pub fn configure(cfg: &mut web::ServiceConfig, require_token: bool) {
    cfg.service(
        web::scope("/api")
            .service(login)
            .service(
                web::resource("/brands")
                    .route(web::get().to(list_brands))
                    .wrap(Condition::new(require_token, from_fn(token_middleware))),
            )
            .service(
                web::resource("/products")
                    .route(web::get().to(list_products))
                    .wrap(Condition::new(require_token, from_fn(token_middleware))),
            )
            .service(
                web::resource("/brands/{id}/products")
                    .route(web::get().to(list_brand_products))
                    .wrap(Condition::new(require_token, from_fn(token_middleware))),
            ),
    );
}
