use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("No brands available")]
    NoBrands,

    #[error("Products not available")]
    NoProducts,

    #[error("No products that match that query")]
    NoMatchingProducts,

    #[error("No products available or brand ID incorrect")]
    NoBrandProducts,

    #[error("Server could not understand the request due to invalid syntax or formatting.")]
    MalformedLogin,

    #[error("The username or password was incorrect.")]
    InvalidCredentials,

    #[error("Token missing, unknown or expired")]
    InvalidToken,

    #[error("Failed to read {}: {source}", .path.display())]
    DataLoad {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", .path.display())]
    DataParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ResponseError for CatalogError {
    fn status_code(&self) -> StatusCode {
        match self {
            CatalogError::NoBrands => StatusCode::NOT_FOUND,
            CatalogError::NoProducts => StatusCode::BAD_REQUEST,
            CatalogError::NoMatchingProducts => StatusCode::NOT_FOUND,
            CatalogError::NoBrandProducts => StatusCode::NOT_FOUND,
            CatalogError::MalformedLogin => StatusCode::BAD_REQUEST,
            CatalogError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            CatalogError::InvalidToken => StatusCode::UNAUTHORIZED,
            CatalogError::DataLoad { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            CatalogError::DataParse { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            CatalogError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    // Errors are a status code plus its short message, never a JSON document.
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .content_type("text/plain; charset=utf-8")
            .body(self.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(CatalogError::NoBrands.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(CatalogError::NoProducts.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            CatalogError::InvalidCredentials.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            CatalogError::MalformedLogin.status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_data_load_message_names_file() {
        let err = CatalogError::DataLoad {
            path: PathBuf::from("initial-data/brands.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert!(err.to_string().contains("initial-data/brands.json"));
    }
}
