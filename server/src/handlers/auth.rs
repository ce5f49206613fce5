use actix_web::{post, web, HttpResponse};
use serde::Deserialize;

use crate::{
    error::{CatalogError, Result},
    session::SessionManager,
    store::CatalogStore,
};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl LoginRequest {
    /// Both fields present and non-empty.
    fn credentials(&self) -> Option<(&str, &str)> {
        let username = self.username.as_deref().filter(|s| !s.is_empty())?;
        let password = self.password.as_deref().filter(|s| !s.is_empty())?;
        Some((username, password))
    }
}

/// Responds with the user's access token as a JSON string.
#[post("/login")]
pub async fn login(
    req: web::Json<LoginRequest>,
    store: web::Data<CatalogStore>,
    session_manager: web::Data<SessionManager>,
) -> Result<HttpResponse> {
    let (username, password) = req.credentials().ok_or(CatalogError::MalformedLogin)?;

    log::info!("Login attempt for user: {}", username);

    let user = store.find_user(username, password).ok_or_else(|| {
        log::warn!("Failed login attempt for user: {}", username);
        CatalogError::InvalidCredentials
    })?;

    let access_token = session_manager.issue_or_refresh(user.username());

    Ok(HttpResponse::Ok().json(access_token.token))
}
