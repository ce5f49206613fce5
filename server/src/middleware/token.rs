use actix_web::{
    body::MessageBody,
    dev::{ServiceRequest, ServiceResponse},
    middleware::Next,
    HttpMessage,
};

use crate::{error::CatalogError, session::SessionManager};

pub const TOKEN_HEADER: &str = "token";

/// Rejects requests whose `token` header is missing, unknown or stale.
/// The validated `AccessToken` is placed in request extensions.
pub async fn token_middleware(
    req: ServiceRequest,
    next: Next<impl MessageBody>,
) -> Result<ServiceResponse<impl MessageBody>, actix_web::Error> {
    let token = req
        .headers()
        .get(TOKEN_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
        .ok_or(CatalogError::InvalidToken)?;

    let session_manager = req
        .app_data::<actix_web::web::Data<SessionManager>>()
        .ok_or(CatalogError::InvalidToken)?;

    let access_token = session_manager.validate_token(&token).map_err(|err| {
        log::warn!("Rejected request to {} with invalid token", req.path());
        err
    })?;

    req.extensions_mut().insert(access_token);

    next.call(req).await
}
