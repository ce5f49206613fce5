use actix_web::{middleware as actix_middleware, web, App, HttpServer};

use catalog_server::config::ServerConfig;
use catalog_server::handlers;
use catalog_server::session::SessionManager;
use catalog_server::store::CatalogStore;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if it exists (for development)
    dotenvy::dotenv().ok();

    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    log::info!("Starting catalog server...");

    let config = ServerConfig::load().unwrap_or_else(|e| {
        eprintln!("Failed to load server configuration: {}", e);
        eprintln!("Hint: check CONFIG_PATH and the SERVER_* / TOKEN_* environment variables");
        std::process::exit(1);
    });

    let store = CatalogStore::load_from_dir(&config.data_dir).unwrap_or_else(|e| {
        log::error!("Failed to load initial data: {}", e);
        std::process::exit(1);
    });

    let session_manager = SessionManager::new(config.token_validity());
    log::info!(
        "Token validity set to {} minutes (enforced on catalog routes: {})",
        config.token_validity_minutes,
        config.require_token
    );

    let store = web::Data::new(store);
    let session_manager = web::Data::new(session_manager);
    let require_token = config.require_token;

    log::info!("Starting HTTP server at {}:{}...", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .app_data(store.clone())
            .app_data(session_manager.clone())
            .wrap(actix_middleware::Logger::default())
            .configure(|cfg| handlers::configure(cfg, require_token))
    })
    .workers(config.workers)
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
