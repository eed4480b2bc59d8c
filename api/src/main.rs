use std::sync::Arc;

use actix_web::{web, HttpServer};
use log::info;

use dp_core::repositories::{ExpiringStore, MemoryDirectory, MemoryStore, UserDirectory};
use dp_core::services::{OtpConfig, OtpService, TokenConfig, TokenService, UserService};
use dp_infra::{DatabasePool, MySqlDirectory, RedisClient, RedisStore};
use dp_shared::config::AppConfig;

use dp_api::state::AppState;
use dp_api::app;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = AppConfig::from_env();
    info!(
        "Starting DialPass API server in {} mode",
        config.environment
    );

    if config.environment.is_development() {
        // Development runs self-contained on the in-memory adapters;
        // OTP state and the user directory reset on restart
        let store = Arc::new(MemoryStore::new());
        let directory = Arc::new(MemoryDirectory::new());
        run(config, store, directory).await
    } else {
        let redis = RedisClient::new(&config.cache).await.map_err(startup_failed)?;
        let store = Arc::new(RedisStore::new(redis));

        let pool = DatabasePool::new(&config.database)
            .await
            .map_err(startup_failed)?;
        let directory = Arc::new(MySqlDirectory::new(pool.pool().clone()));

        run(config, store, directory).await
    }
}

async fn run<S, D>(config: AppConfig, store: Arc<S>, directory: Arc<D>) -> std::io::Result<()>
where
    S: ExpiringStore + 'static,
    D: UserDirectory + 'static,
{
    let token_service = Arc::new(TokenService::new(TokenConfig::from(&config.jwt)));
    let otp_service = Arc::new(OtpService::new(
        store,
        Arc::clone(&directory),
        Arc::clone(&token_service),
        OtpConfig::from(&config.auth),
    ));
    let user_service = Arc::new(UserService::new(directory));

    let state = web::Data::new(AppState {
        otp_service,
        user_service,
        token_service,
        expose_codes: config.environment.is_development(),
    });

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let workers = config.server.workers;
    let mut server = HttpServer::new(move || app::create_app(state.clone()));
    if workers > 0 {
        server = server.workers(workers);
    }

    server.bind(&bind_address)?.run().await
}

fn startup_failed(e: dp_infra::InfraError) -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::Other, e.to_string())
}
