use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use sqlx::MySqlPool;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use pluto::config::{Config, LogFormat, StorageBackend};
use pluto::middleware::{json_error_handler, ErrorHandler, RequestId};
use pluto::modules;
use pluto::products::{
    InMemoryProductRepository, MySqlProductRepository, ProductRepository, ProductService,
};
use pluto::users::{InMemoryUserRepository, MySqlUserRepository, UserRepository, UserService};

fn init_tracing(log_level: &str, format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("pluto=debug,actix_web=info,{}", log_level))
    });

    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;
    config
        .validate()
        .context("Configuration validation failed")?;

    init_tracing(&config.app.log_level, config.app.log_format);

    tracing::info!(
        title = %config.app.title,
        version = %config.app.version,
        env = %config.app.env,
        backend = %config.database.backend,
        "Starting {}",
        config.app.title
    );

    let (user_repo, product_repo, db_pool): (
        Arc<dyn UserRepository>,
        Arc<dyn ProductRepository>,
        Option<MySqlPool>,
    ) = match config.database.backend {
        StorageBackend::MySql => {
            let pool = config
                .database
                .create_pool()
                .await
                .context("Failed to create database pool")?;

            if config.database.auto_migrate {
                sqlx::migrate!("./migrations")
                    .run(&pool)
                    .await
                    .context("Failed to run database migrations")?;
                tracing::info!("Database migrations applied");
            }

            tracing::info!(
                max_connections = config.database.max_connections,
                "Database pool initialized"
            );

            (
                Arc::new(MySqlUserRepository::new(pool.clone())),
                Arc::new(MySqlProductRepository::new(pool.clone())),
                Some(pool),
            )
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage; data is lost on shutdown");
            (
                Arc::new(InMemoryUserRepository::new()),
                Arc::new(InMemoryProductRepository::new()),
                None,
            )
        }
    };

    let user_service = Arc::new(UserService::new(user_repo));
    let product_service = Arc::new(ProductService::new(product_repo));

    let bind_address = config.server.bind_address();
    let server = HttpServer::new(move || {
        let mut app = App::new()
            .wrap(ErrorHandler)
            .wrap(RequestId)
            .wrap(TracingLogger::default())
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .app_data(web::Data::new(user_service.clone()))
            .app_data(web::Data::new(product_service.clone()));

        if let Some(pool) = &db_pool {
            app = app.app_data(web::Data::new(pool.clone()));
        }

        app.configure(modules::configure)
    })
    .workers(config.server.workers)
    .bind(&bind_address)
    .with_context(|| format!("Failed to bind {}", bind_address))?
    .run();

    tracing::info!(workers = config.server.workers, "Server started at http://{}", bind_address);

    server.await?;
    Ok(())
}
