use anyhow::Result;
use frettir::application::{
    ports::{
        time::Clock,
        util::{Sanitizer, SlugGenerator},
    },
    services::ApplicationServices,
};
use frettir::config::AppConfig;
use frettir::domain::{
    author::AuthorRepository,
    news::{NewsReadRepository, NewsWriteRepository},
};
use frettir::infrastructure::{
    database,
    repositories::{
        PostgresAuthorRepository, PostgresNewsReadRepository, PostgresNewsWriteRepository,
    },
    time::SystemClock,
    util::{HtmlSanitizer, IcelandicSlugGenerator},
};
use frettir::presentation::http::{routes::build_router, state::HttpState};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;

    let author_repo: Arc<dyn AuthorRepository> =
        Arc::new(PostgresAuthorRepository::new(pool.clone()));
    let news_read_repo: Arc<dyn NewsReadRepository> =
        Arc::new(PostgresNewsReadRepository::new(pool.clone()));
    let news_write_repo: Arc<dyn NewsWriteRepository> =
        Arc::new(PostgresNewsWriteRepository::new(pool.clone()));

    let sanitizer: Arc<dyn Sanitizer> = Arc::new(HtmlSanitizer::default());
    let clock: Arc<dyn Clock> = Arc::new(SystemClock::default());
    let slugger: Arc<dyn SlugGenerator> = Arc::new(IcelandicSlugGenerator::default());

    let services = Arc::new(ApplicationServices::new(
        author_repo,
        news_read_repo,
        news_write_repo,
        sanitizer,
        clock,
        slugger,
    ));

    let state = HttpState { services };
    let app = build_router(state, config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
