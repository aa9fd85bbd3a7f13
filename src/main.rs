// src/main.rs
use inkpot::application::{
    ports::{observability::EventSink, security::IdentityVerifier, time::Clock},
    services::ApplicationServices,
};
use inkpot::config::AppConfig;
use inkpot::domain::{
    article::ArticleRepository,
    comment::{CommentRepository, LikeRepository},
};
use inkpot::infrastructure::{
    database, mongo,
    observability::TracingEventSink,
    repositories::{MongoArticleRepository, PostgresCommentRepository, PostgresLikeRepository},
    security::token::BiscuitIdentityVerifier,
    time::SystemClock,
};
use inkpot::presentation::http::{routes::build_router, state::HttpState};
use anyhow::Result;
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
    let documents = mongo::connect(config.mongodb_uri(), config.mongodb_database()).await?;

    let article_repo: Arc<dyn ArticleRepository> =
        Arc::new(MongoArticleRepository::new(&documents));
    let comment_repo: Arc<dyn CommentRepository> =
        Arc::new(PostgresCommentRepository::new(pool.clone()));
    let like_repo: Arc<dyn LikeRepository> = Arc::new(PostgresLikeRepository::new(pool));

    let identity_verifier: Arc<dyn IdentityVerifier> =
        Arc::new(BiscuitIdentityVerifier::new(config.biscuit_public_key())?);
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let events: Arc<dyn EventSink> = Arc::new(TracingEventSink);

    let services = Arc::new(ApplicationServices::new(
        article_repo,
        comment_repo,
        like_repo,
        identity_verifier,
        clock,
        events,
    ));

    let state = HttpState {
        services: Arc::clone(&services),
    };

    let app = build_router(state, config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn,mongodb=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install CTRL+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
