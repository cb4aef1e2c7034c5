//! Service entry point: configuration, infrastructure wiring, HTTP server,
//! and the background reprompt worker.

use std::sync::Arc;
use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use tokio::signal;
use tokio::sync::watch;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::EnvFilter;

use paralog_bot::adapters::eligibility::StaticEligibility;
use paralog_bot::adapters::http::{app, AppState};
use paralog_bot::adapters::memory::InMemorySessionStore;
use paralog_bot::adapters::postgres::{PostgresPromptQueue, PostgresRecordSink};
use paralog_bot::adapters::scheduler::{RepromptWorker, RepromptWorkerConfig};
use paralog_bot::adapters::twilio::TwilioNotifier;
use paralog_bot::application::handlers::{ProcessMessageHandler, SetupCollectionHandler};
use paralog_bot::config::AppConfig;
use paralog_bot::ports::{EligibilityChecker, Notifier, PromptQueue, RecordSink, SessionStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(config.server.log_level.clone()))
        .init();

    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .connect(&config.database.url)
        .await?;

    if config.database.run_migrations {
        info!("running database migrations");
        sqlx::migrate!("./migrations").run(&pool).await?;
    }

    let store: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new());
    let notifier: Arc<dyn Notifier> = Arc::new(TwilioNotifier::new(config.twilio.clone()));
    let sink: Arc<dyn RecordSink> = Arc::new(PostgresRecordSink::new(pool.clone()));
    let queue: Arc<dyn PromptQueue> = Arc::new(PostgresPromptQueue::new(pool));
    let eligibility: Arc<dyn EligibilityChecker> = Arc::new(StaticEligibility::always_joined());

    let state = AppState {
        setup: Arc::new(SetupCollectionHandler::new(
            store.clone(),
            notifier.clone(),
            eligibility.clone(),
            config.bot.join_code.clone(),
            config.twilio.whatsapp_number.clone(),
        )),
        messages: Arc::new(ProcessMessageHandler::new(
            store.clone(),
            notifier.clone(),
            sink,
            queue.clone(),
            eligibility,
            config.bot.collect_interval(),
        )),
    };

    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let worker = RepromptWorker::new(
        queue,
        store,
        notifier,
        RepromptWorkerConfig {
            poll_interval: config.bot.reprompt_poll_interval(),
        },
    );
    let worker_handle = tokio::spawn(async move { worker.run(shutdown_rx).await });

    let router = app(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive())
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.server.request_timeout_secs,
            ))),
    );

    let addr = config.server.socket_addr()?;
    info!(%addr, "whatsapp bot service listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Stop the worker once the server has drained.
    shutdown_tx.send(true).ok();
    worker_handle.await?;

    Ok(())
}

async fn shutdown_signal() {
    signal::ctrl_c().await.expect("failed to listen for ctrl-c");
    info!("shutdown signal received");
}
