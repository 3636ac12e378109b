//! # Urban Living Binary
//!
//! The entry point that assembles the application from configuration and compile-time features.

use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use ul_api::middleware::{cors_policy, standard_middleware};
use ul_api::{configure_routes, AppState};
use ul_config::{AppConfig, LogFormat, StorageBackend};
use ul_core::{KvStore, MemoryKvStore, RecommendationStore};

// Feature-gated backends
#[cfg(feature = "kv-sqlite")]
use ul_kv_sqlite::SqliteKvStore;

#[cfg(feature = "kv-local")]
use ul_kv_local::LocalKvStore;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load()?;
    init_tracing(&config);

    // 1. Pick the key-value backend
    let backend = open_backend(&config).await?;

    // 2. Load persisted collections, seeding anything missing
    let store = RecommendationStore::open(backend, config.store_options()).await?;
    watch_revisions(&store);

    let state = web::Data::new(AppState::new(store));
    let (host, port) = (config.server.host.clone(), config.server.port);

    tracing::info!(%host, port, backend = ?config.storage.backend, "urban-living starting");

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(cors_policy())
            .wrap(standard_middleware())
            .configure(configure_routes)
    })
    .bind((host.as_str(), port))?
    .run()
    .await?;

    Ok(())
}

/// `RUST_LOG` wins over the configured filter when set.
fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter));
    let registry = tracing_subscriber::registry().with(filter);

    match config.logging.format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

async fn open_backend(config: &AppConfig) -> anyhow::Result<Arc<dyn KvStore>> {
    match config.storage.backend {
        StorageBackend::Memory => {
            tracing::warn!("using the in-memory backend; nothing survives a restart");
            Ok(Arc::new(MemoryKvStore::new()))
        }
        #[cfg(feature = "kv-sqlite")]
        StorageBackend::Sqlite => {
            Ok(Arc::new(SqliteKvStore::new(&config.storage.sqlite_url).await?))
        }
        #[cfg(feature = "kv-local")]
        StorageBackend::Local => {
            Ok(Arc::new(LocalKvStore::new(config.local_root().to_path_buf())))
        }
        #[allow(unreachable_patterns)]
        other => anyhow::bail!("storage backend {other:?} is not compiled into this binary"),
    }
}

fn watch_revisions(store: &RecommendationStore) {
    let mut changes = store.subscribe();
    tokio::spawn(async move {
        while changes.changed().await.is_ok() {
            let revision = *changes.borrow_and_update();
            tracing::debug!(revision, "store changed");
        }
    });
}
