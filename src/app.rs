//! Application assembly: database, repositories, mirror, and router

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{Extension, Router};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use tokio::task::JoinHandle;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::api;
use crate::api::stream::NotificationHub;
use crate::config::DatabaseConfig;
use crate::domain::{Repositories, Service};
use crate::infra::search::{spawn_mirror, SearchStore};
use crate::infra::storage::migrations::Migrator;
use crate::infra::storage::repositories::*;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<Service>,
    pub search: Arc<SearchStore>,
    pub hub: Arc<NotificationHub>,
}

/// Connect to the database and bring the schema up to date
pub async fn connect_and_migrate(config: &DatabaseConfig) -> Result<DatabaseConnection> {
    let mut options = ConnectOptions::new(&config.url);
    options.max_connections(config.max_connections);
    let db = Database::connect(options)
        .await
        .with_context(|| format!("failed to connect to {}", config.url))?;
    Migrator::up(&db, None).await.context("migrations failed")?;
    info!("database connected and migrated");
    Ok(db)
}

/// Wire repositories, the search mirror, and the notification hub.
/// The returned handle owns the mirror task.
pub fn build_state(db: DatabaseConnection) -> (AppState, JoinHandle<()>) {
    let db = Arc::new(db);
    let search = Arc::new(SearchStore::default());
    let (notifier, mirror_task) = spawn_mirror(search.clone());

    let repos = Repositories {
        dealers: Arc::new(SeaOrmDealerRepository::new(db.clone())),
        deals: Arc::new(SeaOrmMoneyMarketDealRepository::new(db.clone())),
        lists: Arc::new(SeaOrmMoneyMarketListRepository::new(db.clone())),
        upload_notifications: Arc::new(SeaOrmUploadNotificationRepository::new(db.clone())),
        fiscal_years: Arc::new(SeaOrmFiscalYearRepository::new(db.clone())),
        fiscal_quarters: Arc::new(SeaOrmFiscalQuarterRepository::new(db.clone())),
        fiscal_months: Arc::new(SeaOrmFiscalMonthRepository::new(db.clone())),
        report_batches: Arc::new(SeaOrmReportBatchRepository::new(db.clone())),
        placeholders: Arc::new(SeaOrmPlaceholderRepository::new(db)),
    };
    let service = Arc::new(Service::new(repos, Arc::new(notifier)));

    let state = AppState {
        service,
        search,
        hub: Arc::new(NotificationHub::default()),
    };
    (state, mirror_task)
}

/// The full application router, everything nested under `/api`
pub fn build_router(state: AppState) -> Router {
    let api = api::rest::routes::router()
        .merge(api::stream::router())
        .layer(Extension(state.hub.clone()))
        .layer(Extension(state));

    Router::new()
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
}
