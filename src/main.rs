//! Counselpoint server entry point.

use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use tracing::info;
use tracing_subscriber::EnvFilter;

use counselpoint::adapters::http::{app_router, AvailabilityHandlers, BookingHandlers};
use counselpoint::adapters::postgres::{
    PostgresAppointmentReader, PostgresAvailabilityStore, PostgresCounselorDirectory,
};
use counselpoint::application::handlers::availability::{
    DeleteRangeHandler, FindCounselorsHandler, GetAvailabilityHandler, ReplaceAvailabilityHandler,
    ResolveSlotsHandler,
};
use counselpoint::application::handlers::booking::{
    AvailableSlotsHandler, BookedTimesHandler, CalendarStatsCache, CalendarStatsHandler,
    CheckConflictsHandler, CheckGroupSlotsHandler,
};
use counselpoint::config::AppConfig;
use counselpoint::ports::{AvailabilityStore, BookingReader, CounselorDirectory};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.server.log_level.clone())),
        )
        .init();

    info!(environment = ?config.server.environment, "starting counselpoint");

    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .idle_timeout(config.database.idle_timeout())
        .connect(&config.database.url)
        .await?;

    if config.database.run_migrations {
        sqlx::migrate!("./migrations").run(&pool).await?;
        info!("database migrations applied");
    }

    let store: Arc<dyn AvailabilityStore> = Arc::new(PostgresAvailabilityStore::new(pool.clone()));
    let booking: Arc<dyn BookingReader> = Arc::new(PostgresAppointmentReader::new(pool.clone()));
    let directory: Arc<dyn CounselorDirectory> =
        Arc::new(PostgresCounselorDirectory::new(pool.clone()));

    let availability_handlers = AvailabilityHandlers::new(
        Arc::new(GetAvailabilityHandler::new(store.clone())),
        Arc::new(ReplaceAvailabilityHandler::new(store.clone())),
        Arc::new(DeleteRangeHandler::new(store.clone())),
        Arc::new(FindCounselorsHandler::new(store.clone(), directory.clone())),
    );

    let resolver = Arc::new(ResolveSlotsHandler::new(store.clone()));
    let stats_cache = Arc::new(CalendarStatsCache::new(config.server.calendar_stats_ttl()));
    let booking_handlers = BookingHandlers::new(
        Arc::new(AvailableSlotsHandler::new(resolver, booking.clone())),
        Arc::new(BookedTimesHandler::new(booking.clone())),
        Arc::new(CheckGroupSlotsHandler::new(booking.clone())),
        Arc::new(CheckConflictsHandler::new(booking.clone())),
        Arc::new(CalendarStatsHandler::new(booking.clone(), stats_cache)),
    );

    let router = app_router(
        availability_handlers,
        booking_handlers,
        config.server.request_timeout(),
    );

    let addr = config.server.socket_addr();
    info!(%addr, "listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
