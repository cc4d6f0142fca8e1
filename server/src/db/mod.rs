//! Database connector.
//!
//! SYSTEM CONTEXT
//! ==============
//! Startup builds the pool without waiting on the network, then fires one
//! background connection attempt. The attempt logs its outcome and applies
//! migrations on success. It is never retried and never stops the process;
//! while the database is unreachable, API handlers fail individually.

#[cfg(test)]
#[path = "db_test.rs"]
mod db_test;

use sqlx::postgres::{PgConnection, PgPoolOptions};
use sqlx::{Connection, PgPool};
use tokio::task::JoinHandle;

/// Build the `PostgreSQL` connection pool without opening a connection.
///
/// # Errors
///
/// Returns an error if `database_url` cannot be parsed.
pub fn connect(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect_lazy(database_url)
}

/// Open and close one direct connection with the pool's options.
///
/// Bypasses the pool so a refused connection surfaces its own error instead
/// of being retried until the acquire timeout.
pub(crate) async fn try_connect(pool: &PgPool) -> Result<(), sqlx::Error> {
    let options = pool.connect_options();
    let conn = PgConnection::connect_with(&options).await?;
    conn.close().await
}

/// Spawn the single startup connection attempt.
///
/// The task resolves to `true` once a connection was opened and migrations
/// ran, `false` otherwise. Callers may drop the handle.
pub fn spawn_connect(pool: PgPool) -> JoinHandle<bool> {
    tokio::spawn(async move {
        if let Err(e) = try_connect(&pool).await {
            tracing::error!(error = %e, "database connection failed");
            return false;
        }
        tracing::info!("database connected");

        match sqlx::migrate!("src/db/migrations").run(&pool).await {
            Ok(()) => true,
            Err(e) => {
                tracing::error!(error = %e, "database migrations failed");
                false
            }
        }
    })
}
