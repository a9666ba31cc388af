use std::time::Duration;

use sqlx::{PgPool, postgres::PgPoolOptions};

pub const MAX_CONNECTIONS: u32 = 16;

pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// Pool that connects on first use, so a missing datastore does not stop
/// the process from starting.
pub fn lazy_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .acquire_timeout(Duration::from_secs(5))
        .connect_lazy(database_url)
}
