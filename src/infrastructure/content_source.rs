// src/infrastructure/content_source.rs
//! Startup choice between the Postgres store and the fixture store.
use std::sync::Arc;

use sqlx::PgPool;

use crate::config::{AppEnvironment, ContentSourceMode, DataSourceKind};
use crate::domain::content::ContentRepository;
use crate::infrastructure::{
    database,
    fixtures::{FixtureContentRepository, FixtureDataset},
    repositories::PostgresContentRepository,
};

pub struct ContentSource {
    pub kind: DataSourceKind,
    pub repository: Arc<dyn ContentRepository>,
}

/// Resolve the configured mode into a running repository. Live sources
/// have their migrations applied; a failure there is fatal.
pub async fn open(
    environment: AppEnvironment,
    mode: ContentSourceMode,
    pool: &PgPool,
) -> anyhow::Result<ContentSource> {
    let probe = if mode.needs_probe(environment) {
        probe_published_articles(pool).await
    } else {
        None
    };

    let kind = mode.resolve(environment, probe);
    let repository: Arc<dyn ContentRepository> = match kind {
        DataSourceKind::Live => {
            if probe.is_none() {
                database::run_migrations(pool).await?;
            }
            Arc::new(PostgresContentRepository::new(pool.clone()))
        }
        DataSourceKind::Fixture => Arc::new(
            FixtureContentRepository::new(FixtureDataset::sample()?)
                .with_substitution(environment.is_development()),
        ),
    };

    tracing::info!(
        environment = environment.as_str(),
        data_source = %kind,
        "content source selected"
    );

    Ok(ContentSource { kind, repository })
}

/// Number of published articles in the datastore, or `None` when it cannot
/// be reached or migrated.
async fn probe_published_articles(pool: &PgPool) -> Option<u64> {
    if let Err(err) = database::run_migrations(pool).await {
        tracing::warn!(error = %err, "datastore unavailable, falling back to fixture content");
        return None;
    }

    match PostgresContentRepository::new(pool.clone())
        .count_published_articles()
        .await
    {
        Ok(count) => {
            if count == 0 {
                tracing::warn!("datastore holds no published articles, serving fixture content");
            }
            Some(count)
        }
        Err(err) => {
            tracing::warn!(error = %err, "published article probe failed");
            None
        }
    }
}
