//! Sample-data seeding.
//!
//! The first album is written synchronously and retried while the table is
//! still provisioning. The rest are written concurrently; their individual
//! failures are logged and counted without failing the run.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use thiserror::Error;
use tokio::task::JoinSet;

use albums_core::album::Album;
use albums_core::storage::{AlbumRepository, RepositoryError};

use crate::storage::{album_table_schema, RecordStore};

/// Bounded retry for the first write of a seeding run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedPolicy {
    /// Retries after the initial attempt.
    pub retry_limit: u32,
    /// Fixed wait before each retry.
    pub backoff: Duration,
}

impl Default for SeedPolicy {
    fn default() -> Self {
        Self {
            retry_limit: 3,
            backoff: Duration::from_secs(5),
        }
    }
}

/// Outcome counts of a seeding run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    pub attempted: usize,
    pub succeeded: usize,
    pub failed: usize,
}

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("table did not become active after {attempts} attempts: {source}")]
    TableNeverActive {
        attempts: u32,
        #[source]
        source: RepositoryError,
    },
    #[error("failed to seed sample data: {0}")]
    Store(#[source] RepositoryError),
    #[error("failed to create table: {0}")]
    CreateTable(#[source] RepositoryError),
}

/// Writes `albums` through the repository.
///
/// Returns an error only when the first write fails for good. An empty input
/// yields an empty report.
pub async fn seed(
    repo: Arc<dyn AlbumRepository>,
    albums: Vec<Album>,
    policy: &SeedPolicy,
) -> Result<SeedReport, SeedError> {
    let mut albums = albums.into_iter();
    let Some(first) = albums.next() else {
        return Ok(SeedReport::default());
    };

    write_first(repo.as_ref(), &first, policy).await?;

    let mut report = SeedReport {
        attempted: 1,
        succeeded: 1,
        failed: 0,
    };

    let mut tasks = JoinSet::new();
    for album in albums {
        let repo = Arc::clone(&repo);
        tasks.spawn(async move {
            let result = repo.create_album(&album).await;
            (album.id, result)
        });
    }

    while let Some(joined) = tasks.join_next().await {
        report.attempted += 1;
        match joined {
            Ok((_, Ok(()))) => report.succeeded += 1,
            Ok((id, Err(e))) => {
                tracing::warn!(error = %e, album_id = %id, "Failed to seed album");
                report.failed += 1;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Seed task did not complete");
                report.failed += 1;
            }
        }
    }

    tracing::info!(
        attempted = report.attempted,
        succeeded = report.succeeded,
        failed = report.failed,
        "Sample data seeded"
    );

    Ok(report)
}

async fn write_first(
    repo: &dyn AlbumRepository,
    album: &Album,
    policy: &SeedPolicy,
) -> Result<(), SeedError> {
    let mut attempts = 0;

    loop {
        attempts += 1;
        match repo.create_album(album).await {
            Ok(()) => return Ok(()),
            Err(e) if e.is_retryable() && attempts <= policy.retry_limit => {
                tracing::warn!(
                    error = %e,
                    attempt = attempts,
                    backoff_secs = policy.backoff.as_secs_f64(),
                    "Table is unavailable, waiting before retrying sample data"
                );
                tokio::time::sleep(policy.backoff).await;
            }
            Err(e) if e.is_retryable() => {
                return Err(SeedError::TableNeverActive {
                    attempts,
                    source: e,
                });
            }
            Err(e) => return Err(SeedError::Store(e)),
        }
    }
}

/// Creates the albums table, then seeds it.
///
/// A freshly created table is usually not active yet; the first write rides
/// that out under `policy`.
pub async fn init_table(
    store: &dyn RecordStore,
    repo: Arc<dyn AlbumRepository>,
    table_name: &str,
    albums: Vec<Album>,
    policy: &SeedPolicy,
) -> Result<SeedReport, SeedError> {
    store
        .create_table(&album_table_schema(table_name))
        .await
        .map_err(SeedError::CreateTable)?;

    tracing::info!(table = %table_name, "Created albums table");

    seed(repo, albums, policy).await
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};

    use async_trait::async_trait;

    use albums_core::album::sample_albums;
    use albums_core::storage::Result;

    use super::*;
    use crate::storage::inmemory::InMemoryStore;
    use crate::storage::StoreAlbumRepository;

    fn fast_policy(retry_limit: u32) -> SeedPolicy {
        SeedPolicy {
            retry_limit,
            backoff: Duration::from_millis(1),
        }
    }

    fn in_memory_repo() -> (InMemoryStore, Arc<dyn AlbumRepository>) {
        let store = InMemoryStore::with_table(album_table_schema("albums"));
        let repo = Arc::new(StoreAlbumRepository::new(Arc::new(store.clone()), "albums"));
        (store, repo)
    }

    /// Reports the table as provisioning for the first `not_ready` writes.
    struct Provisioning {
        inner: Arc<dyn AlbumRepository>,
        not_ready: u32,
        calls: AtomicU32,
    }

    #[async_trait]
    impl AlbumRepository for Provisioning {
        async fn list_albums(&self) -> Result<Vec<Album>> {
            self.inner.list_albums().await
        }

        async fn get_album(&self, id: &str) -> Result<Album> {
            self.inner.get_album(id).await
        }

        async fn create_album(&self, album: &Album) -> Result<()> {
            if self.calls.fetch_add(1, Ordering::SeqCst) < self.not_ready {
                return Err(RepositoryError::TableNotActive {
                    table: "albums".to_string(),
                });
            }
            self.inner.create_album(album).await
        }

        async fn delete_album(&self, id: &str) -> Result<()> {
            self.inner.delete_album(id).await
        }
    }

    /// Fails writes for albums by the given artist.
    struct RejectArtist {
        inner: Arc<dyn AlbumRepository>,
        artist: &'static str,
    }

    #[async_trait]
    impl AlbumRepository for RejectArtist {
        async fn list_albums(&self) -> Result<Vec<Album>> {
            self.inner.list_albums().await
        }

        async fn get_album(&self, id: &str) -> Result<Album> {
            self.inner.get_album(id).await
        }

        async fn create_album(&self, album: &Album) -> Result<()> {
            if album.artist == self.artist {
                return Err(RepositoryError::QueryFailed("throttled".to_string()));
            }
            self.inner.create_album(album).await
        }

        async fn delete_album(&self, id: &str) -> Result<()> {
            self.inner.delete_album(id).await
        }
    }

    #[tokio::test]
    async fn test_seed_writes_every_album() {
        let (_, repo) = in_memory_repo();
        let albums = sample_albums();
        let expected = albums.len();

        let report = seed(Arc::clone(&repo), albums, &fast_policy(0))
            .await
            .unwrap();

        assert_eq!(report.attempted, expected);
        assert_eq!(report.succeeded, expected);
        assert_eq!(report.failed, 0);
        assert_eq!(repo.list_albums().await.unwrap().len(), expected);
    }

    #[tokio::test]
    async fn test_seed_empty_input() {
        let (_, repo) = in_memory_repo();

        let report = seed(repo, Vec::new(), &fast_policy(0)).await.unwrap();

        assert_eq!(report, SeedReport::default());
    }

    #[tokio::test]
    async fn test_seed_retries_while_table_provisions() {
        let (_, inner) = in_memory_repo();
        let repo = Arc::new(Provisioning {
            inner: Arc::clone(&inner),
            not_ready: 2,
            calls: AtomicU32::new(0),
        });

        let report = seed(repo.clone(), sample_albums(), &fast_policy(3))
            .await
            .unwrap();

        assert_eq!(report.failed, 0);
        assert_eq!(report.succeeded, 15);
        // Two refused attempts, then one write per album.
        assert_eq!(repo.calls.load(Ordering::SeqCst), 17);
    }

    #[tokio::test]
    async fn test_seed_gives_up_after_retry_limit() {
        let (_, inner) = in_memory_repo();
        let repo = Arc::new(Provisioning {
            inner: Arc::clone(&inner),
            not_ready: u32::MAX,
            calls: AtomicU32::new(0),
        });

        let err = seed(repo.clone(), sample_albums(), &fast_policy(3))
            .await
            .unwrap_err();

        assert!(matches!(err, SeedError::TableNeverActive { attempts: 4, .. }));
        assert_eq!(repo.calls.load(Ordering::SeqCst), 4);
        assert!(inner.list_albums().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_seed_non_retryable_first_failure_is_fatal() {
        let (_, inner) = in_memory_repo();
        let albums = sample_albums();
        let repo = Arc::new(RejectArtist {
            inner: Arc::clone(&inner),
            artist: "John Coltrane",
        });

        let err = seed(repo, albums, &fast_policy(3)).await.unwrap_err();

        assert!(matches!(err, SeedError::Store(RepositoryError::QueryFailed(_))));
        assert!(inner.list_albums().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_seed_counts_concurrent_failures() {
        let (_, inner) = in_memory_repo();
        let albums = sample_albums();
        let mingus = albums
            .iter()
            .filter(|a| a.artist == "Charles Mingus")
            .count();
        let repo = Arc::new(RejectArtist {
            inner: Arc::clone(&inner),
            artist: "Charles Mingus",
        });

        let report = seed(repo, albums, &fast_policy(0)).await.unwrap();

        assert_eq!(report.attempted, 15);
        assert_eq!(report.failed, mingus);
        assert_eq!(report.succeeded, 15 - mingus);

        let stored = inner.list_albums().await.unwrap();
        assert_eq!(stored.len(), report.succeeded);
    }

    #[tokio::test]
    async fn test_init_table_creates_then_seeds() {
        let store = InMemoryStore::new();
        let repo: Arc<dyn AlbumRepository> =
            Arc::new(StoreAlbumRepository::new(Arc::new(store.clone()), "albums"));

        let report = init_table(&store, Arc::clone(&repo), "albums", sample_albums(), &fast_policy(0))
            .await
            .unwrap();

        assert_eq!(report.succeeded, 15);
        assert_eq!(repo.list_albums().await.unwrap().len(), 15);
    }

    #[tokio::test]
    async fn test_init_table_twice_fails() {
        let (store, repo) = in_memory_repo();

        let err = init_table(&store, repo, "albums", sample_albums(), &fast_policy(0))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            SeedError::CreateTable(RepositoryError::AlreadyExists { .. })
        ));
    }
}
