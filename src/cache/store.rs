// In-memory cache store for the issues feed.
// Handles TTL checking, refresh on expiry and lookup helpers over the payload.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::Mutex;
use tracing::{debug, error, info};

use crate::api::{Issue, IssuesResponse, IssuesSource};
use crate::config::Config;
use crate::error::{DEFAULT_API_ERROR, IssuesError, Result};

/// Default TTL for the issues feed: 5 minutes.
pub const DEFAULT_TTL: Duration = Duration::from_secs(5 * 60);

/// A fetched payload and when it was fetched.
#[derive(Debug, Clone)]
pub struct CachedIssues {
    pub data: Arc<IssuesResponse>,
    pub fetched_at: DateTime<Utc>,
}

impl CachedIssues {
    pub fn new(data: Arc<IssuesResponse>, fetched_at: DateTime<Utc>) -> Self {
        Self { data, fetched_at }
    }

    /// Check if the entry has expired as of `now`.
    ///
    /// A `now` earlier than `fetched_at` counts as expired.
    pub fn is_expired(&self, ttl: Duration, now: DateTime<Utc>) -> bool {
        let elapsed = now
            .signed_duration_since(self.fetched_at)
            .to_std()
            .unwrap_or(Duration::MAX);

        elapsed >= ttl
    }

    /// Check if the entry can still be served as of `now`.
    pub fn is_valid(&self, ttl: Duration, now: DateTime<Utc>) -> bool {
        !self.is_expired(ttl, now)
    }
}

/// Read-through cache in front of an [`IssuesSource`].
///
/// The lock is held from the freshness check until the new payload is
/// stored, so concurrent misses share a single fetch. A failed fetch never
/// touches the stored entry.
pub struct IssueCache<S: IssuesSource> {
    source: S,
    ttl: Duration,
    entry: Mutex<Option<CachedIssues>>,
}

impl<S: IssuesSource> IssueCache<S> {
    /// Create an empty cache with the default TTL.
    pub fn new(source: S) -> Self {
        Self {
            source,
            ttl: DEFAULT_TTL,
            entry: Mutex::new(None),
        }
    }

    /// Create an empty cache using the TTL from `config`.
    pub fn from_config(source: S, config: &Config) -> Self {
        Self::new(source).with_ttl(config.ttl())
    }

    /// Override the TTL.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// How long a fetched feed is served without refetching.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// The source this cache refreshes from.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Return the feed, fetching it if the cache is empty or stale.
    pub async fn fetch_articles(&self) -> Result<Arc<IssuesResponse>> {
        self.fetch_with_clock(Utc::now).await
    }

    /// Same as [`fetch_articles`](Self::fetch_articles) with a fixed `now`.
    pub async fn fetch_articles_at(&self, now: DateTime<Utc>) -> Result<Arc<IssuesResponse>> {
        self.fetch_with_clock(|| now).await
    }

    /// The clock is read once the lock is held, and again after a successful
    /// fetch to stamp the new entry.
    async fn fetch_with_clock<C>(&self, clock: C) -> Result<Arc<IssuesResponse>>
    where
        C: Fn() -> DateTime<Utc>,
    {
        let mut entry = self.entry.lock().await;

        if let Some(cached) = entry.as_ref() {
            if cached.is_valid(self.ttl, clock()) {
                debug!(fetched_at = %cached.fetched_at, "issues cache hit");
                return Ok(Arc::clone(&cached.data));
            }
        }

        debug!("issues cache miss, fetching");
        match self.refresh().await {
            Ok(data) => {
                info!(issues = data.issues.len(), "issues feed refreshed");
                *entry = Some(CachedIssues::new(Arc::clone(&data), clock()));
                Ok(data)
            }
            Err(e) => {
                error!(error = %e, "error fetching articles");
                Err(e)
            }
        }
    }

    async fn refresh(&self) -> Result<Arc<IssuesResponse>> {
        let payload = self.source.fetch().await?;

        if !payload.success {
            let message = payload
                .error
                .filter(|msg| !msg.is_empty())
                .unwrap_or_else(|| DEFAULT_API_ERROR.to_string());
            return Err(IssuesError::Api(message));
        }

        Ok(Arc::new(payload))
    }

    /// All issues in the feed.
    pub async fn get_issues(&self) -> Result<Vec<Issue>> {
        let data = self.fetch_articles().await?;
        Ok(data.issues.clone())
    }

    /// All issues in the feed, as of `now`.
    pub async fn get_issues_at(&self, now: DateTime<Utc>) -> Result<Vec<Issue>> {
        let data = self.fetch_articles_at(now).await?;
        Ok(data.issues.clone())
    }

    /// First issue whose title matches exactly, or `None`.
    pub async fn get_issue(&self, title: &str) -> Result<Option<Issue>> {
        let data = self.fetch_articles().await?;
        Ok(data.issues.iter().find(|issue| issue.title == title).cloned())
    }

    /// First exact title match as of `now`, or `None`.
    pub async fn get_issue_at(&self, title: &str, now: DateTime<Utc>) -> Result<Option<Issue>> {
        let data = self.fetch_articles_at(now).await?;
        Ok(data.issues.iter().find(|issue| issue.title == title).cloned())
    }

    /// Drop the cached payload so the next call refetches.
    pub async fn clear_cache(&self) {
        *self.entry.lock().await = None;
    }

    /// Current entry regardless of age. Never fetches.
    pub async fn peek(&self) -> Option<CachedIssues> {
        self.entry.lock().await.clone()
    }

    /// When the current entry was fetched, if there is one.
    pub async fn cached_at(&self) -> Option<DateTime<Utc>> {
        self.entry.lock().await.as_ref().map(|cached| cached.fetched_at)
    }
}
