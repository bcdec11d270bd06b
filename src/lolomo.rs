use crate::artwork::{ArtworkGenerator, ArtworkPool, UuidArtworkGenerator};
use crate::catalog::Catalog;
use crate::config::ArtworkConfig;
use crate::constants::{
    CONTINUE_WATCHING_ID, CONTINUE_WATCHING_NAME, FALLBACK_ARTWORK_URL, TOP_10_ID, TOP_10_NAME,
};
use crate::domain::{Category, Title};
use crate::error::Result;
use crate::observability::metrics;
use futures::future::join_all;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Answers the category and search queries and resolves artwork per title
pub struct Lolomo {
    catalog: Arc<dyn Catalog>,
    generator: Arc<dyn ArtworkGenerator>,
    pool: ArtworkPool,
    timeout: Option<Duration>,
}

impl Lolomo {
    pub fn new(
        catalog: Arc<dyn Catalog>,
        generator: Arc<dyn ArtworkGenerator>,
        pool: ArtworkPool,
    ) -> Self {
        Self {
            catalog,
            generator,
            pool,
            timeout: None,
        }
    }

    /// Build with the UUID generator and a pool sized from configuration
    pub fn from_config(catalog: Arc<dyn Catalog>, config: &ArtworkConfig) -> Self {
        let generator = Arc::new(UuidArtworkGenerator::new(config.delay()));
        Self::new(catalog, generator, ArtworkPool::new(config.workers)).with_timeout(config.timeout())
    }

    /// Give up waiting on a generation after `timeout` and use the fallback.
    ///
    /// The clock starts at submission, so time spent queued for a pool permit
    /// counts against the timeout. The work item itself keeps running.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn pool(&self) -> &ArtworkPool {
        &self.pool
    }

    /// The two home-page categories, "Top 10" first. Artwork is not resolved here.
    pub fn list_categories(&self) -> Result<Vec<Category>> {
        metrics::query::lolomo_requested();

        let top_10 = self.catalog.titles_for_category(TOP_10_ID)?;
        let continue_watching = self.catalog.titles_for_category(CONTINUE_WATCHING_ID)?;

        Ok(vec![
            Category::new(TOP_10_ID, TOP_10_NAME, top_10),
            Category::new(CONTINUE_WATCHING_ID, CONTINUE_WATCHING_NAME, continue_watching),
        ])
    }

    /// Titles whose name starts with `query`, case-sensitive, in catalog order
    pub fn search(&self, query: &str) -> Result<Vec<Title>> {
        let matches: Vec<Title> = self
            .catalog
            .all_titles()?
            .into_iter()
            .filter(|title| title.name.starts_with(query))
            .collect();

        debug!(query, matches = matches.len(), "Search completed");
        metrics::query::search_requested(matches.len());
        Ok(matches)
    }

    /// Generate artwork for `title` on the worker pool.
    ///
    /// Never fails: any error, panic or cancellation of the work item (or an
    /// expired timeout, when configured) yields [`FALLBACK_ARTWORK_URL`].
    pub async fn resolve_artwork(&self, title: &Title) -> String {
        let handle = self.pool.submit(self.generator.clone(), title.name.clone());

        let joined = match self.timeout {
            Some(limit) => match tokio::time::timeout(limit, handle).await {
                Ok(joined) => joined,
                Err(_) => {
                    warn!(title = %title.name, ?limit, "Artwork generation timed out, using fallback");
                    return fallback("timeout");
                }
            },
            None => handle.await,
        };

        match joined {
            Ok(Ok(artwork)) => {
                metrics::artwork::generated();
                artwork
            }
            Ok(Err(e)) => {
                warn!(title = %title.name, error = %e, "Artwork generation failed, using fallback");
                fallback("error")
            }
            Err(e) if e.is_panic() => {
                warn!(title = %title.name, "Artwork worker panicked, using fallback");
                fallback("panic")
            }
            Err(e) => {
                warn!(title = %title.name, error = %e, "Artwork worker cancelled, using fallback");
                fallback("cancelled")
            }
        }
    }

    /// Resolve artwork for every title concurrently; output order matches input order.
    pub async fn enrich_titles(&self, titles: Vec<Title>) -> Vec<Title> {
        join_all(titles.iter().map(|title| async move {
            let artwork = self.resolve_artwork(title).await;
            title.with_artwork(artwork)
        }))
        .await
    }
}

fn fallback(reason: &'static str) -> String {
    metrics::artwork::fallback(reason);
    FALLBACK_ARTWORK_URL.to_string()
}
