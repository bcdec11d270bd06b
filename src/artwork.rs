use crate::error::{LolomoError, Result};
use crate::observability::metrics;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Semaphore;
use tokio::task::JoinHandle;
use tracing::info;
use uuid::Uuid;

/// Produces an artwork identifier for a title
#[async_trait]
pub trait ArtworkGenerator: Send + Sync {
    async fn generate(&self, title: &str) -> Result<String>;
}

/// Lowercase the title and replace every space with a hyphen
pub fn normalize_title(title: &str) -> String {
    title.to_lowercase().replace(' ', "-")
}

/// Generator emulating a slow downstream service: waits `delay`, then returns
/// a fresh UUID joined to the normalized title.
pub struct UuidArtworkGenerator {
    delay: Duration,
}

impl UuidArtworkGenerator {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl ArtworkGenerator for UuidArtworkGenerator {
    async fn generate(&self, title: &str) -> Result<String> {
        info!("Generating artwork for {}", title);

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        Ok(format!("{}-{}", Uuid::new_v4(), normalize_title(title)))
    }
}

/// Bounded pool running artwork work items off the caller's task.
///
/// At most `size` generations run at once; the rest wait for a permit in
/// submission order.
#[derive(Clone)]
pub struct ArtworkPool {
    permits: Arc<Semaphore>,
    size: usize,
}

impl ArtworkPool {
    pub fn new(size: usize) -> Self {
        Self {
            permits: Arc::new(Semaphore::new(size)),
            size,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Permits not currently held by a running work item
    pub fn available(&self) -> usize {
        self.permits.available_permits()
    }

    /// Dispatch one generation. The work item runs to completion even if the
    /// returned handle is dropped.
    pub fn submit(
        &self,
        generator: Arc<dyn ArtworkGenerator>,
        title: String,
    ) -> JoinHandle<Result<String>> {
        let permits = self.permits.clone();
        tokio::spawn(async move {
            let _permit = permits
                .acquire_owned()
                .await
                .map_err(|e| LolomoError::Artwork(format!("worker pool closed: {}", e)))?;

            let started = Instant::now();
            let result = generator.generate(&title).await;
            metrics::artwork::duration(started.elapsed().as_secs_f64());
            result
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_title() {
        assert_eq!(normalize_title("The Witcher"), "the-witcher");
        assert_eq!(normalize_title("Love is Blind"), "love-is-blind");
        assert_eq!(normalize_title("You"), "you");
        assert_eq!(normalize_title("  Two  Spaces"), "--two--spaces");
    }

    #[tokio::test]
    async fn test_generate_appends_normalized_title() {
        let generator = UuidArtworkGenerator::new(Duration::ZERO);
        let artwork = generator.generate("Sex Education").await.unwrap();

        let (prefix, suffix) = artwork.split_at(36);
        assert!(Uuid::parse_str(prefix).is_ok());
        assert_eq!(suffix, "-sex-education");
    }

    #[tokio::test]
    async fn test_generate_is_unique_per_call() {
        let generator = UuidArtworkGenerator::new(Duration::ZERO);
        let first = generator.generate("Manifest").await.unwrap();
        let second = generator.generate("Manifest").await.unwrap();
        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn test_generate_waits_for_delay() {
        let generator = UuidArtworkGenerator::new(Duration::from_millis(30));
        let started = Instant::now();
        generator.generate("Receiver").await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(30));
    }

    #[tokio::test]
    async fn test_pool_releases_permits() {
        let pool = ArtworkPool::new(2);
        let generator: Arc<dyn ArtworkGenerator> =
            Arc::new(UuidArtworkGenerator::new(Duration::ZERO));

        let handle = pool.submit(generator, "Wednesday".to_string());
        let artwork = handle.await.unwrap().unwrap();

        assert!(artwork.ends_with("-wednesday"));
        assert_eq!(pool.size(), 2);
        assert_eq!(pool.available(), 2);
    }
}
