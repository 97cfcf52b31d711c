// src/pipeline/load.rs

//! Fetch-then-parse loading.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use crate::error::Result;
use crate::models::{Earthquake, FeedConfig};
use crate::services::{FeedSource, parse_feed};

/// Fetch `url` from `source` and parse the body.
pub async fn fetch_earthquakes(source: &dyn FeedSource, url: &str) -> Result<Vec<Earthquake>> {
    let body = source.fetch(url).await?;
    parse_feed(&body)
}

/// Loads the earthquake list for one URL.
///
/// At most one load runs at a time per loader. A successful result is kept
/// and handed to later callers until [`EarthquakeLoader::refresh`] is called;
/// failures are not kept.
pub struct EarthquakeLoader {
    source: Arc<dyn FeedSource>,
    url: String,
    delay: Duration,
    cached: Mutex<Option<Vec<Earthquake>>>,
}

impl EarthquakeLoader {
    pub fn new(source: Arc<dyn FeedSource>, url: impl Into<String>) -> Self {
        Self {
            source,
            url: url.into(),
            delay: Duration::ZERO,
            cached: Mutex::new(None),
        }
    }

    /// Loader for the configured feed URL and delay.
    pub fn from_config(source: Arc<dyn FeedSource>, config: &FeedConfig) -> Self {
        Self::new(source, config.url.clone())
            .with_delay(Duration::from_millis(config.simulated_delay_ms))
    }

    /// Sleep before every fetch.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Return the cached list, or fetch and parse it.
    pub async fn load(&self) -> Result<Vec<Earthquake>> {
        let mut cached = self.cached.lock().await;
        if let Some(quakes) = cached.as_ref() {
            log::debug!("Delivering {} cached earthquakes", quakes.len());
            return Ok(quakes.clone());
        }

        let quakes = self.load_uncached().await?;
        *cached = Some(quakes.clone());
        Ok(quakes)
    }

    /// Drop the cached list and load again.
    pub async fn refresh(&self) -> Result<Vec<Earthquake>> {
        let mut cached = self.cached.lock().await;
        cached.take();

        let quakes = self.load_uncached().await?;
        *cached = Some(quakes.clone());
        Ok(quakes)
    }

    /// Run [`EarthquakeLoader::load`] on a background task.
    ///
    /// Dropping the handle does not stop the load.
    pub fn spawn(self: &Arc<Self>) -> JoinHandle<Result<Vec<Earthquake>>> {
        let loader = Arc::clone(self);
        tokio::spawn(async move { loader.load().await })
    }

    async fn load_uncached(&self) -> Result<Vec<Earthquake>> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        log::info!("Loading earthquakes from {}", self.url);
        let quakes = fetch_earthquakes(self.source.as_ref(), &self.url)
            .await
            .inspect_err(|e| log::warn!("Load failed ({}): {}", e.kind(), e))?;
        log::info!("Loaded {} earthquakes", quakes.len());
        Ok(quakes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use crate::error::AppError;

    const TWO_QUAKES: &str = r#"{"features":[
        {"properties":{"mag":6.1,"place":"10km NE of Tokyo","time":1516406400000,"url":"https://example.com/1"}},
        {"properties":{"mag":4.5,"place":"Valparaiso, Chile","time":1516320000000,"url":"https://example.com/2"}}
    ]}"#;

    /// Serves canned bodies and counts calls.
    struct StubSource {
        bodies: std::sync::Mutex<Vec<Result<String>>>,
        calls: AtomicUsize,
    }

    impl StubSource {
        fn new(bodies: Vec<Result<String>>) -> Arc<Self> {
            Arc::new(Self {
                bodies: std::sync::Mutex::new(bodies),
                calls: AtomicUsize::new(0),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl FeedSource for StubSource {
        async fn fetch(&self, _url: &str) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let mut bodies = self.bodies.lock().unwrap();
            if bodies.is_empty() {
                return Err(AppError::EmptyFeed);
            }
            bodies.remove(0)
        }
    }

    fn status_error() -> AppError {
        AppError::Status {
            url: "https://example.com/feed".to_string(),
            status: 503,
        }
    }

    #[tokio::test]
    async fn test_end_to_end_two_features() {
        let source = StubSource::new(vec![Ok(TWO_QUAKES.to_string())]);
        let quakes = fetch_earthquakes(source.as_ref(), "https://example.com/feed")
            .await
            .unwrap();

        assert_eq!(
            quakes,
            vec![
                Earthquake::new(6.1, "10km NE of Tokyo", 1_516_406_400_000, "https://example.com/1"),
                Earthquake::new(4.5, "Valparaiso, Chile", 1_516_320_000_000, "https://example.com/2"),
            ]
        );
    }

    #[tokio::test]
    async fn test_load_caches_success() {
        let source = StubSource::new(vec![Ok(TWO_QUAKES.to_string())]);
        let loader = EarthquakeLoader::new(source.clone(), "https://example.com/feed");

        let first = loader.load().await.unwrap();
        let second = loader.load().await.unwrap();

        assert_eq!(first, second);
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test]
    async fn test_failures_are_not_cached() {
        let source = StubSource::new(vec![Err(status_error()), Ok(TWO_QUAKES.to_string())]);
        let loader = EarthquakeLoader::new(source.clone(), "https://example.com/feed");

        assert!(matches!(loader.load().await, Err(AppError::Status { .. })));
        assert_eq!(loader.load().await.unwrap().len(), 2);
        assert_eq!(source.calls(), 2);
    }

    #[tokio::test]
    async fn test_refresh_fetches_again() {
        let source = StubSource::new(vec![
            Ok(TWO_QUAKES.to_string()),
            Ok(r#"{"features":[]}"#.to_string()),
        ]);
        let loader = EarthquakeLoader::new(source.clone(), "https://example.com/feed");

        assert_eq!(loader.load().await.unwrap().len(), 2);
        assert!(loader.refresh().await.unwrap().is_empty());
        assert!(loader.load().await.unwrap().is_empty());
        assert_eq!(source.calls(), 2);
    }

    #[tokio::test]
    async fn test_empty_body_is_distinct_from_no_results() {
        let source = StubSource::new(vec![Ok(String::new()), Ok(r#"{"features":[]}"#.to_string())]);
        let loader = EarthquakeLoader::new(source, "https://example.com/feed");

        assert!(matches!(loader.load().await, Err(AppError::EmptyFeed)));
        assert_eq!(loader.load().await.unwrap(), vec![]);
    }

    #[tokio::test]
    async fn test_spawn_single_fetch_for_concurrent_callers() {
        let source = StubSource::new(vec![Ok(TWO_QUAKES.to_string())]);
        let loader = Arc::new(
            EarthquakeLoader::new(source.clone(), "https://example.com/feed")
                .with_delay(Duration::from_millis(20)),
        );

        let a = loader.spawn();
        let b = loader.spawn();
        let (a, b) = (a.await.unwrap().unwrap(), b.await.unwrap().unwrap());

        assert_eq!(a, b);
        assert_eq!(source.calls(), 1);
    }

    #[test]
    fn test_from_config_uses_feed_url() {
        let source = StubSource::new(vec![]);
        let config = FeedConfig::default();
        let loader = EarthquakeLoader::from_config(source, &config);
        assert_eq!(loader.url(), config.url);
    }
}
