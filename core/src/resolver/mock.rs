use super::{MetadataResolver, ResolveError, VideoMetadata};
use crate::types::ResolverConfig;
use rand::Rng;
use rand::distributions::Alphanumeric;
use std::time::Duration;
use tracing::debug;

const TOKEN_LEN: usize = 11;

/// Fabricates plausible metadata after a fixed delay. Never fails.
#[derive(Debug, Clone)]
pub struct MockResolver {
    delay: Duration,
}

impl Default for MockResolver {
    fn default() -> Self {
        Self::new(&ResolverConfig::default())
    }
}

impl MockResolver {
    pub fn new(config: &ResolverConfig) -> Self {
        Self {
            delay: config.delay(),
        }
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl MetadataResolver for MockResolver {
    fn resolve(&self, url: &str) -> Result<VideoMetadata, ResolveError> {
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }

        let mut rng = rand::thread_rng();
        let token: String = (&mut rng)
            .sample_iter(&Alphanumeric)
            .take(TOKEN_LEN)
            .map(|b| char::from(b).to_ascii_lowercase())
            .collect();

        debug!(url, token = %token, "fabricated metadata");

        Ok(VideoMetadata {
            title: Some(format!("TikTok Video {token}")),
            author: Some(format!("User_{}", rng.gen_range(0..1000))),
            thumbnail: Some(format!("https://picsum.photos/seed/{token}/400/600")),
            duration: Some(rng.gen_range(10..70)),
        })
    }
}
