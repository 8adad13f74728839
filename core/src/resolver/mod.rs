//! Turning a pasted link into video metadata.

use thiserror::Error;

mod mock;

pub use mock::MockResolver;

/// Best-effort metadata for a link. Missing fields get fallbacks at intake.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VideoMetadata {
    pub title: Option<String>,
    pub author: Option<String>,
    pub thumbnail: Option<String>,
    /// Length in seconds.
    pub duration: Option<u32>,
}

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("metadata unavailable: {0}")]
    Unavailable(String),
}

/// Looks up metadata for a video link.
pub trait MetadataResolver {
    fn resolve(&self, url: &str) -> Result<VideoMetadata, ResolveError>;
}

impl<R: MetadataResolver + ?Sized> MetadataResolver for &R {
    fn resolve(&self, url: &str) -> Result<VideoMetadata, ResolveError> {
        (**self).resolve(url)
    }
}

impl<R: MetadataResolver + ?Sized> MetadataResolver for Box<R> {
    fn resolve(&self, url: &str) -> Result<VideoMetadata, ResolveError> {
        (**self).resolve(url)
    }
}

#[cfg(test)]
mod tests;
