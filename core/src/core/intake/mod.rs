//! Validation and construction of new entries before they reach the store.

use crate::core::Store;
use crate::core::error::StoreError;
use crate::core::storage::Storage;
use crate::resolver::{MetadataResolver, ResolveError};
use crate::types::{IntakeConfig, Playlist, PlaylistId, Video, VideoId};
use chrono::{DateTime, Utc};
use error::IntakeError;
use tracing::debug;

pub const FALLBACK_TITLE: &str = "TikTok Video";
pub const FALLBACK_AUTHOR: &str = "Unknown Creator";
pub const FALLBACK_THUMBNAIL: &str = "https://via.placeholder.com/320x568?text=TikTok+Video";

pub mod error {
    use super::*;
    use thiserror::Error;

    #[derive(Debug, Error)]
    pub enum IntakeError {
        #[error("Please enter a video URL")]
        EmptyUrl,

        #[error("Unsupported video URL: {0}")]
        UnsupportedUrl(String),

        #[error("Playlist name is required")]
        EmptyPlaylistName,

        #[error("Failed to extract video information: {0}")]
        Resolve(#[from] ResolveError),

        #[error(transparent)]
        Store(#[from] StoreError),
    }
}

impl<S: Storage> Store<S> {
    /// Resolves a pasted link and saves it as a new video.
    ///
    /// The link must contain `rules.accepted_host`. Metadata the resolver
    /// leaves out is filled with fallbacks.
    pub fn import_url<R: MetadataResolver + ?Sized>(
        &mut self,
        resolver: &R,
        rules: &IntakeConfig,
        url: &str,
        now: DateTime<Utc>,
    ) -> Result<Video, IntakeError> {
        let url = url.trim();
        if url.is_empty() {
            return Err(IntakeError::EmptyUrl);
        }
        if !url.contains(rules.accepted_host.as_str()) {
            return Err(IntakeError::UnsupportedUrl(url.to_string()));
        }

        let metadata = resolver.resolve(url)?;

        let video = Video {
            id: VideoId::generate(),
            url: url.to_string(),
            title: metadata
                .title
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| FALLBACK_TITLE.to_string()),
            author: metadata
                .author
                .filter(|a| !a.is_empty())
                .unwrap_or_else(|| FALLBACK_AUTHOR.to_string()),
            thumbnail: metadata
                .thumbnail
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| FALLBACK_THUMBNAIL.to_string()),
            custom_thumbnail: None,
            duration: metadata.duration.unwrap_or(0),
            added_at: now,
        };

        self.add_video(video.clone())?;

        debug!(video_id = %video.id, url, "imported video");
        Ok(video)
    }

    /// Creates an empty playlist from user input.
    ///
    /// Name and description are trimmed; an empty name is rejected.
    pub fn create_playlist(
        &mut self,
        name: &str,
        description: &str,
        now: DateTime<Utc>,
    ) -> Result<Playlist, IntakeError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(IntakeError::EmptyPlaylistName);
        }

        let playlist = Playlist {
            id: PlaylistId::generate(),
            name: name.to_string(),
            description: description.trim().to_string(),
            videos: Vec::new(),
            created_at: now,
            updated_at: now,
        };

        self.add_playlist(playlist.clone())?;
        Ok(playlist)
    }
}
