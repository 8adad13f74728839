//! Saved video records.

use crate::types::VideoId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: VideoId,
    pub url: String,
    pub title: String,
    pub author: String,
    pub thumbnail: String,
    /// User-chosen image shown instead of `thumbnail`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_thumbnail: Option<String>,
    /// Length in seconds.
    pub duration: u32,
    pub added_at: DateTime<Utc>,
}

impl Video {
    /// The image to display for this video.
    pub fn display_thumbnail(&self) -> &str {
        self.custom_thumbnail.as_deref().unwrap_or(&self.thumbnail)
    }
}

/// Partial update for a [`Video`]. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VideoPatch {
    pub title: Option<String>,
    pub author: Option<String>,
    pub thumbnail: Option<String>,
    /// `Some(None)` clears the custom image.
    pub custom_thumbnail: Option<Option<String>>,
    pub duration: Option<u32>,
}

impl VideoPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub(crate) fn apply(self, video: &mut Video) {
        if let Some(title) = self.title {
            video.title = title;
        }
        if let Some(author) = self.author {
            video.author = author;
        }
        if let Some(thumbnail) = self.thumbnail {
            video.thumbnail = thumbnail;
        }
        if let Some(custom_thumbnail) = self.custom_thumbnail {
            video.custom_thumbnail = custom_thumbnail;
        }
        if let Some(duration) = self.duration {
            video.duration = duration;
        }
    }
}
