//! Playlists group saved videos by id.

use crate::types::{PlaylistId, VideoId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Playlist {
    pub id: PlaylistId,
    pub name: String,
    /// Empty when the user gave none.
    #[serde(default)]
    pub description: String,
    /// Member ids in insertion order, without duplicates.
    pub videos: Vec<VideoId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Playlist {
    pub fn contains(&self, video_id: &VideoId) -> bool {
        self.videos.contains(video_id)
    }

    /// Moves `updated_at` forward to `now`. Never moves it backwards.
    pub(crate) fn touch(&mut self, now: DateTime<Utc>) {
        if now > self.updated_at {
            self.updated_at = now;
        }
    }
}

/// Partial update for a [`Playlist`]. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaylistPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub videos: Option<Vec<VideoId>>,
}

impl PlaylistPatch {
    pub(crate) fn apply(self, playlist: &mut Playlist, now: DateTime<Utc>) {
        if let Some(name) = self.name {
            playlist.name = name;
        }
        if let Some(description) = self.description {
            playlist.description = description;
        }
        if let Some(videos) = self.videos {
            playlist.videos = dedup_ids(videos);
        }
        playlist.touch(now);
    }
}

/// Drops repeated ids, keeping the first occurrence of each.
pub(crate) fn dedup_ids(ids: Vec<VideoId>) -> Vec<VideoId> {
    let mut seen = HashSet::with_capacity(ids.len());
    ids.into_iter().filter(|id| seen.insert(id.clone())).collect()
}
