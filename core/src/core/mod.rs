//! State store over videos, playlists and the user profile.
//!
//! Each collection is kept in memory and mirrored to [`Storage`] under a fixed
//! key on every mutation. A mutation is applied to a copy of the affected
//! collections, written, and only then committed to memory, so a failed write
//! leaves the store unchanged.

use crate::core::storage::Storage;
use crate::core::storage::error::StorageError;
use crate::types::playlist::dedup_ids;
use crate::types::{
    Playlist, PlaylistId, PlaylistPatch, PreferencesPatch, User, UserPreferences, Video, VideoId,
    VideoPatch,
};
use chrono::{DateTime, Utc};
use error::StoreError;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

pub mod intake;
pub mod storage;

pub mod error {
    use super::*;
    use thiserror::Error;

    #[derive(Debug, Error)]
    pub enum StoreError {
        #[error("Storage error: {0}")]
        Storage(#[from] StorageError),

        #[error("Video not found: {0}")]
        VideoNotFound(VideoId),

        #[error("Playlist not found: {0}")]
        PlaylistNotFound(PlaylistId),

        #[error("Video already exists: {0}")]
        VideoExists(VideoId),

        #[error("Playlist already exists: {0}")]
        PlaylistExists(PlaylistId),
    }
}

/// Storage key holding the JSON array of videos.
pub const VIDEOS_KEY: &str = "tiktok-list-videos";

/// Storage key holding the JSON array of playlists.
pub const PLAYLISTS_KEY: &str = "tiktok-list-playlists";

/// Storage key holding the JSON user object.
pub const USER_KEY: &str = "tiktok-list-user";

pub struct Store<S> {
    storage: S,
    videos: Vec<Video>,
    playlists: Vec<Playlist>,
    user: User,
}

impl<S: Storage> Store<S> {
    /// Loads all collections from `storage`.
    ///
    /// Missing or unparseable entries are seeded with an empty collection, or
    /// with `default_user` for the profile.
    pub fn open(storage: S, default_user: User) -> Result<Self, StoreError> {
        let videos: Vec<Video> = load_or(&storage, VIDEOS_KEY, Vec::new)?;
        let mut playlists: Vec<Playlist> = load_or(&storage, PLAYLISTS_KEY, Vec::new)?;
        let user = load_or(&storage, USER_KEY, || default_user)?;

        for playlist in &mut playlists {
            playlist.videos = dedup_ids(std::mem::take(&mut playlist.videos));
        }

        info!(
            videos = videos.len(),
            playlists = playlists.len(),
            "opened store"
        );

        Ok(Self {
            storage,
            videos,
            playlists,
            user,
        })
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }
}

fn load_or<T: DeserializeOwned>(
    storage: &impl Storage,
    key: &str,
    default: impl FnOnce() -> T,
) -> Result<T, StorageError> {
    let Some(raw) = storage.read(key)? else {
        return Ok(default());
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Ok(value),
        Err(err) => {
            warn!(key, %err, "discarding unparseable entry");
            Ok(default())
        }
    }
}

fn encode<T: Serialize + ?Sized>(value: &T) -> Result<String, StorageError> {
    Ok(serde_json::to_string(value)?)
}

/// Read operations.
impl<S: Storage> Store<S> {
    pub fn videos(&self) -> &[Video] {
        &self.videos
    }

    pub fn playlists(&self) -> &[Playlist] {
        &self.playlists
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn video(&self, id: &VideoId) -> Option<&Video> {
        self.videos.iter().find(|v| &v.id == id)
    }

    pub fn playlist(&self, id: &PlaylistId) -> Option<&Playlist> {
        self.playlists.iter().find(|p| &p.id == id)
    }

    /// Resolves a playlist's members in playlist order. Unknown ids are skipped.
    pub fn playlist_videos(&self, id: &PlaylistId) -> Result<Vec<&Video>, StoreError> {
        let playlist = self
            .playlist(id)
            .ok_or_else(|| StoreError::PlaylistNotFound(id.clone()))?;

        Ok(playlist
            .videos
            .iter()
            .filter_map(|video_id| self.video(video_id))
            .collect())
    }

    /// Playlists ordered by `updated_at`, most recent first.
    pub fn playlists_by_recent(&self) -> Vec<&Playlist> {
        let mut playlists: Vec<&Playlist> = self.playlists.iter().collect();
        playlists.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        playlists
    }

    pub fn playlists_containing(&self, video_id: &VideoId) -> Vec<&Playlist> {
        self.playlists
            .iter()
            .filter(|p| p.contains(video_id))
            .collect()
    }

    fn video_position(&self, id: &VideoId) -> Result<usize, StoreError> {
        self.videos
            .iter()
            .position(|v| &v.id == id)
            .ok_or_else(|| StoreError::VideoNotFound(id.clone()))
    }

    fn check_members(&self, ids: &[VideoId]) -> Result<(), StoreError> {
        match ids.iter().find(|id| self.video(id).is_none()) {
            Some(missing) => Err(StoreError::VideoNotFound(missing.clone())),
            None => Ok(()),
        }
    }

    fn playlist_position(&self, id: &PlaylistId) -> Result<usize, StoreError> {
        self.playlists
            .iter()
            .position(|p| &p.id == id)
            .ok_or_else(|| StoreError::PlaylistNotFound(id.clone()))
    }
}

/// Video operations.
impl<S: Storage> Store<S> {
    /// Appends a video.
    ///
    /// Returns `Err(VideoExists)` if the id is already taken.
    pub fn add_video(&mut self, video: Video) -> Result<(), StoreError> {
        if self.video(&video.id).is_some() {
            return Err(StoreError::VideoExists(video.id));
        }

        let id = video.id.clone();
        let mut videos = self.videos.clone();
        videos.push(video);
        self.commit_videos(videos)?;

        debug!(video_id = %id, "added video");
        Ok(())
    }

    /// Merges `patch` into a video.
    ///
    /// Returns `Err(VideoNotFound)` if the id doesn't exist.
    pub fn update_video(&mut self, id: &VideoId, patch: VideoPatch) -> Result<&Video, StoreError> {
        let pos = self.video_position(id)?;

        let mut videos = self.videos.clone();
        patch.apply(&mut videos[pos]);
        self.commit_videos(videos)?;

        debug!(video_id = %id, "updated video");
        Ok(&self.videos[pos])
    }

    /// Removes a video and drops its id from every playlist.
    ///
    /// Both collections are written in a single batch.
    /// Returns `Err(VideoNotFound)` if the id doesn't exist.
    pub fn delete_video(&mut self, id: &VideoId) -> Result<Video, StoreError> {
        let pos = self.video_position(id)?;

        let mut videos = self.videos.clone();
        let removed = videos.remove(pos);

        let mut playlists = self.playlists.clone();
        let mut cascaded = 0;
        for playlist in &mut playlists {
            let before = playlist.videos.len();
            playlist.videos.retain(|member| member != id);
            if playlist.videos.len() != before {
                cascaded += 1;
            }
        }

        let videos_json = encode(&videos)?;
        if cascaded > 0 {
            let playlists_json = encode(&playlists)?;
            self.storage.write(&[
                (VIDEOS_KEY, videos_json.as_str()),
                (PLAYLISTS_KEY, playlists_json.as_str()),
            ])?;
            self.playlists = playlists;
        } else {
            self.storage.write(&[(VIDEOS_KEY, videos_json.as_str())])?;
        }
        self.videos = videos;

        debug!(video_id = %id, playlists = cascaded, "deleted video");
        Ok(removed)
    }
}

/// Playlist operations.
impl<S: Storage> Store<S> {
    /// Appends a playlist. Repeated member ids keep their first occurrence.
    ///
    /// Returns `Err(PlaylistExists)` if the id is already taken, or
    /// `Err(VideoNotFound)` for the first member that is not a saved video.
    pub fn add_playlist(&mut self, mut playlist: Playlist) -> Result<(), StoreError> {
        if self.playlist(&playlist.id).is_some() {
            return Err(StoreError::PlaylistExists(playlist.id));
        }
        self.check_members(&playlist.videos)?;

        playlist.videos = dedup_ids(playlist.videos);

        let id = playlist.id.clone();
        let mut playlists = self.playlists.clone();
        playlists.push(playlist);
        self.commit_playlists(playlists)?;

        debug!(playlist_id = %id, "added playlist");
        Ok(())
    }

    /// Merges `patch` into a playlist and moves `updated_at` to `now`.
    ///
    /// Returns `Err(PlaylistNotFound)` if the id doesn't exist, or
    /// `Err(VideoNotFound)` for the first replacement member that is not a
    /// saved video.
    pub fn update_playlist(
        &mut self,
        id: &PlaylistId,
        patch: PlaylistPatch,
        now: DateTime<Utc>,
    ) -> Result<&Playlist, StoreError> {
        let pos = self.playlist_position(id)?;
        if let Some(videos) = &patch.videos {
            self.check_members(videos)?;
        }

        let mut playlists = self.playlists.clone();
        patch.apply(&mut playlists[pos], now);
        self.commit_playlists(playlists)?;

        debug!(playlist_id = %id, "updated playlist");
        Ok(&self.playlists[pos])
    }

    /// Removes a playlist. Its videos are left alone.
    ///
    /// Returns `Err(PlaylistNotFound)` if the id doesn't exist.
    pub fn delete_playlist(&mut self, id: &PlaylistId) -> Result<Playlist, StoreError> {
        let pos = self.playlist_position(id)?;

        let mut playlists = self.playlists.clone();
        let removed = playlists.remove(pos);
        self.commit_playlists(playlists)?;

        debug!(playlist_id = %id, "deleted playlist");
        Ok(removed)
    }

    /// Appends a video to a playlist.
    ///
    /// Returns `Ok(false)` without touching `updated_at` if the video is
    /// already a member.
    /// Returns `Err(PlaylistNotFound)` or `Err(VideoNotFound)` if either id
    /// doesn't exist.
    pub fn add_video_to_playlist(
        &mut self,
        playlist_id: &PlaylistId,
        video_id: &VideoId,
        now: DateTime<Utc>,
    ) -> Result<bool, StoreError> {
        let pos = self.playlist_position(playlist_id)?;
        self.video_position(video_id)?;

        if self.playlists[pos].contains(video_id) {
            return Ok(false);
        }

        let mut playlists = self.playlists.clone();
        let playlist = &mut playlists[pos];
        playlist.videos.push(video_id.clone());
        playlist.touch(now);
        self.commit_playlists(playlists)?;

        debug!(playlist_id = %playlist_id, video_id = %video_id, "added video to playlist");
        Ok(true)
    }

    /// Removes a video from a playlist.
    ///
    /// Returns `Ok(false)` without touching `updated_at` if the video is not a
    /// member.
    /// Returns `Err(PlaylistNotFound)` if the playlist doesn't exist.
    pub fn remove_video_from_playlist(
        &mut self,
        playlist_id: &PlaylistId,
        video_id: &VideoId,
        now: DateTime<Utc>,
    ) -> Result<bool, StoreError> {
        let pos = self.playlist_position(playlist_id)?;

        if !self.playlists[pos].contains(video_id) {
            return Ok(false);
        }

        let mut playlists = self.playlists.clone();
        let playlist = &mut playlists[pos];
        playlist.videos.retain(|member| member != video_id);
        playlist.touch(now);
        self.commit_playlists(playlists)?;

        debug!(playlist_id = %playlist_id, video_id = %video_id, "removed video from playlist");
        Ok(true)
    }
}

/// User operations.
impl<S: Storage> Store<S> {
    /// Shallow-merges `patch` into the user's preferences.
    pub fn update_user_preferences(
        &mut self,
        patch: PreferencesPatch,
    ) -> Result<&UserPreferences, StoreError> {
        let mut user = self.user.clone();
        patch.apply(&mut user.preferences);
        self.commit_user(user)?;

        debug!(?patch, "updated preferences");
        Ok(&self.user.preferences)
    }
}

/// Persistence helpers.
impl<S: Storage> Store<S> {
    fn commit_videos(&mut self, videos: Vec<Video>) -> Result<(), StoreError> {
        let json = encode(&videos)?;
        self.storage.write(&[(VIDEOS_KEY, json.as_str())])?;
        self.videos = videos;
        Ok(())
    }

    fn commit_playlists(&mut self, playlists: Vec<Playlist>) -> Result<(), StoreError> {
        let json = encode(&playlists)?;
        self.storage.write(&[(PLAYLISTS_KEY, json.as_str())])?;
        self.playlists = playlists;
        Ok(())
    }

    fn commit_user(&mut self, user: User) -> Result<(), StoreError> {
        let json = encode(&user)?;
        self.storage.write(&[(USER_KEY, json.as_str())])?;
        self.user = user;
        Ok(())
    }
}
