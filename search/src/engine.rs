//! Search engine with separate indexes for videos and playlists.

use crate::config::{CaseMatching, SearchConfig};
use crate::index::Index;
use crate::query::SearchQuery;
use crate::results::SearchResults;
use nucleo::pattern::{CaseMatching as NucleoCaseMatching, Normalization};
use std::sync::Arc;
use tiklist_core::types::{Playlist, PlaylistId, Video, VideoId};
use tracing::debug;

/// Search engine using two independent fuzzy indexes, one over
/// `"title author"` of each video and one over `"name description"` of each
/// playlist.
///
/// This is designed for non-blocking UI integration. The notify callback
/// is invoked when Nucleo's background worker has new results ready.
pub struct SearchEngine {
    videos: Index<VideoId>,
    playlists: Index<PlaylistId>,
    config: SearchConfig,
}

fn video_text(video: &Video) -> String {
    format!("{} {}", video.title, video.author)
}

fn playlist_text(playlist: &Playlist) -> String {
    if playlist.description.is_empty() {
        playlist.name.clone()
    } else {
        format!("{} {}", playlist.name, playlist.description)
    }
}

/// Create operations.
impl SearchEngine {
    /// Creates a search engine over the current collections.
    ///
    /// The `notify` callback is invoked by Nucleo's background worker when new
    /// results are ready.
    pub fn new(
        videos: &[Video],
        playlists: &[Playlist],
        config: SearchConfig,
        notify: Arc<dyn Fn() + Send + Sync>,
    ) -> Self {
        let rebuild_threshold = config.rebuild_threshold;

        Self {
            videos: Index::new(
                videos.iter().map(|v| (v.id.clone(), video_text(v))),
                rebuild_threshold,
                notify.clone(),
            ),
            playlists: Index::new(
                playlists.iter().map(|p| (p.id.clone(), playlist_text(p))),
                rebuild_threshold,
                notify,
            ),
            config,
        }
    }
}

/// Mutation operations.
impl SearchEngine {
    /// Adds a video, or refreshes its text after an update.
    pub fn index_video(&mut self, video: &Video) {
        self.videos.insert(video.id.clone(), video_text(video));
    }

    pub fn remove_video(&mut self, id: &VideoId) {
        self.videos.remove(id);
    }

    /// Adds a playlist, or refreshes its text after an update.
    pub fn index_playlist(&mut self, playlist: &Playlist) {
        self.playlists
            .insert(playlist.id.clone(), playlist_text(playlist));
    }

    pub fn remove_playlist(&mut self, id: &PlaylistId) {
        self.playlists.remove(id);
    }
}

/// Search operations.
impl SearchEngine {
    /// Sets the search pattern for both indexes.
    ///
    /// Matching runs on Nucleo's background threadpool. Call `tick()` to
    /// drive it forward.
    pub fn set_query(&mut self, query: SearchQuery) {
        let SearchQuery::Fuzzy(ref pattern) = query;

        let case_matching = match self.config.case_matching {
            CaseMatching::Sensitive => NucleoCaseMatching::Respect,
            CaseMatching::Insensitive => NucleoCaseMatching::Ignore,
            CaseMatching::Smart => NucleoCaseMatching::Smart,
        };

        let normalization = if self.config.unicode_normalization {
            Normalization::Smart
        } else {
            Normalization::Never
        };

        self.videos.reparse(pattern, case_matching, normalization);
        self.playlists
            .reparse(pattern, case_matching, normalization);
    }

    /// Drives the search forward without blocking.
    ///
    /// Returns true if either result set changed.
    pub fn tick(&mut self) -> bool {
        let videos_changed = self.videos.tick();
        let playlists_changed = self.playlists.tick();
        videos_changed || playlists_changed
    }

    /// Returns true if both indexes have finished searching.
    pub fn is_done(&self) -> bool {
        self.videos.is_done() && self.playlists.is_done()
    }

    /// Matching video ids, best first.
    pub fn video_results(&self) -> SearchResults<'_, VideoId> {
        self.videos.results(self.config.video_result_limit)
    }

    /// Matching playlist ids, best first.
    pub fn playlist_results(&self) -> SearchResults<'_, PlaylistId> {
        self.playlists.results(self.config.playlist_result_limit)
    }

    pub fn has_video(&self, id: &VideoId) -> bool {
        self.videos.contains(id)
    }

    pub fn has_playlist(&self, id: &PlaylistId) -> bool {
        self.playlists.contains(id)
    }
}

/// Maintenance operations.
impl SearchEngine {
    /// Rebuilds any index whose stale entry count exceeds
    /// `rebuild_threshold`.
    pub fn maintenance_compact(&mut self) {
        debug!(
            stale_videos = self.videos.stale_count(),
            stale_playlists = self.playlists.stale_count(),
            "compacting search indexes"
        );
        self.videos.rebuild_if_needed();
        self.playlists.rebuild_if_needed();
    }
}
