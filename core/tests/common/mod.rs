#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use tempfile::TempDir;
use tiklist_core::types::{Config, Playlist, PlaylistId, User, Video, VideoId};
use tiklist_core::{RedbStorage, Store};

pub fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 8, 30, 0).unwrap()
}

pub fn video_id(s: &str) -> VideoId {
    VideoId::try_new(s.to_string()).unwrap()
}

pub fn playlist_id(s: &str) -> PlaylistId {
    PlaylistId::try_new(s.to_string()).unwrap()
}

pub fn make_video(id: &str, title: &str) -> Video {
    Video {
        id: video_id(id),
        url: format!("https://www.tiktok.com/@creator/video/{id}"),
        title: title.to_string(),
        author: "creator".to_string(),
        thumbnail: "https://via.placeholder.com/320x568".to_string(),
        custom_thumbnail: None,
        duration: 15,
        added_at: t0(),
    }
}

pub fn make_playlist(id: &str, name: &str) -> Playlist {
    Playlist {
        id: playlist_id(id),
        name: name.to_string(),
        description: String::new(),
        videos: vec![],
        created_at: t0(),
        updated_at: t0(),
    }
}

pub fn config_in(dir: &TempDir) -> Config {
    Config {
        base_path: dir.path().to_path_buf(),
    }
}

pub fn open_store(dir: &TempDir) -> Store<RedbStorage> {
    let storage = RedbStorage::open(&config_in(dir)).unwrap();
    Store::open(storage, User::default()).unwrap()
}
