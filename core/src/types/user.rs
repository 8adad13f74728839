//! The single local profile and its preferences.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub preferences: UserPreferences,
}

impl Default for User {
    fn default() -> Self {
        Self {
            id: "1".to_string(),
            name: "User".to_string(),
            email: "user@example.com".to_string(),
            preferences: UserPreferences {
                dark_mode: false,
                autoplay: Some(true),
                mute_videos: Some(false),
            },
        }
    }
}

/// Playback and display toggles.
///
/// `autoplay` and `mute_videos` may be missing from older saved profiles; use
/// [`UserPreferences::autoplay`] and [`UserPreferences::mute_videos`] to read
/// them with their defaults applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    #[serde(default)]
    pub dark_mode: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autoplay: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mute_videos: Option<bool>,
}

impl UserPreferences {
    pub fn autoplay(&self) -> bool {
        self.autoplay.unwrap_or(true)
    }

    pub fn mute_videos(&self) -> bool {
        self.mute_videos.unwrap_or(false)
    }
}

/// Shallow update for [`UserPreferences`]. `None` fields keep their value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PreferencesPatch {
    pub dark_mode: Option<bool>,
    pub autoplay: Option<bool>,
    pub mute_videos: Option<bool>,
}

impl PreferencesPatch {
    pub(crate) fn apply(self, preferences: &mut UserPreferences) {
        if let Some(dark_mode) = self.dark_mode {
            preferences.dark_mode = dark_mode;
        }
        if let Some(autoplay) = self.autoplay {
            preferences.autoplay = Some(autoplay);
        }
        if let Some(mute_videos) = self.mute_videos {
            preferences.mute_videos = Some(mute_videos);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_preference_keys_read_as_defaults() {
        let prefs: UserPreferences = serde_json::from_str(r#"{"darkMode":true}"#).unwrap();
        assert!(prefs.dark_mode);
        assert!(prefs.autoplay());
        assert!(!prefs.mute_videos());
    }

    #[test]
    fn patch_only_touches_given_fields() {
        let mut prefs = User::default().preferences;
        PreferencesPatch {
            mute_videos: Some(true),
            ..Default::default()
        }
        .apply(&mut prefs);

        assert!(!prefs.dark_mode);
        assert!(prefs.autoplay());
        assert!(prefs.mute_videos());
    }

    #[test]
    fn user_json_uses_camel_case() {
        let json = serde_json::to_value(User::default()).unwrap();
        assert_eq!(json["preferences"]["darkMode"], false);
        assert_eq!(json["preferences"]["muteVideos"], false);
    }
}
