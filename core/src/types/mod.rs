pub(crate) mod config;
pub use config::{AppConfig, AppConfigError, Config, IntakeConfig, ProfileConfig, ResolverConfig};

pub(crate) mod id;
pub use id::{MAX_ID_LENGTH, PlaylistId, PlaylistIdError, VideoId, VideoIdError};

pub(crate) mod playlist;
pub use playlist::{Playlist, PlaylistPatch};

pub(crate) mod user;
pub use user::{PreferencesPatch, User, UserPreferences};

pub(crate) mod video;
pub use video::{Video, VideoPatch};
