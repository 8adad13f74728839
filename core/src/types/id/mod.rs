use nutype::nutype;
use uuid::Uuid;

pub const MAX_ID_LENGTH: usize = 256;

/// Identifier of a saved video.
#[nutype(
    sanitize(trim),
    validate(not_empty, len_char_max = MAX_ID_LENGTH),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        AsRef,
        Deref,
        TryFrom,
        Into,
        Hash,
        Borrow,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct VideoId(String);

/// Identifier of a playlist.
#[nutype(
    sanitize(trim),
    validate(not_empty, len_char_max = MAX_ID_LENGTH),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        AsRef,
        Deref,
        TryFrom,
        Into,
        Hash,
        Borrow,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct PlaylistId(String);

impl VideoId {
    /// Returns a fresh random id.
    pub fn generate() -> Self {
        Self::try_new(Uuid::new_v4().to_string()).expect("uuid is a valid id")
    }
}

impl PlaylistId {
    /// Returns a fresh random id.
    pub fn generate() -> Self {
        Self::try_new(Uuid::new_v4().to_string()).expect("uuid is a valid id")
    }
}
