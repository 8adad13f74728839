pub mod core;
pub mod link;
pub mod resolver;
pub mod types;

pub use crate::core::error::StoreError;
pub use crate::core::intake::error::IntakeError;
pub use crate::core::storage::error::StorageError;
pub use crate::core::storage::{MemoryStorage, RedbStorage, Storage};
pub use crate::core::{PLAYLISTS_KEY, Store, USER_KEY, VIDEOS_KEY};
