//! TikList fuzzy search library.
//!
//! Provides non-blocking fuzzy search over videos (title and author) and
//! playlists (name and description).
//!
//! # Design
//!
//! - Two independent fuzzy indexes: videos and playlists.
//! - Nucleo is append-only, so every injected entry carries a generation.
//!   Re-indexing an id bumps its generation; removing it drops it from the
//!   live map. Entries whose generation is no longer live are stale and are
//!   filtered out of results.
//! - Stale entries are compacted during periodic maintenance, not on every
//!   search.
//!
//! # Non-blocking API
//!
//! - `set_query()`: Sets the search pattern
//! - `tick()`: Drives search forward without blocking (calls nucleo.tick(0))
//! - `video_results()`, `playlist_results()`: Get search results

mod config;
mod engine;
mod index;
mod query;
mod results;

pub use config::{CaseMatching, SearchConfig};
pub use engine::SearchEngine;
pub use query::SearchQuery;
pub use results::SearchResults;
