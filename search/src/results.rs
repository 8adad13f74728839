//! Search results types.

use crate::index::Entry;
use nucleo::Snapshot;
use std::collections::HashMap;
use std::hash::Hash;

/// Search results snapshot that provides zero-copy iteration.
///
/// Borrows from the SearchEngine. Use `iter()` to iterate over matched ids
/// in score order without collecting.
pub struct SearchResults<'a, T: Send + Sync + 'static> {
    pub(crate) snapshot: &'a Snapshot<Entry<T>>,
    pub(crate) live: &'a HashMap<T, (u64, String)>,
    pub(crate) limit: usize,
}

impl<'a, T: Eq + Hash + Send + Sync + 'static> SearchResults<'a, T> {
    /// Iterates over matched ids, skipping stale entries.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.snapshot
            .matched_items(..)
            .filter(|item| {
                self.live
                    .get(&item.data.id)
                    .is_some_and(|(generation, _)| *generation == item.data.generation)
            })
            .map(|item| &item.data.id)
            .take(self.limit)
    }
}
