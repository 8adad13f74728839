//! Internal fuzzy index over one kind of entry.

use crate::results::SearchResults;
use nucleo::{Config as NucleoConfig, Nucleo, Utf32String};
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;

/// One injected item. Nucleo never forgets it, so it is matched against the
/// live generation of its id before being reported.
pub(crate) struct Entry<T> {
    pub(crate) id: T,
    pub(crate) generation: u64,
}

/// Fuzzy index with generation-based staleness tracking.
pub(crate) struct Index<T: Clone + Eq + Hash + Send + Sync + 'static> {
    nucleo: Nucleo<Entry<T>>,
    /// Current generation and searchable text per id.
    live: HashMap<T, (u64, String)>,
    next_generation: u64,
    /// Entries injected into Nucleo that no longer match `live`.
    stale: usize,
    rebuild_threshold: usize,
    finished: bool,
}

impl<T: Clone + Eq + Hash + Send + Sync + 'static> Index<T> {
    pub(crate) fn new(
        initial: impl IntoIterator<Item = (T, String)>,
        rebuild_threshold: usize,
        notify: Arc<dyn Fn() + Send + Sync>,
    ) -> Self {
        let nucleo = Nucleo::new(NucleoConfig::DEFAULT, notify, None, 1);

        let mut index = Self {
            nucleo,
            live: HashMap::new(),
            next_generation: 0,
            stale: 0,
            rebuild_threshold,
            finished: true,
        };

        for (id, text) in initial {
            index.insert(id, text);
        }

        index
    }

    pub(crate) fn contains(&self, id: &T) -> bool {
        self.live.contains_key(id)
    }

    /// Indexes `id` under `text`, superseding any previous text.
    pub(crate) fn insert(&mut self, id: T, text: String) {
        if let Some((_, current)) = self.live.get(&id)
            && *current == text
        {
            return;
        }

        let generation = self.next_generation;
        self.next_generation += 1;
        if self.live.insert(id.clone(), (generation, text.clone())).is_some() {
            self.stale += 1;
        }
        push(&self.nucleo, id, generation, &text);
    }

    pub(crate) fn remove(&mut self, id: &T) {
        if self.live.remove(id).is_some() {
            self.stale += 1;
        }
    }

    pub(crate) fn stale_count(&self) -> usize {
        self.stale
    }

    pub(crate) fn rebuild_if_needed(&mut self) {
        if self.stale > self.rebuild_threshold {
            self.rebuild();
        }
    }

    fn rebuild(&mut self) {
        self.nucleo.restart(true);
        self.stale = 0;

        for (id, (generation, text)) in &self.live {
            push(&self.nucleo, id.clone(), *generation, text);
        }
        self.finished = false;
    }

    pub(crate) fn reparse(
        &mut self,
        pattern: &str,
        case_matching: nucleo::pattern::CaseMatching,
        normalization: nucleo::pattern::Normalization,
    ) {
        self.nucleo
            .pattern
            .reparse(0, pattern, case_matching, normalization, false);
        self.finished = false;
    }

    /// Returns true if the visible results changed.
    pub(crate) fn tick(&mut self) -> bool {
        let status = self.nucleo.tick(0);
        self.finished = !status.running;
        status.changed
    }

    pub(crate) fn is_done(&self) -> bool {
        self.finished
    }

    pub(crate) fn results(&self, limit: usize) -> SearchResults<'_, T> {
        SearchResults {
            snapshot: self.nucleo.snapshot(),
            live: &self.live,
            limit,
        }
    }
}

fn push<T: Send + Sync + 'static>(nucleo: &Nucleo<Entry<T>>, id: T, generation: u64, text: &str) {
    let text = Utf32String::from(text);
    nucleo
        .injector()
        .push(Entry { id, generation }, move |_, cols| {
            cols[0] = text;
        });
}
