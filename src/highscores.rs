//! High score leaderboard
//!
//! In-memory view over the persisted score list: append-only entries, a
//! selectable sort key and a scroll offset for paged display.

/// A single leaderboard entry: final score and session length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    pub score: u32,
    pub time_millis: u64,
}

/// Display ordering for the leaderboard screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Highest score first
    #[default]
    Score,
    /// Longest run first
    Time,
}

/// The leaderboard. Entries are append-only; ordering is applied at
/// display time so the persisted file stays append-friendly.
#[derive(Debug, Clone, Default)]
pub struct Leaderboard {
    pub entries: Vec<Entry>,
    pub sort_key: SortKey,
    /// First visible row of the paged display
    pub scroll: usize,
}

impl Leaderboard {
    pub fn new(entries: Vec<Entry>) -> Self {
        Self {
            entries,
            sort_key: SortKey::default(),
            scroll: 0,
        }
    }

    /// Record a finished run.
    pub fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
        log::info!(
            "leaderboard entry added: {} pts, {} ms ({} total)",
            entry.score,
            entry.time_millis,
            self.entries.len()
        );
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn set_sort_key(&mut self, key: SortKey) {
        if self.sort_key != key {
            self.sort_key = key;
            self.scroll = 0;
        }
    }

    /// Entries in display order for the current sort key (descending).
    pub fn sorted(&self) -> Vec<Entry> {
        let mut entries = self.entries.clone();
        match self.sort_key {
            SortKey::Score => entries.sort_by(|a, b| b.score.cmp(&a.score)),
            SortKey::Time => entries.sort_by(|a, b| b.time_millis.cmp(&a.time_millis)),
        }
        entries
    }

    /// The best score on record, if any.
    pub fn top_score(&self) -> Option<u32> {
        self.entries.iter().map(|e| e.score).max()
    }

    pub fn scroll_up(&mut self, rows: usize) {
        self.scroll = self.scroll.saturating_sub(rows);
    }

    pub fn scroll_down(&mut self, rows: usize) {
        let max = self.entries.len().saturating_sub(1);
        self.scroll = (self.scroll + rows).min(max);
    }

    /// The currently visible page of the sorted list.
    pub fn page(&self, rows: usize) -> Vec<Entry> {
        self.sorted()
            .into_iter()
            .skip(self.scroll)
            .take(rows)
            .collect()
    }
}
