#[cfg(test)]
#[path = "history_test.rs"]
mod tests;

use std::collections::VecDeque;

pub const HISTORY_LIMIT: usize = 5;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryEntry {
    pub input: String,
    pub output: String,
}

/// Recent generations for the running session, most recent first.
#[derive(Default)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
}

impl History {
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push_front(entry);
        self.entries.truncate(HISTORY_LIMIT);
    }

    pub fn get(&self, idx: usize) -> Option<&HistoryEntry> {
        return self.entries.get(idx);
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        return self.entries.iter();
    }

    pub fn len(&self) -> usize {
        return self.entries.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.entries.is_empty();
    }
}
