//! History of reported bet strings.
//!
//! Implements a bounded ring buffer with a cursor for undo and redo.

use std::collections::VecDeque;

use wagerline_grammar::BetString;

// =============================================================================
// History Entry
// =============================================================================

/// A reported bet string and the input that produced it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryEntry {
    /// The run number.
    pub run: u64,
    /// The accepted input.
    pub input: String,
    /// The bet string reported for it.
    pub bet: BetString,
}

impl HistoryEntry {
    /// Creates a new entry.
    #[must_use]
    pub fn new(run: u64, input: impl Into<String>, bet: BetString) -> Self {
        Self {
            run,
            input: input.into(),
            bet,
        }
    }
}

// =============================================================================
// Bet History
// =============================================================================

/// Ring buffer of reported bet strings with undo and redo.
///
/// The cursor counts the entries currently in effect. Undo moves it back,
/// redo moves it forward, and a new entry discards everything past it.
#[derive(Clone, Debug)]
pub struct BetHistory {
    entries: VecDeque<HistoryEntry>,
    cursor: usize,
    capacity: usize,
    /// State in effect before the oldest retained entry.
    base: BetString,
}

impl BetHistory {
    /// Creates a history retaining at most `capacity` entries.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity.min(1024)),
            cursor: 0,
            capacity: capacity.max(1),
            base: BetString::empty(),
        }
    }

    /// Returns the capacity of the buffer.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of retained entries, including undone ones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Records a new entry, dropping any undone entries.
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.truncate(self.cursor);
        if self.entries.len() >= self.capacity {
            if let Some(evicted) = self.entries.pop_front() {
                self.base = evicted.bet;
            }
        }
        self.entries.push_back(entry);
        self.cursor = self.entries.len();
    }

    /// Records a run from its components.
    pub fn record(&mut self, run: u64, input: impl Into<String>, bet: BetString) {
        self.push(HistoryEntry::new(run, input, bet));
    }

    /// The entry currently in effect, if any.
    #[must_use]
    pub fn current_entry(&self) -> Option<&HistoryEntry> {
        self.cursor.checked_sub(1).and_then(|i| self.entries.get(i))
    }

    /// The bet string currently in effect.
    #[must_use]
    pub fn current(&self) -> &BetString {
        self.current_entry().map_or(&self.base, |e| &e.bet)
    }

    /// Returns true if there is something to undo.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    /// Returns true if there is something to redo.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.cursor < self.entries.len()
    }

    /// Steps back one entry and returns the bet string now in effect.
    pub fn undo(&mut self) -> Option<&BetString> {
        if !self.can_undo() {
            return None;
        }
        self.cursor -= 1;
        Some(self.current())
    }

    /// Steps forward one entry and returns the bet string now in effect.
    pub fn redo(&mut self) -> Option<&BetString> {
        if !self.can_redo() {
            return None;
        }
        self.cursor += 1;
        Some(self.current())
    }

    /// Returns an iterator over entries in effect, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter().take(self.cursor)
    }

    /// Gets the N most recent entries in effect.
    pub fn recent(&self, count: usize) -> impl Iterator<Item = &HistoryEntry> {
        let skip = self.cursor.saturating_sub(count);
        self.iter().skip(skip)
    }

    /// Forgets everything.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = 0;
        self.base = BetString::empty();
    }
}

impl Default for BetHistory {
    fn default() -> Self {
        Self::new(100)
    }
}

// =============================================================================
// Tests
// =============================================================================
