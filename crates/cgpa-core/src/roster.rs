//! Editable list of course rows.
//!
//! Row ids come from a counter that only moves forward, so an id removed
//! (or cleared by `reset`) is never handed out again.

use std::fmt;

use crate::constants::DEFAULT_ROW_CREDITS;
use crate::entry::{CandidateEntry, EntryField};

/// Identifier of a roster row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RowId(pub u64);

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One editable course row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub id: RowId,
    pub entry: CandidateEntry,
}

/// Ordered collection of course rows.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    rows: Vec<Row>,
    next_id: u64,
}

impl Roster {
    /// Create an empty roster.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a roster holding a single default row.
    #[must_use]
    pub fn starter() -> Self {
        let mut roster = Self::new();
        roster.add_default();
        roster
    }

    /// The entry a new blank row starts with.
    #[must_use]
    pub fn default_entry() -> CandidateEntry {
        CandidateEntry::new("", "A", DEFAULT_ROW_CREDITS)
    }

    /// Append a row.
    pub fn add(&mut self, entry: CandidateEntry) -> RowId {
        self.next_id += 1;
        let id = RowId(self.next_id);
        self.rows.push(Row { id, entry });
        id
    }

    /// Append a blank row with default grade and credits.
    pub fn add_default(&mut self) -> RowId {
        self.add(Self::default_entry())
    }

    /// Remove a row. Unknown ids are ignored.
    pub fn remove(&mut self, id: RowId) -> Option<CandidateEntry> {
        let pos = self.rows.iter().position(|row| row.id == id)?;
        Some(self.rows.remove(pos).entry)
    }

    /// Mutable access to a row's entry.
    pub fn get_mut(&mut self, id: RowId) -> Option<&mut CandidateEntry> {
        self.rows
            .iter_mut()
            .find(|row| row.id == id)
            .map(|row| &mut row.entry)
    }

    /// Overwrite one field of a row. Returns `false` for an unknown id.
    pub fn set_field(&mut self, id: RowId, field: EntryField, value: impl Into<String>) -> bool {
        let Some(entry) = self.get_mut(id) else {
            return false;
        };
        let value = value.into();
        match field {
            EntryField::Name => entry.name = value,
            EntryField::Grade => entry.grade = value,
            EntryField::Credits => entry.credits = value,
        }
        true
    }

    /// Rows in insertion order.
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Candidate entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> Vec<CandidateEntry> {
        self.rows.iter().map(|row| row.entry.clone()).collect()
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Drop every row and start over with one default row.
    pub fn reset(&mut self) -> RowId {
        self.rows.clear();
        self.add_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starter_has_one_default_row() {
        let roster = Roster::starter();
        assert_eq!(roster.len(), 1);
        assert_eq!(roster.rows()[0].entry, Roster::default_entry());
        assert_eq!(roster.rows()[0].entry.credits, "3");
    }

    #[test]
    fn ids_are_monotonic() {
        let mut roster = Roster::new();
        let a = roster.add_default();
        let b = roster.add_default();
        roster.remove(b);
        let c = roster.add_default();
        assert!(a < b && b < c);
    }

    #[test]
    fn remove_keeps_order() {
        let mut roster = Roster::new();
        let a = roster.add(CandidateEntry::new("A", "A", "1"));
        let b = roster.add(CandidateEntry::new("B", "B", "1"));
        let c = roster.add(CandidateEntry::new("C", "C", "1"));
        assert_eq!(roster.remove(b).map(|e| e.name), Some("B".to_string()));
        let ids: Vec<_> = roster.rows().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![a, c]);
    }

    #[test]
    fn remove_unknown_is_noop() {
        let mut roster = Roster::starter();
        assert!(roster.remove(RowId(999)).is_none());
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn set_field_edits_row() {
        let mut roster = Roster::starter();
        let id = roster.rows()[0].id;
        assert!(roster.set_field(id, EntryField::Name, "Statistics"));
        assert!(roster.set_field(id, EntryField::Grade, "C"));
        assert!(roster.set_field(id, EntryField::Credits, "4"));
        assert_eq!(roster.entries(), vec![CandidateEntry::new("Statistics", "C", "4")]);
        assert!(!roster.set_field(RowId(42), EntryField::Name, "x"));
    }

    #[test]
    fn reset_leaves_fresh_row() {
        let mut roster = Roster::new();
        let first = roster.add(CandidateEntry::new("A", "A", "1"));
        roster.add(CandidateEntry::new("B", "B", "1"));
        let fresh = roster.reset();
        assert_eq!(roster.len(), 1);
        assert!(fresh > first);
        assert_eq!(roster.rows()[0].entry, Roster::default_entry());
    }
}
