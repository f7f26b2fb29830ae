//! A single menu screen: [`Level`] and its handle [`LevelId`].

use std::fmt;

use crate::entry::Entry;

/// Stable handle to a [`Level`] inside a [`MenuTree`](crate::MenuTree).
///
/// Levels are never removed, so a handle stays valid for the lifetime of
/// the tree that issued it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LevelId(pub(crate) usize);

impl LevelId {
    /// Position of the level in creation order.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for LevelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Direction of a selection step.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Step {
    Up,
    Down,
}

/// One menu screen: a heading, an ordered list of entries and the current
/// selection.
#[derive(Debug)]
pub struct Level {
    heading: String,
    loop_at_boundary: bool,
    entries: Vec<Entry>,
    selection: usize,
    parent: Option<LevelId>,
}

impl Level {
    pub(crate) fn new(heading: String, loop_at_boundary: bool, parent: Option<LevelId>) -> Self {
        Self {
            heading,
            loop_at_boundary,
            entries: Vec::new(),
            selection: 0,
            parent,
        }
    }

    pub fn heading(&self) -> &str {
        &self.heading
    }

    /// Whether moving past either end wraps to the other.
    pub fn loops(&self) -> bool {
        self.loop_at_boundary
    }

    /// Entries in display and navigation order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn entry(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Index of the selected entry. Always `0` on an empty level.
    pub fn selection(&self) -> usize {
        self.selection
    }

    /// The selected entry, if the level has any.
    pub fn selected(&self) -> Option<&Entry> {
        self.entries.get(self.selection)
    }

    /// The level this one was created under, `None` for a root.
    pub fn parent(&self) -> Option<LevelId> {
        self.parent
    }

    /// Move the selection to `index`. Returns `false` (and changes nothing)
    /// if `index` is out of range; `0` is always accepted.
    pub fn set_selection(&mut self, index: usize) -> bool {
        if index < self.entries.len() || index == 0 {
            self.selection = index;
            true
        } else {
            false
        }
    }

    pub(crate) fn entry_mut(&mut self, index: usize) -> Option<&mut Entry> {
        self.entries.get_mut(index)
    }

    pub(crate) fn push(&mut self, entry: Entry) -> usize {
        self.entries.push(entry);
        self.entries.len() - 1
    }

    /// Move the selection one step. With `skip_hidden`, entries that are not
    /// visible are passed over; if no other visible entry is reachable the
    /// selection stays where it is. Returns whether the selection changed.
    pub(crate) fn step(&mut self, step: Step, skip_hidden: bool) -> bool {
        let len = self.entries.len();
        if len == 0 {
            return false;
        }
        let start = self.selection.min(len - 1);
        let mut idx = start;
        for _ in 0..len {
            let next = match step {
                Step::Up if idx > 0 => idx - 1,
                Step::Up if self.loop_at_boundary => len - 1,
                Step::Down if idx + 1 < len => idx + 1,
                Step::Down if self.loop_at_boundary => 0,
                _ => break,
            };
            if next == start {
                break;
            }
            idx = next;
            if !skip_hidden || self.entries[idx].is_visible() {
                self.selection = idx;
                return true;
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::EntrySpec;

    fn level(titles: &[&str], looping: bool) -> Level {
        let mut l = Level::new("Test".into(), looping, None);
        for t in titles {
            l.push(EntrySpec::new(*t).build());
        }
        l
    }

    #[test]
    fn bounded_stops_at_edges() {
        let mut l = level(&["A", "B", "C"], false);
        assert!(!l.step(Step::Up, false));
        assert_eq!(l.selection(), 0);
        assert!(l.step(Step::Down, false));
        assert!(l.step(Step::Down, false));
        assert!(!l.step(Step::Down, false));
        assert_eq!(l.selection(), 2);
    }

    #[test]
    fn looping_wraps() {
        let mut l = level(&["A", "B", "C"], true);
        assert!(l.step(Step::Up, false));
        assert_eq!(l.selection(), 2);
        assert!(l.step(Step::Down, false));
        assert_eq!(l.selection(), 0);
    }

    #[test]
    fn single_entry_never_moves() {
        let mut l = level(&["Only"], true);
        assert!(!l.step(Step::Down, false));
        assert!(!l.step(Step::Up, false));
        assert_eq!(l.selection(), 0);
    }

    #[test]
    fn empty_level_is_noop() {
        let mut l = level(&[], true);
        assert!(!l.step(Step::Down, false));
        assert!(!l.step(Step::Up, true));
        assert_eq!(l.selection(), 0);
        assert!(l.selected().is_none());
    }

    #[test]
    fn skip_hidden_passes_over_invisible() {
        let mut l = Level::new("T".into(), false, None);
        l.push(EntrySpec::new("A").build());
        l.push(EntrySpec::new("hidden").visible(false).build());
        l.push(EntrySpec::new("C").build());

        assert!(l.step(Step::Down, true));
        assert_eq!(l.selection(), 2);
        assert!(l.step(Step::Up, true));
        assert_eq!(l.selection(), 0);

        // Without skipping, the hidden entry is reachable.
        assert!(l.step(Step::Down, false));
        assert_eq!(l.selection(), 1);
    }

    #[test]
    fn skip_hidden_with_no_visible_target_stays() {
        let mut l = Level::new("T".into(), true, None);
        l.push(EntrySpec::new("A").build());
        l.push(EntrySpec::new("h1").visible(false).build());
        l.push(EntrySpec::new("h2").visible(false).build());
        assert!(!l.step(Step::Down, true));
        assert!(!l.step(Step::Up, true));
        assert_eq!(l.selection(), 0);
    }

    #[test]
    fn skip_hidden_bounded_trailing_hidden() {
        let mut l = Level::new("T".into(), false, None);
        l.push(EntrySpec::new("A").build());
        l.push(EntrySpec::new("h").visible(false).build());
        assert!(!l.step(Step::Down, true));
        assert_eq!(l.selection(), 0);
    }

    #[test]
    fn set_selection_validates() {
        let mut l = level(&["A", "B"], false);
        assert!(l.set_selection(1));
        assert_eq!(l.selected().map(|e| e.title()), Some("B".to_string()));
        assert!(!l.set_selection(2));
        assert_eq!(l.selection(), 1);
    }

    #[test]
    fn level_id_display() {
        assert_eq!(LevelId(3).to_string(), "#3");
        assert_eq!(LevelId(3).index(), 3);
    }
}
