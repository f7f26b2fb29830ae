//! Owned, read-only views of a level for renderers: [`LevelView`] and
//! [`EntryView`].

use crate::entry::Entry;
use crate::level::Level;

/// What a renderer needs to know about one entry.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntryView {
    pub title: String,
    pub visible: bool,
    pub toggled: bool,
    pub level_link: bool,
}

impl From<&Entry> for EntryView {
    fn from(e: &Entry) -> Self {
        Self {
            title: e.title(),
            visible: e.is_visible(),
            toggled: e.is_toggled(),
            level_link: e.is_level_link(),
        }
    }
}

/// A snapshot of one level: heading, entries in order, and selection.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LevelView {
    pub heading: String,
    pub selection: usize,
    pub entries: Vec<EntryView>,
}

impl LevelView {
    /// Entries a renderer should draw, with their indices.
    pub fn visible(&self) -> impl Iterator<Item = (usize, &EntryView)> {
        self.entries.iter().enumerate().filter(|(_, e)| e.visible)
    }

    pub fn is_selected(&self, index: usize) -> bool {
        index == self.selection
    }
}

impl From<&Level> for LevelView {
    fn from(level: &Level) -> Self {
        Self {
            heading: level.heading().to_string(),
            selection: level.selection(),
            entries: level.entries().iter().map(EntryView::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::{EntryPatch, EntrySpec};
    use crate::tree::MenuTree;

    fn sample() -> LevelView {
        let mut tree = MenuTree::new();
        let main = tree.create_level(None, "Main", false).unwrap();
        tree.add_entry("Main", EntrySpec::new("Hidden").visible(false))
            .unwrap();
        tree.add_entry("Main", EntrySpec::new("Fan - On")).unwrap();
        tree.create_level(Some("Main"), "Sub", false).unwrap();
        tree.update_entry(main, 0, EntryPatch::new().with_title("Quit"))
            .unwrap();
        LevelView::from(tree.level(main).unwrap())
    }

    #[test]
    fn view_copies_fields() {
        let v = sample();
        assert_eq!(v.heading, "Main");
        assert_eq!(v.selection, 0);
        assert_eq!(v.entries.len(), 4);
        assert_eq!(v.entries[0].title, "Quit");
        assert!(!v.entries[1].visible);
        assert!(v.entries[2].toggled);
        assert_eq!(v.entries[2].title, "Fan - On");
        assert!(v.entries[3].level_link);
        assert!(v.is_selected(0));
    }

    #[test]
    fn visible_keeps_entry_indices() {
        let v = sample();
        let idx: Vec<usize> = v.visible().map(|(i, _)| i).collect();
        assert_eq!(idx, vec![0, 2, 3]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_json_shape() {
        let v = sample();
        let json = serde_json::to_value(&v).unwrap();
        assert_eq!(json["heading"], "Main");
        assert_eq!(json["entries"][3]["level_link"], true);
        let back: LevelView = serde_json::from_value(json).unwrap();
        assert_eq!(back, v);
    }
}
