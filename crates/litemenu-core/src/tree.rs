//! The menu tree store: [`MenuTree`] owns every [`Level`].
//!
//! Levels are kept in creation order in a flat table and referred to by
//! [`LevelId`]. The parent back-link of a level is just another `LevelId`,
//! so the tree remains the only owner of level data. Headings double as
//! lookup keys and must be unique; lookup is a linear scan, which is fine
//! for the handful of screens a character display holds.
//!
//! Levels and entries cannot be removed once created.

use crate::action::Action;
use crate::entry::{Entry, EntryPatch, EntrySpec};
use crate::error::MenuError;
use crate::level::{Level, LevelId};

/// Title of the entry automatically added to every root level.
pub const EXIT_TITLE: &str = "Exit";
/// Title of the entry automatically added to every sub-level.
pub const BACK_TITLE: &str = "Back";

/// Owner of all menu levels.
#[derive(Debug, Default)]
pub struct MenuTree {
    levels: Vec<Level>,
}

impl MenuTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of levels.
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Total number of entries across all levels.
    pub fn entry_count(&self) -> usize {
        self.levels.iter().map(Level::len).sum()
    }

    /// The first level created. It is always a root.
    pub fn root(&self) -> Option<LevelId> {
        if self.levels.is_empty() {
            None
        } else {
            Some(LevelId(0))
        }
    }

    /// Find a level by heading. With unique headings there is at most one
    /// match; the first is returned.
    pub fn find_by_heading(&self, heading: &str) -> Option<LevelId> {
        self.levels
            .iter()
            .position(|l| l.heading() == heading)
            .map(LevelId)
    }

    pub fn level(&self, id: LevelId) -> Option<&Level> {
        self.levels.get(id.0)
    }

    pub fn level_mut(&mut self, id: LevelId) -> Option<&mut Level> {
        self.levels.get_mut(id.0)
    }

    /// Look up a level by heading.
    pub fn get(&self, heading: &str) -> Option<&Level> {
        self.find_by_heading(heading).and_then(|id| self.level(id))
    }

    /// Iterate over all levels in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (LevelId, &Level)> {
        self.levels.iter().enumerate().map(|(i, l)| (LevelId(i), l))
    }

    /// Create a level.
    ///
    /// `parent` names the level to attach under; `None` or an empty string
    /// makes a root. A root gets an `Exit` entry with no action bound, and
    /// the caller decides what exiting means (see [`set_action`]). A
    /// sub-level gets a `Back` entry, and its parent gets a link entry that
    /// descends into it.
    ///
    /// Nothing is created if the heading is empty, already in use, or the
    /// parent cannot be found.
    ///
    /// [`set_action`]: Self::set_action
    pub fn create_level(
        &mut self,
        parent: Option<&str>,
        heading: &str,
        loop_at_boundary: bool,
    ) -> Result<LevelId, MenuError> {
        if heading.is_empty() {
            log::warn!("refusing to create a level with an empty heading");
            return Err(MenuError::EmptyHeading);
        }
        if self.find_by_heading(heading).is_some() {
            log::warn!("level {heading:?} already exists");
            return Err(MenuError::DuplicateHeading(heading.to_string()));
        }
        let parent_id = match parent.filter(|p| !p.is_empty()) {
            Some(p) => match self.find_by_heading(p) {
                Some(id) => Some(id),
                None => {
                    log::warn!("parent level {p:?} not found, {heading:?} not created");
                    return Err(MenuError::NotFound(p.to_string()));
                }
            },
            None => None,
        };

        let id = LevelId(self.levels.len());
        let mut level = Level::new(heading.to_string(), loop_at_boundary, parent_id);
        match parent_id {
            None => {
                level.push(EntrySpec::plain(EXIT_TITLE).build());
            }
            Some(pid) => {
                level.push(EntrySpec::plain(BACK_TITLE).action(Action::Back).build());
                self.levels[pid.0].push(
                    EntrySpec::plain(heading)
                        .level_link(true)
                        .toggled(false)
                        .action(Action::Descend(id))
                        .build(),
                );
            }
        }
        self.levels.push(level);
        log::debug!("created level {heading:?} ({id})");
        Ok(id)
    }

    /// Append an entry to the level named `heading` and return its index.
    pub fn add_entry(&mut self, heading: &str, spec: EntrySpec) -> Result<usize, MenuError> {
        let Some(id) = self.find_by_heading(heading) else {
            log::warn!("level {heading:?} not found, entry not added");
            return Err(MenuError::NotFound(heading.to_string()));
        };
        Ok(self.levels[id.0].push(spec.build()))
    }

    /// Bind (or replace) the action of an existing entry.
    pub fn set_action(
        &mut self,
        level: LevelId,
        index: usize,
        action: Action,
    ) -> Result<(), MenuError> {
        self.entry_slot(level, index)?.action = Some(action);
        Ok(())
    }

    /// Apply the fields present in `patch` to an entry.
    pub fn update_entry(
        &mut self,
        level: LevelId,
        index: usize,
        patch: EntryPatch,
    ) -> Result<(), MenuError> {
        self.entry_slot(level, index)?.apply(patch);
        Ok(())
    }

    /// Flip an entry's toggle state and return the new value. If the entry
    /// has an `On`/`Off` marker its title follows the state; an entry
    /// without one keeps its title as is and no marker is appended.
    pub fn toggle_entry(&mut self, level: LevelId, index: usize) -> Result<bool, MenuError> {
        Ok(self.entry_slot(level, index)?.toggle())
    }

    pub(crate) fn take_action(&mut self, level: LevelId, index: usize) -> Option<Action> {
        self.level_mut(level)?.entry_mut(index)?.action.take()
    }

    /// Put a taken action back unless the slot was filled in the meantime.
    pub(crate) fn restore_action(&mut self, level: LevelId, index: usize, action: Action) {
        if let Some(entry) = self.level_mut(level).and_then(|l| l.entry_mut(index)) {
            if entry.action.is_none() {
                entry.action = Some(action);
            }
        }
    }

    /// Push a level with no entries, bypassing `create_level`.
    #[cfg(test)]
    pub(crate) fn push_bare_level(&mut self, heading: &str) -> LevelId {
        let id = LevelId(self.levels.len());
        self.levels.push(Level::new(heading.to_string(), false, None));
        id
    }

    fn entry_slot(
        &mut self,
        level: LevelId,
        index: usize,
    ) -> Result<&mut Entry, MenuError> {
        let Some(l) = self.levels.get_mut(level.0) else {
            log::warn!("level {level} not found");
            return Err(MenuError::NotFound(level.to_string()));
        };
        let len = l.len();
        if index >= len {
            log::warn!(
                "entry index {index} out of range for {:?} ({len} entries)",
                l.heading()
            );
            return Err(MenuError::IndexOutOfRange {
                heading: l.heading().to_string(),
                index,
                len,
            });
        }
        l.entry_mut(index)
            .ok_or_else(|| MenuError::NotFound(level.to_string()))
    }
}
