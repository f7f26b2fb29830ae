//! [`Menu`]: a tree and its navigator bundled behind one object.

use crate::action::Action;
use crate::entry::{Entry, EntryPatch, EntrySpec};
use crate::error::MenuError;
use crate::level::{Level, LevelId};
use crate::navigator::{NavCommand, NavConfig, NavOutcome, Navigator};
use crate::snapshot::LevelView;
use crate::tree::MenuTree;

/// A complete menu: the level tree plus the cursor that walks it.
///
/// Build the tree with [`create_level`](Self::create_level) and
/// [`add_entry`](Self::add_entry), then feed commands to
/// [`navigate`](Self::navigate) and read the active level back with
/// [`heading`](Self::heading), [`entries`](Self::entries) and
/// [`selection`](Self::selection).
///
/// The navigator becomes active on the first level created, whether it
/// was created here or through [`tree_mut`](Self::tree_mut). Once the
/// session has ended it stays ended.
#[derive(Debug)]
pub struct Menu {
    tree: MenuTree,
    nav: Navigator,
    started: bool,
}

impl Menu {
    pub fn new() -> Self {
        Self::with_config(NavConfig::default())
    }

    pub fn with_config(config: NavConfig) -> Self {
        let tree = MenuTree::new();
        let nav = Navigator::with_config(&tree, config);
        Self {
            tree,
            nav,
            started: false,
        }
    }

    /// Start on the root if levels were added behind the navigator's back.
    fn ensure_started(&mut self) {
        if self.started {
            return;
        }
        if !self.nav.is_running() {
            self.nav.set_active(self.tree.root());
        }
        self.started = self.nav.is_running();
    }

    /// Create a level; see [`MenuTree::create_level`].
    pub fn create_level(
        &mut self,
        parent: Option<&str>,
        heading: &str,
        loop_at_boundary: bool,
    ) -> Result<LevelId, MenuError> {
        let was_empty = self.tree.is_empty();
        let id = self.tree.create_level(parent, heading, loop_at_boundary)?;
        if was_empty && !self.started {
            self.nav.set_active(Some(id));
            self.started = true;
        }
        Ok(id)
    }

    /// Append an entry; see [`MenuTree::add_entry`].
    pub fn add_entry(&mut self, heading: &str, spec: EntrySpec) -> Result<usize, MenuError> {
        self.tree.add_entry(heading, spec)
    }

    pub fn set_action(
        &mut self,
        level: LevelId,
        index: usize,
        action: Action,
    ) -> Result<(), MenuError> {
        self.tree.set_action(level, index, action)
    }

    pub fn update_entry(
        &mut self,
        level: LevelId,
        index: usize,
        patch: EntryPatch,
    ) -> Result<(), MenuError> {
        self.tree.update_entry(level, index, patch)
    }

    pub fn toggle_entry(&mut self, level: LevelId, index: usize) -> Result<bool, MenuError> {
        self.tree.toggle_entry(level, index)
    }

    pub fn find_by_heading(&self, heading: &str) -> Option<LevelId> {
        self.tree.find_by_heading(heading)
    }

    /// Process one navigation command.
    pub fn navigate(&mut self, cmd: NavCommand) -> Result<NavOutcome, MenuError> {
        self.ensure_started();
        self.nav.navigate(&mut self.tree, cmd)
    }

    pub fn is_running(&self) -> bool {
        self.active().is_some()
    }

    pub fn active(&self) -> Option<LevelId> {
        match self.nav.active() {
            Some(id) => Some(id),
            None if !self.started => self.tree.root(),
            None => None,
        }
    }

    /// The active level.
    pub fn current(&self) -> Option<&Level> {
        self.active().and_then(|id| self.tree.level(id))
    }

    /// Heading of the active level; empty once the session has ended.
    pub fn heading(&self) -> &str {
        self.current().map_or("", Level::heading)
    }

    /// Entries of the active level; empty once the session has ended.
    pub fn entries(&self) -> &[Entry] {
        match self.current() {
            Some(level) => level.entries(),
            None => &[],
        }
    }

    /// Selection index within the active level.
    pub fn selection(&self) -> usize {
        self.current().map_or(0, Level::selection)
    }

    /// Owned view of the active level for a renderer.
    pub fn snapshot(&self) -> Option<LevelView> {
        self.current().map(LevelView::from)
    }

    pub fn tree(&self) -> &MenuTree {
        &self.tree
    }

    /// Direct access to the tree. A first level created here is picked up
    /// as the active level, just like one made with
    /// [`create_level`](Self::create_level).
    pub fn tree_mut(&mut self) -> &mut MenuTree {
        &mut self.tree
    }

    pub fn navigator(&self) -> &Navigator {
        &self.nav
    }

    pub fn navigator_mut(&mut self) -> &mut Navigator {
        self.ensure_started();
        &mut self.nav
    }
}

impl Default for Menu {
    fn default() -> Self {
        Self::new()
    }
}
