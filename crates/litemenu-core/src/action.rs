//! Entry actions: the built-in transitions and user callbacks.

use std::fmt;

use crate::entry::EntryPatch;
use crate::error::MenuError;
use crate::level::LevelId;
use crate::tree::MenuTree;

/// A user callback bound to an entry.
pub type Callback = Box<dyn FnMut(&mut ActionContext<'_>)>;

/// What happens when an entry is activated.
pub enum Action {
    /// Make the given level active and reset its selection to the top.
    Descend(LevelId),
    /// Return to the parent of the level that owns the entry. On a root
    /// level this ends the session.
    Back,
    /// End the session.
    Exit,
    /// Flip the toggle state of the activated entry.
    Toggle,
    /// Run a user callback.
    Call(Callback),
}

impl Action {
    /// Convenience constructor for [`Action::Call`].
    pub fn call<F>(f: F) -> Self
    where
        F: FnMut(&mut ActionContext<'_>) + 'static,
    {
        Self::Call(Box::new(f))
    }

    /// Run this action against `ctx`.
    pub(crate) fn run(&mut self, ctx: &mut ActionContext<'_>) -> Result<(), MenuError> {
        match self {
            Self::Descend(target) => ctx.enter(*target),
            Self::Back => {
                ctx.back();
                Ok(())
            }
            Self::Exit => {
                ctx.exit();
                Ok(())
            }
            Self::Toggle => ctx.toggle().map(|_| ()),
            Self::Call(f) => {
                f(ctx);
                Ok(())
            }
        }
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Descend(id) => f.debug_tuple("Action::Descend").field(id).finish(),
            Self::Back => f.write_str("Action::Back"),
            Self::Exit => f.write_str("Action::Exit"),
            Self::Toggle => f.write_str("Action::Toggle"),
            Self::Call(_) => f.write_str("Action::Call(..)"),
        }
    }
}

// ---------------------------------------------------------------------------
// ActionContext
// ---------------------------------------------------------------------------

/// Mutable view handed to an action while it runs.
///
/// The context knows which entry was activated (its *origin*), so an action
/// keeps acting on the level it was attached to even if an earlier step in
/// the same callback moved the active pointer elsewhere.
pub struct ActionContext<'a> {
    tree: &'a mut MenuTree,
    active: &'a mut Option<LevelId>,
    origin: LevelId,
    index: usize,
}

impl<'a> ActionContext<'a> {
    pub(crate) fn new(
        tree: &'a mut MenuTree,
        active: &'a mut Option<LevelId>,
        origin: LevelId,
        index: usize,
    ) -> Self {
        Self {
            tree,
            active,
            origin,
            index,
        }
    }

    /// The level and entry index that were activated.
    pub fn origin(&self) -> (LevelId, usize) {
        (self.origin, self.index)
    }

    /// The currently active level, or `None` once the session has ended.
    pub fn active(&self) -> Option<LevelId> {
        *self.active
    }

    pub fn tree(&self) -> &MenuTree {
        &*self.tree
    }

    pub fn tree_mut(&mut self) -> &mut MenuTree {
        &mut *self.tree
    }

    /// Make `level` active with its selection reset to 0.
    pub fn enter(&mut self, level: LevelId) -> Result<(), MenuError> {
        let target = self
            .tree
            .level_mut(level)
            .ok_or_else(|| MenuError::NotFound(level.to_string()))?;
        target.set_selection(0);
        log::debug!("entering level {:?}", target.heading());
        *self.active = Some(level);
        Ok(())
    }

    /// Return to the origin level's parent, ending the session on a root.
    /// The parent's selection is left as it was.
    pub fn back(&mut self) {
        let parent = self.tree.level(self.origin).and_then(|l| l.parent());
        match parent {
            Some(p) => log::debug!("returning to level {p}"),
            None => log::debug!("back from a root level, ending session"),
        }
        *self.active = parent;
    }

    /// End the session.
    pub fn exit(&mut self) {
        log::debug!("exit requested");
        *self.active = None;
    }

    /// Toggle the activated entry; returns its new state.
    pub fn toggle(&mut self) -> Result<bool, MenuError> {
        self.tree.toggle_entry(self.origin, self.index)
    }

    /// Apply `patch` to the activated entry.
    pub fn update(&mut self, patch: EntryPatch) -> Result<(), MenuError> {
        self.tree.update_entry(self.origin, self.index, patch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::EntrySpec;

    #[test]
    fn debug_hides_callback() {
        let a = Action::call(|_| {});
        assert_eq!(format!("{a:?}"), "Action::Call(..)");
        assert_eq!(format!("{:?}", Action::Back), "Action::Back");
    }

    #[test]
    fn context_toggle_targets_origin() {
        let mut tree = MenuTree::new();
        let main = tree.create_level(None, "Main", false).unwrap();
        let idx = tree
            .add_entry("Main", EntrySpec::new("Sound - Off"))
            .unwrap();
        let mut active = Some(main);

        let mut ctx = ActionContext::new(&mut tree, &mut active, main, idx);
        assert_eq!(ctx.origin(), (main, idx));
        assert_eq!(ctx.toggle(), Ok(true));
        assert_eq!(tree.level(main).unwrap().entries()[idx].title(), "Sound - On");
    }

    #[test]
    fn run_descend_then_back() {
        let mut tree = MenuTree::new();
        let main = tree.create_level(None, "Main", false).unwrap();
        let sub = tree.create_level(Some("Main"), "Sub", false).unwrap();
        let mut active = Some(main);

        let mut descend = Action::Descend(sub);
        descend
            .run(&mut ActionContext::new(&mut tree, &mut active, main, 1))
            .unwrap();
        assert_eq!(active, Some(sub));

        Action::Back
            .run(&mut ActionContext::new(&mut tree, &mut active, sub, 0))
            .unwrap();
        assert_eq!(active, Some(main));
    }

    #[test]
    fn back_on_root_ends() {
        let mut tree = MenuTree::new();
        let main = tree.create_level(None, "Main", false).unwrap();
        let mut active = Some(main);
        Action::Back
            .run(&mut ActionContext::new(&mut tree, &mut active, main, 0))
            .unwrap();
        assert_eq!(active, None);
    }

    #[test]
    fn enter_unknown_level_is_not_found() {
        let mut tree = MenuTree::new();
        let main = tree.create_level(None, "Main", false).unwrap();
        let mut other = MenuTree::new();
        other.create_level(None, "A", false).unwrap();
        let foreign = other.create_level(Some("A"), "B", false).unwrap();

        let mut active = Some(main);
        let mut ctx = ActionContext::new(&mut tree, &mut active, main, 0);
        assert!(matches!(ctx.enter(foreign), Err(MenuError::NotFound(_))));
        assert_eq!(ctx.active(), Some(main));
    }
}
