//! The navigation state machine: [`Navigator`], [`NavCommand`],
//! [`NavOutcome`].
//!
//! A navigator is a cursor into a [`MenuTree`]: it records which level is
//! active and drives that level's selection. Entry actions run
//! synchronously inside [`Navigator::navigate`] and may move the cursor to
//! another level or clear it, which ends the session.

use crate::action::ActionContext;
use crate::error::MenuError;
use crate::level::{LevelId, Step};
use crate::tree::MenuTree;

/// One of the three abstract navigation inputs.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NavCommand {
    Up,
    Down,
    /// Activate the selected entry.
    Enter,
}

/// Result of a successful [`Navigator::navigate`] call.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NavOutcome {
    /// The selection moved.
    Moved,
    /// Nothing changed (boundary without wrap, or an empty level).
    Unchanged,
    /// The selected entry's action ran and the session is still live.
    Invoked,
    /// The selected entry has no action bound.
    NoAction,
    /// An action cleared the active level; the session is over.
    Ended,
}

/// Navigator configuration.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct NavConfig {
    /// Pass over entries whose `visible` flag is off when moving up or
    /// down. Off by default: hidden entries stay reachable by index.
    pub skip_hidden: bool,
}

/// The runtime cursor over a [`MenuTree`].
#[derive(Debug, Clone)]
pub struct Navigator {
    active: Option<LevelId>,
    config: NavConfig,
}

impl Navigator {
    /// Start at the tree's root. An empty tree yields a navigator that has
    /// already ended.
    pub fn new(tree: &MenuTree) -> Self {
        Self::with_config(tree, NavConfig::default())
    }

    pub fn with_config(tree: &MenuTree, config: NavConfig) -> Self {
        Self {
            active: tree.root(),
            config,
        }
    }

    /// The active level, `None` once the session has ended.
    pub fn active(&self) -> Option<LevelId> {
        self.active
    }

    /// Whether there is still an active level to drive.
    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    pub fn config(&self) -> NavConfig {
        self.config
    }

    pub fn set_config(&mut self, config: NavConfig) {
        self.config = config;
    }

    /// Point the navigator at `level` without touching its selection.
    pub fn set_active(&mut self, level: Option<LevelId>) {
        self.active = level;
    }

    /// Process one command against the active level.
    pub fn navigate(
        &mut self,
        tree: &mut MenuTree,
        cmd: NavCommand,
    ) -> Result<NavOutcome, MenuError> {
        let id = self.active.ok_or(MenuError::Ended)?;
        let level = tree.level_mut(id).ok_or_else(|| {
            log::warn!("active level {id} is not part of this tree");
            MenuError::NotFound(id.to_string())
        })?;

        let step = match cmd {
            NavCommand::Up => Step::Up,
            NavCommand::Down => Step::Down,
            NavCommand::Enter => {
                if level.is_empty() {
                    log::warn!("activation on empty level {:?}", level.heading());
                    return Err(MenuError::EmptyLevel(level.heading().to_string()));
                }
                let index = level.selection();
                return self.activate(tree, id, index);
            }
        };

        if level.step(step, self.config.skip_hidden) {
            log::trace!(
                "{:?}: selection {} in {:?}",
                cmd,
                level.selection(),
                level.heading()
            );
            Ok(NavOutcome::Moved)
        } else {
            Ok(NavOutcome::Unchanged)
        }
    }

    fn activate(
        &mut self,
        tree: &mut MenuTree,
        id: LevelId,
        index: usize,
    ) -> Result<NavOutcome, MenuError> {
        let Some(mut action) = tree.take_action(id, index) else {
            log::info!("no action assigned");
            return Ok(NavOutcome::NoAction);
        };

        let result = action.run(&mut ActionContext::new(tree, &mut self.active, id, index));
        tree.restore_action(id, index, action);
        result?;

        Ok(if self.active.is_some() {
            NavOutcome::Invoked
        } else {
            NavOutcome::Ended
        })
    }
}
