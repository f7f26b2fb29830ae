//! **litemenu-core**: hierarchical menu engine for character-oriented
//! front-ends.
//!
//! A [`MenuTree`] owns a set of [`Level`]s (menu screens), each holding an
//! ordered list of [`Entry`] rows. A [`Navigator`] tracks the active level
//! and interprets the three abstract inputs of [`NavCommand`]: up, down and
//! enter. Entries carry an optional [`Action`]; the built-in ones descend
//! into a sub-level, go back, exit or toggle, and [`Action::Call`] runs a
//! user closure with an [`ActionContext`].
//!
//! [`Menu`] bundles a tree with its navigator, and [`Session`] drives a menu
//! from any [`Frontend`].
//!
//! The `serde` feature derives `Serialize`/`Deserialize` for the snapshot
//! views and [`NavCommand`]. Its tests only run with
//! `cargo test -p litemenu-core --features serde`; a plain workspace
//! `cargo test` also enables it through the demos crate.
//!
//! ```
//! use litemenu_core::{Action, EntrySpec, Menu, NavCommand};
//!
//! let mut menu = Menu::new();
//! let main = menu.create_level(None, "Main Menu", false)?;
//! menu.set_action(main, 0, Action::Exit)?;
//! menu.add_entry("Main Menu", EntrySpec::new("Sound - Off").action(Action::Toggle))?;
//! menu.create_level(Some("Main Menu"), "Settings", true)?;
//!
//! menu.navigate(NavCommand::Down)?;
//! menu.navigate(NavCommand::Enter)?;
//! assert_eq!(menu.entries()[1].title(), "Sound - On");
//!
//! menu.navigate(NavCommand::Down)?;
//! menu.navigate(NavCommand::Enter)?;
//! assert_eq!(menu.heading(), "Settings");
//! # Ok::<(), litemenu_core::MenuError>(())
//! ```

pub mod action;
pub mod entry;
pub mod error;
pub mod level;
pub mod menu;
pub mod navigator;
pub mod session;
pub mod snapshot;
pub mod tree;

pub use action::{Action, ActionContext, Callback};
pub use entry::{Entry, EntryPatch, EntrySpec};
pub use error::MenuError;
pub use level::{Level, LevelId};
pub use menu::Menu;
pub use navigator::{NavCommand, NavConfig, NavOutcome, Navigator};
pub use session::{Frontend, Session};
pub use snapshot::{EntryView, LevelView};
pub use tree::{BACK_TITLE, EXIT_TITLE, MenuTree};
