//! The interactive loop: [`Frontend`] and [`Session`].
//!
//! The core never reads keys or prints anything itself. A front-end
//! classifies raw input into [`NavCommand`]s and draws [`LevelView`]s; the
//! session ties that to a [`Menu`].

use crate::error::MenuError;
use crate::menu::Menu;
use crate::navigator::{NavCommand, NavOutcome};
use crate::snapshot::LevelView;

// ---------------------------------------------------------------------------
// Frontend trait
// ---------------------------------------------------------------------------

/// Input/output back-end for a menu session (terminal, serial console,
/// character LCD...).
pub trait Frontend {
    /// Prepare the device.
    fn init(&mut self) -> Result<(), Box<dyn std::error::Error>>;

    /// Block until the next navigation command. `Ok(None)` means the input
    /// is closed or the user asked to leave, and the session stops.
    fn next_command(&mut self) -> Result<Option<NavCommand>, Box<dyn std::error::Error>>;

    /// Draw the active level.
    fn render(&mut self, view: &LevelView) -> Result<(), Box<dyn std::error::Error>>;

    /// Surface the outcome of a command (for instance "No Action Assigned").
    /// Does nothing by default.
    fn report(&mut self, _outcome: NavOutcome) -> Result<(), Box<dyn std::error::Error>> {
        Ok(())
    }

    /// Restore the device. Always called once the loop exits.
    fn close(&mut self);
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// Drives a [`Menu`] with commands from a [`Frontend`].
pub struct Session<F: Frontend> {
    menu: Menu,
    frontend: F,
}

impl<F: Frontend> Session<F> {
    pub fn new(menu: Menu, frontend: F) -> Self {
        Self { menu, frontend }
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    pub fn frontend(&self) -> &F {
        &self.frontend
    }

    /// Give back the menu and front-end.
    pub fn into_parts(self) -> (Menu, F) {
        (self.menu, self.frontend)
    }

    /// Run until the menu ends or input runs out.
    ///
    /// 1. Initialises the front-end.
    /// 2. Renders the active level, reads one command and navigates.
    /// 3. Stops when the navigator has no active level or the front-end
    ///    returns `None`.
    ///
    /// Recoverable menu errors are logged and the loop carries on; errors
    /// from the front-end end the session and are returned.
    pub fn run(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        if let Err(e) = self.frontend.init() {
            self.frontend.close();
            return Err(e);
        }
        let result = self.run_loop();
        self.frontend.close();
        result
    }

    fn run_loop(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        while let Some(view) = self.menu.snapshot() {
            self.frontend.render(&view)?;

            let Some(cmd) = self.frontend.next_command()? else {
                log::debug!("input closed, leaving menu");
                break;
            };

            match self.menu.navigate(cmd) {
                Ok(outcome) => self.frontend.report(outcome)?,
                Err(MenuError::Ended) => break,
                Err(e) => log::warn!("{e}"),
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;
    use crate::action::Action;
    use crate::entry::EntrySpec;

    /// Replays a fixed command list and records what it was shown.
    #[derive(Default)]
    struct Scripted {
        input: VecDeque<NavCommand>,
        frames: Vec<LevelView>,
        outcomes: Vec<NavOutcome>,
        closed: bool,
    }

    impl Scripted {
        fn new(cmds: &[NavCommand]) -> Self {
            Self {
                input: cmds.iter().copied().collect(),
                ..Self::default()
            }
        }
    }

    impl Frontend for Scripted {
        fn init(&mut self) -> Result<(), Box<dyn std::error::Error>> {
            Ok(())
        }

        fn next_command(&mut self) -> Result<Option<NavCommand>, Box<dyn std::error::Error>> {
            Ok(self.input.pop_front())
        }

        fn render(&mut self, view: &LevelView) -> Result<(), Box<dyn std::error::Error>> {
            self.frames.push(view.clone());
            Ok(())
        }

        fn report(&mut self, outcome: NavOutcome) -> Result<(), Box<dyn std::error::Error>> {
            self.outcomes.push(outcome);
            Ok(())
        }

        fn close(&mut self) {
            self.closed = true;
        }
    }

    fn menu() -> Menu {
        let mut menu = Menu::new();
        let main = menu.create_level(None, "Main", false).unwrap();
        menu.set_action(main, 0, Action::Exit).unwrap();
        menu.add_entry("Main", EntrySpec::new("Hello")).unwrap();
        menu.create_level(Some("Main"), "Sub", false).unwrap();
        menu
    }

    #[test]
    fn runs_until_exit() {
        use NavCommand::*;
        let mut session = Session::new(
            menu(),
            Scripted::new(&[Down, Enter, Down, Enter, Enter, Up, Up, Enter, Down]),
        );
        session.run().unwrap();

        let (menu, fe) = session.into_parts();
        assert!(!menu.is_running());
        assert!(fe.closed);
        // The trailing Down is never read.
        assert_eq!(fe.input.len(), 1);
        assert_eq!(
            fe.outcomes,
            vec![
                NavOutcome::Moved,
                NavOutcome::NoAction,
                NavOutcome::Moved,
                NavOutcome::Invoked,
                NavOutcome::Invoked,
                NavOutcome::Moved,
                NavOutcome::Moved,
                NavOutcome::Ended,
            ]
        );
        let headings: Vec<&str> = fe.frames.iter().map(|f| f.heading.as_str()).collect();
        assert_eq!(headings[4], "Sub");
        assert_eq!(headings[5], "Main");
    }

    #[test]
    fn stops_when_input_closes() {
        let mut session = Session::new(menu(), Scripted::new(&[NavCommand::Down]));
        session.run().unwrap();
        assert!(session.menu().is_running());
        assert_eq!(session.menu().selection(), 1);
        assert!(session.frontend().closed);
        assert_eq!(session.frontend().frames.len(), 2);
    }

    #[test]
    fn empty_menu_renders_nothing() {
        let mut session = Session::new(Menu::new(), Scripted::new(&[NavCommand::Enter]));
        session.run().unwrap();
        assert!(session.frontend().frames.is_empty());
        assert!(session.frontend().closed);
    }
}
