//! Demo menu shared by the terminal demo binary and its tests.
//!
//! Layout:
//!
//! ```text
//! Main Menu
//! =========
//!  > Exit
//!    Demo Action
//!    Demo Toggle - Off
//!    Demo SubMenu
//!        Back
//!        Extra Item        (hidden until Show Extras is on)
//!        Show Extras - Off
//!        Wrap Around
//!            Back
//!            One
//!            Two
//!            Three
//! ```

use litemenu_core::{Action, EntryPatch, EntrySpec, Menu, MenuError};

pub const MAIN: &str = "Main Menu";
pub const SUB: &str = "Demo SubMenu";
pub const WRAP: &str = "Wrap Around";

/// Build the demo menu. The root's Exit entry ends the session.
pub fn demo_menu() -> Result<Menu, MenuError> {
    let mut menu = Menu::new();

    let main = menu.create_level(None, MAIN, false)?;
    menu.set_action(main, 0, Action::Exit)?;

    let mut presses = 0u32;
    menu.add_entry(
        MAIN,
        EntrySpec::new("Demo Action").action(Action::call(move |ctx| {
            presses += 1;
            log::info!("Hello World ({presses})");
            let patch = EntryPatch::new().with_title(format!("Demo Action ({presses})"));
            if let Err(e) = ctx.update(patch) {
                log::warn!("{e}");
            }
        })),
    )?;
    menu.add_entry(
        MAIN,
        EntrySpec::new("Demo Toggle - Off").action(Action::Toggle),
    )?;

    let sub = menu.create_level(Some(MAIN), SUB, false)?;
    let extra = menu.add_entry(SUB, EntrySpec::new("Extra Item").visible(false))?;
    menu.add_entry(
        SUB,
        EntrySpec::new("Show Extras - Off").action(Action::call(move |ctx| {
            let shown = match ctx.toggle() {
                Ok(state) => state,
                Err(e) => {
                    log::warn!("{e}");
                    return;
                }
            };
            let patch = EntryPatch::new().with_visible(shown);
            if let Err(e) = ctx.tree_mut().update_entry(sub, extra, patch) {
                log::warn!("{e}");
            }
        })),
    )?;

    menu.create_level(Some(SUB), WRAP, true)?;
    for title in ["One", "Two", "Three"] {
        menu.add_entry(WRAP, EntrySpec::new(title))?;
    }

    Ok(menu)
}

#[cfg(test)]
mod tests {
    use super::*;
    use litemenu_core::{NavCommand, NavOutcome};

    fn titles(menu: &Menu) -> Vec<String> {
        menu.entries().iter().map(|e| e.title()).collect()
    }

    #[test]
    fn main_layout() {
        let menu = demo_menu().unwrap();
        assert_eq!(menu.heading(), MAIN);
        assert_eq!(
            titles(&menu),
            vec!["Exit", "Demo Action", "Demo Toggle - Off", "Demo SubMenu"]
        );
    }

    #[test]
    fn demo_action_counts_presses() {
        let mut menu = demo_menu().unwrap();
        menu.navigate(NavCommand::Down).unwrap();
        menu.navigate(NavCommand::Enter).unwrap();
        menu.navigate(NavCommand::Enter).unwrap();
        assert_eq!(titles(&menu)[1], "Demo Action (2)");
    }

    #[test]
    fn show_extras_reveals_hidden_entry() {
        let mut menu = demo_menu().unwrap();
        for _ in 0..3 {
            menu.navigate(NavCommand::Down).unwrap();
        }
        menu.navigate(NavCommand::Enter).unwrap();
        assert_eq!(menu.heading(), SUB);
        assert!(!menu.entries()[1].is_visible());

        menu.navigate(NavCommand::Down).unwrap();
        menu.navigate(NavCommand::Down).unwrap();
        assert_eq!(menu.entries()[menu.selection()].label(), "Show Extras");
        menu.navigate(NavCommand::Enter).unwrap();
        assert!(menu.entries()[1].is_visible());
        assert_eq!(titles(&menu)[2], "Show Extras - On");
    }

    #[test]
    fn wrap_level_loops_and_exit_ends() {
        let mut menu = demo_menu().unwrap();
        for _ in 0..3 {
            menu.navigate(NavCommand::Down).unwrap();
        }
        menu.navigate(NavCommand::Enter).unwrap();
        menu.navigate(NavCommand::Up).unwrap();
        assert_eq!(menu.selection(), 0, "sub-level does not wrap");
        for _ in 0..3 {
            menu.navigate(NavCommand::Down).unwrap();
        }
        menu.navigate(NavCommand::Enter).unwrap();
        assert_eq!(menu.heading(), WRAP);

        menu.navigate(NavCommand::Up).unwrap();
        assert_eq!(titles(&menu)[menu.selection()], "Three");

        // Back to the sub-level, then back to main and out.
        menu.navigate(NavCommand::Down).unwrap();
        menu.navigate(NavCommand::Enter).unwrap();
        assert_eq!(menu.heading(), SUB);
        menu.navigate(NavCommand::Up).unwrap();
        menu.navigate(NavCommand::Up).unwrap();
        menu.navigate(NavCommand::Up).unwrap();
        menu.navigate(NavCommand::Enter).unwrap();
        assert_eq!(menu.heading(), MAIN);
        assert_eq!(menu.selection(), 3);

        for _ in 0..3 {
            menu.navigate(NavCommand::Up).unwrap();
        }
        assert_eq!(menu.navigate(NavCommand::Enter), Ok(NavOutcome::Ended));
    }
}
