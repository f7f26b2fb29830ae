//! Terminal menu demo using crossterm.
//!
//! Run: cargo run --bin litemenu-demo
//!
//! Keys: w/s or arrows to move, d or Enter to activate, q or Esc to quit.
//! Log output goes to stderr; set `RUST_LOG=debug` and redirect it
//! (`2>menu.log`) to watch the navigator.

use litemenu_core::Session;
use litemenu_crossterm::CrosstermFrontend;
use litemenu_demos::demo_menu;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let menu = demo_menu()?;
    let mut session = Session::new(menu, CrosstermFrontend::new());
    session.run()?;
    log::info!("menu session finished");
    Ok(())
}
