//! Crossterm terminal front-end for litemenu.
//!
//! Provides a [`CrosstermFrontend`] that implements
//! [`litemenu_core::Frontend`]: keys are classified into navigation
//! commands through a [`KeyMap`], and the active level is drawn as a plain
//! list with [`render_level`].

use std::io::{self, Write};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{Attribute, Print, SetAttribute},
    terminal::{self, ClearType},
};

use litemenu_core::{EntryView, Frontend, LevelView, NavCommand, NavOutcome};

// ---------------------------------------------------------------------------
// Key classification
// ---------------------------------------------------------------------------

/// A classified key press.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Input {
    Nav(NavCommand),
    /// Leave the menu without going through its Exit entry.
    Quit,
}

/// Key bindings for the three navigation commands plus quit.
#[derive(Debug, Clone)]
pub struct KeyMap {
    pub up: Vec<KeyCode>,
    pub down: Vec<KeyCode>,
    pub enter: Vec<KeyCode>,
    pub quit: Vec<KeyCode>,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            up: vec![KeyCode::Char('w'), KeyCode::Char('W'), KeyCode::Up],
            down: vec![KeyCode::Char('s'), KeyCode::Char('S'), KeyCode::Down],
            enter: vec![KeyCode::Char('d'), KeyCode::Char('D'), KeyCode::Enter],
            quit: vec![KeyCode::Char('q'), KeyCode::Char('Q'), KeyCode::Esc],
        }
    }
}

impl KeyMap {
    /// Map a key event to an [`Input`]. Releases and repeats are ignored;
    /// Ctrl-C always quits.
    pub fn classify(&self, key: &KeyEvent) -> Option<Input> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Input::Quit);
        }
        if self.up.contains(&key.code) {
            Some(Input::Nav(NavCommand::Up))
        } else if self.down.contains(&key.code) {
            Some(Input::Nav(NavCommand::Down))
        } else if self.enter.contains(&key.code) {
            Some(Input::Nav(NavCommand::Enter))
        } else if self.quit.contains(&key.code) {
            Some(Input::Quit)
        } else {
            None
        }
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// How a level is laid out on screen.
#[derive(Debug, Clone)]
pub struct RenderStyle {
    /// Prefix for the selected row. Other rows get the same number of
    /// spaces.
    pub cursor: String,
    /// Show the `[Menu,Vsbl,T]` flag column.
    pub show_flags: bool,
    /// Draw the selected row in bold.
    pub highlight: bool,
    /// Prompt shown under the list.
    pub prompt: String,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            cursor: " > ".to_string(),
            show_flags: true,
            highlight: true,
            prompt: "Command (w, s, d): ".to_string(),
        }
    }
}

/// Format a single entry row (without line ending).
pub fn format_entry(entry: &EntryView, selected: bool, style: &RenderStyle) -> String {
    let mut line = if selected {
        style.cursor.clone()
    } else {
        " ".repeat(style.cursor.chars().count())
    };
    if style.show_flags {
        line.push_str(&format!(
            "[{},{},{}] ",
            if entry.level_link { "Menu" } else { "Item" },
            if entry.visible { "Vsbl" } else { "Invs" },
            if entry.toggled { "T" } else { "F" },
        ));
    }
    line.push_str(&entry.title);
    line
}

/// Queue the heading, its underline and every visible entry into `out`.
///
/// Lines end in `\r\n` so the output is correct in raw mode. Nothing is
/// flushed.
pub fn render_level<W: Write>(
    out: &mut W,
    view: &LevelView,
    style: &RenderStyle,
) -> io::Result<()> {
    queue!(
        out,
        Print(&view.heading),
        Print("\r\n"),
        Print("=".repeat(view.heading.chars().count())),
        Print("\r\n")
    )?;
    for (i, entry) in view.visible() {
        let selected = view.is_selected(i);
        let line = format_entry(entry, selected, style);
        if selected && style.highlight {
            queue!(
                out,
                SetAttribute(Attribute::Bold),
                Print(line),
                SetAttribute(Attribute::Reset)
            )?;
        } else {
            queue!(out, Print(line))?;
        }
        queue!(out, Print("\r\n"))?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// CrosstermFrontend
// ---------------------------------------------------------------------------

/// A terminal front-end using crossterm.
pub struct CrosstermFrontend {
    keys: KeyMap,
    style: RenderStyle,
    status: Option<String>,
    last: Option<LevelView>,
}

impl CrosstermFrontend {
    /// Create a front-end with default keys and style.
    pub fn new() -> Self {
        Self {
            keys: KeyMap::default(),
            style: RenderStyle::default(),
            status: None,
            last: None,
        }
    }

    pub fn with_keys(mut self, keys: KeyMap) -> Self {
        self.keys = keys;
        self
    }

    pub fn with_style(mut self, style: RenderStyle) -> Self {
        self.style = style;
        self
    }

    fn draw(&mut self, view: &LevelView) -> io::Result<()> {
        let mut stdout = io::stdout();
        queue!(
            stdout,
            terminal::Clear(ClearType::All),
            cursor::MoveTo(0, 0)
        )?;
        render_level(&mut stdout, view, &self.style)?;
        queue!(stdout, Print("\r\n"))?;
        if let Some(status) = self.status.take() {
            queue!(stdout, Print(status), Print("\r\n"))?;
        }
        queue!(stdout, Print(&self.style.prompt))?;
        stdout.flush()
    }
}

impl Default for CrosstermFrontend {
    fn default() -> Self {
        Self::new()
    }
}

impl Frontend for CrosstermFrontend {
    fn init(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All)
        )?;
        Ok(())
    }

    fn next_command(&mut self) -> Result<Option<NavCommand>, Box<dyn std::error::Error>> {
        loop {
            let Event::Key(key) = event::read()? else {
                continue;
            };
            match self.keys.classify(&key) {
                Some(Input::Nav(cmd)) => return Ok(Some(cmd)),
                Some(Input::Quit) => return Ok(None),
                None if key.kind == KeyEventKind::Press => {
                    log::debug!("unmapped key {:?}", key.code);
                    self.status = Some("Invalid input!".to_string());
                    if let Some(view) = self.last.take() {
                        self.draw(&view)?;
                        self.last = Some(view);
                    }
                }
                None => {}
            }
        }
    }

    fn render(&mut self, view: &LevelView) -> Result<(), Box<dyn std::error::Error>> {
        self.draw(view)?;
        self.last = Some(view.clone());
        Ok(())
    }

    fn report(&mut self, outcome: NavOutcome) -> Result<(), Box<dyn std::error::Error>> {
        if outcome == NavOutcome::NoAction {
            self.status = Some("No Action Assigned".to_string());
        }
        Ok(())
    }

    fn close(&mut self) {
        let mut stdout = io::stdout();
        let _ = execute!(stdout, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}
