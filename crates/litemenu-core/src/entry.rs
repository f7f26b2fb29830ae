//! Menu entries: [`Entry`], the [`EntrySpec`] builder and [`EntryPatch`].
//!
//! An entry's display title is derived, not stored. The base label is kept
//! separately from the on/off state, and when the entry carries a state
//! marker the title is `label + " - On"` or `label + " - Off"`. Titles passed
//! in with a trailing marker are split into that structured form on the way
//! in, so `"Backlight - Off"` becomes label `"Backlight"`, marker on,
//! toggled off.

use crate::action::Action;

const ON_MARKER: &str = " - On";
const OFF_MARKER: &str = " - Off";

/// Split a trailing on/off marker off `title`.
///
/// Returns the base label and, if a marker was present, the state it
/// encoded.
pub(crate) fn split_marker(title: &str) -> (&str, Option<bool>) {
    if let Some(label) = title.strip_suffix(ON_MARKER) {
        (label, Some(true))
    } else if let Some(label) = title.strip_suffix(OFF_MARKER) {
        (label, Some(false))
    } else {
        (title, None)
    }
}

// ---------------------------------------------------------------------------
// Entry
// ---------------------------------------------------------------------------

/// One selectable row within a [`Level`](crate::Level).
#[derive(Debug)]
pub struct Entry {
    label: String,
    marker: bool,
    toggled: bool,
    visible: bool,
    level_link: bool,
    pub(crate) action: Option<Action>,
}

impl Entry {
    /// The display title: the label, followed by the state marker if the
    /// entry has one.
    pub fn title(&self) -> String {
        if !self.marker {
            return self.label.clone();
        }
        let suffix = if self.toggled { ON_MARKER } else { OFF_MARKER };
        format!("{}{suffix}", self.label)
    }

    /// The base label without any state marker.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether the title shows an `On`/`Off` marker.
    pub fn has_marker(&self) -> bool {
        self.marker
    }

    pub fn is_toggled(&self) -> bool {
        self.toggled
    }

    /// Hidden entries are skipped by renderers. Whether the navigator skips
    /// them is governed by [`NavConfig::skip_hidden`](crate::NavConfig).
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Informational flag: activating this entry leads to another level.
    pub fn is_level_link(&self) -> bool {
        self.level_link
    }

    pub fn has_action(&self) -> bool {
        self.action.is_some()
    }

    /// Read-only access to the bound action.
    pub fn action(&self) -> Option<&Action> {
        self.action.as_ref()
    }

    /// Flip the toggle state and return the new value.
    pub(crate) fn toggle(&mut self) -> bool {
        self.toggled = !self.toggled;
        self.toggled
    }

    /// Replace label and marker from a raw title. The toggle state is left
    /// alone; a marker in `title` only says that one should be shown.
    fn set_title(&mut self, title: &str) {
        let (label, state) = split_marker(title);
        self.label = label.to_string();
        self.marker = state.is_some();
    }

    /// Apply the fields present in `patch`. Only `patch.toggled` changes the
    /// toggle state.
    pub(crate) fn apply(&mut self, patch: EntryPatch) {
        if let Some(title) = patch.title {
            self.set_title(&title);
        }
        if let Some(toggled) = patch.toggled {
            self.toggled = toggled;
        }
        if let Some(visible) = patch.visible {
            self.visible = visible;
        }
    }
}

// ---------------------------------------------------------------------------
// EntrySpec
// ---------------------------------------------------------------------------

/// Description of an entry to append with
/// [`MenuTree::add_entry`](crate::MenuTree::add_entry).
///
/// Defaults: visible, not a level link, no action, and toggle state taken
/// from the title's marker (off if there is none).
#[derive(Debug)]
pub struct EntrySpec {
    title: String,
    plain: bool,
    level_link: bool,
    visible: bool,
    toggled: Option<bool>,
    action: Option<Action>,
}

impl EntrySpec {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            plain: false,
            level_link: false,
            visible: true,
            toggled: None,
            action: None,
        }
    }

    /// Like [`EntrySpec::new`], but the title is taken verbatim: a trailing
    /// `" - On"`/`" - Off"` is part of the label, not a state marker.
    pub fn plain(title: impl Into<String>) -> Self {
        Self {
            plain: true,
            ..Self::new(title)
        }
    }

    pub fn level_link(mut self, level_link: bool) -> Self {
        self.level_link = level_link;
        self
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Set the initial toggle state, overriding any marker in the title.
    pub fn toggled(mut self, toggled: bool) -> Self {
        self.toggled = Some(toggled);
        self
    }

    pub fn action(mut self, action: Action) -> Self {
        self.action = Some(action);
        self
    }

    pub(crate) fn build(self) -> Entry {
        let (label, state) = if self.plain {
            (self.title.as_str(), None)
        } else {
            split_marker(&self.title)
        };
        Entry {
            label: label.to_string(),
            marker: state.is_some(),
            toggled: self.toggled.or(state).unwrap_or(false),
            visible: self.visible,
            level_link: self.level_link,
            action: self.action,
        }
    }
}

// ---------------------------------------------------------------------------
// EntryPatch
// ---------------------------------------------------------------------------

/// A partial update for an existing entry. Fields left as `None` are not
/// touched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryPatch {
    pub toggled: Option<bool>,
    pub title: Option<String>,
    pub visible: Option<bool>,
}

impl EntryPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_toggled(mut self, toggled: bool) -> Self {
        self.toggled = Some(toggled);
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = Some(visible);
        self
    }

    /// Whether the patch would change nothing.
    pub fn is_empty(&self) -> bool {
        self.toggled.is_none() && self.title.is_none() && self.visible.is_none()
    }
}
