#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    ToggleAdvancedSearch,
}

/// A key press reduced to what the bindings look at.
#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyPress {
    pub key: String,
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool,
}

#[allow(dead_code)]
impl KeyPress {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn with_alt(mut self) -> Self {
        self.alt = true;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shortcut {
    pub key: &'static str,
    pub ctrl: bool,
    pub action: ShortcutAction,
}

impl Shortcut {
    /// Extra modifiers are not checked.
    fn matches(&self, press: &KeyPress) -> bool {
        self.ctrl == press.ctrl && self.key == press.key
    }
}

pub const SHORTCUTS: &[Shortcut] = &[Shortcut {
    key: "7",
    ctrl: true,
    action: ShortcutAction::ToggleAdvancedSearch,
}];

pub fn match_shortcut(press: &KeyPress, window_focused: bool) -> Option<ShortcutAction> {
    if !window_focused {
        return None;
    }
    SHORTCUTS
        .iter()
        .find(|shortcut| shortcut.matches(press))
        .map(|shortcut| shortcut.action)
}
