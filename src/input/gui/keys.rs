use winit::keyboard::KeyCode;

/// What a key press asks the explorer to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostCommand {
    SwitchFractal,
    SwitchColorMap,
    ToggleSettings,
    Quit,
}

impl HostCommand {
    #[must_use]
    pub const fn for_key(key: KeyCode) -> Option<Self> {
        match key {
            KeyCode::KeyF => Some(Self::SwitchFractal),
            KeyCode::KeyC => Some(Self::SwitchColorMap),
            KeyCode::KeyS => Some(Self::ToggleSettings),
            KeyCode::Escape => Some(Self::Quit),
            _ => None,
        }
    }
}
