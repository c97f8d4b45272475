#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Idle,
    Animating,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackWarning {
    RegionCollapsed,
    DiscoveryExhausted,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PlaybackStatus {
    pub frames_drawn: u64,
    pub redraws_skipped: u64,
    pub configurations_applied: u64,
    pub zoom_halted: bool,
    pub last_warning: Option<PlaybackWarning>,
}
