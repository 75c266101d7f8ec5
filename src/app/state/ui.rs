use super::roulette::EpisodeId;
use std::time::Instant;

/// Overlay shown above whichever presenter is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalView {
    None,
    Saved,
}

/// The external assistant bubble. `Reduced` only exists on the compact
/// layout; the core passes the assistant nothing but the layout hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssistantView {
    Closed,
    Open,
    Reduced,
}

/// Share-menu chrome: which card's menu is open, and the transient
/// "Copied" flash with its expiry.
pub struct ShareUi {
    pub(in crate::app) open_menu: Option<EpisodeId>,
    pub(in crate::app) copied_until: Option<Instant>,
}

impl ShareUi {
    pub(in crate::app) fn new() -> Self {
        ShareUi {
            open_menu: None,
            copied_until: None,
        }
    }
}
