use iced::widget::scrollable::Id as ScrollId;
use once_cell::sync::Lazy;
use std::time::Duration;

/// Limits applied to the loaded configuration.
pub(crate) const MIN_COMPACT_THRESHOLD: f32 = 320.0;
pub(crate) const MAX_COMPACT_THRESHOLD: f32 = 2048.0;
pub(crate) const MAX_SPIN_DURATION_SECS: f32 = 30.0;
pub(crate) const MAX_FEED_WINDOW: usize = 16;

/// Coarse timer driving the spin deadline, transient flashes and snap
/// retries; only subscribed while one of those is pending.
pub(crate) const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// How many shuffled episodes the spin reel cycles through.
pub(crate) const REEL_SEGMENT_LEN: usize = 30;

/// Deferred feed positioning is retried this many ticks before giving up.
pub(crate) const SNAP_RETRIES: u8 = 3;

pub(crate) static FEED_SCROLL_ID: Lazy<ScrollId> = Lazy::new(|| ScrollId::new("episode-feed"));
pub(crate) static SLIDER_SCROLL_ID: Lazy<ScrollId> =
    Lazy::new(|| ScrollId::new("episode-slider"));
