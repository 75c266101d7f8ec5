use iced::widget::scrollable::RelativeOffset;
use std::time::Instant;

/// Wide-layout slider: integer slide index plus drag-gesture tracking.
/// The cursor position is tracked continuously; a press arms the gesture
/// and the release compares net displacement against the threshold.
pub struct SliderState {
    pub(in crate::app) index: usize,
    pub(in crate::app) cursor_x: f32,
    pub(in crate::app) drag_origin: Option<f32>,
}

impl SliderState {
    pub(in crate::app) fn new() -> Self {
        SliderState {
            index: 0,
            cursor_x: 0.0,
            drag_origin: None,
        }
    }
}

/// One deferred feed positioning, retried a few ticks in case the target
/// section has not been laid out yet.
pub struct PendingSnap {
    pub(in crate::app) position: usize,
    pub(in crate::app) retries_left: u8,
}

/// Compact-layout feed: snap-scroll position plus transient chrome.
pub struct FeedState {
    pub(in crate::app) scroll_offset: RelativeOffset,
    pub(in crate::app) viewport_height: f32,
    pub(in crate::app) content_height: f32,
    /// Section index nearest the current scroll position; anchors the
    /// virtualization window.
    pub(in crate::app) current_index: usize,
    pub(in crate::app) pending_snap: Option<PendingSnap>,
    pub(in crate::app) show_scroll_top: bool,
    pub(in crate::app) hint_deadline: Option<Instant>,
}

impl FeedState {
    pub(in crate::app) fn new() -> Self {
        FeedState {
            scroll_offset: RelativeOffset::START,
            viewport_height: 0.0,
            content_height: 0.0,
            current_index: 0,
            pending_snap: None,
            show_scroll_top: false,
            hint_deadline: None,
        }
    }
}
