use super::state::EpisodeId;
use iced::keyboard::{Key, Modifiers};
use iced::widget::scrollable::RelativeOffset;
use std::time::Instant;

/// Messages emitted by the UI.
#[derive(Debug, Clone)]
pub enum Message {
    RequestRandom,
    CloseResult,
    OpenSaved,
    CloseSaved,
    ToggleSave(EpisodeId),
    SelectSaved(EpisodeId),
    NextSlide,
    PrevSlide,
    JumpToStart,
    JumpToRandomSlide,
    DragStarted,
    DragEnded,
    CursorMoved(f32),
    FeedScrolled {
        offset: RelativeOffset,
        viewport_height: f32,
        content_height: f32,
    },
    ScrollToTop,
    ShareMenuToggled(EpisodeId),
    ShareMenuDismissed,
    OpenLink(String),
    CopyToClipboard(String),
    AssistantOpened,
    AssistantClosed,
    AssistantReduced(bool),
    WindowResized {
        width: f32,
        height: f32,
    },
    KeyPressed {
        key: Key,
        modifiers: Modifiers,
    },
    Tick(Instant),
}
