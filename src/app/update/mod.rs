use iced::widget::scrollable::RelativeOffset;

mod navigation;
mod reducer;
mod roulette;
mod runtime;
mod scroll;

/// Describes work that must be performed outside the pure reducer.
pub(super) enum Effect {
    PersistSaved,
    SnapFeed(RelativeOffset),
    SnapSlider(RelativeOffset),
    OpenUrl(String),
    CopyToClipboard(String),
}
