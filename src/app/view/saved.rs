use super::super::messages::Message;
use super::super::state::App;
use super::{ACCENT, TEXT_DIM};
use iced::alignment::Vertical;
use iced::widget::text::Wrapping;
use iced::widget::{Column, button, column, container, horizontal_space, row, scrollable, text};
use iced::{Element, Length};

/// The saved-collection overlay: most recently saved first, with open and
/// remove per row, and digest sharing at the top.
pub(super) fn saved_modal(app: &App) -> Element<'_, Message> {
    let episodes = app.saved_episodes_by_recency();

    let header = row![
        text("My discoveries").size(24).color(ACCENT),
        horizontal_space(),
        button(text("Close")).on_press(Message::CloseSaved),
    ]
    .align_y(Vertical::Center)
    .width(Length::Fill);

    let mut content = Column::new().push(header).spacing(16);

    if episodes.is_empty() {
        content = content.push(
            text("You have not saved any episodes yet.")
                .size(16)
                .color(TEXT_DIM),
        );
    } else {
        let digest = crate::share::selection_digest(&episodes, &app.config.podcast_name);
        let mailto = crate::share::selection_mailto(&digest, &app.config.podcast_name);
        let copy_label = if app.share.copied_until.is_some() {
            "Selection copied!"
        } else {
            "Copy the selection"
        };
        content = content.push(
            row![
                text("Share your selection:").size(14).color(TEXT_DIM),
                button(text("Email it to yourself").size(14))
                    .on_press(Message::OpenLink(mailto)),
                button(text(copy_label).size(14))
                    .on_press(Message::CopyToClipboard(digest)),
            ]
            .spacing(10)
            .align_y(Vertical::Center),
        );

        let mut list = Column::new().spacing(8);
        for episode in episodes {
            let open = button(
                column![
                    text(&episode.title).size(16).wrapping(Wrapping::WordOrGlyph),
                    text(&episode.guest).size(13).color(TEXT_DIM),
                ]
                .spacing(2),
            )
            .on_press(Message::SelectSaved(episode.id))
            .width(Length::Fill);

            let remove =
                button(text("Remove").size(13)).on_press(Message::ToggleSave(episode.id));

            list = list.push(
                row![open, remove]
                    .spacing(10)
                    .align_y(Vertical::Center)
                    .width(Length::Fill),
            );
        }
        content = content.push(scrollable(list).height(Length::Fixed(360.0)));
    }

    container(content)
        .padding(20)
        .max_width(640)
        .style(container::rounded_box)
        .into()
}
