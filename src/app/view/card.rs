use super::super::messages::Message;
use super::super::state::App;
use super::{ACCENT, TEXT_DIM};
use crate::catalog::Episode;
use crate::share;
use iced::alignment::Vertical;
use iced::widget::text::Wrapping;
use iced::widget::{Column, Row, button, column, container, row, scrollable, text};
use iced::{Element, Length};

/// One episode rendered in full; shared by the feed sections and the slider
/// panels.
pub(super) fn episode_card<'a>(app: &'a App, episode: &'a Episode) -> Element<'a, Message> {
    let header = text(format!("Episode {} • {}", episode.id, episode.category))
        .size(14)
        .color(ACCENT);

    let title_size = if app.is_compact { 22 } else { 30 };
    let title = text(&episode.title)
        .size(title_size)
        .wrapping(Wrapping::WordOrGlyph);

    let meta = row![
        text(published_label(episode)).size(14).color(TEXT_DIM),
        text(&episode.duration).size(14).color(TEXT_DIM),
        text(format!("With {}", episode.guest)).size(14).color(TEXT_DIM),
    ]
    .spacing(16)
    .align_y(Vertical::Center);

    let description = text(&episode.description)
        .size(16)
        .wrapping(Wrapping::WordOrGlyph);

    let mut content = column![header, title, meta, description].spacing(10);

    if !episode.keywords.is_empty() {
        let tags = episode
            .keywords
            .iter()
            .map(|keyword| format!("#{keyword}"))
            .collect::<Vec<_>>()
            .join("  ");
        content = content.push(text(tags).size(13).color(TEXT_DIM));
    }

    content = content.push(text("Listen and share").size(15));
    content = content.push(platform_row(app, episode));

    if app.share.open_menu == Some(episode.id) {
        content = content.push(share_menu(app, episode));
    }

    let save_label = if app.saved.is_saved(episode.id) {
        "Saved ✓"
    } else {
        "Save"
    };
    content = content.push(
        button(text(save_label))
            .on_press(Message::ToggleSave(episode.id))
            .width(Length::Fill),
    );

    container(scrollable(content.padding(4)).height(Length::Fill))
        .padding(16)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(container::rounded_box)
        .into()
}

fn published_label(episode: &Episode) -> String {
    episode
        .published_date()
        .map(|date| date.format("%d %B %Y").to_string())
        .unwrap_or_else(|| episode.published.clone())
}

/// Only links present in the dataset get a button.
fn platform_row<'a>(app: &'a App, episode: &'a Episode) -> Element<'a, Message> {
    let links = &episode.links;
    let platforms: [(&str, Option<&String>); 7] = [
        ("Website", Some(&links.page)),
        ("Spotify", links.spotify.as_ref()),
        ("Apple", links.apple.as_ref()),
        ("YouTube", links.youtube.as_ref()),
        ("Deezer", links.deezer.as_ref()),
        ("Transcript", links.transcript.as_ref()),
        ("Summary", links.summary.as_ref()),
    ];

    let mut buttons = Row::new().spacing(8);
    for (label, url) in platforms {
        if let Some(url) = url {
            buttons = buttons.push(
                button(text(label).size(14)).on_press(Message::OpenLink(url.clone())),
            );
        }
    }
    buttons = buttons.push(
        button(text("Share").size(14)).on_press(Message::ShareMenuToggled(episode.id)),
    );

    scrollable(buttons)
        .direction(iced::widget::scrollable::Direction::Horizontal(
            iced::widget::scrollable::Scrollbar::new().width(2).scroller_width(2),
        ))
        .width(Length::Fill)
        .into()
}

fn share_menu<'a>(app: &'a App, episode: &'a Episode) -> Element<'a, Message> {
    let mut targets = Row::new().spacing(8);
    for target in share::share_targets(episode, &app.config.podcast_name) {
        targets = targets.push(
            button(text(target.label).size(13)).on_press(Message::OpenLink(target.url)),
        );
    }

    let copy_label = if app.share.copied_until.is_some() {
        "Copied!"
    } else {
        "Copy link"
    };
    let copy_row = row![
        text(&episode.links.page).size(13).color(TEXT_DIM),
        button(text(copy_label).size(13))
            .on_press(Message::CopyToClipboard(episode.links.page.clone())),
    ]
    .spacing(8)
    .align_y(Vertical::Center);

    container(
        Column::new()
            .push(
                scrollable(targets)
                    .direction(iced::widget::scrollable::Direction::Horizontal(
                        iced::widget::scrollable::Scrollbar::new()
                            .width(2)
                            .scroller_width(2),
                    ))
                    .width(Length::Fill),
            )
            .push(copy_row)
            .spacing(8),
    )
    .padding(10)
    .style(container::bordered_box)
    .into()
}
