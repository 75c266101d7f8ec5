use super::super::messages::Message;
use super::super::state::{App, AssistantView, Phase};
use super::TEXT_DIM;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{Space, button, column, container, horizontal_space, mouse_area, opaque, row, stack, text};
use iced::{Color, Element, Length};

/// The external assistant as an overlay layer above the active presenter.
/// Closed: a bubble in the lower-left corner while results are shown.
/// Open: a panel whose primary action launches the assistant in the
/// browser. Reduced (compact only): a slim banner out of the way.
pub(super) fn overlay(app: &App) -> Option<Element<'_, Message>> {
    match app.assistant {
        AssistantView::Closed => {
            if app.roulette.phase == Phase::Result {
                Some(bubble())
            } else {
                None
            }
        }
        AssistantView::Open => Some(open_panel(app)),
        AssistantView::Reduced => Some(reduced_banner()),
    }
}

fn bubble() -> Element<'static, Message> {
    container(button(text("Chat with the assistant")).on_press(Message::AssistantOpened))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Left)
        .align_y(Vertical::Bottom)
        .padding(16)
        .into()
}

fn open_panel(app: &App) -> Element<'_, Message> {
    let mut header = row![
        text("Podcast assistant").size(18),
        horizontal_space(),
    ]
    .spacing(8)
    .align_y(Vertical::Center);

    if app.is_compact {
        header = header.push(
            button(text("Reduce").size(13)).on_press(Message::AssistantReduced(true)),
        );
    }
    header = header.push(button(text("Close").size(13)).on_press(Message::AssistantClosed));

    let panel = container(
        column![
            header,
            text("The assistant runs as an external chat service.")
                .size(14)
                .color(TEXT_DIM),
            button(text("Open the assistant in your browser"))
                .on_press(Message::OpenLink(app.config.assistant_url.clone())),
        ]
        .spacing(14),
    )
    .padding(20)
    .max_width(520)
    .style(container::rounded_box);

    let backdrop = mouse_area(
        container(Space::new(Length::Fill, Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_theme| container::Style {
                background: Some(Color::from_rgba(0.0, 0.0, 0.0, 0.6).into()),
                ..container::Style::default()
            }),
    )
    .on_press(Message::AssistantClosed);

    stack![backdrop, iced::widget::center(opaque(panel)).padding(24)]
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn reduced_banner() -> Element<'static, Message> {
    let banner = container(
        row![
            button(text("Assistant").size(13)).on_press(Message::AssistantReduced(false)),
            button(text("Close").size(13)).on_press(Message::AssistantClosed),
        ]
        .spacing(8)
        .align_y(Vertical::Center),
    )
    .padding(10)
    .style(container::rounded_box);

    container(banner)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Right)
        .align_y(Vertical::Bottom)
        .padding(16)
        .into()
}
