mod assistant;
mod card;
mod feed;
mod saved;
mod slider;

use super::messages::Message;
use super::state::{App, ModalView, Phase, REEL_SEGMENT_LEN};
use iced::widget::{Column, Space, button, center, column, container, mouse_area, opaque, stack, text};
use iced::{Color, Element, Length};

/// Accent and dim text colors shared by the presenters.
pub(super) const ACCENT: Color = Color::from_rgb(0.39, 0.40, 0.95);
pub(super) const TEXT_DIM: Color = Color::from_rgb(0.58, 0.64, 0.72);

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let base: Element<'_, Message> = if self.is_compact {
            self.compact_view()
        } else {
            self.wide_view()
        };

        let mut layers = vec![base];
        if let Some(layer) = assistant::overlay(self) {
            layers.push(layer);
        }
        if self.modal == ModalView::Saved {
            layers.push(modal_overlay(saved::saved_modal(self), Message::CloseSaved));
        }

        if layers.len() == 1 {
            layers.pop().unwrap_or_else(|| column![].into())
        } else {
            iced::widget::Stack::with_children(layers)
                .width(Length::Fill)
                .height(Length::Fill)
                .into()
        }
    }

    fn compact_view(&self) -> Element<'_, Message> {
        match self.roulette.phase {
            Phase::Idle => self.idle_screen(),
            Phase::Spinning => self.spinning_screen(),
            Phase::Result => feed::view(self),
        }
    }

    fn wide_view(&self) -> Element<'_, Message> {
        match self.roulette.phase {
            Phase::Idle => self.idle_screen(),
            Phase::Spinning => self.spinning_screen(),
            Phase::Result => slider::view(self),
        }
    }

    fn idle_screen(&self) -> Element<'_, Message> {
        let title_size = if self.is_compact { 28 } else { 40 };
        let mut content = column![
            text(format!("Discover an episode of {}", self.config.podcast_name)).size(title_size),
            text("Hit the button below to land on a random episode and let yourself be surprised.")
                .size(18)
                .color(TEXT_DIM),
            button(text("Try my luck").size(20)).on_press(Message::RequestRandom),
        ]
        .spacing(16)
        .align_x(iced::alignment::Horizontal::Center);

        if !self.saved.is_empty() {
            content = content.push(
                button(text(format!("My discoveries ({})", self.saved.len())))
                    .on_press(Message::OpenSaved),
            );
        }

        center(content).padding(24).into()
    }

    /// The looping reel shown while the spin timer runs. Purely
    /// presentational; the result is drawn when the timer fires, not when
    /// the reel stops anywhere.
    fn spinning_screen(&self) -> Element<'_, Message> {
        let reel_len = self.roulette.reel.len().min(REEL_SEGMENT_LEN);
        let mut reel = Column::new()
            .spacing(10)
            .align_x(iced::alignment::Horizontal::Center);

        if reel_len > 0 {
            for slot in 0..3 {
                let position =
                    self.roulette.reel[(self.roulette.reel_step + slot) % reel_len];
                let episode = self.catalog.at_sorted_position(position);
                let (size, color) = if slot == 1 {
                    (24, Color::WHITE)
                } else {
                    (17, TEXT_DIM)
                };
                let label = episode.map(|e| e.title.as_str()).unwrap_or("…");
                reel = reel.push(text(label).size(size).color(color));
            }
        }

        center(
            column![
                reel,
                text("Drawing an episode…").size(16).color(ACCENT),
            ]
            .spacing(28)
            .align_x(iced::alignment::Horizontal::Center),
        )
        .padding(24)
        .into()
    }
}

/// Dim backdrop + centered content; clicking the backdrop emits `on_blur`.
fn modal_overlay<'a>(
    content: Element<'a, Message>,
    on_blur: Message,
) -> Element<'a, Message> {
    let backdrop = mouse_area(
        container(Space::new(Length::Fill, Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_theme| container::Style {
                background: Some(Color::from_rgba(0.0, 0.0, 0.0, 0.7).into()),
                ..container::Style::default()
            }),
    )
    .on_press(on_blur);

    stack![backdrop, center(opaque(content)).padding(24)]
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
