use super::super::messages::Message;
use super::super::state::{App, SLIDER_SCROLL_ID};
use super::{TEXT_DIM, card};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{Row, Space, Stack, button, container, mouse_area, row, scrollable, text};
use iced::{Element, Length};

/// Wide layout: the catalog as horizontally paged, window-wide panels. The
/// tracked index lives in the reducer; this view only renders around it.
pub(super) fn view(app: &App) -> Element<'_, Message> {
    let count = app.episode_count();
    let slide_width = app.window_width.max(1.0);

    let mut slides = Row::new();
    for (position, episode) in app.catalog.sorted_by_recency().enumerate() {
        let in_window = position.abs_diff(app.slider.index) <= app.config.feed_window;
        let slide: Element<'_, Message> = if in_window {
            container(card::episode_card(app, episode))
                .width(Length::Fixed(slide_width))
                .height(Length::Fill)
                .padding([48, 96])
                .into()
        } else {
            Space::new(Length::Fixed(slide_width), Length::Fill).into()
        };
        slides = slides.push(slide);
    }

    let strip = scrollable(slides)
        .id(SLIDER_SCROLL_ID.clone())
        .direction(iced::widget::scrollable::Direction::Horizontal(
            iced::widget::scrollable::Scrollbar::new()
                .width(0)
                .scroller_width(0),
        ))
        .width(Length::Fill)
        .height(Length::Fill);

    // Presses on non-interactive parts of a slide arm the swipe gesture.
    let strip = mouse_area(strip)
        .on_press(Message::DragStarted)
        .on_release(Message::DragEnded);

    let layers: Vec<Element<'_, Message>> = vec![
        strip.into(),
        toolbar(app),
        arrows(app, count),
    ];
    Stack::with_children(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn toolbar(app: &App) -> Element<'_, Message> {
    let to_start = if app.slider.index == 0 {
        button(text("Most recent"))
    } else {
        button(text("Most recent")).on_press(Message::JumpToStart)
    };

    let mut bar = row![
        to_start,
        button(text("Random")).on_press(Message::JumpToRandomSlide),
    ]
    .spacing(12)
    .align_y(Vertical::Center);

    if !app.saved.is_empty() {
        bar = bar.push(
            button(text(format!("My discoveries ({})", app.saved.len())))
                .on_press(Message::OpenSaved),
        );
    }
    bar = bar.push(
        text(format!(
            "{} / {}",
            app.slider.index + 1,
            app.episode_count().max(1)
        ))
        .size(14)
        .color(TEXT_DIM),
    );
    bar = bar.push(button(text("Close")).on_press(Message::CloseResult));

    container(bar)
        .width(Length::Fill)
        .align_x(Horizontal::Right)
        .padding(16)
        .into()
}

fn arrows(app: &App, count: usize) -> Element<'_, Message> {
    let prev = if app.slider.index > 0 {
        button(text("‹").size(24)).on_press(Message::PrevSlide)
    } else {
        button(text("‹").size(24))
    };
    let next = if app.slider.index + 1 < count {
        button(text("›").size(24)).on_press(Message::NextSlide)
    } else {
        button(text("›").size(24))
    };

    container(
        row![
            prev,
            Space::new(Length::Fill, Length::Shrink),
            next,
        ]
        .align_y(Vertical::Center)
        .width(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_y(Vertical::Center)
    .padding(24)
    .into()
}
