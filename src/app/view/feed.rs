use super::super::messages::Message;
use super::super::state::{App, FEED_SCROLL_ID};
use super::{TEXT_DIM, card};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{Column, Space, Stack, button, column, container, scrollable, text};
use iced::{Element, Length};

/// Compact layout: the full recency-sorted catalog as a column of
/// viewport-tall sections with snap positioning driven by the reducer.
/// Sections outside the virtualization window are height-preserving
/// placeholders, promoted to full cards as they approach the viewport.
pub(super) fn view(app: &App) -> Element<'_, Message> {
    let section_height = app.window_height.max(1.0);
    let mut sections = Column::new();
    for (position, episode) in app.catalog.sorted_by_recency().enumerate() {
        let in_window =
            position.abs_diff(app.feed.current_index) <= app.config.feed_window;
        let section: Element<'_, Message> = if in_window {
            container(card::episode_card(app, episode))
                .width(Length::Fill)
                .height(Length::Fixed(section_height))
                .padding(8)
                .into()
        } else {
            Space::new(Length::Fill, Length::Fixed(section_height)).into()
        };
        sections = sections.push(section);
    }

    let feed = scrollable(sections)
        .id(FEED_SCROLL_ID.clone())
        .on_scroll(|viewport| Message::FeedScrolled {
            offset: viewport.relative_offset(),
            viewport_height: viewport.bounds().height,
            content_height: viewport.content_bounds().height,
        })
        .width(Length::Fill)
        .height(Length::Fill);

    let mut layers: Vec<Element<'_, Message>> = vec![feed.into()];
    layers.push(fab_column(app));
    if app.feed.hint_deadline.is_some() {
        layers.push(scroll_hint());
    }

    Stack::with_children(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Floating action column on the right edge: saved collection, the dice,
/// and (once scrolled) back-to-top.
fn fab_column(app: &App) -> Element<'_, Message> {
    let mut fabs = Column::new()
        .spacing(12)
        .align_x(Horizontal::Center);

    if !app.saved.is_empty() {
        fabs = fabs.push(
            button(text(format!("★ {}", app.saved.len())))
                .on_press(Message::OpenSaved),
        );
    }
    fabs = fabs.push(button(text("Roll")).on_press(Message::RequestRandom));
    if app.feed.show_scroll_top {
        fabs = fabs.push(button(text("Top")).on_press(Message::ScrollToTop));
    }

    container(fabs)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Right)
        .align_y(Vertical::Center)
        .padding(16)
        .into()
}

fn scroll_hint() -> Element<'static, Message> {
    container(
        column![
            text("Discover").size(16),
            text("⌄").size(20).color(TEXT_DIM),
        ]
        .spacing(2)
        .align_x(Horizontal::Center),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(Horizontal::Center)
    .align_y(Vertical::Bottom)
    .padding(48)
    .into()
}
