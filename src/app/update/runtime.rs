use super::super::messages::Message;
use super::super::state::{App, FEED_SCROLL_ID, SLIDER_SCROLL_ID, TICK_INTERVAL};
use super::Effect;
use iced::event;
use iced::keyboard;
use iced::mouse;
use iced::time;
use iced::window;
use iced::{Event, Subscription, Task};
use tracing::{debug, warn};

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        let effects = self.reduce(message);
        if effects.is_empty() {
            Task::none()
        } else {
            Task::batch(effects.into_iter().map(|effect| self.run_effect(effect)))
        }
    }

    pub fn subscription(app: &App) -> Subscription<Message> {
        let mut subscriptions: Vec<Subscription<Message>> =
            vec![event::listen_with(runtime_event_to_message)];

        if app.tick_needed() {
            subscriptions.push(time::every(TICK_INTERVAL).map(Message::Tick));
        }

        Subscription::batch(subscriptions)
    }

    pub(super) fn run_effect(&mut self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::PersistSaved => {
                self.persist_saved();
                Task::none()
            }
            Effect::SnapFeed(offset) => {
                iced::widget::scrollable::snap_to(FEED_SCROLL_ID.clone(), offset)
            }
            Effect::SnapSlider(offset) => {
                iced::widget::scrollable::snap_to(SLIDER_SCROLL_ID.clone(), offset)
            }
            Effect::OpenUrl(url) => {
                if let Err(err) = open::that(&url) {
                    warn!(%url, "Failed to open external link: {err}");
                } else {
                    debug!(%url, "Opened external link");
                }
                Task::none()
            }
            Effect::CopyToClipboard(text) => {
                match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text))
                {
                    Ok(()) => debug!("Copied to clipboard"),
                    Err(err) => warn!("Clipboard copy failed: {err}"),
                }
                Task::none()
            }
        }
    }
}

pub(super) fn runtime_event_to_message(
    event: Event,
    status: event::Status,
    _window_id: window::Id,
) -> Option<Message> {
    if status == event::Status::Captured {
        return None;
    }
    match event {
        Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized {
            width: size.width,
            height: size.height,
        }),
        Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            Some(Message::KeyPressed { key, modifiers })
        }
        Event::Mouse(mouse::Event::CursorMoved { position }) => {
            Some(Message::CursorMoved(position.x))
        }
        _ => None,
    }
}
