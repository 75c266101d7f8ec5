use super::super::messages::Message;
use super::super::state::{App, AssistantView, ModalView, Phase};
use super::Effect;
use iced::keyboard::{Key, Modifiers, key};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

impl App {
    pub(super) fn reduce(&mut self, message: Message) -> Vec<Effect> {
        let mut effects = Vec::new();

        match message {
            Message::RequestRandom => self.handle_request_random(&mut effects),
            Message::CloseResult => self.handle_close_result(),
            Message::OpenSaved => self.handle_open_saved(),
            Message::CloseSaved => self.modal = ModalView::None,
            Message::ToggleSave(id) => self.handle_toggle_save(id, &mut effects),
            Message::SelectSaved(id) => self.handle_select_saved(id, &mut effects),
            Message::NextSlide => self.handle_next_slide(&mut effects),
            Message::PrevSlide => self.handle_prev_slide(&mut effects),
            Message::JumpToStart => self.handle_jump_to_start(&mut effects),
            Message::JumpToRandomSlide => self.handle_jump_to_random_slide(&mut effects),
            Message::DragStarted => self.handle_drag_started(),
            Message::DragEnded => self.handle_drag_ended(&mut effects),
            Message::CursorMoved(x) => self.slider.cursor_x = x,
            Message::FeedScrolled {
                offset,
                viewport_height,
                content_height,
            } => self.handle_feed_scrolled(offset, viewport_height, content_height),
            Message::ScrollToTop => self.handle_scroll_to_top(&mut effects),
            Message::ShareMenuToggled(id) => self.handle_share_menu_toggled(id),
            Message::ShareMenuDismissed => self.share.open_menu = None,
            Message::OpenLink(url) => effects.push(Effect::OpenUrl(url)),
            Message::CopyToClipboard(text) => self.handle_copy(text, &mut effects),
            Message::AssistantOpened => self.handle_assistant_opened(),
            Message::AssistantClosed => self.assistant = AssistantView::Closed,
            Message::AssistantReduced(reduced) => self.handle_assistant_reduced(reduced),
            Message::WindowResized { width, height } => {
                self.handle_window_resized(width, height, &mut effects);
            }
            Message::KeyPressed { key, modifiers } => {
                if let Some(shortcut) = self.shortcut_message_for_key(key, modifiers) {
                    effects.extend(self.reduce(shortcut));
                }
            }
            Message::Tick(now) => self.handle_tick(now, &mut effects),
        }

        effects
    }

    fn handle_open_saved(&mut self) {
        self.modal = ModalView::Saved;
        debug!(saved = self.saved.len(), "Opened saved collection");
    }

    fn handle_toggle_save(&mut self, id: u32, effects: &mut Vec<Effect>) {
        let now_saved = self.saved.toggle(id);
        debug!(id, now_saved, count = self.saved.len(), "Toggled saved episode");
        effects.push(Effect::PersistSaved);
    }

    fn handle_select_saved(&mut self, id: u32, effects: &mut Vec<Effect>) {
        let Some(position) = self.catalog.sorted_position(id) else {
            warn!(id, "Saved episode not in catalog; ignoring selection");
            return;
        };
        self.roulette.selected = Some(id);
        self.roulette.phase = Phase::Result;
        self.modal = ModalView::None;
        if self.is_compact {
            self.begin_feed_snap(position, effects);
        } else {
            self.slider.index = position;
            effects.push(Effect::SnapSlider(self.slider_offset_for_index(position)));
        }
        info!(id, position, "Jumped to saved episode");
    }

    fn handle_share_menu_toggled(&mut self, id: u32) {
        self.share.open_menu = if self.share.open_menu == Some(id) {
            None
        } else {
            Some(id)
        };
    }

    fn handle_copy(&mut self, text: String, effects: &mut Vec<Effect>) {
        self.share.copied_until =
            Some(Instant::now() + Duration::from_secs_f32(self.config.copied_flash_secs));
        effects.push(Effect::CopyToClipboard(text));
    }

    fn handle_assistant_opened(&mut self) {
        // Opening on compact always restores the full panel.
        self.assistant = AssistantView::Open;
        debug!(compact = self.is_compact, "Assistant opened");
    }

    fn handle_assistant_reduced(&mut self, reduced: bool) {
        if self.assistant == AssistantView::Closed {
            return;
        }
        self.assistant = if reduced && self.is_compact {
            AssistantView::Reduced
        } else {
            AssistantView::Open
        };
    }

    fn handle_window_resized(&mut self, width: f32, height: f32, effects: &mut Vec<Effect>) {
        let changed = self.recompute_layout(width, height);
        if !changed {
            return;
        }
        debug!(compact = self.is_compact, width, "Layout mode changed");
        if self.assistant == AssistantView::Reduced && !self.is_compact {
            self.assistant = AssistantView::Open;
        }
        // Keep the result anchored on the same episode across the switch.
        if self.roulette.phase == Phase::Result {
            if let Some(position) = self
                .roulette
                .selected
                .and_then(|id| self.catalog.sorted_position(id))
            {
                if self.is_compact {
                    self.begin_feed_snap(position, effects);
                } else {
                    self.feed.pending_snap = None;
                    self.slider.index = position;
                    effects.push(Effect::SnapSlider(self.slider_offset_for_index(position)));
                }
            }
        }
    }

    fn shortcut_message_for_key(&self, key: Key, modifiers: Modifiers) -> Option<Message> {
        if !modifiers.is_empty() {
            return None;
        }
        let browsing_slider = !self.is_compact
            && self.roulette.phase == Phase::Result
            && self.modal == ModalView::None;
        match key.as_ref() {
            Key::Named(key::Named::ArrowRight) if browsing_slider => Some(Message::NextSlide),
            Key::Named(key::Named::ArrowLeft) if browsing_slider => Some(Message::PrevSlide),
            Key::Named(key::Named::Home) if browsing_slider => Some(Message::JumpToStart),
            Key::Named(key::Named::Escape) => {
                if self.share.open_menu.is_some() {
                    Some(Message::ShareMenuDismissed)
                } else if self.modal == ModalView::Saved {
                    Some(Message::CloseSaved)
                } else if self.assistant != AssistantView::Closed {
                    Some(Message::AssistantClosed)
                } else if self.roulette.phase == Phase::Result {
                    Some(Message::CloseResult)
                } else {
                    None
                }
            }
            Key::Named(key::Named::Space)
                if self.modal == ModalView::None && !self.roulette.is_spinning() =>
            {
                Some(Message::RequestRandom)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::tests::build_test_app;
    use crate::ledger;

    fn press_escape(app: &mut App) {
        app.reduce(Message::KeyPressed {
            key: Key::Named(key::Named::Escape),
            modifiers: Modifiers::default(),
        });
    }

    #[test]
    fn toggling_persists_and_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = build_test_app(5);
        app.ledger_path = dir.path().join("saved_episodes.json");

        let effects = app.reduce(Message::ToggleSave(2));
        assert!(matches!(effects[0], Effect::PersistSaved));
        app.persist_saved();
        app.reduce(Message::ToggleSave(5));
        app.persist_saved();
        assert_eq!(ledger::load(&app.ledger_path), vec![2, 5]);

        app.reduce(Message::ToggleSave(2));
        app.persist_saved();
        assert_eq!(ledger::load(&app.ledger_path), vec![5]);
    }

    #[test]
    fn saved_modal_toggles_independent_of_phase() {
        let mut app = build_test_app(3);
        app.reduce(Message::OpenSaved);
        assert_eq!(app.modal, ModalView::Saved);
        app.reduce(Message::CloseSaved);
        assert_eq!(app.modal, ModalView::None);

        app.reduce(Message::SelectSaved(1));
        app.reduce(Message::OpenSaved);
        assert_eq!(app.modal, ModalView::Saved);
        assert_eq!(app.roulette.phase, Phase::Result);
    }

    #[test]
    fn layout_switch_keeps_result_anchored() {
        let mut app = build_test_app(5);
        app.reduce(Message::SelectSaved(3));
        let position = app.catalog.sorted_position(3).unwrap();
        assert_eq!(app.slider.index, position);

        app.reduce(Message::WindowResized {
            width: 500.0,
            height: 900.0,
        });
        assert!(app.is_compact);
        assert_eq!(
            app.feed.pending_snap.as_ref().map(|p| p.position),
            Some(position)
        );

        app.reduce(Message::WindowResized {
            width: 1280.0,
            height: 900.0,
        });
        assert!(!app.is_compact);
        assert_eq!(app.slider.index, position);
    }

    #[test]
    fn escape_unwinds_share_menu_then_modal_then_result() {
        let mut app = build_test_app(3);
        app.reduce(Message::SelectSaved(2));
        app.reduce(Message::ShareMenuToggled(2));
        app.reduce(Message::OpenSaved);

        press_escape(&mut app);
        assert!(app.share.open_menu.is_none());
        press_escape(&mut app);
        assert_eq!(app.modal, ModalView::None);
        assert_eq!(app.roulette.phase, Phase::Result);
        press_escape(&mut app);
        assert_eq!(app.roulette.phase, Phase::Idle);
    }

    #[test]
    fn space_starts_a_spin() {
        let mut app = build_test_app(3);
        app.reduce(Message::KeyPressed {
            key: Key::Named(key::Named::Space),
            modifiers: Modifiers::default(),
        });
        assert_eq!(app.roulette.phase, Phase::Spinning);
    }
}
