use super::super::state::{App, ModalView, Phase, REEL_SEGMENT_LEN};
use super::Effect;
use crate::selection;
use std::time::{Duration, Instant};
use tracing::{info, warn};

impl App {
    pub(super) fn handle_request_random(&mut self, effects: &mut Vec<Effect>) {
        if self.roulette.is_spinning() {
            return;
        }
        if self.catalog.is_empty() {
            warn!("Random pick requested with an empty catalog");
            return;
        }

        // Compact layout treats "spin again" while viewing results as a jump
        // within the already-rendered feed, not a new spin.
        if self.roulette.phase == Phase::Result && self.is_compact {
            let position =
                selection::pick_random(self.episode_count(), None, &mut rand::thread_rng())
                    .unwrap_or(0);
            info!(position, "Jumping to random feed position");
            self.begin_feed_snap(position, effects);
            return;
        }

        self.modal = ModalView::None;
        self.share.open_menu = None;
        self.roulette.phase = Phase::Spinning;
        self.roulette.spin_deadline =
            Some(Instant::now() + Duration::from_secs_f32(self.config.spin_duration_secs));
        let mut reel = selection::shuffled_indices(self.episode_count(), &mut rand::thread_rng());
        reel.truncate(REEL_SEGMENT_LEN);
        self.roulette.reel = reel;
        self.roulette.reel_step = 0;
        info!(
            duration_secs = self.config.spin_duration_secs,
            "Spin started"
        );
    }

    pub(super) fn handle_close_result(&mut self) {
        self.roulette.phase = Phase::Idle;
        self.roulette.selected = None;
        self.roulette.spin_deadline = None;
        self.modal = ModalView::None;
        self.share.open_menu = None;
        info!("Returned to idle");
    }

    pub(super) fn handle_tick(&mut self, now: Instant, effects: &mut Vec<Effect>) {
        if self.roulette.is_spinning() {
            self.roulette.reel_step = self.roulette.reel_step.wrapping_add(1);
            if self
                .roulette
                .spin_deadline
                .is_some_and(|deadline| now >= deadline)
            {
                self.finish_spin(effects);
            }
        }
        if self.share.copied_until.is_some_and(|until| now >= until) {
            self.share.copied_until = None;
        }
        if self.feed.hint_deadline.is_some_and(|until| now >= until) {
            self.feed.hint_deadline = None;
        }
        self.retry_pending_snap(effects);
    }

    /// The timer has elapsed: draw the result and show it. Unconditional —
    /// there is no animation-completion handshake.
    fn finish_spin(&mut self, effects: &mut Vec<Effect>) {
        self.roulette.spin_deadline = None;
        let exclude = self
            .roulette
            .previous
            .and_then(|id| self.catalog.sorted_position(id));
        let Some(position) =
            selection::pick_random(self.episode_count(), exclude, &mut rand::thread_rng())
        else {
            self.roulette.phase = Phase::Idle;
            return;
        };
        let Some(id) = self.catalog.at_sorted_position(position).map(|e| e.id) else {
            self.roulette.phase = Phase::Idle;
            return;
        };

        self.roulette.selected = Some(id);
        self.roulette.previous = Some(id);
        self.roulette.phase = Phase::Result;
        info!(id, position, "Spin resolved");

        if self.is_compact {
            self.begin_feed_snap(position, effects);
            if self.config.scroll_hint_secs > 0.0 {
                self.feed.hint_deadline =
                    Some(Instant::now() + Duration::from_secs_f32(self.config.scroll_hint_secs));
            }
        } else {
            self.slider.index = position;
            effects.push(Effect::SnapSlider(self.slider_offset_for_index(position)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::messages::Message;
    use crate::app::state::tests::build_test_app;

    fn force_spin_resolution(app: &mut App) -> Vec<Effect> {
        app.roulette.spin_deadline = Some(Instant::now() - Duration::from_millis(1));
        app.reduce(Message::Tick(Instant::now()))
    }

    #[test]
    fn spin_resolves_to_result_after_deadline() {
        let mut app = build_test_app(3);
        app.reduce(Message::RequestRandom);
        assert_eq!(app.roulette.phase, Phase::Spinning);
        assert!(app.roulette.selected.is_none());

        force_spin_resolution(&mut app);
        assert_eq!(app.roulette.phase, Phase::Result);
        assert!(app.roulette.selected.is_some());
        assert_eq!(app.roulette.previous, app.roulette.selected);
    }

    #[test]
    fn consecutive_spins_never_repeat() {
        let mut app = build_test_app(3);
        for _ in 0..20 {
            let before = app.roulette.selected;
            app.reduce(Message::RequestRandom);
            force_spin_resolution(&mut app);
            let after = app.roulette.selected.unwrap();
            if let Some(before) = before {
                assert_ne!(after, before);
            }
        }
    }

    #[test]
    fn single_episode_spin_terminates() {
        let mut app = build_test_app(1);
        app.reduce(Message::RequestRandom);
        force_spin_resolution(&mut app);
        assert_eq!(app.roulette.selected, Some(1));

        app.reduce(Message::RequestRandom);
        force_spin_resolution(&mut app);
        assert_eq!(app.roulette.selected, Some(1));
    }

    #[test]
    fn empty_catalog_ignores_requests() {
        let mut app = build_test_app(0);
        app.reduce(Message::RequestRandom);
        assert_eq!(app.roulette.phase, Phase::Idle);
    }

    #[test]
    fn compact_result_respin_jumps_within_feed() {
        let mut app = build_test_app(4);
        app.recompute_layout(500.0, 900.0);
        app.reduce(Message::RequestRandom);
        force_spin_resolution(&mut app);
        assert_eq!(app.roulette.phase, Phase::Result);
        let selected = app.roulette.selected;

        let effects = app.reduce(Message::RequestRandom);
        // Still a result, same selection; only the feed position moved.
        assert_eq!(app.roulette.phase, Phase::Result);
        assert_eq!(app.roulette.selected, selected);
        assert!(app.feed.pending_snap.is_some());
        assert!(
            effects
                .iter()
                .any(|effect| matches!(effect, Effect::SnapFeed(_)))
        );
    }

    #[test]
    fn close_clears_selection_and_modal() {
        let mut app = build_test_app(3);
        app.reduce(Message::RequestRandom);
        force_spin_resolution(&mut app);
        app.reduce(Message::OpenSaved);
        app.reduce(Message::CloseResult);
        assert_eq!(app.roulette.phase, Phase::Idle);
        assert!(app.roulette.selected.is_none());
        assert_eq!(app.modal, ModalView::None);
    }

    #[test]
    fn select_saved_enters_result_from_any_phase() {
        let mut app = build_test_app(3);
        for _ in 0..3 {
            app.reduce(Message::SelectSaved(2));
            assert_eq!(app.roulette.phase, Phase::Result);
            assert_eq!(app.roulette.selected, Some(2));
            app.reduce(Message::RequestRandom);
        }
        // Also straight out of a spin.
        app.reduce(Message::SelectSaved(3));
        assert_eq!(app.roulette.phase, Phase::Result);
        assert_eq!(app.roulette.selected, Some(3));
    }

    #[test]
    fn select_saved_ignores_unknown_ids() {
        let mut app = build_test_app(3);
        app.reduce(Message::SelectSaved(99));
        assert_eq!(app.roulette.phase, Phase::Idle);
        assert!(app.roulette.selected.is_none());
    }
}
