mod browse;
mod constants;
mod roulette;
mod saved;
mod ui;

use crate::catalog::{Catalog, Episode};
use crate::config::AppConfig;
use crate::ledger;
use iced::Task;
use iced::widget::scrollable::RelativeOffset;
use std::path::PathBuf;

use super::messages::Message;

pub(in crate::app) use browse::{FeedState, PendingSnap, SliderState};
pub(crate) use constants::*;
pub use roulette::EpisodeId;
pub(in crate::app) use roulette::{Phase, RouletteState};
pub(in crate::app) use saved::SavedState;
pub(in crate::app) use ui::{AssistantView, ModalView, ShareUi};

/// Core application state composed of sub-models. The catalog is the sole
/// source of episode content and is never mutated after startup.
pub struct App {
    pub(super) catalog: Catalog,
    pub(super) config: AppConfig,
    pub(super) roulette: RouletteState,
    pub(super) saved: SavedState,
    pub(super) slider: SliderState,
    pub(super) feed: FeedState,
    pub(super) modal: ModalView,
    pub(super) assistant: AssistantView,
    pub(super) share: ShareUi,
    pub(super) window_width: f32,
    pub(super) window_height: f32,
    pub(super) is_compact: bool,
    pub(super) ledger_path: PathBuf,
}

impl App {
    pub(super) fn bootstrap(
        catalog: Catalog,
        mut config: AppConfig,
        saved_ids: Vec<EpisodeId>,
    ) -> (App, Task<Message>) {
        clamp_config(&mut config);
        let ledger_path = PathBuf::from(&config.saved_episodes_path);
        let window_width = config.window_width;
        let window_height = config.window_height;
        let is_compact = window_width < config.compact_threshold;

        let app = App {
            catalog,
            roulette: RouletteState::new(),
            saved: SavedState::new(saved_ids),
            slider: SliderState::new(),
            feed: FeedState::new(),
            modal: ModalView::None,
            assistant: AssistantView::Closed,
            share: ShareUi::new(),
            window_width,
            window_height,
            is_compact,
            ledger_path,
            config,
        };

        tracing::info!(
            episodes = app.catalog.len(),
            saved = app.saved.len(),
            compact = app.is_compact,
            "Initialized app state"
        );

        (app, Task::none())
    }

    /// Re-derive the layout flag from the observed surface width. Phase,
    /// selection and the ledger carry over untouched.
    pub(super) fn recompute_layout(&mut self, width: f32, height: f32) -> bool {
        if width.is_finite() && width > 0.0 {
            self.window_width = width;
        }
        if height.is_finite() && height > 0.0 {
            self.window_height = height;
        }
        let was_compact = self.is_compact;
        self.is_compact = self.window_width < self.config.compact_threshold;
        was_compact != self.is_compact
    }

    pub(super) fn episode_count(&self) -> usize {
        self.catalog.len()
    }

    /// Relative offset of a sorted position in the vertical feed. Sections
    /// are exactly one viewport tall, so the scrollable range is `n - 1`
    /// sections and the mapping is linear.
    pub(super) fn feed_offset_for_position(&self, position: usize) -> RelativeOffset {
        RelativeOffset {
            x: 0.0,
            y: Self::relative_step(position, self.episode_count()),
        }
    }

    pub(super) fn slider_offset_for_index(&self, index: usize) -> RelativeOffset {
        RelativeOffset {
            x: Self::relative_step(index, self.episode_count()),
            y: 0.0,
        }
    }

    fn relative_step(position: usize, count: usize) -> f32 {
        if count < 2 {
            return 0.0;
        }
        let clamped = position.min(count - 1) as f32;
        clamped / (count - 1) as f32
    }

    /// Saved episodes resolved against the catalog, most recently saved
    /// first. Ids that no longer resolve are skipped.
    pub(super) fn saved_episodes_by_recency(&self) -> Vec<&Episode> {
        self.saved
            .by_recency()
            .filter_map(|id| self.catalog.by_id(id))
            .collect()
    }

    pub(super) fn persist_saved(&self) {
        ledger::store(&self.ledger_path, self.saved.ids());
    }

    /// Whether the coarse tick subscription must be running.
    pub(super) fn tick_needed(&self) -> bool {
        self.roulette.is_spinning()
            || self.share.copied_until.is_some()
            || self.feed.hint_deadline.is_some()
            || self.feed.pending_snap.is_some()
    }
}

fn clamp_config(config: &mut AppConfig) {
    config.window_width = config.window_width.clamp(320.0, 7680.0);
    config.window_height = config.window_height.clamp(240.0, 4320.0);
    config.compact_threshold = config
        .compact_threshold
        .clamp(MIN_COMPACT_THRESHOLD, MAX_COMPACT_THRESHOLD);
    config.spin_duration_secs = config
        .spin_duration_secs
        .clamp(0.0, MAX_SPIN_DURATION_SECS);
    config.drag_threshold = config.drag_threshold.clamp(1.0, 500.0);
    config.feed_window = config.feed_window.clamp(1, MAX_FEED_WINDOW);
    config.scroll_hint_secs = config.scroll_hint_secs.clamp(0.0, 60.0);
    config.copied_flash_secs = config.copied_flash_secs.clamp(0.5, 10.0);
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::catalog::tests::episode;

    /// Catalog of `count` episodes, ids `1..=count`, published a month
    /// apart so the recency order is `count, count-1, .., 1`.
    pub(crate) fn build_catalog(count: usize) -> Catalog {
        let episodes = (1..=count as u32)
            .map(|id| {
                let month = (id as usize - 1) % 12 + 1;
                let year = 2023 + (id as usize - 1) / 12;
                episode(id, &format!("{year}-{month:02}-01"))
            })
            .collect();
        Catalog::new(episodes).unwrap()
    }

    pub(crate) fn build_test_app(count: usize) -> App {
        let mut config = AppConfig::default();
        config.saved_episodes_path = format!(
            "/tmp/podcast-roulette-test-{}-{count}/saved_episodes.json",
            std::process::id()
        );
        let (app, _task) = App::bootstrap(build_catalog(count), config, Vec::new());
        app
    }

    #[test]
    fn layout_flag_follows_threshold() {
        let mut app = build_test_app(3);
        assert!(!app.is_compact);
        let changed = app.recompute_layout(500.0, 900.0);
        assert!(changed);
        assert!(app.is_compact);
        assert!(!app.recompute_layout(500.0, 800.0));
    }

    #[test]
    fn offsets_are_linear_over_sorted_positions() {
        let app = build_test_app(5);
        assert_eq!(app.feed_offset_for_position(0).y, 0.0);
        assert_eq!(app.feed_offset_for_position(4).y, 1.0);
        assert_eq!(app.slider_offset_for_index(2).x, 0.5);
    }

    #[test]
    fn single_episode_offsets_are_zero() {
        let app = build_test_app(1);
        assert_eq!(app.feed_offset_for_position(0).y, 0.0);
        assert_eq!(app.slider_offset_for_index(0).x, 0.0);
    }
}
