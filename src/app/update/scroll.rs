use super::super::state::{App, PendingSnap, SNAP_RETRIES};
use super::Effect;
use iced::widget::scrollable::RelativeOffset;
use tracing::debug;

impl App {
    /// Position the feed on a sorted position with an immediate snap. The
    /// target section may not be laid out yet on the first frame, so the
    /// snap stays pending and is re-issued by the tick until it lands or the
    /// retries run out.
    pub(super) fn begin_feed_snap(&mut self, position: usize, effects: &mut Vec<Effect>) {
        let offset = self.feed_offset_for_position(position);
        self.feed.pending_snap = Some(PendingSnap {
            position,
            retries_left: SNAP_RETRIES,
        });
        // Anchor the virtualization window at the target right away so the
        // section is a full card by the time the snap settles.
        self.feed.current_index = position;
        self.feed.scroll_offset = offset;
        effects.push(Effect::SnapFeed(offset));
    }

    pub(super) fn retry_pending_snap(&mut self, effects: &mut Vec<Effect>) {
        let Some(pending) = self.feed.pending_snap.as_mut() else {
            return;
        };
        let position = pending.position;
        if pending.retries_left == 0 {
            self.feed.pending_snap = None;
            debug!(position, "Feed snap retries exhausted");
            return;
        }
        pending.retries_left -= 1;
        let offset = self.feed_offset_for_position(position);
        effects.push(Effect::SnapFeed(offset));
    }

    pub(super) fn handle_feed_scrolled(
        &mut self,
        offset: RelativeOffset,
        viewport_height: f32,
        content_height: f32,
    ) {
        let offset = Self::sanitize_offset(offset);
        self.feed.scroll_offset = offset;
        self.feed.viewport_height = sanitize_dimension(viewport_height);
        self.feed.content_height = sanitize_dimension(content_height);

        let count = self.episode_count();
        self.feed.current_index = if count > 1 {
            (offset.y * (count - 1) as f32).round() as usize
        } else {
            0
        }
        .min(count.saturating_sub(1));

        let snap_arrived = self
            .feed
            .pending_snap
            .as_ref()
            .is_some_and(|pending| pending.position == self.feed.current_index);
        if snap_arrived {
            self.feed.pending_snap = None;
        }

        let scrolled_px = self.feed.scroll_offset.y
            * (self.feed.content_height - self.feed.viewport_height).max(0.0);
        self.feed.show_scroll_top = scrolled_px > self.feed.viewport_height / 2.0;
        if scrolled_px > 50.0 {
            self.feed.hint_deadline = None;
        }
    }

    pub(super) fn handle_scroll_to_top(&mut self, effects: &mut Vec<Effect>) {
        self.begin_feed_snap(0, effects);
    }

    pub(super) fn sanitize_offset(offset: RelativeOffset) -> RelativeOffset {
        let clamp = |v: f32| {
            if v.is_finite() {
                v.clamp(0.0, 1.0)
            } else {
                0.0
            }
        };
        RelativeOffset {
            x: clamp(offset.x),
            y: clamp(offset.y),
        }
    }
}

fn sanitize_dimension(value: f32) -> f32 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::messages::Message;
    use crate::app::state::tests::build_test_app;
    use std::time::Instant;

    fn scrolled(offset_y: f32) -> Message {
        Message::FeedScrolled {
            offset: RelativeOffset { x: 0.0, y: offset_y },
            viewport_height: 800.0,
            content_height: 4000.0,
        }
    }

    #[test]
    fn scroll_position_maps_to_section_index() {
        let mut app = build_test_app(5);
        app.reduce(scrolled(0.0));
        assert_eq!(app.feed.current_index, 0);
        app.reduce(scrolled(0.5));
        assert_eq!(app.feed.current_index, 2);
        app.reduce(scrolled(1.0));
        assert_eq!(app.feed.current_index, 4);
    }

    #[test]
    fn pending_snap_clears_when_target_reached() {
        let mut app = build_test_app(5);
        let mut effects = Vec::new();
        app.begin_feed_snap(3, &mut effects);
        assert!(matches!(effects[0], Effect::SnapFeed(_)));

        app.reduce(scrolled(0.75));
        assert!(app.feed.pending_snap.is_none());
    }

    #[test]
    fn pending_snap_retries_then_gives_up() {
        let mut app = build_test_app(5);
        let mut effects = Vec::new();
        app.begin_feed_snap(3, &mut effects);

        let mut retries = 0;
        for _ in 0..10 {
            let effects = app.reduce(Message::Tick(Instant::now()));
            retries += effects
                .iter()
                .filter(|effect| matches!(effect, Effect::SnapFeed(_)))
                .count();
        }
        assert_eq!(retries, SNAP_RETRIES as usize);
        assert!(app.feed.pending_snap.is_none());
    }

    #[test]
    fn scroll_top_affordance_appears_past_half_viewport() {
        let mut app = build_test_app(5);
        app.reduce(scrolled(0.05));
        assert!(!app.feed.show_scroll_top);
        app.reduce(scrolled(0.5));
        assert!(app.feed.show_scroll_top);
    }

    #[test]
    fn malformed_offsets_are_sanitized() {
        let mut app = build_test_app(5);
        app.reduce(Message::FeedScrolled {
            offset: RelativeOffset {
                x: f32::NAN,
                y: 7.0,
            },
            viewport_height: f32::INFINITY,
            content_height: -3.0,
        });
        assert_eq!(app.feed.scroll_offset.y, 1.0);
        assert_eq!(app.feed.viewport_height, 0.0);
        assert_eq!(app.feed.content_height, 0.0);
    }
}
