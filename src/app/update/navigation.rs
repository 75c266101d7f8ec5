use super::super::state::App;
use super::Effect;
use crate::selection;
use tracing::debug;

impl App {
    pub(super) fn handle_next_slide(&mut self, effects: &mut Vec<Effect>) {
        if self.slider.index + 1 < self.episode_count() {
            self.go_to_slide(self.slider.index + 1, effects);
        }
    }

    pub(super) fn handle_prev_slide(&mut self, effects: &mut Vec<Effect>) {
        if self.slider.index > 0 {
            self.go_to_slide(self.slider.index - 1, effects);
        }
    }

    pub(super) fn handle_jump_to_start(&mut self, effects: &mut Vec<Effect>) {
        if self.slider.index != 0 {
            self.go_to_slide(0, effects);
        }
    }

    pub(super) fn handle_jump_to_random_slide(&mut self, effects: &mut Vec<Effect>) {
        if let Some(position) = selection::pick_random(
            self.episode_count(),
            Some(self.slider.index),
            &mut rand::thread_rng(),
        ) {
            if position != self.slider.index {
                self.go_to_slide(position, effects);
            }
        }
    }

    /// The tracked index updates synchronously with the request; the snap is
    /// a side effect that may settle later.
    fn go_to_slide(&mut self, index: usize, effects: &mut Vec<Effect>) {
        self.slider.index = index;
        self.share.open_menu = None;
        debug!(index, "Slider moved");
        effects.push(Effect::SnapSlider(self.slider_offset_for_index(index)));
    }

    pub(super) fn handle_drag_started(&mut self) {
        self.slider.drag_origin = Some(self.slider.cursor_x);
    }

    /// A gesture is "next" when the net displacement exceeds the threshold
    /// towards the left, "previous" towards the right, otherwise a no-op.
    pub(super) fn handle_drag_ended(&mut self, effects: &mut Vec<Effect>) {
        let Some(origin) = self.slider.drag_origin.take() else {
            return;
        };
        let distance = origin - self.slider.cursor_x;
        if distance > self.config.drag_threshold {
            self.handle_next_slide(effects);
        } else if distance < -self.config.drag_threshold {
            self.handle_prev_slide(effects);
        }
    }
}
