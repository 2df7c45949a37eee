//! Pointer gesture interpretation.
//!
//! Each capability is an independent [`GestureSource`]: touch swipes and
//! mouse drags share the begin/update/finish shape but make their decision
//! differently. Neither knows about timers, indicators or the DOM.

use crate::controller::Direction;
use crate::utils::{clamp_drag_offset, moved_fraction, resting_offset_px};
use crate::view::Offset;

/// Snapshot of the slider geometry a gesture decides against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub current: usize,
    pub slide_count: usize,
    pub container_width: f64,
}

/// What the controller should do once a gesture ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureOutcome {
    /// No navigation, nothing to restore.
    Ignore,
    Advance(Direction),
    /// Return the wrapper to the current slide's resting position.
    SnapBack,
}

pub trait GestureSource {
    fn begin(&mut self, x: f64, frame: Frame);

    /// Track a pointer move. Returns a live offset when the gesture renders
    /// the wrapper under the pointer.
    fn update(&mut self, x: f64, frame: Frame) -> Option<Offset>;

    /// Single-shot decision at gesture end. Ending an inactive gesture is
    /// [`GestureOutcome::Ignore`].
    fn finish(&mut self, frame: Frame) -> GestureOutcome;

    /// Abandon the gesture without a decision.
    fn cancel(&mut self);

    fn is_active(&self) -> bool;

    /// Whether the wrapper follows the pointer 1:1 while active, which
    /// means the transform animation must be suspended.
    fn follows_pointer(&self) -> bool;
}

/// Touch swipe: compares the start and last tracked positions on release.
#[derive(Debug, Clone)]
pub struct SwipeGesture {
    threshold_px: f64,
    active: bool,
    start_x: f64,
    end_x: f64,
}

impl SwipeGesture {
    pub fn new(threshold_px: f64) -> Self {
        Self {
            threshold_px,
            active: false,
            start_x: 0.0,
            end_x: 0.0,
        }
    }
}

impl GestureSource for SwipeGesture {
    fn begin(&mut self, x: f64, _frame: Frame) {
        self.active = true;
        self.start_x = x;
        self.end_x = x;
    }

    fn update(&mut self, x: f64, _frame: Frame) -> Option<Offset> {
        if self.active {
            self.end_x = x;
        }
        None
    }

    fn finish(&mut self, _frame: Frame) -> GestureOutcome {
        if !self.active {
            return GestureOutcome::Ignore;
        }
        self.active = false;

        let delta = self.start_x - self.end_x;
        if delta.abs() > self.threshold_px {
            // finger moved left: reveal the next slide
            if delta > 0.0 {
                GestureOutcome::Advance(Direction::Next)
            } else {
                GestureOutcome::Advance(Direction::Prev)
            }
        } else {
            GestureOutcome::Ignore
        }
    }

    fn cancel(&mut self) {
        self.active = false;
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn follows_pointer(&self) -> bool {
        false
    }
}

/// Mouse drag: the wrapper tracks the pointer in pixels, and release commits
/// once the wrapper has moved far enough from its resting position.
#[derive(Debug, Clone)]
pub struct DragGesture {
    commit_fraction: f64,
    active: bool,
    start_x: f64,
    offset: f64,
}

impl DragGesture {
    pub fn new(commit_fraction: f64) -> Self {
        Self {
            commit_fraction,
            active: false,
            start_x: 0.0,
            offset: 0.0,
        }
    }

    /// Last rendered wrapper offset in pixels.
    pub fn offset(&self) -> f64 {
        self.offset
    }
}

impl GestureSource for DragGesture {
    fn begin(&mut self, x: f64, frame: Frame) {
        self.active = true;
        self.start_x = x;
        self.offset = resting_offset_px(frame.current, frame.container_width);
    }

    fn update(&mut self, x: f64, frame: Frame) -> Option<Offset> {
        if !self.active {
            return None;
        }
        self.offset = clamp_drag_offset(
            x - self.start_x,
            frame.current,
            frame.slide_count,
            frame.container_width,
        );
        Some(Offset::Pixels(self.offset))
    }

    fn finish(&mut self, frame: Frame) -> GestureOutcome {
        if !self.active {
            return GestureOutcome::Ignore;
        }
        self.active = false;

        if frame.container_width <= 0.0 {
            return GestureOutcome::SnapBack;
        }
        let moved = moved_fraction(self.offset, frame.current, frame.container_width);
        if moved > self.commit_fraction {
            if self.offset > resting_offset_px(frame.current, frame.container_width) {
                GestureOutcome::Advance(Direction::Prev)
            } else {
                GestureOutcome::Advance(Direction::Next)
            }
        } else {
            GestureOutcome::SnapBack
        }
    }

    fn cancel(&mut self) {
        self.active = false;
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn follows_pointer(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(current: usize) -> Frame {
        Frame {
            current,
            slide_count: 5,
            container_width: 1000.0,
        }
    }

    fn swipe(from: f64, to: f64) -> GestureOutcome {
        let mut gesture = SwipeGesture::new(50.0);
        gesture.begin(from, frame(2));
        gesture.update(to, frame(2));
        gesture.finish(frame(2))
    }

    #[test]
    fn swipe_below_threshold_is_ignored() {
        assert_eq!(swipe(300.0, 251.0), GestureOutcome::Ignore);
        assert_eq!(swipe(300.0, 349.0), GestureOutcome::Ignore);
    }

    #[test]
    fn swipe_exactly_at_threshold_is_ignored() {
        assert_eq!(swipe(300.0, 250.0), GestureOutcome::Ignore);
    }

    #[test]
    fn swipe_past_threshold_picks_direction() {
        assert_eq!(swipe(300.0, 249.0), GestureOutcome::Advance(Direction::Next));
        assert_eq!(swipe(300.0, 351.0), GestureOutcome::Advance(Direction::Prev));
    }

    #[test]
    fn tap_without_move_never_navigates() {
        let mut gesture = SwipeGesture::new(50.0);
        gesture.begin(100.0, frame(0));
        gesture.update(400.0, frame(0));
        gesture.finish(frame(0));

        gesture.begin(100.0, frame(0));
        assert_eq!(gesture.finish(frame(0)), GestureOutcome::Ignore);
    }

    #[test]
    fn intermediate_moves_do_not_decide() {
        let mut gesture = SwipeGesture::new(50.0);
        gesture.begin(500.0, frame(1));
        assert_eq!(gesture.update(100.0, frame(1)), None);
        gesture.update(480.0, frame(1));
        assert_eq!(gesture.finish(frame(1)), GestureOutcome::Ignore);
    }

    fn drag(current: usize, dx: f64) -> GestureOutcome {
        let mut gesture = DragGesture::new(0.2);
        gesture.begin(500.0, frame(current));
        gesture.update(500.0 + dx, frame(current));
        gesture.finish(frame(current))
    }

    #[test]
    fn short_drag_snaps_back() {
        assert_eq!(drag(2, -190.0), GestureOutcome::SnapBack);
        assert_eq!(drag(2, 190.0), GestureOutcome::SnapBack);
    }

    #[test]
    fn long_drag_commits_toward_pointer() {
        assert_eq!(drag(2, -210.0), GestureOutcome::Advance(Direction::Next));
        assert_eq!(drag(2, 210.0), GestureOutcome::Advance(Direction::Prev));
    }

    #[test]
    fn drag_offset_tracks_last_move() {
        let mut gesture = DragGesture::new(0.2);
        gesture.begin(500.0, frame(1));
        assert_eq!(gesture.offset(), -1000.0);
        gesture.update(380.0, frame(1));
        assert_eq!(gesture.offset(), -1120.0);
        gesture.finish(frame(1));
        assert_eq!(gesture.offset(), -1120.0);
    }

    #[test]
    fn drag_past_first_slide_is_clamped() {
        let mut gesture = DragGesture::new(0.2);
        gesture.begin(0.0, frame(0));
        assert_eq!(gesture.update(600.0, frame(0)), Some(Offset::Pixels(0.0)));
        assert_eq!(gesture.finish(frame(0)), GestureOutcome::SnapBack);
    }

    #[test]
    fn drag_past_last_slide_is_clamped() {
        let mut gesture = DragGesture::new(0.2);
        gesture.begin(900.0, frame(4));
        assert_eq!(gesture.update(0.0, frame(4)), Some(Offset::Pixels(-4000.0)));
        assert_eq!(gesture.finish(frame(4)), GestureOutcome::SnapBack);
    }

    #[test]
    fn click_without_move_snaps_back() {
        let mut gesture = DragGesture::new(0.2);
        gesture.begin(10.0, frame(1));
        gesture.update(-900.0, frame(1));
        gesture.finish(frame(1));

        gesture.begin(10.0, frame(1));
        assert_eq!(gesture.finish(frame(1)), GestureOutcome::SnapBack);
    }

    #[test]
    fn release_without_drag_is_ignored() {
        let mut gesture = DragGesture::new(0.2);
        assert_eq!(gesture.update(20.0, frame(0)), None);
        assert_eq!(gesture.finish(frame(0)), GestureOutcome::Ignore);
    }

    #[test]
    fn zero_width_container_snaps_back() {
        let flat = Frame {
            current: 1,
            slide_count: 3,
            container_width: 0.0,
        };
        let mut gesture = DragGesture::new(0.2);
        gesture.begin(0.0, flat);
        gesture.update(-300.0, flat);
        assert_eq!(gesture.finish(flat), GestureOutcome::SnapBack);
    }
}
