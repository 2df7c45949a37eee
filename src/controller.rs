//! Slide index state machine.
//!
//! Every input path (indicators, arrows, pointer gestures, the autoplay timer)
//! funnels into [`SlideController::go_to`] and [`SlideController::advance`].
//! The controller is generic over its render target and its timer source so
//! the same logic runs in the browser and under a manual clock.

use crate::config::SliderOptions;
use crate::gesture::{DragGesture, Frame, GestureOutcome, GestureSource, SwipeGesture};
use crate::scheduler::{Scheduler, TimerId};
use crate::utils::wrap_index;
use crate::view::{Offset, SlideView};
use crate::SliderError;
use log::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

impl Direction {
    pub fn step(self) -> isize {
        match self {
            Direction::Prev => -1,
            Direction::Next => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    /// A slide change is animating; navigation is rejected until it ends.
    Transitioning,
}

/// Which gesture capability a pointer stream belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Touch,
    Mouse,
}

pub struct SlideController<V: SlideView, S: Scheduler> {
    slide_count: usize,
    current: usize,
    phase: Phase,
    options: SliderOptions,
    view: V,
    scheduler: S,
    transition_timer: Option<TimerId>,
    autoplay_timer: Option<TimerId>,
    // autoplay requested by options or the host; hover only pauses it
    autoplay_wanted: bool,
    hovered: bool,
    swipe: SwipeGesture,
    drag: DragGesture,
    torn_down: bool,
}

impl<V: SlideView, S: Scheduler> SlideController<V, S> {
    /// Build a controller for `slide_count` slides. Nothing is scheduled
    /// until [`start`](Self::start) is called.
    pub fn new(
        slide_count: usize,
        view: V,
        scheduler: S,
        options: SliderOptions,
    ) -> Result<Self, SliderError> {
        if slide_count == 0 {
            return Err(SliderError::NoSlides);
        }
        let options = options.validate()?;

        Ok(Self {
            slide_count,
            current: 0,
            phase: Phase::Idle,
            autoplay_wanted: options.autoplay,
            swipe: SwipeGesture::new(options.swipe_threshold_px),
            drag: DragGesture::new(options.drag_commit_fraction),
            options,
            view,
            scheduler,
            transition_timer: None,
            autoplay_timer: None,
            hovered: false,
            torn_down: false,
        })
    }

    /// Apply the initial render state and begin autoplay if configured.
    pub fn start(&mut self) {
        self.view.set_animated(true);
        self.view.set_offset(Offset::Slide(self.current));
        if self.autoplay_wanted {
            self.start_autoplay_timer();
        }
        info!(
            "slider started: {} slides, autoplay {}",
            self.slide_count, self.autoplay_wanted
        );
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_transitioning(&self) -> bool {
        self.phase == Phase::Transitioning
    }

    pub fn is_autoplaying(&self) -> bool {
        self.autoplay_timer.is_some()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_active()
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    pub fn options(&self) -> &SliderOptions {
        &self.options
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Navigate to `target`. Returns `false` when the request is ignored:
    /// same slide, out of range, mid-transition, or after teardown.
    pub fn go_to(&mut self, target: usize) -> bool {
        if self.torn_down {
            return false;
        }
        if target >= self.slide_count {
            warn!(
                "ignoring navigation to slide {} (only {} slides)",
                target, self.slide_count
            );
            return false;
        }
        if self.phase == Phase::Transitioning || target == self.current {
            debug!("navigation to {} ignored ({:?})", target, self.phase);
            return false;
        }

        self.phase = Phase::Transitioning;
        self.view.set_active_indicator(self.current, target);
        self.view.set_offset(Offset::Slide(target));
        debug!("slide {} -> {}", self.current, target);
        self.current = target;

        if let Some(stale) = self.transition_timer.take() {
            self.scheduler.cancel(stale);
        }
        self.transition_timer = Some(self.scheduler.schedule(self.options.transition_ms));

        self.reset_autoplay();
        true
    }

    /// Step one slide in `direction`, wrapping at both ends.
    pub fn advance(&mut self, direction: Direction) -> bool {
        if self.torn_down || self.phase == Phase::Transitioning {
            return false;
        }
        let target = wrap_index(self.current, direction.step(), self.slide_count);
        self.go_to(target)
    }

    pub fn next(&mut self) -> bool {
        self.advance(Direction::Next)
    }

    pub fn prev(&mut self) -> bool {
        self.advance(Direction::Prev)
    }

    /// Re-apply the committed offset of the current slide without touching
    /// the transition lock.
    pub fn snap_back(&mut self) {
        self.view.set_offset(Offset::Slide(self.current));
    }

    /// Deliver a fired timer. Ids the controller no longer owns are ignored,
    /// so a stale callback can never advance the slider.
    pub fn on_timer(&mut self, id: TimerId) {
        if self.transition_timer == Some(id) {
            self.transition_timer = None;
            self.phase = Phase::Idle;
        } else if self.autoplay_timer == Some(id) {
            self.autoplay_timer = None;
            self.start_autoplay_timer();
            // a live drag is measured against the current slide; hold it
            if self.drag.is_active() {
                debug!("autoplay tick held during drag");
            } else {
                self.advance(Direction::Next);
            }
        } else {
            debug!("ignoring stale {}", id);
        }
    }

    /// Start (or restart) autoplay on behalf of the host.
    pub fn start_autoplay(&mut self) {
        if self.torn_down {
            return;
        }
        self.autoplay_wanted = true;
        if self.hovered && self.options.pause_on_hover {
            return;
        }
        self.start_autoplay_timer();
    }

    /// Restart the autoplay cadence from a full interval. Does nothing while
    /// autoplay is not running.
    pub fn reset_autoplay(&mut self) {
        if self.autoplay_timer.is_some() {
            self.start_autoplay_timer();
        }
    }

    /// Stop autoplay on behalf of the host. Safe to call repeatedly.
    pub fn stop_autoplay(&mut self) {
        self.autoplay_wanted = false;
        self.cancel_autoplay_timer();
    }

    pub fn pointer_enter(&mut self) {
        self.hovered = true;
        if self.options.pause_on_hover {
            self.cancel_autoplay_timer();
        }
    }

    pub fn pointer_leave(&mut self) {
        self.hovered = false;
        if self.options.pause_on_hover && self.autoplay_wanted && !self.torn_down {
            self.start_autoplay_timer();
        }
    }

    pub fn pointer_down(&mut self, kind: PointerKind, x: f64) {
        if self.torn_down || !self.gesture_enabled(kind) {
            return;
        }
        let frame = self.frame();
        let gesture = self.gesture_mut(kind);
        gesture.begin(x, frame);
        if gesture.follows_pointer() {
            self.view.set_animated(false);
            self.view.set_grabbing(true);
        }
    }

    pub fn pointer_move(&mut self, kind: PointerKind, x: f64) {
        if self.torn_down {
            return;
        }
        let frame = self.frame();
        if let Some(offset) = self.gesture_mut(kind).update(x, frame) {
            self.view.set_offset(offset);
        }
    }

    /// End a pointer gesture. Returns `true` when it navigated.
    pub fn pointer_up(&mut self, kind: PointerKind) -> bool {
        if self.torn_down {
            return false;
        }
        let frame = self.frame();
        let gesture = self.gesture_mut(kind);
        let was_active = gesture.is_active();
        let follows_pointer = gesture.follows_pointer();
        let outcome = gesture.finish(frame);
        if was_active && follows_pointer {
            self.view.set_animated(true);
            self.view.set_grabbing(false);
            self.reset_autoplay();
        }

        match outcome {
            GestureOutcome::Ignore => false,
            GestureOutcome::SnapBack => {
                self.snap_back();
                false
            }
            GestureOutcome::Advance(direction) => {
                debug!("{:?} gesture committed {:?}", kind, direction);
                let moved = self.advance(direction);
                if !moved {
                    self.snap_back();
                }
                moved
            }
        }
    }

    /// Abandon a pointer gesture (e.g. `touchcancel`) and restore the
    /// committed position.
    pub fn pointer_cancel(&mut self, kind: PointerKind) {
        let gesture = self.gesture_mut(kind);
        if !gesture.is_active() {
            return;
        }
        let follows_pointer = gesture.follows_pointer();
        gesture.cancel();
        if follows_pointer {
            self.view.set_animated(true);
            self.view.set_grabbing(false);
            self.snap_back();
        }
    }

    /// Release every timer and abandon any gesture. The controller ignores
    /// all further input afterwards. Idempotent.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.pointer_cancel(PointerKind::Mouse);
        self.pointer_cancel(PointerKind::Touch);
        self.cancel_autoplay_timer();
        self.autoplay_wanted = false;
        if let Some(id) = self.transition_timer.take() {
            self.scheduler.cancel(id);
        }
        self.phase = Phase::Idle;
        self.torn_down = true;
        info!("slider torn down at slide {}", self.current);
    }

    fn start_autoplay_timer(&mut self) {
        self.cancel_autoplay_timer();
        self.autoplay_timer = Some(self.scheduler.schedule(self.options.interval_ms));
    }

    fn cancel_autoplay_timer(&mut self) {
        if let Some(id) = self.autoplay_timer.take() {
            self.scheduler.cancel(id);
        }
    }

    fn gesture_enabled(&self, kind: PointerKind) -> bool {
        match kind {
            PointerKind::Touch => self.options.swipe,
            PointerKind::Mouse => self.options.drag,
        }
    }

    fn gesture_mut(&mut self, kind: PointerKind) -> &mut dyn GestureSource {
        match kind {
            PointerKind::Touch => &mut self.swipe,
            PointerKind::Mouse => &mut self.drag,
        }
    }

    fn frame(&self) -> Frame {
        Frame {
            current: self.current,
            slide_count: self.slide_count,
            container_width: self.view.container_width(),
        }
    }
}
