//! End-to-end navigation scenarios against a page-like recording view.

use slider_deck::{
    Direction, ManualScheduler, Offset, PointerKind, Scheduler, SlideController, SlideView,
    SliderError, SliderOptions,
};

/// Mirrors what the browser would show: indicator classes, the wrapper
/// transform, the transition and the cursor.
struct PageView {
    indicators: Vec<bool>,
    transform: String,
    transition: bool,
    grabbing: bool,
    width: f64,
}

impl PageView {
    fn new(slides: usize, width: f64) -> Self {
        let mut indicators = vec![false; slides];
        indicators[0] = true;
        Self {
            indicators,
            transform: String::new(),
            transition: true,
            grabbing: false,
            width,
        }
    }

    fn active(&self) -> Vec<usize> {
        self.indicators
            .iter()
            .enumerate()
            .filter(|(_, on)| **on)
            .map(|(i, _)| i)
            .collect()
    }
}

impl SlideView for PageView {
    fn set_active_indicator(&mut self, previous: usize, current: usize) {
        self.indicators[previous] = false;
        self.indicators[current] = true;
    }

    fn set_offset(&mut self, offset: Offset) {
        self.transform = offset.to_css_transform();
    }

    fn set_animated(&mut self, animated: bool) {
        self.transition = animated;
    }

    fn set_grabbing(&mut self, grabbing: bool) {
        self.grabbing = grabbing;
    }

    fn container_width(&self) -> f64 {
        self.width
    }
}

type Controller = SlideController<PageView, ManualScheduler>;

fn mount(slides: usize, options: SliderOptions) -> Controller {
    let mut controller = SlideController::new(
        slides,
        PageView::new(slides, 800.0),
        ManualScheduler::new(),
        options,
    )
    .expect("slider mounts");
    controller.start();
    controller
}

/// Deliver every timer due within the next `ms` milliseconds.
fn wait(controller: &mut Controller, ms: u64) {
    let deadline = controller.scheduler().now_ms() + ms;
    while let Some(id) = controller.scheduler_mut().pop_due(deadline) {
        controller.on_timer(id);
    }
}

#[test]
fn go_to_scenario_on_five_slides() {
    let mut slider = mount(5, SliderOptions::default());
    assert_eq!(slider.view().transform, "translateX(-0%)");

    assert!(slider.go_to(3));
    assert_eq!(slider.view().active(), vec![3]);
    assert_eq!(slider.view().transform, "translateX(-300%)");
    assert_eq!(slider.current_index(), 3);

    assert!(!slider.go_to(1));
    assert_eq!(slider.current_index(), 3);
    assert_eq!(slider.view().active(), vec![3]);
}

#[test]
fn next_cycles_through_every_slide_count() {
    for n in 1..=8 {
        let mut slider = mount(n, SliderOptions::default());
        let mut visited = Vec::new();
        for _ in 0..n {
            slider.advance(Direction::Next);
            visited.push(slider.current_index());
            wait(&mut slider, 500);
        }
        let expected: Vec<usize> = (1..=n).map(|i| i % n).collect();
        assert_eq!(visited, expected, "slide count {n}");
        assert_eq!(slider.view().active(), vec![0], "slide count {n}");
    }
}

#[test]
fn prev_from_first_slide_wraps() {
    for n in 2..=6 {
        let mut slider = mount(n, SliderOptions::default());
        slider.advance(Direction::Prev);
        assert_eq!(slider.current_index(), n - 1);
    }
}

#[test]
fn rapid_clicks_collapse_into_one_navigation() {
    let mut slider = mount(4, SliderOptions::default());
    let accepted = (0..5).filter(|_| slider.next()).count();
    assert_eq!(accepted, 1);
    assert_eq!(slider.current_index(), 1);
}

#[test]
fn autoplay_cadence_survives_interaction() {
    let options = SliderOptions {
        autoplay: true,
        interval_ms: 2000,
        pause_on_hover: true,
        ..SliderOptions::default()
    };
    let mut slider = mount(3, options);

    wait(&mut slider, 2000);
    assert_eq!(slider.current_index(), 1);

    // a swipe resets the cadence
    wait(&mut slider, 1500);
    slider.pointer_down(PointerKind::Touch, 400.0);
    slider.pointer_move(PointerKind::Touch, 300.0);
    assert!(slider.pointer_up(PointerKind::Touch));
    assert_eq!(slider.current_index(), 2);
    wait(&mut slider, 1999);
    assert_eq!(slider.current_index(), 2);
    wait(&mut slider, 1);
    assert_eq!(slider.current_index(), 0);

    // hovering holds the slide
    slider.pointer_enter();
    wait(&mut slider, 10_000);
    assert_eq!(slider.current_index(), 0);
    slider.pointer_leave();
    wait(&mut slider, 2000);
    assert_eq!(slider.current_index(), 1);
}

#[test]
fn drag_renders_live_offset_then_commits() {
    let mut slider = mount(3, SliderOptions::default());

    slider.pointer_down(PointerKind::Mouse, 700.0);
    assert!(slider.view().grabbing);
    assert!(!slider.view().transition);

    slider.pointer_move(PointerKind::Mouse, 600.0);
    assert_eq!(slider.view().transform, "translateX(-100px)");
    slider.pointer_move(PointerKind::Mouse, 500.0);
    assert_eq!(slider.view().transform, "translateX(-200px)");

    assert!(slider.pointer_up(PointerKind::Mouse));
    assert!(!slider.view().grabbing);
    assert!(slider.view().transition);
    assert_eq!(slider.current_index(), 1);
    assert_eq!(slider.view().transform, "translateX(-100%)");
}

#[test]
fn drag_below_commit_fraction_returns_to_slide() {
    let mut slider = mount(3, SliderOptions::default());
    slider.go_to(1);
    wait(&mut slider, 500);

    // 0.19 of an 800px container
    slider.pointer_down(PointerKind::Mouse, 400.0);
    slider.pointer_move(PointerKind::Mouse, 400.0 + 152.0);
    assert_eq!(slider.view().transform, "translateX(-648px)");
    assert!(!slider.pointer_up(PointerKind::Mouse));
    assert_eq!(slider.current_index(), 1);
    assert_eq!(slider.view().transform, "translateX(-100%)");

    // 0.21 commits toward the previous slide
    slider.pointer_down(PointerKind::Mouse, 400.0);
    slider.pointer_move(PointerKind::Mouse, 400.0 + 168.0);
    assert!(slider.pointer_up(PointerKind::Mouse));
    assert_eq!(slider.current_index(), 0);
}

#[test]
fn released_slider_holds_no_timers() {
    let options = SliderOptions {
        autoplay: true,
        ..SliderOptions::default()
    };
    let mut slider = mount(3, options);
    slider.next();
    slider.teardown();
    assert_eq!(slider.scheduler().pending_count(), 0);
    wait(&mut slider, 60_000);
    assert_eq!(slider.current_index(), 1);
}

#[test]
fn stale_timer_ids_are_ignored() {
    let mut slider = mount(3, SliderOptions::default());
    let foreign = slider.scheduler_mut().schedule(10);
    wait(&mut slider, 10);
    slider.on_timer(foreign);
    assert_eq!(slider.current_index(), 0);
}

#[test]
fn invalid_construction_is_reported() {
    let empty = SlideController::new(
        0,
        PageView::new(1, 800.0),
        ManualScheduler::new(),
        SliderOptions::default(),
    );
    assert!(matches!(empty, Err(SliderError::NoSlides)));

    let bad = SlideController::new(
        2,
        PageView::new(2, 800.0),
        ManualScheduler::new(),
        SliderOptions {
            interval_ms: 0,
            ..SliderOptions::default()
        },
    );
    assert!(matches!(bad, Err(SliderError::InvalidOptions(_))));
}
