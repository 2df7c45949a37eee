/// Step `current` by `direction` slides, wrapping around both ends.
///
/// `slide_count` must be at least 1.
pub fn wrap_index(current: usize, direction: isize, slide_count: usize) -> usize {
    let n = slide_count as isize;
    (current as isize + direction).rem_euclid(n) as usize
}

/// Pixel offset at which slide `index` rests.
pub fn resting_offset_px(index: usize, container_width: f64) -> f64 {
    -(index as f64) * container_width
}

/// Absolute wrapper offset for a live drag, clamped so the first and last
/// slides cannot be dragged past.
pub fn clamp_drag_offset(
    raw_offset: f64,
    current: usize,
    slide_count: usize,
    container_width: f64,
) -> f64 {
    let min = resting_offset_px(slide_count.saturating_sub(1), container_width);
    (raw_offset + resting_offset_px(current, container_width)).clamp(min, 0.0)
}

/// Fraction of a slide width between `offset` and the resting position of
/// `current`. Returns 0 for a degenerate container.
pub fn moved_fraction(offset: f64, current: usize, container_width: f64) -> f64 {
    if container_width <= 0.0 {
        return 0.0;
    }
    (offset - resting_offset_px(current, container_width)).abs() / container_width
}

/// CSS `translateX` for a committed slide position (`-index * 100%`).
pub fn percent_transform(index: usize) -> String {
    format!("translateX(-{}%)", index * 100)
}

/// CSS `translateX` for an absolute pixel offset.
pub fn pixel_transform(offset: f64) -> String {
    format!("translateX({}px)", offset)
}

/// CSS `transition` value used while the wrapper animates.
pub fn transition_value(transition_ms: u32) -> String {
    format!("transform {}ms ease", transition_ms)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_index_wraps_both_directions() {
        assert_eq!(wrap_index(4, 1, 5), 0);
        assert_eq!(wrap_index(0, -1, 5), 4);
        assert_eq!(wrap_index(2, 1, 5), 3);
        assert_eq!(wrap_index(0, 1, 1), 0);
        assert_eq!(wrap_index(0, -1, 1), 0);
    }

    #[test]
    fn drag_offset_cannot_pass_first_slide() {
        assert_eq!(clamp_drag_offset(120.0, 0, 3, 400.0), 0.0);
    }

    #[test]
    fn drag_offset_cannot_pass_last_slide() {
        assert_eq!(clamp_drag_offset(-300.0, 2, 3, 400.0), -800.0);
    }

    #[test]
    fn drag_offset_follows_pointer_inside_bounds() {
        assert_eq!(clamp_drag_offset(-100.0, 1, 3, 400.0), -500.0);
        assert_eq!(clamp_drag_offset(100.0, 1, 3, 400.0), -300.0);
    }

    #[test]
    fn moved_fraction_is_relative_to_resting_position() {
        assert!((moved_fraction(-500.0, 1, 400.0) - 0.25).abs() < 1e-9);
        assert_eq!(moved_fraction(-400.0, 1, 400.0), 0.0);
        assert_eq!(moved_fraction(-10.0, 0, 0.0), 0.0);
    }

    #[test]
    fn transforms_render_css() {
        assert_eq!(percent_transform(3), "translateX(-300%)");
        assert_eq!(percent_transform(0), "translateX(-0%)");
        assert_eq!(pixel_transform(-412.5), "translateX(-412.5px)");
        assert_eq!(transition_value(500), "transform 500ms ease");
    }
}
