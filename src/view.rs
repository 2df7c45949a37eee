//! Output side of a slider: everything the host page observes.

use crate::utils::{percent_transform, pixel_transform};

/// Horizontal position of the slide wrapper.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Offset {
    /// Committed position, `-index * 100%` of the container width.
    Slide(usize),
    /// Live position while dragging, in pixels.
    Pixels(f64),
}

impl Offset {
    pub fn to_css_transform(self) -> String {
        match self {
            Offset::Slide(index) => percent_transform(index),
            Offset::Pixels(px) => pixel_transform(px),
        }
    }
}

/// Render target driven by [`SlideController`](crate::controller::SlideController).
///
/// Implementations only apply what they are told; they hold no navigation
/// state of their own.
pub trait SlideView {
    /// Move the active indicator marker from `previous` to `current`.
    fn set_active_indicator(&mut self, previous: usize, current: usize);

    fn set_offset(&mut self, offset: Offset);

    /// Enable or suspend the wrapper's transform animation.
    fn set_animated(&mut self, animated: bool);

    /// Toggle the "grabbing" cursor during a mouse drag.
    fn set_grabbing(&mut self, grabbing: bool);

    /// Current container width in pixels.
    fn container_width(&self) -> f64;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_render_as_transforms() {
        assert_eq!(Offset::Slide(3).to_css_transform(), "translateX(-300%)");
        assert_eq!(Offset::Pixels(-80.0).to_css_transform(), "translateX(-80px)");
    }
}
