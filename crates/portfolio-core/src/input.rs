use crate::constants::{MOUSE_SMOOTHING, SCROLL_SMOOTHING};
use glam::Vec2;

/// First-order low-pass filter stepped once per frame.
#[derive(Clone, Copy, Debug)]
pub struct Smoothed<T> {
    pub value: T,
    pub factor: f32,
}

impl<T> Smoothed<T>
where
    T: Copy + std::ops::Add<Output = T> + std::ops::Sub<Output = T> + std::ops::Mul<f32, Output = T>,
{
    pub fn new(value: T, factor: f32) -> Self {
        Self {
            value,
            factor: factor.clamp(0.0, 1.0),
        }
    }

    /// Move a fixed fraction of the remaining distance toward `target`.
    #[inline]
    pub fn step(&mut self, target: T) -> T {
        self.value = self.value + (target - self.value) * self.factor;
        self.value
    }

    #[inline]
    pub fn snap(&mut self, value: T) {
        self.value = value;
    }
}

/// Raw pointer and scroll signals as last reported by the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameInput {
    /// Pointer position normalized to the viewport, (0, 0) top-left.
    pub mouse_uv: Vec2,
    /// Whether a pointer position has been reported at all.
    pub mouse_present: bool,
    /// Page scroll progress in \[0, 1\].
    pub scroll: f32,
}

impl Default for FrameInput {
    fn default() -> Self {
        Self {
            mouse_uv: Vec2::splat(0.5),
            mouse_present: false,
            scroll: 0.0,
        }
    }
}

/// Filtered view of [`FrameInput`] consumed by the scene.
#[derive(Clone, Copy, Debug)]
pub struct SmoothedInput {
    pub mouse: Smoothed<Vec2>,
    pub scroll: Smoothed<f32>,
    pub mouse_present: bool,
}

impl Default for SmoothedInput {
    fn default() -> Self {
        Self {
            mouse: Smoothed::new(Vec2::splat(0.5), MOUSE_SMOOTHING),
            scroll: Smoothed::new(0.0, SCROLL_SMOOTHING),
            mouse_present: false,
        }
    }
}

impl SmoothedInput {
    pub fn step(&mut self, raw: &FrameInput) {
        self.mouse.step(clamp_uv(raw.mouse_uv));
        self.scroll.step(raw.scroll.clamp(0.0, 1.0));
        self.mouse_present = raw.mouse_present;
    }

    /// Jump straight to `raw`, bypassing the filter.
    pub fn snap_to(&mut self, raw: &FrameInput) {
        self.mouse.snap(clamp_uv(raw.mouse_uv));
        self.scroll.snap(raw.scroll.clamp(0.0, 1.0));
        self.mouse_present = raw.mouse_present;
    }

    #[inline]
    pub fn mouse_uv(&self) -> Vec2 {
        self.mouse.value
    }

    /// Mouse offset from the viewport centre in \[-1, 1\], +y up.
    #[inline]
    pub fn mouse_ndc(&self) -> Vec2 {
        let uv = self.mouse.value;
        Vec2::new(uv.x * 2.0 - 1.0, 1.0 - uv.y * 2.0)
    }

    #[inline]
    pub fn scroll(&self) -> f32 {
        self.scroll.value
    }
}

#[inline]
fn clamp_uv(uv: Vec2) -> Vec2 {
    uv.clamp(Vec2::ZERO, Vec2::ONE)
}

/// Normalized scroll position; zero when the page cannot scroll.
#[inline]
pub fn scroll_progress(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f32 {
    let max_scroll = scroll_height - viewport_height;
    if max_scroll <= 0.0 || !scroll_y.is_finite() {
        return 0.0;
    }
    (scroll_y / max_scroll).clamp(0.0, 1.0) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_moves_fixed_fraction() {
        let mut s = Smoothed::new(0.0_f32, 0.25);
        assert_eq!(s.step(1.0), 0.25);
        assert_eq!(s.step(1.0), 0.4375);
    }

    #[test]
    fn ndc_flips_y() {
        let mut input = SmoothedInput::default();
        input.snap_to(&FrameInput {
            mouse_uv: Vec2::new(1.0, 0.0),
            mouse_present: true,
            scroll: 0.0,
        });
        assert_eq!(input.mouse_ndc(), Vec2::new(1.0, 1.0));
    }

    #[test]
    fn unscrollable_page_has_zero_progress() {
        assert_eq!(scroll_progress(100.0, 800.0, 800.0), 0.0);
        assert_eq!(scroll_progress(100.0, 600.0, 800.0), 0.0);
        assert_eq!(scroll_progress(900.0, 1800.0, 800.0), 0.9);
        assert_eq!(scroll_progress(5000.0, 1800.0, 800.0), 1.0);
    }
}
