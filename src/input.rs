use glam::Vec2;
use portfolio_core::FrameInput;

/// Last pointer position in CSS pixels relative to the window.
#[derive(Default, Clone, Copy)]
pub struct MouseState {
    pub x: f32,
    pub y: f32,
    pub present: bool,
}

/// Raw signals written by event listeners and read by the frame loop.
#[derive(Default, Clone, Copy)]
pub struct PageInput {
    pub mouse: MouseState,
    pub viewport: [f32; 2],
    pub scroll: f32,
}

impl PageInput {
    pub fn frame_input(&self) -> FrameInput {
        FrameInput {
            mouse_uv: normalized_uv(
                self.mouse.x,
                self.mouse.y,
                self.viewport[0],
                self.viewport[1],
            ),
            mouse_present: self.mouse.present,
            scroll: self.scroll,
        }
    }
}

/// Map a pixel position into \[0, 1\]²; centre when the area is degenerate.
#[inline]
pub fn normalized_uv(x: f32, y: f32, width: f32, height: f32) -> Vec2 {
    if width > 0.0 && height > 0.0 {
        Vec2::new((x / width).clamp(0.0, 1.0), (y / height).clamp(0.0, 1.0))
    } else {
        Vec2::splat(0.5)
    }
}

/// Backing-store size for a CSS box at the given device pixel ratio.
#[inline]
pub fn backing_size(css_width: f64, css_height: f64, dpr: f64, max_dpr: f64) -> (u32, u32) {
    let ratio = if dpr > 0.0 { dpr.min(max_dpr) } else { 1.0 };
    let w = (css_width * ratio).max(1.0) as u32;
    let h = (css_height * ratio).max(1.0) as u32;
    (w, h)
}
