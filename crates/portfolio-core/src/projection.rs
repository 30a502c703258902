//! Hand-rolled perspective projection and painter's-algorithm ordering.

use crate::constants::{DEPTH_ALPHA_MIN, DEPTH_RANGE, FOCAL_LENGTH, VIEW_RADIUS_FRACTION};
use glam::{Vec2, Vec3};

/// Screen-space placement of a view-space point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projected {
    pub screen: Vec2,
    /// View-space depth; larger is farther from the viewer.
    pub z: f32,
    /// Perspective scale applied to sizes at this depth.
    pub scale: f32,
}

/// Output viewport in canvas pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(1.0),
            height: height.max(1.0),
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    /// Pixel radius that a unit-distance point at depth zero maps to.
    #[inline]
    pub fn radius_px(&self) -> f32 {
        self.width.min(self.height) * VIEW_RADIUS_FRACTION
    }
}

/// Rotate about the vertical axis by `yaw`, then the horizontal axis by `pitch`.
#[inline]
pub fn rotate_yx(p: Vec3, yaw: f32, pitch: f32) -> Vec3 {
    let (sy, cy) = yaw.sin_cos();
    let x1 = p.x * cy - p.z * sy;
    let z1 = p.x * sy + p.z * cy;
    let (sx, cx) = pitch.sin_cos();
    let y2 = p.y * cx - z1 * sx;
    let z2 = p.y * sx + z1 * cx;
    Vec3::new(x1, y2, z2)
}

#[derive(Clone, Copy, Debug)]
pub struct Projector {
    pub center: Vec2,
    pub radius_px: f32,
    pub focal: f32,
}

impl Projector {
    pub fn for_viewport(viewport: Viewport) -> Self {
        Self {
            center: viewport.center(),
            radius_px: viewport.radius_px(),
            focal: FOCAL_LENGTH,
        }
    }

    /// Perspective divide of an already rotated point.
    #[inline]
    pub fn project(&self, p: Vec3) -> Projected {
        // Points at or behind the eye collapse to a tiny positive denominator.
        let denom = (self.focal + p.z).max(1e-3);
        let scale = self.focal / denom;
        Projected {
            screen: self.center + Vec2::new(p.x, p.y) * scale * self.radius_px,
            z: p.z,
            scale,
        }
    }
}

/// Depth factor in \[DEPTH_ALPHA_MIN, 1\], 1 for the nearest points.
/// Larger z is farther from the eye, so the factor falls as z grows.
#[inline]
pub fn depth_factor(z: f32) -> f32 {
    let near = ((DEPTH_RANGE - z) / (2.0 * DEPTH_RANGE)).clamp(0.0, 1.0);
    DEPTH_ALPHA_MIN + (1.0 - DEPTH_ALPHA_MIN) * near
}

/// Sort indices far-to-near. Equal depths keep their input order.
pub fn depth_order(depths: &[f32]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..depths.len()).collect();
    order.sort_by(|&a, &b| depths[b].total_cmp(&depths[a]));
    order
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quarter_yaw_moves_x_into_depth() {
        let p = rotate_yx(Vec3::X, std::f32::consts::FRAC_PI_2, 0.0);
        assert!(p.x.abs() < 1e-6);
        assert!((p.z - 1.0).abs() < 1e-6);
    }

    #[test]
    fn nearer_points_scale_up() {
        let proj = Projector::for_viewport(Viewport::new(800.0, 600.0));
        let near = proj.project(Vec3::new(0.5, 0.0, -0.5));
        let far = proj.project(Vec3::new(0.5, 0.0, 0.5));
        assert!(near.scale > far.scale);
        assert!(near.screen.x > far.screen.x);
    }

    #[test]
    fn projection_behind_eye_stays_finite() {
        let proj = Projector::for_viewport(Viewport::new(800.0, 600.0));
        let p = proj.project(Vec3::new(1.0, 1.0, -FOCAL_LENGTH - 1.0));
        assert!(p.screen.is_finite());
    }

    #[test]
    fn depth_factor_bounds() {
        assert!((depth_factor(-DEPTH_RANGE) - 1.0).abs() < 1e-6);
        assert!((depth_factor(DEPTH_RANGE) - DEPTH_ALPHA_MIN).abs() < 1e-6);
        assert!(depth_factor(-0.2) > depth_factor(0.2));
    }
}
