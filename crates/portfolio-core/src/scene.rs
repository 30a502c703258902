//! Render state for the decorative visualization.
//!
//! A [`Scene`] owns the particle field, the optional mesh, the filtered input
//! signals and the theme. The host calls [`Scene::tick`] once per display
//! refresh and then paints [`Scene::compose`].

use crate::cloud;
use crate::constants::*;
use crate::cycle::{CycleClock, CycleState};
use crate::easing::lerp;
use crate::input::{FrameInput, SmoothedInput};
use crate::mesh::{build_mesh, Triangle};
use crate::particles::{build_field, random_direction, FieldShape, Particle};
use crate::projection::{depth_order, rotate_yx, Projected, Projector, Viewport};
use crate::theme::Theme;
use glam::{Vec2, Vec3};
use rand::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Variant {
    /// Breathing golden-spiral sphere with mouse repulsion.
    #[default]
    Sphere,
    /// Scan, mesh, hold and scatter loop.
    Reconstruction,
    /// Scroll-assembled point grid.
    Cloud,
}

impl Variant {
    pub fn from_attr(value: Option<&str>) -> Self {
        match value {
            Some("reconstruction") => Variant::Reconstruction,
            Some("cloud") => Variant::Cloud,
            _ => Variant::Sphere,
        }
    }

    pub fn shape(self) -> FieldShape {
        match self {
            Variant::Sphere => FieldShape::GoldenSpiral,
            Variant::Reconstruction => FieldShape::GoldenSpiral,
            Variant::Cloud => FieldShape::Grid,
        }
    }

    pub fn default_count(self) -> usize {
        match self {
            Variant::Sphere => 1200,
            Variant::Reconstruction => 480,
            Variant::Cloud => CLOUD_CANVAS_POINT_COUNT,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct SceneConfig {
    pub variant: Variant,
    pub count: usize,
    pub seed: u64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self::for_variant(Variant::default(), 42)
    }
}

impl SceneConfig {
    pub fn for_variant(variant: Variant, seed: u64) -> Self {
        Self {
            variant,
            count: variant.default_count(),
            seed,
        }
    }
}

pub struct Scene {
    pub(crate) config: SceneConfig,
    pub(crate) particles: Vec<Particle>,
    /// Scattered start positions for the reconstruction loop.
    pub(crate) scatter: Vec<Vec3>,
    pub(crate) mesh: Vec<Triangle>,
    pub(crate) input: SmoothedInput,
    pub(crate) theme: Theme,
    pub(crate) viewport: Viewport,
    pub(crate) elapsed: f64,
    pub(crate) cycle: Option<CycleState>,
    pub(crate) projected: Vec<Projected>,
    rng: StdRng,
}

impl Scene {
    pub fn new(config: SceneConfig, viewport: Viewport) -> Self {
        let particles = build_field(config.variant.shape(), config.count, config.seed);
        let mut rng = StdRng::seed_from_u64(config.seed ^ 0x9E37_79B9_7F4A_7C15);
        let (scatter, mesh) = match config.variant {
            Variant::Reconstruction => {
                let base: Vec<Vec3> = particles.iter().map(|p| p.base).collect();
                let scatter = (0..particles.len())
                    .map(|_| {
                        random_direction(&mut rng) * SCATTER_RADIUS * rng.gen_range(0.7_f32..1.0)
                    })
                    .collect();
                (scatter, build_mesh(&base))
            }
            _ => (Vec::new(), Vec::new()),
        };
        let projected = vec![
            Projected {
                screen: viewport.center(),
                z: 0.0,
                scale: 1.0,
            };
            particles.len()
        ];
        log::info!(
            "[scene] {:?} particles={} triangles={}",
            config.variant,
            particles.len(),
            mesh.len()
        );
        Self {
            config,
            particles,
            scatter,
            mesh,
            input: SmoothedInput::default(),
            theme: Theme::default(),
            viewport,
            elapsed: 0.0,
            cycle: None,
            projected,
            rng,
        }
    }

    pub fn variant(&self) -> Variant {
        self.config.variant
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn mesh(&self) -> &[Triangle] {
        &self.mesh
    }

    pub fn projected(&self) -> &[Projected] {
        &self.projected
    }

    pub fn input(&self) -> &SmoothedInput {
        &self.input
    }

    /// Bypass smoothing, e.g. to start from the current scroll position.
    pub fn snap_input(&mut self, raw: &FrameInput) {
        self.input.snap_to(raw);
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn cycle(&self) -> Option<CycleState> {
        self.cycle
    }

    /// Advance by one display frame.
    pub fn tick(&mut self, dt_sec: f32, raw: &FrameInput) {
        let dt = if dt_sec.is_finite() {
            dt_sec.clamp(0.0, MAX_FRAME_DT_SEC)
        } else {
            0.0
        };
        self.elapsed += dt as f64;
        self.input.step(raw);
        self.update();
    }

    /// Recompute positions and projections for the current time and input.
    pub fn update(&mut self) {
        match self.config.variant {
            Variant::Sphere => self.update_sphere(),
            Variant::Reconstruction => self.update_reconstruction(),
            Variant::Cloud => self.update_cloud(),
        }
        if self.config.variant != Variant::Cloud {
            self.update_repulsion();
        }
    }

    fn view_angles(&self, spin: f32) -> (f32, f32) {
        let t = self.elapsed as f32;
        let m = self.input.mouse_ndc();
        let yaw = t * SPIN_RATE_Y * spin + m.x * MOUSE_YAW;
        let pitch = (t * TILT_RATE_X).sin() * TILT_AMPLITUDE_X + m.y * MOUSE_PITCH;
        (yaw, pitch)
    }

    fn update_sphere(&mut self) {
        let t = self.elapsed as f32;
        let (yaw, pitch) = self.view_angles(1.0);
        let projector = Projector::for_viewport(self.viewport);
        for (p, out) in self.particles.iter_mut().zip(self.projected.iter_mut()) {
            let orbit = t * ORBIT_SPEED * p.speed;
            let breath = 1.0 + BREATH_AMPLITUDE * (t * BREATH_RATE + p.phase).sin();
            let mut pos = rotate_yx(p.base, orbit, 0.0) * breath;
            pos.y += WAVE_AMPLITUDE * (t * WAVE_RATE + pos.x * 4.0).sin();
            p.position = rotate_yx(pos, yaw, pitch);
            p.alpha = 1.0;
            *out = projector.project(p.position);
        }
    }

    fn update_reconstruction(&mut self) {
        let state = CycleClock::state_at(self.elapsed);
        let restarted = self
            .cycle
            .map(|prev| prev.cycle_index != state.cycle_index)
            .unwrap_or(false);
        if restarted {
            self.reset_scatter();
        }
        self.cycle = Some(state);

        let t = self.elapsed as f32;
        let (yaw, pitch) = self.view_angles(0.6);
        let projector = Projector::for_viewport(self.viewport);
        let assembly = state.assembly();
        let reveal = state.reveal();
        let visibility = state.visibility();
        let settle = WAVE_AMPLITUDE * assembly;
        for ((p, out), start) in self
            .particles
            .iter_mut()
            .zip(self.projected.iter_mut())
            .zip(&self.scatter)
        {
            let drift = 1.0 + 0.05 * (1.0 - assembly) * (t * 0.7 + p.phase).sin();
            let mut pos = (*start * drift).lerp(p.base, assembly);
            pos.y += settle * (t * WAVE_RATE + p.base.x * 4.0).sin();
            p.position = rotate_yx(pos, yaw, pitch);
            p.alpha = visibility * lerp(1.0, MESH_FADE_FLOOR, reveal);
            *out = projector.project(p.position);
        }
    }

    /// Draw fresh scatter positions in place for the next loop.
    fn reset_scatter(&mut self) {
        for s in &mut self.scatter {
            let radius = SCATTER_RADIUS * self.rng.gen_range(0.7_f32..1.0);
            *s = random_direction(&mut self.rng) * radius;
        }
        for p in &mut self.particles {
            p.push = Vec2::ZERO;
        }
        log::debug!("[scene] cycle restart, scatter reset");
    }

    fn update_cloud(&mut self) {
        let t = self.elapsed as f32;
        let m = self.input.mouse_ndc();
        let progress = self.input.scroll();
        let aspect = self.viewport.width / self.viewport.height;
        let mvp = cloud::cloud_view_proj(aspect) * cloud::cloud_model(t, m);
        let (w, h) = (self.viewport.width, self.viewport.height);
        for (p, out) in self.particles.iter_mut().zip(self.projected.iter_mut()) {
            let v = cloud::displace(p.base, p.random, t, progress, m);
            p.position = v.position;
            let clip = cloud::to_clip(&mvp, v.position);
            let depth = clip.w.max(1e-3);
            let ndc = Vec2::new(clip.x / depth, clip.y / depth);
            let visible = clip.w > 0.1;
            p.alpha = if visible { v.alpha } else { 0.0 };
            p.size = v.size;
            *out = Projected {
                screen: Vec2::new((ndc.x * 0.5 + 0.5) * w, (0.5 - ndc.y * 0.5) * h),
                z: depth,
                scale: CLOUD_POINT_SCALE_PX / depth / CORE_RADIUS_PX / GLOW_RADIUS_SCALE,
            };
        }
    }

    /// Ease each particle's screen offset toward a push away from the pointer.
    fn update_repulsion(&mut self) {
        let mouse_px = self.input.mouse_uv() * Vec2::new(self.viewport.width, self.viewport.height);
        let present = self.input.mouse_present;
        for (p, proj) in self.particles.iter_mut().zip(&self.projected) {
            let mut target = Vec2::ZERO;
            if present {
                let delta = proj.screen - mouse_px;
                let dist = delta.length();
                if dist < REPULSION_RADIUS_PX && dist > 1e-3 {
                    let falloff = 1.0 - dist / REPULSION_RADIUS_PX;
                    target = delta / dist * falloff * REPULSION_STRENGTH_PX * proj.scale;
                }
            }
            p.push += (target - p.push) * REPULSION_EASE;
        }
    }

    /// Indices of particles in far-to-near paint order.
    pub fn paint_order(&self) -> Vec<usize> {
        let depths: Vec<f32> = self.projected.iter().map(|p| p.z).collect();
        depth_order(&depths)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scene(variant: Variant) -> Scene {
        let mut cfg = SceneConfig::for_variant(variant, 7);
        cfg.count = 300;
        Scene::new(cfg, Viewport::new(800.0, 600.0))
    }

    #[test]
    fn only_reconstruction_builds_a_mesh() {
        assert!(scene(Variant::Sphere).mesh().is_empty());
        assert!(scene(Variant::Cloud).mesh().is_empty());
        assert!(!scene(Variant::Reconstruction).mesh().is_empty());
    }

    #[test]
    fn huge_dt_is_clamped() {
        let mut s = scene(Variant::Sphere);
        s.tick(30.0, &FrameInput::default());
        assert!((s.elapsed() - MAX_FRAME_DT_SEC as f64).abs() < 1e-9);
        s.tick(f32::NAN, &FrameInput::default());
        assert!((s.elapsed() - MAX_FRAME_DT_SEC as f64).abs() < 1e-9);
    }

    #[test]
    fn topology_is_fixed_across_frames() {
        let mut s = scene(Variant::Reconstruction);
        let mesh = s.mesh().to_vec();
        let n = s.particles().len();
        for _ in 0..400 {
            s.tick(0.1, &FrameInput::default());
        }
        assert_eq!(s.mesh(), mesh.as_slice());
        assert_eq!(s.particles().len(), n);
        assert!(s.cycle().map(|c| c.cycle_index >= 2).unwrap_or(false));
    }

    #[test]
    fn scatter_is_redrawn_when_a_cycle_restarts() {
        let mut s = scene(Variant::Reconstruction);
        let idle = FrameInput::default();
        s.tick(0.1, &idle);
        let before = s.scatter.clone();
        assert_eq!(s.cycle().map(|c| c.cycle_index), Some(0));

        let steps = (CYCLE_PERIOD_SEC / 0.1).ceil() as usize + 1;
        for _ in 0..steps {
            s.tick(0.1, &idle);
        }
        assert_eq!(s.cycle().map(|c| c.cycle_index), Some(1));
        assert_eq!(s.scatter.len(), before.len());
        for (i, (old, new)) in before.iter().zip(&s.scatter).enumerate() {
            assert_ne!(old, new, "scatter {} kept its position", i);
        }
        assert!(s.particles().iter().all(|p| p.push == Vec2::ZERO));
    }

    #[test]
    fn pointer_pushes_nearby_particles_away() {
        let mut s = scene(Variant::Sphere);
        let raw = FrameInput {
            mouse_uv: Vec2::new(0.5, 0.5),
            mouse_present: true,
            scroll: 0.0,
        };
        s.snap_input(&raw);
        for _ in 0..30 {
            s.tick(1.0 / 60.0, &raw);
        }
        let center = s.viewport().center();
        let pushed_outward = s
            .particles()
            .iter()
            .zip(s.projected())
            .filter(|(p, proj)| p.push.length() > 1.0 && (proj.screen - center).length() > 30.0)
            .all(|(p, proj)| p.push.dot(proj.screen - center) > 0.0);
        assert!(pushed_outward);
        assert!(s.particles().iter().any(|p| p.push.length() > 1.0));
    }
}
