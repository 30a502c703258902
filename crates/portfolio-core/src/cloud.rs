//! Point-cloud displacement shared by the GPU renderer and its CPU mirror.
//!
//! `shaders/points.wgsl` performs the same per-vertex math; keep the two in
//! step when tuning.

use crate::constants::*;
use crate::easing::smoothstep;
use crate::particles::Particle;
use glam::{Mat4, Vec2, Vec3, Vec4};

pub static POINTS_WGSL: &str = include_str!("../shaders/points.wgsl");

/// Per-point instance data uploaded once: base position and random scalar.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CloudInstance {
    pub base_random: [f32; 4],
}

pub fn pack_instances(particles: &[Particle]) -> Vec<CloudInstance> {
    particles
        .iter()
        .map(|p| CloudInstance {
            base_random: [p.base.x, p.base.y, p.base.z, p.random],
        })
        .collect()
}

/// Uniform block of `shaders/points.wgsl`. Field order and padding follow
/// the WGSL `Uniforms` struct.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PointsUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub model: [[f32; 4]; 4],
    pub resolution: [f32; 2],
    pub time: f32,
    pub progress: f32,
    pub mouse: [f32; 2],
    pub point_scale: f32,
    pub _pad: f32,
    pub color: [f32; 4],
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CloudVertex {
    /// Model-space position after displacement.
    pub position: Vec3,
    /// Point size before perspective attenuation.
    pub size: f32,
    pub alpha: f32,
}

/// Scattered start position of a grid point.
#[inline]
pub fn scatter(base: Vec3, random: f32) -> Vec3 {
    base + Vec3::new(
        (random * 50.0).sin() * 12.0,
        (random * 30.0).cos() * 12.0,
        (random * 20.0).sin() * 6.0,
    )
}

/// Displace one point. `progress` blends from scatter (0) to grid (1);
/// `mouse_ndc` is the smoothed pointer in \[-1, 1\]².
pub fn displace(base: Vec3, random: f32, time: f32, progress: f32, mouse_ndc: Vec2) -> CloudVertex {
    let mut p = scatter(base, random).lerp(base, progress);
    let dist = Vec2::new(p.x, p.y).distance(mouse_ndc * CLOUD_MOUSE_SPAN);
    let influence = smoothstep(CLOUD_INFLUENCE_RADIUS, 0.0, dist);
    p.z += influence * CLOUD_INFLUENCE_LIFT;
    p.z += (p.x * CLOUD_WAVE_FREQ + time).sin() * CLOUD_WAVE_AMPLITUDE * (1.0 - progress * 0.5);
    CloudVertex {
        position: p,
        size: 3.5 * random + 0.8,
        alpha: 0.6 + influence * 0.4,
    }
}

/// Model rotation of the whole cloud.
#[inline]
pub fn cloud_angles(time: f32, mouse_ndc: Vec2) -> (f32, f32) {
    let yaw = time * 0.03 + mouse_ndc.x * 0.1;
    let pitch = (time * 0.2).sin() * 0.08 + mouse_ndc.y * 0.05;
    (yaw, pitch)
}

pub fn cloud_model(time: f32, mouse_ndc: Vec2) -> Mat4 {
    let (yaw, pitch) = cloud_angles(time, mouse_ndc);
    // Rotation order matches a scene-graph object with Euler XYZ.
    Mat4::from_rotation_x(pitch) * Mat4::from_rotation_y(yaw)
}

pub fn cloud_view_proj(aspect: f32) -> Mat4 {
    let proj = Mat4::perspective_rh(
        CLOUD_FOV_Y_DEG.to_radians(),
        aspect.max(1e-3),
        0.1,
        1000.0,
    );
    let view = Mat4::look_at_rh(Vec3::new(0.0, 0.0, CLOUD_CAMERA_Z), Vec3::ZERO, Vec3::Y);
    proj * view
}

/// Clip-space position of a displaced point.
#[inline]
pub fn to_clip(mvp: &Mat4, p: Vec3) -> Vec4 {
    *mvp * p.extend(1.0)
}
