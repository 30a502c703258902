use crate::constants::*;
use glam::{Vec2, Vec3};
use rand::prelude::*;
use std::f32::consts::PI;

/// Distribution used to lay out the base positions of a particle field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldShape {
    /// Evenly spaced golden-angle spiral on a gently deformed sphere.
    GoldenSpiral,
    /// Uniform random directions with a random radius in the shell band.
    RandomShell,
    /// Flat point-cloud grid, `GRID_COLUMNS` wide.
    Grid,
}

#[derive(Clone, Debug)]
pub struct Particle {
    /// Layout position; never animated.
    pub base: Vec3,
    /// Position after this frame's update, before projection.
    pub position: Vec3,
    pub size: f32,
    pub alpha: f32,
    pub phase: f32,
    pub speed: f32,
    /// Per-particle random scalar in \[0, 1).
    pub random: f32,
    /// Screen-space offset from mouse repulsion, in pixels.
    pub push: Vec2,
}

impl Particle {
    fn at(base: Vec3, size: f32, phase: f32, speed: f32, random: f32) -> Self {
        Self {
            base,
            position: base,
            size,
            alpha: 1.0,
            phase,
            speed,
            random,
            push: Vec2::ZERO,
        }
    }
}

/// Golden-angle spiral point `i` of `n` before deformation, plus its angles.
#[inline]
pub fn golden_spiral_angles(i: usize, n: usize) -> (f32, f32) {
    let theta = i as f32 * GOLDEN_ANGLE;
    let phi = (1.0 - 2.0 * (i as f32 + 0.5) / n as f32).clamp(-1.0, 1.0).acos();
    (theta, phi)
}

#[inline]
pub fn spherical(theta: f32, phi: f32, radius: f32) -> Vec3 {
    Vec3::new(
        radius * phi.sin() * theta.cos(),
        radius * phi.cos(),
        radius * phi.sin() * theta.sin(),
    )
}

/// Radius of the deformed sphere at the given angles.
#[inline]
pub fn deformed_radius(theta: f32, phi: f32) -> f32 {
    SPHERE_RADIUS + SPHERE_DEFORM * (3.0 * theta).sin() * (2.0 * phi).sin()
}

pub fn golden_spiral(n: usize, rng: &mut impl Rng) -> Vec<Particle> {
    (0..n)
        .map(|i| {
            let (theta, phi) = golden_spiral_angles(i, n);
            let base = spherical(theta, phi, deformed_radius(theta, phi));
            let random: f32 = rng.gen();
            Particle::at(
                base,
                PARTICLE_SIZE_MIN + PARTICLE_SIZE_SPAN * random,
                rng.gen_range(0.0..2.0 * PI),
                rng.gen_range(0.6..1.4),
                random,
            )
        })
        .collect()
}

/// Uniform direction on the unit sphere, with a radius drawn from `radius`.
pub fn random_direction(rng: &mut impl Rng) -> Vec3 {
    let theta = rng.gen_range(0.0..2.0 * PI);
    let phi = (1.0 - 2.0 * rng.gen::<f32>()).clamp(-1.0, 1.0).acos();
    spherical(theta, phi, 1.0)
}

pub fn random_shell(n: usize, rng: &mut impl Rng) -> Vec<Particle> {
    (0..n)
        .map(|_| {
            let radius = rng.gen_range(SHELL_RADIUS_MIN..SHELL_RADIUS_MAX);
            let base = random_direction(rng) * radius;
            let random: f32 = rng.gen();
            Particle::at(
                base,
                PARTICLE_SIZE_MIN + PARTICLE_SIZE_SPAN * random,
                rng.gen_range(0.0..2.0 * PI),
                rng.gen_range(0.6..1.4),
                random,
            )
        })
        .collect()
}

pub fn grid(n: usize, rng: &mut impl Rng) -> Vec<Particle> {
    (0..n)
        .map(|i| {
            let base = Vec3::new(
                (i % GRID_COLUMNS) as f32 * GRID_SPACING + GRID_OFFSET,
                (i / GRID_COLUMNS) as f32 * GRID_SPACING + GRID_OFFSET,
                0.0,
            );
            let random: f32 = rng.gen();
            Particle::at(base, 3.5 * random + 0.8, 0.0, 1.0, random)
        })
        .collect()
}

/// Build `n` particles with the given shape. The same seed always yields
/// the same field.
pub fn build_field(shape: FieldShape, n: usize, seed: u64) -> Vec<Particle> {
    let mut rng = StdRng::seed_from_u64(seed);
    let field = match shape {
        FieldShape::GoldenSpiral => golden_spiral(n, &mut rng),
        FieldShape::RandomShell => random_shell(n, &mut rng),
        FieldShape::Grid => grid(n, &mut rng),
    };
    log::debug!("[field] {:?} n={} seed={}", shape, field.len(), seed);
    field
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn golden_angles_cover_both_poles() {
        let n = 100;
        let (_, first) = golden_spiral_angles(0, n);
        let (_, last) = golden_spiral_angles(n - 1, n);
        assert!(first < 0.2);
        assert!(last > PI - 0.2);
    }

    #[test]
    fn grid_rows_wrap_at_column_count() {
        let g = build_field(FieldShape::Grid, GRID_COLUMNS + 1, 1);
        assert_eq!(g[0].base, Vec3::new(GRID_OFFSET, GRID_OFFSET, 0.0));
        assert_eq!(g[GRID_COLUMNS].base.x, GRID_OFFSET);
        assert!((g[GRID_COLUMNS].base.y - (GRID_OFFSET + GRID_SPACING)).abs() < 1e-6);
    }

    #[test]
    fn same_seed_same_field() {
        let a = build_field(FieldShape::RandomShell, 64, 9);
        let b = build_field(FieldShape::RandomShell, 64, 9);
        assert!(a.iter().zip(&b).all(|(p, q)| p.base == q.base));
    }
}
