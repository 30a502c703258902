//! Turns a scene frame into an ordered list of paint operations.
//!
//! Order is fixed: background, mesh, particles far-to-near (glow then core
//! per particle), overlay. Painters replay the list verbatim.

use crate::constants::*;
use crate::projection::{depth_factor, depth_order};
use crate::scene::{Scene, Variant};
use crate::theme::Palette;
use glam::{Vec2, Vec4};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Blend {
    Normal,
    Additive,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Clear {
        color: Vec4,
    },
    SetBlend(Blend),
    Triangle {
        points: [Vec2; 3],
        fill: Vec4,
        stroke: Vec4,
    },
    /// Radial gradient from `color` at the centre to transparent at `radius`.
    Glow {
        center: Vec2,
        radius: f32,
        color: Vec4,
    },
    Disc {
        center: Vec2,
        radius: f32,
        color: Vec4,
    },
    Label {
        text: String,
        origin: Vec2,
        size_px: f32,
        color: Vec4,
    },
    ProgressBar {
        origin: Vec2,
        size: Vec2,
        fraction: f32,
        track: Vec4,
        fill: Vec4,
    },
}

#[derive(Clone, Debug, Default)]
pub struct Frame {
    pub ops: Vec<DrawOp>,
}

/// Global fade as the page scrolls away from the hero. Zero from 0.5 on.
#[inline]
pub fn scroll_fade(scroll: f32) -> f32 {
    (1.0 - 2.0 * scroll).max(0.0)
}

#[inline]
fn with_alpha(c: Vec4, a: f32) -> Vec4 {
    Vec4::new(c.x, c.y, c.z, (c.w * a).clamp(0.0, 1.0))
}

/// Smallest alpha worth painting.
const ALPHA_CULL: f32 = 0.004;

impl Scene {
    /// Final per-particle alpha as painted this frame, in particle order.
    pub fn particle_alphas(&self) -> Vec<f32> {
        let fade = match self.variant() {
            // The cloud assembles with scroll rather than fading out.
            Variant::Cloud => 1.0,
            _ => scroll_fade(self.input().scroll()),
        };
        self.particles()
            .iter()
            .zip(self.projected())
            .map(|(p, proj)| {
                let depth = match self.variant() {
                    Variant::Cloud => 1.0,
                    _ => depth_factor(proj.z),
                };
                (p.alpha * depth * fade).clamp(0.0, 1.0)
            })
            .collect()
    }

    pub fn compose(&self) -> Frame {
        let palette = self.theme().palette();
        let mut ops = vec![DrawOp::Clear {
            color: palette.background,
        }];
        let fade = scroll_fade(self.input().scroll());
        if self.variant() != Variant::Cloud && fade <= 0.0 {
            return Frame { ops };
        }

        self.compose_mesh(&palette, fade, &mut ops);

        if palette.additive {
            ops.push(DrawOp::SetBlend(Blend::Additive));
        }
        let alphas = self.particle_alphas();
        let cloud = self.variant() == Variant::Cloud;
        for i in self.paint_order() {
            let a = alphas[i];
            if a < ALPHA_CULL {
                continue;
            }
            let p = &self.particles()[i];
            let proj = &self.projected()[i];
            let center = proj.screen + p.push;
            let core = CORE_RADIUS_PX * p.size * proj.scale;
            ops.push(DrawOp::Glow {
                center,
                radius: core * GLOW_RADIUS_SCALE,
                color: with_alpha(palette.glow, if cloud { a } else { a * 0.35 }),
            });
            if !cloud {
                ops.push(DrawOp::Disc {
                    center,
                    radius: core,
                    color: with_alpha(palette.particle, a),
                });
            }
        }
        if palette.additive {
            ops.push(DrawOp::SetBlend(Blend::Normal));
        }

        self.compose_overlay(&palette, fade, &mut ops);
        Frame { ops }
    }

    fn compose_mesh(&self, palette: &Palette, fade: f32, ops: &mut Vec<DrawOp>) {
        let Some(cycle) = self.cycle() else {
            return;
        };
        let reveal = cycle.reveal();
        if reveal <= 0.0 || self.mesh().is_empty() {
            return;
        }
        let proj = self.projected();
        let count = self.mesh().len() as f32;
        let depths: Vec<f32> = self
            .mesh()
            .iter()
            .map(|t| (proj[t[0]].z + proj[t[1]].z + proj[t[2]].z) / 3.0)
            .collect();
        for k in depth_order(&depths) {
            let tri = self.mesh()[k];
            // Later triangles in build order appear later in the reveal.
            let local = (reveal * (1.0 + TRIANGLE_STAGGER) - TRIANGLE_STAGGER * k as f32 / count)
                .clamp(0.0, 1.0);
            let a = local * depth_factor(depths[k]) * fade;
            if a < ALPHA_CULL {
                continue;
            }
            let at = |i: usize| proj[tri[i]].screen + self.particles()[tri[i]].push;
            ops.push(DrawOp::Triangle {
                points: [at(0), at(1), at(2)],
                fill: with_alpha(palette.edge, a * 0.08),
                stroke: with_alpha(palette.edge, a * 0.35),
            });
        }
    }

    fn compose_overlay(&self, palette: &Palette, fade: f32, ops: &mut Vec<DrawOp>) {
        let Some(cycle) = self.cycle() else {
            return;
        };
        if fade <= 0.0 {
            return;
        }
        let vp = self.viewport();
        let margin = 24.0;
        let origin = Vec2::new(margin, vp.height - margin - 18.0);
        let percent = (cycle.overall() * 100.0).round() as u32;
        ops.push(DrawOp::Label {
            text: format!("{} {:>3}%", cycle.phase.label(), percent),
            origin,
            size_px: 11.0,
            color: with_alpha(palette.overlay_text, fade),
        });
        ops.push(DrawOp::ProgressBar {
            origin: origin + Vec2::new(0.0, 8.0),
            size: Vec2::new((vp.width * 0.18).clamp(120.0, 240.0), 2.0),
            fraction: cycle.overall(),
            track: with_alpha(palette.overlay_track, fade),
            fill: with_alpha(palette.particle, fade),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fade_reaches_zero_at_half() {
        assert_eq!(scroll_fade(0.0), 1.0);
        assert_eq!(scroll_fade(0.5), 0.0);
        assert_eq!(scroll_fade(0.75), 0.0);
    }

    #[test]
    fn with_alpha_scales_only_alpha() {
        let c = with_alpha(Vec4::new(0.1, 0.2, 0.3, 0.5), 0.5);
        assert_eq!(c, Vec4::new(0.1, 0.2, 0.3, 0.25));
    }
}
