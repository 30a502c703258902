// Per-frame behaviour of the scene: projection, paint order, fades and
// input smoothing.

use glam::{Vec2, Vec3};
use portfolio_core::compose::DrawOp;
use portfolio_core::projection::rotate_yx;
use portfolio_core::{
    depth_order, scroll_fade, FrameInput, Projector, Scene, SceneConfig, Smoothed, Theme, Variant,
    Viewport,
};

fn scene(variant: Variant) -> Scene {
    let mut cfg = SceneConfig::for_variant(variant, 5);
    cfg.count = 360;
    Scene::new(cfg, Viewport::new(1280.0, 720.0))
}

fn input(mouse: Vec2, scroll: f32) -> FrameInput {
    FrameInput {
        mouse_uv: mouse,
        mouse_present: true,
        scroll,
    }
}

#[test]
fn origin_without_rotation_projects_to_center() {
    let vp = Viewport::new(1280.0, 720.0);
    let proj = Projector::for_viewport(vp);
    let p = proj.project(rotate_yx(Vec3::ZERO, 0.0, 0.0));
    assert_eq!(p.screen, vp.center());
    assert_eq!(p.scale, 1.0);
}

#[test]
fn depth_order_is_far_to_near_and_stable() {
    let depths = [0.1, 0.5, -0.3, 0.5, 0.1, 0.9];
    let order = depth_order(&depths);
    assert_eq!(order, vec![5, 1, 3, 0, 4, 2]);
    for w in order.windows(2) {
        assert!(depths[w[0]] >= depths[w[1]]);
    }
}

#[test]
fn painted_particles_follow_depth_order() {
    let mut s = scene(Variant::Sphere);
    s.tick(0.016, &input(Vec2::new(0.3, 0.4), 0.0));
    let order = s.paint_order();
    let z: Vec<f32> = order.iter().map(|&i| s.projected()[i].z).collect();
    for w in z.windows(2) {
        assert!(w[0] >= w[1]);
    }
    // Cores appear in the same order as the sorted indices.
    let cores: Vec<Vec2> = s
        .compose()
        .ops
        .iter()
        .filter_map(|op| match op {
            DrawOp::Disc { center, .. } => Some(*center),
            _ => None,
        })
        .collect();
    let expected: Vec<Vec2> = order
        .iter()
        .map(|&i| s.projected()[i].screen + s.particles()[i].push)
        .collect();
    assert_eq!(cores, expected);
}

#[test]
fn scroll_fade_is_non_increasing_and_zero_by_half() {
    let mut prev = scroll_fade(0.0);
    for i in 1..=100 {
        let p = i as f32 / 100.0;
        let f = scroll_fade(p);
        assert!(f <= prev);
        if p >= 0.5 {
            assert_eq!(f, 0.0);
        }
        prev = f;
    }
}

#[test]
fn full_scroll_never_brightens_particles() {
    for variant in [Variant::Sphere, Variant::Reconstruction] {
        for t in [0.0_f32, 2.0, 5.0, 9.5, 12.5] {
            let mut top = scene(variant);
            let mut bottom = scene(variant);
            let mouse = Vec2::new(0.6, 0.45);
            top.snap_input(&input(mouse, 0.0));
            bottom.snap_input(&input(mouse, 1.0));
            // Same elapsed time and mouse; only scroll differs.
            let steps = (t / 0.1).round() as usize;
            for _ in 0..steps {
                top.tick(0.1, &input(mouse, 0.0));
                bottom.tick(0.1, &input(mouse, 1.0));
            }
            top.update();
            bottom.update();
            let a0 = top.particle_alphas();
            let a1 = bottom.particle_alphas();
            assert_eq!(a0.len(), a1.len());
            for (lo, hi) in a1.iter().zip(&a0) {
                assert!(lo <= hi, "{:?} t={}", variant, t);
            }
        }
    }
}

#[test]
fn scrolled_out_scene_paints_only_background() {
    let mut s = scene(Variant::Sphere);
    s.snap_input(&input(Vec2::splat(0.5), 1.0));
    s.tick(0.016, &input(Vec2::splat(0.5), 1.0));
    let frame = s.compose();
    assert_eq!(frame.ops.len(), 1);
    assert!(matches!(frame.ops[0], DrawOp::Clear { .. }));
}

#[test]
fn smoothing_converges_geometrically() {
    let mut m = Smoothed::new(Vec2::ZERO, 0.05);
    let target = Vec2::new(0.8, 0.25);
    let start_err = target.length();
    for n in 1..=200 {
        m.step(target);
        let bound = start_err * 0.95_f32.powi(n) + 1e-5;
        assert!((m.value - target).length() <= bound);
    }
    assert!((m.value - target).length() < 1e-4);
}

#[test]
fn scene_mouse_converges_to_frozen_pointer() {
    let mut s = scene(Variant::Sphere);
    let target = Vec2::new(0.9, 0.1);
    for _ in 0..300 {
        s.tick(0.016, &input(target, 0.0));
    }
    assert!((s.input().mouse_uv() - target).length() < 1e-3);
}

#[test]
fn theme_switches_palette_discretely() {
    let mut s = scene(Variant::Sphere);
    s.tick(0.016, &FrameInput::default());
    let dark = s.compose();
    s.set_theme(Theme::Light);
    let light = s.compose();
    let bg = |f: &portfolio_core::Frame| match &f.ops[0] {
        DrawOp::Clear { color } => *color,
        _ => panic!("first op must clear"),
    };
    assert_eq!(bg(&dark), Theme::Dark.palette().background);
    assert_eq!(bg(&light), Theme::Light.palette().background);
    assert!(dark.ops.iter().any(|op| matches!(op, DrawOp::SetBlend(_))));
    assert!(!light.ops.iter().any(|op| matches!(op, DrawOp::SetBlend(_))));
}

#[test]
fn reconstruction_hold_draws_mesh_and_overlay() {
    let mut s = scene(Variant::Reconstruction);
    for _ in 0..95 {
        s.tick(0.1, &FrameInput::default());
    }
    let frame = s.compose();
    let first_particle = frame
        .ops
        .iter()
        .position(|op| matches!(op, DrawOp::Glow { .. }))
        .unwrap_or(frame.ops.len());
    let last_triangle = frame
        .ops
        .iter()
        .rposition(|op| matches!(op, DrawOp::Triangle { .. }));
    assert!(matches!(last_triangle, Some(i) if i < first_particle));
    assert!(frame.ops.iter().any(
        |op| matches!(op, DrawOp::Label { text, .. } if text.starts_with("MODEL COMPLETE"))
    ));
    assert!(matches!(frame.ops.last(), Some(DrawOp::ProgressBar { .. })));
}

#[test]
fn cloud_assembles_with_scroll() {
    let mut s = scene(Variant::Cloud);
    s.snap_input(&input(Vec2::new(5.0, 5.0), 1.0));
    s.update();
    for p in s.particles() {
        assert!((p.position.x - p.base.x).abs() < 1e-4);
        assert!((p.position.y - p.base.y).abs() < 1e-4);
    }
}
