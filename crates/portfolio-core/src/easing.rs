//! Easing curves mapping linear progress in \[0, 1\] onto shaped progress.
//!
//! Inputs outside the unit interval are clamped first, so every curve is total
//! and monotonic on the whole real line.

#[inline]
pub fn linear(t: f32) -> f32 {
    t.clamp(0.0, 1.0)
}

#[inline]
pub fn ease_out_quart(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(4)
}

#[inline]
pub fn ease_in_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

#[inline]
pub fn ease_in_out_quad(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

/// Hermite step between `edge0` and `edge1`. Edges may be given in reverse
/// order, which yields a falling step.
#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curves_hit_their_endpoints() {
        for f in [linear, ease_out_quart, ease_in_out_cubic, ease_in_out_quad] {
            assert_eq!(f(0.0), 0.0);
            assert!((f(1.0) - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn curves_are_monotonic() {
        for f in [ease_out_quart, ease_in_out_cubic, ease_in_out_quad] {
            let mut prev = f(-0.5);
            for i in 0..=200 {
                let v = f(i as f32 / 200.0);
                assert!(v + 1e-6 >= prev);
                prev = v;
            }
        }
    }

    #[test]
    fn reversed_smoothstep_falls() {
        assert_eq!(smoothstep(8.0, 0.0, 0.0), 1.0);
        assert_eq!(smoothstep(8.0, 0.0, 8.0), 0.0);
        assert_eq!(smoothstep(8.0, 0.0, 20.0), 0.0);
        let mid = smoothstep(8.0, 0.0, 4.0);
        assert!((mid - 0.5).abs() < 1e-6);
    }
}
