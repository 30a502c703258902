use crate::constants::{ACQUIRE_END_SEC, CYCLE_PERIOD_SEC, HOLD_END_SEC, RECONSTRUCT_END_SEC};
use crate::easing;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CyclePhase {
    Acquire,
    Reconstruct,
    Hold,
    Disperse,
}

impl CyclePhase {
    pub fn label(self) -> &'static str {
        match self {
            CyclePhase::Acquire => "ACQUIRING POINTS",
            CyclePhase::Reconstruct => "RECONSTRUCTING SURFACE",
            CyclePhase::Hold => "MODEL COMPLETE",
            CyclePhase::Disperse => "RELEASING",
        }
    }
}

/// Where the loop is at a given instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CycleState {
    pub phase: CyclePhase,
    /// Linear progress through the current phase.
    pub linear: f32,
    /// Phase-specific eased progress.
    pub eased: f32,
    /// Number of full cycles completed before this instant.
    pub cycle_index: u64,
}

impl CycleState {
    /// How far particles have travelled from scatter toward the target shape.
    pub fn assembly(&self) -> f32 {
        match self.phase {
            CyclePhase::Acquire => 0.0,
            CyclePhase::Reconstruct => self.eased,
            CyclePhase::Hold => 1.0,
            CyclePhase::Disperse => 1.0 - self.eased,
        }
    }

    /// Mesh reveal in \[0, 1\]; trails assembly so triangles form on arrived points.
    pub fn reveal(&self) -> f32 {
        match self.phase {
            CyclePhase::Acquire => 0.0,
            CyclePhase::Reconstruct => easing::ease_in_out_cubic((self.linear - 0.35) / 0.65),
            CyclePhase::Hold => 1.0,
            CyclePhase::Disperse => 1.0 - easing::ease_in_out_quad(self.linear * 1.6),
        }
    }

    /// Particle visibility, fading in while acquiring and out while dispersing.
    pub fn visibility(&self) -> f32 {
        match self.phase {
            CyclePhase::Acquire => self.eased,
            CyclePhase::Reconstruct | CyclePhase::Hold => 1.0,
            CyclePhase::Disperse => 1.0 - easing::ease_in_out_quad((self.linear - 0.5) * 2.0),
        }
    }

    /// Progress through the whole cycle, for the overlay bar.
    pub fn overall(&self) -> f32 {
        let (start, end) = CycleClock::bounds(self.phase);
        ((start + (end - start) * self.linear) / CYCLE_PERIOD_SEC).clamp(0.0, 1.0)
    }
}

/// Fixed-period clock; the state is a pure function of elapsed time.
#[derive(Clone, Copy, Debug)]
pub struct CycleClock;

impl CycleClock {
    fn bounds(phase: CyclePhase) -> (f32, f32) {
        match phase {
            CyclePhase::Acquire => (0.0, ACQUIRE_END_SEC),
            CyclePhase::Reconstruct => (ACQUIRE_END_SEC, RECONSTRUCT_END_SEC),
            CyclePhase::Hold => (RECONSTRUCT_END_SEC, HOLD_END_SEC),
            CyclePhase::Disperse => (HOLD_END_SEC, CYCLE_PERIOD_SEC),
        }
    }

    pub fn state_at(elapsed_sec: f64) -> CycleState {
        let elapsed = elapsed_sec.max(0.0);
        let period = CYCLE_PERIOD_SEC as f64;
        let cycle_index = (elapsed / period).floor() as u64;
        let local = (elapsed - cycle_index as f64 * period) as f32;
        let phase = if local < ACQUIRE_END_SEC {
            CyclePhase::Acquire
        } else if local < RECONSTRUCT_END_SEC {
            CyclePhase::Reconstruct
        } else if local < HOLD_END_SEC {
            CyclePhase::Hold
        } else {
            CyclePhase::Disperse
        };
        let (start, end) = Self::bounds(phase);
        let linear = ((local - start) / (end - start)).clamp(0.0, 1.0);
        let eased = match phase {
            CyclePhase::Acquire => easing::ease_out_quart(linear),
            CyclePhase::Reconstruct => easing::ease_in_out_cubic(linear),
            CyclePhase::Hold => easing::linear(linear),
            CyclePhase::Disperse => easing::ease_in_out_quad(linear),
        };
        CycleState {
            phase,
            linear,
            eased,
            cycle_index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phases_follow_fixed_offsets() {
        assert_eq!(CycleClock::state_at(0.0).phase, CyclePhase::Acquire);
        assert_eq!(CycleClock::state_at(4.0).phase, CyclePhase::Reconstruct);
        assert_eq!(CycleClock::state_at(9.0).phase, CyclePhase::Hold);
        assert_eq!(CycleClock::state_at(12.0).phase, CyclePhase::Disperse);
    }

    #[test]
    fn state_wraps_on_period() {
        let a = CycleClock::state_at(5.25);
        let b = CycleClock::state_at(5.25 + 3.0 * CYCLE_PERIOD_SEC as f64);
        assert_eq!(a.phase, b.phase);
        assert!((a.eased - b.eased).abs() < 1e-4);
        assert_eq!(b.cycle_index, 3);
    }

    #[test]
    fn assembly_is_continuous_across_boundaries() {
        let eps = 1e-3;
        for boundary in [ACQUIRE_END_SEC, RECONSTRUCT_END_SEC, HOLD_END_SEC, CYCLE_PERIOD_SEC] {
            let before = CycleClock::state_at(boundary as f64 - eps).assembly();
            let after = CycleClock::state_at(boundary as f64 + eps).assembly();
            assert!((before - after).abs() < 0.01, "jump at {}", boundary);
        }
    }

    #[test]
    fn reveal_stays_in_unit_range() {
        for i in 0..=280 {
            let r = CycleClock::state_at(i as f64 * 0.05).reveal();
            assert!((0.0..=1.0).contains(&r));
        }
    }
}
