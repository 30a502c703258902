use crate::constants::SECTION_REVEAL_FRACTION;
use smallvec::SmallVec;

/// Vertical extent of a section relative to the viewport top, in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionRect {
    pub top: f64,
    pub bottom: f64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SectionActivity {
    /// Sections that should carry the `visible` class.
    pub revealed: SmallVec<[usize; 8]>,
    /// Section whose navigation dot is active, if any section is in view.
    pub active: Option<usize>,
}

/// A section is revealed once its top passes the reveal line and it has not
/// scrolled fully out above the viewport. The last revealed one is active.
pub fn section_activity(rects: &[SectionRect], viewport_height: f64) -> SectionActivity {
    let line = viewport_height * SECTION_REVEAL_FRACTION;
    let mut activity = SectionActivity::default();
    for (i, r) in rects.iter().enumerate() {
        if r.top < line && r.bottom > 0.0 {
            activity.revealed.push(i);
            activity.active = Some(i);
        }
    }
    activity
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(top: f64, height: f64) -> SectionRect {
        SectionRect {
            top,
            bottom: top + height,
        }
    }

    #[test]
    fn first_screen_activates_hero() {
        let rects = [rect(0.0, 1000.0), rect(1000.0, 1000.0)];
        let a = section_activity(&rects, 1000.0);
        assert_eq!(a.revealed.as_slice(), &[0]);
        assert_eq!(a.active, Some(0));
    }

    #[test]
    fn later_section_wins_when_both_in_view() {
        let rects = [rect(-700.0, 1000.0), rect(300.0, 1000.0)];
        let a = section_activity(&rects, 1000.0);
        assert_eq!(a.revealed.as_slice(), &[0, 1]);
        assert_eq!(a.active, Some(1));
    }

    #[test]
    fn scrolled_past_sections_are_skipped() {
        let rects = [rect(-2000.0, 1000.0), rect(-1000.0, 1000.0), rect(0.0, 1000.0)];
        let a = section_activity(&rects, 1000.0);
        assert_eq!(a.revealed.as_slice(), &[2]);
        assert_eq!(a.active, Some(2));
    }
}
