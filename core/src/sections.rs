use crate::pager::JumpDirection;

/// Ordered anchor ids of the full-viewport page sections.
pub const SECTION_IDS: [&str; 6] = [
    "hero",
    "skills",
    "experience",
    "education",
    "projects",
    "contact",
];

pub const VISIBILITY_BAND_RATIO: f32 = 0.3;

/// A section's measured bounding box, in viewport coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionRect {
    pub top: f32,
    pub bottom: f32,
}

/// The section whose box crosses the 30%-of-viewport line. Sections that
/// could not be measured count as no match.
pub fn current_section(rects: &[Option<SectionRect>], viewport_height: f32) -> Option<usize> {
    let band = viewport_height * VISIBILITY_BAND_RATIO;
    rects.iter().position(|rect| {
        rect.map(|rect| rect.top <= band && rect.bottom >= band)
            .unwrap_or(false)
    })
}

/// The adjacent section in the jump direction, clamped to the ends of the
/// list. `None` when clamping leaves the index where it already is.
pub fn jump_target(current: usize, count: usize, direction: JumpDirection) -> Option<usize> {
    if count == 0 {
        return None;
    }
    let next = match direction {
        JumpDirection::Down => (current + 1).min(count - 1),
        JumpDirection::Up => current.saturating_sub(1),
    };
    (next != current).then_some(next)
}

/// Fallback when no section crosses the visibility band: downward intent
/// lands on the first section, upward intent on the last.
pub fn boundary_target(count: usize, direction: JumpDirection) -> Option<usize> {
    if count == 0 {
        return None;
    }
    Some(match direction {
        JumpDirection::Down => 0,
        JumpDirection::Up => count - 1,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(top: f32, bottom: f32) -> Option<SectionRect> {
        Some(SectionRect { top, bottom })
    }

    #[test]
    fn picks_section_crossing_the_band() {
        let rects = vec![rect(-800.0, 0.0), rect(0.0, 800.0), rect(800.0, 1600.0)];
        assert_eq!(current_section(&rects, 800.0), Some(1));
    }

    #[test]
    fn unmeasured_sections_are_skipped() {
        let rects = vec![None, rect(100.0, 900.0)];
        assert_eq!(current_section(&rects, 800.0), Some(1));
    }

    #[test]
    fn no_match_at_exact_boundary_gap() {
        let rects = vec![rect(-800.0, 100.0), rect(300.0, 1100.0)];
        assert_eq!(current_section(&rects, 800.0), None);
    }

    #[test]
    fn jump_clamps_at_both_ends() {
        assert_eq!(jump_target(0, 6, JumpDirection::Up), None);
        assert_eq!(jump_target(5, 6, JumpDirection::Down), None);
        assert_eq!(jump_target(0, 6, JumpDirection::Down), Some(1));
        assert_eq!(jump_target(5, 6, JumpDirection::Up), Some(4));
    }

    #[test]
    fn boundary_fallback_by_intent() {
        assert_eq!(boundary_target(6, JumpDirection::Down), Some(0));
        assert_eq!(boundary_target(6, JumpDirection::Up), Some(5));
        assert_eq!(boundary_target(0, JumpDirection::Down), None);
    }
}
