use folio_core::pager::{WheelDecision, WheelPager};
use folio_core::sections::{boundary_target, current_section, jump_target, SectionRect, SECTION_IDS};

const VIEWPORT: f32 = 1000.0;

/// Stacked full-viewport sections with `visible` scrolled into view.
fn stacked_rects(count: usize, visible: usize) -> Vec<Option<SectionRect>> {
    (0..count)
        .map(|index| {
            let top = (index as f32 - visible as f32) * VIEWPORT;
            Some(SectionRect {
                top,
                bottom: top + VIEWPORT,
            })
        })
        .collect()
}

/// The browser controller's trigger path: feed the pager, resolve the
/// target section, engage the cool-down only when a jump starts.
fn drive(
    pager: &mut WheelPager,
    rects: &[Option<SectionRect>],
    delta_y: f32,
    now_ms: f64,
) -> Option<usize> {
    let direction = match pager.on_wheel(delta_y, now_ms) {
        WheelDecision::Trigger { direction } => direction,
        _ => return None,
    };
    let target = match current_section(rects, VIEWPORT) {
        Some(current) => jump_target(current, rects.len(), direction),
        None => boundary_target(rects.len(), direction),
    };
    if target.is_some() {
        pager.begin_jump();
    }
    target
}

#[test]
fn skills_scrolls_down_to_experience() {
    let mut pager = WheelPager::new();
    let rects = stacked_rects(SECTION_IDS.len(), 1);
    let target = drive(&mut pager, &rects, 150.0, 5000.0);
    assert_eq!(target, Some(2));
    assert_eq!(SECTION_IDS[2], "experience");
    assert!(pager.is_cooling());
}

#[test]
fn upward_gesture_at_first_section_is_a_no_op() {
    let mut pager = WheelPager::new();
    let rects = stacked_rects(SECTION_IDS.len(), 0);
    let target = drive(&mut pager, &rects, -150.0, 5000.0);
    assert_eq!(target, None);
    // No jump started, so the next gesture is not locked out.
    assert!(!pager.is_cooling());
}

#[test]
fn downward_gesture_at_last_section_is_a_no_op() {
    let mut pager = WheelPager::new();
    let last = SECTION_IDS.len() - 1;
    let rects = stacked_rects(SECTION_IDS.len(), last);
    assert_eq!(drive(&mut pager, &rects, 150.0, 5000.0), None);
    assert!(!pager.is_cooling());
}

#[test]
fn rapid_gesture_produces_exactly_one_jump() {
    let mut pager = WheelPager::new();
    let rects = stacked_rects(SECTION_IDS.len(), 1);
    let mut jumps = 0;
    for event in 0..10 {
        let now = 5000.0 + event as f64 * 20.0;
        if drive(&mut pager, &rects, 50.0, now).is_some() {
            jumps += 1;
        }
    }
    assert_eq!(jumps, 1);
}

#[test]
fn single_large_delta_triggers_before_the_interval() {
    let mut pager = WheelPager::new();
    let rects = stacked_rects(SECTION_IDS.len(), 1);
    // Warm the interval gate so only the threshold arm can fire.
    assert!(drive(&mut pager, &rects, 150.0, 5000.0).is_some());
    pager.end_cooldown();
    // 200ms later, well inside the 1000ms window: a slow fat trackpad
    // swing still jumps on accumulated delta alone.
    assert!(drive(&mut pager, &rects, 120.0, 5200.0).is_some());
}

#[test]
fn trickle_triggers_once_the_interval_lapses() {
    let mut pager = WheelPager::new();
    let rects = stacked_rects(SECTION_IDS.len(), 1);
    assert!(drive(&mut pager, &rects, 150.0, 5000.0).is_some());
    pager.end_cooldown();
    assert_eq!(drive(&mut pager, &rects, 10.0, 5300.0), None);
    assert_eq!(drive(&mut pager, &rects, 10.0, 5600.0), None);
    // Accumulator never crossed 100, but the window since the last trigger
    // has; the OR-gate arms the jump.
    assert!(drive(&mut pager, &rects, 10.0, 6100.0).is_some());
}

#[test]
fn boundary_fallback_when_nothing_is_visible() {
    let mut pager = WheelPager::new();
    // Every section measured but none crossing the band.
    let rects: Vec<Option<SectionRect>> = (0..SECTION_IDS.len())
        .map(|index| {
            Some(SectionRect {
                top: 2000.0 + index as f32 * VIEWPORT,
                bottom: 3000.0 + index as f32 * VIEWPORT,
            })
        })
        .collect();
    assert_eq!(drive(&mut pager, &rects, 150.0, 5000.0), Some(0));
    pager.end_cooldown();
    assert_eq!(
        drive(&mut pager, &rects, -150.0, 7000.0),
        Some(SECTION_IDS.len() - 1)
    );
}

#[test]
fn missing_elements_fall_back_to_boundary_jump() {
    let mut pager = WheelPager::new();
    let rects: Vec<Option<SectionRect>> = vec![None; SECTION_IDS.len()];
    assert_eq!(drive(&mut pager, &rects, 150.0, 5000.0), Some(0));
}
