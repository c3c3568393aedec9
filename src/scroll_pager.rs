use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use gloo::timers::callback::Timeout;
use js_sys::Date;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Event, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, WheelEvent,
};
use yew::prelude::*;

use folio_core::pager::{WheelDecision, WheelPager, JUMP_COOLDOWN_MS};
use folio_core::sections::{boundary_target, current_section, jump_target, SectionRect};

/// Any overlay carrying this marker owns the wheel while it is open.
pub(crate) const MODAL_MARKER_SELECTOR: &str = "[data-modal=\"true\"]";

fn measure_sections(document: &Document, section_ids: &[&str]) -> Vec<Option<SectionRect>> {
    section_ids
        .iter()
        .map(|id| {
            document.get_element_by_id(id).map(|element| {
                let rect = element.get_bounding_client_rect();
                SectionRect {
                    top: rect.top() as f32,
                    bottom: rect.bottom() as f32,
                }
            })
        })
        .collect()
}

fn scroll_to_section(document: &Document, id: &str) {
    let Some(element) = document.get_element_by_id(id) else {
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

fn modal_open(document: &Document) -> bool {
    document
        .query_selector(MODAL_MARKER_SELECTOR)
        .ok()
        .flatten()
        .is_some()
}

/// Replaces free wheel scrolling with discrete jumps between the given
/// sections for the lifetime of the calling component. Wheel events are
/// passed through untouched while a modal overlay is open.
#[hook]
pub(crate) fn use_section_pager(section_ids: &'static [&'static str]) {
    use_effect_with((), move |_| {
        let window = web_sys::window().expect("window available");
        let document = window.document().expect("document available");
        let pager = Rc::new(RefCell::new(WheelPager::new()));
        let cooldown: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));

        let wheel_window = window.clone();
        let wheel_pager = Rc::clone(&pager);
        let wheel_cooldown = Rc::clone(&cooldown);
        let listener = EventListener::new_with_options(
            &window,
            "wheel",
            EventListenerOptions {
                phase: EventListenerPhase::Bubble,
                passive: false,
            },
            move |event: &Event| {
                let Some(event) = event.dyn_ref::<WheelEvent>() else {
                    return;
                };
                if modal_open(&document) {
                    return;
                }
                event.prevent_default();
                let decision = wheel_pager
                    .borrow_mut()
                    .on_wheel(event.delta_y() as f32, Date::now());
                let WheelDecision::Trigger { direction } = decision else {
                    return;
                };
                let rects = measure_sections(&document, section_ids);
                let viewport_height = wheel_window
                    .inner_height()
                    .ok()
                    .and_then(|value| value.as_f64())
                    .unwrap_or(0.0) as f32;
                let target = match current_section(&rects, viewport_height) {
                    Some(index) => jump_target(index, section_ids.len(), direction),
                    None => boundary_target(section_ids.len(), direction),
                };
                // Clamped at a boundary: no jump, and the next gesture is
                // free to trigger again.
                let Some(target) = target else {
                    return;
                };
                wheel_pager.borrow_mut().begin_jump();
                scroll_to_section(&document, section_ids[target]);
                let timer_pager = Rc::clone(&wheel_pager);
                let timer = Timeout::new(JUMP_COOLDOWN_MS, move || {
                    timer_pager.borrow_mut().end_cooldown();
                });
                *wheel_cooldown.borrow_mut() = Some(timer);
            },
        );
        move || {
            drop(listener);
            // Dropping a pending timeout cancels it.
            cooldown.borrow_mut().take();
        }
    });
}
