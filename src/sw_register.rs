use gloo::console;
use gloo::events::EventListener;
use js_sys::{Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::ServiceWorkerRegistration;

const WORKER_URL: &str = "/sw.js";
const SKIP_WAITING_MSG: &str = "SKIP_WAITING";

/// Registration is deferred until the window load event.
pub(crate) fn register_on_load() {
    let Some(window) = web_sys::window() else {
        return;
    };
    EventListener::once(&window, "load", move |_| register()).forget();
}

fn register() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let container = window.navigator().service_worker();
    spawn_local(async move {
        match JsFuture::from(container.register(WORKER_URL)).await {
            Ok(value) => {
                console::log!("service worker: registered");
                if let Ok(registration) = value.dyn_into::<ServiceWorkerRegistration>() {
                    request_immediate_activation(&registration);
                }
            }
            Err(error) => {
                console::warn!("service worker: registration failed", error);
            }
        }
    });
}

/// Page side of the update protocol: a worker stuck in the waiting phase
/// is told to take over instead of waiting for every tab to close.
fn request_immediate_activation(registration: &ServiceWorkerRegistration) {
    let Some(waiting) = registration.waiting() else {
        return;
    };
    let message = Object::new();
    if Reflect::set(
        &message,
        &JsValue::from_str("type"),
        &JsValue::from_str(SKIP_WAITING_MSG),
    )
    .is_err()
    {
        return;
    }
    if waiting.post_message(&message).is_err() {
        console::warn!("service worker: skip waiting message failed");
    }
}
