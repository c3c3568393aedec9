//! Offline cache worker. Runs in the service-worker scope, isolated from
//! the page: cache-first with network fallback for same-origin GETs, a
//! versioned generation swept on activation, and the cached shell as a
//! last resort for failed document navigations.

use std::rc::Rc;

use gloo::console;
use gloo::events::EventListener;
use js_sys::{Array, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{future_to_promise, spawn_local, JsFuture};
use web_sys::{
    Cache, ExtendableEvent, ExtendableMessageEvent, FetchEvent, NotificationEvent, PushEvent,
    Request, RequestDestination, Response, ResponseType, ServiceWorkerGlobalScope, SyncEvent,
};

use folio_core::cache::{
    generation_name, offline_fallback, should_intercept, should_store, stale_generations,
    ResponseKind, PRECACHE_PATHS,
};

const CACHE_VERSION: &str = "1.0.0";
const SKIP_WAITING_MSG: &str = "SKIP_WAITING";
const CONTACT_SYNC_TAG: &str = "contact-form";
const EXPLORE_ACTION: &str = "explore";

/// Cache identity and precache allow-list for this worker build, resolved
/// once at startup and shared by every handler.
struct WorkerConfig {
    cache_name: String,
    precache: &'static [&'static str],
}

impl WorkerConfig {
    fn current() -> Self {
        Self {
            cache_name: generation_name(CACHE_VERSION),
            precache: &PRECACHE_PATHS,
        }
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    let scope: ServiceWorkerGlobalScope = js_sys::global()
        .dyn_into()
        .map_err(|_| JsValue::from_str("not a service worker scope"))?;
    let config = Rc::new(WorkerConfig::current());
    register_lifecycle(&scope, &config);
    register_fetch(&scope, &config);
    register_message(&scope);
    register_stubs(&scope);
    Ok(())
}

fn register_lifecycle(scope: &ServiceWorkerGlobalScope, config: &Rc<WorkerConfig>) {
    let install_scope = scope.clone();
    let install_config = Rc::clone(config);
    EventListener::new(scope, "install", move |event| {
        console::log!("service worker: install");
        let Some(event) = event.dyn_ref::<ExtendableEvent>() else {
            return;
        };
        let scope = install_scope.clone();
        let config = Rc::clone(&install_config);
        let work = future_to_promise(async move {
            if let Err(error) = precache_shell(&scope, &config).await {
                console::error!("service worker: precache failed", js_err(&error));
            }
            Ok(JsValue::UNDEFINED)
        });
        let _ = event.wait_until(&work);
        // Become the active worker as soon as install settles instead of
        // waiting for every open tab to close.
        let _ = install_scope.skip_waiting();
    })
    .forget();

    let activate_scope = scope.clone();
    let activate_config = Rc::clone(config);
    EventListener::new(scope, "activate", move |event| {
        console::log!("service worker: activate");
        let Some(event) = event.dyn_ref::<ExtendableEvent>() else {
            return;
        };
        let scope = activate_scope.clone();
        let config = Rc::clone(&activate_config);
        let work = future_to_promise(async move {
            if let Err(error) = sweep_and_claim(&scope, &config).await {
                console::error!("service worker: activate failed", js_err(&error));
            }
            Ok(JsValue::UNDEFINED)
        });
        let _ = event.wait_until(&work);
    })
    .forget();
}

fn register_fetch(scope: &ServiceWorkerGlobalScope, config: &Rc<WorkerConfig>) {
    let fetch_scope = scope.clone();
    let fetch_config = Rc::clone(config);
    EventListener::new(scope, "fetch", move |event| {
        let Some(event) = event.dyn_ref::<FetchEvent>() else {
            return;
        };
        let request = event.request();
        let origin = fetch_scope.location().origin();
        if !should_intercept(&request.method(), &request.url(), &origin) {
            // Not ours: let the browser's default network handling run.
            return;
        }
        let response = future_to_promise(respond(
            fetch_scope.clone(),
            Rc::clone(&fetch_config),
            request,
        ));
        if event.respond_with(&response).is_err() {
            console::warn!("service worker: respond_with rejected");
        }
    })
    .forget();
}

fn register_message(scope: &ServiceWorkerGlobalScope) {
    let message_scope = scope.clone();
    EventListener::new(scope, "message", move |event| {
        let Some(event) = event.dyn_ref::<ExtendableMessageEvent>() else {
            return;
        };
        let kind = Reflect::get(&event.data(), &JsValue::from_str("type"))
            .ok()
            .and_then(|value| value.as_string());
        if kind.as_deref() == Some(SKIP_WAITING_MSG) {
            console::log!("service worker: skip waiting requested by page");
            let _ = message_scope.skip_waiting();
        }
    })
    .forget();
}

/// Background sync and push are acknowledged but do nothing yet; a queued
/// contact-form flush would hang off the sync tag.
fn register_stubs(scope: &ServiceWorkerGlobalScope) {
    EventListener::new(scope, "sync", move |event| {
        let Some(event) = event.dyn_ref::<SyncEvent>() else {
            return;
        };
        let tag = event.tag();
        console::log!("service worker: sync", tag.clone());
        if tag == CONTACT_SYNC_TAG {
            let work = future_to_promise(async move { Ok(JsValue::UNDEFINED) });
            let _ = event.wait_until(&work);
        }
    })
    .forget();

    EventListener::new(scope, "push", move |event| {
        let Some(event) = event.dyn_ref::<PushEvent>() else {
            return;
        };
        console::log!("service worker: push received");
        let work = future_to_promise(async move { Ok(JsValue::UNDEFINED) });
        let _ = event.wait_until(&work);
    })
    .forget();

    let click_scope = scope.clone();
    EventListener::new(scope, "notificationclick", move |event| {
        let Some(event) = event.dyn_ref::<NotificationEvent>() else {
            return;
        };
        event.notification().close();
        if event.action() == EXPLORE_ACTION {
            let open = click_scope.clients().open_window("/");
            let work = future_to_promise(async move {
                if JsFuture::from(open).await.is_err() {
                    console::warn!("service worker: open window failed");
                }
                Ok(JsValue::UNDEFINED)
            });
            let _ = event.wait_until(&work);
        }
    })
    .forget();
}

async fn open_generation(
    scope: &ServiceWorkerGlobalScope,
    name: &str,
) -> Result<Cache, JsValue> {
    let caches = scope.caches()?;
    let cache = JsFuture::from(caches.open(name)).await?;
    cache
        .dyn_into::<Cache>()
        .map_err(|_| JsValue::from_str("cache storage returned a non-cache"))
}

async fn precache_shell(
    scope: &ServiceWorkerGlobalScope,
    config: &WorkerConfig,
) -> Result<(), JsValue> {
    let cache = open_generation(scope, &config.cache_name).await?;
    let paths = Array::new();
    for path in config.precache {
        paths.push(&JsValue::from_str(path));
    }
    let requests = JsValue::from(paths);
    if let Err(error) = JsFuture::from(cache.add_all_with_str_sequence(&requests)).await {
        // A half-filled generation must not stay current; drop it and let
        // the next install retry from scratch.
        let caches = scope.caches()?;
        let _ = JsFuture::from(caches.delete(&config.cache_name)).await;
        return Err(error);
    }
    console::log!("service worker: shell cached", config.cache_name.clone());
    Ok(())
}

async fn sweep_and_claim(
    scope: &ServiceWorkerGlobalScope,
    config: &WorkerConfig,
) -> Result<(), JsValue> {
    let caches = scope.caches()?;
    let keys: Array = JsFuture::from(caches.keys()).await?.dyn_into()?;
    let existing: Vec<String> = keys.iter().filter_map(|key| key.as_string()).collect();
    for stale in stale_generations(&existing, &config.cache_name) {
        console::log!("service worker: deleting stale generation", stale);
        if JsFuture::from(caches.delete(stale)).await.is_err() {
            // Best effort; a stuck generation is retried on the next
            // activation at the earliest.
            console::warn!("service worker: failed to delete generation", stale);
        }
    }
    JsFuture::from(scope.clients().claim()).await?;
    Ok(())
}

async fn respond(
    scope: ServiceWorkerGlobalScope,
    config: Rc<WorkerConfig>,
    request: Request,
) -> Result<JsValue, JsValue> {
    let cache = open_generation(&scope, &config.cache_name).await?;
    match JsFuture::from(cache.match_with_request(&request)).await {
        Ok(hit) if hit.is_instance_of::<Response>() => return Ok(hit),
        Ok(_) => {}
        Err(error) => {
            console::warn!("service worker: cache lookup failed", js_err(&error));
        }
    }
    match JsFuture::from(scope.fetch_with_request(&request)).await {
        Ok(fetched) => {
            let response: Response = fetched.dyn_into()?;
            store_copy(&cache, &request, &response);
            Ok(response.into())
        }
        Err(error) => {
            let navigation = request.destination() == RequestDestination::Document;
            if let Some(path) = offline_fallback(navigation) {
                if let Ok(page) = JsFuture::from(cache.match_with_str(path)).await {
                    if page.is_instance_of::<Response>() {
                        console::log!("service worker: offline fallback for", request.url());
                        return Ok(page);
                    }
                }
            }
            Err(error)
        }
    }
}

/// Fire-and-forget write of a cacheable response copy; a failed write must
/// never fail the response already on its way to the page.
fn store_copy(cache: &Cache, request: &Request, response: &Response) {
    if !should_store(response.status(), response_kind(response.type_())) {
        return;
    }
    let copy = match response.clone() {
        Ok(copy) => copy,
        Err(error) => {
            console::warn!("service worker: response clone failed", js_err(&error));
            return;
        }
    };
    let put = cache.put_with_request(request, &copy);
    let url = request.url();
    spawn_local(async move {
        if JsFuture::from(put).await.is_err() {
            console::warn!("service worker: cache write failed", url);
        }
    });
}

fn response_kind(kind: ResponseType) -> ResponseKind {
    match kind {
        ResponseType::Basic => ResponseKind::Basic,
        ResponseType::Cors => ResponseKind::Cors,
        ResponseType::Opaque => ResponseKind::Opaque,
        ResponseType::Opaqueredirect => ResponseKind::OpaqueRedirect,
        ResponseType::Error => ResponseKind::Error,
        _ => ResponseKind::Default,
    }
}

fn js_err(error: &JsValue) -> String {
    if let Some(value) = error.as_string() {
        return value;
    }
    if let Ok(json) = js_sys::JSON::stringify(error) {
        if let Some(value) = json.as_string() {
            return value;
        }
    }
    "js error".to_string()
}
