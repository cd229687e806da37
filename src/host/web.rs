//! Browser host bridge: `MutationObserver` on `<body>` plus `postMessage`
//! to the parent frame.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::timers::callback::Timeout;
use valuecalc_core::{HeightReporter, HeightSink, HostConfig, ResizeMessage};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MutationObserver, MutationObserverInit};

use super::{HostError, HostResult};

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, MutationObserver)>;

fn js_error(err: JsValue) -> HostError {
    HostError::Js(format!("{:?}", err))
}

fn body() -> HostResult<HtmlElement> {
    web_sys::window()
        .ok_or(HostError::NoWindow)?
        .document()
        .ok_or(HostError::NoBody)?
        .body()
        .ok_or(HostError::NoBody)
}

/// Current `document.body.scrollHeight`
fn body_height() -> HostResult<u32> {
    let height = body()?.scroll_height();
    Ok(u32::try_from(height).unwrap_or(0))
}

/// Sink that posts resize messages to `window.parent`
pub struct ParentWindow {
    target_origin: String,
}

impl ParentWindow {
    pub fn new(config: &HostConfig) -> Self {
        Self {
            target_origin: config.target_origin.clone(),
        }
    }

    fn post(&self, message: &ResizeMessage) -> HostResult<()> {
        let parent = web_sys::window()
            .ok_or(HostError::NoWindow)?
            .parent()
            .map_err(js_error)?
            .ok_or(HostError::NoParent)?;

        // Post a plain object, not a string, so hosts can read `eventName` directly
        let json = message.to_json()?;
        let value = js_sys::JSON::parse(&json).map_err(js_error)?;
        parent
            .post_message(&value, &self.target_origin)
            .map_err(js_error)
    }
}

impl HeightSink for ParentWindow {
    fn send(&self, message: &ResizeMessage) {
        if let Err(e) = self.post(message) {
            tracing::warn!("Failed to post resize message: {}", e);
        }
    }
}

/// Watches `<body>` for mutations and reports height changes.
///
/// Also schedules a one-shot report after `settle_delay_ms` to catch layout
/// changes no mutation announces (web fonts, images). Dropping the observer
/// disconnects it and cancels a pending settle report.
pub struct BodyObserver {
    observer: MutationObserver,
    _callback: ObserverCallback,
    _settle: Timeout,
}

impl BodyObserver {
    pub fn attach(config: &HostConfig) -> HostResult<Self> {
        let body = body()?;
        let reporter = Rc::new(RefCell::new(HeightReporter::new(
            config,
            ParentWindow::new(config),
        )));

        let callback: ObserverCallback = {
            let reporter = reporter.clone();
            Closure::new(move |_records: js_sys::Array, _observer: MutationObserver| {
                match body_height() {
                    Ok(height) => {
                        reporter.borrow_mut().on_mutation(height);
                    }
                    Err(e) => tracing::warn!("Could not read body height: {}", e),
                }
            })
        };

        let observer =
            MutationObserver::new(callback.as_ref().unchecked_ref()).map_err(js_error)?;
        let options = MutationObserverInit::new();
        options.set_subtree(true);
        options.set_attributes(true);
        options.set_child_list(true);
        options.set_character_data(true);
        observer
            .observe_with_options(&body, &options)
            .map_err(js_error)?;

        let delay = u32::try_from(config.settle_delay_ms).unwrap_or(u32::MAX);
        let settle = Timeout::new(delay, move || match body_height() {
            Ok(height) => reporter.borrow_mut().on_settled(height),
            Err(e) => tracing::warn!("Could not read body height: {}", e),
        });

        tracing::info!(delay_ms = delay, "Observing body for height changes");

        Ok(Self {
            observer,
            _callback: callback,
            _settle: settle,
        })
    }
}

impl Drop for BodyObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
