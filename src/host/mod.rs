//! Bridge between the widget and the page embedding it.
//!
//! In the browser the widget watches its own `<body>` and posts resize
//! messages to the parent frame. The desktop preview has no parent frame, so
//! it logs the messages it would have sent.
//!
//! ## Usage
//!
//! ```ignore
//! #[component]
//! fn Widget() -> Element {
//!     use_height_reporting(HostConfig::default());
//!     rsx! { /* ... */ }
//! }
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use thiserror::Error;
use valuecalc_core::{CalcError, HostConfig};

#[cfg(not(target_arch = "wasm32"))]
mod native;
#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(not(target_arch = "wasm32"))]
pub use native::{BodyObserver, LogSink};
#[cfg(target_arch = "wasm32")]
pub use web::{BodyObserver, ParentWindow};

/// Failures of the host bridge. Logged, never shown to the user.
#[derive(Error, Debug)]
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
pub enum HostError {
    /// No global `window` (not running in a browser)
    #[error("no window available")]
    NoWindow,

    /// The document has no `<body>` yet
    #[error("document has no body")]
    NoBody,

    /// The widget is not framed, or the parent is inaccessible
    #[error("no parent window")]
    NoParent,

    /// A DOM call threw
    #[error("JavaScript error: {0}")]
    Js(String),

    /// The resize message could not be encoded
    #[error(transparent)]
    Encode(#[from] CalcError),
}

pub type HostResult<T> = Result<T, HostError>;

/// Report the widget's rendered height to the host for as long as the
/// calling component is mounted.
///
/// Attaches a [`BodyObserver`] after the first render and detaches it on
/// unmount. If attaching fails the widget keeps working without resize
/// messages.
pub fn use_height_reporting(config: HostConfig) {
    let observer: Rc<RefCell<Option<BodyObserver>>> = use_hook(|| Rc::new(RefCell::new(None)));

    use_effect({
        let observer = observer.clone();
        move || {
            if observer.borrow().is_some() {
                return;
            }
            match BodyObserver::attach(&config) {
                Ok(attached) => {
                    tracing::debug!("Height reporting attached");
                    *observer.borrow_mut() = Some(attached);
                }
                Err(e) => tracing::warn!("Height reporting disabled: {}", e),
            }
        }
    });

    use_drop(move || {
        if observer.borrow_mut().take().is_some() {
            tracing::debug!("Height reporting detached");
        }
    });
}
