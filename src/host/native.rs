//! Desktop preview host: there is no parent frame, so resize messages are
//! written to the log instead of posted.

use std::time::Duration;

use dioxus::prelude::*;
use valuecalc_core::{HeightReporter, HeightSink, HostConfig, ResizeMessage};

use super::HostResult;

/// Sink that logs each resize message as the JSON a host would receive
pub struct LogSink {
    target_origin: String,
}

impl LogSink {
    pub fn new(config: &HostConfig) -> Self {
        Self {
            target_origin: config.target_origin.clone(),
        }
    }
}

impl HeightSink for LogSink {
    fn send(&self, message: &ResizeMessage) {
        match message.to_json() {
            Ok(json) => tracing::info!(target_origin = %self.target_origin, "postMessage {}", json),
            Err(e) => tracing::warn!("Failed to encode resize message: {}", e),
        }
    }
}

/// Logical height of the preview window's content area
fn window_height() -> u32 {
    let desktop = dioxus::desktop::window();
    let size = desktop.window.inner_size();
    size.to_logical::<u32>(desktop.window.scale_factor()).height
}

/// Preview counterpart of the browser observer.
///
/// A webview gives no synchronous access to the DOM, so only the settle
/// report is produced, using the window height.
pub struct BodyObserver {
    settle_task: Task,
}

impl BodyObserver {
    pub fn attach(config: &HostConfig) -> HostResult<Self> {
        let mut reporter = HeightReporter::new(config, LogSink::new(config));
        let delay = Duration::from_millis(config.settle_delay_ms);

        let settle_task = spawn(async move {
            tokio::time::sleep(delay).await;
            reporter.on_settled(window_height());
        });

        tracing::info!(delay_ms = config.settle_delay_ms, "Preview host: resize messages are logged");

        Ok(Self { settle_task })
    }
}

impl Drop for BodyObserver {
    fn drop(&mut self) {
        self.settle_task.cancel();
    }
}
