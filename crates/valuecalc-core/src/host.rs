//! Height reporting to the embedding page.
//!
//! The widget runs inside an iframe whose host needs to size the frame to
//! the widget's content. Whenever the rendered body height changes the widget
//! posts a message to the parent window:
//!
//! ```json
//! { "eventName": "SET_HEIGHT", "payload": { "height": 850 } }
//! ```
//!
//! [`HeightTracker`] decides *when* to send; a [`HeightSink`] decides *how*.
//! The browser sink lives in the widget binary, next to the DOM observer.

use serde::{Deserialize, Serialize};

use crate::error::CalcResult;

/// Event name the host listens for
pub const SET_HEIGHT: &str = "SET_HEIGHT";

/// Host messaging settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    /// `eventName` of outbound resize messages
    pub event_name: String,
    /// `targetOrigin` passed to `postMessage`
    pub target_origin: String,
    /// Delay before the one-shot fallback report, in milliseconds
    pub settle_delay_ms: u64,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            event_name: SET_HEIGHT.to_string(),
            target_origin: "*".to_string(),
            settle_delay_ms: 1000,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeightPayload {
    pub height: u32,
}

/// A resize notification for the host page
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResizeMessage {
    pub event_name: String,
    pub payload: HeightPayload,
}

impl ResizeMessage {
    pub fn new(event_name: impl Into<String>, height: u32) -> Self {
        Self {
            event_name: event_name.into(),
            payload: HeightPayload { height },
        }
    }

    pub fn height(&self) -> u32 {
        self.payload.height
    }

    pub fn to_json(&self) -> CalcResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Tracks the last reported height and decides when a new report is due
#[derive(Clone, Debug)]
pub struct HeightTracker {
    event_name: String,
    last_reported: Option<u32>,
}

impl HeightTracker {
    pub fn new(config: &HostConfig) -> Self {
        Self {
            event_name: config.event_name.clone(),
            last_reported: None,
        }
    }

    pub fn last_reported(&self) -> Option<u32> {
        self.last_reported
    }

    /// Called after a DOM mutation. Returns a message only if the height is
    /// non-zero and differs from the last one reported.
    pub fn observe(&mut self, height: u32) -> Option<ResizeMessage> {
        if height == 0 || self.last_reported == Some(height) {
            return None;
        }
        self.last_reported = Some(height);
        Some(ResizeMessage::new(self.event_name.clone(), height))
    }

    /// Called once after layout has settled. Always reports.
    pub fn settle(&mut self, height: u32) -> ResizeMessage {
        self.last_reported = Some(height);
        ResizeMessage::new(self.event_name.clone(), height)
    }
}

/// Destination for resize messages. Delivery is fire-and-forget.
pub trait HeightSink {
    fn send(&self, message: &ResizeMessage);
}

/// A [`HeightTracker`] wired to a [`HeightSink`]
pub struct HeightReporter<S: HeightSink> {
    tracker: HeightTracker,
    sink: S,
}

impl<S: HeightSink> HeightReporter<S> {
    pub fn new(config: &HostConfig, sink: S) -> Self {
        Self {
            tracker: HeightTracker::new(config),
            sink,
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Report `height` if it changed. Returns whether a message was sent.
    pub fn on_mutation(&mut self, height: u32) -> bool {
        match self.tracker.observe(height) {
            Some(message) => {
                tracing::debug!(height, "body height changed");
                self.sink.send(&message);
                true
            }
            None => false,
        }
    }

    /// Unconditionally report `height` once layout has settled
    pub fn on_settled(&mut self, height: u32) {
        let message = self.tracker.settle(height);
        tracing::debug!(height, "settled height report");
        self.sink.send(&message);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    #[derive(Default)]
    struct RecordingSink(RefCell<Vec<ResizeMessage>>);

    impl HeightSink for RecordingSink {
        fn send(&self, message: &ResizeMessage) {
            self.0.borrow_mut().push(message.clone());
        }
    }

    #[test]
    fn message_wire_shape() {
        let json = ResizeMessage::new(SET_HEIGHT, 850).to_json().unwrap();
        assert_eq!(json, r#"{"eventName":"SET_HEIGHT","payload":{"height":850}}"#);
    }

    #[test]
    fn config_defaults() {
        let config = HostConfig::default();
        assert_eq!(config.event_name, "SET_HEIGHT");
        assert_eq!(config.target_origin, "*");
        assert_eq!(config.settle_delay_ms, 1000);
    }

    #[test]
    fn config_fills_missing_keys() {
        let config: HostConfig = serde_json::from_str(r#"{"settle_delay_ms":250}"#).unwrap();
        assert_eq!(config.settle_delay_ms, 250);
        assert_eq!(config.target_origin, "*");
    }

    #[test]
    fn tracker_ignores_zero_and_repeats() {
        let mut tracker = HeightTracker::new(&HostConfig::default());
        assert!(tracker.observe(0).is_none());
        assert_eq!(tracker.observe(800).map(|m| m.height()), Some(800));
        assert!(tracker.observe(800).is_none());
        assert_eq!(tracker.last_reported(), Some(800));
    }

    #[test]
    fn settle_always_reports_and_records() {
        let mut tracker = HeightTracker::new(&HostConfig::default());
        assert_eq!(tracker.observe(800).map(|m| m.height()), Some(800));
        assert_eq!(tracker.settle(800).height(), 800);
        assert!(tracker.observe(800).is_none());
    }

    #[test]
    fn reporter_forwards_to_sink() {
        let mut reporter = HeightReporter::new(&HostConfig::default(), RecordingSink::default());
        assert!(reporter.on_mutation(600));
        assert!(!reporter.on_mutation(600));
        reporter.on_settled(600);

        let sent = reporter.sink().0.borrow();
        assert_eq!(sent.len(), 2);
        assert!(sent.iter().all(|m| m.event_name == SET_HEIGHT && m.height() == 600));
    }

    #[test]
    fn custom_event_name() {
        let config = HostConfig {
            event_name: "RESIZE".to_string(),
            ..HostConfig::default()
        };
        let mut tracker = HeightTracker::new(&config);
        assert_eq!(tracker.settle(10).event_name, "RESIZE");
    }
}
