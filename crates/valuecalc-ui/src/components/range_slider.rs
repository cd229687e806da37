//! Range Slider
//!
//! Native `<input type="range">` styled with the accent track. Readings that
//! fail to parse are dropped.

use dioxus::prelude::*;

/// Properties for the RangeSlider component
#[derive(Clone, PartialEq, Props)]
pub struct RangeSliderProps {
    /// Form control name
    pub name: String,
    /// Current thumb position
    pub value: f64,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    /// Handler called with the slider reading while dragging
    pub oninput: EventHandler<f64>,
}

#[component]
pub fn RangeSlider(props: RangeSliderProps) -> Element {
    // Percentage of the track that is filled, for the accent gradient
    let fill = slider_fill(props.value, props.min, props.max);

    rsx! {
        input {
            class: "range-slider",
            name: "{props.name}",
            r#type: "range",
            min: "{props.min}",
            max: "{props.max}",
            step: "{props.step}",
            value: "{props.value}",
            style: "--fill: {fill}%",
            oninput: move |e| match e.value().parse::<f64>() {
                Ok(reading) => props.oninput.call(reading),
                Err(err) => tracing::warn!("Ignoring slider reading {:?}: {}", e.value(), err),
            },
        }
    }
}

/// Share of the track left of the thumb, in percent, clamped to 0..=100
fn slider_fill(value: f64, min: f64, max: f64) -> f64 {
    if max <= min || !value.is_finite() {
        return 0.0;
    }
    ((value - min) / (max - min) * 100.0).clamp(0.0, 100.0)
}
