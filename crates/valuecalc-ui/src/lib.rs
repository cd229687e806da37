//! Property Value Increase Calculator UI Components
//!
//! Dioxus components for the embeddable valuation widget. Components are
//! presentational: they render what they are given and report edits through
//! event handlers. Form state lives with the caller.
//!
//! ## Palette
//!
//! - **Ink (#2e3746)**: Body text
//! - **Accent green (#2ab499)**: Result highlight, slider track
//! - **Black (#000000)**: Result column background
//! - **White (#ffffff)**: Form column and result card

pub mod components;

pub use components::*;
