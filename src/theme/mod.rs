//! Styling for the valuation widget.

mod styles;

pub use styles::GLOBAL_STYLES;
