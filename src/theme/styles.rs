//! Global CSS styles for the valuation widget.
//!
//! Two columns on wide screens (form left, result right), stacked on narrow
//! ones. Class names match the components in `valuecalc-ui`.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --ink: #2e3746;
  --accent: #2ab499;
  --track: #e5e7eb;
  --paper: #ffffff;
  --night: #000000;
  --radius: 15px;

  --font-sans: system-ui, -apple-system, 'Segoe UI', Roboto, sans-serif;

  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-4xl: 2.25rem;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: var(--font-sans);
  color: var(--ink);
  background: transparent;
}

/* === Layout === */
.widget {
  display: grid;
  grid-template-columns: 1fr;
  width: 1200px;
  max-width: 100%;
  margin: 0 auto;
}

.valuation-form {
  background: var(--paper);
  padding: 1.25rem;
  border-radius: var(--radius) var(--radius) 0 0;
}

.result-panel {
  display: flex;
  align-items: center;
  justify-content: center;
  background: var(--night);
  padding: 4rem 2rem;
  border-radius: 0 0 var(--radius) var(--radius);
}

@media (min-width: 768px) {
  .widget {
    grid-template-columns: 1fr 1fr;
  }

  .valuation-form {
    border-radius: var(--radius) 0 0 var(--radius);
  }

  .result-panel {
    border-radius: 0 var(--radius) var(--radius) 0;
  }
}

/* === Field Groups === */
.field-group + .field-group {
  border-top: 1px solid var(--track);
  margin-top: 0.75rem;
  padding-top: 0.75rem;
}

.field-group-header {
  display: flex;
  justify-content: space-between;
  align-items: center;
  font-weight: 700;
  margin-bottom: 1rem;
}

.field-label {
  font-size: var(--text-lg);
}

.field-caption {
  margin-top: 0.5rem;
  text-align: start;
}

/* === Number Input === */
.number-input {
  position: relative;
}

.number-input-field {
  width: 10rem;
  padding: 0.5rem 4rem 0.5rem 0.75rem;
  border: 1px solid var(--track);
  border-radius: 6px;
  font: inherit;
  color: inherit;
}

.number-input-field:focus {
  outline: 2px solid var(--accent);
  outline-offset: 1px;
}

.number-input-suffix {
  position: absolute;
  right: 0.5rem;
  top: 50%;
  transform: translateY(-50%);
  pointer-events: none;
}

/* === Range Slider === */
.range-slider {
  width: 100%;
  height: 0.5rem;
  appearance: none;
  border-radius: 9999px;
  background: linear-gradient(
    to right,
    var(--accent) 0%,
    var(--accent) var(--fill),
    var(--track) var(--fill),
    var(--track) 100%
  );
  cursor: pointer;
}

.range-slider::-webkit-slider-thumb {
  appearance: none;
  width: 1.25rem;
  height: 1.25rem;
  border-radius: 50%;
  background: var(--paper);
  border: 2px solid var(--accent);
}

.range-slider::-moz-range-thumb {
  width: 1.25rem;
  height: 1.25rem;
  border-radius: 50%;
  background: var(--paper);
  border: 2px solid var(--accent);
}

/* === Result === */
.result-card {
  width: 100%;
  padding: 0.75rem 0;
  background: var(--paper);
  border-left: 4px solid var(--accent);
  border-radius: 4px;
  text-align: center;
}

.result-amount {
  font-size: var(--text-4xl);
  font-weight: 600;
  color: var(--accent);
}
"#;
