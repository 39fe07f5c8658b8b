// File: crates/plot-core/src/axis.rs
// Summary: Axis model with label and range.

#[derive(Clone, Debug)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max }
    }

    pub fn default_x() -> Self {
        Self::new("Index", 0.0, 24.0)
    }

    pub fn default_y() -> Self {
        Self::new("Value", 0.0, 1000.0)
    }

    pub fn span(&self) -> f64 {
        (self.max - self.min).max(1e-9)
    }
}
