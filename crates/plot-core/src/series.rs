// File: crates/plot-core/src/series.rs
// Summary: Series and reference-line models for the line chart.

/// A named polyline. Point order is draw order.
#[derive(Clone, Debug)]
pub struct Series {
    pub name: String,
    pub data_xy: Vec<(f64, f64)>,
    pub markers: bool,
}

impl Series {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), data_xy: Vec::new(), markers: false }
    }

    pub fn with_data(name: impl Into<String>, data: Vec<(f64, f64)>) -> Self {
        Self { name: name.into(), data_xy: data, markers: false }
    }

    /// Integer values plotted against their draw index.
    pub fn from_values(name: impl Into<String>, values: &[i64]) -> Self {
        let data = values
            .iter()
            .enumerate()
            .map(|(i, &v)| (i as f64, v as f64))
            .collect();
        Self::with_data(name, data)
    }

    pub fn with_markers(mut self) -> Self {
        self.markers = true;
        self
    }
}

/// Which theme color a reference line takes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RefLineRole {
    Max,
    Min,
}

/// Dashed horizontal guide spanning the full x range.
#[derive(Clone, Debug)]
pub struct RefLine {
    pub label: String,
    pub y: f64,
    pub role: RefLineRole,
}

impl RefLine {
    pub fn new(label: impl Into<String>, y: f64, role: RefLineRole) -> Self {
        Self { label: label.into(), y, role }
    }
}
