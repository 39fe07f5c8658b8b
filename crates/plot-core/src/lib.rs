// File: crates/plot-core/src/lib.rs
// Summary: Core library entry point; exports sampling and chart rendering API.

pub mod params;
pub mod sample;
pub mod chart;
pub mod series;
pub mod axis;
pub mod grid;
pub mod types;
pub mod geometry;
pub mod theme;
pub mod text;

pub use params::{ParameterError, Parameters};
pub use sample::{draw_sample, generate_chart_spec, ChartSpec};
pub use chart::{Chart, RenderOptions};
pub use series::{RefLine, RefLineRole, Series};
pub use axis::Axis;
pub use theme::Theme;
pub use text::TextShaper;
