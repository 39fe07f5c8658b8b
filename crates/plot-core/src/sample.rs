// File: crates/plot-core/src/sample.rs
// Summary: Uniform sampling over the progression and derived statistics.

use rand::Rng;

use crate::axis::Axis;
use crate::chart::Chart;
use crate::params::{ParameterError, Parameters};
use crate::series::{RefLine, RefLineRole, Series};

/// One generated sample plus the statistics shown on the chart.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChartSpec {
    pub values: Vec<i64>,
    pub max: i64,
    pub min: i64,
    pub difference: i64,
}

/// `count` independent uniform draws with replacement. Draw order is
/// display order; repeats are expected.
pub fn draw_sample(params: &Parameters, rng: &mut impl Rng) -> Vec<i64> {
    let len = params.progression_len();
    (0..params.count)
        .map(|_| params.value_at(rng.random_range(0..len)))
        .collect()
}

impl ChartSpec {
    pub fn generate(params: &Parameters, rng: &mut impl Rng) -> Self {
        let values = draw_sample(params, rng);
        // count >= 1, so the sample is never empty
        let mut max = values[0];
        let mut min = values[0];
        for &v in &values[1..] {
            max = max.max(v);
            min = min.min(v);
        }
        Self { values, max, min, difference: max - min }
    }

    /// Build the renderable chart: the sample as a marked line over its
    /// draw index, dashed guides at max and min, difference in the title.
    pub fn to_chart(&self) -> Chart {
        let mut chart = Chart::new();
        chart.title = format!("Difference: {}", self.difference);
        chart.x_axis = Axis::new("Index", 0.0, self.values.len().saturating_sub(1) as f64);
        chart.y_axis = Axis::new("Value", self.min as f64, self.max as f64);
        chart.add_series(Series::from_values("Values", &self.values).with_markers());
        chart.add_ref_line(RefLine::new(format!("Max: {}", self.max), self.max as f64, RefLineRole::Max));
        chart.add_ref_line(RefLine::new(format!("Min: {}", self.min), self.min as f64, RefLineRole::Min));
        chart.autoscale_axes(0.05);
        chart
    }
}

/// Parse the four text inputs, validate, and draw a fresh sample.
/// Any bad input yields a `ParameterError` and no sampling happens.
pub fn generate_chart_spec(
    min: &str,
    max: &str,
    step: &str,
    count: &str,
    rng: &mut impl Rng,
) -> Result<ChartSpec, ParameterError> {
    let params = Parameters::parse(min, max, step, count)?;
    Ok(ChartSpec::generate(&params, rng))
}
