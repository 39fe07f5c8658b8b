// File: crates/plot-core/tests/autoscale.rs
// Purpose: Validate autoscale over series data and reference lines.

use plot_core::{Chart, RefLine, RefLineRole, Series};

#[test]
fn autoscale_includes_reference_lines() {
    let mut chart = Chart::new();
    chart.add_series(Series::with_data("v", vec![(0.0, 1.0), (5.0, 3.0)]));
    chart.add_ref_line(RefLine::new("Max: 6", 6.0, RefLineRole::Max));
    chart.add_ref_line(RefLine::new("Min: 0.5", 0.5, RefLineRole::Min));

    chart.autoscale_axes(0.0);

    // X spans the series; Y must cover both guides.
    assert!(chart.x_axis.min <= 0.0 + 1e-9);
    assert!(chart.x_axis.max >= 5.0 - 1e-9);
    assert!(chart.y_axis.min <= 0.5 + 1e-9);
    assert!(chart.y_axis.max >= 6.0 - 1e-9);
}

#[test]
fn autoscale_widens_degenerate_spans() {
    // A one-point sample: both spans collapse and must be widened.
    let mut chart = Chart::new();
    chart.add_series(Series::with_data("v", vec![(0.0, 42.0)]));
    chart.autoscale_axes(0.05);

    assert!(chart.x_axis.max > chart.x_axis.min);
    assert!(chart.y_axis.max > chart.y_axis.min);
}
