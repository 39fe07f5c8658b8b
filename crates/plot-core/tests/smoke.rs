// File: crates/plot-core/tests/smoke.rs
// Purpose: End-to-end render smoke test writing a PNG from a generated sample.

use plot_core::{ChartSpec, Parameters, RenderOptions};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn render_smoke_png() {
    let params = Parameters::new(0, 100, 5, 40).unwrap();
    let mut rng = StdRng::seed_from_u64(11);
    let chart = ChartSpec::generate(&params, &mut rng).to_chart();

    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    std::fs::create_dir_all(out.parent().unwrap()).unwrap();

    chart.render_to_png(&opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify the in-memory API and that the encoded size matches the options
    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
    let decoded = image::load_from_memory(&bytes).expect("decode png");
    assert_eq!(decoded.width(), opts.width as u32);
    assert_eq!(decoded.height(), opts.height as u32);
}
