// File: crates/plot-core/src/theme.rs
// Summary: Light/Dark theming for chart and panel colors.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub series_stroke: skia::Color,
    pub marker_fill: skia::Color,
    pub ref_max: skia::Color,
    pub ref_min: skia::Color,
    pub legend_bg: skia::Color,
    pub panel_bg: skia::Color,
    pub field_bg: skia::Color,
    pub field_border: skia::Color,
    pub field_border_focus: skia::Color,
    pub field_text: skia::Color,
    pub button_bg: skia::Color,
    pub button_bg_pressed: skia::Color,
    pub button_text: skia::Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            series_stroke: skia::Color::from_argb(255, 64, 160, 255),
            marker_fill: skia::Color::from_argb(255, 96, 180, 255),
            ref_max: skia::Color::from_argb(255, 220, 80, 80),
            ref_min: skia::Color::from_argb(255, 40, 200, 120),
            legend_bg: skia::Color::from_argb(200, 28, 28, 32),
            panel_bg: skia::Color::from_argb(255, 26, 26, 30),
            field_bg: skia::Color::from_argb(255, 38, 38, 44),
            field_border: skia::Color::from_argb(255, 70, 70, 80),
            field_border_focus: skia::Color::from_argb(255, 64, 160, 255),
            field_text: skia::Color::from_argb(255, 235, 235, 245),
            button_bg: skia::Color::from_argb(255, 40, 110, 190),
            button_bg_pressed: skia::Color::from_argb(255, 30, 85, 150),
            button_text: skia::Color::from_argb(255, 240, 245, 250),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 250, 250, 252),
            grid: skia::Color::from_argb(255, 230, 230, 235),
            axis_line: skia::Color::from_argb(255, 60, 60, 70),
            axis_label: skia::Color::from_argb(255, 20, 20, 30),
            tick: skia::Color::from_argb(255, 100, 100, 110),
            series_stroke: skia::Color::from_argb(255, 32, 120, 200),
            marker_fill: skia::Color::from_argb(255, 24, 96, 170),
            ref_max: skia::Color::from_argb(255, 200, 60, 60),
            ref_min: skia::Color::from_argb(255, 20, 160, 90),
            legend_bg: skia::Color::from_argb(220, 242, 242, 246),
            panel_bg: skia::Color::from_argb(255, 238, 238, 242),
            field_bg: skia::Color::from_argb(255, 255, 255, 255),
            field_border: skia::Color::from_argb(255, 180, 180, 190),
            field_border_focus: skia::Color::from_argb(255, 32, 120, 200),
            field_text: skia::Color::from_argb(255, 20, 20, 30),
            button_bg: skia::Color::from_argb(255, 50, 130, 210),
            button_bg_pressed: skia::Color::from_argb(255, 36, 100, 170),
            button_text: skia::Color::from_argb(255, 255, 255, 255),
        }
    }
}
