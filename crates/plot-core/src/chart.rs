// File: crates/plot-core/src/chart.rs
// Summary: Chart struct and Skia CPU raster rendering (RGBA8 buffer and PNG).

use anyhow::Result;
use skia_safe as skia;

use crate::axis::Axis;
use crate::geometry::RectI32;
use crate::grid::{format_tick, linspace};
use crate::series::{RefLine, RefLineRole, Series};
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    /// Disable to keep pixel output font-independent (tests).
    pub draw_labels: bool,
    pub theme: Theme,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            draw_labels: true,
            theme: Theme::dark(),
        }
    }
}

pub struct Chart {
    pub title: String,
    pub series: Vec<Series>,
    pub ref_lines: Vec<RefLine>,
    pub x_axis: Axis,
    pub y_axis: Axis,
}

impl Chart {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            series: Vec::new(),
            ref_lines: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
        }
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    pub fn add_ref_line(&mut self, line: RefLine) {
        self.ref_lines.push(line);
    }

    /// Fit both axes to the series points and reference lines.
    /// Degenerate spans are widened so the scale math stays finite.
    pub fn autoscale_axes(&mut self, margin_frac: f64) {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for s in &self.series {
            for &(x, y) in &s.data_xy {
                x_min = x_min.min(x);
                x_max = x_max.max(x);
                y_min = y_min.min(y);
                y_max = y_max.max(y);
            }
        }
        for line in &self.ref_lines {
            y_min = y_min.min(line.y);
            y_max = y_max.max(line.y);
        }
        if !x_min.is_finite() || !x_max.is_finite() || !y_min.is_finite() || !y_max.is_finite() {
            x_min = 0.0;
            x_max = 1.0;
            y_min = 0.0;
            y_max = 1.0;
        }
        if (x_max - x_min).abs() < 1e-9 { x_max = x_min + 1.0; }
        if (y_max - y_min).abs() < 1e-9 { y_max = y_min + 1.0; }
        let ym = (y_max - y_min) * margin_frac;
        self.x_axis.min = x_min;
        self.x_axis.max = x_max;
        self.y_axis.min = y_min - ym;
        self.y_axis.max = y_max + ym;
    }

    /// Draw the whole chart (background, grid, axes, series, reference
    /// lines, legend, title) into `rect` on an existing canvas. The window
    /// app composes this with its own widgets on one surface.
    pub fn draw_into(&self, canvas: &skia::Canvas, rect: RectI32, opts: &RenderOptions, shaper: &TextShaper) {
        let theme = &opts.theme;

        let mut bg = skia::Paint::default();
        bg.set_color(theme.background);
        canvas.draw_rect(to_skia_rect(rect), &bg);

        // Paddings & plot rect
        if rect.width() < opts.insets.hsum() as i32 + 16 || rect.height() < opts.insets.vsum() as i32 + 16 {
            return; // area too small to plot
        }
        let l = rect.left + opts.insets.left as i32;
        let r = rect.right - opts.insets.right as i32;
        let t = rect.top + opts.insets.top as i32;
        let b = rect.bottom - opts.insets.bottom as i32;

        draw_grid(canvas, l, t, r, b, theme);
        draw_axes(canvas, l, t, r, b, theme);

        for s in &self.series {
            draw_line_series(canvas, l, t, r, b, &self.x_axis, &self.y_axis, s, theme);
        }
        for line in &self.ref_lines {
            draw_ref_line(canvas, l, t, r, b, &self.y_axis, line, theme);
        }

        if opts.draw_labels {
            draw_tick_labels(canvas, l, t, r, b, &self.x_axis, &self.y_axis, shaper, theme);
            draw_axis_names(canvas, l, t, r, b, &self.x_axis, &self.y_axis, shaper, theme);
            draw_legend(canvas, t, r, self, shaper, theme);
            if !self.title.is_empty() {
                let cx = (rect.left + rect.right) as f32 * 0.5;
                shaper.draw_center(canvas, &self.title, cx, rect.top as f32 + 30.0, 16.0, theme.axis_label, false);
            }
        }
    }

    /// Render to an RGBA8 buffer: (pixels, width, height, row stride).
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, i32, i32, usize)> {
        let shaper = TextShaper::new();
        raster_rgba8(opts.width, opts.height, |canvas| {
            self.draw_into(canvas, RectI32::from_ltwh(0, 0, opts.width, opts.height), opts, &shaper);
        })
    }

    /// Render and PNG-encode in memory.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let shaper = TextShaper::new();
        let image = raster_snapshot(opts.width, opts.height, |canvas| {
            self.draw_into(canvas, RectI32::from_ltwh(0, 0, opts.width, opts.height), opts, &shaper);
        })?;
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }
}

/// Draw onto a fresh CPU raster surface and snapshot it.
fn raster_snapshot(width: i32, height: i32, draw: impl FnOnce(&skia::Canvas)) -> Result<skia::Image> {
    let mut surface = skia::surfaces::raster_n32_premul((width, height))
        .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
    draw(surface.canvas());
    Ok(surface.image_snapshot())
}

/// Draw onto a fresh CPU raster surface and read back RGBA8 pixels:
/// (pixels, width, height, row stride in bytes).
pub fn raster_rgba8(width: i32, height: i32, draw: impl FnOnce(&skia::Canvas)) -> Result<(Vec<u8>, i32, i32, usize)> {
    let image = raster_snapshot(width, height, draw)?;
    let info = skia::ImageInfo::new((width, height), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
    let row_bytes = width as usize * 4;
    let mut pixels = vec![0u8; row_bytes * height as usize];
    if !image.read_pixels(&info, &mut pixels, row_bytes, (0, 0), skia::image::CachingHint::Allow) {
        anyhow::bail!("read pixels failed");
    }
    Ok((pixels, width, height, row_bytes))
}

fn to_skia_rect(r: RectI32) -> skia::Rect {
    skia::Rect::from_ltrb(r.left as f32, r.top as f32, r.right as f32, r.bottom as f32)
}

// ---- helpers ----------------------------------------------------------------

fn draw_grid(canvas: &skia::Canvas, l: i32, t: i32, r: i32, b: i32, theme: &Theme) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    // verticals
    for x in linspace(l as f64, r as f64, 10) {
        canvas.draw_line((x as f32, t as f32), (x as f32, b as f32), &paint);
    }
    // horizontals
    for y in linspace(t as f64, b as f64, 6) {
        canvas.draw_line((l as f32, y as f32), (r as f32, y as f32), &paint);
    }
}

fn draw_axes(canvas: &skia::Canvas, l: i32, t: i32, r: i32, b: i32, theme: &Theme) {
    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(theme.axis_line);
    axis_paint.set_anti_alias(true);
    axis_paint.set_stroke_width(1.5);

    // X and Y axis lines
    canvas.draw_line((l as f32, b as f32), (r as f32, b as f32), &axis_paint);
    canvas.draw_line((l as f32, t as f32), (l as f32, b as f32), &axis_paint);
}

#[allow(clippy::too_many_arguments)]
fn draw_line_series(
    canvas: &skia::Canvas,
    l: i32,
    t: i32,
    r: i32,
    b: i32,
    x_axis: &Axis,
    y_axis: &Axis,
    series: &Series,
    theme: &Theme,
) {
    let data = &series.data_xy;
    if data.is_empty() {
        return;
    }

    // Scale helpers
    let xspan = x_axis.span();
    let yspan = y_axis.span();
    let sx = |x: f64| -> f32 { l as f32 + ((x - x_axis.min) / xspan) as f32 * (r - l) as f32 };
    let sy = |y: f64| -> f32 { b as f32 - ((y - y_axis.min) / yspan) as f32 * (b - t) as f32 };

    if data.len() >= 2 {
        let mut path_builder = skia::PathBuilder::new();
        let (x0, y0) = data[0];
        path_builder.move_to((sx(x0), sy(y0)));
        for &(x, y) in data.iter().skip(1) {
            path_builder.line_to((sx(x), sy(y)));
        }
        let path = path_builder.detach();

        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_width(2.0);
        stroke.set_color(theme.series_stroke);
        canvas.draw_path(&path, &stroke);
    }

    if series.markers {
        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_style(skia::paint::Style::Fill);
        fill.set_color(theme.marker_fill);
        for &(x, y) in data {
            canvas.draw_circle((sx(x), sy(y)), 3.5, &fill);
        }
    }
}

fn draw_ref_line(canvas: &skia::Canvas, l: i32, t: i32, r: i32, b: i32, y_axis: &Axis, line: &RefLine, theme: &Theme) {
    let yspan = y_axis.span();
    let sy = b as f32 - ((line.y - y_axis.min) / yspan) as f32 * (b - t) as f32;
    if sy < t as f32 || sy > b as f32 {
        return;
    }
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(1.5);
    paint.set_color(match line.role {
        RefLineRole::Max => theme.ref_max,
        RefLineRole::Min => theme.ref_min,
    });
    paint.set_path_effect(skia::PathEffect::dash(&[6.0, 4.0], 0.0));
    canvas.draw_line((l as f32, sy), (r as f32, sy), &paint);
}

#[allow(clippy::too_many_arguments)]
fn draw_tick_labels(
    canvas: &skia::Canvas,
    l: i32,
    t: i32,
    r: i32,
    b: i32,
    x_axis: &Axis,
    y_axis: &Axis,
    shaper: &TextShaper,
    theme: &Theme,
) {
    // Tick values sit on the grid lines.
    let xs_px = linspace(l as f64, r as f64, 10);
    let xs_val = linspace(x_axis.min, x_axis.max, 10);
    for (px, v) in xs_px.iter().zip(xs_val.iter()) {
        shaper.draw_center(canvas, &format_tick(*v), *px as f32, b as f32 + 18.0, 11.0, theme.tick, true);
    }

    let ys_px = linspace(t as f64, b as f64, 6);
    let ys_val = linspace(y_axis.max, y_axis.min, 6); // top row is the maximum
    for (py, v) in ys_px.iter().zip(ys_val.iter()) {
        let label = format_tick(*v);
        let w = shaper.measure_width(&label, 11.0, true);
        shaper.draw_left(canvas, &label, l as f32 - w - 8.0, *py as f32 + 4.0, 11.0, theme.tick, true);
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_axis_names(
    canvas: &skia::Canvas,
    l: i32,
    t: i32,
    r: i32,
    b: i32,
    x_axis: &Axis,
    y_axis: &Axis,
    shaper: &TextShaper,
    theme: &Theme,
) {
    let size = 13.0;
    let xw = shaper.measure_width(&x_axis.label, size, false);
    shaper.draw_left(canvas, &x_axis.label, r as f32 - xw, b as f32 + 38.0, size, theme.axis_label, false);
    shaper.draw_left(canvas, &y_axis.label, l as f32 - 56.0, t as f32 - 14.0, size, theme.axis_label, false);
}

fn draw_legend(canvas: &skia::Canvas, t: i32, r: i32, chart: &Chart, shaper: &TextShaper, theme: &Theme) {
    let mut entries: Vec<(&str, skia::Color)> = Vec::new();
    for s in &chart.series {
        entries.push((s.name.as_str(), theme.series_stroke));
    }
    for line in &chart.ref_lines {
        let color = match line.role {
            RefLineRole::Max => theme.ref_max,
            RefLineRole::Min => theme.ref_min,
        };
        entries.push((line.label.as_str(), color));
    }
    if entries.is_empty() {
        return;
    }

    let size = 12.0f32;
    let row_h = 18.0f32;
    let swatch = 22.0f32;
    let mut text_w = 0.0f32;
    for (label, _) in &entries {
        text_w = text_w.max(shaper.measure_width(label, size, false));
    }
    let box_w = 8.0 + swatch + 10.0 + text_w + 12.0;
    let box_h = row_h * entries.len() as f32 + 12.0;
    let bx = r as f32 - box_w - 12.0;
    let by = t as f32 + 12.0;

    let mut bg = skia::Paint::default();
    bg.set_anti_alias(true);
    bg.set_color(theme.legend_bg);
    canvas.draw_round_rect(skia::Rect::from_xywh(bx, by, box_w, box_h), 4.0, 4.0, &bg);

    let mut swatch_paint = skia::Paint::default();
    swatch_paint.set_anti_alias(true);
    swatch_paint.set_style(skia::paint::Style::Stroke);
    swatch_paint.set_stroke_width(2.0);
    for (i, (label, color)) in entries.iter().enumerate() {
        let cy = by + 6.0 + row_h * i as f32 + row_h * 0.5;
        swatch_paint.set_color(*color);
        canvas.draw_line((bx + 8.0, cy), (bx + 8.0 + swatch, cy), &swatch_paint);
        shaper.draw_left(canvas, label, bx + 8.0 + swatch + 10.0, cy + size * 0.35, size, theme.axis_label, false);
    }
}
