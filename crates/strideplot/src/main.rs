// File: crates/strideplot/src/main.rs
// Summary: Windowed app: parameter fields, a trigger button, and the sampled chart, blitted via winit + softbuffer.

mod panel;

use anyhow::Result;
use panel::{Panel, PANEL_HEIGHT};
use plot_core::chart::raster_rgba8;
use plot_core::geometry::RectI32;
use plot_core::{generate_chart_spec, Chart, RenderOptions, TextShaper, Theme};
use std::num::NonZeroU32;
use winit::event::{ElementState, Event, KeyboardInput, MouseButton, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

/// Owns every piece of mutable UI state. The trigger handler is the only
/// place the chart is replaced.
struct App {
    panel: Panel,
    chart: Option<Chart>,
}

impl App {
    fn new() -> Self {
        Self { panel: Panel::new(), chart: None }
    }

    /// The single trigger path: parse, validate, sample, rebuild the chart.
    /// On bad input the previous chart stays as it was.
    fn on_trigger(&mut self) {
        let [min, max, step, count] = &self.panel.fields;
        let mut rng = rand::rng();
        match generate_chart_spec(min, max, step, count, &mut rng) {
            Ok(spec) => {
                log::info!(
                    "sampled {} values in [{}, {}], difference {}",
                    spec.values.len(),
                    spec.min,
                    spec.max,
                    spec.difference
                );
                self.chart = Some(spec.to_chart());
            }
            Err(err) => log::warn!("invalid parameters: {err}"),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Strideplot")
        .with_inner_size(winit::dpi::LogicalSize::new(900.0, 620.0))
        .build(&event_loop)?;

    let context = unsafe { softbuffer::Context::new(&window) }
        .map_err(|e| anyhow::anyhow!("softbuffer context: {e}"))?;
    let mut surface = unsafe { softbuffer::Surface::new(&context, &window) }
        .map_err(|e| anyhow::anyhow!("softbuffer surface: {e}"))?;

    let mut app = App::new();
    let theme = Theme::dark();
    let shaper = TextShaper::new();
    let mut size = window.inner_size();
    let mut cursor: (i32, i32) = (0, 0);

    event_loop.run(move |event, _, cf| {
        *cf = ControlFlow::Wait;
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    *cf = ControlFlow::Exit;
                }
                WindowEvent::Resized(new_size) => {
                    size = new_size;
                    window.request_redraw();
                }
                WindowEvent::CursorMoved { position, .. } => {
                    cursor = (position.x as i32, position.y as i32);
                }
                WindowEvent::MouseInput { state, button: MouseButton::Left, .. } => {
                    let (x, y) = cursor;
                    match state {
                        ElementState::Pressed => {
                            if let Some(i) = Panel::hit_field(x, y) {
                                app.panel.focus = Some(i);
                            } else if Panel::hit_button(x, y) {
                                app.panel.button_pressed = true;
                            }
                        }
                        ElementState::Released => {
                            if app.panel.button_pressed && Panel::hit_button(x, y) {
                                app.on_trigger();
                            }
                            app.panel.button_pressed = false;
                        }
                    }
                    window.request_redraw();
                }
                WindowEvent::ReceivedCharacter(c) if !c.is_control() => {
                    app.panel.insert_char(c);
                    window.request_redraw();
                }
                WindowEvent::KeyboardInput {
                    input: KeyboardInput { state: ElementState::Pressed, virtual_keycode: Some(key), .. },
                    ..
                } => {
                    match key {
                        VirtualKeyCode::Tab => app.panel.focus_next(),
                        VirtualKeyCode::Back => app.panel.backspace(),
                        VirtualKeyCode::Return | VirtualKeyCode::NumpadEnter => app.on_trigger(),
                        _ => {}
                    }
                    window.request_redraw();
                }
                _ => {}
            },
            Event::RedrawRequested(_) => {
                if let Err(e) = present_frame(&mut surface, size, &app, &theme, &shaper) {
                    log::error!("redraw failed: {e:#}");
                }
            }
            _ => {}
        }
    });
}

/// Render the whole frame (panel plus chart or placeholder) and present it.
fn present_frame(
    surface: &mut softbuffer::Surface,
    size: winit::dpi::PhysicalSize<u32>,
    app: &App,
    theme: &Theme,
    shaper: &TextShaper,
) -> Result<()> {
    let w = size.width.max(1);
    let h = size.height.max(1);
    surface
        .resize(NonZeroU32::new(w).unwrap(), NonZeroU32::new(h).unwrap())
        .map_err(|e| anyhow::anyhow!("surface resize: {e}"))?;

    let chart_rect = RectI32::from_ltrb(0, PANEL_HEIGHT, w as i32, h as i32);
    let (rgba, _, _, _) = raster_rgba8(w as i32, h as i32, |canvas| {
        canvas.clear(theme.background);
        app.panel.draw(canvas, w as i32, theme, shaper);
        match &app.chart {
            Some(chart) => {
                let mut opts = RenderOptions::default();
                opts.theme = *theme;
                chart.draw_into(canvas, chart_rect, &opts, shaper);
            }
            None => {
                // Chart area stays empty until the first successful generation.
                let cx = w as f32 * 0.5;
                let cy = (PANEL_HEIGHT as f32 + h as f32) * 0.5;
                shaper.draw_center(canvas, "Enter parameters and press Show chart", cx, cy, 14.0, theme.tick, false);
            }
        }
    })?;

    // Render to RGBA and convert to packed u32 for softbuffer
    let mut frame = surface.buffer_mut().map_err(|e| anyhow::anyhow!("frame buffer: {e}"))?;
    let max_px = frame.len().min(rgba.len() / 4);
    for (i, px) in rgba.chunks_exact(4).take(max_px).enumerate() {
        let r = px[0] as u32;
        let g = px[1] as u32;
        let b = px[2] as u32;
        let a = px[3] as u32;
        frame[i] = (a << 24) | (r << 16) | (g << 8) | b;
    }
    frame
        .present()
        .map_err(|e| anyhow::anyhow!("present: {e}"))?;
    Ok(())
}
