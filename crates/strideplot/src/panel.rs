// File: crates/strideplot/src/panel.rs
// Summary: Control panel: field layout, focus/editing state, hit-testing, Skia drawing.

use plot_core::geometry::RectI32;
use plot_core::{TextShaper, Theme};
use skia_safe as skia;

pub const PANEL_HEIGHT: i32 = 96;

const MARGIN: i32 = 16;
const FIELD_W: i32 = 110;
const FIELD_H: i32 = 28;
const FIELD_GAP: i32 = 24;
const FIELD_TOP: i32 = 38;
const BUTTON_W: i32 = 120;

pub const FIELD_COUNT: usize = 4;
const FIELD_LABELS: [&str; FIELD_COUNT] = ["Min value", "Max value", "Step size", "Array size"];
const FIELD_DEFAULTS: [&str; FIELD_COUNT] = ["0", "1000", "10", "25"];

/// Field buffers, focus, and button state for the input row.
/// The event loop owns exactly one of these.
pub struct Panel {
    pub fields: [String; FIELD_COUNT],
    pub focus: Option<usize>,
    pub button_pressed: bool,
}

impl Panel {
    pub fn new() -> Self {
        Self {
            fields: FIELD_DEFAULTS.map(String::from),
            focus: Some(0),
            button_pressed: false,
        }
    }

    pub fn field_rect(index: usize) -> RectI32 {
        let left = MARGIN + index as i32 * (FIELD_W + FIELD_GAP);
        RectI32::from_ltwh(left, FIELD_TOP, FIELD_W, FIELD_H)
    }

    pub fn button_rect() -> RectI32 {
        let left = MARGIN + FIELD_COUNT as i32 * (FIELD_W + FIELD_GAP);
        RectI32::from_ltwh(left, FIELD_TOP, BUTTON_W, FIELD_H)
    }

    pub fn hit_field(x: i32, y: i32) -> Option<usize> {
        (0..FIELD_COUNT).find(|&i| Self::field_rect(i).contains(x, y))
    }

    pub fn hit_button(x: i32, y: i32) -> bool {
        Self::button_rect().contains(x, y)
    }

    pub fn focus_next(&mut self) {
        self.focus = Some(match self.focus {
            Some(i) => (i + 1) % FIELD_COUNT,
            None => 0,
        });
    }

    /// Append a typed character to the focused field. Anything printable is
    /// accepted; validation happens at the trigger, not while typing.
    pub fn insert_char(&mut self, c: char) {
        if let Some(i) = self.focus {
            self.fields[i].push(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(i) = self.focus {
            self.fields[i].pop();
        }
    }

    pub fn draw(&self, canvas: &skia::Canvas, width: i32, theme: &Theme, shaper: &TextShaper) {
        let mut bg = skia::Paint::default();
        bg.set_color(theme.panel_bg);
        canvas.draw_rect(skia::Rect::from_ltrb(0.0, 0.0, width as f32, PANEL_HEIGHT as f32), &bg);

        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        let mut border = skia::Paint::default();
        border.set_anti_alias(true);
        border.set_style(skia::paint::Style::Stroke);

        for i in 0..FIELD_COUNT {
            let rect = Self::field_rect(i);
            shaper.draw_left(canvas, FIELD_LABELS[i], rect.left as f32, rect.top as f32 - 8.0, 12.0, theme.axis_label, false);

            let focused = self.focus == Some(i);
            fill.set_color(theme.field_bg);
            canvas.draw_round_rect(to_skia_rect(rect), 3.0, 3.0, &fill);
            border.set_color(if focused { theme.field_border_focus } else { theme.field_border });
            border.set_stroke_width(if focused { 1.5 } else { 1.0 });
            canvas.draw_round_rect(to_skia_rect(rect), 3.0, 3.0, &border);

            let text = &self.fields[i];
            let text_y = rect.bottom as f32 - 9.0;
            shaper.draw_left(canvas, text, rect.left as f32 + 6.0, text_y, 13.0, theme.field_text, true);
            if focused {
                let caret_x = rect.left as f32 + 6.0 + shaper.measure_width(text, 13.0, true) + 1.0;
                let mut caret = skia::Paint::default();
                caret.set_color(theme.field_text);
                caret.set_stroke_width(1.0);
                canvas.draw_line(
                    (caret_x, rect.top as f32 + 6.0),
                    (caret_x, rect.bottom as f32 - 6.0),
                    &caret,
                );
            }
        }

        let rect = Self::button_rect();
        fill.set_color(if self.button_pressed { theme.button_bg_pressed } else { theme.button_bg });
        canvas.draw_round_rect(to_skia_rect(rect), 4.0, 4.0, &fill);
        let cx = (rect.left + rect.right) as f32 * 0.5;
        shaper.draw_center(canvas, "Show chart", cx, rect.bottom as f32 - 9.0, 13.0, theme.button_text, false);
    }
}

fn to_skia_rect(r: RectI32) -> skia::Rect {
    skia::Rect::from_ltrb(r.left as f32, r.top as f32, r.right as f32, r.bottom as f32)
}
