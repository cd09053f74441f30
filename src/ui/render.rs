use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use super::braille::{braille_char, BrailleCanvas};
use crate::config::{DisplayConfig, KeyBindings};
use crate::game::state::{Rect as FieldRect, Snapshot, FIELD_HEIGHT, FIELD_WIDTH};

// Layout: hint line on top, bordered playable area below.
// Row 0: controls hint text
// Row 1: top border line (last pixel row of the header)
// Rows 2..N-1: playable area
// Row N: bottom border line
const UI_HEADER_ROWS: u16 = 2; // hint text + top border above the field
const UI_FOOTER_ROWS: u16 = 1; // bottom border

/// Draw one frame from a simulation snapshot. The snapshot is in field
/// units; everything pixel-related stays on this side of the boundary.
pub fn render(frame: &mut Frame, snapshot: &Snapshot, display: &DisplayConfig, hint: &str) {
    let area = frame.area();
    if area.width < 10 || area.height < UI_HEADER_ROWS + UI_FOOTER_ROWS + 4 {
        return; // terminal too small to draw anything sensible
    }

    // True black background, not the terminal default
    let bg = Block::default().style(Style::default().bg(Color::Rgb(0, 0, 0)));
    frame.render_widget(bg, area);

    let width = area.width as usize;
    let height = area.height as usize;

    let playable_height_rows = area.height - UI_HEADER_ROWS - UI_FOOTER_ROWS;
    let playable_height_pixels = playable_height_rows as usize * 4;
    let playable_offset_y = UI_HEADER_ROWS as usize * 4;

    let scale_x = (width * 2) as f32 / FIELD_WIDTH;
    let scale_y = playable_height_pixels as f32 / FIELD_HEIGHT;

    // One canvas per configured color; the layers are merged cell by cell
    // when the rows are emitted, later layers taking the color
    let mut field = BrailleCanvas::new(width, height);
    // Border lines just outside the playable band, so entities at the field
    // edge never merge with them
    field.draw_horizontal_line(playable_offset_y - 1);
    field.draw_horizontal_line(playable_offset_y + playable_height_pixels);
    draw_center_line(&mut field, scale_x, playable_offset_y, playable_height_pixels);

    let mut paddles = BrailleCanvas::new(width, height);
    draw_field_rect(&mut paddles, &snapshot.left_paddle, scale_x, scale_y, playable_offset_y);
    draw_field_rect(&mut paddles, &snapshot.right_paddle, scale_x, scale_y, playable_offset_y);

    let mut ball = BrailleCanvas::new(width, height);
    draw_field_rect(&mut ball, &snapshot.ball, scale_x, scale_y, playable_offset_y);

    let layers = [
        (&field, rgb(display.border_color)),
        (&paddles, rgb(display.paddle_color)),
        (&ball, rgb(display.ball_color)),
    ];
    render_layers(frame, &layers, area);

    draw_controls_hint(frame, area, hint, rgb(display.hint_color));
}

/// Build the controls hint line from the configured bindings.
pub fn controls_hint(bindings: &KeyBindings) -> String {
    format!(
        "{}/{}: Left  {}/{}: Right  {}: Quit",
        key_label(&bindings.left_up),
        key_label(&bindings.left_down),
        key_label(&bindings.right_up),
        key_label(&bindings.right_down),
        key_label(&bindings.quit),
    )
}

fn key_label(name: &str) -> &str {
    if name.eq_ignore_ascii_case("up") {
        "↑"
    } else if name.eq_ignore_ascii_case("down") {
        "↓"
    } else if name.eq_ignore_ascii_case("left") {
        "←"
    } else if name.eq_ignore_ascii_case("right") {
        "→"
    } else {
        name
    }
}

/// Scale a field-unit rectangle to Braille pixels and fill it. Entities are
/// drawn at least one pixel wide so a thin ball never vanishes.
fn draw_field_rect(
    canvas: &mut BrailleCanvas,
    rect: &FieldRect,
    scale_x: f32,
    scale_y: f32,
    offset_y: usize,
) {
    let x = (rect.x * scale_x).round() as usize;
    let y = (rect.y * scale_y).round() as usize + offset_y;
    let width = ((rect.width * scale_x).round() as usize).max(1);
    let height = ((rect.height * scale_y).round() as usize).max(1);

    canvas.fill_rect(x, y, width, height);
}

fn draw_center_line(canvas: &mut BrailleCanvas, scale_x: f32, offset_y: usize, height: usize) {
    let center_x = (FIELD_WIDTH / 2.0 * scale_x) as usize;

    // Dotted: two lit pixels out of every four
    for y in (0..height).step_by(4) {
        canvas.set_pixel(center_x, offset_y + y);
        canvas.set_pixel(center_x, offset_y + y + 1);
    }
}

/// Merge the color layers cell by cell and emit one styled line per
/// terminal row. Cells from later layers win the color where they overlap.
fn render_layers(frame: &mut Frame, layers: &[(&BrailleCanvas, Color)], area: Rect) {
    for y in 0..area.height as usize {
        let mut spans: Vec<Span> = Vec::new();
        let mut run = String::new();
        let mut run_color = layers[0].1;

        for x in 0..area.width as usize {
            let mut pattern = 0u8;
            let mut color = layers[0].1;
            for (canvas, layer_color) in layers {
                let p = canvas.pattern(x, y);
                pattern |= p;
                if p != 0 {
                    color = *layer_color;
                }
            }

            if color != run_color && !run.is_empty() {
                spans.push(Span::styled(
                    std::mem::take(&mut run),
                    Style::default().fg(run_color),
                ));
            }
            run_color = color;
            run.push(braille_char(pattern));
        }
        if !run.is_empty() {
            spans.push(Span::styled(run, Style::default().fg(run_color)));
        }

        let row_area = Rect {
            x: area.x,
            y: area.y + y as u16,
            width: area.width,
            height: 1,
        };

        frame.render_widget(Paragraph::new(Line::from(spans)), row_area);
    }
}

fn draw_controls_hint(frame: &mut Frame, area: Rect, hint: &str, color: Color) {
    let hint = Paragraph::new(hint)
        .style(Style::default().fg(color))
        .alignment(Alignment::Center);

    let hint_area = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: 1,
    };

    frame.render_widget(hint, hint_area);
}

fn rgb(c: [u8; 3]) -> Color {
    Color::Rgb(c[0], c[1], c[2])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hint_reflects_default_bindings() {
        let hint = controls_hint(&KeyBindings::default());
        assert_eq!(hint, "W/S: Left  ↑/↓: Right  Q: Quit");
    }

    #[test]
    fn test_hint_reflects_custom_bindings() {
        let bindings = KeyBindings {
            left_up: "I".to_string(),
            left_down: "K".to_string(),
            quit: "Esc".to_string(),
            ..KeyBindings::default()
        };

        let hint = controls_hint(&bindings);
        assert_eq!(hint, "I/K: Left  ↑/↓: Right  Esc: Quit");
    }
}
