//! HP bar rendering.

use ratatui::buffer::Buffer;

use crate::render::theme;

/// Draw a horizontal stat bar anchored at the left edge of row `y`.
///
/// The filled segment spans `floor(current / maximum * total_width)`
/// columns; the remainder uses the empty style. A `HP: current/maximum`
/// label is drawn over the bar. Out-of-range rows are ignored.
pub fn render_bar(buf: &mut Buffer, current: i32, maximum: i32, total_width: u16, y: u16) {
    let area = buf.area;
    if y >= area.y + area.height {
        return;
    }

    let width = total_width.min(area.width);
    let filled = filled_width(current, maximum, width);

    for x in 0..width {
        let color = if x < filled {
            theme::BAR_FILLED
        } else {
            theme::BAR_EMPTY
        };
        buf[(area.x + x, y)].set_char(' ').set_bg(color);
    }

    let label = format!("HP: {current}/{maximum}");
    set_string_clipped(buf, area.x + 1, y, &label, width);
}

/// Columns of the bar that read as filled.
fn filled_width(current: i32, maximum: i32, total_width: u16) -> u16 {
    if maximum <= 0 || current <= 0 {
        return 0;
    }
    let filled = i64::from(current) * i64::from(total_width) / i64::from(maximum);
    u16::try_from(filled.clamp(0, i64::from(total_width))).unwrap_or(total_width)
}

/// Write label text without spilling past the bar, keeping the bar's
/// background colors.
fn set_string_clipped(buf: &mut Buffer, x: u16, y: u16, text: &str, width: u16) {
    for (offset, ch) in text.chars().enumerate() {
        let Ok(offset) = u16::try_from(offset) else {
            break;
        };
        if x + offset >= buf.area.x + width {
            break;
        }
        buf[(x + offset, y)].set_char(ch).set_style(theme::BAR_TEXT);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::layout::Rect;

    #[test]
    fn test_filled_width_is_floored() {
        // floor(7 / 20 * 40) = 14
        assert_eq!(filled_width(7, 20, 40), 14);
        assert_eq!(filled_width(1, 3, 40), 13);
    }

    #[test]
    fn test_filled_width_extremes() {
        assert_eq!(filled_width(0, 20, 40), 0);
        assert_eq!(filled_width(20, 20, 40), 40);
        assert_eq!(filled_width(-5, 20, 40), 0);
        assert_eq!(filled_width(5, 0, 40), 0);
    }

    #[test]
    fn test_render_bar_backgrounds() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 50, 10));
        render_bar(&mut buf, 7, 20, 40, 9);

        let filled = (0..40)
            .filter(|&x| buf[(x, 9)].bg == theme::BAR_FILLED)
            .count();
        let empty = (0..40)
            .filter(|&x| buf[(x, 9)].bg == theme::BAR_EMPTY)
            .count();
        assert_eq!(filled, 14);
        assert_eq!(empty, 26);
        // Nothing drawn beyond the bar
        assert_eq!(buf[(40, 9)].bg, ratatui::style::Color::Reset);
    }

    #[test]
    fn test_render_bar_label() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 50, 10));
        render_bar(&mut buf, 7, 20, 40, 9);

        let label: String = (1..9).map(|x| buf[(x, 9)].symbol().to_string()).collect();
        assert_eq!(label, "HP: 7/20");
    }

    #[test]
    fn test_render_bar_off_surface_is_noop() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 50, 10));
        render_bar(&mut buf, 7, 20, 40, 30);
        assert_eq!(buf, Buffer::empty(Rect::new(0, 0, 50, 10)));
    }
}
