//! Hover tooltip: names of actors under the mouse.

use ratatui::buffer::Buffer;

use crate::game::{Coord, GameMap};
use crate::render::theme;

/// Draw the names of all actors on the hovered tile next to the mouse.
///
/// Nothing is drawn when the tile is outside the map, not currently
/// visible, or empty. The label follows the tracked mouse position and is
/// clamped to the surface so it never clips off the right edge.
pub fn render_names_at(buf: &mut Buffer, map: &GameMap, mouse: Coord) {
    if !map.in_bounds(mouse) || !map.is_visible(mouse) {
        return;
    }

    let names: Vec<&str> = map.actors_at(mouse).map(|a| a.name.as_str()).collect();
    if names.is_empty() {
        return;
    }
    let label = names.join(", ");

    let area = buf.area;
    if mouse.y >= area.y + area.height {
        return;
    }
    let len = u16::try_from(label.chars().count()).unwrap_or(area.width);
    let x = (mouse.x + 1).min((area.x + area.width).saturating_sub(len));
    buf.set_string(x, mouse.y, label, theme::TOOLTIP);
}
