//! Style constants for tiles, actors, and UI panels.

use ratatui::style::{Color, Style};

use crate::game::TileKind;

/// The player's glyph.
pub const PLAYER: Style = Style::new().fg(Color::White);
/// Orc glyph.
pub const ORC: Style = Style::new().fg(Color::Rgb(63, 127, 63));
/// Troll glyph.
pub const TROLL: Style = Style::new().fg(Color::Rgb(0, 127, 0));
/// Corpse glyph.
pub const CORPSE: Style = Style::new().fg(Color::Rgb(191, 0, 0));

/// Welcome and level-feedback messages.
pub const WELCOME: Style = Style::new().fg(Color::Rgb(0x20, 0xA0, 0xFF));
/// The player's attack messages.
pub const PLAYER_ATTACK: Style = Style::new().fg(Color::Rgb(0xE0, 0xE0, 0xE0));
/// Enemy attack messages.
pub const ENEMY_ATTACK: Style = Style::new().fg(Color::Rgb(0xFF, 0xC0, 0xC0));
/// The "You died!" message.
pub const PLAYER_DIE: Style = Style::new().fg(Color::Rgb(0xFF, 0x30, 0x30));
/// Enemy death messages.
pub const ENEMY_DIE: Style = Style::new().fg(Color::Rgb(0xFF, 0xA0, 0x30));
/// Feedback for actions that had no effect.
pub const IMPOSSIBLE: Style = Style::new().fg(Color::Rgb(0x80, 0x80, 0x80));

/// Text drawn over the HP bar.
pub const BAR_TEXT: Style = Style::new().fg(Color::White);
/// Background of the filled segment of the HP bar.
pub const BAR_FILLED: Color = Color::Rgb(0, 96, 0);
/// Background of the empty segment of the HP bar.
pub const BAR_EMPTY: Color = Color::Rgb(64, 16, 16);

/// Hover tooltip text.
pub const TOOLTIP: Style = Style::new().fg(Color::White).bg(Color::Rgb(48, 48, 48));

/// Style for a terrain tile currently in view.
#[must_use]
pub const fn tile_visible(kind: TileKind) -> Style {
    match kind {
        TileKind::Floor => Style::new().fg(Color::Rgb(192, 180, 100)),
        TileKind::Wall => Style::new().fg(Color::Rgb(130, 110, 50)),
        TileKind::Chasm => Style::new().fg(Color::Rgb(80, 80, 140)),
    }
}

/// Style for a remembered terrain tile that has left view.
#[must_use]
pub const fn tile_remembered(kind: TileKind) -> Style {
    match kind {
        TileKind::Floor => Style::new().fg(Color::Rgb(80, 80, 100)),
        TileKind::Wall => Style::new().fg(Color::Rgb(60, 60, 90)),
        TileKind::Chasm => Style::new().fg(Color::Rgb(40, 40, 70)),
    }
}
