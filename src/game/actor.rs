//! Actors and their optional capabilities.

use ratatui::style::Style;
use serde::{Deserialize, Serialize};

use crate::game::map::Coord;
use crate::render::theme;

/// Draw layer for an actor. Lower layers are drawn first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RenderOrder {
    /// Remains on the floor, drawn under everything else.
    Corpse,
    /// Living actors.
    Creature,
}

/// Combat capability: hit points and melee stats.
///
/// `hp` is kept private so it can never leave `0..=max_hp`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fighter {
    hp: i32,
    /// Maximum hit points.
    pub max_hp: i32,
    /// Flat damage reduction applied to incoming melee hits.
    pub defense: i32,
    /// Melee damage before the target's defense.
    pub power: i32,
}

impl Fighter {
    /// Create a fighter at full health.
    #[must_use]
    pub const fn new(max_hp: i32, defense: i32, power: i32) -> Self {
        Self {
            hp: max_hp,
            max_hp,
            defense,
            power,
        }
    }

    /// Current hit points.
    #[must_use]
    pub const fn hp(&self) -> i32 {
        self.hp
    }

    /// Set hit points, clamped to `0..=max_hp`.
    pub fn set_hp(&mut self, value: i32) {
        self.hp = value.clamp(0, self.max_hp);
    }

    /// Apply damage. Hit points never go below zero.
    pub fn take_damage(&mut self, amount: i32) {
        self.set_hp(self.hp - amount);
    }

    /// Restore hit points up to the maximum.
    pub fn heal(&mut self, amount: i32) {
        self.set_hp(self.hp + amount);
    }
}

/// Enemy decision-making capability.
///
/// Modeled as a tagged variant rather than a trait object so actors stay
/// plain serializable data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ai {
    /// Chases the player on sight and attacks when adjacent.
    Hostile,
}

/// An entity on the map.
///
/// Capabilities an actor may or may not possess (`fighter`, `ai`) are
/// optional fields checked before use.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    /// Grid position on the current map.
    pub pos: Coord,
    /// Display character.
    pub glyph: char,
    /// Display style for the glyph.
    pub style: Style,
    /// Display name, used in combat messages and the hover tooltip.
    pub name: String,
    /// Whether this actor blocks movement through its tile.
    pub blocks_movement: bool,
    /// Draw layer.
    pub render_order: RenderOrder,
    /// Combat capability, if any.
    pub fighter: Option<Fighter>,
    /// Decision-making capability, if any.
    pub ai: Option<Ai>,
}

impl Actor {
    /// Create the player actor.
    #[must_use]
    pub fn player(pos: Coord) -> Self {
        Self {
            pos,
            glyph: '@',
            style: theme::PLAYER,
            name: "Player".to_string(),
            blocks_movement: true,
            render_order: RenderOrder::Creature,
            fighter: Some(Fighter::new(30, 2, 5)),
            ai: None,
        }
    }

    /// Create an orc.
    #[must_use]
    pub fn orc(pos: Coord) -> Self {
        Self {
            pos,
            glyph: 'o',
            style: theme::ORC,
            name: "Orc".to_string(),
            blocks_movement: true,
            render_order: RenderOrder::Creature,
            fighter: Some(Fighter::new(10, 0, 3)),
            ai: Some(Ai::Hostile),
        }
    }

    /// Create a troll.
    #[must_use]
    pub fn troll(pos: Coord) -> Self {
        Self {
            pos,
            glyph: 'T',
            style: theme::TROLL,
            name: "Troll".to_string(),
            blocks_movement: true,
            render_order: RenderOrder::Creature,
            fighter: Some(Fighter::new(16, 1, 4)),
            ai: Some(Ai::Hostile),
        }
    }

    /// Check if this actor is alive and able to act.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.fighter.is_some_and(|f| f.hp() > 0)
    }

    /// Turn this actor into a corpse.
    ///
    /// The corpse keeps its fighter record (at zero hit points) but loses
    /// its AI and stops blocking movement.
    pub fn die(&mut self) {
        self.glyph = '%';
        self.style = theme::CORPSE;
        self.blocks_movement = false;
        self.render_order = RenderOrder::Corpse;
        self.ai = None;
        self.name = format!("remains of {}", self.name);
    }
}
