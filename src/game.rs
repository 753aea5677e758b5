//! Game layer: the map, its actors, and per-turn orchestration.
//!
//! The [`Engine`] owns one game session — the dungeon, the player, and the
//! message log — and drives the turn cycle: player action, enemy AI steps,
//! field-of-view recomputation, frame composition.

mod action;
mod actor;
mod ai;
mod dungeon;
mod engine;
mod map;
mod rng;

pub use action::Action;
pub use actor::{Actor, Ai, Fighter, RenderOrder};
pub use dungeon::{DungeonConfig, DungeonGenError, generate_dungeon};
pub use engine::{Engine, FOV_RADIUS, HP_BAR_HEIGHT, HP_BAR_WIDTH, LOG_PANEL_HEIGHT};
pub use map::{ActorId, Coord, GameMap, Tile, TileKind};
pub use rng::Rng;
