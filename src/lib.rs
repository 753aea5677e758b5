// Allow unwrap in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
//! Delve: a turn-based terminal roguelike.
//!
//! The crate is organized around one session object, the [`Engine`], which
//! owns the dungeon map, the player, and the message log, and drives the
//! turn cycle:
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │   Input modes (EventHandler)        │
//! ├─────────────────────────────────────┤
//! │   Engine: player action →           │
//! │   enemy AI steps → FOV update       │
//! ├─────────────────────────────────────┤
//! │   Renderer: map, message log,       │
//! │   HP bar, hover tooltip             │
//! └─────────────────────────────────────┘
//! ```
//!
//! Field of view and enemy pathfinding are delegated to
//! `bracket-pathfinding` through trait implementations on [`GameMap`].
//! Frames are composited into a `ratatui` cell buffer; the binary drives a
//! crossterm terminal around it.

pub mod error;
pub mod game;
pub mod input;
pub mod render;
pub mod saves;

pub use error::{ActionError, ActionResult};

// Re-export key game types at crate root for convenience
pub use game::{
    Action, Actor, ActorId, Ai, Coord, DungeonConfig, Engine, Fighter, GameMap, Tile, TileKind,
    generate_dungeon,
};
pub use input::{Command, EventHandler};
pub use render::{Message, MessageLog};
