//! Map, tile, and visibility types.

use bracket_pathfinding::prelude::{Algorithm2D, BaseMap, Point, SmallVec};
use ratatui::buffer::Buffer;
use serde::{Deserialize, Serialize};

use crate::game::actor::Actor;
use crate::render::theme;

/// Index of an actor in the map's actor storage.
///
/// Actors address each other through ids rather than references so that no
/// actor holds an owning pointer back into session state.
pub type ActorId = usize;

/// A coordinate on the map or on the display surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    /// X coordinate (column).
    pub x: u16,
    /// Y coordinate (row).
    pub y: u16,
}

impl Coord {
    /// Create a new coordinate.
    #[must_use]
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }

    /// Offset by a signed delta, clamping at zero.
    ///
    /// Returns `None` if the result would be negative on either axis; the
    /// caller still has to bounds-check against the map.
    #[must_use]
    pub fn offset(self, dx: i32, dy: i32) -> Option<Self> {
        let x = i32::from(self.x).checked_add(dx)?;
        let y = i32::from(self.y).checked_add(dy)?;
        if x < 0 || y < 0 {
            return None;
        }
        Some(Self::new(u16::try_from(x).ok()?, u16::try_from(y).ok()?))
    }

    /// Convert to a bracket geometry point.
    #[must_use]
    pub fn as_point(self) -> Point {
        Point::new(i32::from(self.x), i32::from(self.y))
    }
}

/// Kind of terrain on a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileKind {
    /// Open floor. Walkable and see-through.
    Floor,
    /// Solid wall. Neither walkable nor see-through.
    Wall,
    /// A gap in the floor. See-through but not walkable.
    Chasm,
}

impl TileKind {
    /// Check if actors can stand on this tile.
    #[must_use]
    pub const fn is_walkable(self) -> bool {
        matches!(self, TileKind::Floor)
    }

    /// Check if sight lines pass through this tile.
    #[must_use]
    pub const fn is_transparent(self) -> bool {
        !matches!(self, TileKind::Wall)
    }

    /// Display character for this terrain.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            TileKind::Floor => '.',
            TileKind::Wall => '#',
            TileKind::Chasm => ':',
        }
    }
}

/// A single tile on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    /// Kind of terrain.
    pub kind: TileKind,
}

impl Tile {
    /// Create a new tile with the given kind.
    #[must_use]
    pub const fn new(kind: TileKind) -> Self {
        Self { kind }
    }

    /// Create a floor tile.
    #[must_use]
    pub const fn floor() -> Self {
        Self::new(TileKind::Floor)
    }

    /// Create a wall tile.
    #[must_use]
    pub const fn wall() -> Self {
        Self::new(TileKind::Wall)
    }

    /// Create a chasm tile.
    #[must_use]
    pub const fn chasm() -> Self {
        Self::new(TileKind::Chasm)
    }
}

/// The dungeon map: tile grid, visibility state, and actor storage.
///
/// `visible` is rewritten from the player's field of view every turn;
/// `explored` only ever grows (a tile once seen stays remembered).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameMap {
    /// Width of the map in tiles.
    width: u16,
    /// Height of the map in tiles.
    height: u16,
    /// Tiles stored in row-major order.
    tiles: Vec<Tile>,
    /// Tiles currently in the player's field of view.
    visible: Vec<bool>,
    /// Tiles the player has ever seen.
    explored: Vec<bool>,
    /// All actors on this map, addressed by [`ActorId`].
    pub actors: Vec<Actor>,
}

impl GameMap {
    /// Create a new map filled with wall tiles.
    ///
    /// Returns `None` if width or height is zero.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Option<Self> {
        if width == 0 || height == 0 {
            return None;
        }

        let size = usize::from(width) * usize::from(height);
        Some(Self {
            width,
            height,
            tiles: vec![Tile::wall(); size],
            visible: vec![false; size],
            explored: vec![false; size],
            actors: Vec::new(),
        })
    }

    /// Get the width of the map.
    #[must_use]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Get the height of the map.
    #[must_use]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Check if a coordinate is within the map bounds.
    #[must_use]
    pub const fn in_bounds(&self, coord: Coord) -> bool {
        coord.x < self.width && coord.y < self.height
    }

    /// Convert a coordinate to an index into the tile grid.
    #[must_use]
    fn coord_to_index(&self, coord: Coord) -> Option<usize> {
        if self.in_bounds(coord) {
            Some(usize::from(coord.y) * usize::from(self.width) + usize::from(coord.x))
        } else {
            None
        }
    }

    /// Get the tile at the given coordinate.
    #[must_use]
    pub fn tile(&self, coord: Coord) -> Option<Tile> {
        self.coord_to_index(coord).map(|idx| self.tiles[idx])
    }

    /// Set the tile at the given coordinate.
    ///
    /// Returns `false` if the coordinate is out of bounds.
    pub fn set_tile(&mut self, coord: Coord, tile: Tile) -> bool {
        if let Some(idx) = self.coord_to_index(coord) {
            self.tiles[idx] = tile;
            true
        } else {
            false
        }
    }

    /// Check if actors can stand on the given coordinate.
    #[must_use]
    pub fn is_walkable(&self, coord: Coord) -> bool {
        self.tile(coord).is_some_and(|t| t.kind.is_walkable())
    }

    /// Check if the given coordinate is in the player's current field of view.
    #[must_use]
    pub fn is_visible(&self, coord: Coord) -> bool {
        self.coord_to_index(coord)
            .is_some_and(|idx| self.visible[idx])
    }

    /// Check if the given coordinate has ever been seen.
    #[must_use]
    pub fn is_explored(&self, coord: Coord) -> bool {
        self.coord_to_index(coord)
            .is_some_and(|idx| self.explored[idx])
    }

    /// Replace the visible set with a freshly computed field of view and
    /// fold it into the explored set.
    ///
    /// The visible set after this call depends only on `fov` — prior
    /// visibility state is discarded. The explored set is the union of its
    /// previous value and `fov`, so it never shrinks.
    pub fn apply_fov(&mut self, fov: &std::collections::HashSet<Point>) {
        self.visible.fill(false);
        for point in fov {
            let Ok(x) = u16::try_from(point.x) else {
                continue;
            };
            let Ok(y) = u16::try_from(point.y) else {
                continue;
            };
            if let Some(idx) = self.coord_to_index(Coord::new(x, y)) {
                self.visible[idx] = true;
                self.explored[idx] = true;
            }
        }
    }

    /// Iterate over all coordinates on the map in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        let width = self.width;
        let height = self.height;
        (0..height).flat_map(move |y| (0..width).map(move |x| Coord::new(x, y)))
    }

    /// Find the actor blocking movement at the given coordinate, if any.
    #[must_use]
    pub fn blocking_actor_at(&self, coord: Coord) -> Option<ActorId> {
        self.actors
            .iter()
            .position(|a| a.blocks_movement && a.pos == coord)
    }

    /// Iterate over all actors standing on the given coordinate.
    pub fn actors_at(&self, coord: Coord) -> impl Iterator<Item = &Actor> {
        self.actors.iter().filter(move |a| a.pos == coord)
    }

    /// Add an actor to the map, returning its id.
    pub fn push_actor(&mut self, actor: Actor) -> ActorId {
        self.actors.push(actor);
        self.actors.len() - 1
    }

    /// Draw the map and its actors onto the surface.
    ///
    /// Tiles in view use the lit palette, remembered tiles the faded one,
    /// unexplored tiles stay blank. Actors appear only on visible tiles,
    /// corpses under creatures.
    pub fn render(&self, buf: &mut Buffer) {
        let area = buf.area;
        for coord in self.coords() {
            if coord.x >= area.width || coord.y >= area.height {
                continue;
            }
            let Some(tile) = self.tile(coord) else {
                continue;
            };
            let style = if self.is_visible(coord) {
                theme::tile_visible(tile.kind)
            } else if self.is_explored(coord) {
                theme::tile_remembered(tile.kind)
            } else {
                continue;
            };
            buf[(area.x + coord.x, area.y + coord.y)]
                .set_char(tile.kind.glyph())
                .set_style(style);
        }

        let mut drawn: Vec<&Actor> = self
            .actors
            .iter()
            .filter(|a| self.is_visible(a.pos))
            .collect();
        drawn.sort_by_key(|a| a.render_order);
        for actor in drawn {
            if actor.pos.x < area.width && actor.pos.y < area.height {
                buf[(area.x + actor.pos.x, area.y + actor.pos.y)]
                    .set_char(actor.glyph)
                    .set_style(actor.style);
            }
        }
    }
}

impl Algorithm2D for GameMap {
    fn dimensions(&self) -> Point {
        Point::new(i32::from(self.width), i32::from(self.height))
    }
}

impl BaseMap for GameMap {
    fn is_opaque(&self, idx: usize) -> bool {
        !self.tiles[idx].kind.is_transparent()
    }

    fn get_available_exits(&self, idx: usize) -> SmallVec<[(usize, f32); 10]> {
        const DIRECTIONS: [(i32, i32, f32); 8] = [
            (0, -1, 1.0),
            (0, 1, 1.0),
            (-1, 0, 1.0),
            (1, 0, 1.0),
            (-1, -1, 1.45),
            (1, -1, 1.45),
            (-1, 1, 1.45),
            (1, 1, 1.45),
        ];

        let mut exits = SmallVec::new();
        let location = self.index_to_point2d(idx);

        for (dx, dy, cost) in DIRECTIONS {
            let dest = Point::new(location.x + dx, location.y + dy);
            if Algorithm2D::in_bounds(self, dest) {
                let dest_idx = self.point2d_to_index(dest);
                if self.tiles[dest_idx].kind.is_walkable() {
                    exits.push((dest_idx, cost));
                }
            }
        }

        exits
    }

    fn get_pathing_distance(&self, idx1: usize, idx2: usize) -> f32 {
        let p1 = self.index_to_point2d(idx1);
        let p2 = self.index_to_point2d(idx2);
        bracket_pathfinding::prelude::DistanceAlg::Pythagoras.distance2d(p1, p2)
    }
}
