//! Seeded dungeon generation: rooms, corridors, and monster placement.

use crate::game::actor::Actor;
use crate::game::map::{ActorId, Coord, GameMap, Tile};
use crate::game::rng::Rng;

/// Parameters for dungeon generation.
#[derive(Debug, Clone, Copy)]
pub struct DungeonConfig {
    /// Map width in tiles.
    pub width: u16,
    /// Map height in tiles.
    pub height: u16,
    /// Number of room placement attempts.
    pub max_rooms: u16,
    /// Smallest room side length, walls excluded.
    pub room_min_size: u16,
    /// Largest room side length, walls excluded.
    pub room_max_size: u16,
    /// Upper bound on monsters spawned per room.
    pub max_monsters_per_room: u16,
}

impl Default for DungeonConfig {
    fn default() -> Self {
        Self {
            width: 80,
            height: 44,
            max_rooms: 30,
            room_min_size: 6,
            room_max_size: 10,
            max_monsters_per_room: 2,
        }
    }
}

/// Error type for dungeon generation.
#[derive(Debug, Clone)]
pub struct DungeonGenError {
    /// Description of the error.
    pub reason: String,
}

impl std::fmt::Display for DungeonGenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Dungeon generation error: {}", self.reason)
    }
}

impl std::error::Error for DungeonGenError {}

/// An axis-aligned rectangular room, outer walls included.
#[derive(Debug, Clone, Copy)]
struct Room {
    x1: u16,
    y1: u16,
    x2: u16,
    y2: u16,
}

impl Room {
    const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x1: x,
            y1: y,
            x2: x + width,
            y2: y + height,
        }
    }

    /// Center of the room, used as a corridor anchor and spawn point.
    const fn center(&self) -> Coord {
        Coord::new((self.x1 + self.x2) / 2, (self.y1 + self.y2) / 2)
    }

    /// Iterate the interior tiles (the outer ring stays wall).
    fn inner(&self) -> impl Iterator<Item = Coord> {
        let (x1, x2, y1, y2) = (self.x1, self.x2, self.y1, self.y2);
        (y1 + 1..y2).flat_map(move |y| (x1 + 1..x2).map(move |x| Coord::new(x, y)))
    }

    /// Check if this room overlaps another, shared walls included.
    const fn intersects(&self, other: &Room) -> bool {
        self.x1 <= other.x2 && self.x2 >= other.x1 && self.y1 <= other.y2 && self.y2 >= other.y1
    }
}

/// Generate a dungeon and its starting actors.
///
/// The same seed and config always produce the same dungeon. The player is
/// placed at the center of the first room; the returned id addresses it in
/// the map's actor storage.
///
/// # Errors
///
/// Returns an error if the configured dimensions cannot hold a single room.
pub fn generate_dungeon(
    seed: u64,
    config: &DungeonConfig,
) -> Result<(GameMap, ActorId), DungeonGenError> {
    let mut map = GameMap::new(config.width, config.height).ok_or_else(|| DungeonGenError {
        reason: "Map dimensions must be non-zero".to_string(),
    })?;
    if config.width < config.room_max_size + 2 || config.height < config.room_max_size + 2 {
        return Err(DungeonGenError {
            reason: format!(
                "Map {}x{} too small for rooms up to {} tiles",
                config.width, config.height, config.room_max_size
            ),
        });
    }

    let mut rng = Rng::new(seed);
    let mut rooms: Vec<Room> = Vec::new();
    let mut player = None;

    for _ in 0..config.max_rooms {
        let room_width = rng.range_u16(config.room_min_size, config.room_max_size + 1);
        let room_height = rng.range_u16(config.room_min_size, config.room_max_size + 1);
        let x = rng.range_u16(0, config.width - room_width - 1);
        let y = rng.range_u16(0, config.height - room_height - 1);
        let room = Room::new(x, y, room_width, room_height);

        if rooms.iter().any(|other| room.intersects(other)) {
            continue;
        }

        for coord in room.inner() {
            map.set_tile(coord, Tile::floor());
        }

        if let Some(previous) = rooms.last() {
            carve_tunnel(&mut map, &mut rng, previous.center(), room.center());
            spawn_monsters(&mut map, &mut rng, &room, config.max_monsters_per_room);
            maybe_carve_chasm(&mut map, &mut rng, &room);
        } else {
            player = Some(map.push_actor(Actor::player(room.center())));
        }

        rooms.push(room);
    }

    let player = player.ok_or_else(|| DungeonGenError {
        reason: "No rooms could be placed".to_string(),
    })?;
    log::debug!(
        "generated dungeon: seed={seed} rooms={} actors={}",
        rooms.len(),
        map.actors.len()
    );

    Ok((map, player))
}

/// Carve an L-shaped corridor between two points.
///
/// The corner direction (horizontal-first or vertical-first) is random.
fn carve_tunnel(map: &mut GameMap, rng: &mut Rng, from: Coord, to: Coord) {
    let corner = if rng.chance(50) {
        Coord::new(to.x, from.y)
    } else {
        Coord::new(from.x, to.y)
    };

    for coord in line_between(from, corner).chain(line_between(corner, to)) {
        map.set_tile(coord, Tile::floor());
    }
}

/// Tiles along a horizontal or vertical segment, endpoints included.
fn line_between(from: Coord, to: Coord) -> impl Iterator<Item = Coord> {
    let xs = from.x.min(to.x)..=from.x.max(to.x);
    let y_range = from.y.min(to.y)..=from.y.max(to.y);
    xs.flat_map(move |x| y_range.clone().map(move |y| Coord::new(x, y)))
}

/// Spawn up to `max_monsters` hostile monsters in a room.
///
/// Roughly four orcs are spawned for every troll.
fn spawn_monsters(map: &mut GameMap, rng: &mut Rng, room: &Room, max_monsters: u16) {
    let count = rng.range_u16(0, max_monsters + 1);

    for _ in 0..count {
        let x = rng.range_u16(room.x1 + 1, room.x2);
        let y = rng.range_u16(room.y1 + 1, room.y2);
        let pos = Coord::new(x, y);

        if !map.is_walkable(pos) || map.actors_at(pos).next().is_some() {
            continue;
        }
        let monster = if rng.chance(80) {
            Actor::orc(pos)
        } else {
            Actor::troll(pos)
        };
        map.push_actor(monster);
    }
}

/// Occasionally open a chasm tile in a room interior.
fn maybe_carve_chasm(map: &mut GameMap, rng: &mut Rng, room: &Room) {
    if !rng.chance(10) {
        return;
    }
    let x = rng.range_u16(room.x1 + 1, room.x2);
    let y = rng.range_u16(room.y1 + 1, room.y2);
    let pos = Coord::new(x, y);
    if map.actors_at(pos).next().is_none() {
        map.set_tile(pos, Tile::chasm());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::map::TileKind;

    #[test]
    fn test_generation_determinism() {
        let config = DungeonConfig::default();
        let (map1, player1) = generate_dungeon(42, &config).unwrap();
        let (map2, player2) = generate_dungeon(42, &config).unwrap();

        assert_eq!(player1, player2);
        assert_eq!(map1.actors.len(), map2.actors.len());
        for coord in map1.coords() {
            assert_eq!(map1.tile(coord), map2.tile(coord));
        }
        for (a, b) in map1.actors.iter().zip(map2.actors.iter()) {
            assert_eq!(a.pos, b.pos);
            assert_eq!(a.name, b.name);
        }
    }

    #[test]
    fn test_different_seeds_differ() {
        let config = DungeonConfig::default();
        let (map1, _) = generate_dungeon(1, &config).unwrap();
        let (map2, _) = generate_dungeon(2, &config).unwrap();

        let differences = map1
            .coords()
            .filter(|&c| map1.tile(c) != map2.tile(c))
            .count();
        assert!(differences > 0);
    }

    #[test]
    fn test_player_starts_on_floor() {
        let config = DungeonConfig::default();
        let (map, player) = generate_dungeon(7, &config).unwrap();

        let pos = map.actors[player].pos;
        assert_eq!(map.tile(pos).unwrap().kind, TileKind::Floor);
        assert_eq!(map.actors[player].name, "Player");
    }

    #[test]
    fn test_monsters_stand_apart_on_floor() {
        let config = DungeonConfig::default();
        let (map, player) = generate_dungeon(1234, &config).unwrap();

        for (id, actor) in map.actors.iter().enumerate() {
            assert!(map.is_walkable(actor.pos) || !actor.blocks_movement);
            if id != player {
                assert_ne!(actor.pos, map.actors[player].pos);
            }
        }
        // No two blocking actors share a tile
        for (i, a) in map.actors.iter().enumerate() {
            for b in map.actors.iter().skip(i + 1) {
                if a.blocks_movement && b.blocks_movement {
                    assert_ne!(a.pos, b.pos);
                }
            }
        }
    }

    #[test]
    fn test_too_small_map_rejected() {
        let config = DungeonConfig {
            width: 8,
            height: 8,
            ..DungeonConfig::default()
        };
        assert!(generate_dungeon(1, &config).is_err());
    }
}
