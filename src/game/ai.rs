//! Enemy decision steps.

use bracket_pathfinding::prelude::{Algorithm2D, DistanceAlg, a_star_search};

use crate::error::{ActionError, ActionResult};
use crate::game::action::Action;
use crate::game::actor::Ai;
use crate::game::map::{ActorId, GameMap};
use crate::render::message_log::MessageLog;

/// Run one decision/action step for the actor in slot `actor`.
///
/// # Errors
///
/// Propagates whatever the chosen action returns, including
/// [`ActionError::Impossible`] — the caller decides whether to swallow it.
pub(crate) fn take_turn(
    ai: Ai,
    map: &mut GameMap,
    log: &mut MessageLog,
    actor: ActorId,
    player: ActorId,
) -> ActionResult {
    match ai {
        Ai::Hostile => hostile_turn(map, log, actor, player),
    }
}

/// Hostile behavior: attack the player when adjacent, chase when visible,
/// stand still otherwise.
///
/// "Visible" uses the map's player-centered visible set: if the player can
/// see the monster, the monster can see the player.
fn hostile_turn(
    map: &mut GameMap,
    log: &mut MessageLog,
    actor: ActorId,
    player: ActorId,
) -> ActionResult {
    let pos = map
        .actors
        .get(actor)
        .ok_or(ActionError::MissingActor(actor))?
        .pos;
    let player_pos = map
        .actors
        .get(player)
        .ok_or(ActionError::MissingActor(player))?
        .pos;

    if !map.is_visible(pos) {
        return Action::Wait.perform(map, log, actor);
    }

    let dx = i32::from(player_pos.x) - i32::from(pos.x);
    let dy = i32::from(player_pos.y) - i32::from(pos.y);
    let distance = DistanceAlg::Chebyshev.distance2d(pos.as_point(), player_pos.as_point());
    if distance <= 1.0 {
        return Action::Melee { dx, dy }.perform(map, log, actor);
    }

    let start = map.point2d_to_index(pos.as_point());
    let goal = map.point2d_to_index(player_pos.as_point());
    let path = a_star_search(start, goal, map);
    if path.success && path.steps.len() > 1 {
        let next = map.index_to_point2d(path.steps[1]);
        let step_dx = next.x - i32::from(pos.x);
        let step_dy = next.y - i32::from(pos.y);
        return Action::Move {
            dx: step_dx,
            dy: step_dy,
        }
        .perform(map, log, actor);
    }

    // No route to the player this turn.
    Action::Wait.perform(map, log, actor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::actor::Actor;
    use crate::game::map::{Coord, Tile};
    use bracket_pathfinding::prelude::Point;
    use std::collections::HashSet;

    fn open_map(width: u16, height: u16) -> GameMap {
        let mut map = GameMap::new(width, height).unwrap();
        for coord in map.coords().collect::<Vec<_>>() {
            map.set_tile(coord, Tile::floor());
        }
        map
    }

    fn see_everything(map: &mut GameMap) {
        let all: HashSet<Point> = map.coords().map(Coord::as_point).collect();
        map.apply_fov(&all);
    }

    #[test]
    fn test_hostile_attacks_when_adjacent() {
        let mut map = open_map(10, 10);
        let mut log = MessageLog::new();
        let player = map.push_actor(Actor::player(Coord::new(4, 4)));
        let orc = map.push_actor(Actor::orc(Coord::new(5, 4)));
        see_everything(&mut map);

        take_turn(Ai::Hostile, &mut map, &mut log, orc, player).unwrap();

        let fighter = map.actors[player].fighter.unwrap();
        // Orc power 3, player defense 2
        assert_eq!(fighter.hp(), fighter.max_hp - 1);
        assert_eq!(map.actors[orc].pos, Coord::new(5, 4));
    }

    #[test]
    fn test_hostile_chases_when_visible() {
        let mut map = open_map(10, 10);
        let mut log = MessageLog::new();
        let player = map.push_actor(Actor::player(Coord::new(2, 2)));
        let orc = map.push_actor(Actor::orc(Coord::new(7, 2)));
        see_everything(&mut map);

        take_turn(Ai::Hostile, &mut map, &mut log, orc, player).unwrap();

        let new_pos = map.actors[orc].pos;
        let old_dist = DistanceAlg::Pythagoras
            .distance2d(Point::new(7, 2), Point::new(2, 2));
        let new_dist = DistanceAlg::Pythagoras
            .distance2d(new_pos.as_point(), Point::new(2, 2));
        assert!(new_dist < old_dist);
        // No attack happened
        let fighter = map.actors[player].fighter.unwrap();
        assert_eq!(fighter.hp(), fighter.max_hp);
    }

    #[test]
    fn test_hostile_waits_when_unseen() {
        let mut map = open_map(10, 10);
        let mut log = MessageLog::new();
        let player = map.push_actor(Actor::player(Coord::new(2, 2)));
        let orc = map.push_actor(Actor::orc(Coord::new(7, 7)));
        // No FOV applied: nothing is visible

        take_turn(Ai::Hostile, &mut map, &mut log, orc, player).unwrap();
        assert_eq!(map.actors[orc].pos, Coord::new(7, 7));
    }

    #[test]
    fn test_hostile_blocked_step_is_impossible() {
        let mut map = open_map(10, 10);
        let mut log = MessageLog::new();
        let player = map.push_actor(Actor::player(Coord::new(2, 2)));
        let orc = map.push_actor(Actor::orc(Coord::new(4, 2)));
        // A second orc stands on the only path cell the first would take
        map.push_actor(Actor::orc(Coord::new(3, 2)));
        // Wall off the detour tiles so A* has a single corridor
        for y in [1, 3] {
            for x in 1..=5 {
                map.set_tile(Coord::new(x, y), Tile::wall());
            }
        }
        see_everything(&mut map);

        let result = take_turn(Ai::Hostile, &mut map, &mut log, orc, player);
        assert!(matches!(result, Err(ActionError::Impossible(_))));
        assert_eq!(map.actors[orc].pos, Coord::new(4, 2));
    }

    #[test]
    fn test_missing_player_propagates() {
        let mut map = open_map(10, 10);
        let mut log = MessageLog::new();
        let orc = map.push_actor(Actor::orc(Coord::new(4, 2)));

        let result = take_turn(Ai::Hostile, &mut map, &mut log, orc, 42);
        assert_eq!(result, Err(ActionError::MissingActor(42)));
    }
}
