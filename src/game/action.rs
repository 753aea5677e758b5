//! Game actions: the single decision/action step actors take each turn.

use crate::error::{ActionError, ActionResult};
use crate::game::map::{ActorId, GameMap};
use crate::render::message_log::MessageLog;
use crate::render::theme;

/// One thing an actor can attempt on its turn.
///
/// Performing an action either mutates the world, or fails with
/// [`ActionError::Impossible`] and changes nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Do nothing this turn. Always succeeds.
    Wait,
    /// Step one tile in the given direction.
    Move {
        /// Column delta, in `-1..=1`.
        dx: i32,
        /// Row delta, in `-1..=1`.
        dy: i32,
    },
    /// Melee-attack whatever blocks the tile in the given direction.
    Melee {
        /// Column delta, in `-1..=1`.
        dx: i32,
        /// Row delta, in `-1..=1`.
        dy: i32,
    },
    /// Attack if the destination is blocked by a fighter, move otherwise.
    Bump {
        /// Column delta, in `-1..=1`.
        dx: i32,
        /// Row delta, in `-1..=1`.
        dy: i32,
    },
}

impl Action {
    /// Perform this action for the actor in slot `actor`.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::Impossible`] when the action has no effect
    /// this turn (blocked movement, nothing to attack), and
    /// [`ActionError::MissingActor`] when `actor` or a melee target no
    /// longer exists.
    pub fn perform(self, map: &mut GameMap, log: &mut MessageLog, actor: ActorId) -> ActionResult {
        match self {
            Action::Wait => Ok(()),
            Action::Move { dx, dy } => perform_move(map, actor, dx, dy),
            Action::Melee { dx, dy } => perform_melee(map, log, actor, dx, dy),
            Action::Bump { dx, dy } => {
                let pos = map
                    .actors
                    .get(actor)
                    .ok_or(ActionError::MissingActor(actor))?
                    .pos;
                let blocked = pos
                    .offset(dx, dy)
                    .and_then(|dest| map.blocking_actor_at(dest))
                    .is_some_and(|id| map.actors[id].fighter.is_some());
                if blocked {
                    perform_melee(map, log, actor, dx, dy)
                } else {
                    perform_move(map, actor, dx, dy)
                }
            }
        }
    }
}

/// Step the actor one tile, failing if the destination is not open.
fn perform_move(map: &mut GameMap, actor: ActorId, dx: i32, dy: i32) -> ActionResult {
    let pos = map
        .actors
        .get(actor)
        .ok_or(ActionError::MissingActor(actor))?
        .pos;

    let dest = pos
        .offset(dx, dy)
        .ok_or_else(|| ActionError::impossible("That way is blocked."))?;
    if !map.is_walkable(dest) {
        return Err(ActionError::impossible("That way is blocked."));
    }
    if map.blocking_actor_at(dest).is_some() {
        return Err(ActionError::impossible("That way is blocked."));
    }

    map.actors[actor].pos = dest;
    Ok(())
}

/// Strike the fighter blocking the destination tile.
fn perform_melee(
    map: &mut GameMap,
    log: &mut MessageLog,
    actor: ActorId,
    dx: i32,
    dy: i32,
) -> ActionResult {
    let attacker = map
        .actors
        .get(actor)
        .ok_or(ActionError::MissingActor(actor))?;
    let attacker_name = attacker.name.clone();
    // Enemies carry an AI, the player does not; that distinction picks the
    // message style without threading the player id through every action.
    let attack_style = if attacker.ai.is_some() {
        theme::ENEMY_ATTACK
    } else {
        theme::PLAYER_ATTACK
    };
    let power = attacker
        .fighter
        .ok_or_else(|| ActionError::impossible("Nothing to attack with."))?
        .power;

    let dest = attacker
        .pos
        .offset(dx, dy)
        .ok_or_else(|| ActionError::impossible("Nothing to attack."))?;
    let target_id = map
        .blocking_actor_at(dest)
        .ok_or_else(|| ActionError::impossible("Nothing to attack."))?;

    let target = &mut map.actors[target_id];
    let Some(fighter) = target.fighter.as_mut() else {
        return Err(ActionError::impossible("Nothing to attack."));
    };

    let damage = power - fighter.defense;
    let description = format!("{attacker_name} attacks {}", target.name);
    if damage > 0 {
        fighter.take_damage(damage);
        log.add(
            format!("{description} for {damage} hit points."),
            attack_style,
        );
    } else {
        log.add(
            format!("{description} but does no damage."),
            attack_style,
        );
    }

    Ok(())
}
