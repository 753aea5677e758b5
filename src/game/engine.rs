//! Turn orchestration and frame composition.

use bracket_pathfinding::prelude::field_of_view_set;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use serde::{Deserialize, Serialize};

use crate::error::{ActionError, ActionResult};
use crate::game::action::Action;
use crate::game::ai;
use crate::game::map::{ActorId, Coord, GameMap};
use crate::input::EventHandler;
use crate::render::bar::render_bar;
use crate::render::message_log::MessageLog;
use crate::render::names::render_names_at;
use crate::render::theme;

/// Field-of-view radius around the player, in tiles.
pub const FOV_RADIUS: i32 = 8;

/// Height of the message-log panel, in rows.
pub const LOG_PANEL_HEIGHT: u16 = 5;

/// Height of the HP bar, in rows.
pub const HP_BAR_HEIGHT: u16 = 1;

/// Width of the HP bar, in columns.
pub const HP_BAR_WIDTH: u16 = 40;

/// Session state for one game: the map, the player, the message log, and
/// the active input mode.
///
/// The engine is an explicitly constructed context object — subsystems that
/// need session state receive it as an argument, nothing lives in globals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Engine {
    /// The current dungeon level. Replaced wholesale on level transition.
    pub game_map: GameMap,
    /// Gameplay messages shown in the log panel.
    pub message_log: MessageLog,
    /// Last reported mouse position, in surface cells.
    pub mouse_location: Coord,
    /// The active input-handling mode.
    pub event_handler: EventHandler,
    /// Slot of the controlled actor in `game_map`.
    player: ActorId,
}

impl Engine {
    /// Create an engine for a fresh session.
    ///
    /// `player` must address the controlled actor inside `game_map`.
    #[must_use]
    pub fn new(game_map: GameMap, player: ActorId) -> Self {
        Self {
            game_map,
            message_log: MessageLog::new(),
            mouse_location: Coord::new(0, 0),
            event_handler: EventHandler::MainGame,
            player,
        }
    }

    /// Slot of the controlled actor.
    #[must_use]
    pub const fn player(&self) -> ActorId {
        self.player
    }

    /// Convenience accessor for the player actor.
    #[must_use]
    pub fn player_actor(&self) -> Option<&crate::game::actor::Actor> {
        self.game_map.actors.get(self.player)
    }

    /// Perform one player action and, if it consumed the turn, run the rest
    /// of the turn: enemy actions, death sweep, and FOV recomputation.
    ///
    /// An [`ActionError::Impossible`] from the player's own action does not
    /// consume the turn; its reason is surfaced in the message log instead.
    ///
    /// # Errors
    ///
    /// Propagates structural failures ([`ActionError::MissingActor`]) from
    /// the player's action or any enemy's.
    pub fn advance_turn(&mut self, action: Action) -> ActionResult {
        if self.event_handler != EventHandler::MainGame {
            return Ok(());
        }

        match action.perform(&mut self.game_map, &mut self.message_log, self.player) {
            Ok(()) => {}
            Err(ActionError::Impossible(reason)) => {
                self.message_log.add(reason, theme::IMPOSSIBLE);
                return Ok(());
            }
            Err(err) => return Err(err),
        }

        self.reap_dead();
        self.handle_enemy_turns()?;
        self.update_fov();
        Ok(())
    }

    /// Run one AI step for every actor on the map other than the player.
    ///
    /// Actors without an AI capability are skipped. An
    /// [`ActionError::Impossible`] from an actor's action is swallowed —
    /// that actor simply forfeits its turn. Any other failure propagates
    /// immediately. Iteration order is unspecified.
    ///
    /// # Errors
    ///
    /// Returns the first non-`Impossible` failure raised by an enemy action.
    pub fn handle_enemy_turns(&mut self) -> ActionResult {
        for id in 0..self.game_map.actors.len() {
            if id == self.player {
                continue;
            }
            let Some(enemy_ai) = self.game_map.actors[id].ai else {
                continue;
            };
            match ai::take_turn(
                enemy_ai,
                &mut self.game_map,
                &mut self.message_log,
                id,
                self.player,
            ) {
                Ok(()) | Err(ActionError::Impossible(_)) => {}
                Err(err) => return Err(err),
            }
        }
        self.reap_dead();
        Ok(())
    }

    /// Recompute the visible area from the player's point of view.
    ///
    /// Visibility is a pure function of the player's position, the tile
    /// transparency grid, and [`FOV_RADIUS`]; the explored set grows by the
    /// newly visible tiles and never shrinks.
    pub fn update_fov(&mut self) {
        let Some(player) = self.game_map.actors.get(self.player) else {
            return;
        };
        let fov = field_of_view_set(player.pos.as_point(), FOV_RADIUS, &self.game_map);
        self.game_map.apply_fov(&fov);
    }

    /// Composite the frame onto the given surface.
    ///
    /// Layering order is fixed: the map first, then the message-log panel
    /// ([`LOG_PANEL_HEIGHT`] rows directly above the HP bar), then the HP
    /// bar ([`HP_BAR_WIDTH`] columns anchored to the bottom edge), then the
    /// hover tooltip at the tracked mouse location. Layout is recomputed on
    /// every call from the surface dimensions. Never fails; panels that do
    /// not fit are skipped.
    pub fn render(&self, buf: &mut Buffer) {
        let area = buf.area;

        self.game_map.render(buf);

        if area.height >= LOG_PANEL_HEIGHT + HP_BAR_HEIGHT {
            let log_area = Rect::new(
                area.x,
                area.y + area.height - LOG_PANEL_HEIGHT - HP_BAR_HEIGHT,
                area.width,
                LOG_PANEL_HEIGHT,
            );
            self.message_log.render(buf, log_area);

            if let Some(fighter) = self.player_actor().and_then(|a| a.fighter) {
                render_bar(
                    buf,
                    fighter.hp(),
                    fighter.max_hp,
                    HP_BAR_WIDTH,
                    area.y + area.height - HP_BAR_HEIGHT,
                );
            }
        }

        render_names_at(buf, &self.game_map, self.mouse_location);
    }

    /// Convert freshly slain actors into corpses and log their deaths.
    ///
    /// When the player dies the input mode switches to
    /// [`EventHandler::GameOver`].
    fn reap_dead(&mut self) {
        for id in 0..self.game_map.actors.len() {
            let actor = &self.game_map.actors[id];
            let slain = actor.fighter.is_some_and(|f| f.hp() == 0)
                && actor.render_order == crate::game::actor::RenderOrder::Creature;
            if !slain {
                continue;
            }

            if id == self.player {
                self.message_log.add("You died!", theme::PLAYER_DIE);
                self.event_handler = EventHandler::GameOver;
            } else {
                let name = self.game_map.actors[id].name.clone();
                self.message_log
                    .add(format!("{name} is dead!"), theme::ENEMY_DIE);
            }
            self.game_map.actors[id].die();
        }
    }
}
