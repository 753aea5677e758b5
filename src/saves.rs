//! Saving and loading game sessions.

use std::fmt;
use std::fs;
use std::path::Path;

use crate::game::Engine;

/// Error type for save/load operations.
#[derive(Debug)]
pub enum SaveError {
    /// Reading or writing the save file failed.
    Io(std::io::Error),
    /// The save file did not contain a valid game.
    Format(serde_json::Error),
}

impl fmt::Display for SaveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaveError::Io(e) => write!(f, "Save file I/O error: {e}"),
            SaveError::Format(e) => write!(f, "Save file format error: {e}"),
        }
    }
}

impl std::error::Error for SaveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SaveError::Io(e) => Some(e),
            SaveError::Format(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for SaveError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for SaveError {
    fn from(e: serde_json::Error) -> Self {
        Self::Format(e)
    }
}

/// Write the whole session to `path` as pretty JSON.
///
/// # Errors
///
/// Returns [`SaveError::Io`] if the file cannot be written and
/// [`SaveError::Format`] if the engine cannot be serialized.
pub fn save_game(engine: &Engine, path: &Path) -> Result<(), SaveError> {
    let json = serde_json::to_string_pretty(engine)?;
    fs::write(path, json)?;
    log::info!("saved game to {}", path.display());
    Ok(())
}

/// Load a session previously written by [`save_game`].
///
/// # Errors
///
/// Returns [`SaveError::Io`] if the file cannot be read and
/// [`SaveError::Format`] if its contents are not a valid session.
pub fn load_game(path: &Path) -> Result<Engine, SaveError> {
    let json = fs::read_to_string(path)?;
    let engine = serde_json::from_str(&json)?;
    log::info!("loaded game from {}", path.display());
    Ok(engine)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Actor, Coord, GameMap, Tile};
    use crate::render::theme;

    fn small_engine() -> Engine {
        let mut map = GameMap::new(12, 12).unwrap();
        for coord in map.coords().collect::<Vec<_>>() {
            map.set_tile(coord, Tile::floor());
        }
        let player = map.push_actor(Actor::player(Coord::new(5, 5)));
        map.push_actor(Actor::troll(Coord::new(8, 8)));
        let mut engine = Engine::new(map, player);
        engine.message_log.add("Welcome back.", theme::WELCOME);
        engine.update_fov();
        engine
    }

    #[test]
    fn test_save_then_load_restores_session() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("save.json");
        let engine = small_engine();

        save_game(&engine, &path).unwrap();
        let loaded = load_game(&path).unwrap();

        assert_eq!(loaded.player(), engine.player());
        assert_eq!(loaded.game_map.actors.len(), 2);
        assert_eq!(loaded.game_map.actors[1].name, "Troll");
        assert_eq!(loaded.message_log.messages()[0].text, "Welcome back.");
        // Visibility state survives the round trip
        for coord in engine.game_map.coords() {
            assert_eq!(
                engine.game_map.is_explored(coord),
                loaded.game_map.is_explored(coord)
            );
        }
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_game(&dir.path().join("nope.json"));
        assert!(matches!(result, Err(SaveError::Io(_))));
    }

    #[test]
    fn test_load_garbage_is_format_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "not a save").unwrap();
        let result = load_game(&path);
        assert!(matches!(result, Err(SaveError::Format(_))));
    }
}
