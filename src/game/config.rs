use serde::{Deserialize, Serialize};

/// Configuration for the game
///
/// The board is a square: playable cells span `playable_min..=playable_max` on
/// both axes, and the coordinates just outside that range (`playable_min - 1`
/// and `playable_max + 1`) are wall.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Lowest playable coordinate on each axis
    pub playable_min: i32,
    /// Highest playable coordinate on each axis
    pub playable_max: i32,
    /// Number of ordinary food cells kept on the board
    pub food1_count: usize,
    /// Number of bonus food cells kept on the board
    pub food2_count: usize,
    /// Score at which the player wins
    pub win_score: u32,
    /// Milliseconds between game ticks
    pub tick_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            playable_min: 1,
            playable_max: 28,
            food1_count: 5,
            food2_count: 1,
            win_score: 6,
            tick_ms: 100,
        }
    }
}

impl GameConfig {
    /// Width (and height) of the playable area in cells
    pub fn playable_span(&self) -> i32 {
        self.playable_max - self.playable_min + 1
    }

    /// Create a small board for testing
    pub fn small() -> Self {
        Self {
            playable_max: 8,
            food1_count: 2,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.playable_min, 1);
        assert_eq!(config.playable_max, 28);
        assert_eq!(config.food1_count, 5);
        assert_eq!(config.food2_count, 1);
        assert_eq!(config.win_score, 6);
        assert_eq!(config.tick_ms, 100);
    }

    #[test]
    fn test_playable_span() {
        assert_eq!(GameConfig::default().playable_span(), 28);
        assert_eq!(GameConfig::small().playable_span(), 8);
    }
}
