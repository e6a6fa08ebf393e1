use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{
    action::{Action, Direction},
    config::GameConfig,
    state::{Cell, GameSession, Snake},
};

/// Starting snake: tail at (5,5), head at (6,5), heading right.
const START_BODY: [Cell; 2] = [Cell { x: 6, y: 5 }, Cell { x: 5, y: 5 }];

/// Which food category the snake ate this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoodKind {
    /// +1 score, +1 length
    Food1,
    /// +2 score, +2 length
    Food2,
}

/// Type of collision that ended the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake hit the wall at the edge of the board
    Wall,
    /// Snake hit its own body
    SelfCollision,
}

/// Terminal outcome raised by a tick, at most once per session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEnd {
    Win,
    Loss(CollisionType),
}

/// Side effects of one tick, for the controller to act on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepResult {
    /// Food eaten this tick, if any
    pub ate: Option<FoodKind>,
    /// Terminal event raised this tick, if any
    pub end: Option<GameEnd>,
}

/// The game engine that owns the rules and the food RNG
pub struct GameEngine {
    config: GameConfig,
    rng: StdRng,
}

impl GameEngine {
    /// Create an engine with an entropy-seeded RNG
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            rng: StdRng::from_entropy(),
        }
    }

    /// Create an engine with a fixed seed, for reproducible food placement
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Start a fresh session: default snake, full food sets, heading right
    pub fn reset(&mut self) -> GameSession {
        let mut session = GameSession::new(Snake::new(START_BODY.to_vec()), Direction::Right);

        for _ in 0..self.config.food1_count {
            if let Some(cell) = self.free_cell(&session) {
                session.food1.push(cell);
            }
        }
        for _ in 0..self.config.food2_count {
            if let Some(cell) = self.free_cell(&session) {
                session.food2.push(cell);
            }
        }

        session
    }

    /// Execute one tick of the game
    ///
    /// The incoming action is applied first, then the head advances one cell.
    /// Food checks take precedence over collision checks; both food sets are
    /// replenished after consumption. On collision the tail is dropped and the
    /// fatal head appended so the losing position can be rendered. The win
    /// check runs after every surviving tick.
    pub fn step(&mut self, session: &mut GameSession, action: Action) -> StepResult {
        if !session.running {
            return StepResult::default();
        }

        // Last keypress wins; reversal is not filtered, so steering into the
        // neck is an immediate self-collision.
        if let Action::Move(direction) = action {
            session.direction = direction;
        }

        let new_head = session.snake.head().moved_in_direction(session.direction);

        let mut ate = None;

        if let Some(i) = session.food1.iter().position(|&c| c == new_head) {
            session.food1.remove(i);
            session.snake.push_head(new_head);
            session.score += 1;
            if let Some(cell) = self.free_cell(session) {
                session.food1.push(cell);
            }
            ate = Some(FoodKind::Food1);
        } else if let Some(i) = session.food2.iter().position(|&c| c == new_head) {
            session.food2.remove(i);
            session.snake.push_head(new_head);
            session.snake.grow_tail();
            session.score += 2;
            if let Some(cell) = self.free_cell(session) {
                session.food2.push(cell);
            }
            ate = Some(FoodKind::Food2);
        } else if session.snake.contains(new_head) || self.hits_wall(new_head) {
            session.running = false;
            if !session.ended {
                session.ended = true;
                // Show the fatal position in the final frame
                session.snake.pop_tail();
                session.snake.push_head(new_head);
                let collision = if self.hits_wall(new_head) {
                    CollisionType::Wall
                } else {
                    CollisionType::SelfCollision
                };
                return StepResult {
                    ate: None,
                    end: Some(GameEnd::Loss(collision)),
                };
            }
            return StepResult::default();
        } else {
            session.snake.pop_tail();
            session.snake.push_head(new_head);
        }

        if session.score >= self.config.win_score && !session.ended {
            session.running = false;
            session.ended = true;
            return StepResult {
                ate,
                end: Some(GameEnd::Win),
            };
        }

        StepResult { ate, end: None }
    }

    fn hits_wall(&self, cell: Cell) -> bool {
        cell.x < self.config.playable_min
            || cell.x > self.config.playable_max
            || cell.y < self.config.playable_min
            || cell.y > self.config.playable_max
    }

    /// Pick an unoccupied playable cell for food placement
    ///
    /// Samples uniformly with a bounded number of attempts, then falls back to
    /// a linear scan for the first free cell, so placement always terminates.
    /// Returns None only when the board is completely full.
    fn free_cell(&mut self, session: &GameSession) -> Option<Cell> {
        let min = self.config.playable_min;
        let max = self.config.playable_max;

        let attempts = (self.config.playable_span() as usize).pow(2) * 4;
        for _ in 0..attempts {
            let cell = Cell::new(self.rng.gen_range(min..=max), self.rng.gen_range(min..=max));
            if !session.is_occupied(cell) {
                return Some(cell);
            }
        }

        for y in min..=max {
            for x in min..=max {
                let cell = Cell::new(x, y);
                if !session.is_occupied(cell) {
                    return Some(cell);
                }
            }
        }

        None
    }
}
