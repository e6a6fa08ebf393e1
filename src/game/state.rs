use std::time::Instant;

use super::action::Direction;

/// A cell on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move cell by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move cell one step in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    pub body: Vec<Cell>,
}

impl Snake {
    /// Create a snake from head to tail
    pub fn new(body: Vec<Cell>) -> Self {
        debug_assert!(body.len() >= 2);
        Self { body }
    }

    /// Get the head position
    pub fn head(&self) -> Cell {
        self.body[0]
    }

    /// Get the tail position (last segment)
    pub fn tail(&self) -> Cell {
        self.body[self.body.len() - 1]
    }

    /// Check if any segment occupies the given cell
    pub fn contains(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Advance the head onto a new cell, keeping the rest of the body
    pub fn push_head(&mut self, cell: Cell) {
        self.body.insert(0, cell);
    }

    /// Drop the tail segment
    pub fn pop_tail(&mut self) {
        self.body.pop();
    }

    /// Extend the tail one cell backward along the trailing heading
    ///
    /// The heading between the last two segments points from the tail toward
    /// the body; the new tail continues one cell in the opposite direction,
    /// so the body stays contiguous.
    pub fn grow_tail(&mut self) {
        let tail = self.tail();
        let ahead = self.body[self.body.len() - 2];
        let dx = ahead.x - tail.x;
        let dy = ahead.y - tail.y;
        self.body.push(tail.moved_by(-dx, -dy));
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// The full mutable state of one game, from Start to Win/Loss/ExitToMenu
#[derive(Debug, Clone)]
pub struct GameSession {
    pub snake: Snake,
    /// Ordinary food cells (+1 score, +1 length)
    pub food1: Vec<Cell>,
    /// Bonus food cells (+2 score, +2 length)
    pub food2: Vec<Cell>,
    pub direction: Direction,
    pub score: u32,
    /// Cleared when the game stops ticking for any reason
    pub running: bool,
    /// Set exactly once, when the terminal notice has been raised
    pub ended: bool,
    pub started_at: Instant,
}

impl GameSession {
    pub fn new(snake: Snake, direction: Direction) -> Self {
        Self {
            snake,
            food1: Vec::new(),
            food2: Vec::new(),
            direction,
            score: 0,
            running: true,
            ended: false,
            started_at: Instant::now(),
        }
    }

    /// Check if a cell is occupied by the snake or any food
    pub fn is_occupied(&self, cell: Cell) -> bool {
        self.snake.contains(cell) || self.food1.contains(&cell) || self.food2.contains(&cell)
    }

    /// Final snake length reported in terminal notices
    pub fn final_length(&self) -> u32 {
        self.score + 2
    }

    /// Seconds elapsed since the session started
    pub fn elapsed_secs(&self) -> f64 {
        self.started_at.elapsed().as_secs_f64()
    }
}
