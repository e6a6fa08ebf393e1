//! Core game logic for Snake
//!
//! Everything in this module is free of I/O and rendering concerns: the rules
//! live in [`GameEngine`], the mutable state of one game in [`GameSession`].

pub mod action;
pub mod config;
pub mod engine;
pub mod state;

// Re-export commonly used types
pub use action::{Action, Direction};
pub use config::GameConfig;
pub use engine::{CollisionType, FoodKind, GameEnd, GameEngine, StepResult};
pub use state::{Cell, GameSession, Snake};
