//! Snake Arcade - classic Snake with a menu screen and two food types
//!
//! This library provides:
//! - Core game rules, free of any I/O (game module)
//! - Keyboard mapping (input module)
//! - TUI rendering with ratatui (render module)
//! - Session timing and running totals (metrics module)
//! - The menu/playing screen controller and event loop (app module)

pub mod app;
pub mod game;
pub mod input;
pub mod metrics;
pub mod render;
