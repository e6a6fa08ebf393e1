pub mod renderer;

pub use renderer::{Notice, Renderer};
