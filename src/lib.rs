#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod audio;
pub mod board;
pub mod command;
pub mod components;
pub mod config;
pub mod error;
pub mod event;
pub mod geometry;
pub mod input;
pub mod panels;
pub mod renderer;
pub mod state;
pub mod theme;
pub mod tools;

pub use app::PixelSketcherApp;
pub use board::{Board, Cell, CellPos, DimensionRange};
pub use command::{Command, Preferences, SketchContext};
pub use config::SketcherConfig;
pub use input::{InputEvent, InputHandler, InputRouter};
pub use renderer::Renderer;
pub use state::PointerState;
pub use theme::Theme;
pub use tools::{ColorTarget, GridStyle, Tool, ToolState};
