mod context;

use egui::Color32;

use crate::tools::{ColorTarget, Tool};

pub use context::{Preferences, SketchContext};

/// Everything the control panel can ask the board to do
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Make `Tool` the active paint behavior
    SelectTool(Tool),
    /// A color picker changed
    SetColor { target: ColorTarget, color: Color32 },
    /// The dimension slider moved; out-of-range values are clamped
    SetDimension(i64),
    /// Advance the grid overlay to its next style
    CycleGridStyle,
    /// Clear every cell, keeping the dimension
    Reset,
    /// Flip between day and night
    ToggleTheme,
}
