use egui::{Color32, CursorIcon};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::board::Cell;

mod grid_style;
pub use grid_style::GridStyle;

/// The active paint behavior.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tool {
    #[default]
    Pencil,
    Eraser,
    RandomPaint,
}

impl Tool {
    pub const ALL: [Tool; 3] = [Tool::Pencil, Tool::Eraser, Tool::RandomPaint];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Pencil => "Pencil",
            Self::Eraser => "Eraser",
            Self::RandomPaint => "Random",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Pencil => "✏",
            Self::Eraser => "⌫",
            Self::RandomPaint => "🎨",
        }
    }

    /// Cursor shown while hovering the board.
    pub fn cursor(&self) -> CursorIcon {
        match self {
            Self::Pencil => CursorIcon::Crosshair,
            Self::Eraser => CursorIcon::Cell,
            Self::RandomPaint => CursorIcon::PointingHand,
        }
    }

    /// Sound played when a cell is painted with this tool.
    pub fn cue(&self) -> &'static str {
        match self {
            Self::Eraser => "erase",
            Self::Pencil | Self::RandomPaint => "paint",
        }
    }

    /// Apply this tool's paint operation to one cell.
    ///
    /// Random paint draws a new color on every call, so dragging back over a
    /// cell in the same stroke re-randomizes it.
    pub fn apply<R: Rng + ?Sized>(&self, cell: &mut Cell, tools: &ToolState, rng: &mut R) {
        match self {
            Self::Pencil => cell.paint(tools.pencil_color),
            Self::Eraser => cell.clear(tools.eraser_color),
            Self::RandomPaint => cell.paint(random_color(rng)),
        }
    }
}

pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> Color32 {
    let mut rgb = [0u8; 3];
    rng.fill(&mut rgb);
    Color32::from_rgb(rgb[0], rgb[1], rgb[2])
}

/// Which color picker a color change came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorTarget {
    Pencil,
    Eraser,
    GridLine,
}

impl ColorTarget {
    /// The tool this color belongs to, if any.
    pub fn tool(&self) -> Option<Tool> {
        match self {
            Self::Pencil => Some(Tool::Pencil),
            Self::Eraser => Some(Tool::Eraser),
            Self::GridLine => None,
        }
    }
}

/// Everything the control panel can change about how painting behaves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolState {
    pub tool: Tool,
    pub pencil_color: Color32,
    /// Also the board background: blank and erased cells take this color.
    pub eraser_color: Color32,
    pub grid_color: Color32,
    pub grid_style: GridStyle,
}

impl Default for ToolState {
    fn default() -> Self {
        Self {
            tool: Tool::Pencil,
            pencil_color: Color32::BLACK,
            eraser_color: Color32::WHITE,
            grid_color: Color32::from_gray(190),
            grid_style: GridStyle::None,
        }
    }
}

impl ToolState {
    pub fn background(&self) -> Color32 {
        self.eraser_color
    }

    /// The color the active tool paints with. Random paint has none.
    pub fn active_color(&self) -> Option<Color32> {
        match self.tool {
            Tool::Pencil => Some(self.pencil_color),
            Tool::Eraser => Some(self.eraser_color),
            Tool::RandomPaint => None,
        }
    }

    pub fn color(&self, target: ColorTarget) -> Color32 {
        match target {
            ColorTarget::Pencil => self.pencil_color,
            ColorTarget::Eraser => self.eraser_color,
            ColorTarget::GridLine => self.grid_color,
        }
    }

    /// Store a picked color. Returns true when the active tool's paint color
    /// changed as a result.
    pub fn set_color(&mut self, target: ColorTarget, color: Color32) -> bool {
        match target {
            ColorTarget::Pencil => self.pencil_color = color,
            ColorTarget::Eraser => self.eraser_color = color,
            ColorTarget::GridLine => self.grid_color = color,
        }
        target.tool() == Some(self.tool)
    }
}
