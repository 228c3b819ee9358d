use egui::Color32;

use crate::board::CellPos;
use crate::theme::Theme;
use crate::tools::{ColorTarget, GridStyle, Tool};

#[derive(Debug, Clone, PartialEq)]
pub enum SketchEvent {
    ToolChanged {
        old: Tool,
        new: Tool,
    },
    ColorChanged {
        target: ColorTarget,
        color: Color32,
    },
    BoardRegenerated {
        dimension: usize,
    },
    BoardReset,
    CellPainted {
        pos: CellPos,
        tool: Tool,
    },
    StrokeStarted {
        pos: CellPos,
    },
    StrokeEnded,
    GridStyleChanged(GridStyle),
    ThemeChanged(Theme),
}
