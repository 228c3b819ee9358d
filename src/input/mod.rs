use egui::{Context, PointerButton};

use crate::board::CellPos;
use crate::geometry::BoardLayout;

mod router;
pub use router::InputRouter;

/// Pointer input in board terms, in the order the host delivered it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Primary button pressed over a cell
    PointerDown { cell: CellPos },
    /// Pointer moved onto a different cell
    PointerEnter { cell: CellPos },
    /// Primary button released, anywhere
    PointerUp,
}

/// Handles converting raw egui input into our domain-specific InputEvents
#[derive(Debug)]
pub struct InputHandler {
    layout: Option<BoardLayout>,
    hovered: Option<CellPos>,
    accepts_press: bool,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            layout: None,
            hovered: None,
            accepts_press: true,
        }
    }

    /// Update where the board is on screen (e.g. after a resize or regenerate)
    pub fn set_layout(&mut self, layout: BoardLayout) {
        if self.layout != Some(layout) {
            self.hovered = None;
        }
        self.layout = Some(layout);
    }

    /// Presses are ignored while something (a popup) covers the board.
    pub fn set_accepts_press(&mut self, accepts: bool) {
        self.accepts_press = accepts;
    }

    pub fn hovered(&self) -> Option<CellPos> {
        self.hovered
    }

    fn cell_at(&self, pos: egui::Pos2) -> Option<CellPos> {
        self.layout.and_then(|layout| layout.cell_at(pos))
    }

    /// Translate one raw egui event.
    pub fn translate(&mut self, event: &egui::Event) -> Option<InputEvent> {
        match event {
            egui::Event::PointerMoved(pos) => {
                let cell = self.cell_at(*pos);
                if cell == self.hovered {
                    return None;
                }
                self.hovered = cell;
                cell.map(|cell| InputEvent::PointerEnter { cell })
            }
            egui::Event::PointerButton {
                pos,
                button: PointerButton::Primary,
                pressed: true,
                ..
            } => {
                let cell = self.cell_at(*pos);
                self.hovered = cell;
                if !self.accepts_press {
                    return None;
                }
                cell.map(|cell| InputEvent::PointerDown { cell })
            }
            egui::Event::PointerButton {
                button: PointerButton::Primary,
                pressed: false,
                ..
            } => Some(InputEvent::PointerUp),
            egui::Event::PointerGone => {
                self.hovered = None;
                None
            }
            _ => None,
        }
    }

    /// Process this frame's egui input and generate our InputEvents
    pub fn process_input(&mut self, ctx: &Context) -> Vec<InputEvent> {
        ctx.input(|input| {
            input
                .events
                .iter()
                .filter_map(|event| self.translate(event))
                .collect()
        })
    }
}
