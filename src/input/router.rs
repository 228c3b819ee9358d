use rand::Rng;

use crate::board::{Board, CellPos};
use crate::state::PointerState;
use crate::tools::ToolState;

use super::InputEvent;

/// Routes pointer events into board mutations.
///
/// A pointer-down over a cell always paints it and starts painting; while
/// painting, every pointer-enter paints the entered cell; pointer-up stops
/// painting. Cells outside the board are ignored.
#[derive(Debug, Default)]
pub struct InputRouter {
    pointer: PointerState,
}

impl InputRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    /// Apply one event. Returns the cell that was painted, if any.
    pub fn route<R: Rng + ?Sized>(
        &mut self,
        event: &InputEvent,
        board: &mut Board,
        tools: &ToolState,
        rng: &mut R,
    ) -> Option<CellPos> {
        match *event {
            InputEvent::PointerDown { cell } => {
                if !board.contains(cell) {
                    return None;
                }
                self.pointer.press();
                Self::paint(cell, board, tools, rng)
            }
            InputEvent::PointerEnter { cell } => {
                if self.pointer.is_painting() {
                    Self::paint(cell, board, tools, rng)
                } else {
                    None
                }
            }
            InputEvent::PointerUp => {
                self.pointer.release();
                None
            }
        }
    }

    fn paint<R: Rng + ?Sized>(
        pos: CellPos,
        board: &mut Board,
        tools: &ToolState,
        rng: &mut R,
    ) -> Option<CellPos> {
        let cell = board.get_mut(pos)?;
        tools.tool.apply(cell, tools, rng);
        log::trace!("{} painted {pos:?} {}", tools.tool.name(), cell.hex());
        Some(pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::DimensionRange;
    use crate::tools::Tool;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn setup() -> (InputRouter, Board, ToolState, StdRng) {
        let tools = ToolState::default();
        let board = Board::new(DimensionRange::default(), 4, tools.background());
        (InputRouter::new(), board, tools, StdRng::seed_from_u64(7))
    }

    #[test]
    fn test_enter_without_press_does_not_paint() {
        let (mut router, mut board, tools, mut rng) = setup();
        let event = InputEvent::PointerEnter { cell: CellPos::new(1, 1) };
        assert_eq!(router.route(&event, &mut board, &tools, &mut rng), None);
        assert_eq!(board.painted_count(), 0);
    }

    #[test]
    fn test_press_paints_regardless_of_state() {
        let (mut router, mut board, tools, mut rng) = setup();
        for col in 0..2 {
            let event = InputEvent::PointerDown { cell: CellPos::new(0, col) };
            assert_eq!(router.route(&event, &mut board, &tools, &mut rng), Some(CellPos::new(0, col)));
            assert!(router.pointer().is_painting());
        }
        assert_eq!(board.painted_count(), 2);
    }

    #[test]
    fn test_release_stops_painting() {
        let (mut router, mut board, tools, mut rng) = setup();
        router.route(&InputEvent::PointerDown { cell: CellPos::new(0, 0) }, &mut board, &tools, &mut rng);
        router.route(&InputEvent::PointerUp, &mut board, &tools, &mut rng);
        assert!(router.pointer().is_idle());

        let enter = InputEvent::PointerEnter { cell: CellPos::new(0, 1) };
        assert_eq!(router.route(&enter, &mut board, &tools, &mut rng), None);
        assert_eq!(board.painted_count(), 1);
    }

    #[test]
    fn test_out_of_bounds_press_is_ignored() {
        let (mut router, mut board, tools, mut rng) = setup();
        let event = InputEvent::PointerDown { cell: CellPos::new(9, 0) };
        assert_eq!(router.route(&event, &mut board, &tools, &mut rng), None);
        assert!(router.pointer().is_idle());
    }

    #[test]
    fn test_eraser_drag_clears() {
        let (mut router, mut board, mut tools, mut rng) = setup();
        router.route(&InputEvent::PointerDown { cell: CellPos::new(2, 2) }, &mut board, &tools, &mut rng);
        router.route(&InputEvent::PointerUp, &mut board, &tools, &mut rng);

        tools.tool = Tool::Eraser;
        router.route(&InputEvent::PointerDown { cell: CellPos::new(2, 1) }, &mut board, &tools, &mut rng);
        router.route(&InputEvent::PointerEnter { cell: CellPos::new(2, 2) }, &mut board, &tools, &mut rng);
        assert_eq!(board.painted_count(), 0);
        assert_eq!(board.get(CellPos::new(2, 2)).unwrap().color(), tools.background());
    }
}
