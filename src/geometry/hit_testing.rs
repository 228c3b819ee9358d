use egui::{Pos2, Rect, Vec2};

use crate::board::CellPos;

/// Padding between the available area and the board frame.
pub const BOARD_MARGIN: f32 = 8.0;

/// Where the board sits on screen: the largest square that fits the
/// available rect, centered, split into `dimension` rows and columns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardLayout {
    rect: Rect,
    dimension: usize,
}

impl BoardLayout {
    pub fn fit(available: Rect, dimension: usize) -> Self {
        let side = (available.width().min(available.height()) - 2.0 * BOARD_MARGIN).max(0.0);
        let rect = Rect::from_center_size(available.center(), Vec2::splat(side));
        Self {
            rect,
            dimension: dimension.max(1),
        }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn cell_size(&self) -> f32 {
        self.rect.width() / self.dimension as f32
    }

    pub fn cell_rect(&self, pos: CellPos) -> Rect {
        let size = self.cell_size();
        let min = self.rect.min + Vec2::new(pos.col as f32 * size, pos.row as f32 * size);
        Rect::from_min_size(min, Vec2::splat(size))
    }

    /// The cell under a screen position, or `None` outside the board.
    pub fn cell_at(&self, pos: Pos2) -> Option<CellPos> {
        if !self.rect.contains(pos) || self.rect.width() <= 0.0 {
            return None;
        }
        let size = self.cell_size();
        let last = self.dimension - 1;
        // The max edge is inside `Rect::contains`; fold it into the last cell.
        let col = (((pos.x - self.rect.min.x) / size) as usize).min(last);
        let row = (((pos.y - self.rect.min.y) / size) as usize).min(last);
        Some(CellPos::new(row, col))
    }
}
