use egui::Color32;
use serde::{Deserialize, Serialize};

/// Zero-based address of a cell on the board, row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellPos {
    pub row: usize,
    pub col: usize,
}

impl CellPos {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// One "pixel" of the drawing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pos: CellPos,
    color: Color32,
    painted: bool,
}

impl Cell {
    fn blank(pos: CellPos, background: Color32) -> Self {
        Self {
            pos,
            color: background,
            painted: false,
        }
    }

    pub fn pos(&self) -> CellPos {
        self.pos
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn is_painted(&self) -> bool {
        self.painted
    }

    /// The cell color as a `#rrggbb` string.
    pub fn hex(&self) -> String {
        to_hex(self.color)
    }

    pub fn paint(&mut self, color: Color32) {
        self.color = color;
        self.painted = true;
    }

    pub fn clear(&mut self, background: Color32) {
        self.color = background;
        self.painted = false;
    }
}

pub fn to_hex(color: Color32) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b())
}

/// Valid bounds of the board dimension, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionRange {
    pub min: usize,
    pub max: usize,
}

impl Default for DimensionRange {
    fn default() -> Self {
        Self { min: 1, max: 64 }
    }
}

impl DimensionRange {
    /// Clamp a raw slider value into the range. A range with `min == 0` still
    /// yields at least one cell per side.
    pub fn clamp(&self, requested: i64) -> usize {
        let min = self.min.max(1);
        let max = self.max.max(min);
        if requested < min as i64 {
            min
        } else if requested > max as i64 {
            max
        } else {
            requested as usize
        }
    }

    /// Parse slider text. Non-numeric input keeps `fallback`.
    pub fn parse(&self, text: &str, fallback: usize) -> usize {
        match text.trim().parse::<i64>() {
            Ok(value) => self.clamp(value),
            Err(_) => {
                log::debug!("Ignoring non-numeric dimension {text:?}");
                self.clamp(fallback as i64)
            }
        }
    }

    pub fn contains(&self, dimension: usize) -> bool {
        (self.min.max(1)..=self.max).contains(&dimension)
    }
}

/// The N×N grid of cells.
#[derive(Debug, Clone)]
pub struct Board {
    range: DimensionRange,
    dimension: usize,
    cells: Vec<Cell>,
}

impl Board {
    pub fn new(range: DimensionRange, dimension: i64, background: Color32) -> Self {
        let mut board = Self {
            range,
            dimension: 0,
            cells: Vec::new(),
        };
        board.regenerate(dimension, background);
        board
    }

    /// Drop every cell and allocate `dimension²` blank ones. The dimension is
    /// clamped into the board's range; returns the dimension actually used.
    pub fn regenerate(&mut self, dimension: i64, background: Color32) -> usize {
        let dimension = self.range.clamp(dimension);
        self.cells.clear();
        self.cells.reserve(dimension * dimension);
        for row in 0..dimension {
            for col in 0..dimension {
                self.cells.push(Cell::blank(CellPos::new(row, col), background));
            }
        }
        self.dimension = dimension;
        dimension
    }

    /// Clear every cell back to the background, keeping the dimension.
    pub fn reset(&mut self, background: Color32) {
        for cell in &mut self.cells {
            cell.clear(background);
        }
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn range(&self) -> DimensionRange {
        self.range
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, pos: CellPos) -> bool {
        pos.row < self.dimension && pos.col < self.dimension
    }

    fn index(&self, pos: CellPos) -> Option<usize> {
        self.contains(pos).then(|| pos.row * self.dimension + pos.col)
    }

    pub fn get(&self, pos: CellPos) -> Option<&Cell> {
        self.index(pos).map(|index| &self.cells[index])
    }

    pub fn get_mut(&mut self, pos: CellPos) -> Option<&mut Cell> {
        let index = self.index(pos)?;
        Some(&mut self.cells[index])
    }

    /// Cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn painted_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_painted()).count()
    }
}
