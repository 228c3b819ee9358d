use eframe::egui::{self, Color32, CursorIcon, Shape, Stroke};

use crate::board::{Board, CellPos};
use crate::geometry::BoardLayout;
use crate::tools::{GridStyle, Tool, ToolState};

/// Width of the grid overlay lines.
const GRID_LINE_WIDTH: f32 = 1.0;
/// Spacing between dots of the dotted overlay.
const DOT_SPACING: f32 = 4.0;

/// What one cell looks like on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellVisual {
    pub fill: Color32,
    pub painted: bool,
}

#[derive(Debug)]
pub struct Renderer {
    cells: Vec<CellVisual>,
    dimension: usize,
    grid_style: GridStyle,
    grid_color: Color32,
    cursor: CursorIcon,
}

impl Renderer {
    /// Creates a renderer already showing `board`
    pub fn new(board: &Board, tools: &ToolState) -> Self {
        let mut renderer = Self {
            cells: Vec::new(),
            dimension: 0,
            grid_style: tools.grid_style,
            grid_color: tools.grid_color,
            cursor: tools.tool.cursor(),
        };
        renderer.rebuild(board);
        renderer
    }

    /// Throw away every visual and rebuild from the board.
    pub fn rebuild(&mut self, board: &Board) {
        self.dimension = board.dimension();
        self.cells = board
            .cells()
            .iter()
            .map(|cell| CellVisual {
                fill: cell.color(),
                painted: cell.is_painted(),
            })
            .collect();
    }

    /// Update the visual of a single cell after it was painted.
    pub fn refresh_cell(&mut self, board: &Board, pos: CellPos) {
        if board.dimension() != self.dimension {
            log::warn!("Renderer out of sync with board, rebuilding");
            self.rebuild(board);
            return;
        }
        if let (Some(cell), Some(visual)) = (board.get(pos), self.visual_mut(pos)) {
            visual.fill = cell.color();
            visual.painted = cell.is_painted();
        }
    }

    fn visual_mut(&mut self, pos: CellPos) -> Option<&mut CellVisual> {
        if pos.row < self.dimension && pos.col < self.dimension {
            self.cells.get_mut(pos.row * self.dimension + pos.col)
        } else {
            None
        }
    }

    pub fn visual(&self, pos: CellPos) -> Option<&CellVisual> {
        if pos.row < self.dimension && pos.col < self.dimension {
            self.cells.get(pos.row * self.dimension + pos.col)
        } else {
            None
        }
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn grid_style(&self) -> GridStyle {
        self.grid_style
    }

    pub fn set_grid_style(&mut self, style: GridStyle) {
        self.grid_style = style;
    }

    pub fn grid_color(&self) -> Color32 {
        self.grid_color
    }

    pub fn set_grid_color(&mut self, color: Color32) {
        self.grid_color = color;
    }

    pub fn cursor(&self) -> CursorIcon {
        self.cursor
    }

    pub fn set_tool(&mut self, tool: Tool) {
        self.cursor = tool.cursor();
    }

    /// Label shown next to the dimension slider.
    pub fn dimension_label(&self) -> String {
        format!("{0} x {0}", self.dimension)
    }

    /// Shapes for the cells and the overlay, in paint order.
    pub fn shapes(&self, layout: &BoardLayout) -> Vec<Shape> {
        let mut shapes = Vec::with_capacity(self.cells.len() + 2 * self.dimension + 2);

        for (index, visual) in self.cells.iter().enumerate() {
            let pos = CellPos::new(index / self.dimension, index % self.dimension);
            shapes.push(Shape::rect_filled(layout.cell_rect(pos), 0.0, visual.fill));
        }

        if self.grid_style.has_lines() {
            let rect = layout.rect();
            let step = layout.cell_size();
            let stroke = Stroke::new(GRID_LINE_WIDTH, self.grid_color);
            for i in 0..=self.dimension {
                let offset = i as f32 * step;
                let vertical = [
                    egui::pos2(rect.min.x + offset, rect.min.y),
                    egui::pos2(rect.min.x + offset, rect.max.y),
                ];
                let horizontal = [
                    egui::pos2(rect.min.x, rect.min.y + offset),
                    egui::pos2(rect.max.x, rect.min.y + offset),
                ];
                for line in [vertical, horizontal] {
                    match self.grid_style {
                        GridStyle::Solid => shapes.push(Shape::line_segment(line, stroke)),
                        GridStyle::Dotted => shapes.extend(Shape::dotted_line(
                            &line,
                            self.grid_color,
                            DOT_SPACING,
                            GRID_LINE_WIDTH * 0.5,
                        )),
                        GridStyle::None => {}
                    }
                }
            }
        }

        shapes
    }

    /// Renders the board into `painter`
    pub fn render(&self, painter: &egui::Painter, layout: &BoardLayout, frame: Color32) {
        painter.extend(self.shapes(layout));
        painter.rect_stroke(layout.rect(), 0.0, Stroke::new(2.0, frame));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::DimensionRange;

    fn setup(dimension: i64) -> (Board, ToolState, Renderer) {
        let tools = ToolState::default();
        let board = Board::new(DimensionRange::default(), dimension, tools.background());
        let renderer = Renderer::new(&board, &tools);
        (board, tools, renderer)
    }

    fn layout(dimension: usize) -> BoardLayout {
        let area = egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(116.0, 116.0));
        BoardLayout::fit(area, dimension)
    }

    #[test]
    fn test_renderer_creation() {
        let (board, tools, renderer) = setup(4);
        assert_eq!(renderer.cell_count(), board.len());
        assert_eq!(renderer.dimension_label(), "4 x 4");
        assert_eq!(renderer.cursor(), tools.tool.cursor());
        assert!(renderer.visual(CellPos::new(3, 3)).is_some_and(|v| !v.painted));
    }

    #[test]
    fn test_refresh_cell_only_touches_that_cell() {
        let (mut board, _, mut renderer) = setup(3);
        let pos = CellPos::new(2, 1);
        board.get_mut(pos).unwrap().paint(Color32::RED);
        renderer.refresh_cell(&board, pos);

        assert_eq!(renderer.visual(pos).map(|v| (v.fill, v.painted)), Some((Color32::RED, true)));
        assert_eq!(renderer.visual(CellPos::new(0, 0)).map(|v| v.painted), Some(false));
    }

    #[test]
    fn test_refresh_after_resize_rebuilds() {
        let (mut board, tools, mut renderer) = setup(3);
        board.regenerate(6, tools.background());
        renderer.refresh_cell(&board, CellPos::new(5, 5));
        assert_eq!(renderer.cell_count(), 36);
        assert_eq!(renderer.dimension_label(), "6 x 6");
    }

    #[test]
    fn test_overlay_shapes() {
        let (_, _, mut renderer) = setup(5);
        let layout = layout(5);
        assert_eq!(renderer.shapes(&layout).len(), 25);

        renderer.set_grid_style(GridStyle::Solid);
        // Six vertical and six horizontal lines around five columns and rows.
        assert_eq!(renderer.shapes(&layout).len(), 25 + 12);

        renderer.set_grid_style(GridStyle::Dotted);
        assert!(renderer.shapes(&layout).len() > 25 + 12);
    }

    #[test]
    fn test_render_basics() {
        let (_, _, renderer) = setup(4);
        let ctx = egui::Context::default();
        let layer_id = egui::LayerId::background();
        let rect = egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(100.0, 100.0));
        let painter = egui::Painter::new(ctx.clone(), layer_id, rect);

        renderer.render(&painter, &layout(4), Color32::BLACK);
    }

    #[test]
    fn test_tool_selection_updates_cursor() {
        let (_, _, mut renderer) = setup(2);
        renderer.set_tool(Tool::Eraser);
        assert_eq!(renderer.cursor(), Tool::Eraser.cursor());
    }
}
