use egui::Color32;
use pixel_sketcher::{
    CellPos, ColorTarget, Command, GridStyle, InputEvent, Preferences, SketchContext,
    SketcherConfig, Theme, Tool,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn create_test_context() -> SketchContext {
    let config = SketcherConfig::default();
    SketchContext::with_rng(&config, Preferences::from_config(&config), StdRng::seed_from_u64(5))
}

#[test]
fn test_every_valid_dimension_regenerates_blank_board() {
    let mut ctx = create_test_context();
    let range = ctx.board().range();
    for n in range.min..=range.max {
        ctx.execute(Command::SetDimension(n as i64));
        assert_eq!(ctx.board().dimension(), n);
        assert_eq!(ctx.board().len(), n * n);
        assert_eq!(ctx.renderer().cell_count(), n * n);
        assert_eq!(ctx.renderer().dimension_label(), format!("{n} x {n}"));
        let background = ctx.tools().background();
        assert!(ctx.board().cells().iter().all(|c| !c.is_painted() && c.color() == background));
    }
}

#[test]
fn test_out_of_range_dimension_is_clamped() {
    let mut ctx = create_test_context();
    let range = ctx.board().range();

    ctx.execute(Command::SetDimension(0));
    assert_eq!(ctx.board().dimension(), range.min);

    ctx.execute(Command::SetDimension(-12));
    assert_eq!(ctx.board().dimension(), range.min);

    ctx.execute(Command::SetDimension(range.max as i64 + 100));
    assert_eq!(ctx.board().dimension(), range.max);
}

#[test]
fn test_regenerate_uses_current_eraser_color() {
    let mut ctx = create_test_context();
    ctx.execute(Command::SetColor {
        target: ColorTarget::Eraser,
        color: Color32::LIGHT_YELLOW,
    });
    ctx.execute(Command::SetDimension(7));
    assert!(ctx.board().cells().iter().all(|c| c.color() == Color32::LIGHT_YELLOW));
}

#[test]
fn test_grid_style_rotation_ignores_board_state() {
    let mut ctx = create_test_context();
    assert_eq!(ctx.tools().grid_style, GridStyle::None);

    ctx.execute(Command::CycleGridStyle);
    ctx.execute(Command::SetDimension(3));
    ctx.handle_input(&InputEvent::PointerDown { cell: CellPos::new(0, 0) });
    ctx.execute(Command::CycleGridStyle);
    ctx.handle_input(&InputEvent::PointerUp);
    assert_eq!(ctx.tools().grid_style, GridStyle::Dotted);

    ctx.execute(Command::CycleGridStyle);
    assert_eq!(ctx.tools().grid_style, GridStyle::None);
    assert_eq!(ctx.renderer().grid_style(), GridStyle::None);
}

#[test]
fn test_reset_keeps_dimension_and_tool() {
    let mut ctx = create_test_context();
    ctx.execute(Command::SetDimension(8));
    ctx.execute(Command::SelectTool(Tool::RandomPaint));
    ctx.handle_input(&InputEvent::PointerDown { cell: CellPos::new(4, 4) });
    ctx.handle_input(&InputEvent::PointerEnter { cell: CellPos::new(4, 5) });
    ctx.handle_input(&InputEvent::PointerUp);
    let tools_before = ctx.tools().clone();

    ctx.execute(Command::Reset);

    assert_eq!(ctx.board().dimension(), 8);
    assert_eq!(ctx.board().painted_count(), 0);
    assert_eq!(*ctx.tools(), tools_before);
}

#[test]
fn test_pencil_color_applies_to_later_strokes_only() {
    let mut ctx = create_test_context();
    ctx.execute(Command::SetDimension(4));
    ctx.handle_input(&InputEvent::PointerDown { cell: CellPos::new(0, 0) });
    ctx.handle_input(&InputEvent::PointerUp);

    ctx.execute(Command::SetColor {
        target: ColorTarget::Pencil,
        color: Color32::RED,
    });
    ctx.handle_input(&InputEvent::PointerDown { cell: CellPos::new(0, 1) });
    ctx.handle_input(&InputEvent::PointerUp);

    assert_eq!(ctx.board().get(CellPos::new(0, 0)).unwrap().color(), Color32::BLACK);
    assert_eq!(ctx.board().get(CellPos::new(0, 1)).unwrap().color(), Color32::RED);
    assert_eq!(ctx.tools().active_color(), Some(Color32::RED));
}

#[test]
fn test_tool_selection_updates_cursor() {
    let mut ctx = create_test_context();
    for tool in Tool::ALL {
        ctx.execute(Command::SelectTool(tool));
        assert_eq!(ctx.tools().tool, tool);
        assert_eq!(ctx.renderer().cursor(), tool.cursor());
    }
}

#[test]
fn test_theme_toggle_round_trip() {
    let mut ctx = create_test_context();
    ctx.execute(Command::ToggleTheme);
    assert_eq!(ctx.theme(), Theme::Night);
    ctx.execute(Command::ToggleTheme);
    assert_eq!(ctx.theme(), Theme::Day);
    assert_eq!(ctx.preferences().theme, Theme::Day);
}
