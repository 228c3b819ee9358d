use crate::command::SketchContext;
use crate::geometry::BoardLayout;
use crate::input::InputHandler;

pub fn board_panel(ctx: &egui::Context, sketch: &mut SketchContext, input: &mut InputHandler) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let available = ui.available_rect_before_wrap();
        let layout = BoardLayout::fit(available, sketch.board().dimension());
        let response = ui.allocate_rect(layout.rect(), egui::Sense::click_and_drag());

        input.set_layout(layout);
        input.set_accepts_press(response.contains_pointer());
        for event in input.process_input(ctx) {
            sketch.handle_input(&event);
        }

        if response.hovered() {
            ctx.set_cursor_icon(sketch.renderer().cursor());
        }

        let painter = ui.painter_at(layout.rect().expand(2.0));
        sketch
            .renderer()
            .render(&painter, &layout, sketch.theme().board_frame());
    });
}
