use egui::color_picker::{Alpha, color_edit_button_srgba};

use crate::command::{Command, SketchContext};
use crate::components::ToolButton;
use crate::tools::{ColorTarget, Tool};

/// The left-hand controls. Returns the commands the user triggered this frame.
pub fn control_panel(ctx: &egui::Context, sketch: &SketchContext) -> Vec<Command> {
    let mut commands = Vec::new();

    egui::SidePanel::left("control_panel")
        .resizable(false)
        .default_width(180.0)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Pixel Sketcher");
                let theme = sketch.theme();
                if ui
                    .button(theme.toggled().icon())
                    .on_hover_text("Toggle day/night")
                    .clicked()
                {
                    commands.push(Command::ToggleTheme);
                }
            });
            ui.separator();

            ui.label("Tools");
            ui.horizontal(|ui| {
                let active = sketch.tools().tool;
                for tool in Tool::ALL {
                    if ToolButton::new(tool, tool == active).show(ui).clicked() {
                        commands.push(Command::SelectTool(tool));
                    }
                }
            });
            ui.separator();

            egui::Grid::new("color_pickers")
                .num_columns(2)
                .spacing([12.0, 6.0])
                .show(ui, |ui| {
                    for (label, target) in [
                        ("Pencil", ColorTarget::Pencil),
                        ("Eraser", ColorTarget::Eraser),
                        ("Grid lines", ColorTarget::GridLine),
                    ] {
                        ui.label(label);
                        let mut color = sketch.tools().color(target);
                        if color_edit_button_srgba(ui, &mut color, Alpha::Opaque).changed() {
                            commands.push(Command::SetColor { target, color });
                        }
                        ui.end_row();
                    }
                });
            ui.separator();

            let range = sketch.board().range();
            let mut dimension = sketch.board().dimension();
            ui.label(format!("Size: {}", sketch.renderer().dimension_label()));
            let slider = egui::Slider::new(&mut dimension, range.min.max(1)..=range.max)
                .show_value(false);
            if ui.add(slider).changed() {
                commands.push(Command::SetDimension(dimension as i64));
            }
            ui.separator();

            ui.horizontal(|ui| {
                if ui.button(sketch.tools().grid_style.label()).clicked() {
                    commands.push(Command::CycleGridStyle);
                }
                if ui.button("Reset").clicked() {
                    commands.push(Command::Reset);
                }
            });

            ui.with_layout(egui::Layout::bottom_up(egui::Align::LEFT), |ui| {
                ui.weak(format!("{} painted", sketch.board().painted_count()));
            });
        });

    commands
}
