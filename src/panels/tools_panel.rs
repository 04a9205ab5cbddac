use egui::Color32;

use crate::SketchApp;
use crate::shape::ToolKind;

const SIDEBAR_BACKGROUND: Color32 = Color32::from_rgb(50, 50, 60);

pub fn tools_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(false)
        .exact_width(app.config().sidebar_width)
        .frame(egui::Frame::side_top_panel(&ctx.style()).fill(SIDEBAR_BACKGROUND))
        .show(ctx, |ui| {
            ui.visuals_mut().override_text_color = Some(Color32::WHITE);
            ui.add_space(10.0);

            ui.strong("Tool Selector");
            let mut tool = app.editor().settings().tool();
            egui::ComboBox::from_id_salt("tool_selector")
                .selected_text(tool.name())
                .show_ui(ui, |ui| {
                    for kind in ToolKind::ALL {
                        ui.selectable_value(&mut tool, kind, kind.name());
                    }
                });
            app.editor_mut().set_tool(tool);
            ui.add_space(20.0);

            ui.strong("Brush Size");
            let range = app.config().brush_size_range.clone();
            let mut size = app.config().clamp_brush_size(app.editor().settings().brush_size());
            if ui.add(egui::Slider::new(&mut size, range)).changed() {
                if let Err(err) = app.editor_mut().set_brush_size(i64::from(size)) {
                    log::debug!("Slider value {size} not applied: {err}");
                }
            }
            ui.add_space(20.0);

            ui.horizontal(|ui| {
                ui.label("Color:");
                let mut color = app.editor().settings().color();
                if egui::color_picker::color_edit_button_srgba(
                    ui,
                    &mut color,
                    egui::color_picker::Alpha::OnlyBlend,
                )
                .changed()
                {
                    log::info!("Color changed to {:?}", color);
                    app.editor_mut().set_color(color);
                }
            });
            ui.add_space(10.0);

            let can_undo = app.editor().history().can_undo();
            let can_redo = app.editor().history().can_redo();
            ui.horizontal(|ui| {
                if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                    app.editor_mut().undo();
                }
                if ui.add_enabled(can_redo, egui::Button::new("Redo")).clicked() {
                    app.editor_mut().redo();
                }
            });
            ui.add_space(20.0);

            if ui.button("Clear Canvas").clicked() {
                app.editor_mut().clear();
            }

            ui.separator();
            let editor = app.editor();
            ui.label(format!("Shapes: {}", editor.history().len()));
            ui.label(format!("Redo stack size: {}", editor.history().redo_len()));
            ui.label(format!("State: {}", editor.builder().state_name()));
        });
}
