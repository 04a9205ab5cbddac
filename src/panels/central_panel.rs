use egui::{Key, KeyboardShortcut, Modifiers};

use crate::SketchApp;
use crate::input::DragSample;

const UNDO: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Z);
const REDO: KeyboardShortcut =
    KeyboardShortcut::new(Modifiers::COMMAND.plus(Modifiers::SHIFT), Key::Z);
const REDO_ALT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Y);

pub fn central_panel(app: &mut SketchApp, ctx: &egui::Context) {
    handle_shortcuts(app, ctx);

    egui::CentralPanel::default()
        .frame(egui::Frame::none())
        .show(ctx, |ui| {
            let available_size = ui.available_size();
            let (response, painter) = ui.allocate_painter(available_size, egui::Sense::drag());
            let rect = response.rect;

            let input = app.input_mut();
            input.set_origin(rect.min);
            let events = input.process(DragSample::from_response(&response));
            for event in events {
                app.editor_mut().handle_event(event);
            }

            app.renderer().render(&painter, rect, app.editor());
        });
}

fn handle_shortcuts(app: &mut SketchApp, ctx: &egui::Context) {
    // Shift+Z must be checked first: the plain undo shortcut also matches it.
    let (redo, undo) = ctx.input_mut(|input| {
        let redo = input.consume_shortcut(&REDO) || input.consume_shortcut(&REDO_ALT);
        let undo = !redo && input.consume_shortcut(&UNDO);
        (redo, undo)
    });

    if redo {
        app.editor_mut().redo();
    } else if undo {
        app.editor_mut().undo();
    }
}
