// src/gui/components/action_buttons.rs

use eframe::egui;
use crate::{
    gui::app::App,
    messaging::{MessageKind, Request},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let mut request: Option<Request> = None;

    // --- Page to read the next course from ---
    ui.horizontal(|ui| {
        ui.label("Page:");
        ui.add(
            egui::TextEdit::singleline(&mut app.state.gui.page_path_text)
                .hint_text("saved registration page (.html)")
                .font(egui::TextStyle::Monospace),
        );
        let has_page = !app.state.gui.page_path_text.trim().is_empty();
        if ui.add_enabled(has_page, egui::Button::new("Add course")).clicked() {
            request = Some(Request::new(MessageKind::AddCourse));
        }
    });

    // --- Output + Export / Clear ---
    ui.horizontal(|ui| {
        ui.label("Output:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.state.gui.out_path_text)
                .font(egui::TextStyle::Monospace))
            .changed()
        {
            logd!("UI: out_path_text changed → {}", app.state.gui.out_path_text);
        }

        if ui.button("Export").clicked() {
            request = Some(Request::new(MessageKind::ExportCourseList));
        }

        let red = egui::Color32::from_rgb(220, 30, 30);
        let clear = ui.add_enabled(
            !app.courses.is_empty(),
            egui::Button::new(egui::RichText::new("Clear list").color(egui::Color32::BLACK).strong())
                .fill(red),
        );
        if clear.clicked() {
            request = Some(Request::new(MessageKind::ClearCourseList));
        }
    });

    ui.label(app.status.as_str());

    if let Some(r) = request {
        logf!("UI: {:?}", r.message);
        app.send(r);
    }
}
