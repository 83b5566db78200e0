// src/gui/components/course_panel.rs
//
// Left list of stored courses. Click selects (table follows), ✕ removes.

use eframe::egui;
use crate::{gui::app::App, messaging::Request};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Courses");
    ui.separator();

    // Same scroll bar look as the section table
    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.bar_inner_margin = 0.0;
        s.bar_outer_margin = -6.0;
        s.handle_min_length = 48.0;
        s.foreground_color = true;
        let visuals = &mut ui.style_mut().visuals;
        visuals.extreme_bg_color = visuals.panel_fill;
    }

    if app.courses.is_empty() {
        ui.weak("No courses stored");
        return;
    }

    let mut clicked: Option<String> = None;
    let mut remove: Option<String> = None;

    egui::ScrollArea::vertical()
        .id_salt("course_panel_scroll")
        .show(ui, |ui| {
            let w = ui.available_width();
            ui.set_min_width(w);

            for name in &app.courses {
                let is_selected = app.state.gui.selected_course.as_deref() == Some(name.as_str());
                ui.horizontal(|ui| {
                    if ui.small_button("✕").on_hover_text("Remove course").clicked() {
                        remove = Some(name.clone());
                    }
                    if ui.selectable_label(is_selected, name).clicked() && !is_selected {
                        clicked = Some(name.clone());
                    }
                });
            }
        });

    // Apply after the list borrow ends
    if let Some(name) = remove {
        logf!("UI: Remove {name:?}");
        app.send(Request::remove(name));
    } else if let Some(name) = clicked {
        logd!("UI: Select {name:?}");
        app.select(&name);
    }
}
