// src/gui/components/section_table.rs
//
// Sections of the selected course. Purely a view.

use eframe::egui::{self, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};
use crate::{gui::app::App, model::{Section, Slot}};

pub const HEADERS: [&str; 10] = [
    "Class Number", "Section", "Day 1", "Time 1", "Room 1",
    "Day 2", "Time 2", "Room 2", "Remarks", "Instructor",
];

const WIDTHS: [f32; 10] = [100.0, 60.0, 60.0, 90.0, 70.0, 60.0, 90.0, 70.0, 160.0, 140.0];

/// One display row per section, in `HEADERS` order.
pub fn section_cells(section: &Section) -> Vec<String> {
    let empty = Slot::default();
    let (first, second) = match &section.schedule {
        Some(s) => (&s.first, s.second.as_ref().unwrap_or(&empty)),
        None => (&empty, &empty),
    };
    vec![
        section.class_number.to_string(),
        section.section.clone(),
        first.day.clone(),
        first.time.clone(),
        first.room.clone(),
        second.day.clone(),
        second.time.clone(),
        second.room.clone(),
        section.remarks.clone().unwrap_or_default(),
        section.prof.clone().unwrap_or_default(),
    ]
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let Some(course) = app.state.gui.selected_course.clone() else {
        ui.weak("Add a course from a saved registration page to see its sections.");
        return;
    };
    ui.heading(&course);

    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.bar_inner_margin = 7.0;
        s.bar_outer_margin = 0.0;
        s.handle_min_length = 48.0;
        s.foreground_color = true;
        let visuals = &mut ui.style_mut().visuals;
        visuals.extreme_bg_color = visuals.panel_fill;
    }

    let rows: Vec<Vec<String>> = app.sections.iter().map(section_cells).collect();

    let mut table = TableBuilder::new(ui)
        .striped(true)
        .min_scrolled_height(0.0)
        .id_salt(("section_table", course.as_str()));
    for w in WIDTHS {
        table = table.column(Column::initial(w).resizable(true).clip(true).at_least(20.0));
    }

    table
        .header(24.0, |mut header| {
            for h in HEADERS {
                header.col(|ui| {
                    ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                    ui.label(RichText::new(h).strong());
                });
            }
        })
        .body(|body| {
            body.rows(20.0, rows.len(), |mut row| {
                let r = &rows[row.index()];
                for cell in r {
                    row.col(|ui| {
                        ui.label(cell.as_str());
                    });
                }
            });
        });
}
