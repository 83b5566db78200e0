// src/gui/app.rs
use std::error::Error;

use eframe::egui;

use crate::{
    config::state::{AppState, GuiState},
    courses,
    file::{FileSink, HtmlFile},
    messaging::{dispatch, MessageKind, NoPage, Outcome, PageSource, Request},
    model::Section,
    notify::Notify,
    store::{JsonFileStore, KeyValueStore, MemoryStore},
};

use super::{components, notify::GuiNotify};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Course Scraper",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    pub store: Box<dyn KeyValueStore>,

    // what the panels show, refreshed from the store on data_changed
    pub courses: Vec<String>,
    pub sections: Vec<Section>,

    pub status: String,
}

impl App {
    pub fn new(mut state: AppState) -> Self {
        let mut status = s!("Idle");

        let store: Box<dyn KeyValueStore> = match JsonFileStore::open(&state.options.store.path) {
            Ok(s) => Box::new(s),
            Err(e) => {
                loge!("Store: cannot open {} ({e}); using memory", state.options.store.path.display());
                status = format!("Store unavailable, changes will not persist: {e}");
                Box::new(MemoryStore::new())
            }
        };

        state.gui = GuiState {
            out_path_text: state.options.export.out_path().to_string_lossy().into_owned(),
            ..GuiState::default()
        };

        let mut app = Self { state, store, courses: Vec::new(), sections: Vec::new(), status };
        app.reload();
        logf!("Init: {} stored courses", app.courses.len());
        app
    }

    /// Re-read the course list and the selected course's sections.
    pub fn reload(&mut self) {
        self.courses = match courses::list_courses(&*self.store) {
            Ok(v) => v,
            Err(e) => {
                loge!("Store: course list unreadable: {e}");
                self.set_status(format!("Cannot read course list: {e}"));
                Vec::new()
            }
        };

        let selected = &mut self.state.gui.selected_course;
        if selected.as_ref().is_none_or(|c| !self.courses.contains(c)) {
            *selected = self.courses.first().cloned();
        }

        self.sections = match selected.as_deref() {
            Some(c) => courses::course_sections(&*self.store, c).unwrap_or_else(|e| {
                loge!("Store: sections of {c:?} unreadable: {e}");
                Vec::new()
            }),
            None => Vec::new(),
        };
    }

    pub fn select(&mut self, course: &str) {
        self.state.gui.selected_course = Some(s!(course));
        self.reload();
    }

    #[inline]
    pub fn set_status<T: Into<String>>(&mut self, msg: T) {
        self.status = msg.into();
    }

    /// Dispatch one request with the GUI's collaborators.
    pub fn send(&mut self, request: Request) {
        let page_text = self.state.gui.page_path_text.trim().to_owned();
        let page_file = (!page_text.is_empty()).then(|| HtmlFile::new(&page_text));
        let page: &dyn PageSource = match &page_file {
            Some(f) => f,
            None => &NoPage,
        };

        if request.message == MessageKind::ExportCourseList {
            let text = self.state.gui.out_path_text.clone();
            self.state.options.export.set_path(&text);
        }
        let mut sink = FileSink::new(self.state.options.export.out_path());

        let mut notify = GuiNotify::default();
        let result = dispatch(&request, &mut *self.store, page, &mut sink, &mut notify);

        match result {
            Ok(outcome) => {
                let msg = match &outcome {
                    Outcome::Added(name) => {
                        self.state.gui.selected_course = Some(name.clone());
                        format!("Added {name}")
                    }
                    Outcome::Removed { target, .. } => format!("Removed {target}"),
                    Outcome::Cleared => s!("Course list cleared"),
                    Outcome::Exported { courses, sections } => format!(
                        "Exported {sections} sections of {courses} courses to {}",
                        sink.path.display()
                    ),
                    Outcome::Ignored => s!("Nothing to do"),
                };
                notify.status(&msg);
            }
            Err(e) => {
                loge!("Request {:?} failed: {e}", request.message);
                notify.status(&format!("Error: {e}"));
            }
        }

        if notify.reload {
            self.reload();
        }
        if let Some(msg) = notify.status {
            self.set_status(msg);
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("courses")
            .resizable(false)
            .show(ctx, |ui| {
                components::course_panel::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::action_buttons::draw(ui, self);

            ui.separator();

            components::section_table::draw(ui, self);
        });
    }
}
