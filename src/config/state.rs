// src/config/state.rs
use super::options::AppOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Saved registration page to read the next course from
    pub page_path_text: String,

    /// Output path text box (mapped onto ExportOptions on export)
    pub out_path_text: String,

    /// Course whose sections are shown in the table
    pub selected_course: Option<String>,

    pub window_w: u32,
    pub window_h: u32,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            page_path_text: s!(),
            out_path_text: s!(),
            selected_course: None,
            window_w: 960,
            window_h: 600,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
