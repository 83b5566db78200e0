// src/gui/notify.rs
use crate::notify::Notify;

/// Collects notifications during one dispatched request; the app reads the
/// flags afterwards and reloads what it shows.
#[derive(Debug, Default)]
pub struct GuiNotify {
    pub reload: bool,
    pub status: Option<String>,
}

impl Notify for GuiNotify {
    fn data_changed(&mut self) {
        self.reload = true;
    }
    fn status(&mut self, msg: &str) {
        self.status = Some(s!(msg));
    }
}
