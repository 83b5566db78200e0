// src/notify.rs
/// "Data changed" notifications from course operations.
/// Frontends (GUI/CLI) implement this to refresh what they show.
pub trait Notify {
    /// The stored course list or a course's sections changed.
    fn data_changed(&mut self) {}

    /// Free-form status line for human eyes.
    fn status(&mut self, _msg: &str) {}
}

/// Counts notifications; handy for frontends that poll.
#[derive(Debug, Default)]
pub struct ChangeCounter {
    pub changes: usize,
    pub last_status: Option<String>,
}

impl Notify for ChangeCounter {
    fn data_changed(&mut self) {
        self.changes += 1;
    }
    fn status(&mut self, msg: &str) {
        self.last_status = Some(s!(msg));
    }
}
