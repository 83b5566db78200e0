// src/messaging.rs
//! Requests from a frontend and the collaborators they are served with.
//!
//! A request carries a `message` tag and, for `removeCourse`, a `target`:
//!
//! ```json
//! {"message": "removeCourse", "target": "CS 101"}
//! ```
//!
//! `dispatch` runs the matching course operation against a store, pulling the
//! current page from a `PageSource` and pushing exports to an `ExportSink`.
//! Frontends learn about changes through `Notify::data_changed`.

use serde::{Deserialize, Serialize};

use crate::codec::ExportPayload;
use crate::courses;
use crate::error::{Error, Result};
use crate::notify::Notify;
use crate::store::KeyValueStore;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MessageKind {
    AddCourse,
    RemoveCourse,
    ClearCourseList,
    ExportCourseList,
    /// Any tag we do not know; dispatched as a no-op.
    #[serde(other)]
    Unknown,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    pub message: MessageKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

impl Request {
    pub fn new(message: MessageKind) -> Self {
        Self { message, target: None }
    }

    pub fn remove(target: impl Into<String>) -> Self {
        Self { message: MessageKind::RemoveCourse, target: Some(target.into()) }
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

/// Where `addCourse` reads the currently shown page from.
pub trait PageSource {
    fn page_html(&self) -> Result<String>;
}

/// Page HTML already in memory.
impl PageSource for String {
    fn page_html(&self) -> Result<String> {
        Ok(self.clone())
    }
}

/// No page is open; `addCourse` fails with a structural error.
pub struct NoPage;

impl PageSource for NoPage {
    fn page_html(&self) -> Result<String> {
        Err(Error::structural("no page is open to read a schedule table from"))
    }
}

/// Receives a finished export for display or saving.
pub trait ExportSink {
    fn open(&mut self, payload: &ExportPayload) -> Result<()>;
}

/// What a dispatched request did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Added(String),
    Removed { target: String, listed: bool },
    Cleared,
    Exported { courses: usize, sections: usize },
    Ignored,
}

pub fn dispatch(
    request: &Request,
    store: &mut dyn KeyValueStore,
    page: &dyn PageSource,
    sink: &mut dyn ExportSink,
    notify: &mut dyn Notify,
) -> Result<Outcome> {
    logd!("Message: {:?} target={:?}", request.message, request.target);

    let outcome = match request.message {
        MessageKind::AddCourse => {
            let html = page.page_html()?;
            Outcome::Added(courses::add_course_from_html(store, &html)?)
        }
        MessageKind::RemoveCourse => match request.target.as_deref().filter(|t| !t.is_empty()) {
            Some(target) => {
                let listed = courses::remove_course(store, target)?;
                Outcome::Removed { target: s!(target), listed }
            }
            None => {
                logd!("Message: removeCourse without a target, ignored");
                Outcome::Ignored
            }
        },
        MessageKind::ClearCourseList => {
            courses::clear_course_list(store)?;
            Outcome::Cleared
        }
        MessageKind::ExportCourseList => {
            let payload = courses::export_course_list(store)?;
            sink.open(&payload)?;
            Outcome::Exported { courses: payload.courses, sections: payload.sections }
        }
        MessageKind::Unknown => Outcome::Ignored,
    };

    match &outcome {
        Outcome::Added(_) | Outcome::Removed { .. } | Outcome::Cleared => notify.data_changed(),
        Outcome::Exported { .. } | Outcome::Ignored => {}
    }
    Ok(outcome)
}
