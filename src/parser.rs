// src/parser.rs
//! Row-classification state machine: flat table rows → `Section` records.
//!
//! Rows are tagged once, at the ingestion boundary, as `TableRow`. The parser
//! then only has to decide what each tagged row contributes:
//!
//! ```text
//! Header        → skipped
//! SectionStart  → finalize running section, start a new one (first slot, remarks)
//! Continuation  → >1 cell: second slot | 1 cell: instructor
//! end of input  → finalize running section
//! ```
//!
//! A section is finalized only once it carries an assigned class number, so a
//! table without any section-start row yields no sections at all.

use std::mem;

use crate::config::consts::*;
use crate::core::sanitize::strip_marker;
use crate::error::{Error, Result};
use crate::model::{ClassNumber, Schedule, Section, Slot};

/// A table row after its kind has been read from the row marker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TableRow {
    Header,
    SectionStart(Vec<String>),
    Continuation(Vec<String>),
}

impl TableRow {
    /// Tag a row by the marker found on its first cell.
    pub fn classify(marker: Option<&str>, cells: Vec<String>) -> Self {
        match marker.map(str::trim) {
            Some(m) if m.eq_ignore_ascii_case(HEADER_MARKER) => TableRow::Header,
            Some(m) if m.eq_ignore_ascii_case(SECTION_MARKER) => TableRow::SectionStart(cells),
            _ => TableRow::Continuation(cells),
        }
    }
}

/// Result of one parse: the course name from the first section row, and the
/// finalized sections in table order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParsedTable {
    pub course_name: Option<String>,
    pub sections: Vec<Section>,
}

#[derive(Debug, Default)]
pub struct SectionParser {
    course_name: String,
    running: Section,
    sections: Vec<Section>,
    rows_seen: usize,
}

impl SectionParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume one row. Fails fast when the row lacks a cell it must read.
    pub fn feed(&mut self, row: TableRow) -> Result<()> {
        self.rows_seen += 1;
        match row {
            TableRow::Header => Ok(()),
            TableRow::SectionStart(cells) => self.start_section(&cells),
            TableRow::Continuation(cells) => self.continue_section(&cells),
        }
    }

    /// Finalize the running section and hand back everything parsed.
    pub fn finish(mut self) -> ParsedTable {
        self.finalize_running();
        let course_name = Some(self.course_name).filter(|n| !n.is_empty());
        ParsedTable { course_name, sections: self.sections }
    }

    fn finalize_running(&mut self) {
        let done = mem::take(&mut self.running);
        if done.class_number.is_assigned() {
            self.sections.push(done);
        }
    }

    fn start_section(&mut self, cells: &[String]) -> Result<()> {
        self.require_cells(cells, REMARKS_COL + 1, "section row")?;

        self.finalize_running();

        if self.course_name.is_empty() {
            self.course_name = strip_marker(&cells[COURSE_COL]);
        }

        let remarks = strip_marker(&cells[REMARKS_COL]);
        self.running = Section {
            class_number: ClassNumber::from_cell(&strip_marker(&cells[CLASS_NUMBER_COL])),
            section: strip_marker(&cells[SECTION_COL]),
            schedule: Some(Schedule::single(slot_from(cells))),
            remarks: Some(remarks).filter(|r| !r.is_empty()),
            prof: None,
        };
        Ok(())
    }

    fn continue_section(&mut self, cells: &[String]) -> Result<()> {
        match cells.len() {
            0 => Err(self.structural("continuation row has no cells")),
            1 => {
                self.running.prof = Some(s!(cells[0].trim()));
                Ok(())
            }
            _ => {
                self.require_cells(cells, ROOM_COL + 1, "second schedule row")?;
                let row = self.rows_seen;
                let schedule = self.running.schedule.as_mut().ok_or_else(|| {
                    Error::structural(format!("row {row}: second schedule row before any section row"))
                })?;
                schedule.second = Some(slot_from(cells));
                Ok(())
            }
        }
    }

    fn require_cells(&self, cells: &[String], need: usize, what: &str) -> Result<()> {
        if cells.len() < need {
            return Err(self.structural(&format!(
                "{what} has {} cells, expected at least {need}",
                cells.len()
            )));
        }
        Ok(())
    }

    fn structural(&self, msg: &str) -> Error {
        Error::structural(format!("row {}: {msg}", self.rows_seen))
    }
}

fn slot_from(cells: &[String]) -> Slot {
    Slot {
        day: strip_marker(&cells[DAY_COL]),
        time: strip_marker(&cells[TIME_COL]),
        room: strip_marker(&cells[ROOM_COL]),
    }
}

/// Run a whole table through a fresh `SectionParser`.
pub fn parse_rows<I>(rows: I) -> Result<ParsedTable>
where
    I: IntoIterator<Item = TableRow>,
{
    let mut parser = SectionParser::new();
    for row in rows {
        parser.feed(row)?;
    }
    Ok(parser.finish())
}
