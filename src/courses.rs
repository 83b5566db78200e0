// src/courses.rs
//! Course operations over the store: add, remove, clear, list, export, import.
//!
//! Every operation either completes or returns the first error; the store is
//! only written after parsing/decoding has fully succeeded.

use std::collections::HashSet;

use crate::codec::{decode_document, encode_document, ExportPayload};
use crate::config::consts::COURSE_LIST_KEY;
use crate::error::{Error, Result};
use crate::model::Section;
use crate::parser::{parse_rows, ParsedTable};
use crate::specs::schedule;
use crate::store::{self, KeyValueStore};

/// Store a parsed course: its name goes to the front of the course list
/// (later duplicates dropped) and its sections replace whatever was stored.
pub fn add_parsed_course(store: &mut dyn KeyValueStore, parsed: ParsedTable) -> Result<String> {
    let name = parsed
        .course_name
        .ok_or_else(|| Error::structural("table has no section rows; no course name to store"))?;
    if name == COURSE_LIST_KEY {
        return Err(Error::structural(format!("course name {name:?} collides with the course list key")));
    }

    let mut list = store::load_course_list(store)?;
    list.insert(0, name.clone());
    let mut seen = HashSet::new();
    list.retain(|n| seen.insert(n.clone()));

    store::save_course_list(store, &list)?;
    store::save_sections(store, &name, &parsed.sections)?;

    logf!("Courses: added {name:?} ({} sections, {} courses stored)", parsed.sections.len(), list.len());
    Ok(name)
}

/// Read the schedule table of `html`, parse it and store the course.
pub fn add_course_from_html(store: &mut dyn KeyValueStore, html: &str) -> Result<String> {
    let rows = schedule::read_table(html)?;
    let parsed = parse_rows(rows)?;
    add_parsed_course(store, parsed)
}

/// Drop `target` from the course list and delete its sections.
/// Returns whether it was listed.
pub fn remove_course(store: &mut dyn KeyValueStore, target: &str) -> Result<bool> {
    let mut list = store::load_course_list(store)?;
    let listed = match list.iter().position(|n| n == target) {
        Some(ix) => {
            list.remove(ix);
            true
        }
        None => false,
    };
    store::save_course_list(store, &list)?;
    store.remove(target)?;

    logf!("Courses: removed {target:?} (listed={listed})");
    Ok(listed)
}

pub fn clear_course_list(store: &mut dyn KeyValueStore) -> Result<()> {
    store.clear()?;
    logf!("Courses: cleared");
    Ok(())
}

pub fn list_courses(store: &dyn KeyValueStore) -> Result<Vec<String>> {
    store::load_course_list(store)
}

/// Sections of one course; a course without stored sections has none.
pub fn course_sections(store: &dyn KeyValueStore, course: &str) -> Result<Vec<Section>> {
    Ok(store::load_sections(store, course)?.unwrap_or_default())
}

/// Encode every stored course, in course-list order, into one document.
/// Listed courses without stored sections are skipped.
pub fn export_course_list(store: &dyn KeyValueStore) -> Result<ExportPayload> {
    let names = store::load_course_list(store)?;

    let mut entries: Vec<(String, Vec<Section>)> = Vec::with_capacity(names.len());
    for name in names {
        match store::load_sections(store, &name)? {
            Some(sections) => entries.push((name, sections)),
            None => logd!("Export: {name:?} is listed but has no sections, skipping"),
        }
    }

    let document = encode_document(entries.iter().map(|(n, s)| (n.as_str(), s.as_slice())));
    let sections = entries.iter().map(|(_, s)| s.len()).sum();

    logf!("Export: {} courses, {} sections", entries.len(), sections);
    Ok(ExportPayload { document, courses: entries.len(), sections })
}

/// Load an exported document back into the store, one course per distinct
/// course column value (first-seen order). Returns the imported names.
pub fn import_document(store: &mut dyn KeyValueStore, text: &str) -> Result<Vec<String>> {
    let rows = decode_document(text)?;

    let mut grouped: Vec<(String, Vec<Section>)> = Vec::new();
    for row in rows {
        match grouped.iter_mut().find(|(name, _)| *name == row.course) {
            Some((_, sections)) => sections.push(row.section),
            None => grouped.push((row.course, vec![row.section])),
        }
    }

    let mut names = Vec::with_capacity(grouped.len());
    for (name, sections) in grouped {
        let parsed = ParsedTable { course_name: Some(name), sections };
        names.push(add_parsed_course(store, parsed)?);
    }
    Ok(names)
}
