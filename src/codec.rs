// src/codec.rs
//! Delimited-text export of stored courses, and its inverse.
//!
//! Format (one line per section, CRLF after every line, header included):
//!
//! ```text
//! Class Number,Course,Section,Day 1, Time 1,Room 1,Day 2, Time 2, Room 2, Remarks,
//! 12345,CS 101,A,Mon,9-10,R1,,,,
//! ```
//!
//! Fields are never quoted or escaped. A comma inside a field shifts every
//! following column; the decoder reports such lines as `MalformedLine`.

use crate::config::consts::*;
use crate::error::{Error, Result};
use crate::model::{ClassNumber, Schedule, Section, Slot};

/* ---------------- Encoding ---------------- */

/// Append one section line (with CRLF) for `course`.
pub fn encode_section(out: &mut String, course: &str, section: &Section) {
    let empty = Slot::default();
    let (first, second) = match &section.schedule {
        Some(Schedule { first, second }) => (first, second.as_ref().unwrap_or(&empty)),
        None => (&empty, &empty),
    };
    let class_number = section.class_number.to_string();
    let fields: [&str; EXPORT_FIELDS] = [
        &class_number,
        course,
        &section.section,
        &first.day,
        &first.time,
        &first.room,
        &second.day,
        &second.time,
        &second.room,
        section.remarks.as_deref().unwrap_or(""),
    ];
    out.push_str(&fields.join(","));
    out.push_str(LINE_END);
}

/// Header line followed by every section of every course, in the given order.
pub fn encode_document<'a, I>(courses: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a [Section])>,
{
    let mut out = join!(EXPORT_HEADER, LINE_END);
    for (course, sections) in courses {
        for section in sections {
            encode_section(&mut out, course, section);
        }
    }
    out
}

/// A finished export, ready for a sink.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportPayload {
    pub document: String,
    pub courses: usize,
    pub sections: usize,
}

impl ExportPayload {
    /// `data:text/csv;charset=utf-8,` + `encodeURI(document)`.
    pub fn data_uri(&self) -> String {
        join!(DATA_URI_PREFIX, &encode_uri(&self.document))
    }
}

/// Percent-encode like `encodeURI`: reserved and unreserved URI characters
/// (and `#`) pass through; every other UTF-8 byte becomes `%XX`.
pub fn encode_uri(s: &str) -> String {
    const KEEP: &[u8] = b";,/?:@&=+$-_.!~*'()#";
    let mut out = String::with_capacity(s.len());
    for b in s.bytes() {
        if b.is_ascii_alphanumeric() || KEEP.contains(&b) {
            out.push(b as char);
        } else {
            out.push_str(&format!("%{b:02X}"));
        }
    }
    out
}

/* ---------------- Decoding ---------------- */

/// One exported line read back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportedRow {
    pub course: String,
    pub section: Section,
}

/// Read an exported document back into rows.
///
/// The header line and blank lines are skipped. `prof` is not part of the
/// export and always comes back as `None`.
pub fn decode_document(text: &str) -> Result<Vec<ExportedRow>> {
    let mut out = Vec::new();
    for (idx, raw) in text.split('\n').enumerate() {
        let line = raw.strip_suffix('\r').unwrap_or(raw);
        if line.is_empty() || line == EXPORT_HEADER {
            continue;
        }
        out.push(decode_line(line, idx + 1)?);
    }
    Ok(out)
}

fn decode_line(line: &str, line_no: usize) -> Result<ExportedRow> {
    let f: Vec<&str> = line.split(',').collect();
    if f.len() != EXPORT_FIELDS {
        return Err(Error::MalformedLine {
            line: line_no,
            expected: EXPORT_FIELDS,
            found: f.len(),
        });
    }

    let first = Slot::new(f[3], f[4], f[5]);
    let second = Slot::new(f[6], f[7], f[8]);
    let schedule = if first == Slot::default() && second == Slot::default() {
        None
    } else {
        Some(Schedule {
            first,
            second: Some(second).filter(|s| *s != Slot::default()),
        })
    };

    Ok(ExportedRow {
        course: s!(f[1].trim()),
        section: Section {
            class_number: ClassNumber::from_cell(f[0].trim()),
            section: s!(f[2].trim()),
            schedule,
            remarks: Some(s!(f[9])).filter(|r| !r.is_empty()),
            prof: None,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one_meeting_section() -> Section {
        Section {
            class_number: ClassNumber::Id(12345),
            section: s!("A"),
            schedule: Some(Schedule::single(Slot::new("Mon", "9-10", "R1"))),
            remarks: None,
            prof: Some(s!("Dr. Smith")),
        }
    }

    #[test]
    fn single_section_exact_line() {
        let sections = vec![one_meeting_section()];
        let doc = encode_document([("CS 101", sections.as_slice())]);
        let mut lines = doc.split("\r\n");
        assert_eq!(lines.next(), Some(EXPORT_HEADER));
        assert_eq!(lines.next(), Some("12345,CS 101,A,Mon,9-10,R1,,,,"));
        assert_eq!(lines.next(), Some(""));
        assert!(doc.ends_with("R1,,,,\r\n"));
    }

    #[test]
    fn header_only_when_nothing_stored() {
        let doc = encode_document(std::iter::empty());
        assert_eq!(doc, join!(EXPORT_HEADER, "\r\n"));
    }

    #[test]
    fn second_slot_and_remarks_fill_trailing_columns() {
        let mut s = one_meeting_section();
        s.schedule.as_mut().unwrap().second = Some(Slot::new("Wed", "11-12", "R2"));
        s.remarks = Some(s!("Lab"));
        let mut out = s!();
        encode_section(&mut out, "CS 101", &s);
        assert_eq!(out, "12345,CS 101,A,Mon,9-10,R1,Wed,11-12,R2,Lab\r\n");
    }

    #[test]
    fn encode_uri_matches_js() {
        assert_eq!(encode_uri("a b,c\r\n"), "a%20b,c%0D%0A");
        assert_eq!(encode_uri("Día #1 50%"), "D%C3%ADa%20#1%2050%25");
        assert_eq!(encode_uri("x;/?:@&=+$-_.!~*'()"), "x;/?:@&=+$-_.!~*'()");
    }

    #[test]
    fn data_uri_has_csv_prefix() {
        let payload = ExportPayload { document: s!("A,B\r\n"), courses: 0, sections: 0 };
        assert_eq!(payload.data_uri(), "data:text/csv;charset=utf-8,A,B%0D%0A");
    }

    #[test]
    fn decode_reverses_encode() {
        let mut b = one_meeting_section();
        b.class_number = ClassNumber::Id(2);
        b.schedule.as_mut().unwrap().second = Some(Slot::new("Wed", "", ""));
        b.remarks = Some(s!("Closed"));
        let sections = vec![one_meeting_section(), b.clone()];
        let doc = encode_document([("CS 101", sections.as_slice())]);

        let rows = decode_document(&doc).unwrap();
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.course == "CS 101"));

        let mut expect_a = one_meeting_section();
        expect_a.prof = None;
        b.prof = None;
        assert_eq!(rows[0].section, expect_a);
        assert_eq!(rows[1].section, b);
    }

    #[test]
    fn leading_zero_class_number_exports_and_reads_back_unchanged() {
        let mut s = one_meeting_section();
        s.class_number = ClassNumber::from_cell("00123");
        let doc = encode_document([("CS 101", std::slice::from_ref(&s))]);
        assert!(doc.ends_with("\r\n00123,CS 101,A,Mon,9-10,R1,,,,\r\n"));

        let rows = decode_document(&doc).unwrap();
        assert_eq!(rows[0].section.class_number, ClassNumber::Text(s!("00123")));
        assert_eq!(encode_document([("CS 101", std::slice::from_ref(&rows[0].section))]), doc);
    }

    #[test]
    fn comma_in_field_breaks_alignment() {
        let mut s = one_meeting_section();
        s.remarks = Some(s!("see dept, room change"));
        let doc = encode_document([("CS 101", std::slice::from_ref(&s))]);
        assert!(doc.contains(",see dept, room change\r\n"));

        match decode_document(&doc).unwrap_err() {
            Error::MalformedLine { line, found, .. } => {
                assert_eq!(line, 2);
                assert_eq!(found, 11);
            }
            other => panic!("unexpected error {other:?}"),
        }
    }
}
