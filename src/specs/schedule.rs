// src/specs/schedule.rs
//! Spec for the class schedule page.
//!
//! Purpose:
//! - Find the schedule table: the first `<table>` inside a `<form>`, then its
//!   first `<tbody>` (or, when the body is implicit, the table's rows outside
//!   `<thead>`/`<tfoot>`).
//! - Read each row's kind from the `bgcolor` of its first cell and each cell's
//!   text content, and hand back tagged `TableRow`s.
//!
//! Cell text is *not* trimmed or collapsed here: every data cell starts with a
//! one-character formatting artifact the parser strips itself.

use crate::core::html::{
    attr_value_ci, element_block_ci, element_blocks_ci, first_open_tag_ci, inner_after_open_tag,
    open_tag, text_content,
};
use crate::error::{Error, Result};
use crate::parser::TableRow;

/// Read the schedule table of a saved registration page.
pub fn read_table(doc: &str) -> Result<Vec<TableRow>> {
    let table = find_schedule_table(doc)
        .ok_or_else(|| Error::structural("no <table> inside a <form> on this page"))?;

    let rows: Vec<TableRow> = body_rows(inner_after_open_tag(table)).into_iter().map(read_row).collect();

    if rows.is_empty() {
        return Err(Error::structural("schedule table has no rows"));
    }
    logd!("Page: schedule table with {} rows", rows.len());
    Ok(rows)
}

/// `form table`: first form (in document order) that holds a table.
fn find_schedule_table(doc: &str) -> Option<&str> {
    element_blocks_ci(doc, "form").into_iter().find_map(|form| {
        element_block_ci(form, "table", 0).map(|(t_s, t_e)| &form[t_s..t_e])
    })
}

/// `tBodies[0].rows`: rows of the explicit body when it belongs to this
/// table, else the table's own rows minus `<thead>`/`<tfoot>` sections.
fn body_rows(table_inner: &str) -> Vec<&str> {
    let tbody = first_open_tag_ci(table_inner, "tbody");
    let nested = first_open_tag_ci(table_inner, "table");
    match tbody {
        Some(b) if nested.is_none_or(|t| b < t) => {
            let body = match element_block_ci(table_inner, "tbody", b) {
                Some((s, e)) => inner_after_open_tag(&table_inner[s..e]),
                // `</tbody>` is optional in HTML
                None => &table_inner[b..],
            };
            element_blocks_ci(body, "tr")
        }
        _ => implicit_body_rows(table_inner),
    }
}

fn implicit_body_rows(table_inner: &str) -> Vec<&str> {
    let mut skip: Vec<(usize, usize)> = Vec::new();
    for tag in ["thead", "tfoot"] {
        let mut pos = 0usize;
        while let Some((s, e)) = element_block_ci(table_inner, tag, pos) {
            skip.push((s, e));
            pos = e;
        }
    }

    let mut out = Vec::new();
    let mut pos = 0usize;
    while let Some((s, e)) = element_block_ci(table_inner, "tr", pos) {
        match skip.iter().find(|(hs, he)| *hs <= s && s < *he) {
            // rows of a header/footer section; resume after it
            Some(&(_, he)) => pos = he.max(e),
            None => {
                out.push(&table_inner[s..e]);
                pos = e;
            }
        }
    }
    out
}

fn read_row(tr: &str) -> TableRow {
    let cells = cell_blocks(inner_after_open_tag(tr));
    let marker = cells.first().and_then(|c| attr_value_ci(open_tag(c), "bgcolor"));
    let texts = cells
        .iter()
        .map(|c| text_content(inner_after_open_tag(c)))
        .collect();
    TableRow::classify(marker.as_deref(), texts)
}

/// `<td>` and `<th>` children of a row, in order.
fn cell_blocks(row_inner: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut pos = 0usize;
    loop {
        let td = element_block_ci(row_inner, "td", pos);
        let th = element_block_ci(row_inner, "th", pos);
        let next = match (td, th) {
            (Some(a), Some(b)) => Some(if a.0 < b.0 { a } else { b }),
            (a, b) => a.or(b),
        };
        let Some((c_s, c_e)) = next else { break };
        out.push(&row_inner[c_s..c_e]);
        pos = c_e;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r##"
        <html><body>
        <table id="banner"><tr><td>not this one</td></tr></table>
        <FORM name="sched" method="post">
          <table border=1>
            <tbody>
              <tr><td bgcolor="#338000">&nbsp;Class Nbr</td><td>&nbsp;Course</td></tr>
              <tr>
                <td bgcolor="#D2EED3">&nbsp;12345</td><td>&nbsp;CS 101</td><td>&nbsp;A</td>
                <td>&nbsp;Mon</td><td>&nbsp;9-10</td><td>&nbsp;R1</td><td>&nbsp;</td><td>&nbsp;</td>
                <td>&nbsp;</td>
              </tr>
              <tr><td colspan=9> Dr. Smith </td></tr>
            </tbody>
          </table>
        </FORM>
        </body></html>
    "##;

    #[test]
    fn reads_tagged_rows_from_form_table() {
        let rows = read_table(PAGE).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], TableRow::Header);
        match &rows[1] {
            TableRow::SectionStart(cells) => {
                assert_eq!(cells.len(), 9);
                assert_eq!(cells[0], "\u{a0}12345");
                assert_eq!(cells[1], "\u{a0}CS 101");
                assert_eq!(cells[8], "\u{a0}");
            }
            other => panic!("expected section row, got {other:?}"),
        }
        assert_eq!(rows[2], TableRow::Continuation(strs![" Dr. Smith "]));
    }

    #[test]
    fn implicit_body_and_th_cells() {
        let doc = r##"<form><table>
            <tr><th bgcolor=#338000>x</th></tr>
            <tr><td>y</td></tr>
        </table></form>"##;
        let rows = read_table(doc).unwrap();
        assert_eq!(rows, vec![TableRow::Header, TableRow::Continuation(strs!["y"])]);
    }

    #[test]
    fn implicit_body_leaves_out_thead_and_tfoot_rows() {
        let doc = r##"<form><table>
            <THEAD><tr><td bgcolor="#338000">head</td></tr></THEAD>
            <tr><td>a</td></tr>
            <tfoot><tr><td>foot</td></tr></tfoot>
            <tr><td>b</td></tr>
        </table></form>"##;
        let rows = read_table(doc).unwrap();
        assert_eq!(
            rows,
            vec![TableRow::Continuation(strs!["a"]), TableRow::Continuation(strs!["b"])]
        );
    }

    #[test]
    fn explicit_body_after_thead_is_used() {
        let doc = r##"<form><table>
            <thead><tr><td>head</td></tr></thead>
            <tbody><tr><td>a</td></tr></tbody>
        </table></form>"##;
        let rows = read_table(doc).unwrap();
        assert_eq!(rows, vec![TableRow::Continuation(strs!["a"])]);
    }

    #[test]
    fn nested_table_in_cell_stays_inside_its_row() {
        let doc = r##"<form><table>
            <tr><td>z<table><tbody><tr><td>inner</td></tr></tbody></table></td></tr>
            <tr><td>after</td></tr>
        </table></form>"##;
        let rows = read_table(doc).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], TableRow::Continuation(strs!["zinner"]));
    }

    #[test]
    fn missing_form_table_is_structural_error() {
        let err = read_table("<table><tr><td>x</td></tr></table>").unwrap_err();
        assert!(matches!(err, Error::StructuralPrecondition(_)));

        let err = read_table("<form><table><tbody></tbody></table></form>").unwrap_err();
        assert!(err.to_string().contains("no rows"));
    }
}
