// benches/parse_table.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use course_scrape::{
    codec,
    parser::{self, TableRow},
    specs::schedule,
};

const SECTIONS: usize = 400;

/// Synthetic registration page: one header row, then per section a start row,
/// a second-meeting row and an instructor row.
fn sample_page() -> String {
    let mut html = String::from("<html><body><form><table><tbody>\n");
    html.push_str(r##"<tr><td bgcolor="#338000">.Class Nbr</td><td>.Course</td></tr>"##);
    for i in 0..SECTIONS {
        html.push_str(&format!(
            r##"<tr><td bgcolor="#D2EED3">.{n}</td><td>.CS 101</td><td>.{sec}</td><td>.Mon</td><td>.9:00-10:15</td><td>.B-{i}</td><td>.</td><td>.</td><td>.Open</td></tr>
<tr><td>.</td><td>.</td><td>.</td><td>.Wed</td><td>.9:00-10:15</td><td>.B-{i}</td></tr>
<tr><td>Prof &amp; Lecturer {i}</td></tr>
"##,
            n = 10_000 + i,
            sec = i % 26,
        ));
    }
    html.push_str("</tbody></table></form></body></html>");
    html
}

fn bench_parse(c: &mut Criterion) {
    let doc = sample_page();
    let rows: Vec<TableRow> = schedule::read_table(&doc).unwrap_or_default();

    c.bench_function("read_table", |b| {
        b.iter(|| {
            let rows = schedule::read_table(black_box(&doc)).map(|r| r.len());
            black_box(rows.ok())
        })
    });

    c.bench_function("parse_rows", |b| {
        b.iter(|| {
            let parsed = parser::parse_rows(black_box(rows.clone())).map(|p| p.sections.len());
            black_box(parsed.ok())
        })
    });

    let sections = parser::parse_rows(rows).map(|p| p.sections).unwrap_or_default();
    c.bench_function("encode_document", |b| {
        b.iter(|| {
            let doc = codec::encode_document([("CS 101", black_box(sections.as_slice()))]);
            black_box(doc.len())
        })
    });
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
