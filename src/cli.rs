// src/cli.rs
use std::{
    fs,
    io::{self, Write},
    path::PathBuf,
};

use crate::codec;
use crate::config::options::{AppOptions, ExportOptions};
use crate::courses;
use crate::error::{Error, Result};
use crate::file::{FileSink, HtmlFile, UriSink};
use crate::messaging::{dispatch, ExportSink, NoPage, Outcome, PageSource, Request};
use crate::notify::ChangeCounter;
use crate::store::JsonFileStore;

const HELP: &str = include_str!("cli_help.txt");

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Add(PathBuf),
    Remove(String),
    Clear,
    List,
    Show(String),
    Export,
    Import(PathBuf),
    Send { json: String, page: Option<PathBuf> },
    Help,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    pub options: AppOptions,
    pub command: Command,
}

pub fn run<I: IntoIterator<Item = String>>(args: I) -> Result<()> {
    let inv = parse_args(args)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(&inv, &mut out)
}

pub fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Invocation> {
    let mut options = AppOptions::default();
    let mut command: Option<Command> = None;
    let mut page: Option<PathBuf> = None;

    let mut args = args.into_iter();
    let value = |args: &mut I::IntoIter, what: &str| -> Result<String> {
        args.next().ok_or_else(|| Error::usage(format!("Missing value for {what}")))
    };

    while let Some(a) = args.next() {
        match a.as_str() {
            "--store" => options.store.path = PathBuf::from(value(&mut args, "--store")?),
            "-o" | "--out" => {
                let v = value(&mut args, "--out")?;
                options.export.set_path(&v);
            }
            "--uri" => options.export.as_uri = true,
            "--page" => page = Some(PathBuf::from(value(&mut args, "--page")?)),
            "-h" | "--help" => command = Some(Command::Help),
            other if command.is_some() => {
                return Err(Error::usage(format!("Unexpected argument: {other}")));
            }
            "add" => command = Some(Command::Add(PathBuf::from(value(&mut args, "add")?))),
            "remove" => command = Some(Command::Remove(value(&mut args, "remove")?)),
            "clear" => command = Some(Command::Clear),
            "list" => command = Some(Command::List),
            "show" => command = Some(Command::Show(value(&mut args, "show")?)),
            "export" => command = Some(Command::Export),
            "import" => command = Some(Command::Import(PathBuf::from(value(&mut args, "import")?))),
            "send" => command = Some(Command::Send { json: value(&mut args, "send")?, page: None }),
            other => return Err(Error::usage(format!("Unknown command: {other}"))),
        }
    }

    let command = match command {
        Some(Command::Send { json, .. }) => Command::Send { json, page },
        Some(c) => c,
        None => return Err(Error::usage("No command given (try --help)")),
    };
    Ok(Invocation { options, command })
}

fn make_sink<'a, W: Write>(export: &ExportOptions, out: &'a mut W) -> Box<dyn ExportSink + 'a> {
    if export.as_uri {
        Box::new(UriSink::new(out))
    } else {
        Box::new(FileSink::new(export.out_path()))
    }
}

pub fn execute<W: Write>(inv: &Invocation, out: &mut W) -> Result<()> {
    if inv.command == Command::Help {
        write!(out, "{HELP}")?;
        return Ok(());
    }

    let mut store = JsonFileStore::open(&inv.options.store.path)?;
    let export = &inv.options.export;

    match &inv.command {
        Command::Add(path) => {
            let html = HtmlFile::new(path).page_html()?;
            let name = courses::add_course_from_html(&mut store, &html)?;
            let n = courses::course_sections(&store, &name)?.len();
            writeln!(out, "Added {name} ({n} sections)")?;
        }
        Command::Remove(target) => {
            if courses::remove_course(&mut store, target)? {
                writeln!(out, "Removed {target}")?;
            } else {
                writeln!(out, "{target} was not in the course list")?;
            }
        }
        Command::Clear => {
            courses::clear_course_list(&mut store)?;
            writeln!(out, "Course list cleared")?;
        }
        Command::List => {
            for name in courses::list_courses(&store)? {
                writeln!(out, "{name}")?;
            }
        }
        Command::Show(course) => {
            let mut text = s!();
            for section in courses::course_sections(&store, course)? {
                codec::encode_section(&mut text, course, &section);
            }
            write!(out, "{text}")?;
        }
        Command::Export => {
            let payload = courses::export_course_list(&store)?;
            make_sink(export, out).open(&payload)?;
            if !export.as_uri {
                writeln!(
                    out,
                    "Exported {} sections of {} courses to {}",
                    payload.sections,
                    payload.courses,
                    export.out_path().display()
                )?;
            }
        }
        Command::Import(path) => {
            let text = fs::read_to_string(path)?;
            let names = courses::import_document(&mut store, &text)?;
            writeln!(out, "Imported {} courses", names.len())?;
        }
        Command::Send { json, page } => {
            let request = Request::from_json(json)?;
            let page_file = page.as_ref().map(HtmlFile::new);
            let page: &dyn PageSource = match &page_file {
                Some(f) => f,
                None => &NoPage,
            };
            let mut notify = ChangeCounter::default();
            let outcome = {
                let mut sink = make_sink(export, out);
                dispatch(&request, &mut store, page, sink.as_mut(), &mut notify)?
            };
            writeln!(out, "{}", describe(&outcome))?;
        }
        Command::Help => {}
    }
    Ok(())
}

fn describe(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Added(name) => format!("Added {name}"),
        Outcome::Removed { target, listed: true } => format!("Removed {target}"),
        Outcome::Removed { target, listed: false } => format!("{target} was not in the course list"),
        Outcome::Cleared => s!("Course list cleared"),
        Outcome::Exported { courses, sections } => format!("Exported {sections} sections of {courses} courses"),
        Outcome::Ignored => s!("Ignored"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s!(*s)).collect()
    }

    const PAGE: &str = r##"<form><table><tbody>
        <tr><td bgcolor="#338000">.Nbr</td></tr>
        <tr><td bgcolor="#D2EED3">.12345</td><td>.CS 101</td><td>.A</td><td>.Mon</td>
            <td>.9-10</td><td>.R1</td><td>.</td><td>.</td><td>.</td></tr>
        <tr><td>Dr. Smith</td></tr>
    </tbody></table></form>"##;

    #[test]
    fn parses_global_options_around_command() {
        let inv = parse_args(args(&["--store", "s.json", "export", "--uri"])).unwrap();
        assert_eq!(inv.command, Command::Export);
        assert_eq!(inv.options.store.path, PathBuf::from("s.json"));
        assert!(inv.options.export.as_uri);

        let inv = parse_args(args(&["send", "{}", "--page", "p.html"])).unwrap();
        assert_eq!(
            inv.command,
            Command::Send { json: s!("{}"), page: Some(PathBuf::from("p.html")) }
        );
    }

    #[test]
    fn usage_errors() {
        assert!(matches!(parse_args(args(&[])), Err(Error::Usage(_))));
        assert!(matches!(parse_args(args(&["frobnicate"])), Err(Error::Usage(_))));
        assert!(matches!(parse_args(args(&["remove"])), Err(Error::Usage(_))));
        assert!(matches!(parse_args(args(&["list", "extra"])), Err(Error::Usage(_))));
    }

    #[test]
    fn add_list_show_export_via_commands() {
        let dir = tempfile::tempdir().unwrap();
        let store = dir.path().join("storage.json");
        let page = dir.path().join("page.html");
        let csv = dir.path().join("out.csv");
        fs::write(&page, PAGE).unwrap();

        let store_s = store.to_string_lossy().into_owned();
        let run = |v: &[&str]| -> String {
            let mut full = args(&["--store", store_s.as_str()]);
            full.extend(args(v));
            let inv = parse_args(full).unwrap();
            let mut out = Vec::new();
            execute(&inv, &mut out).unwrap();
            String::from_utf8(out).unwrap()
        };

        assert_eq!(run(&["add", page.to_str().unwrap()]), "Added CS 101 (1 sections)\n");
        assert_eq!(run(&["list"]), "CS 101\n");
        assert_eq!(run(&["show", "CS 101"]), "12345,CS 101,A,Mon,9-10,R1,,,,\r\n");

        let msg = run(&["export", "-o", csv.to_str().unwrap()]);
        assert!(msg.starts_with("Exported 1 sections of 1 courses"));
        let doc = fs::read_to_string(&csv).unwrap();
        assert!(doc.ends_with("12345,CS 101,A,Mon,9-10,R1,,,,\r\n"));

        let uri = run(&["export", "--uri"]);
        assert!(uri.starts_with("data:text/csv;charset=utf-8,Class%20Number,"));

        assert_eq!(run(&["send", r#"{"message":"removeCourse","target":"CS 101"}"#]), "Removed CS 101\n");
        assert_eq!(run(&["list"]), "");
    }

    #[test]
    fn send_add_without_page_fails() {
        let dir = tempfile::tempdir().unwrap();
        let store = dir.path().join("storage.json");
        let inv = parse_args(args(&[
            "--store",
            store.to_str().unwrap(),
            "send",
            r#"{"message":"addCourse"}"#,
        ]))
        .unwrap();
        let err = execute(&inv, &mut Vec::new()).unwrap_err();
        assert!(matches!(err, Error::StructuralPrecondition(_)));
    }
}
