// src/file.rs
//! Filesystem side of the collaborators: reading a saved page, writing an
//! export, and path helpers for user-typed locations.

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use crate::codec::ExportPayload;
use crate::error::{Error, Result};
use crate::messaging::{ExportSink, PageSource};

/// A registration page saved to disk.
#[derive(Clone, Debug)]
pub struct HtmlFile {
    pub path: PathBuf,
}

impl HtmlFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PageSource for HtmlFile {
    fn page_html(&self) -> Result<String> {
        let bytes = fs::read(&self.path)?;
        // Saved pages are not always UTF-8; lossy is fine for table text.
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// Writes the export document to a file, creating parent directories.
#[derive(Clone, Debug)]
pub struct FileSink {
    pub path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ExportSink for FileSink {
    fn open(&mut self, payload: &ExportPayload) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                ensure_directory(parent)?;
            }
        }
        fs::write(&self.path, &payload.document)?;
        logf!("Export: wrote {} ({} bytes)", self.path.display(), payload.document.len());
        Ok(())
    }
}

/// Writes the `data:` URI, one line, to any writer (stdout for the CLI).
pub struct UriSink<W: Write> {
    out: W,
}

impl<W: Write> UriSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ExportSink for UriSink<W> {
    fn open(&mut self, payload: &ExportPayload) -> Result<()> {
        writeln!(self.out, "{}", payload.data_uri())?;
        self.out.flush()?;
        Ok(())
    }
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c == '/' || c == '\\' { sep } else { c }).collect()
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(Error::Io(std::io::Error::other(format!(
            "Path exists but is not a directory: {}",
            dir.display()
        ))));
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}
