// src/config/options.rs
use std::path::{Path, PathBuf};

use super::consts::*;
use crate::file::{looks_like_dir_hint, normalize_separators};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub store: StoreOptions,
    pub export: ExportOptions,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreOptions {
    pub path: PathBuf,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self { path: PathBuf::from(STORE_DIR).join(STORE_FILE) }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    out_path: PathBuf,
    /// Hand the sink the `data:` URI instead of writing a file.
    pub as_uri: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            out_path: PathBuf::from(DEFAULT_OUT_DIR).join(DEFAULT_FILE),
            as_uri: false,
        }
    }
}

impl ExportOptions {
    pub fn out_path(&self) -> &Path {
        &self.out_path
    }

    /// Accepts what the user typed. A directory (existing, or hinted with a
    /// trailing separator) gets the default file name appended.
    pub fn set_path(&mut self, user_text: &str) {
        let text = user_text.trim();
        if text.is_empty() {
            self.out_path = ExportOptions::default().out_path;
            return;
        }
        let p = PathBuf::from(normalize_separators(text));
        self.out_path = if looks_like_dir_hint(&p) || p.is_dir() {
            p.join(DEFAULT_FILE)
        } else {
            p
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_into_store_and_out_dirs() {
        let opts = AppOptions::default();
        assert!(opts.store.path.ends_with(STORE_FILE));
        assert!(opts.export.out_path().ends_with(DEFAULT_FILE));
        assert!(!opts.export.as_uri);
    }

    #[test]
    fn dir_hint_gets_default_file_name() {
        let mut export = ExportOptions::default();
        export.set_path("exports/");
        assert_eq!(export.out_path(), Path::new("exports").join(DEFAULT_FILE));
    }

    #[test]
    fn explicit_file_is_kept_and_blank_resets() {
        let mut export = ExportOptions::default();
        export.set_path("fall.txt");
        assert_eq!(export.out_path(), Path::new("fall.txt"));

        export.set_path("   ");
        assert_eq!(export, ExportOptions::default());
    }
}
