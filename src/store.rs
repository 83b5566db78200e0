// src/store.rs
//! Local key-value store for courses.
//!
//! Two kinds of keys are used:
//! - `course_list`: JSON array of course names, unique;
//! - `<course name>`: JSON array of that course's sections.
//!
//! `JsonFileStore` keeps every key in one JSON object on disk and rewrites the
//! file on each mutation. `MemoryStore` is the same thing without the file.

use std::{collections::HashMap, fs, path::{Path, PathBuf}};

use serde_json::{Map, Value};

use crate::config::consts::COURSE_LIST_KEY;
use crate::error::{Error, Result};
use crate::file::ensure_directory;
use crate::model::Section;

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<Value>>;
    fn set(&mut self, key: &str, value: Value) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
    fn clear(&mut self) -> Result<()>;
}

/* ---------------- In-memory ---------------- */

#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    data: HashMap<String, Value>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.data.get(key).cloned())
    }
    fn set(&mut self, key: &str, value: Value) -> Result<()> {
        self.data.insert(s!(key), value);
        Ok(())
    }
    fn remove(&mut self, key: &str) -> Result<()> {
        self.data.remove(key);
        Ok(())
    }
    fn clear(&mut self) -> Result<()> {
        self.data.clear();
        Ok(())
    }
}

/* ---------------- JSON file ---------------- */

#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    data: Map<String, Value>,
}

impl JsonFileStore {
    /// Load `path` if it exists; a missing file is an empty store.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let data = if path.exists() {
            let text = fs::read_to_string(&path)?;
            if text.trim().is_empty() {
                Map::new()
            } else {
                match serde_json::from_str::<Value>(&text)? {
                    Value::Object(map) => map,
                    _ => return Err(Error::store(format!("{} is not a JSON object", path.display()))),
                }
            }
        } else {
            Map::new()
        };
        logd!("Store: opened {} ({} keys)", path.display(), data.len());
        Ok(Self { path, data })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                ensure_directory(parent)?;
            }
        }
        let text = serde_json::to_string_pretty(&self.data)?;
        fs::write(&self.path, text)?;
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.data.get(key).cloned())
    }
    fn set(&mut self, key: &str, value: Value) -> Result<()> {
        self.data.insert(s!(key), value);
        self.flush()
    }
    fn remove(&mut self, key: &str) -> Result<()> {
        if self.data.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
    fn clear(&mut self) -> Result<()> {
        self.data.clear();
        self.flush()
    }
}

/* ---------------- Typed helpers ---------------- */

/// Stored course names; absent key → empty list.
pub fn load_course_list(store: &dyn KeyValueStore) -> Result<Vec<String>> {
    match store.get(COURSE_LIST_KEY)? {
        Some(v) => Ok(serde_json::from_value(v)?),
        None => Ok(Vec::new()),
    }
}

pub fn save_course_list(store: &mut dyn KeyValueStore, names: &[String]) -> Result<()> {
    store.set(COURSE_LIST_KEY, serde_json::to_value(names)?)
}

/// Sections stored under `course`, if any.
pub fn load_sections(store: &dyn KeyValueStore, course: &str) -> Result<Option<Vec<Section>>> {
    match store.get(course)? {
        Some(v) => Ok(Some(serde_json::from_value(v)?)),
        None => Ok(None),
    }
}

pub fn save_sections(store: &mut dyn KeyValueStore, course: &str, sections: &[Section]) -> Result<()> {
    store.set(course, serde_json::to_value(sections)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ClassNumber, Schedule, Slot};
    use serde_json::json;

    fn section(n: i64) -> Section {
        Section {
            class_number: ClassNumber::Id(n),
            section: s!("A"),
            schedule: Some(Schedule::single(Slot::new("Mon", "9-10", "R1"))),
            remarks: None,
            prof: None,
        }
    }

    #[test]
    fn memory_store_get_set_remove_clear() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("k").unwrap(), None);

        store.set("k", json!([1, 2])).unwrap();
        store.set("j", json!("x")).unwrap();
        assert_eq!(store.get("k").unwrap(), Some(json!([1, 2])));

        store.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
        assert_eq!(store.len(), 1);

        store.clear().unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn typed_helpers_round_trip_through_json() {
        let mut store = MemoryStore::new();
        assert!(load_course_list(&store).unwrap().is_empty());

        save_course_list(&mut store, &strs!["CS 101", "MATH 2"]).unwrap();
        save_sections(&mut store, "CS 101", &[section(1), section(2)]).unwrap();

        assert_eq!(load_course_list(&store).unwrap(), strs!["CS 101", "MATH 2"]);
        assert_eq!(load_sections(&store, "CS 101").unwrap(), Some(vec![section(1), section(2)]));
        assert_eq!(load_sections(&store, "MATH 2").unwrap(), None);
    }

    #[test]
    fn wrong_shape_under_course_list_is_an_error() {
        let mut store = MemoryStore::new();
        store.set(COURSE_LIST_KEY, json!({"not": "a list"})).unwrap();
        assert!(matches!(load_course_list(&store), Err(Error::Json(_))));
    }

    #[test]
    fn json_file_store_persists_across_opens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("storage.json");

        {
            let mut store = JsonFileStore::open(&path).unwrap();
            save_course_list(&mut store, &strs!["CS 101"]).unwrap();
            save_sections(&mut store, "CS 101", &[section(7)]).unwrap();
        }

        let mut store = JsonFileStore::open(&path).unwrap();
        assert_eq!(store.path(), path.as_path());
        assert_eq!(load_course_list(&store).unwrap(), strs!["CS 101"]);
        assert_eq!(load_sections(&store, "CS 101").unwrap(), Some(vec![section(7)]));

        store.clear().unwrap();
        let store = JsonFileStore::open(&path).unwrap();
        assert!(load_course_list(&store).unwrap().is_empty());
    }

    #[test]
    fn json_file_store_rejects_non_object_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, "[1,2,3]").unwrap();
        assert!(matches!(JsonFileStore::open(&path), Err(Error::Store(_))));
    }
}
