// src/config/consts.rs

// Local store
pub const STORE_DIR: &str = ".store";
pub const STORE_FILE: &str = "storage.json";
pub const LOG_FILE: &str = ".store/debug.log";
pub const COURSE_LIST_KEY: &str = "course_list";

// Row markers (cell 0 `bgcolor`)
pub const HEADER_MARKER: &str = "#338000";
pub const SECTION_MARKER: &str = "#D2EED3";

// Column layout of the schedule table
pub const CLASS_NUMBER_COL: usize = 0;
pub const COURSE_COL: usize = 1;
pub const SECTION_COL: usize = 2;
pub const DAY_COL: usize = 3;
pub const TIME_COL: usize = 4;
pub const ROOM_COL: usize = 5;
pub const REMARKS_COL: usize = 8;

// Export
pub const EXPORT_HEADER: &str =
    "Class Number,Course,Section,Day 1, Time 1,Room 1,Day 2, Time 2, Room 2, Remarks,";
pub const EXPORT_FIELDS: usize = 10;
pub const LINE_END: &str = "\r\n";
pub const DATA_URI_PREFIX: &str = "data:text/csv;charset=utf-8,";
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "courses.csv";
