// src/specs/mod.rs
//! # Page "specs"
//!
//! Page-specific readers for the registration site. A spec knows *where the
//! ground truth lives in the HTML* and turns it into the typed shapes the rest
//! of the crate works on. It does not decide what to do with them.
//!
//! ## What lives here
//! - Locating the schedule table (`form table`, first body).
//! - Reading the per-row marker (cell 0 `bgcolor`) and tagging rows as
//!   `parser::TableRow` before any record building happens.
//! - Cell text extraction with `core::html` (text content, entities decoded,
//!   whitespace left for the parser's marker stripping).
//!
//! ## What does **not** live here
//! - Record building (`parser`), persistence (`store`), export (`codec`).
//!
//! ## Conventions
//! - Case-insensitive tag and attribute matching.
//! - Missing structure is an error (`Error::StructuralPrecondition`), never a
//!   silently empty result.
//! - Testable offline against saved page fragments.
pub mod schedule;
