// src/gui/components/mod.rs
pub mod action_buttons;
pub mod course_panel;
pub mod section_table;
