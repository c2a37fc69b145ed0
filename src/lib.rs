//! skills-list - Render a sortable skills list as HTML
//!
//! Loads `{name, level}` records from a JSON document, renders them as a
//! definition list and re-sorts them by name or level on each button click,
//! flipping the direction every time the same key is chosen.

pub mod cli;
pub mod config;
pub mod controller;
pub mod fragment;
pub mod skill;
pub mod source;
pub mod store;
pub mod view;
