//! Report generation module - turns a classified competition into output.
//!
//! This module handles:
//! - The markdown display lines of the double-check report
//! - The console table rendering
//! - Summary statistics
//! - JSON export
//!
//! Table layout is handled by the console_format module.
//!
//! # Module Organization
//!
//! - `markdown` - Display lines and the criteria banner
//! - `console` - Colored console tables
//! - `stats` - Summary counts
//! - `export` - JSON export

mod console;
mod export;
mod markdown;
mod stats;

pub use console::print_console_report;
pub use export::export_json_report;
pub use markdown::render_markdown;
