/// Console formatting module - Pure rendering concerns
///
/// This module handles the bordered console table of flagged competitors:
/// - Table layout and borders
/// - Color terminal output
/// - Unicode-aware truncation and padding (competitor names are not ASCII)
///
/// It accepts pre-formatted cells from the report module and renders them.
/// Any `std::io::Write` destination works; colors are only used for stdout.
use std::io::{self, IsTerminal, Write};
use std::sync::OnceLock;
use term::color::Color;
use terminal_size::{Width, terminal_size};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Column headings, in table order
pub const COLUMN_TITLES: [&str; 6] = ["Event", "Competitor", "WCA ID", "Kind", "Rank", "Result"];

/// Writer for table output - configurable for color/plain text
pub struct TableWriter<W: Write> {
    writer: W,
    use_colors: bool,
    widths: TableWidths,
}

impl<W: Write> TableWriter<W> {
    pub fn new(writer: W, use_colors: bool, widths: TableWidths) -> Self {
        Self { writer, use_colors, widths }
    }

    /// Write formatted text, optionally with color
    fn write_colored(&mut self, text: &str, color: Color) -> io::Result<()> {
        if self.use_colors {
            // Use RGB for bright yellow (better Windows Terminal support)
            if color == term::color::BRIGHT_YELLOW {
                write!(self.writer, "\x1b[38;2;255;255;102m{}\x1b[0m", text)
            } else if let Some(ref mut t) = term::stdout() {
                let _ = t.fg(color);
                let _ = t.write_all(text.as_bytes());
                let _ = t.reset();
                Ok(())
            } else {
                write!(self.writer, "{}", text)
            }
        } else {
            write!(self.writer, "{}", text)
        }
    }

    pub fn write_table_header(&mut self) -> io::Result<()> {
        write!(self.writer, "{}", format_table_header(&self.widths))
    }

    pub fn write_table_footer(&mut self) -> io::Result<()> {
        write!(self.writer, "{}", format_table_footer(&self.widths))
    }

    /// Write one 6-column row in the given color
    pub fn write_row(&mut self, cells: &[String; 6], color: Color) -> io::Result<()> {
        let row = format_row_string(&self.widths, cells);
        self.write_colored(row.trim_end_matches('\n'), color)?;
        writeln!(self.writer)
    }
}

//
// Table Layout and Widths
//

/// Column widths for the 6-column table (including one space of padding each side)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableWidths {
    pub event: usize,
    pub competitor: usize,
    pub wca_id: usize,
    pub kind: usize,
    pub rank: usize,
    pub result: usize,
    pub total: usize, // Total table width including borders
}

impl TableWidths {
    pub fn new(terminal_width: usize) -> Self {
        // Borders: │ = 7 characters (1 before each column + 1 at end)
        let borders = 7;
        let available = terminal_width.saturating_sub(borders);

        // "3x3x3 Multi-Blind" and friends
        let event = 22;
        // "2009ZEMD01" or "[No WCA ID]"
        let wca_id = 14;
        // "Average"
        let kind = 10;
        // "WR 100"
        let rank = 9;
        // "1:12.65", "26 moves", or a packed multi-blind value
        let result = 14;

        // Competitor gets remaining space (for long names)
        let fixed_total = event + wca_id + kind + rank + result;
        let competitor = if available > fixed_total + 20 { available - fixed_total } else { 20 };

        let total = fixed_total + competitor + borders;
        TableWidths { event, competitor, wca_id, kind, rank, result, total }
    }

    fn columns(&self) -> [usize; 6] {
        [self.event, self.competitor, self.wca_id, self.kind, self.rank, self.result]
    }
}

/// Colors are only written to terminals, never to pipes or files
pub fn colors_enabled_for<S: IsTerminal>(stream: &S) -> bool {
    stream.is_terminal()
}

/// Get terminal width or default to 120
fn get_terminal_width() -> usize {
    if let Some((Width(w), _)) = terminal_size() { w as usize } else { 120 }
}

static CONSOLE_WIDTH: OnceLock<usize> = OnceLock::new();

/// Override the detected console width (used by --console-width)
pub fn set_console_width(width: usize) {
    let _ = CONSOLE_WIDTH.set(width); // Ignore error if already initialized
}

/// Table widths for the current console
pub fn console_widths() -> TableWidths {
    TableWidths::new(*CONSOLE_WIDTH.get_or_init(get_terminal_width))
}

//
// Text Formatting Utilities
//

/// Count the display width of a string, accounting for wide Unicode characters
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Truncate and pad string to exact width
pub fn truncate_with_padding(s: &str, width: usize) -> String {
    let display_w = display_width(s);

    if display_w <= width {
        return format!("{}{}", s, " ".repeat(width - display_w));
    }

    let mut result = String::new();
    let mut current_width = 0;

    // Reserve space for "..."
    let target_width = if width >= 3 { width - 3 } else { width };

    for c in s.chars() {
        let c_width = UnicodeWidthChar::width(c).unwrap_or(1);
        if current_width + c_width > target_width {
            break;
        }
        result.push(c);
        current_width += c_width;
    }

    if width >= 3 {
        result.push_str("...");
        current_width += 3;
    }

    // A wide char that did not fit leaves a gap to pad
    if current_width < width {
        result.push_str(&" ".repeat(width - current_width));
    }

    result
}

//
// Table Rendering
//

fn border_line(widths: &TableWidths, left: char, mid: char, right: char) -> String {
    let segments: Vec<String> = widths.columns().iter().map(|w| "─".repeat(*w)).collect();
    format!("{}{}{}\n", left, segments.join(&mid.to_string()), right)
}

/// Format a row of cells, each truncated to its column
pub fn format_row_string(widths: &TableWidths, cells: &[String; 6]) -> String {
    let displays: Vec<String> = cells
        .iter()
        .zip(widths.columns().iter())
        .map(|(cell, width)| truncate_with_padding(cell, width.saturating_sub(2)))
        .collect();
    format!("│ {} │\n", displays.join(" │ "))
}

/// Format table top border, column titles and separator
pub fn format_table_header(widths: &TableWidths) -> String {
    let titles: Vec<String> =
        COLUMN_TITLES.iter().zip(widths.columns().iter()).map(|(t, w)| format!("{:^w$}", t, w = *w)).collect();

    let mut output = String::new();
    output.push_str(&border_line(widths, '┌', '┬', '┐'));
    output.push_str(&format!("│{}│\n", titles.join("│")));
    output.push_str(&border_line(widths, '├', '┼', '┤'));
    output
}

pub fn format_table_footer(widths: &TableWidths) -> String {
    border_line(widths, '└', '┴', '┘')
}

#[cfg(test)]
#[path = "console_format_test.rs"]
mod console_format_test;
