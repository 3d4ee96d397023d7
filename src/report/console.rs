//! Console output of the double-check report.
//!
//! Flagged competitors are shown in one table, borderline averages in a
//! second one, followed by the summary counts.

use super::markdown::{CRITERIA, TITLE};
use super::stats::summarize_report;
use crate::classify::{Borderline, Classification, RankScope};
use crate::console_format::{TableWidths, TableWriter, colors_enabled_for, console_widths};
use crate::format::format_time;
use crate::request::DoubleCheckReport;
use crate::wcif::ResultKind;
use std::io::{self, Write};
use term::color::Color;

fn competitor_cells(c: &Classification) -> [String; 6] {
    [
        c.event_name.clone(),
        c.name.clone(),
        c.wca_id.clone(),
        c.kind.label().to_string(),
        format!("{} {}", c.qualifier(), c.ranking_value),
        format_time(&c.event_id, Some(c.best)),
    ]
}

fn borderline_cells(b: &Borderline) -> [String; 6] {
    [
        b.event_name.clone(),
        b.name.clone(),
        b.wca_id.clone(),
        ResultKind::Average.label().to_string(),
        format!("WR {}", b.ranking_value),
        format_time(&b.event_id, Some(b.best)),
    ]
}

fn scope_color(scope: RankScope) -> Color {
    match scope {
        RankScope::World => term::color::BRIGHT_YELLOW,
        RankScope::National => term::color::BRIGHT_GREEN,
    }
}

/// Write the full console report to any writer
pub fn write_console_report<W: Write>(
    report: &DoubleCheckReport,
    writer: &mut W,
    widths: TableWidths,
    use_colors: bool,
) -> io::Result<()> {
    let classification = &report.classification;
    let summary = summarize_report(classification);

    writeln!(writer, "\n{}\n", TITLE)?;
    writeln!(writer, "{}", CRITERIA)?;
    writeln!(writer, "Competition: {} ({})\n", report.title(), report.competition_id)?;

    if summary.flagged == 0 {
        writeln!(writer, "No competitors need a double check.")?;
    } else {
        writeln!(writer, "Competitors that need double checks:")?;
        let mut table = TableWriter::new(&mut *writer, use_colors, widths);
        table.write_table_header()?;
        for event in &classification.results {
            for c in &event.competitors {
                table.write_row(&competitor_cells(c), scope_color(c.scope))?;
            }
        }
        table.write_table_footer()?;
    }

    if !classification.borderline.is_empty() {
        writeln!(writer, "\nBorderline (51-100 World Ranking for Average):")?;
        let mut table = TableWriter::new(&mut *writer, use_colors, widths);
        table.write_table_header()?;
        for b in &classification.borderline {
            table.write_row(&borderline_cells(b), term::color::BRIGHT_CYAN)?;
        }
        table.write_table_footer()?;
    }

    writeln!(writer, "\n=== Summary ===")?;
    writeln!(
        writer,
        "Flagged:    {} ({} WR, {} NR) in {} of {} events",
        summary.flagged, summary.world, summary.national, summary.events_with_flags, summary.events_total
    )?;
    writeln!(writer, "Borderline: {}", summary.borderline)?;

    Ok(())
}

/// Print the console report to stdout, colored only when stdout is a terminal
pub fn print_console_report(report: &DoubleCheckReport) {
    let mut stdout = io::stdout();
    let use_colors = colors_enabled_for(&stdout);
    if let Err(e) = write_console_report(report, &mut stdout, console_widths(), use_colors) {
        log::warn!("failed to write console report: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::{ClassificationReport, classify};
    use crate::wcif;

    fn render(report: &DoubleCheckReport) -> String {
        let mut buf: Vec<u8> = Vec::new();
        write_console_report(report, &mut buf, TableWidths::new(120), false).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_console_sample() {
        let doc = wcif::parse_document(include_str!("../../test-data/sample-wcif.json")).unwrap();
        let report = DoubleCheckReport {
            competition_id: "SampleOpen2026".to_string(),
            competition_name: doc.name.clone(),
            classification: classify(&doc),
        };
        let text = render(&report);

        assert!(text.contains("Double Check Em!"));
        assert!(text.contains("Competition: Sample Open 2026 (SampleOpen2026)"));
        assert!(text.contains("NR 12"));
        assert!(text.contains("22 moves"));
        assert!(text.contains("Borderline (51-100 World Ranking for Average):"));
        assert!(text.contains("Flagged:    4 (3 WR, 1 NR) in 3 of 4 events"));
        assert!(text.contains("Borderline: 2"));
        // Two tables: each has a top and bottom border
        assert_eq!(text.matches('┌').count(), 2);
    }

    #[test]
    fn test_console_nothing_flagged() {
        let report = DoubleCheckReport {
            competition_id: "Quiet2026".to_string(),
            competition_name: None,
            classification: ClassificationReport::default(),
        };
        let text = render(&report);
        assert!(text.contains("Competition: Quiet2026 (Quiet2026)"));
        assert!(text.contains("No competitors need a double check."));
        assert!(!text.contains('┌'));
    }
}
