// Greenhouse Sim - Output rendering
// Copyright (c) 2025 David Martin Venti
//
// Dual-licensed under AGPL-3.0 and Commercial License.
// See LICENSE file for details.

//! Text and JSON-lines output.

use clap::ValueEnum;
use greenhouse::{IntervalReport, LogEntry, SessionSummary};
use std::io::{self, Write};

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report.
    Text,
    /// One JSON object per line.
    Json,
}

/// Human-readable block for one interval.
pub fn write_report<W: Write>(out: &mut W, report: &IntervalReport) -> io::Result<()> {
    writeln!(out, "Interval {}:", report.interval)?;
    writeln!(out, "Sensor Readings: {}", report.reading)?;
    writeln!(out, "Decisions:")?;
    writeln!(out, "{}", report.decision)?;
    writeln!(
        out,
        "Moisture Trend: {:.1}% average over {}/{} readings ({})",
        report.trend.moving_average * 100.0,
        report.trend.samples,
        report.trend.window,
        report.trend.trend
    )?;
    writeln!(out, "Recommendation: {}", report.recommendation.schedule)?;
    writeln!(out, "{}", report.recommendation.advice)
}

fn render_entry(entry: &LogEntry) -> String {
    let mut flags = String::new();
    if entry.alert {
        flags.push_str(" ALERT");
    }
    if entry.critical {
        flags.push_str(" CRITICAL");
    }
    format!(
        "  #{:<3} moisture {:>5.1}%  temp {:>4.1}°C  humidity {:>5.1}%  watering: {}  shading: {}{}",
        entry.interval,
        entry.soil_moisture * 100.0,
        entry.temperature,
        entry.humidity * 100.0,
        entry.watering,
        entry.shading,
        flags
    )
}

/// Human-readable end-of-run summary.
pub fn write_summary<W: Write>(out: &mut W, summary: &SessionSummary) -> io::Result<()> {
    writeln!(out, "=== Summary ===")?;
    writeln!(
        out,
        "Intervals: {}  Alerts: {}  Critical: {}",
        summary.intervals, summary.alert_intervals, summary.critical_intervals
    )?;
    match (&summary.trend, &summary.recommendation) {
        (Some(trend), Some(recommendation)) => {
            writeln!(
                out,
                "Moisture Trend: {} ({:.1}% average)",
                trend.trend,
                trend.moving_average * 100.0
            )?;
            writeln!(out, "Watering Schedule: {}", recommendation.schedule)?;
        }
        _ => writeln!(out, "Moisture Trend: no readings")?,
    }
    writeln!(out, "{}", summary.advice)?;
    writeln!(out, "Last {} log entries:", summary.recent.len())?;
    for entry in &summary.recent {
        writeln!(out, "{}", render_entry(entry))?;
    }
    Ok(())
}

/// Write all reports followed by the summary.
pub fn write_output<W: Write>(
    out: &mut W,
    format: OutputFormat,
    reports: &[IntervalReport],
    summary: &SessionSummary,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => {
            for report in reports {
                write_report(out, report)?;
                writeln!(out)?;
            }
            write_summary(out, summary)?;
        }
        OutputFormat::Json => {
            for report in reports {
                serde_json::to_writer(&mut *out, report)?;
                writeln!(out)?;
            }
            serde_json::to_writer(&mut *out, summary)?;
            writeln!(out)?;
        }
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use greenhouse::{RuleConfig, SimulationSession};
    use greenhouse_testdata::Scenario;

    fn report_text(report: &IntervalReport) -> String {
        let mut buf = Vec::new();
        write_report(&mut buf, report).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn summary_text(summary: &SessionSummary) -> String {
        let mut buf = Vec::new();
        write_summary(&mut buf, summary).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn baseline_run() -> (Vec<IntervalReport>, SessionSummary) {
        let mut session = SimulationSession::new(RuleConfig::default()).unwrap();
        let reports = session.run(Scenario::Baseline.readings());
        (reports, session.summary())
    }

    #[test]
    fn test_report_text() {
        let (reports, _) = baseline_run();
        let text = report_text(&reports[2]);
        assert!(text.starts_with("Interval 3:"));
        assert!(text.contains("ALERT!"));
        assert!(text.contains("High Temp (>36°C)"));
        assert!(text.contains("CRITICAL RISK FLAG!"));
        assert!(text.contains("Close fully"));
    }

    #[test]
    fn test_quiet_interval_text() {
        let (reports, _) = baseline_run();
        let text = report_text(&reports[0]);
        assert!(text.contains("No Alert"));
        assert!(!text.contains("CRITICAL"));
    }

    #[test]
    fn test_summary_text() {
        let (_, summary) = baseline_run();
        let text = summary_text(&summary);
        assert!(text.contains("Intervals: 10  Alerts: 4  Critical: 1"));
        assert!(text.contains("Last 5 log entries:"));
        assert!(text.contains("#6"));
        assert!(text.contains("#10"));
        assert!(!text.contains("#5 "));
    }

    #[test]
    fn test_empty_summary_text() {
        let session = SimulationSession::new(RuleConfig::default()).unwrap();
        let text = summary_text(&session.summary());
        assert!(text.contains("no readings"));
        assert!(text.contains("Collecting more data"));
        assert!(text.contains("Last 0 log entries:"));
    }

    #[test]
    fn test_json_lines() {
        let (reports, summary) = baseline_run();
        let mut buf = Vec::new();
        write_output(&mut buf, OutputFormat::Json, &reports, &summary).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 11);

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["interval"], 1);
        assert_eq!(first["decision"]["alert_triggered"], false);

        let last: serde_json::Value = serde_json::from_str(lines[10]).unwrap();
        assert_eq!(last["intervals"], 10);
        assert_eq!(last["recent"].as_array().unwrap().len(), 5);
    }

    #[test]
    fn test_text_output_ends_with_summary() {
        let (reports, summary) = baseline_run();
        let mut buf = Vec::new();
        write_output(&mut buf, OutputFormat::Text, &reports, &summary).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("Interval 10:"));
        assert!(text.trim_end().lines().last().unwrap().contains("#10"));
    }
}
