//! Report rendering: JSON for machines, colored terminal text for humans.

use clap::ValueEnum;
use colored::*;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::api::{IssueResponse, ProjectResponse};
use crate::core::{FrictionLevel, FrictionResult, ProjectReport, MS_PER_DAY};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Terminal,
}

pub trait OutputWriter {
    fn write_issue(&mut self, response: &IssueResponse) -> anyhow::Result<()>;
    fn write_project(&mut self, response: &ProjectResponse) -> anyhow::Result<()>;
}

pub fn create_writer(
    format: OutputFormat,
    output: Option<&Path>,
) -> anyhow::Result<Box<dyn OutputWriter>> {
    let sink: Box<dyn Write> = match output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(std::io::stdout()),
    };
    Ok(match format {
        OutputFormat::Json => Box::new(JsonWriter::new(sink)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(sink)),
    })
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_issue(&mut self, response: &IssueResponse) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(response)?;
        writeln!(self.writer, "{json}")?;
        Ok(())
    }

    fn write_project(&mut self, response: &ProjectResponse) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(response)?;
        writeln!(self.writer, "{json}")?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn colorize(level: FrictionLevel, text: &str) -> ColoredString {
        match level {
            FrictionLevel::Smooth => text.green(),
            FrictionLevel::Friction => text.yellow(),
            FrictionLevel::HighFriction => text.red().bold(),
        }
    }

    fn write_result(&mut self, result: &FrictionResult) -> anyhow::Result<()> {
        writeln!(
            self.writer,
            "{} {}",
            result.issue_key.bold(),
            result.summary
        )?;
        let score_line = format!("{} ({})", result.score, result.level.label());
        writeln!(
            self.writer,
            "  Friction score: {}",
            Self::colorize(result.level, &score_line)
        )?;
        writeln!(self.writer, "  Assignee changes: {}", result.assignee_changes)?;
        if result.loops.is_empty() {
            writeln!(self.writer, "  Status loops: none")?;
        } else {
            writeln!(self.writer, "  Status loops: {}", result.loops.len())?;
            for lp in &result.loops {
                writeln!(
                    self.writer,
                    "    {} revisited after {} ({} -> {})",
                    lp.status,
                    format_duration(lp.duration_ms),
                    lp.entered_at.format("%Y-%m-%d %H:%M"),
                    lp.reentered_at.format("%Y-%m-%d %H:%M"),
                )?;
            }
        }
        writeln!(self.writer, "  Change events: {}", result.history_count)?;
        Ok(())
    }

    fn write_error(&mut self, error: &str, details: &str) -> anyhow::Result<()> {
        writeln!(self.writer, "{}: {details}", error.red().bold())?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_issue(&mut self, response: &IssueResponse) -> anyhow::Result<()> {
        match response {
            IssueResponse::Success(result) => self.write_result(result),
            IssueResponse::Error(envelope) => {
                self.write_error(&envelope.error, &envelope.details)
            }
        }
    }

    fn write_project(&mut self, response: &ProjectResponse) -> anyhow::Result<()> {
        let report: &ProjectReport = match response {
            ProjectResponse::Success(report) => report,
            ProjectResponse::Error(envelope) => {
                return self.write_error(&envelope.error, &envelope.details)
            }
        };

        writeln!(
            self.writer,
            "{} friction report ({})",
            report.project_key.bold(),
            report.timestamp.format("%Y-%m-%d %H:%M UTC"),
        )?;
        writeln!(self.writer, "  Issues analyzed: {}", report.issues_analyzed)?;
        writeln!(
            self.writer,
            "  Average friction: {}",
            report.average_friction
        )?;
        writeln!(self.writer, "  Max friction: {}", report.max_friction)?;

        if report.high_friction_issues.is_empty() {
            writeln!(self.writer, "  High-friction issues: none")?;
        } else {
            writeln!(self.writer, "  High-friction issues:")?;
            for result in &report.high_friction_issues {
                let line = format!(
                    "    {:<12} {:>5}  {}",
                    result.issue_key,
                    result.score,
                    result.level.label()
                );
                writeln!(self.writer, "{}", Self::colorize(result.level, &line))?;
            }
        }

        if !report.failures.is_empty() {
            writeln!(
                self.writer,
                "  {} ({}):",
                "Failed analyses".red(),
                report.failures.len()
            )?;
            for failure in &report.failures {
                writeln!(self.writer, "    {}: {}", failure.issue_key, failure.error)?;
            }
        }
        Ok(())
    }
}

fn format_duration(ms: u64) -> String {
    let days = ms as i64 / MS_PER_DAY;
    let hours = (ms as i64 % MS_PER_DAY) / 3_600_000;
    let minutes = (ms as i64 % 3_600_000) / 60_000;
    if days > 0 {
        format!("{days}d {hours}h")
    } else if hours > 0 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{minutes}m")
    }
}
