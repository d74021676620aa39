//! The simulation loop: line source → parser → robot → report sink.

use std::io::Write;

use anyhow::{Context, Result};
use tracing::{debug, info, instrument};

use crate::core::command::{MalformedCommand, parse_command};
use crate::core::robot::Robot;
use crate::io::line_source::LineSource;

/// What happened during a run, returned instead of logged globally.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Lines pulled from the source, blank ones included.
    pub lines_read: u64,
    /// Blank or whitespace-only lines skipped without parsing.
    pub blank_lines: u64,
    /// Commands that parsed and were handed to the robot.
    pub commands_applied: u64,
    /// Reports written to the output sink.
    pub reports_written: u64,
    /// Rejected lines, in input order.
    pub malformed: Vec<MalformedCommand>,
}

/// Drive `robot` with every line of `source`, writing reports to `out`.
///
/// Blank lines are skipped and malformed lines are recorded in the summary;
/// neither stops the loop. An error from the source or from writing a report
/// ends the run and is returned. `source` is dropped before this returns on
/// every path.
#[instrument(skip_all)]
pub fn run_simulation<S: LineSource, W: Write>(
    mut source: S,
    robot: &mut Robot,
    out: &mut W,
) -> Result<RunSummary> {
    let mut summary = RunSummary::default();

    while let Some(line) = source.next_line()? {
        summary.lines_read += 1;
        if line.trim().is_empty() {
            summary.blank_lines += 1;
            continue;
        }

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(err) => {
                debug!(line = summary.lines_read, error = %err, "ignoring invalid command");
                summary.malformed.push(err);
                continue;
            }
        };

        summary.commands_applied += 1;
        if let Some(report) = robot.apply(command) {
            writeln!(out, "{report}").context("write report")?;
            summary.reports_written += 1;
        }
    }

    out.flush().context("flush report output")?;
    info!(
        lines = summary.lines_read,
        applied = summary.commands_applied,
        malformed = summary.malformed.len(),
        reports = summary.reports_written,
        "input exhausted"
    );
    Ok(summary)
}
