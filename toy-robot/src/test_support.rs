//! Test-only helpers: scripted line sources and command files.

use std::cell::Cell;
use std::collections::VecDeque;
use std::fs;
use std::path::PathBuf;
use std::rc::Rc;

use anyhow::{Result, anyhow};

use crate::core::board::Board;
use crate::core::robot::Robot;
use crate::io::line_source::LineSource;
use crate::simulate::{RunSummary, run_simulation};

/// Line source that replays fixed lines, optionally failing once they run out.
pub struct ScriptedLines {
    lines: VecDeque<String>,
    fail_when_exhausted: bool,
    released: Option<Rc<Cell<bool>>>,
}

impl ScriptedLines {
    pub fn new<I, L>(lines: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            fail_when_exhausted: false,
            released: None,
        }
    }

    /// Return an I/O-style error instead of end of input after the last line.
    pub fn fail_after(mut self) -> Self {
        self.fail_when_exhausted = true;
        self
    }

    /// Set `flag` to true when this source is dropped.
    pub fn track_release(mut self, flag: Rc<Cell<bool>>) -> Self {
        self.released = Some(flag);
        self
    }
}

impl LineSource for ScriptedLines {
    fn next_line(&mut self) -> Result<Option<String>> {
        match self.lines.pop_front() {
            Some(line) => Ok(Some(line)),
            None if self.fail_when_exhausted => Err(anyhow!("scripted read failure")),
            None => Ok(None),
        }
    }
}

impl Drop for ScriptedLines {
    fn drop(&mut self) {
        if let Some(flag) = &self.released {
            flag.set(true);
        }
    }
}

/// Run `lines` on a fresh robot on the default board; returns output and summary.
pub fn run_lines(lines: &[&str]) -> (String, RunSummary) {
    let mut robot = Robot::new(Board::default());
    let mut out = Vec::new();
    let summary = run_simulation(ScriptedLines::new(lines.iter().copied()), &mut robot, &mut out)
        .expect("scripted run");
    (String::from_utf8(out).expect("utf8 output"), summary)
}

/// Temporary directory holding a command file; removed on drop.
pub struct CommandFile {
    _dir: tempfile::TempDir,
    pub path: PathBuf,
}

/// Write `lines` (newline-terminated) to a fresh temp file.
pub fn command_file(lines: &[&str]) -> Result<CommandFile> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("commands.txt");
    let mut contents = lines.join("\n");
    contents.push('\n');
    fs::write(&path, contents)?;
    Ok(CommandFile { _dir: dir, path })
}
