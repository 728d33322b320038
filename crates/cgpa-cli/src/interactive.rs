//! Line-oriented interactive course editor.
//!
//! The session owns a `Roster` that starts with one blank row, and every
//! calculation reads the rows as they stand at that moment.

use std::io::{self, BufRead, Write};

use tracing::debug;

use cgpa_core::options::Options;
use cgpa_core::roster::{Roster, RowId};
use cgpa_orchestration::orchestrator::execute_calculation;

use crate::commands::{parse_command, Command, HELP_TEXT};
use crate::messages::{about_text, detailed_message};
use crate::output::format_report;

/// An interactive editing session over a reader and a writer.
pub struct Session<R, W> {
    input: R,
    output: W,
    roster: Roster,
    opts: Options,
    color: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session with a single blank course row.
    pub fn new(input: R, output: W, opts: Options, color: bool) -> Self {
        Self {
            input,
            output,
            roster: Roster::starter(),
            opts,
            color,
        }
    }

    /// The current course rows.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Consume the session, returning the writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Read and run commands until `quit` or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(
            self.output,
            "CGPA Calculator. Type `help` for commands."
        )?;
        self.list()?;

        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                writeln!(self.output)?;
                break;
            };

            match parse_command(&line) {
                Ok(Command::Quit) => break,
                Ok(command) => self.dispatch(command)?,
                Err(e) => writeln!(self.output, "{e}")?,
            }
        }
        Ok(())
    }

    /// Next input line. Bytes that are not UTF-8 become U+FFFD.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }

    fn dispatch(&mut self, command: Command) -> io::Result<()> {
        debug!(?command, "editor command");
        match command {
            Command::Add(entry) => {
                let id = match entry {
                    Some(entry) => self.roster.add(entry),
                    None => self.roster.add_default(),
                };
                writeln!(
                    self.output,
                    "Added course #{id} ({} total)",
                    self.roster.len()
                )
            }
            Command::Set { id, field, value } => {
                if self.roster.set_field(id, field, value) {
                    writeln!(self.output, "Updated {field} of course #{id}")
                } else {
                    self.no_such_row(id)
                }
            }
            Command::Remove(id) => {
                if self.roster.remove(id).is_some() {
                    writeln!(
                        self.output,
                        "Removed course #{id} ({} total)",
                        self.roster.len()
                    )
                } else {
                    self.no_such_row(id)
                }
            }
            Command::List => self.list(),
            Command::Calculate => self.calculate(),
            Command::Reset => self.reset(),
            Command::About => write!(self.output, "{}", about_text()),
            Command::Help => writeln!(self.output, "{HELP_TEXT}"),
            Command::Quit | Command::Nothing => Ok(()),
        }
    }

    fn no_such_row(&mut self, id: RowId) -> io::Result<()> {
        writeln!(self.output, "No course #{id}")
    }

    fn list(&mut self) -> io::Result<()> {
        writeln!(self.output, "Courses ({}):", self.roster.len())?;
        for row in self.roster.rows() {
            let name = if row.entry.name.trim().is_empty() {
                "(no name)"
            } else {
                row.entry.name.as_str()
            };
            writeln!(
                self.output,
                "{:>4}  {:<24}  {:<5}  {}",
                format!("#{}", row.id),
                name,
                row.entry.grade,
                row.entry.credits
            )?;
        }
        Ok(())
    }

    fn calculate(&mut self) -> io::Result<()> {
        match execute_calculation(&self.roster.entries()) {
            Ok(report) => write!(
                self.output,
                "{}",
                format_report(&report, &self.opts, false, self.color)
            ),
            Err(e) => writeln!(self.output, "{}", detailed_message(&e)),
        }
    }

    fn reset(&mut self) -> io::Result<()> {
        write!(
            self.output,
            "Are you sure you want to reset all courses and results? [y/N] "
        )?;
        self.output.flush()?;

        let answer = self.read_line()?.unwrap_or_default();
        if matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes") {
            self.roster.reset();
            writeln!(self.output, "Calculator reset.")?;
            self.list()
        } else {
            writeln!(self.output, "Reset cancelled.")
        }
    }
}
