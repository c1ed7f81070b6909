//! Interactive roster session
//!
//! A line-oriented stand-in for the grade sheet form. Each input line is one
//! user action; rows are numbered from 1.

use gradesheet::core::config::Config;
use gradesheet::core::loader::parse_roster_csv;
use gradesheet::core::models::Field;
use gradesheet::core::notice::Notice;
use gradesheet::core::roster::Edit;
use gradesheet::core::{Roster, RosterError, Summary};
use std::collections::BTreeSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;
use tracing::{debug, info, warn};

const HELP: &str = "\
Commands:
  add                         append an empty course row
  set <row> <field> <value>   edit a field (category, requirement, name,
                              credits, attendance, assignment, midterm, final)
  blur <row> <field>          validate a pending numeric input
  select <row>                toggle the delete checkbox of a row
  delete [rows...]            delete the given rows, or the selected ones
  save                        validate, sort and save the roster
  show                        print the roster
  summary                     print the summary row
  help                        print this help
  quit                        end the session";

/// Whether the session should keep reading input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Run a session over stdin or a script file
///
/// # Errors
/// Returns a message if the script or roster file cannot be read, or if
/// writing to stdout fails
pub fn run(
    script: Option<&Path>,
    load: Option<&Path>,
    config: &Config,
    verbose: bool,
) -> Result<(), String> {
    let roster = match load {
        Some(path) => {
            let records = parse_roster_csv(path)
                .map_err(|e| format!("✗ Failed to load roster {}: {e}", path.display()))?;
            info!(path = %path.display(), courses = records.len(), "loaded roster");
            Roster::with_records(records, config.grading_scale())
        }
        None => Roster::new(config.grading_scale()),
    };

    let mut session = Session::new(roster, config.session.year.clone());
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let outcome = match script {
        Some(path) => {
            let file = File::open(path)
                .map_err(|e| format!("✗ Failed to open script {}: {e}", path.display()))?;
            if verbose {
                println!("Running script: {}", path.display());
            }
            session.drive(BufReader::new(file), &mut out, false)
        }
        None => session.drive(io::stdin().lock(), &mut out, true),
    };
    outcome.map_err(|e| format!("✗ Session I/O failed: {e}"))
}

/// Roster plus the presentation state of one session
struct Session {
    roster: Roster,
    year: String,
}

impl Session {
    const fn new(roster: Roster, year: String) -> Self {
        Self { roster, year }
    }

    /// Read and execute lines until `quit` or end of input
    fn drive<R: BufRead, W: Write>(&mut self, input: R, out: &mut W, prompt: bool) -> io::Result<()> {
        writeln!(out, "Grade sheet ({}), type 'help' for commands", self.year)?;
        if prompt {
            write!(out, "{}> ", self.year)?;
            out.flush()?;
        }

        for line in input.lines() {
            let line = line?;
            if self.execute(line.trim(), out)? == Flow::Quit {
                break;
            }
            if prompt {
                write!(out, "{}> ", self.year)?;
                out.flush()?;
            }
        }

        if self.roster.has_pending_drafts() {
            warn!("session ended with unsaved field input");
        }
        Ok(())
    }

    fn execute<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<Flow> {
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            return Ok(Flow::Continue);
        };
        if command.starts_with('#') {
            return Ok(Flow::Continue);
        }
        let args: Vec<&str> = words.collect();
        debug!(command, ?args, "session command");

        match command.to_ascii_lowercase().as_str() {
            "add" => {
                let notice = self.roster.add_record();
                writeln!(out, "{notice}")?;
            }
            "set" => self.set(&args, line, out)?,
            "blur" => self.blur(&args, out)?,
            "select" => match args.first().map(|a| parse_row(a)) {
                Some(Ok(index)) => match self.roster.toggle_selection(index) {
                    Ok(true) => writeln!(out, "Row {} selected", index + 1)?,
                    Ok(false) => writeln!(out, "Row {} unselected", index + 1)?,
                    Err(e) => self.report(out, e)?,
                },
                Some(Err(msg)) => writeln!(out, "✗ {msg}")?,
                None => writeln!(out, "✗ usage: select <row>")?,
            },
            "delete" => self.delete(&args, out)?,
            "save" => self.save(out)?,
            "show" => self.show(out)?,
            "summary" => match self.roster.visible_summary() {
                Some(summary) => write_summary(out, &summary)?,
                None => writeln!(out, "Summary is shown after the roster is saved")?,
            },
            "help" => writeln!(out, "{HELP}")?,
            "quit" | "exit" => return Ok(Flow::Quit),
            other => writeln!(out, "✗ unknown command '{other}', type 'help'")?,
        }
        Ok(Flow::Continue)
    }

    fn set<W: Write>(&mut self, args: &[&str], line: &str, out: &mut W) -> io::Result<()> {
        let [row, field, ..] = args else {
            return writeln!(out, "✗ usage: set <row> <field> <value>");
        };
        let index = match parse_row(row) {
            Ok(index) => index,
            Err(msg) => return writeln!(out, "✗ {msg}"),
        };
        let field: Field = match field.parse() {
            Ok(field) => field,
            Err(msg) => return writeln!(out, "✗ {msg}"),
        };

        // The value is the rest of the line, so names may contain spaces
        let value = value_after(line, 3);
        let edit = match Edit::parse(field, value) {
            Ok(edit) => edit,
            Err(msg) => return writeln!(out, "✗ {msg}"),
        };
        if let Err(e) = self.roster.update_field(index, edit) {
            self.report(out, e)?;
        }
        Ok(())
    }

    fn blur<W: Write>(&mut self, args: &[&str], out: &mut W) -> io::Result<()> {
        let [row, field, ..] = args else {
            return writeln!(out, "✗ usage: blur <row> <field>");
        };
        let parsed = parse_row(row).and_then(|i| field.parse::<Field>().map(|f| (i, f)));
        match parsed {
            Ok((index, field)) => {
                if let Err(e) = self.roster.validate_field(index, field) {
                    self.report(out, e)?;
                }
                Ok(())
            }
            Err(msg) => writeln!(out, "✗ {msg}"),
        }
    }

    fn delete<W: Write>(&mut self, args: &[&str], out: &mut W) -> io::Result<()> {
        let result = if args.is_empty() {
            self.roster.remove_selected()
        } else {
            let rows: Result<BTreeSet<usize>, String> = args.iter().map(|a| parse_row(a)).collect();
            match rows {
                Ok(rows) => self.roster.remove_records(&rows),
                Err(msg) => return writeln!(out, "✗ {msg}"),
            }
        };
        match result {
            Ok(notice) => writeln!(out, "{notice}"),
            Err(e) => self.report(out, e),
        }
    }

    fn save<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        for rejected in self.roster.blur_all() {
            self.report(out, rejected)?;
        }
        match self.roster.commit() {
            Ok(notice) => {
                info!(courses = self.roster.len(), "roster saved");
                writeln!(out, "{notice}")
            }
            Err(e) => self.report(out, e),
        }
    }

    fn show<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if self.roster.is_empty() {
            return writeln!(out, "(no courses)");
        }
        let selected = self.roster.selected_indices();
        let scale = self.roster.scale();

        writeln!(
            out,
            "{:>3}  {:<8} {:<9} {:<20} {:>3} {:>4} {:>4} {:>4} {:>4} {:>5}  Grade",
            "#", "Category", "Type", "Name", "Cr", "Att", "Asg", "Mid", "Fin", "Total"
        )?;
        for (index, record) in self.roster.records().enumerate() {
            let cell = |field: Field| {
                self.roster.draft(index, field).map_or_else(
                    || record.numeric(field).unwrap_or_default().to_string(),
                    |raw| format!("{raw}*"),
                )
            };
            let mark = if selected.contains(&index) { 'x' } else { ' ' };
            writeln!(
                out,
                "{:>3}{mark} {:<8} {:<9} {:<20} {:>3} {:>4} {:>4} {:>4} {:>4} {:>5}  {}",
                index + 1,
                record.category.to_string(),
                record.requirement.to_string(),
                record.display_name(),
                cell(Field::Credits),
                cell(Field::Attendance),
                cell(Field::Assignment),
                cell(Field::Midterm),
                cell(Field::Final),
                record.total_score(),
                record.outcome(scale),
            )?;
        }
        if self.roster.has_pending_drafts() {
            writeln!(out, "  * unvalidated input")?;
        }
        if let Some(summary) = self.roster.visible_summary() {
            write_summary(out, &summary)?;
        }
        Ok(())
    }

    fn report<W: Write>(&self, out: &mut W, error: RosterError) -> io::Result<()> {
        warn!(%error, "action rejected");
        writeln!(out, "{}", Notice::from(error))
    }
}

fn write_summary<W: Write>(out: &mut W, summary: &Summary) -> io::Result<()> {
    writeln!(
        out,
        "Total: {} courses, {} credits, scores {}/{}/{}/{}, total {}, average {}, grade {}",
        summary.count,
        summary.credits,
        summary.attendance,
        summary.assignment,
        summary.midterm,
        summary.final_exam,
        summary.total_score,
        summary.average_label(),
        summary.overall_grade_label(),
    )
}

/// Convert a 1-based row argument into an engine index
fn parse_row(arg: &str) -> Result<usize, String> {
    match arg.parse::<usize>() {
        Ok(row) if row >= 1 => Ok(row - 1),
        _ => Err(format!("'{arg}' is not a row number")),
    }
}

/// Text of `line` after its first `skip` words, with leading spaces removed
fn value_after(line: &str, skip: usize) -> &str {
    let mut rest = line.trim_start();
    for _ in 0..skip {
        let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        rest = rest[end..].trim_start();
    }
    rest
}

#[cfg(test)]
mod tests {
    use super::*;
    use gradesheet::core::GradingScale;

    fn run_script(script: &str) -> (Session, String) {
        let mut session = Session::new(Roster::new(GradingScale::Standard), "1st year".to_string());
        let mut out = Vec::new();
        session.drive(script.as_bytes(), &mut out, false).unwrap();
        (session, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_value_after_keeps_spaces_in_names() {
        assert_eq!(value_after("set 1 name Linear Algebra", 3), "Linear Algebra");
        assert_eq!(value_after("  set  2 midterm   25", 3), "25");
        assert_eq!(value_after("set 1 name", 3), "");
    }

    #[test]
    fn test_parse_row_is_one_based() {
        assert_eq!(parse_row("1"), Ok(0));
        assert!(parse_row("0").is_err());
        assert!(parse_row("x").is_err());
    }

    #[test]
    fn test_add_set_save() {
        let (session, out) = run_script(
            "add\nset 1 name Algebra\nset 1 attendance 20\nset 1 assignment 20\nset 1 midterm 20\nsave\nsummary\n",
        );
        assert!(out.contains("✓ Added row 1"));
        assert!(out.contains("✓ Saved: Algebra"));
        assert!(out.contains("average 60.00"));
        assert_eq!(session.roster.record(0).unwrap().total_score(), 60);
    }

    #[test]
    fn test_blur_reports_range() {
        let (session, out) = run_script("add\nset 1 midterm 35\nblur 1 midterm\n");
        assert!(out.contains("between 0 and 30"));
        assert_eq!(session.roster.record(0).unwrap().midterm, 0);
    }

    #[test]
    fn test_empty_delete_is_reported() {
        let (_, out) = run_script("add\ndelete\n");
        assert!(out.contains("select the courses to delete first"));
    }

    #[test]
    fn test_select_then_delete() {
        let (session, out) = run_script("add\nadd\nset 2 name Physics\nselect 2\ndelete\n");
        assert!(out.contains("Row 2 selected"));
        assert!(out.contains("✓ Deleted: Physics"));
        assert_eq!(session.roster.len(), 1);
    }

    #[test]
    fn test_quit_stops_reading() {
        let (session, _) = run_script("add\nquit\nadd\n");
        assert_eq!(session.roster.len(), 1);
    }

    #[test]
    fn test_show_marks_drafts() {
        let (_, out) = run_script("add\nset 1 final 12\nshow\n");
        assert!(out.contains("12*"));
        assert!(out.contains("unvalidated input"));
    }
}
