//! Line-oriented editing session.
//!
//! One verb per line. Edits stage into pending; `save` commits a section;
//! `list` shows what the committed filters select. `clear-all` asks for
//! confirmation on the next input line.

use super::render::{render_messages, render_results, render_status};
use std::io::{self, BufRead, Write};
use talentscout::api::{CmdResult, ConfigAction, EditOp, ScoutApi};
use talentscout::error::{Result, ScoutError};
use talentscout::filter::{value::parse_number, ConfirmPort, Dimension, DimensionValue, Section};

const HELP: &str = "\
Edits (staged until saved):
  set <dimension> <value>      replace the value (labels: a, b  ranges: 0..500k)
  add <dimension> <label>      select a label
  remove <dimension> <label>   deselect a label
  toggle <dimension> <label>   flip a label
  min <dimension> <n>          move the lower bound
  max <dimension> <n>          move the upper bound
Sections (a dimension name selects its section):
  save [section]               commit one section, or every changed one
  discard [section]            drop unsaved edits
  clear <section>              reset a section to its defaults immediately
  clear-all                    reset everything (asks first)
  open <section>               open or close a section
View:
  status                       committed and pending values
  list [page]                  matching creators
  next                         next page
  config [key] [value]         show or change configuration
  help, quit";

enum Step {
    Continue,
    Quit,
}

/// Reads the answer to a confirmation from the shell's own input.
struct LineConfirm<'a, I, W> {
    lines: &'a mut I,
    out: &'a mut W,
    echo_newline: bool,
}

impl<I, W> ConfirmPort for LineConfirm<'_, I, W>
where
    I: Iterator<Item = io::Result<String>>,
    W: Write,
{
    fn confirm(&mut self, message: &str) -> bool {
        let _ = write!(self.out, "{} [y/N] ", message);
        let _ = self.out.flush();
        let answer = match self.lines.next() {
            Some(Ok(line)) => line,
            _ => String::new(),
        };
        if self.echo_newline {
            let _ = writeln!(self.out);
        }
        matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
    }
}

/// Run the session until `quit` or end of input.
pub fn run<R: BufRead, W: Write>(
    api: &mut ScoutApi,
    input: R,
    out: &mut W,
    interactive: bool,
) -> Result<()> {
    let mut lines = input.lines();
    loop {
        if interactive {
            write!(out, "> ")?;
            out.flush()?;
        }
        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };
        tracing::trace!(verb, "shell command");

        let outcome = if verb == "clear-all" {
            let mut port = LineConfirm {
                lines: &mut lines,
                out: &mut *out,
                echo_newline: !interactive,
            };
            api.clear_all(&mut port).map(|r| (Step::Continue, render_messages(&r.messages)))
        } else {
            dispatch(api, verb, rest)
        };

        match outcome {
            Ok((step, text)) => {
                out.write_all(text.as_bytes())?;
                if let Step::Quit = step {
                    break;
                }
            }
            Err(e) => writeln!(out, "Error: {}", e)?,
        }
    }
    out.flush()?;
    Ok(())
}

fn dispatch(api: &mut ScoutApi, verb: &str, rest: &str) -> Result<(Step, String)> {
    let result = match verb {
        "set" => {
            let (dimension, value) = dimension_and_arg(verb, rest)?;
            let value = DimensionValue::parse(dimension, value)?;
            api.edit(dimension, EditOp::Set(value))?
        }
        "add" | "remove" | "toggle" => {
            let (dimension, label) = dimension_and_arg(verb, rest)?;
            let label = label.to_string();
            let op = match verb {
                "add" => EditOp::Add(label),
                "remove" => EditOp::Remove(label),
                _ => EditOp::Toggle(label),
            };
            api.edit(dimension, op)?
        }
        "min" | "max" => {
            let (dimension, n) = dimension_and_arg(verb, rest)?;
            let n = parse_number(n)?;
            let op = if verb == "min" {
                EditOp::Min(n)
            } else {
                EditOp::Max(n)
            };
            api.edit(dimension, op)?
        }
        "save" => match optional_section(rest)? {
            Some(section) => api.save_section(section)?,
            None => api.save_all()?,
        },
        "discard" => api.discard(optional_section(rest)?)?,
        "clear" => {
            let section = optional_section(rest)?
                .ok_or_else(|| usage("clear <section>"))?;
            api.clear_section(section)?
        }
        "open" => {
            let section = optional_section(rest)?.ok_or_else(|| usage("open <section>"))?;
            api.toggle_section(section)?
        }
        "status" => {
            let result = api.status()?;
            let mut text = render_status(&result.status, &result.open_sections);
            text.push_str(&render_messages(&result.messages));
            return Ok((Step::Continue, text));
        }
        "list" => {
            let page = if rest.is_empty() {
                None
            } else {
                let n: usize = rest
                    .parse()
                    .map_err(|_| ScoutError::Parse(format!("invalid page: {}", rest)))?;
                Some(n.saturating_sub(1))
            };
            return Ok((Step::Continue, listing(api.list(page)?)));
        }
        "next" => return Ok((Step::Continue, listing(api.next_page()?))),
        "config" => {
            let mut parts = rest.splitn(2, char::is_whitespace);
            let key = parts.next().filter(|k| !k.is_empty()).map(str::to_string);
            let value = parts.next().map(|v| v.trim().to_string());
            let action = match (key, value) {
                (None, _) => ConfigAction::ShowAll,
                (Some(k), None) => ConfigAction::ShowKey(k),
                (Some(k), Some(v)) => ConfigAction::Set(k, v),
            };
            let result = api.config(action)?;
            let mut text = String::new();
            if let Some(config) = &result.config {
                if result.messages.is_empty() {
                    for (k, v) in config.list_all() {
                        text.push_str(&format!("{} = {}\n", k, v));
                    }
                }
            }
            text.push_str(&render_messages(&result.messages));
            return Ok((Step::Continue, text));
        }
        "help" => return Ok((Step::Continue, format!("{}\n", HELP))),
        "quit" | "exit" => return Ok((Step::Quit, String::new())),
        other => {
            return Err(ScoutError::Parse(format!(
                "unknown command '{}', try 'help'",
                other
            )))
        }
    };
    Ok((Step::Continue, render_messages(&result.messages)))
}

fn listing(result: CmdResult) -> String {
    let mut text = render_results(&result);
    text.push_str(&render_messages(&result.messages));
    text
}

fn usage(form: &str) -> ScoutError {
    ScoutError::Parse(format!("usage: {}", form))
}

fn dimension_and_arg<'a>(verb: &str, rest: &'a str) -> Result<(Dimension, &'a str)> {
    let (name, arg) = match rest.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None if verb == "set" && !rest.is_empty() => (rest, ""),
        None => return Err(usage(&format!("{} <dimension> <value>", verb))),
    };
    Ok((name.parse()?, arg))
}

fn optional_section(rest: &str) -> Result<Option<Section>> {
    if rest.is_empty() {
        return Ok(None);
    }
    rest.parse().map(Some)
}
