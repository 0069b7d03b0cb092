//! Session commands: one line of text per command.
//!
//! ```text
//! day friday
//! add dinner "Fish tacos" "cod, tortillas, lime" --category Dinner
//! generate
//! ```
//!
//! Lines are split into words with shell quoting rules: quotes group words,
//! backslash escapes and a word starting with `#` begins a comment.

use std::io::{BufRead, Write};

use clap::{CommandFactory, Parser, Subcommand};
use mealweek_mealplan::{MealInput, parse_ingredients};
use mealweek_shared::{Category, Day, Slot};

use crate::{error::AppError, render::Renderer, session::Session};

#[derive(Parser, Debug)]
#[command(
    name = "mealweek",
    no_binary_name = true,
    disable_help_flag = true,
    disable_help_subcommand = true,
    disable_version_flag = true
)]
struct Line {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Switch to another day
    Day {
        #[arg(value_parser = Day::parse)]
        day: Day,
    },
    /// Add a meal, replacing whatever is in the slot
    Add {
        #[arg(value_parser = Slot::parse)]
        slot: Slot,
        /// Meal name
        name: String,
        /// Comma separated ingredients
        ingredients: String,
        #[arg(long, value_parser = parse_category, default_value_t = Category::Breakfast)]
        category: Category,
        /// Day to add to instead of the current one
        #[arg(long, value_parser = Day::parse)]
        day: Option<Day>,
    },
    /// Print the command that recreates a meal
    Edit {
        #[arg(value_parser = Slot::parse)]
        slot: Slot,
    },
    /// Remove the meal from a slot
    Delete {
        #[arg(value_parser = Slot::parse)]
        slot: Slot,
    },
    /// Remove every meal of the current day
    ClearDay,
    /// Show the current day
    Show,
    /// Show the whole week
    Week,
    /// Build the grocery list from the week and show it
    Generate {
        /// Print the list as a JSON array
        #[arg(long)]
        json: bool,
    },
    /// Show the grocery list last generated
    List {
        /// Print the list as a JSON array (`null` when there is none)
        #[arg(long)]
        json: bool,
    },
    /// Discard the generated grocery list
    ClearList,
    /// Show this help
    Help,
    /// End the session
    #[command(alias = "exit")]
    Quit,
}

fn parse_category(value: &str) -> Result<Category, String> {
    value
        .trim()
        .parse()
        .map_err(|_| format!("'{value}' is not a meal category"))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Parses one line; blank lines and comments yield `None`.
pub fn parse_line(line: &str) -> Result<Option<Command>, AppError> {
    let words = split_words(line)?;
    if words.is_empty() {
        return Ok(None);
    }

    Ok(Some(Line::try_parse_from(words)?.command))
}

fn split_words(line: &str) -> Result<Vec<String>, AppError> {
    shell_words::split(line).map_err(|err| AppError::Command(err.to_string()))
}

pub fn help() -> String {
    Line::command().render_help().to_string()
}

/// Runs one command against the session, writing its output to `out`.
pub fn execute(
    session: &mut Session,
    renderer: &Renderer<'_>,
    command: Command,
    out: &mut impl Write,
) -> Result<Flow, AppError> {
    match command {
        Command::Day { day } => {
            session.select_day(day);
            write!(out, "{}", renderer.day(session.plan(), day))?;
        }
        Command::Add {
            slot,
            name,
            ingredients,
            category,
            day,
        } => {
            let day = day.unwrap_or(session.current_day());
            let input = MealInput::new(name, category, parse_ingredients(&ingredients));
            session.add_meal_to(day, slot, input)?;
            write!(out, "{}", renderer.day(session.plan(), day))?;
        }
        Command::Edit { slot } => {
            writeln!(out, "{}", session.edit_meal(slot)?.to_command_line())?;
        }
        Command::Delete { slot } => {
            session.delete_meal(slot);
            write!(out, "{}", renderer.day(session.plan(), session.current_day()))?;
        }
        Command::ClearDay => {
            session.clear_day();
            write!(out, "{}", renderer.day(session.plan(), session.current_day()))?;
        }
        Command::Show => {
            write!(out, "{}", renderer.day(session.plan(), session.current_day()))?;
        }
        Command::Week => {
            write!(out, "{}", renderer.week(session.plan()))?;
        }
        Command::Generate { json } => {
            let list = session.generate_list();
            if json {
                writeln!(out, "{}", serde_json::to_string(list)?)?;
            } else {
                write!(out, "{}", renderer.grocery_list(list))?;
            }
        }
        Command::List { json: true } => {
            writeln!(out, "{}", serde_json::to_string(&session.grocery_list())?)?;
        }
        Command::List { json: false } => {
            if let Some(list) = session.grocery_list() {
                write!(out, "{}", renderer.grocery_list(list))?;
            }
        }
        Command::ClearList => {
            session.clear_list();
        }
        Command::Help => {
            write!(out, "{}", help())?;
        }
        Command::Quit => return Ok(Flow::Quit),
    }

    Ok(Flow::Continue)
}

/// Runs every command read from `input`, stopping at the first error or at
/// `quit`. Errors carry the 1-based line number.
pub fn run_script(
    session: &mut Session,
    renderer: &Renderer<'_>,
    input: impl BufRead,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    for (number, line) in input.lines().enumerate() {
        let line = line?;
        let Some(command) = parse_line(&line)
            .map_err(|err| anyhow::anyhow!("line {}: {err}", number + 1))?
        else {
            continue;
        };

        tracing::debug!(line = number + 1, ?command, "running command");

        let flow = execute(session, renderer, command, out)
            .map_err(|err| anyhow::anyhow!("line {}: {err}", number + 1))?;
        if flow == Flow::Quit {
            break;
        }
    }

    Ok(())
}

/// Reads commands from `input` until end of input or `quit`, writing a
/// prompt before each line. Recoverable errors are written to `out` and the
/// next line is read; anything else ends the loop.
pub fn run_interactive(
    session: &mut Session,
    renderer: &Renderer<'_>,
    input: impl BufRead,
    out: &mut impl Write,
) -> Result<(), AppError> {
    let mut lines = input.lines();
    loop {
        write!(out, "{}> ", session.current_day())?;
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            return Ok(());
        };
        let line = line?;

        let result = parse_line(&line).and_then(|parsed| match parsed {
            Some(command) => execute(session, renderer, command, out),
            None => Ok(Flow::Continue),
        });

        match result {
            Ok(Flow::Quit) => return Ok(()),
            Ok(Flow::Continue) => {}
            Err(err) if err.is_recoverable() => {
                tracing::debug!(error = %err, "command failed");
                writeln!(out, "{err}")?;
            }
            Err(err) => return Err(err),
        }
    }
}
