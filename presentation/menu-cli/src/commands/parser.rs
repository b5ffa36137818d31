use clap::{Parser, Subcommand};
use uuid::Uuid;

use business::domain::menu::value_objects::Course;

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum TokenizeError {
    #[error("Unterminated quote in input")]
    UnterminatedQuote,
}

/// Splits a prompt line on whitespace. Double quotes group words into one
/// argument; `""` is an empty argument.
pub fn tokenize(line: &str) -> Result<Vec<String>, TokenizeError> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quoted = false;

    for c in line.chars() {
        match c {
            '"' => {
                quoted = !quoted;
                in_token = true;
            }
            c if c.is_whitespace() && !quoted => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            c => {
                current.push(c);
                in_token = true;
            }
        }
    }

    if quoted {
        return Err(TokenizeError::UnterminatedQuote);
    }
    if in_token {
        tokens.push(current);
    }
    Ok(tokens)
}

/// One line typed at the prompt; the first word picks the command.
#[derive(Debug, Parser)]
#[command(multicall = true)]
pub struct ReplLine {
    #[command(subcommand)]
    pub command: ReplCommand,
}

#[derive(Debug, PartialEq, Subcommand)]
pub enum ReplCommand {
    /// Show the menu, optionally for a single course
    List {
        #[arg(long)]
        course: Option<Course>,
        /// Print the items as JSON
        #[arg(long)]
        json: bool,
    },
    /// Add a dish: add <name> <price> <course> [add-on]
    Add {
        name: Option<String>,
        #[arg(allow_hyphen_values = true)]
        price: Option<String>,
        course: Option<Course>,
        add_on: Option<String>,
    },
    /// Fill in and submit the dish form one field at a time
    Form {
        #[command(subcommand)]
        action: FormAction,
    },
    /// Copy a dish under a new id
    Duplicate { id: Uuid },
    /// Remove a dish by id
    Remove { id: Uuid },
    /// Remove the most recently added dish
    Undo,
    /// Register an add-on option
    Addon { name: String },
    /// List the add-on options
    Addons,
    /// Average price per course
    Averages,
    /// Leave the menu editor
    #[command(alias = "exit")]
    Quit,
}

#[derive(Debug, PartialEq, Subcommand)]
pub enum FormAction {
    /// Set the dish name
    Name { value: String },
    /// Set the price, with or without the R prefix
    Price {
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Set the course: starter, main, dessert or beverage
    Course { value: Course },
    /// Set the add-on text
    AddOn { value: String },
    /// Show the pending form
    Show,
    /// Add the dish from the pending form
    Submit,
    /// Reset every field
    Clear,
}

pub fn parse_line(tokens: Vec<String>) -> Result<ReplCommand, clap::Error> {
    ReplLine::try_parse_from(tokens).map(|line| line.command)
}
