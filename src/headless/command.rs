//! Line commands accepted on stdin in headless mode

use todo_core::prelude::*;
use todo_core::TodoId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Add(String),
    Toggle(TodoId),
    Edit(TodoId),
    /// Set the open edit form's name and submit it
    Rename(String),
    Close,
    Quit,
}

/// Parse one input line: a command word, then an optional argument.
pub fn parse_command(line: &str) -> Result<Command> {
    let line = line.trim();
    let (word, arg) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    match word {
        "list" => no_arg(word, arg, Command::List),
        "close" => no_arg(word, arg, Command::Close),
        "quit" => no_arg(word, arg, Command::Quit),
        "add" => Ok(Command::Add(name_arg(word, arg)?)),
        "rename" => Ok(Command::Rename(name_arg(word, arg)?)),
        "toggle" => Ok(Command::Toggle(id_arg(word, arg)?)),
        "edit" => Ok(Command::Edit(id_arg(word, arg)?)),
        "" => Err(Error::command("empty command")),
        other => Err(Error::command(format!("unknown command: {other}"))),
    }
}

fn no_arg(word: &str, arg: &str, command: Command) -> Result<Command> {
    if arg.is_empty() {
        Ok(command)
    } else {
        Err(Error::command(format!("{word} takes no argument")))
    }
}

fn name_arg(word: &str, arg: &str) -> Result<String> {
    if arg.is_empty() {
        Err(Error::command(format!("{word} requires a name")))
    } else {
        Ok(arg.to_string())
    }
}

fn id_arg(word: &str, arg: &str) -> Result<TodoId> {
    arg.parse()
        .map_err(|_| Error::command(format!("{word} requires a numeric id, got {arg:?}")))
}
