// Top-level commands and the aliases that select them.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Exit,
    Save,
    Load,
    Read,
    Add,
    Update,
    Find,
}

/// `у` and `й` are what `e` and `q` produce on a Russian keyboard layout.
const EXIT_ALIASES: &[&str] = &["exit", "e", "quit", "esc", "q", "у", "й"];

const COMMANDS: &[(&str, Command)] = &[
    ("save", Command::Save),
    ("load", Command::Load),
    ("read", Command::Read),
    ("add", Command::Add),
    ("update", Command::Update),
    ("find", Command::Find),
];

/// Whether `input` is one of the exit aliases.
pub fn is_exit_alias(input: &str) -> bool {
    EXIT_ALIASES.contains(&input.trim().to_lowercase().as_str())
}

impl Command {
    /// Look up a command typed at the main prompt.
    pub fn parse(input: &str) -> Option<Command> {
        if is_exit_alias(input) {
            return Some(Command::Exit);
        }
        let input = input.trim().to_lowercase();
        COMMANDS
            .iter()
            .find(|(name, _)| *name == input)
            .map(|(_, command)| *command)
    }

    pub fn name(self) -> &'static str {
        match self {
            Command::Exit => "exit",
            Command::Save => "save",
            Command::Load => "load",
            Command::Read => "read",
            Command::Add => "add",
            Command::Update => "update",
            Command::Find => "find",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Menu shown above the command prompt.
pub const MENU: &str = "Welcome to the phone book!\n\
Available commands:\n\
1. exit|e|esc|q|quit - leave the program\n\
2. save - save the current phone book\n\
3. load - load a saved phone book\n\
4. read - browse the phone book\n\
5. add - add a contact (personal phone is required)\n\
6. update - change a field of an existing contact\n\
7. find - search contacts\n";
