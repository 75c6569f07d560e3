// Terminal access used by the command loop.
//
// `TerminalConsole` talks to a real terminal with `dialoguer` prompts and
// `crossterm` screen clearing. When stdin is piped it falls back to plain
// line reads so sessions can be scripted. `ScriptedConsole` replays canned
// input and keeps everything printed, which is what the tests drive.

use crate::error::{BookError, BookResult};
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use dialoguer::Input;
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::VecDeque;
use std::io::{self, BufRead, IsTerminal, Write};
use std::thread;
use std::time::Duration;

/// Everything the command loop needs from the user's terminal.
pub trait Console {
    /// Ask for one line of text. Empty answers are allowed.
    fn read_line(&mut self, prompt: &str) -> BookResult<String>;

    fn print(&mut self, text: &str) -> BookResult<()>;

    /// Wipe the screen before redrawing.
    fn clear(&mut self) -> BookResult<()>;

    /// Show a message and hold it on screen for a moment.
    fn pause(&mut self, message: &str) -> BookResult<()>;

    /// Yes/no question; anything but an explicit "no" counts as yes.
    fn confirm(&mut self, prompt: &str) -> BookResult<bool> {
        let answer = self.read_line(&format!("{prompt} [Y/n]"))?;
        Ok(!matches!(
            answer.trim().to_lowercase().as_str(),
            "n" | "no" | "н" | "нет"
        ))
    }
}

/// Console bound to the process's stdin/stdout.
pub struct TerminalConsole {
    pause: Duration,
    interactive: bool,
}

impl TerminalConsole {
    pub fn new(pause: Duration) -> Self {
        TerminalConsole {
            pause,
            interactive: io::stdin().is_terminal(),
        }
    }
}

impl Console for TerminalConsole {
    fn read_line(&mut self, prompt: &str) -> BookResult<String> {
        if self.interactive {
            // `interact_text` renders the prompt and lets the user edit the line.
            let line: String = Input::new()
                .with_prompt(prompt)
                .allow_empty(true)
                .interact_text()?;
            return Ok(line);
        }

        print!("{prompt}: ");
        io::stdout().flush()?;
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Err(BookError::InputClosed);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn print(&mut self, text: &str) -> BookResult<()> {
        println!("{text}");
        Ok(())
    }

    fn clear(&mut self) -> BookResult<()> {
        if io::stdout().is_terminal() {
            execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0))?;
        }
        Ok(())
    }

    fn pause(&mut self, message: &str) -> BookResult<()> {
        if !io::stderr().is_terminal() {
            println!("{message}");
            thread::sleep(self.pause);
            return Ok(());
        }

        // A spinner keeps the message visible until the menu is redrawn.
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
            spinner.set_style(style);
        }
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(Duration::from_millis(80));
        thread::sleep(self.pause);
        spinner.finish();
        Ok(())
    }
}

/// Console fed from a list of answers. Printed text and pause messages are
/// collected in `output`; running out of answers behaves like a closed stdin.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    input: VecDeque<String>,
    pub output: Vec<String>,
    pub clears: usize,
}

impl ScriptedConsole {
    pub fn new<I, S>(input: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScriptedConsole {
            input: input.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// All printed text joined with newlines.
    pub fn transcript(&self) -> String {
        self.output.join("\n")
    }

    /// Answers that were never asked for.
    pub fn remaining(&self) -> usize {
        self.input.len()
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> BookResult<String> {
        let line = self.input.pop_front().ok_or(BookError::InputClosed)?;
        self.output.push(format!("{prompt}: {line}"));
        Ok(line)
    }

    fn print(&mut self, text: &str) -> BookResult<()> {
        self.output.push(text.to_string());
        Ok(())
    }

    fn clear(&mut self) -> BookResult<()> {
        self.clears += 1;
        Ok(())
    }

    fn pause(&mut self, message: &str) -> BookResult<()> {
        self.output.push(message.to_string());
        Ok(())
    }
}
