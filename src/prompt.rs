//! Line-based input prompting
//!
//! Every prompt loops until it gets valid input. End of input (or a broken
//! input stream) is reported as `Aborted`, which the caller treats as a
//! request to quit.

use std::io::{BufRead, Write};

/// The player closed input; the game should exit
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("input aborted")]
pub struct Aborted;

/// Prompts over any line reader and writer
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Output sink for non-prompt text
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Write a line of text. Output errors are ignored.
    pub fn say(&mut self, text: impl std::fmt::Display) {
        let _ = writeln!(self.output, "{text}");
    }

    fn read_line(&mut self, prompt: &str) -> Result<String, Aborted> {
        let _ = write!(self.output, "{prompt}");
        let _ = self.output.flush();

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => Err(Aborted),
            Ok(_) => Ok(line.trim().to_string()),
            Err(e) => {
                log::debug!("Input read failed: {}", e);
                Err(Aborted)
            }
        }
    }

    /// Ask for one of `options` (case-insensitive). Returns the option as given.
    pub fn choice<'a>(&mut self, prompt: &str, options: &[&'a str]) -> Result<&'a str, Aborted> {
        loop {
            let answer = self.read_line(prompt)?.to_uppercase();
            if let Some(option) = options.iter().find(|o| o.to_uppercase() == answer) {
                return Ok(*option);
            }
            self.say(format!("Invalid choice. Pick one of: {}", options.join(", ")));
        }
    }

    /// Ask for an integer in `min..=max`
    pub fn integer(&mut self, prompt: &str, min: u32, max: u32) -> Result<u32, Aborted> {
        loop {
            let raw = self.read_line(prompt)?;
            let Ok(value) = raw.parse::<i64>() else {
                self.say("Please enter a valid integer.");
                continue;
            };
            if value < i64::from(min) || value > i64::from(max) {
                self.say(format!("Value must be between {min} and {max}."));
                continue;
            }
            return Ok(value as u32);
        }
    }

    /// Wait for Enter
    pub fn pause(&mut self, prompt: &str) -> Result<(), Aborted> {
        self.read_line(prompt).map(|_| ())
    }
}
