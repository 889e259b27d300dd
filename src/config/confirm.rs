use std::io::{self, BufRead, BufReader, Stdin, Stderr, Write};

use log::warn;

/// A blocking yes/no question
pub trait Confirm {
    fn confirm(&mut self, question: &str) -> bool;
}

/// Ask on a terminal-like pair of streams
///
/// Only `y` or `yes` (any case) counts as agreement. An empty line, EOF or a read error are all
/// treated as "no".
pub struct PromptConfirm<R, W> {
    input: R,
    output: W,
}

impl PromptConfirm<BufReader<Stdin>, Stderr> {
    pub fn stdio() -> Self {
        PromptConfirm::new(BufReader::new(io::stdin()), io::stderr())
    }
}

impl<R: BufRead, W: Write> PromptConfirm<R, W> {
    pub fn new(input: R, output: W) -> Self {
        PromptConfirm { input, output }
    }
}

impl<R: BufRead, W: Write> Confirm for PromptConfirm<R, W> {
    fn confirm(&mut self, question: &str) -> bool {
        if write!(self.output, "{question} [y/N]: ").and_then(|_| self.output.flush()).is_err() {
            warn!("Can't write confirmation prompt");
            return false;
        }

        let mut response = String::new();
        match self.input.read_line(&mut response) {
            Ok(_) => matches!(response.trim().to_lowercase().as_str(), "y" | "yes"),
            Err(err) => {
                warn!("Can't read confirmation answer: {err}");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn ask(input: &str) -> (bool, String) {
        let mut output: Vec<u8> = Vec::new();
        let answer = PromptConfirm::new(Cursor::new(input.as_bytes()), &mut output).confirm("Continue anyway?");
        (answer, String::from_utf8(output).unwrap())
    }

    #[test]
    fn yes_answers() {
        assert!(ask("y\n").0);
        assert!(ask("  YES \n").0);
        assert!(ask("Yes").0);
    }

    #[test]
    fn everything_else_is_no() {
        assert!(!ask("\n").0);
        assert!(!ask("n\n").0);
        assert!(!ask("yeah\n").0);
        assert!(!ask("").0);
    }

    #[test]
    fn prompt_is_written() {
        assert_eq!(ask("n\n").1, "Continue anyway? [y/N]: ");
    }
}
