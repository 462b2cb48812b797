//! Prompts that keep asking until the answer is usable.
//!
//! Each prompt writes to the output sink, reads one line from the input and
//! either returns a valid value or prints a complaint and asks again. The
//! only errors that come back are end of input and console failures.

use std::io::{BufRead, Write};

use regex::Regex;

use crate::error::ListError;

pub struct SafeInput<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> SafeInput<R, W> {
    pub fn new(input: R, output: W) -> SafeInput<R, W> {
        SafeInput { input, output }
    }

    /// The sink prompts are written to, for everything else the menu prints.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    fn ask(&mut self, prompt: &str) -> Result<String, ListError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Err(ListError::EndOfInput);
        }
        Ok(line.trim().to_string())
    }

    fn complain(&mut self, message: &str) -> Result<(), ListError> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    /// A trimmed line with at least one character in it.
    pub fn non_empty_string(&mut self, prompt: &str) -> Result<String, ListError> {
        loop {
            let answer = self.ask(&format!("{}: ", prompt))?;
            if !answer.is_empty() {
                return Ok(answer);
            }
            self.complain("Input cannot be empty. Please try again.")?;
        }
    }

    /// An integer in `low..=high`. Callers make sure `low <= high`.
    pub fn ranged_int(&mut self, prompt: &str, low: usize, high: usize) -> Result<usize, ListError> {
        loop {
            let answer = self.ask(&format!("{} [{} - {}]: ", prompt, low, high))?;
            match answer.parse::<i64>() {
                Ok(n) if n >= low as i64 && n <= high as i64 => return Ok(n as usize),
                Ok(_) => self.complain(&format!("Number must be between {} and {}.", low, high))?,
                Err(_) => self.complain("Invalid input. Please enter a number.")?,
            }
        }
    }

    pub fn yes_no(&mut self, prompt: &str) -> Result<bool, ListError> {
        loop {
            let answer = self.ask(&format!("{} [Y/N]: ", prompt))?.to_uppercase();
            match answer.as_str() {
                "Y" | "YES" => return Ok(true),
                "N" | "NO" => return Ok(false),
                _ => self.complain("Please enter Y or N.")?,
            }
        }
    }

    /// A trimmed line that `pattern` matches in full.
    pub fn matching_string(&mut self, prompt: &str, pattern: &str) -> Result<String, ListError> {
        let full = Regex::new(&format!("^(?:{})$", pattern))?;
        loop {
            let answer = self.ask(&format!("{}: ", prompt))?;
            if full.is_match(&answer) {
                return Ok(answer);
            }
            self.complain(&format!("Input must match pattern: {}", pattern))?;
        }
    }
}
