//! Tokenizer for the compact path grammar
//!
//! Walks the input once, turning command letters and numeric runs into
//! [`PathCommand`] records.

use tracing::warn;

use crate::error::PathError;
use crate::path::{CommandKind, ParseMode, PathCommand};

/// Parse path data into a list of commands
pub(crate) fn parse(input: &str, mode: ParseMode) -> Result<Vec<PathCommand>, PathError> {
    let mut parser = Parser::new(input, mode);
    parser.parse()?;
    Ok(parser.commands)
}

struct Parser<'a> {
    input: &'a str,
    pos: usize,
    mode: ParseMode,
    commands: Vec<PathCommand>,
    current: Option<PathCommand>,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str, mode: ParseMode) -> Self {
        Self {
            input,
            pos: 0,
            mode,
            commands: Vec::new(),
            current: None,
        }
    }

    fn parse(&mut self) -> Result<(), PathError> {
        while let Some(ch) = self.peek() {
            if is_separator(ch) {
                self.next_char();
                continue;
            }

            if ch.is_ascii_alphabetic() {
                self.command_letter(ch)?;
                continue;
            }

            if starts_number(ch) {
                self.number(ch)?;
                continue;
            }

            self.junk(ch)?;
        }

        self.finish_command();
        Ok(())
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn next_char(&mut self) -> Option<char> {
        let ch = self.input[self.pos..].chars().next()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    fn finish_command(&mut self) {
        if let Some(command) = self.current.take() {
            self.commands.push(command);
        }
    }

    fn command_letter(&mut self, letter: char) -> Result<(), PathError> {
        let offset = self.pos;
        self.next_char();

        match CommandKind::from_letter(letter) {
            Some((kind, relative)) => {
                self.finish_command();
                self.current = Some(PathCommand::new(kind, relative, []));
                Ok(())
            }
            None => match self.mode {
                ParseMode::Strict => Err(PathError::UnknownCommand { letter, offset }),
                // Arguments after the dropped letter keep accruing to the
                // command that was open before it.
                ParseMode::Lenient => {
                    warn!(%letter, offset, "dropping unrecognized path command");
                    Ok(())
                }
            },
        }
    }

    fn number(&mut self, first: char) -> Result<(), PathError> {
        let offset = self.pos;

        let Some(value) = self.scan_number() else {
            // Lone sign or dot
            return self.junk(first);
        };

        if !value.is_finite() {
            return match self.mode {
                ParseMode::Strict => Err(PathError::NumberOutOfRange { offset }),
                ParseMode::Lenient => {
                    warn!(offset, "dropping out-of-range number");
                    Ok(())
                }
            };
        }

        match (self.current.as_mut(), self.mode) {
            (Some(command), _) => {
                command.args.push(value);
                Ok(())
            }
            (None, ParseMode::Strict) => Err(PathError::MissingCommand { offset }),
            (None, ParseMode::Lenient) => {
                warn!(offset, value, "dropping argument with no command");
                Ok(())
            }
        }
    }

    fn junk(&mut self, found: char) -> Result<(), PathError> {
        match self.mode {
            ParseMode::Strict => Err(PathError::Malformed {
                offset: self.pos,
                found,
            }),
            ParseMode::Lenient => {
                self.next_char();
                Ok(())
            }
        }
    }

    /// Scan `[sign] digits [. digits] [e [sign] digits]` starting at the
    /// cursor. Leaves the cursor untouched when no digits are found.
    fn scan_number(&mut self) -> Option<f64> {
        let bytes = self.input.as_bytes();
        let start = self.pos;
        let mut end = start;

        if matches!(bytes.get(end), Some(b'+' | b'-')) {
            end += 1;
        }

        let int_start = end;
        end = skip_digits(bytes, end);
        let mut digits = end - int_start;

        if bytes.get(end) == Some(&b'.') {
            let frac_end = skip_digits(bytes, end + 1);
            let frac_digits = frac_end - (end + 1);
            if digits > 0 || frac_digits > 0 {
                digits += frac_digits;
                end = frac_end;
            }
        }

        if digits == 0 {
            return None;
        }

        if matches!(bytes.get(end), Some(b'e' | b'E')) {
            let mut exp = end + 1;
            if matches!(bytes.get(exp), Some(b'+' | b'-')) {
                exp += 1;
            }
            let exp_end = skip_digits(bytes, exp);
            if exp_end > exp {
                end = exp_end;
            }
        }

        let value = self.input[start..end].parse::<f64>().ok()?;
        self.pos = end;
        Some(value)
    }
}

fn skip_digits(bytes: &[u8], mut at: usize) -> usize {
    while bytes.get(at).is_some_and(u8::is_ascii_digit) {
        at += 1;
    }
    at
}

fn is_separator(ch: char) -> bool {
    ch.is_ascii_whitespace() || ch == ','
}

fn starts_number(ch: char) -> bool {
    ch.is_ascii_digit() || matches!(ch, '+' | '-' | '.')
}
