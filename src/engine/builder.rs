#![forbid(unsafe_code)]

//! Escape sequence builder
//!
//! Walks the normalized tokens left to right and assembles the output
//! string. Style flags accumulate SGR parameters after an open `ESC [`
//! marker; a literal closes the pending sequence with `m` (or drops the
//! marker when nothing was accumulated), appends its text and opens a new
//! marker for whatever follows.

use crate::cli::options::{self, Action, Exit, Layer, Setting};
use crate::cli::tokenizer::Token;
use crate::color;
use crate::config::Settings;
use crate::output::visible;
use thiserror::Error;

/// Control Sequence Introducer that opens every SGR sequence
pub const SEQUENCE_OPEN: &str = "\x1b[";

/// Terminates an SGR sequence
pub const SEQUENCE_CLOSE: char = 'm';

/// Separates SGR parameters
pub const PARAM_SEPARATOR: char = ';';

/// Errors that abort sequence building
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// A color flag had no value, or its value is not a color
    #[error("Invalid color given: {}", describe_color(.0))]
    InvalidColor(Option<String>),
}

fn describe_color(given: &Option<String>) -> String {
    match given {
        Some(color) if !color.is_empty() => format!("'{}'", color),
        _ => "NO COLOR GIVEN".to_string(),
    }
}

/// How evaluation ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// All tokens were processed
    Render(Rendered),
    /// `-h`/`--help` was reached
    Help,
    /// `-v`/`--version` was reached
    Version,
}

/// The finished sequence together with the flags that govern printing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    /// The raw sequence, containing real escape characters
    pub sequence: String,
    pub escape: bool,
    pub newline: bool,
}

impl Rendered {
    /// The text to print, without the trailing newline
    ///
    /// In escape mode this is the raw sequence; otherwise it is the visible
    /// form, where `ESC` shows up as the four characters `\x1b`.
    pub fn text(&self) -> String {
        if self.escape {
            self.sequence.clone()
        } else {
            visible::render(&self.sequence)
        }
    }
}

/// Accumulates SGR parameters and literal text for one invocation
#[derive(Debug)]
pub struct SequenceBuilder {
    buffer: String,
    settings: Settings,
}

impl Default for SequenceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SequenceBuilder {
    /// Creates a builder with an open marker and default settings
    pub fn new() -> Self {
        SequenceBuilder {
            buffer: SEQUENCE_OPEN.to_string(),
            settings: Settings::default(),
        }
    }

    /// Process every token and produce the outcome
    ///
    /// Stops at the first terminal flag or invalid color.
    pub fn build(mut self, tokens: Vec<Token>) -> Result<Outcome, BuildError> {
        let mut tokens = tokens.into_iter();

        while let Some(token) = tokens.next() {
            match options::lookup(&token) {
                Some(Action::Terminate(Exit::Help)) => return Ok(Outcome::Help),
                Some(Action::Terminate(Exit::Version)) => return Ok(Outcome::Version),
                Some(Action::Toggle(setting)) => self.toggle(setting),
                Some(Action::AppendCode(code)) => self.push_param(&code.to_string()),
                Some(Action::ResolveColor(layer)) => {
                    let value = tokens.next();
                    self.push_color(value.as_ref(), layer)?;
                }
                None => self.push_literal(&token.spelling()),
            }
        }

        Ok(Outcome::Render(self.finish()))
    }

    fn toggle(&mut self, setting: Setting) {
        log::trace!("toggle {:?}", setting);
        match setting {
            Setting::Escape(on) => self.settings.escape = on,
            Setting::Newline(on) => self.settings.newline = on,
        }
    }

    fn push_param(&mut self, param: &str) {
        log::trace!("append parameter {}", param);
        self.buffer.push_str(param);
        self.buffer.push(PARAM_SEPARATOR);
    }

    fn push_color(&mut self, value: Option<&Token>, layer: Layer) -> Result<(), BuildError> {
        let Some(value) = value else {
            return Err(BuildError::InvalidColor(None));
        };

        let spec = value.spelling();
        match color::resolve(&spec, layer) {
            Some(params) => {
                self.push_param(&params);
                Ok(())
            }
            None => Err(BuildError::InvalidColor(Some(spec.into_owned()))),
        }
    }

    fn push_literal(&mut self, text: &str) {
        log::trace!("append literal {:?}", text);
        self.close_pending();

        // One leading backslash lets literals look like options.
        let text = text.strip_prefix('\\').unwrap_or(text);
        self.buffer.push_str(text);
        self.buffer.push_str(SEQUENCE_OPEN);
    }

    /// Close the pending sequence, or drop its marker if it holds no parameters
    fn close_pending(&mut self) {
        if self.buffer.ends_with(PARAM_SEPARATOR) {
            self.buffer.pop();
            self.buffer.push(SEQUENCE_CLOSE);
        } else if self.buffer.ends_with(SEQUENCE_OPEN) {
            self.buffer.truncate(self.buffer.len() - SEQUENCE_OPEN.len());
        }
    }

    fn finish(mut self) -> Rendered {
        if self.buffer.ends_with(PARAM_SEPARATOR) {
            self.buffer.pop();
        }
        self.buffer.push(SEQUENCE_CLOSE);
        log::debug!("built sequence {:?}", self.buffer);

        Rendered {
            sequence: self.buffer,
            escape: self.settings.escape,
            newline: self.settings.newline,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::tokenizer::tokenize;

    fn build(args: &[&str]) -> Result<Outcome, BuildError> {
        let tokens = tokenize(args.iter().copied(), &options::value_spec());
        SequenceBuilder::new().build(tokens)
    }

    fn rendered(args: &[&str]) -> Rendered {
        match build(args) {
            Ok(Outcome::Render(rendered)) => rendered,
            other => panic!("Expected a rendered sequence, got {:?}", other),
        }
    }

    #[test]
    fn test_no_arguments() {
        let r = rendered(&[]);
        assert_eq!(r.sequence, "\x1b[m");
        assert!(!r.escape);
        assert!(r.newline);
    }

    #[test]
    fn test_colors_without_text() {
        assert_eq!(rendered(&["-cg", "RED", "BLUE"]).sequence, "\x1b[31;44m");
        assert_eq!(rendered(&["-gc", "RED", "BLUE"]).sequence, "\x1b[41;34m");
        assert_eq!(
            rendered(&["--color", "RED", "--background", "BLUE"]).sequence,
            "\x1b[31;44m"
        );
    }

    #[test]
    fn test_colors_with_text() {
        assert_eq!(
            rendered(&["-cg", "RED", "BLUE", "HELLO WORLD"]).sequence,
            "\x1b[31;44mHELLO WORLD\x1b[m"
        );
    }

    #[test]
    fn test_text_without_styles_drops_empty_marker() {
        assert_eq!(rendered(&["HELLO"]).sequence, "HELLO\x1b[m");
        assert_eq!(rendered(&["A", "B"]).sequence, "AB\x1b[m");
    }

    #[test]
    fn test_multiple_segments() {
        let r = rendered(&[
            "-ecg", "RED", "BLUE", "HELLO", "-r", " ", "-cg", "CYAN", "MAGENTA", "WORLD",
        ]);
        assert!(r.escape);
        assert_eq!(
            r.sequence,
            "\x1b[31;44mHELLO\x1b[0m \x1b[36;45mWORLD\x1b[m"
        );
    }

    #[test]
    fn test_fixed_codes() {
        assert_eq!(
            rendered(&["-biudotks"]).sequence,
            "\x1b[1;3;4;21;53;9;5;7m"
        );
        assert_eq!(
            rendered(&["-CGBIUOTKSr"]).sequence,
            "\x1b[39;49;22;23;24;55;29;25;27;0m"
        );
        assert_eq!(rendered(&["--bold", "--no-bold"]).sequence, "\x1b[1;22m");
    }

    #[test]
    fn test_extended_colors() {
        assert_eq!(
            rendered(&["-cg", "cc0000", "#2986cc"]).sequence,
            "\x1b[38;2;204;0;0;48;2;41;134;204m"
        );
        assert_eq!(
            rendered(&["-c", "208", "-g", "1,99,255"]).sequence,
            "\x1b[38;5;208;48;2;1;99;255m"
        );
    }

    #[test]
    fn test_backslash_escapes_literal() {
        assert_eq!(
            rendered(&["-c", "RED", "\\-E"]).sequence,
            "\x1b[31m-E\x1b[m"
        );
        assert_eq!(rendered(&["\\\\HELLO"]).sequence, "\\HELLO\x1b[m");
        assert_eq!(rendered(&["\\HELLO WORLD"]).sequence, "HELLO WORLD\x1b[m");
    }

    #[test]
    fn test_unknown_flags_are_literals() {
        assert_eq!(
            rendered(&["-ecg", "RED", "BLUE", "--this-is-not-an-option"]).sequence,
            "\x1b[31;44m--this-is-not-an-option\x1b[m"
        );
        assert_eq!(rendered(&["-xb"]).sequence, "-x\x1b[1m");
        assert_eq!(rendered(&["-"]).sequence, "-\x1b[m");
    }

    #[test]
    fn test_literal_ending_in_bracket_survives() {
        assert_eq!(rendered(&["a[", "b"]).sequence, "a[b\x1b[m");
    }

    #[test]
    fn test_toggles() {
        let r = rendered(&["-eN"]);
        assert!(r.escape);
        assert!(!r.newline);

        let r = rendered(&["--escape", "--no-newline", "--no-escape", "--newline"]);
        assert!(!r.escape);
        assert!(r.newline);
        assert_eq!(r.sequence, "\x1b[m");
    }

    #[test]
    fn test_help_and_version_stop_processing() {
        assert_eq!(build(&["-b", "-h", "-c", "NOTACOLOR"]), Ok(Outcome::Help));
        assert_eq!(build(&["--version"]), Ok(Outcome::Version));
        assert_eq!(build(&["-bv"]), Ok(Outcome::Version));
    }

    #[test]
    fn test_invalid_color_stops_before_help() {
        assert_eq!(
            build(&["-c", "NOTACOLOR", "-h"]),
            Err(BuildError::InvalidColor(Some("NOTACOLOR".to_string())))
        );
    }

    #[test]
    fn test_missing_color() {
        assert_eq!(build(&["-c"]), Err(BuildError::InvalidColor(Some(String::new()))));
        assert_eq!(build(&["--background"]), Err(BuildError::InvalidColor(None)));
    }

    #[test]
    fn test_color_value_is_not_reinterpreted() {
        assert_eq!(
            build(&["-c", "-b"]),
            Err(BuildError::InvalidColor(Some("-b".to_string())))
        );
        assert_eq!(
            build(&["--color", "-bi"]),
            Err(BuildError::InvalidColor(Some("-b".to_string())))
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            BuildError::InvalidColor(Some("NOTACOLOR".to_string())).to_string(),
            "Invalid color given: 'NOTACOLOR'"
        );
        assert_eq!(
            BuildError::InvalidColor(Some(String::new())).to_string(),
            "Invalid color given: NO COLOR GIVEN"
        );
        assert_eq!(
            BuildError::InvalidColor(None).to_string(),
            "Invalid color given: NO COLOR GIVEN"
        );
    }

    #[test]
    fn test_rendered_text() {
        let r = rendered(&["-cg", "RED", "BLUE", "HELLO WORLD"]);
        assert_eq!(r.text(), "\\x1b[31;44mHELLO WORLD\\x1b[m");

        let r = rendered(&["-ecg", "RED", "BLUE", "HELLO WORLD"]);
        assert_eq!(r.text(), "\x1b[31;44mHELLO WORLD\x1b[m");
    }
}
