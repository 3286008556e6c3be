#![forbid(unsafe_code)]

//! Error reporting on standard error
//!
//! The program name prefix is highlighted when stderr is a terminal and
//! `NO_COLOR` is unset; otherwise plain text is written.

use crate::config::NO_COLOR_ENV;
use std::fmt::Display;
use std::io::{self, IsTerminal, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Pick the color choice for diagnostics on stderr
pub fn color_choice() -> ColorChoice {
    let no_color = std::env::var_os(NO_COLOR_ENV).is_some_and(|v| !v.is_empty());
    if no_color || !io::stderr().is_terminal() {
        ColorChoice::Never
    } else {
        ColorChoice::Auto
    }
}

/// Writes `<program>: <message>. See usage with -h or --help.` lines
pub struct DiagnosticWriter<W> {
    out: W,
    program: String,
}

impl DiagnosticWriter<StandardStream> {
    /// Writer bound to the process stderr
    pub fn stderr(program: &str) -> Self {
        DiagnosticWriter::new(StandardStream::stderr(color_choice()), program)
    }
}

impl<W: WriteColor> DiagnosticWriter<W> {
    pub fn new(out: W, program: &str) -> Self {
        DiagnosticWriter {
            out,
            program: program.to_string(),
        }
    }

    /// Report an error that ends the run
    pub fn report(&mut self, error: &impl Display) -> io::Result<()> {
        self.out
            .set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
        write!(self.out, "{}:", self.program)?;
        self.out.reset()?;
        writeln!(self.out, " {}. See usage with -h or --help.", error)?;
        self.out.flush()
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }
}
