#![forbid(unsafe_code)]

use escolor::config::LOG_ENV;
use escolor::engine::{self, Outcome, Rendered};
use escolor::output::DiagnosticWriter;
use escolor::output::usage::{self, PROGRAM};
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::new().filter_or(LOG_ENV, "off")).init();

    let args = std::env::args_os()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned());

    match engine::evaluate(args) {
        Ok(outcome) => match print_outcome(&outcome) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) if e.kind() == io::ErrorKind::BrokenPipe => ExitCode::SUCCESS,
            Err(e) => {
                log::error!("failed to write output: {}", e);
                ExitCode::FAILURE
            }
        },
        Err(e) => {
            if let Err(io_err) = DiagnosticWriter::stderr(PROGRAM).report(&e) {
                log::error!("failed to write diagnostic: {}", io_err);
            }
            ExitCode::FAILURE
        }
    }
}

fn print_outcome(outcome: &Outcome) -> io::Result<()> {
    let mut stdout = io::stdout().lock();

    match outcome {
        Outcome::Help => stdout.write_all(usage::usage(PROGRAM).as_bytes())?,
        Outcome::Version => stdout.write_all(usage::version(PROGRAM).as_bytes())?,
        Outcome::Render(rendered) => write_rendered(&mut stdout, rendered)?,
    }

    stdout.flush()
}

fn write_rendered(out: &mut impl Write, rendered: &Rendered) -> io::Result<()> {
    out.write_all(rendered.text().as_bytes())?;
    if rendered.newline {
        out.write_all(b"\n")?;
    }
    Ok(())
}
