#![forbid(unsafe_code)]

//! Runtime settings and environment configuration

/// Environment variable holding the `env_logger` filter (e.g. `debug`)
pub const LOG_ENV: &str = "ESCOLOR_LOG";

/// Environment variable that disables colored diagnostics when set
pub const NO_COLOR_ENV: &str = "NO_COLOR";

/// Behavior flags toggled while the arguments are evaluated
///
/// Both flags may be flipped any number of times; only the value they hold
/// once every token has been processed affects the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Print the sequence with real escape characters instead of its visible form
    pub escape: bool,
    /// Terminate the output with a newline
    pub newline: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            escape: false,
            newline: true,
        }
    }
}
