#![forbid(unsafe_code)]

//! Declarative table of every flag the tool understands
//!
//! Each entry maps a short flag and a long flag to the action the sequence
//! builder performs when it meets either spelling. The table is read-only;
//! the tokenizer derives its value-taking flags from it and the builder
//! dispatches on it.

use crate::cli::tokenizer::{Token, ValueSpec};

/// Which color plane a color flag targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    Foreground,
    Background,
}

/// Behavior flag toggled by an option
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Setting {
    /// Print real escape characters (`true`) or their visible form (`false`)
    Escape(bool),
    /// Emit (`true`) or suppress (`false`) the trailing newline
    Newline(bool),
}

/// Options that stop evaluation and print fixed text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    Help,
    Version,
}

/// What the sequence builder does for a flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Append a fixed SGR parameter
    AppendCode(u8),
    /// Consume the following token and resolve it as a color
    ResolveColor(Layer),
    /// Flip a behavior flag
    Toggle(Setting),
    /// Stop processing and print help or version text
    Terminate(Exit),
}

/// A single row of the option table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionSpec {
    pub short: char,
    pub long: &'static str,
    pub action: Action,
}

const fn spec(short: char, long: &'static str, action: Action) -> OptionSpec {
    OptionSpec {
        short,
        long,
        action,
    }
}

/// The full option table, in help-screen order
pub const OPTIONS: &[OptionSpec] = &[
    spec('e', "escape", Action::Toggle(Setting::Escape(true))),
    spec('n', "newline", Action::Toggle(Setting::Newline(true))),
    spec('E', "no-escape", Action::Toggle(Setting::Escape(false))),
    spec('N', "no-newline", Action::Toggle(Setting::Newline(false))),
    spec('c', "color", Action::ResolveColor(Layer::Foreground)),
    spec('g', "background", Action::ResolveColor(Layer::Background)),
    spec('b', "bold", Action::AppendCode(1)),
    spec('i', "italic", Action::AppendCode(3)),
    spec('u', "underline", Action::AppendCode(4)),
    spec('d', "double-underline", Action::AppendCode(21)),
    spec('o', "overline", Action::AppendCode(53)),
    spec('t', "crossed-out", Action::AppendCode(9)),
    spec('k', "blink", Action::AppendCode(5)),
    spec('s', "swap", Action::AppendCode(7)),
    spec('C', "no-color", Action::AppendCode(39)),
    spec('G', "no-background", Action::AppendCode(49)),
    spec('B', "no-bold", Action::AppendCode(22)),
    spec('I', "no-italic", Action::AppendCode(23)),
    spec('U', "no-underline", Action::AppendCode(24)),
    spec('O', "no-overline", Action::AppendCode(55)),
    spec('T', "no-crossed-out", Action::AppendCode(29)),
    spec('K', "no-blink", Action::AppendCode(25)),
    spec('S', "no-swap", Action::AppendCode(27)),
    spec('r', "reset", Action::AppendCode(0)),
    spec('h', "help", Action::Terminate(Exit::Help)),
    spec('v', "version", Action::Terminate(Exit::Version)),
];

/// Find the entry for a short flag character
pub fn find_short(short: char) -> Option<&'static OptionSpec> {
    OPTIONS.iter().find(|o| o.short == short)
}

/// Find the entry for a long flag name (without the leading `--`)
pub fn find_long(long: &str) -> Option<&'static OptionSpec> {
    OPTIONS.iter().find(|o| o.long == long)
}

/// Resolve a token to its action, if it is a known flag
///
/// Values and literals never map to an action, and neither do flag tokens
/// that are not in the table; the builder prints those as text.
pub fn lookup(token: &Token) -> Option<Action> {
    match token {
        Token::Short(c) => find_short(*c).map(|o| o.action),
        Token::Long(name) => find_long(name).map(|o| o.action),
        Token::Value(_) | Token::Literal(_) => None,
    }
}

/// Short flags that take their value from the next raw argument
pub fn shorts_with_values() -> Vec<char> {
    OPTIONS
        .iter()
        .filter(|o| matches!(o.action, Action::ResolveColor(_)))
        .map(|o| o.short)
        .collect()
}

/// The tokenizer configuration derived from the table, in `"cg"` notation
///
/// Long color flags are left out on purpose: the builder pairs them with
/// whichever normalized token follows, so `--color -bi` reports `-b`.
pub fn value_spec() -> ValueSpec {
    let notation: String = shorts_with_values().into_iter().collect();
    ValueSpec::parse(&notation)
}
