#![forbid(unsafe_code)]

//! escolor: ANSI escape sequences from the command line
//!
//! Translates styling options (colors, bold, underline, ...) into SGR
//! escape sequences, optionally wrapped around literal strings.

pub mod cli;
pub mod color;
pub mod config;
pub mod engine;
pub mod output;
