//! Command-line option table and argument tokenizing

pub mod options;
pub mod tokenizer;

// Re-export types for convenient access
pub use options::{Action, Exit, Layer, OPTIONS, OptionSpec, Setting};
pub use tokenizer::{Token, ValueSpec, tokenize};
