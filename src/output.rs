//! Everything written to the standard streams

pub mod diagnostic;
pub mod usage;
pub mod visible;

pub use diagnostic::DiagnosticWriter;
