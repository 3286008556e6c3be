//! Argument evaluation: tokenizing followed by sequence building

pub mod builder;

pub use builder::{BuildError, Outcome, Rendered, SequenceBuilder};

use crate::cli::{options, tokenizer};

/// Evaluate raw command-line arguments (without the program name)
pub fn evaluate<I, S>(args: I) -> Result<Outcome, BuildError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let tokens = tokenizer::tokenize(args, &options::value_spec());
    SequenceBuilder::default().build(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequence(args: &[&str]) -> String {
        match evaluate(args.iter().copied()) {
            Ok(Outcome::Render(rendered)) => rendered.sequence,
            other => panic!("Expected a rendered sequence, got {:?}", other),
        }
    }

    #[test]
    fn test_long_and_bundled_forms_match() {
        assert_eq!(
            sequence(&["--color", "RED", "--background", "BLUE"]),
            sequence(&["-cg", "RED", "BLUE"])
        );
        assert_eq!(
            sequence(&["-c", "RED", "-g", "BLUE", "x"]),
            sequence(&["-cg", "RED", "BLUE", "x"])
        );
    }

    #[test]
    fn test_evaluate_accepts_owned_strings() {
        let args = vec!["-b".to_string(), "text".to_string()];
        assert_eq!(
            evaluate(args),
            Ok(Outcome::Render(Rendered {
                sequence: "\x1b[1mtext\x1b[m".to_string(),
                escape: false,
                newline: true,
            }))
        );
    }
}
