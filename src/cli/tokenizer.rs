#![forbid(unsafe_code)]

//! GNU-style option tokenizer
//!
//! Expands raw arguments into a flat token list. Bundled short flags are
//! split into one token per character, and every flag that takes a value is
//! immediately followed by a [`Token::Value`] taken from the remaining raw
//! arguments. When the arguments run out, the value is an empty string so
//! consumers can always look one token ahead.

use std::borrow::Cow;

/// A normalized command-line token
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// One character from a `-xyz` bundle
    Short(char),
    /// A `--name` flag, stored without the dashes
    Long(String),
    /// The argument consumed by a value-taking flag
    Value(String),
    /// Any other argument, including a lone `-`
    Literal(String),
}

impl Token {
    /// The token as it would be typed on the command line
    pub fn spelling(&self) -> Cow<'_, str> {
        match self {
            Token::Short(c) => Cow::Owned(format!("-{}", c)),
            Token::Long(name) => Cow::Owned(format!("--{}", name)),
            Token::Value(text) | Token::Literal(text) => Cow::Borrowed(text),
        }
    }
}

/// Flags that consume the following raw argument
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValueSpec {
    shorts: Vec<char>,
    longs: Vec<String>,
}

impl ValueSpec {
    /// Parse the compact `"cg:color:background"` notation
    ///
    /// Characters before the first `:` are value-taking short flags; the
    /// colon-separated names after it are value-taking long flags.
    pub fn parse(notation: &str) -> Self {
        let (shorts, longs) = match notation.split_once(':') {
            Some((shorts, longs)) => (
                shorts,
                longs
                    .split(':')
                    .filter(|l| !l.is_empty())
                    .map(str::to_string)
                    .collect(),
            ),
            None => (notation, Vec::new()),
        };

        ValueSpec {
            shorts: shorts.chars().collect(),
            longs,
        }
    }

    pub fn short_takes_value(&self, short: char) -> bool {
        self.shorts.contains(&short)
    }

    pub fn long_takes_value(&self, long: &str) -> bool {
        self.longs.iter().any(|l| l == long)
    }
}

/// Expand raw arguments into normalized tokens
pub fn tokenize<I, S>(args: I, spec: &ValueSpec) -> Vec<Token>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut raw = args.into_iter().map(Into::into);
    let mut tokens = Vec::new();

    while let Some(arg) = raw.next() {
        if let Some(name) = arg.strip_prefix("--").filter(|n| !n.is_empty()) {
            let takes_value = spec.long_takes_value(name);
            tokens.push(Token::Long(name.to_string()));
            if takes_value {
                tokens.push(Token::Value(raw.next().unwrap_or_default()));
            }
        } else if let Some(bundle) = arg.strip_prefix('-').filter(|b| !b.is_empty()) {
            for short in bundle.chars() {
                tokens.push(Token::Short(short));
                if spec.short_takes_value(short) {
                    tokens.push(Token::Value(raw.next().unwrap_or_default()));
                }
            }
        } else {
            tokens.push(Token::Literal(arg));
        }
    }

    log::debug!("tokenized arguments: {:?}", tokens);
    tokens
}
