#![forbid(unsafe_code)]

//! Visible rendering of escape sequences
//!
//! In the default (no-escape) mode the tool prints the sequence the way a
//! programmer would type it in a string literal, so `ESC` appears as the
//! four characters `\x1b` instead of acting on the terminal. The quoting
//! rules follow the classic `repr` convention: single quotes unless the text
//! contains a single quote and no double quote.

/// Quoted literal form of `text`
pub fn repr(text: &str) -> String {
    let quote = if text.contains('\'') && !text.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(text.len() + 2);
    out.push(quote);
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if is_printable(c) => out.push(c),
            c => push_code_point(&mut out, c),
        }
    }
    out.push(quote);
    out
}

/// Literal form of `text` with the enclosing quotes removed
pub fn render(text: &str) -> String {
    let quoted = repr(text);
    match quoted.chars().next() {
        Some(quote @ ('\'' | '"')) => quoted
            .strip_prefix(quote)
            .and_then(|inner| inner.strip_suffix(quote))
            .unwrap_or(quoted.as_str())
            .to_string(),
        _ => quoted,
    }
}

fn is_printable(c: char) -> bool {
    if c.is_ascii() {
        return (' '..='~').contains(&c);
    }

    // Combining marks only get escaped at the start of a string, so probe
    // with a leading ASCII character.
    let probe: String = ['a', c].iter().collect();
    probe.escape_debug().to_string() == probe
}

fn push_code_point(out: &mut String, c: char) {
    let code = u32::from(c);
    let escaped = if code <= 0xff {
        format!("\\x{:02x}", code)
    } else if code <= 0xffff {
        format!("\\u{:04x}", code)
    } else {
        format!("\\U{:08x}", code)
    };
    out.push_str(&escaped);
}
