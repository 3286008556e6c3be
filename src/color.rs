#![forbid(unsafe_code)]

//! Color specifier resolution
//!
//! Turns a user-supplied color into the SGR parameters that select it.
//! Four notations are accepted, tried in order:
//!
//! - a named color (`red`, `BBLUE`, ...), case-insensitive
//! - an 8-bit palette index (`0` to `255`)
//! - a hexadecimal triplet (`#2986cc` or `2986CC`)
//! - a decimal triplet (`41,134,204`)

use crate::cli::options::Layer;
use regex::Regex;
use std::sync::LazyLock;

static PALETTE_INDEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{1,3}$").expect("palette pattern is valid"));

static HEX_TRIPLET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#?([0-9A-F]{2})([0-9A-F]{2})([0-9A-F]{2})$").expect("hex pattern is valid")
});

static RGB_TRIPLET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{1,3}),([0-9]{1,3}),([0-9]{1,3})$").expect("rgb pattern is valid")
});

/// The sixteen colors of the basic ANSI palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl NamedColor {
    pub const ALL: [NamedColor; 16] = [
        NamedColor::Black,
        NamedColor::Red,
        NamedColor::Green,
        NamedColor::Yellow,
        NamedColor::Blue,
        NamedColor::Magenta,
        NamedColor::Cyan,
        NamedColor::White,
        NamedColor::BrightBlack,
        NamedColor::BrightRed,
        NamedColor::BrightGreen,
        NamedColor::BrightYellow,
        NamedColor::BrightBlue,
        NamedColor::BrightMagenta,
        NamedColor::BrightCyan,
        NamedColor::BrightWhite,
    ];

    /// The upper-case name accepted on the command line
    pub fn name(self) -> &'static str {
        match self {
            NamedColor::Black => "BLACK",
            NamedColor::Red => "RED",
            NamedColor::Green => "GREEN",
            NamedColor::Yellow => "YELLOW",
            NamedColor::Blue => "BLUE",
            NamedColor::Magenta => "MAGENTA",
            NamedColor::Cyan => "CYAN",
            NamedColor::White => "WHITE",
            NamedColor::BrightBlack => "BBLACK",
            NamedColor::BrightRed => "BRED",
            NamedColor::BrightGreen => "BGREEN",
            NamedColor::BrightYellow => "BYELLOW",
            NamedColor::BrightBlue => "BBLUE",
            NamedColor::BrightMagenta => "BMAGENTA",
            NamedColor::BrightCyan => "BCYAN",
            NamedColor::BrightWhite => "BWHITE",
        }
    }

    /// Case-insensitive lookup by name
    ///
    /// Uses full Unicode upper-casing, so `whıte` (dotless i) is `WHITE`.
    pub fn parse(name: &str) -> Option<Self> {
        let upper = name.to_uppercase();
        Self::ALL.into_iter().find(|color| color.name() == upper)
    }

    /// SGR code for this color on the given layer
    ///
    /// Standard colors use 30-37, bright ones 90-97; backgrounds add 10.
    pub fn code(self, layer: Layer) -> u8 {
        let base = match self {
            NamedColor::Black => 30,
            NamedColor::Red => 31,
            NamedColor::Green => 32,
            NamedColor::Yellow => 33,
            NamedColor::Blue => 34,
            NamedColor::Magenta => 35,
            NamedColor::Cyan => 36,
            NamedColor::White => 37,
            NamedColor::BrightBlack => 90,
            NamedColor::BrightRed => 91,
            NamedColor::BrightGreen => 92,
            NamedColor::BrightYellow => 93,
            NamedColor::BrightBlue => 94,
            NamedColor::BrightMagenta => 95,
            NamedColor::BrightCyan => 96,
            NamedColor::BrightWhite => 97,
        };
        match layer {
            Layer::Foreground => base,
            Layer::Background => base + 10,
        }
    }
}

/// First parameter of an extended (8-bit or 24-bit) color sequence
fn extended_base(layer: Layer) -> u8 {
    match layer {
        Layer::Foreground => 38,
        Layer::Background => 48,
    }
}

/// Resolve a color specifier to SGR parameters
///
/// Returns the parameters without surrounding separators, e.g. `31`,
/// `48;5;208` or `38;2;41;134;204`. `None` means the specifier is not a
/// valid color, which includes the empty string and RGB triplets with a
/// channel above 255.
pub fn resolve(spec: &str, layer: Layer) -> Option<String> {
    if let Some(named) = NamedColor::parse(spec) {
        return Some(named.code(layer).to_string());
    }

    let upper = spec.to_uppercase();
    let base = extended_base(layer);

    // The index is emitted as typed, leading zeros included.
    if PALETTE_INDEX.is_match(&upper) {
        upper.parse::<u8>().ok()?;
        return Some(format!("{};5;{}", base, upper));
    }

    if let Some(caps) = HEX_TRIPLET.captures(&upper) {
        let r = u8::from_str_radix(&caps[1], 16).ok()?;
        let g = u8::from_str_radix(&caps[2], 16).ok()?;
        let b = u8::from_str_radix(&caps[3], 16).ok()?;
        return Some(format!("{};2;{};{};{}", base, r, g, b));
    }

    if let Some(caps) = RGB_TRIPLET.captures(&upper) {
        let r: u8 = caps[1].parse().ok()?;
        let g: u8 = caps[2].parse().ok()?;
        let b: u8 = caps[3].parse().ok()?;
        return Some(format!("{};2;{};{};{}", base, r, g, b));
    }

    None
}
