#![forbid(unsafe_code)]

//! Help and version screens

/// Name the binary reports in help, version and error output
pub const PROGRAM: &str = env!("CARGO_PKG_NAME");

/// The `--help` screen
pub fn usage(program: &str) -> String {
    format!(
        r##"Usage: {program} [OPTIONS... [STRINGS...]]

Print a string containing the escape sequence that produces ANSI colors.

Options:
  -e, --escape                Print the escaped string.
  -n, --newline               Output a trailing newline (default).
  -E, --no-escape             Print the escape sequence string (default).
  -N, --no-newline            Do not output a trailing newline.

  -c, --color COLOR           Set foreground color sequence for COLOR.
  -g, --background COLOR      Set background color sequence for COLOR.
  -b, --bold                  Set bold sequence.
  -i, --italic                Set italic sequence.
  -u, --underline             Set underline sequence.
  -d, --double-underline      Set double underline sequence.
  -o, --overline              Set overline sequence.
  -t, --crossed-out           Set crossed out sequence.
  -k, --blink                 Set blink sequence.
  -s, --swap                  Set foreground-background swap sequence.

  -C, --no-color              Reset foreground color sequence.
  -G, --no-background         Reset background color sequence.
  -B, --no-bold               Reset bold sequence.
  -I, --no-italic             Reset italic sequence.
  -U, --no-underline          Reset single or double underline sequence.
  -O, --no-overline           Reset overline sequence.
  -T, --no-crossed-out        Reset crossed out sequence.
  -K, --no-blink              Reset blink sequence.
  -S, --no-swap               Reset foreground-background swap sequence.
  -r, --reset                 Reset all effects sequence.

  -h, --help                  Print this help and exit.
  -v, --version               Print version and other info and exit.

  Options are evaluated sequentially.

Available colors:
  Colors can be named, 8-bit, hexadecimal and RGB.

  A named color must be one of the following names:
    BLACK, RED, GREEN, YELLOW, BLUE, MAGENTA, CYAN, WHITE.
    BBLACK, BRED, BGREEN, BYELLOW, BBLUE, BMAGENTA, BCYAN, BWHITE.
  The case of the names of colors is ignored: red = RED

  An 8-bit color must be a number between 0 and 255 (one byte).

  Hexadecimal colors are of the form:
    #RRGGBB
  The '#' symbol is optional.
  The case of hexadecimal colors is ignored: ffffff = FFFFFF

  RGB colors are of the form:
    RRR,GGG,BBB
  'RRR', 'GGG' and 'BBB' are numbers between 0 and 255.

Examples:
  Print the escape sequence:
    {program} --color RED --background BLUE
    {program} -c RED -g BLUE
    {program} -cg RED BLUE
  \x1b[31;44m
    {program} -gc RED BLUE
  \x1b[41;34m

  Print the string with the escape sequence:
    {program} -cg RED BLUE "HELLO WORLD"
  \x1b[31;44mHELLO WORLD\x1b[m

  Print the escaped string with colors:
    {program} --escape -cg RED BLUE "HELLO WORLD"
  HELLO WORLD

  Print the escaped string with words of different colors:
    {program} -ecg RED BLUE HELLO -r ' ' -cg CYAN MAGENTA WORLD
  HELLO WORLD

  Arguments that are not options are printed as they are:
    {program} -ecg RED BLUE --this-is-not-an-option
  --this-is-not-an-option

  A string equal to an option must be quoted (for the shell) and start
  with a backslash (for the program). Single quotes are preferred.
  Print the escaped string "-E" with colors:
    {program} -ecg RED BLUE '\-E'
  -E

  Any string starting with a backslash loses that one backslash:
    {program} -ecg RED BLUE '\HELLO WORLD'
  HELLO WORLD
    {program} -ecg RED BLUE '\\HELLO WORLD'
  \HELLO WORLD

  Print the escaped string with hexadecimal colors:
    {program} -ecg cc0000 \#2986cc "HELLO WORLD"
    {program} -ecg '#cc0000' "#2986cc" "HELLO WORLD"
  HELLO WORLD

  Print the escaped string with RGB colors:
    {program} -ecg 255,0,0 1,99,255 "HELLO WORLD"
  HELLO WORLD

Exit status:
  Returns 1 if an invalid color is given.
  Returns 0 otherwise.

This program is licensed under GPL-3.0-or-later.
"##
    )
}

/// The `--version` screen
pub fn version(program: &str) -> String {
    format!(
        "{program} {version}\n\
         Copyright © 2024 Jesús Arenas\n\
         Official repository: {repository}\n\
         License GPLv3+: GNU GPL version 3 or later <https://gnu.org/licenses/gpl.html>.\n",
        version = env!("CARGO_PKG_VERSION"),
        repository = env!("CARGO_PKG_REPOSITORY"),
    )
}
