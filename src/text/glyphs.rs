//! Icon glyph substitution.
//!
//! Card text encodes combat icons as short bracket and parenthesis codes
//! (`[B]`, `(S)`, ...). The display font maps a handful of plain characters
//! to those icons, so the codes are rewritten once, before any measurement
//! or layout happens.

/// The closed set of icon codes and the characters the icon font consumes.
const ICON_CODES: [(&str, char); 6] = [
    ("[B]", '}'),
    ("[S]", '{'),
    ("[M]", '<'),
    ("[D]", '|'),
    ("(B)", '#'),
    ("(S)", '@'),
];

/// Rewrite icon codes into single icon-font characters.
///
/// One left-to-right scan: each input character is consumed exactly once,
/// so an emitted replacement can never be re-matched as part of another
/// code. Unmatched text passes through unchanged.
pub fn substitute(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(ch) = rest.chars().next() {
        if let Some((replacement, tail)) = match_code(rest) {
            out.push(replacement);
            rest = tail;
        } else {
            out.push(ch);
            rest = &rest[ch.len_utf8()..];
        }
    }
    out
}

fn match_code(s: &str) -> Option<(char, &str)> {
    ICON_CODES
        .iter()
        .find_map(|(code, replacement)| s.strip_prefix(code).map(|tail| (*replacement, tail)))
}
