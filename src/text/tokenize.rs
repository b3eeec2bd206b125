//! Markup tokenization.
//!
//! Card text is a flat string: whitespace separates words, two control
//! words mark structure, and the first colon of each paragraph separates
//! a label from its effect text.

/// Control word forcing a line break inside a paragraph.
pub const LINE_BREAK_WORD: &str = "*newline*";
/// Control word separating paragraphs with a blank-line gap.
pub const PARAGRAPH_BREAK_WORD: &str = "*newpara*";

/// Atomic unit of the markup grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A run of non-control, non-whitespace characters.
    Word(String),
    /// Explicit `*newline*` break.
    LineBreak,
    /// Explicit `*newpara*` blank-line separator.
    ParagraphBreak,
    /// The first `:` of a paragraph, lifted out of its word.
    Colon,
}

/// Split raw card text into tokens.
///
/// The first `:` in each paragraph becomes a standalone [`Token::Colon`]
/// between the text before and after it; any later colon in the same
/// paragraph stays inside its word. Both break tokens start a fresh
/// paragraph for colon tracking.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut colon_seen = false;

    for word in text.split_whitespace() {
        match word {
            LINE_BREAK_WORD => {
                tokens.push(Token::LineBreak);
                colon_seen = false;
            }
            PARAGRAPH_BREAK_WORD => {
                tokens.push(Token::ParagraphBreak);
                colon_seen = false;
            }
            _ => {
                if !colon_seen && word.contains(':') {
                    push_colon_split(word, &mut tokens);
                    colon_seen = true;
                } else {
                    tokens.push(Token::Word(word.to_string()));
                }
            }
        }
    }
    tokens
}

fn push_colon_split(word: &str, tokens: &mut Vec<Token>) {
    let at = word.find(':').unwrap_or(word.len());
    let (before, after) = word.split_at(at);
    if !before.is_empty() {
        tokens.push(Token::Word(before.to_string()));
    }
    tokens.push(Token::Colon);
    let after = &after[1..];
    if !after.is_empty() {
        tokens.push(Token::Word(after.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn word(s: &str) -> Token {
        Token::Word(s.to_string())
    }

    #[test]
    fn test_plain_words() {
        assert_eq!(tokenize("Alpha Beta"), vec![word("Alpha"), word("Beta")]);
    }

    #[test]
    fn test_collapses_whitespace_runs() {
        assert_eq!(tokenize("  Alpha \t Beta\n"), vec![word("Alpha"), word("Beta")]);
    }

    #[test]
    fn test_control_words() {
        assert_eq!(
            tokenize("A *newline* B *newpara* C"),
            vec![
                word("A"),
                Token::LineBreak,
                word("B"),
                Token::ParagraphBreak,
                word("C"),
            ]
        );
    }

    #[test]
    fn test_first_colon_is_lifted() {
        assert_eq!(
            tokenize("Alpha: Beta"),
            vec![word("Alpha"), Token::Colon, word("Beta")]
        );
    }

    #[test]
    fn test_colon_inside_word_splits_it() {
        assert_eq!(
            tokenize("Alpha:Beta"),
            vec![word("Alpha"), Token::Colon, word("Beta")]
        );
    }

    #[test]
    fn test_second_colon_in_paragraph_stays_in_word() {
        assert_eq!(
            tokenize("A: B: C"),
            vec![word("A"), Token::Colon, word("B:"), word("C")]
        );
    }

    #[test]
    fn test_paragraph_break_resets_colon_state() {
        assert_eq!(
            tokenize("A: B *newpara* C: D"),
            vec![
                word("A"),
                Token::Colon,
                word("B"),
                Token::ParagraphBreak,
                word("C"),
                Token::Colon,
                word("D"),
            ]
        );
    }

    #[test]
    fn test_line_break_also_resets_colon_state() {
        assert_eq!(
            tokenize("A: *newline* B: C"),
            vec![
                word("A"),
                Token::Colon,
                Token::LineBreak,
                word("B"),
                Token::Colon,
                word("C"),
            ]
        );
    }

    #[test]
    fn test_lone_colon_word() {
        assert_eq!(tokenize(":"), vec![Token::Colon]);
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(tokenize(""), Vec::<Token>::new());
        assert_eq!(tokenize("   "), Vec::<Token>::new());
    }
}
