//! Emphasis rules.
//!
//! Three paragraph-scoped rules decide which words render italic:
//!
//! 1. A paragraph that is exactly the alternatives phrase (`-или-`) is
//!    fully italic.
//! 2. Everything before the paragraph's first colon is italic; the colon
//!    and everything after stay upright.
//! 3. Under [`EmphasisPolicy::KeywordGated`], rule 2 only fires when the
//!    pre-colon span contains a slash or a configured keyword.
//!
//! Rules 2 and 3 are alternatives selected by policy, never mixed.

use super::tokenize::Token;

/// The alternatives-separator phrase, accepted with any of the three dash
/// variants that appear in card text.
const OR_PHRASES: [&str; 3] = ["-или-", "–или–", "—или—"];

/// Which pre-colon emphasis rule is active.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EmphasisPolicy {
    /// Every word before a paragraph's first colon is italic.
    #[default]
    PreColon,
    /// The pre-colon span is italic only when it contains a `/` or one of
    /// the given keywords.
    KeywordGated { keywords: Vec<String> },
}

/// A layout-ready item: a word with resolved style and glue, or a break.
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    Word {
        text: String,
        italic: bool,
        /// Attach to the previous word with no separating space.
        glue: bool,
    },
    LineBreak,
    ParagraphBreak,
}

impl Item {
    pub fn word(text: &str, italic: bool) -> Item {
        Item::Word {
            text: text.to_string(),
            italic,
            glue: false,
        }
    }

    fn colon() -> Item {
        Item::Word {
            text: ":".to_string(),
            italic: false,
            glue: true,
        }
    }
}

/// Apply the emphasis rules, producing the item stream the layout engine
/// consumes. Paragraph boundaries (both break tokens) reset all emphasis
/// state.
pub fn stylize(tokens: &[Token], policy: &EmphasisPolicy) -> Vec<Item> {
    let mut items = Vec::with_capacity(tokens.len());
    let mut start = 0;
    for (i, token) in tokens.iter().enumerate() {
        let break_item = match token {
            Token::LineBreak => Item::LineBreak,
            Token::ParagraphBreak => Item::ParagraphBreak,
            _ => continue,
        };
        stylize_paragraph(&tokens[start..i], policy, &mut items);
        items.push(break_item);
        start = i + 1;
    }
    stylize_paragraph(&tokens[start..], policy, &mut items);
    items
}

/// Item stream with no emphasis at all (orders and events bodies).
pub fn plain(tokens: &[Token]) -> Vec<Item> {
    tokens
        .iter()
        .map(|token| match token {
            Token::Word(w) => Item::word(w, false),
            Token::Colon => Item::colon(),
            Token::LineBreak => Item::LineBreak,
            Token::ParagraphBreak => Item::ParagraphBreak,
        })
        .collect()
}

fn stylize_paragraph(tokens: &[Token], policy: &EmphasisPolicy, items: &mut Vec<Item>) {
    if tokens.is_empty() {
        return;
    }

    // Rule 1: the whole paragraph is the alternatives phrase.
    if let [Token::Word(w)] = tokens {
        if OR_PHRASES.contains(&w.as_str()) {
            items.push(Item::word(w, true));
            return;
        }
    }

    let colon_at = tokens.iter().position(|t| *t == Token::Colon);
    let label_italic = match (colon_at, policy) {
        (None, _) => false,
        (Some(_), EmphasisPolicy::PreColon) => true,
        (Some(at), EmphasisPolicy::KeywordGated { keywords }) => tokens[..at].iter().any(|t| {
            matches!(t, Token::Word(w)
                if w.contains('/') || keywords.iter().any(|k| w.contains(k.as_str())))
        }),
    };

    for (i, token) in tokens.iter().enumerate() {
        match token {
            Token::Word(w) => {
                let italic = label_italic && matches!(colon_at, Some(at) if i < at);
                items.push(Item::word(w, italic));
            }
            Token::Colon => items.push(Item::colon()),
            // Breaks never reach here; stylize splits on them.
            Token::LineBreak | Token::ParagraphBreak => {}
        }
    }
}
