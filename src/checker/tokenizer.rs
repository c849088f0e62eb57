use std::iter::Peekable;

use unicode_segmentation::{GraphemeIndices, UnicodeSegmentation};

/// A token's location in the source text.
///
/// `start` and `end` are half-open byte offsets into the original text,
/// so `&text[start..end] == text`. Callers that address positions in
/// another unit (UTF-16 columns, pixel layout) must do their own
/// conversion; the engine only promises byte offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span<'a> {
    pub start: usize,
    pub end: usize,
    pub text: &'a str,
}

/// Split text into word tokens with byte-offset spans.
///
/// A token is a maximal run of alphabetic characters, plus apostrophes
/// that sit between two letters (`don't` is one token). Digits,
/// punctuation, and whitespace separate tokens and never appear inside
/// one. The returned iterator is lazy; call `tokenize` again to restart.
pub fn tokenize(text: &str) -> Tokens<'_> {
    Tokens {
        text,
        graphemes: text.grapheme_indices(true).peekable(),
    }
}

pub struct Tokens<'a> {
    text: &'a str,
    graphemes: Peekable<GraphemeIndices<'a>>,
}

fn is_letter(grapheme: &str) -> bool {
    grapheme.chars().next().is_some_and(char::is_alphabetic)
}

fn is_apostrophe(grapheme: &str) -> bool {
    grapheme == "'" || grapheme == "\u{2019}"
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Span<'a>;

    fn next(&mut self) -> Option<Span<'a>> {
        // Skip separators up to the next letter.
        let (start, first) = loop {
            let (idx, grapheme) = self.graphemes.next()?;
            if is_letter(grapheme) {
                break (idx, grapheme);
            }
        };

        let mut end = start + first.len();
        while let Some(&(idx, grapheme)) = self.graphemes.peek() {
            if is_letter(grapheme) {
                end = idx + grapheme.len();
                self.graphemes.next();
            } else if is_apostrophe(grapheme) && self.followed_by_letter() {
                self.graphemes.next();
                // The letter after the apostrophe joins the token.
                if let Some((next_idx, next_grapheme)) = self.graphemes.next() {
                    end = next_idx + next_grapheme.len();
                }
            } else {
                break;
            }
        }

        Some(Span {
            start,
            end,
            text: &self.text[start..end],
        })
    }
}

impl<'a> Tokens<'a> {
    /// Whether the grapheme after the peeked one is a letter.
    fn followed_by_letter(&self) -> bool {
        let mut ahead = self.graphemes.clone();
        ahead.next();
        matches!(ahead.next(), Some((_, grapheme)) if is_letter(grapheme))
    }
}
