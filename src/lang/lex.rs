use super::token::{classify, Token};
use super::Column;

/// Split a line on whitespace and classify each word.
pub fn lex(s: &str) -> Vec<Token> {
    ForthLexer::new(s).map(|(_, token)| token).collect()
}

/// Like `lex` but keeps the byte range each token came from.
pub fn lex_columns(s: &str) -> Vec<(Column, Token)> {
    ForthLexer::new(s).collect()
}

struct ForthLexer<'a> {
    s: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
}

impl<'a> ForthLexer<'a> {
    fn new(s: &'a str) -> ForthLexer<'a> {
        ForthLexer {
            s,
            chars: s.char_indices().peekable(),
        }
    }

    fn whitespace(&mut self) {
        while let Some((_, ch)) = self.chars.peek() {
            if !ch.is_whitespace() {
                break;
            }
            self.chars.next();
        }
    }

    fn word(&mut self) -> Option<Column> {
        let start = self.chars.peek()?.0;
        let mut end = self.s.len();
        while let Some((index, ch)) = self.chars.peek() {
            if ch.is_whitespace() {
                end = *index;
                break;
            }
            self.chars.next();
        }
        Some(start..end)
    }
}

impl<'a> Iterator for ForthLexer<'a> {
    type Item = (Column, Token);

    fn next(&mut self) -> Option<Self::Item> {
        self.whitespace();
        let column = self.word()?;
        let token = classify(&self.s[column.clone()]);
        tracing::trace!(?column, %token, "lexed");
        Some((column, token))
    }
}
