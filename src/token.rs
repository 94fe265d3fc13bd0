use serde::{Deserialize, Serialize};

/// Lexical category assigned by the tokenizer that produced the token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenType {
    #[default]
    AlphaNumeric,
    Ideographic,
    Numeric,
    DateTime,
    Shingle,
    Single,
    Double,
    Boolean,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub term: String,
    /// Byte offset of the token's first byte in the source text.
    pub start: usize,
    /// Byte offset one past the token's last byte in the source text.
    pub end: usize,
    /// 1-based ordinal of the token in its stream.
    pub position: usize,
    #[serde(default)]
    pub token_type: TokenType,
    /// Set upstream for terms that no filter may rewrite.
    #[serde(default, alias = "keyword")]
    pub protected: bool,
}

pub type TokenStream = Vec<Token>;

impl Token {
    pub fn new(term: impl Into<String>, start: usize, end: usize, position: usize) -> Self {
        Self {
            term: term.into(),
            start,
            end,
            position,
            token_type: TokenType::AlphaNumeric,
            protected: false,
        }
    }

    pub fn protected(self) -> Self {
        Self { protected: true, ..self }
    }

    /// A copy of this token with `term` swapped out and every other attribute kept.
    pub fn with_term(&self, term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            ..self.clone()
        }
    }
}

/// Splits `text` on whitespace into a stream of unprotected tokens with byte
/// offsets and 1-based positions.
pub fn whitespace_tokens(text: &str) -> TokenStream {
    let mut tokens = Vec::new();
    let mut start = None;
    for (idx, c) in text.char_indices() {
        match (c.is_whitespace(), start) {
            (true, Some(s)) => {
                tokens.push(Token::new(&text[s..idx], s, idx, tokens.len() + 1));
                start = None;
            }
            (false, None) => start = Some(idx),
            _ => {}
        }
    }
    if let Some(s) = start {
        tokens.push(Token::new(&text[s..], s, text.len(), tokens.len() + 1));
    }
    tokens
}
