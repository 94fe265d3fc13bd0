use crate::filter::TokenFilter;
use crate::rules::TIERS;
use crate::text::{char_len, truncate_chars};
use crate::token::{Token, TokenStream};

/// Strips the longest recognised inflectional suffix from `term`.
///
/// Tiers are tried longest first and the first hit wins; shorter tiers are
/// never consulted after it. A tier of length `n` only applies to terms of
/// more than `n + 1` code points, so a stripped term keeps at least two.
/// Terms that match nothing, including the empty term, come back unchanged.
pub fn stem(term: &str) -> &str {
    let len = char_len(term);
    TIERS
        .iter()
        .find(|tier| tier.applies_to(len) && tier.matching_suffix(term).is_some())
        .map_or(term, |tier| truncate_chars(term, tier.len))
}

/// Rewrites every unprotected token's term to its [`stem`].
#[derive(Debug, Clone, Copy, Default)]
pub struct HindiStemmerFilter;

impl HindiStemmerFilter {
    pub const NAME: &'static str = "stem_hi";

    pub fn new() -> Self {
        Self
    }
}

impl TokenFilter for HindiStemmerFilter {
    fn filter(&self, input: TokenStream) -> TokenStream {
        input
            .into_iter()
            .map(|token| {
                if token.protected {
                    return token;
                }
                let term = stem(&token.term).to_owned();
                Token { term, ..token }
            })
            .collect()
    }
}
