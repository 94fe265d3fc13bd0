use crate::token::TokenStream;

/// A stage of an analysis pipeline that rewrites a token stream.
pub trait TokenFilter: Send + Sync {
    fn filter(&self, input: TokenStream) -> TokenStream;
}

/// Filters applied one after another, in insertion order.
#[derive(Default)]
pub struct FilterChain {
    filters: Vec<Box<dyn TokenFilter>>,
}

impl FilterChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, filter: Box<dyn TokenFilter>) {
        self.filters.push(filter);
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl TokenFilter for FilterChain {
    fn filter(&self, input: TokenStream) -> TokenStream {
        self.filters.iter().fold(input, |stream, f| f.filter(stream))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::Token;

    struct Suffixer(&'static str);

    impl TokenFilter for Suffixer {
        fn filter(&self, input: TokenStream) -> TokenStream {
            input.iter().map(|t| t.with_term(format!("{}{}", t.term, self.0))).collect()
        }
    }

    #[test]
    fn test_empty_chain_is_identity() {
        let chain = FilterChain::new();
        assert!(chain.is_empty());
        let tokens = vec![Token::new("घर", 0, 6, 1)];
        assert_eq!(chain.filter(tokens.clone()), tokens);
    }

    #[test]
    fn test_chain_applies_in_order() {
        let mut chain = FilterChain::new();
        chain.push(Box::new(Suffixer("a")));
        chain.push(Box::new(Suffixer("b")));
        assert_eq!(chain.len(), 2);
        let out = chain.filter(vec![Token::new("x", 0, 1, 1)]);
        assert_eq!(out[0].term, "xab");
    }
}
