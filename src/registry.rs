use std::collections::HashMap;

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::filter::{FilterChain, TokenFilter};
use crate::stemmer::HindiStemmerFilter;

/// Constructor parameters for a token filter, as a JSON object.
pub type FilterConfig = Map<String, Value>;

pub type FilterConstructor = fn(&FilterConfig) -> Result<Box<dyn TokenFilter>>;

/// Token filters addressable by name, so pipelines can be described as data.
#[derive(Default)]
pub struct FilterRegistry {
    constructors: HashMap<String, FilterConstructor>,
}

impl FilterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with every filter this crate ships.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.constructors.insert(HindiStemmerFilter::NAME.to_string(), hindi_stemmer);
        registry
    }

    pub fn register(&mut self, name: &str, ctor: FilterConstructor) -> Result<()> {
        if self.constructors.contains_key(name) {
            return Err(Error::DuplicateFilter(name.to_string()));
        }
        debug!(filter = name, "registered token filter");
        self.constructors.insert(name.to_string(), ctor);
        Ok(())
    }

    pub fn build(&self, name: &str, config: &FilterConfig) -> Result<Box<dyn TokenFilter>> {
        let ctor = self
            .constructors
            .get(name)
            .ok_or_else(|| Error::UnknownFilter(name.to_string()))?;
        debug!(filter = name, "building token filter");
        ctor(config)
    }

    /// Builds each named filter and chains them in the given order.
    pub fn build_chain(&self, stages: &[(&str, FilterConfig)]) -> Result<FilterChain> {
        let mut chain = FilterChain::new();
        for (name, config) in stages {
            chain.push(self.build(name, config)?);
        }
        Ok(chain)
    }

    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.constructors.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

fn hindi_stemmer(config: &FilterConfig) -> Result<Box<dyn TokenFilter>> {
    for key in config.keys() {
        warn!(filter = HindiStemmerFilter::NAME, key = key.as_str(), "ignoring unsupported option");
    }
    Ok(Box::new(HindiStemmerFilter::new()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::Token;
    use serde_json::json;

    fn config(value: Value) -> FilterConfig {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {}", other),
        }
    }

    #[test]
    fn test_builtins() {
        let registry = FilterRegistry::with_builtins();
        assert_eq!(registry.names(), vec!["stem_hi"]);
        let filter = registry.build("stem_hi", &FilterConfig::new()).unwrap();
        let out = filter.filter(vec![Token::new("घरों", 0, 12, 1)]);
        assert_eq!(out[0].term, "घर");
    }

    #[test]
    fn test_unknown_filter() {
        let registry = FilterRegistry::new();
        let err = registry.build("stem_hi", &FilterConfig::new()).err().unwrap();
        assert!(matches!(err, Error::UnknownFilter(ref n) if n == "stem_hi"));
        assert_eq!(err.to_string(), "no token filter registered under name 'stem_hi'");
    }

    #[test]
    fn test_duplicate_registration() {
        let mut registry = FilterRegistry::with_builtins();
        let err = registry.register("stem_hi", hindi_stemmer).unwrap_err();
        assert!(matches!(err, Error::DuplicateFilter(_)));
        registry.register("stem_hi_light", hindi_stemmer).unwrap();
        assert_eq!(registry.names(), vec!["stem_hi", "stem_hi_light"]);
    }

    #[test]
    fn test_extra_options_are_ignored() {
        let registry = FilterRegistry::with_builtins();
        let filter = registry.build("stem_hi", &config(json!({ "aggressive": true }))).unwrap();
        let out = filter.filter(vec![Token::new("बचा", 0, 9, 1)]);
        assert_eq!(out[0].term, "बच");
    }

    #[test]
    fn test_build_chain() {
        let registry = FilterRegistry::with_builtins();
        let chain = registry
            .build_chain(&[("stem_hi", FilterConfig::new()), ("stem_hi", FilterConfig::new())])
            .unwrap();
        assert_eq!(chain.len(), 2);
        // second pass strips again: "लडकियों" -> "लडक" -> "लडक"
        let out = chain.filter(vec![Token::new("लडकियों", 0, 21, 1)]);
        assert_eq!(out[0].term, "लडक");

        let err = registry.build_chain(&[("lowercase", FilterConfig::new())]).err().unwrap();
        assert!(matches!(err, Error::UnknownFilter(_)));
    }
}
