pub mod token;
pub mod text;
pub mod rules;
pub mod filter;
pub mod stemmer;
pub mod registry;
pub mod error;

pub use error::{Error, Result};
pub use filter::{FilterChain, TokenFilter};
pub use registry::{FilterConfig, FilterRegistry};
pub use stemmer::{HindiStemmerFilter, stem};
pub use token::{Token, TokenStream, TokenType};
