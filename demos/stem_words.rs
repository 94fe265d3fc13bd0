use hindi_stem::{FilterConfig, FilterRegistry};
use hindi_stem::token::whitespace_tokens;

fn main() {
    let text = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    let text = if text.is_empty() { "लडकियों ने किताबें पढ़ीं और घरों को लौट जाएंगी".to_string() } else { text };

    let registry = FilterRegistry::with_builtins();
    let filter = match registry.build("stem_hi", &FilterConfig::new()) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let tokens = filter.filter(whitespace_tokens(&text));
    match serde_json::to_string_pretty(&tokens) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("failed to serialize tokens: {}", e),
    }
}
