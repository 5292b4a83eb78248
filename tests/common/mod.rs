use descent::tokenizer::{PatternDef, Tokenizer};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[ctor::ctor]
fn init_tests() {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}

/// `number`, `plus` and `minus`, with the default whitespace pattern.
#[allow(dead_code)]
pub fn arithmetic_tokenizer() -> Tokenizer {
    Tokenizer::with_definitions([
        PatternDef::regex("number", "[0-9]+"),
        PatternDef::literal("plus", "+"),
        PatternDef::literal("minus", "-"),
    ])
    .unwrap()
}
