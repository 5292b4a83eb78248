use criterion::{black_box, criterion_group, criterion_main, Criterion};
use descent::analyzer::prelude::*;
use descent::tokenizer::{PatternDef, Tokenizer};

fn tokenizer() -> Tokenizer {
    Tokenizer::with_definitions([
        PatternDef::regex("number", "[0-9]+"),
        PatternDef::literal("plus", "+"),
        PatternDef::literal("minus", "-"),
    ])
    .unwrap()
}

fn expr(s: &mut ParseState) -> ParseResult {
    cnode(
        "expr",
        rule(|s| {
            Ok(match_token("number").parse(s)?
                && many(bt(rule(|s| {
                    Ok(alt(vec![Box::new(match_token("plus")), Box::new(match_token("minus"))])
                        .parse(s)?
                        && match_token("number").parse(s)?)
                })))
                .parse(s)?)
        }),
    )
    .parse(s)
}

fn input(terms: usize) -> String {
    (0..terms)
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(" + ")
}

fn bench_tokenize(c: &mut Criterion) {
    let input = input(1000);
    let mut tokenizer = tokenizer();
    c.bench_function("tokenize 1000 terms", |b| {
        b.iter(|| tokenizer.scan(black_box(&input)).unwrap())
    });
}

fn bench_parse(c: &mut Criterion) {
    let input = input(1000);
    let mut tokenizer = tokenizer();
    c.bench_function("parse 1000 terms", |b| {
        b.iter(|| descent::parse(&mut tokenizer, black_box(&input), &expr).unwrap())
    });
}

criterion_group!(benches, bench_tokenize, bench_parse);
criterion_main!(benches);
