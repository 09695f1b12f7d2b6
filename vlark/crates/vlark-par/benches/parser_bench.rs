//! Parser Benchmarks
//!
//! Measures the outline parser on pre-scanned tokens.
//! Run with: `cargo bench --package vlark-par`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use vlark_lex::{tokenize, LexerConfig, SourceBuffer, Token};
use vlark_par::{Ast, Parser};
use vlark_util::Handler;

const UNIT: &str = r#"
library ieee;
use ieee.std_logic_1164.all;

entity shifter is
    generic (N : positive := 8);
    port (clk : in std_logic; d : in std_logic; q : out std_logic_vector(N - 1 downto 0));
end entity shifter;

architecture rtl of shifter is
    signal r : std_logic_vector(N - 1 downto 0);
begin
    process (clk)
    begin
        if rising_edge(clk) then
            r <= r(N - 2 downto 0) & d;
        end if;
    end process;
    q <= r;
end architecture rtl;
"#;

fn scan(source: &str) -> (SourceBuffer, Vec<Token>) {
    let handler = Handler::new();
    let buffer =
        SourceBuffer::from_source(source, &LexerConfig::default(), &handler).unwrap_or_default();
    let tokens = tokenize(&buffer, &handler).unwrap_or_default();
    (buffer, tokens)
}

fn parse_tokens(buffer: &SourceBuffer, tokens: &[Token]) -> Ast {
    let handler = Handler::new();
    Parser::new(tokens, buffer, &handler).parse()
}

fn bench_parser_unit(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser");

    let (buffer, tokens) = scan(UNIT);
    group.throughput(Throughput::Elements(tokens.len() as u64));
    group.bench_function("single_unit", |b| {
        b.iter(|| parse_tokens(black_box(&buffer), black_box(&tokens)))
    });

    let source = UNIT.repeat(100);
    let (buffer, tokens) = scan(&source);
    group.throughput(Throughput::Elements(tokens.len() as u64));
    group.bench_function("hundred_units", |b| {
        b.iter(|| parse_tokens(black_box(&buffer), black_box(&tokens)))
    });

    group.finish();
}

fn bench_parser_end_to_end(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser_end_to_end");

    group.throughput(Throughput::Bytes(UNIT.len() as u64));
    group.bench_function("scan_and_parse", |b| {
        b.iter(|| {
            let (buffer, tokens) = scan(black_box(UNIT));
            parse_tokens(&buffer, &tokens)
        })
    });

    group.finish();
}

criterion_group!(benches, bench_parser_unit, bench_parser_end_to_end);
criterion_main!(benches);
