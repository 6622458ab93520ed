use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rusty_sbpfx::currency::Currency;
use rusty_sbpfx::parser::parse_exchange_rate_text;
use rusty_sbpfx::types::ParseContext;

fn full_sheet() -> String {
    let currencies = Currency::all();
    let mut text = String::from("STATE BANK OF PAKISTAN\nCURRENCY\n");
    for c in &currencies {
        text.push_str(c.code());
        text.push('\n');
    }
    text.push_str("READY\n");
    for i in 0..currencies.len() {
        text.push_str(&format!("{}.{:04}\n", 100 + i, i * 37));
    }
    text.push_str("Exchange Rates for Mark to Market are indicative\n");
    text
}

fn benchmark_parse(c: &mut Criterion) {
    let text = full_sheet();
    let ctx = ParseContext::new(NaiveDate::from_ymd_opt(2025, 8, 27).unwrap(), "bench");

    c.bench_function("parse_full_sheet", |b| {
        b.iter(|| parse_exchange_rate_text(black_box(&text), black_box(&ctx)).unwrap())
    });
}

criterion_group!(benches, benchmark_parse);
criterion_main!(benches);
