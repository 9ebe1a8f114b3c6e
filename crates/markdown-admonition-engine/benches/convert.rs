use criterion::{Criterion, criterion_group, criterion_main};
use markdown_admonition_engine::{Environment, MarkdownConverter};
use pulldown_cmark::Parser;
mod common;

fn bench_plain_markdown(c: &mut Criterion) {
    let mut group = c.benchmark_group("plain");
    group.sample_size(10);

    let content = common::generate_markdown_content(100);
    group.bench_function("pulldown_cmark_baseline", |b| {
        b.iter(|| {
            let mut out = String::new();
            pulldown_cmark::html::push_html(&mut out, Parser::new(std::hint::black_box(&content)));
            std::hint::black_box(out);
        });
    });

    let converter = MarkdownConverter::new(Environment::commonmark());
    group.bench_function("converter_without_extensions", |b| {
        b.iter(|| std::hint::black_box(converter.convert(std::hint::black_box(&content))));
    });

    group.finish();
}

fn bench_admonitions(c: &mut Criterion) {
    let mut group = c.benchmark_group("admonitions");
    group.sample_size(10);

    let content = common::generate_admonition_document(200);
    let converter = MarkdownConverter::default();

    group.bench_function("parse", |b| {
        b.iter(|| std::hint::black_box(converter.parse(std::hint::black_box(&content))));
    });

    let doc = converter.parse(&content);
    group.bench_function("render", |b| {
        b.iter(|| std::hint::black_box(converter.render(std::hint::black_box(&doc))));
    });

    group.bench_function("convert", |b| {
        b.iter(|| std::hint::black_box(converter.convert(std::hint::black_box(&content))));
    });

    group.finish();
}

criterion_group!(benches, bench_plain_markdown, bench_admonitions);
criterion_main!(benches);
