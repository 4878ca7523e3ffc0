//! Performance benchmarks for page-clip.
//!
//! Run with: `cargo bench`
//!
//! Benchmarks include:
//! - Whole-document and selection clips of a small article
//! - The paragraph scan on synthetic pages of growing size, where no meta
//!   source answers and every paragraph is scored

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use page_clip::{clip_selection, clip_summary, ClipOptions, Page, Range, RangeSelection, TreePathCodec};
use tokio::runtime::Runtime;

const SAMPLE_HTML: &str = r#"
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Sample Article | Sample Site</title>
    <meta property="og:image" content="/cover.jpg">
    <meta name="description" content="A sample article for benchmarking.">
    <link rel="icon" href="/favicon.ico">
</head>
<body>
    <nav>
        <a href="/">Home</a>
        <a href="/about">About</a>
    </nav>
    <article id="story">
        <h1>Sample Article Title</h1>
        <p>This is the first paragraph of the article. It contains some meaningful
        content, a few commas, and enough length to be scored.</p>
        <img src="/figure.jpg" width="640" height="400">
        <p>Here is a second paragraph with more content.</p>
    </article>
    <footer>
        <p>Copyright 2024</p>
    </footer>
</body>
</html>
"#;

fn runtime() -> Runtime {
    match tokio::runtime::Builder::new_current_thread().enable_all().build() {
        Ok(rt) => rt,
        Err(err) => panic!("failed to build runtime: {err}"),
    }
}

fn page(html: &str) -> Page {
    match Page::new(html, "https://example.com/sample") {
        Ok(page) => page,
        Err(err) => panic!("failed to build page: {err}"),
    }
}

fn bench_clip_summary(c: &mut Criterion) {
    let rt = runtime();
    let options = ClipOptions::default();

    c.bench_function("clip_summary", |b| {
        b.iter(|| {
            let page = page(black_box(SAMPLE_HTML));
            rt.block_on(clip_summary(&page, &options))
        });
    });
}

fn bench_clip_selection(c: &mut Criterion) {
    let rt = runtime();
    let options = ClipOptions::default();
    let page = page(SAMPLE_HTML);
    let range = Range::select_node_contents(page.document().select("#story").nodes()[0]);
    let Some(selection) = RangeSelection::new(&page, vec![range]) else {
        panic!("empty selection");
    };

    c.bench_function("clip_selection", |b| {
        b.iter(|| rt.block_on(clip_selection(black_box(&selection), &options, &TreePathCodec)));
    });
}

/// Pages with no meta tags, so the description falls through to the
/// paragraph scan.
fn bench_paragraph_scan(c: &mut Criterion) {
    let rt = runtime();
    let options = ClipOptions::default();
    let mut group = c.benchmark_group("paragraph_scan");

    for count in [10usize, 100, 1000] {
        let body: String = (0..count)
            .map(|i| format!(r#"<p class="footer-note"><a href="/{i}">Link {i}</a></p>"#))
            .collect();
        let html = format!("<html><head></head><body>{body}<p>{}</p></body></html>", "x, ".repeat(40));
        let page = page(&html);

        group.throughput(Throughput::Bytes(html.len() as u64));
        group.bench_with_input(BenchmarkId::new("clip_summary", count), &page, |b, page| {
            b.iter(|| rt.block_on(clip_summary(black_box(page), &options)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_clip_summary, bench_clip_selection, bench_paragraph_scan);
criterion_main!(benches);
