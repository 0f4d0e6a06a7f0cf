use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use invpath::path::encoder;
use invpath::{CanonicalPath, RelativePath};

const SHORT: &str = "/t;acme/e;prod";
const FEED: &str = "/t;acme/e;prod/f;agent-7/r;host/r;nic0";
const ESCAPED: &str = r"/t;ac\/me/e;pr\;od/r;C:\\disk\/part";

fn nested(depth: usize) -> String {
    let mut text = String::from("/t;acme/e;prod");
    for i in 0..depth {
        text.push_str(&format!("/r;r{i}"));
    }
    text
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for (name, text) in [("short", SHORT), ("feed", FEED), ("escaped", ESCAPED)] {
        group.bench_with_input(BenchmarkId::new("canonical", name), &text, |b, &text| {
            b.iter(|| black_box(text).parse::<CanonicalPath>());
        });
    }

    // Benchmark deep resource chains
    for depth in [4, 16, 64] {
        let text = nested(depth);
        group.bench_with_input(BenchmarkId::new("nested", depth), &text, |b, text| {
            b.iter(|| black_box(text.as_str()).parse::<CanonicalPath>());
        });
    }

    group.bench_function("relative", |b| {
        b.iter(|| black_box("../../f;agent/m;cpu").parse::<RelativePath>());
    });

    group.finish();
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    for (name, text) in [("feed", FEED), ("escaped", ESCAPED)] {
        let path: CanonicalPath = text.parse().expect("benchmark path parses");
        group.bench_function(name, |b| {
            b.iter(|| encoder::encode(black_box(path.path())));
        });
    }

    group.finish();
}

fn bench_navigation(c: &mut Criterion) {
    let mut group = c.benchmark_group("navigation");
    let path: CanonicalPath = nested(32).parse().expect("benchmark path parses");

    // Window moves only; no copying
    group.bench_function("up_down", |b| {
        b.iter(|| black_box(&path).up_by(8).down_by(8));
    });

    group.bench_function("ascending_iter", |b| {
        b.iter(|| black_box(&path).ascending_iter().count());
    });

    group.bench_function("ids", |b| {
        b.iter(|| black_box(&path).ids().resource_id());
    });

    group.finish();
}

fn bench_apply(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply");
    let base: CanonicalPath = FEED.parse().expect("benchmark path parses");

    for (name, text) in [
        ("sibling", "../r;nic1"),
        ("metric", "../../m;cpu"),
        ("climb", "../../../../e;staging"),
    ] {
        let rel: RelativePath = text.parse().expect("benchmark path parses");
        group.bench_function(name, |b| {
            b.iter(|| rel.apply_to(black_box(&base)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_parse,
    bench_encode,
    bench_navigation,
    bench_apply
);
criterion_main!(benches);
