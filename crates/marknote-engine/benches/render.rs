use criterion::{Criterion, criterion_group, criterion_main};
use marknote_engine::{render, to_html};
mod common;

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    group.sample_size(10);

    for repeats in [10, 100, 1000] {
        let note = common::generate_note(repeats);
        group.bench_function(format!("note_x{repeats}"), |b| {
            b.iter(|| std::hint::black_box(render(std::hint::black_box(&note))));
        });
    }

    let line = common::generate_long_line(500);
    group.bench_function("long_inline_line", |b| {
        b.iter(|| std::hint::black_box(render(std::hint::black_box(&line))));
    });

    let blocks = render(&common::generate_note(100));
    group.bench_function("to_html", |b| {
        b.iter(|| std::hint::black_box(to_html(std::hint::black_box(&blocks))));
    });

    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
