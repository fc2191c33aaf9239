use criterion::{Criterion, criterion_group, criterion_main};

fn bench_render_block(c: &mut Criterion) {
    c.bench_function("render_block_png", |b| {
        b.iter(|| {
            let _ = regkeygen_lib::template::render(regkeygen_lib::template::ENTRY_TEMPLATE, "png");
        })
    });
}

fn bench_render_builtin_list(c: &mut Criterion) {
    c.bench_function("render_builtin_list", |b| {
        b.iter(|| {
            let _ = regkeygen_lib::registry::registry_entries(
                regkeygen_lib::registry::SUPPORTED_EXTENSIONS,
            );
        })
    });
}

criterion_group!(benches, bench_render_block, bench_render_builtin_list);
criterion_main!(benches);
