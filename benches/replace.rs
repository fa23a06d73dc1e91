use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use mathmask_core::{replace_equations_default, Replacer};

fn build_document(sections: usize) -> String {
    let mut doc = String::new();
    for i in 0..sections {
        doc.push_str(&format!("\\section{{Part {}}}\n", i));
        doc.push_str("Consider $x_i + y_i$ and the sum $\\sum_k a_k$ below.\n");
        doc.push_str("\\begin{equation}\n  f(x) = \\int_0^1 g(t)\\,dt\n\\end{equation}\n");
        doc.push_str("\\begin{align*}\n  a &= b \\\\\n  c &= d\n\\end{align*}\n");
        doc.push_str("Plain prose without any mathematics at all, repeated for bulk.\n");
    }
    doc
}

fn bench_replace(c: &mut Criterion) {
    let doc = build_document(500);
    let mut group = c.benchmark_group("replace");
    group.throughput(Throughput::Bytes(doc.len() as u64));

    group.bench_function("function", |b| {
        b.iter(|| replace_equations_default(black_box(&doc)))
    });

    let replacer = Replacer::default();
    group.bench_function("replacer_with_stats", |b| {
        b.iter(|| replacer.replace_with_stats(black_box(&doc)))
    });

    group.finish();
}

criterion_group!(benches, bench_replace);
criterion_main!(benches);
