use benchplot::report::build_figure;
use benchplot::{CategoryView, Table};
use criterion::{black_box, criterion_group, Criterion};

const LABELS: [&str; 6] = [
    "CoarseGrainList_insert",
    "CoarseGrainList_mixed",
    "LockFreeList_insert",
    "LockFreeList_mixed",
    "LockFreeListNoReclaim_insert",
    "LockFreeListNoReclaim_mixed",
];

fn make_results(nr_runs: usize) -> String {
    let mut results = String::new();
    for run in 0..nr_runs {
        for (idx, label) in LABELS.iter().enumerate() {
            let mut threads = 1;
            while threads <= 128 {
                results.push_str(&format!("{},{},{}\n", label, threads, 10 * (run + idx + threads)));
                threads *= 2;
            }
        }
    }
    results
}

fn bench_load(c: &mut Criterion) {
    let results = make_results(100);
    c.bench_function("load results", |b| {
        b.iter(|| Table::from_reader(black_box(results.as_bytes())).map(|t| t.len()))
    });
}

fn bench_categorize(c: &mut Criterion) {
    let table = Table::from_reader(make_results(100).as_bytes()).expect("failed to load bench results");
    c.bench_function("categorize and group", |b| {
        b.iter(|| CategoryView::matching(black_box(&table), "insert").series().len())
    });
}

fn bench_render(c: &mut Criterion) {
    let table = Table::from_reader(make_results(1).as_bytes()).expect("failed to load bench results");
    let (figure, _) = build_figure(&table, "insert", "Insert-only Benchmark");
    c.bench_function("render insert figure", |b| b.iter(|| figure.render_to_buffer().map(|buf| buf.len())));
}

criterion_group!(benches, bench_load, bench_categorize, bench_render);
