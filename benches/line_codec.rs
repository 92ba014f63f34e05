use criterion::{black_box, criterion_group, criterion_main, Criterion};
use record_keeper::expense::{Expense, ExpenseStore};

fn build_sample_store(record_count: usize) -> ExpenseStore {
    let mut store = ExpenseStore::new();
    for idx in 0..record_count {
        let category = if idx % 2 == 0 { "Food" } else { "Travel" };
        store.add(Expense::new(
            "2025-01-01",
            category,
            format!("Entry {idx}"),
            1.25 + (idx % 100) as f64,
        ));
    }
    store
}

fn bench_line_codec(c: &mut Criterion) {
    let expense = Expense::new("2025-05-28", "Food", "Lunch at cafe", 12.5);
    let line = expense.to_line();

    c.bench_function("expense_to_line", |b| {
        b.iter(|| black_box(&expense).to_line())
    });

    c.bench_function("expense_from_line", |b| {
        b.iter(|| Expense::from_line(black_box(&line)).expect("parse line"))
    });
}

fn bench_store_scans(c: &mut Criterion) {
    let store = build_sample_store(black_box(10_000));

    c.bench_function("store_total_10k", |b| b.iter(|| black_box(store.total())));

    c.bench_function("store_filter_10k", |b| {
        b.iter(|| store.in_category(black_box("food")).count())
    });
}

criterion_group!(benches, bench_line_codec, bench_store_scans);
criterion_main!(benches);
