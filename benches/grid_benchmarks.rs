use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use gridstate::*;

struct Row {
    id: String,
    title: String,
    status: &'static str,
    tags: Vec<String>,
    views: f64,
}

fn make_rows(count: usize) -> Vec<Row> {
    (0..count)
        .map(|i| Row {
            id: i.to_string(),
            title: format!("Article number {}", i),
            status: if i % 3 == 0 { "draft" } else { "published" },
            tags: vec![format!("tag{}", i % 7), format!("tag{}", i % 11)],
            views: (i % 997) as f64,
        })
        .collect()
}

fn field(row: &Row, column: &str) -> FieldValue {
    match column {
        "title" => FieldValue::from(row.title.as_str()),
        "status" => FieldValue::from(row.status),
        "tags" => FieldValue::from(row.tags.clone()),
        "views" => FieldValue::from(row.views),
        _ => FieldValue::Null,
    }
}

fn search_text(row: &Row) -> String {
    format!("{} {}", row.title, row.status)
}

fn bench_visible_indices(c: &mut Criterion) {
    let mut group = c.benchmark_group("visible_indices");

    for size in [100, 1000, 10000].iter() {
        let rows = make_rows(*size);
        let mut filters = FilterSet::new();
        filters.toggle_value("status", "published");
        filters.toggle_value("tags", "tag3");

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                visible_indices(
                    black_box(&rows),
                    black_box("number 4"),
                    &filters,
                    &field,
                    &search_text,
                )
            });
        });
    }
    group.finish();
}

fn bench_sort_indices(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort_indices");

    for size in [100, 1000, 10000].iter() {
        let rows = make_rows(*size);
        let spec = SortSpec::descending("views");

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| {
                let mut indices: Vec<usize> = (0..size).collect();
                sort_indices(&mut indices, black_box(&rows), Some(&spec), &field);
                indices
            });
        });
    }
    group.finish();
}

fn bench_unique_values(c: &mut Criterion) {
    let mut group = c.benchmark_group("unique_values");

    for size in [100, 1000, 10000].iter() {
        let rows = make_rows(*size);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| unique_values(black_box(&rows), "tags", &field));
        });
    }
    group.finish();
}

fn bench_controller_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("controller_pipeline");

    for size in [1000, 10000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| {
                let mut grid = GridController::new(
                    vec![
                        ColumnDef::new("title", "Title", 240.0),
                        ColumnDef::new("status", "Status", 120.0),
                        ColumnDef::new("tags", "Tags", 160.0),
                        ColumnDef::new("views", "Views", 100.0),
                    ],
                    |r: &Row| r.id.clone(),
                    field,
                    search_text,
                )
                .unwrap();
                grid.set_records(make_rows(size));
                grid.toggle_filter_value("status", "published");
                grid.set_sort("views", SortOrder::Descending);
                grid.visible_len()
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_visible_indices,
    bench_sort_indices,
    bench_unique_values,
    bench_controller_pipeline
);
criterion_main!(benches);
