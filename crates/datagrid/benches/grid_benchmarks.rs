#![forbid(unsafe_code)]

//! Benchmarks for the datagrid derivation pipeline.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use datagrid::column::Column;
use datagrid::grid::DataGrid;
use datagrid::row::Row;

/// Simple record for benchmarking.
#[derive(Clone)]
struct BenchRecord {
    id: u32,
    name: String,
    rank: u32,
}

impl Row for BenchRecord {
    type Key = u32;

    fn key(&self) -> u32 {
        self.id
    }
}

fn build_grid(rows: u32) -> DataGrid<BenchRecord> {
    let columns = vec![
        Column::new("name", "Name", |r: &BenchRecord| r.name.clone())
            .width(24)
            .sorted_by_text(),
        Column::new("rank", "Rank", |r: &BenchRecord| r.rank.to_string())
            .width(8)
            .sorted_by(|a, b| a.rank.cmp(&b.rank)),
    ];
    let data = (0..rows)
        .map(|i| BenchRecord {
            id: i,
            name: format!("record {:05}", (i * 7919) % rows.max(1)),
            rank: (i * 31) % 997,
        })
        .collect();
    DataGrid::new(columns, data)
}

fn bench_derivation(c: &mut Criterion) {
    let plain = build_grid(10_000);
    c.bench_function("derived_10k", |b| {
        b.iter(|| black_box(plain.derived().len()));
    });

    let mut grid = build_grid(10_000).filter_by("name");
    grid.set_filter_value("1");
    grid.cycle_sort("rank");
    c.bench_function("derived_10k_filtered_sorted", |b| {
        b.iter(|| black_box(grid.derived().len()));
    });
    c.bench_function("page_rows_10k", |b| {
        b.iter(|| black_box(grid.page_rows().len()));
    });
    c.bench_function("view_10k", |b| {
        b.iter(|| black_box(grid.view().len()));
    });
}

criterion_group!(benches, bench_derivation);
criterion_main!(benches);
