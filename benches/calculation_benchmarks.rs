//! Performance benchmarks for the salary calculation engine.
//!
//! This benchmark suite measures the filter/reduce over rosters of
//! increasing size, with a salary threshold and a department membership
//! condition applied together.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;
use std::sync::Arc;

use salary_engine::calculation::average_salary;
use salary_engine::models::{Department, Employee};
use salary_engine::predicate::{Predicate, salary_above, works_in};

/// Creates a roster of the given size with salaries cycling over a range.
fn create_roster(size: usize) -> Vec<Arc<Employee>> {
    (0..size)
        .map(|i| {
            Arc::new(Employee::new(
                format!("emp_{i:05}"),
                Decimal::from((i % 500) as u64 * 10),
            ))
        })
        .collect()
}

/// Puts every fourth roster member into a department.
fn create_department(roster: &[Arc<Employee>]) -> Arc<Department> {
    Arc::new(Department::new(
        "sales",
        roster.iter().step_by(4).cloned().collect(),
    ))
}

fn bench_average_salary(c: &mut Criterion) {
    let mut group = c.benchmark_group("average_salary");

    for size in [100usize, 1_000, 10_000] {
        let roster = create_roster(size);
        let sales = create_department(&roster);
        let conditions: Vec<Predicate> =
            vec![salary_above(Decimal::from(1_000u32)), works_in(&sales)];

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &roster, |b, roster| {
            b.iter(|| average_salary(black_box(roster), black_box(&conditions)));
        });
    }

    group.finish();
}

fn bench_threshold_only(c: &mut Criterion) {
    let roster = create_roster(1_000);
    let conditions: Vec<Predicate> = vec![salary_above(Decimal::from(1_000u32))];

    c.bench_function("average_salary/threshold_only_1000", |b| {
        b.iter(|| average_salary(black_box(&roster), black_box(&conditions)));
    });
}

criterion_group!(benches, bench_average_salary, bench_threshold_only);
criterion_main!(benches);
