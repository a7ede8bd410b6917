// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for budget estimation.
//!
//! Covers form validation into a selection and the price computation itself,
//! using the options bundled with the application.

use criterion::{criterion_group, criterion_main, Criterion};
use inkfolio::application::estimator::estimate;
use inkfolio::domain::budget::{BudgetField, BudgetForm, BudgetSelection};
use inkfolio::infrastructure::catalog;
use std::hint::black_box;

fn filled_form() -> BudgetForm {
    let site = catalog::load_bundled().expect("bundled data");
    let mut form = BudgetForm::new();
    for field in BudgetField::ALL {
        let option = site.budget_options.group(field).last().cloned();
        form.set(field, option);
    }
    form
}

fn bench_estimate(c: &mut Criterion) {
    let mut group = c.benchmark_group("budget_estimation");
    let form = filled_form();
    let selection = BudgetSelection::try_from(&form).expect("complete form");

    group.bench_function("estimate", |b| {
        b.iter(|| black_box(estimate(black_box(&selection))));
    });

    group.bench_function("validate_and_estimate", |b| {
        b.iter(|| {
            let selection = BudgetSelection::try_from(black_box(&form)).map(|s| estimate(&s));
            black_box(selection)
        });
    });

    let empty = BudgetForm::new();
    group.bench_function("reject_incomplete", |b| {
        b.iter(|| black_box(BudgetSelection::try_from(black_box(&empty)).is_err()));
    });

    group.finish();
}

criterion_group!(benches, bench_estimate);
criterion_main!(benches);
