use criterion::{black_box, criterion_group, criterion_main, Criterion};

use assessquiz_core::dataset::builtin_catalog;
use assessquiz_core::model::{AssessmentItem, CaseSolution, Selection};
use assessquiz_core::scoring::ScoringEngine;
use assessquiz_core::traits::ReferenceData;

fn make_large_key(n: usize) -> (Vec<CaseSolution>, Vec<AssessmentItem>) {
    let items: Vec<AssessmentItem> = (0..n * 2)
        .map(|i| AssessmentItem {
            id: format!("item-{i}"),
            name: format!("Item {i}"),
            category: format!("cat-{}", i % 12),
        })
        .collect();
    let key = (0..n)
        .map(|i| CaseSolution {
            case_id: "bench".into(),
            item_id: format!("item-{}", i * 2),
            priority_weight: (i % 5 + 1) as u32,
            must_have: i % 3 == 0,
            rationale: String::new(),
        })
        .collect();
    (key, items)
}

fn bench_builtin_case(c: &mut Criterion) {
    let mut group = c.benchmark_group("score_builtin");
    let catalog = builtin_catalog();
    let engine = ScoringEngine::default();
    let key = catalog.answer_key("case-1");

    group.bench_function("must_haves_only", |b| {
        let selection: Selection = ["eval-4", "eval-8", "eval-13", "eval-14"]
            .into_iter()
            .collect();
        b.iter(|| engine.score(black_box(&key), black_box(&catalog.items), &selection))
    });

    group.bench_function("everything_selected", |b| {
        let selection: Selection = catalog.items.iter().map(|i| i.id.clone()).collect();
        b.iter(|| engine.score(black_box(&key), black_box(&catalog.items), &selection))
    });

    group.finish();
}

fn bench_large_key(c: &mut Criterion) {
    let mut group = c.benchmark_group("score_large");
    let engine = ScoringEngine::default();

    for n in [50usize, 500] {
        let (solutions, items) = make_large_key(n);
        let key: Vec<&CaseSolution> = solutions.iter().collect();
        let selection: Selection = items.iter().step_by(3).map(|i| i.id.clone()).collect();
        group.bench_function(format!("n={n}"), |b| {
            b.iter(|| engine.score(black_box(&key), black_box(&items), &selection))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_builtin_case, bench_large_key);
criterion_main!(benches);
