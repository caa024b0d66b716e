use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use fdnorm_core::{AttributeSet, Schema};

/// A relation over `0..attributes` where each attribute determines the next
/// and every third pair of neighbours determines the attribute after them.
fn build_schema(attributes: u32) -> Schema<u32> {
    let mut schema = Schema::new(0..attributes);
    for a in 1..attributes {
        schema
            .add_dependency([a], [(a + 1) % attributes])
            .expect("chain dependency is valid");
    }
    for a in (0..attributes.saturating_sub(2)).step_by(3) {
        schema
            .add_dependency([a, a + 1], [a + 2])
            .expect("pair dependency is valid");
    }
    schema
}

fn bench_normalization(c: &mut Criterion) {
    let small = build_schema(6);
    let medium = build_schema(10);
    let large = build_schema(16);

    let mut group = c.benchmark_group("normalization");

    for (name, schema) in [("small", &small), ("medium", &medium), ("large", &large)] {
        let start = AttributeSet::from([0, 1]);
        group.bench_function(format!("closure_{name}"), |b| {
            b.iter(|| black_box(schema).closure(black_box(&start), None));
        });
        group.bench_function(format!("minimal_cover_{name}"), |b| {
            b.iter(|| black_box(schema).minimal_cover(true));
        });
        group.bench_function(format!("candidate_keys_{name}"), |b| {
            b.iter(|| black_box(schema).candidate_keys());
        });
        group.bench_function(format!("classify_{name}"), |b| {
            b.iter(|| black_box(schema).classify());
        });
    }

    group.bench_function("three_nf_synthesis_medium", |b| {
        b.iter(|| black_box(&medium).three_nf_synthesis());
    });
    group.bench_function("bcnf_decomposition_small", |b| {
        b.iter(|| black_box(&small).bcnf_decomposition());
    });

    group.finish();
}

criterion_group!(benches, bench_normalization);
criterion_main!(benches);
