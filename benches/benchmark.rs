// Ranking and list benchmarks
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use doclist_core::{sorted_by_surname, Filter, FilterCriteria, Record};
use doclist_similarity::rank;
use rand::prelude::*;

const SPECIALTIES: [&str; 5] = ["Cardiology", "Neurology", "Dermatology", "Oncology", "Pediatrics"];
const AREAS: [&str; 6] = ["North", "South", "East", "West", "Central", "Harbor"];
const SURNAMES: [&str; 6] = ["Young", "Zeta", "Adams", "Ávila", "Brown", "de Wit"];

fn generate_records(count: usize) -> Vec<Record> {
    let mut rng = rand::rng();
    (0..count)
        .map(|i| {
            Record::new(
                i as u64,
                format!("Doctor{} {}", i, SURNAMES[rng.random_range(0..SURNAMES.len())]),
                SPECIALTIES[rng.random_range(0..SPECIALTIES.len())],
                AREAS[rng.random_range(0..AREAS.len())],
                f64::from(rng.random_range(10..=50u32)) / 10.0,
            )
        })
        .collect()
}

fn benchmark_rank(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank");

    for size in [100, 1000, 10000].iter() {
        let records = generate_records(*size);
        let anchor = records[0].clone();
        group.bench_with_input(BenchmarkId::new("similar", size), size, |b, _| {
            b.iter(|| {
                let similar = rank(black_box(&records), black_box(&anchor));
                black_box(similar);
            });
        });
    }

    group.finish();
}

fn benchmark_list(c: &mut Criterion) {
    let mut group = c.benchmark_group("list");
    let records = generate_records(10000);
    let criteria = FilterCriteria::new().with_specialty("Cardiology").with_min_rating(3.0);

    group.bench_function("filter_and_sort", |b| {
        b.iter(|| {
            let listed = sorted_by_surname(criteria.apply(black_box(&records)));
            black_box(listed);
        });
    });

    group.finish();
}

criterion_group!(benches, benchmark_rank, benchmark_list);
criterion_main!(benches);
