//! Team analysis throughput: classification and full report generation.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion, Throughput};
use pokecoach::analysis::{analyze_team, classify, BaseStats, Entity, SynergyMode};
use pokecoach::data::PokemonType;

fn stats(seed: u32) -> BaseStats {
    BaseStats {
        hp: 40 + seed % 80,
        attack: 50 + (seed * 7) % 90,
        defense: 45 + (seed * 11) % 85,
        special_attack: 50 + (seed * 13) % 90,
        special_defense: 45 + (seed * 17) % 85,
        speed: 30 + (seed * 19) % 100,
    }
}

fn team(size: u32) -> Vec<Entity> {
    (1..=size)
        .map(|i| {
            let tag = PokemonType::ALL[(i as usize * 5) % PokemonType::ALL.len()];
            Entity::new(i, format!("Member{i}"), vec![tag], stats(i)).expect("valid bench member")
        })
        .collect()
}

fn bench_classify(c: &mut Criterion) {
    let inputs: Vec<BaseStats> = (0..1_000).map(stats).collect();
    let mut group = c.benchmark_group("classify");
    group.throughput(Throughput::Elements(inputs.len() as u64));
    group.bench_function("classify_1000", |b| {
        b.iter(|| {
            for s in &inputs {
                black_box(classify(black_box(s)));
            }
        })
    });
    group.finish();
}

fn bench_analyze(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze_team");
    group.throughput(Throughput::Elements(1));

    for size in [1_u32, 3, 6] {
        let members = team(size);
        group.bench_function(format!("team_of_{size}"), |b| {
            b.iter_batched(
                || members.clone(),
                |m| black_box(analyze_team(&m, SynergyMode::PerPair)),
                BatchSize::SmallInput,
            );
        });
    }

    let six = team(6);
    group.bench_function("team_of_6_seeded", |b| {
        b.iter(|| black_box(analyze_team(&six, SynergyMode::Seeded(7))))
    });

    group.finish();
}

criterion_group!(benches, bench_classify, bench_analyze);
criterion_main!(benches);
