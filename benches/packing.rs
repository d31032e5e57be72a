use basepair_pack::{PackedSequence, Symbol};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Cycles through the ten base pairs in code order
fn generate_ordered(pairs: usize) -> String {
    Symbol::ALL
        .iter()
        .cycle()
        .take(pairs)
        .map(|s| s.as_str())
        .collect()
}

/// Generate pseudo-random base-pair text in mixed orientation
fn generate_random(pairs: usize) -> String {
    const BASES: [char; 4] = ['A', 'T', 'C', 'G'];
    let mut result = String::with_capacity(pairs * 2);
    let mut seed = 12345u64;

    for _ in 0..pairs * 2 {
        // Simple LCG random
        seed = seed.wrapping_mul(1103515245).wrapping_add(12345);
        result.push(BASES[((seed >> 16) % 4) as usize]);
    }
    result
}

fn bench_pack(c: &mut Criterion) {
    let sizes = [1_000, 10_000, 100_000];
    let mut group = c.benchmark_group("pack");

    for size in sizes.iter() {
        let ordered = generate_ordered(*size);
        let random = generate_random(*size);

        group.bench_with_input(BenchmarkId::new("ordered", size), &ordered, |b, data| {
            b.iter(|| black_box(PackedSequence::new(black_box(data))))
        });

        group.bench_with_input(BenchmarkId::new("random", size), &random, |b, data| {
            b.iter(|| black_box(PackedSequence::new(black_box(data))))
        });
    }

    group.finish();
}

fn bench_random_access(c: &mut Criterion) {
    let sizes = [1_000, 100_000];
    let mut group = c.benchmark_group("random_access");

    for size in sizes.iter() {
        let seq = match PackedSequence::new(&generate_random(*size)) {
            Ok(seq) => seq,
            Err(e) => panic!("benchmark input failed to pack: {e}"),
        };

        group.bench_with_input(BenchmarkId::new("get", size), &seq, |b, seq| {
            let mut index = 0usize;
            b.iter(|| {
                index = (index + 7919) % seq.len();
                black_box(seq.get(black_box(index)))
            });
        });
    }

    group.finish();
}

fn bench_iteration(c: &mut Criterion) {
    let sizes = [1_000, 10_000, 100_000];
    let mut group = c.benchmark_group("iteration");

    for size in sizes.iter() {
        let seq = match PackedSequence::new(&generate_ordered(*size)) {
            Ok(seq) => seq,
            Err(e) => panic!("benchmark input failed to pack: {e}"),
        };

        group.bench_with_input(BenchmarkId::new("iter", size), &seq, |b, seq| {
            b.iter(|| black_box(seq.iter().count()))
        });

        group.bench_with_input(BenchmarkId::new("decode_word", size), &seq, |b, seq| {
            b.iter(|| {
                let mut count = 0;
                for i in 0..seq.word_count() {
                    if let Some(Ok(symbols)) = seq.decode_word(i) {
                        count += symbols.len();
                    }
                }
                black_box(count)
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_pack, bench_random_access, bench_iteration);
criterion_main!(benches);
