//! Compare the three engines, and tile sizes for the blocked engine.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use nwdist::{Aligner, Blocked, CostModel, Dna, Memo, Sequence, Tabulation};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn random_pair(n: usize) -> (Sequence, Sequence) {
    let mut rng = ChaCha8Rng::seed_from_u64(31415);
    let seq = |rng: &mut ChaCha8Rng| (0..n).map(|_| b"ACGT"[rng.gen_range(0..4)]).collect();
    (seq(&mut rng), seq(&mut rng))
}

fn engines(c: &mut Criterion) {
    let n = 2000;
    let (a, b) = random_pair(n);
    let cm = CostModel::default();

    let mut g = c.benchmark_group(format!("n{n}"));
    g.bench_function("memo", |bb| {
        let engine = Memo::new(cm, Dna::new());
        bb.iter(|| engine.cost(&a, &b))
    });
    g.bench_function("tabulation", |bb| {
        let engine = Tabulation::new(cm, Dna::new());
        bb.iter(|| engine.cost(&a, &b))
    });
    for block_size in [16, 64, 256, 1024] {
        g.bench_function(BenchmarkId::new("blocked", block_size), |bb| {
            let engine = Blocked::new(cm, Dna::new(), block_size);
            bb.iter(|| engine.cost(&a, &b))
        });
    }
    g.finish();
}

criterion_group!(benches, engines);
criterion_main!(benches);
