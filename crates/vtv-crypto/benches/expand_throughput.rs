use criterion::{black_box, criterion_group, criterion_main, Criterion};
use vtv_core::{HashAlgorithm, Prg};
use vtv_crypto::{HashPrg, RandomOracle};

fn bench_expand(c: &mut Criterion) {
    for hash in HashAlgorithm::ALL {
        let seed = vec![0x5au8; 64];
        c.bench_function(&format!("prg_expand_4k_{hash}"), |b| {
            b.iter(|| {
                let mut prg = HashPrg::new(hash, &seed).expect("seed");
                black_box(prg.get_bytes(4096).expect("expand"))
            })
        });
    }
}

fn bench_oracle(c: &mut Criterion) {
    let oracle = RandomOracle::new(HashAlgorithm::Sha256, 579).expect("oracle");
    let input: Vec<u8> = (0..=255).collect();
    c.bench_function("oracle_579_bits", |b| b.iter(|| black_box(oracle.hash(&input))));
}

criterion_group!(benches, bench_expand, bench_oracle);
criterion_main!(benches);
