//! Benchmark for the Metropolis-Hastings inner loop.

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use spindle_core::Parameters;
use spindle_lattice::Lattice;
use spindle_mc::{evolve, hamiltonian, Configuration, Rng};

fn bench_sweeps(c: &mut Criterion) {
    // near the 2D critical coupling, where acceptance is mixed
    let params = Parameters { jt: 0.4407, ht: 0.0 };

    for extent in [16u32, 32, 64] {
        let lat = Lattice::new(&[extent, extent]).unwrap();
        c.bench_function(&format!("sweep_{extent}x{extent}"), |b| {
            b.iter_batched(
                || {
                    let mut rng = Rng::new(lat.size(), 2147).unwrap();
                    let cfg = Configuration::random(lat.size(), &mut rng);
                    let energy = hamiltonian(&cfg, &params, &lat).unwrap();
                    (cfg, energy, rng)
                },
                |(cfg, energy, mut rng)| {
                    evolve(cfg, energy, &params, &lat, &mut rng, 10, None, &mut []).unwrap()
                },
                BatchSize::SmallInput,
            )
        });
    }
}

criterion_group!(benches, bench_sweeps);
criterion_main!(benches);
