use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pek_kem::create_key_pair;
use pek_pke::{decrypt_stream, encrypt_stream, PekConfig};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn bench_pek(c: &mut Criterion) {
    let mut group = c.benchmark_group("pek");
    let mut rng = ChaCha20Rng::seed_from_u64(42);
    let (public_key, secret_key) = create_key_pair(&mut rng).unwrap();
    let config = PekConfig::default();

    for size in [0usize, 1024, 16384].iter() {
        let plaintext = vec![0x61u8; *size];
        let mut text = Vec::new();
        encrypt_stream(&public_key, &mut plaintext.as_slice(), &mut text, &config, &mut rng)
            .unwrap();

        group.throughput(Throughput::Bytes(*size as u64));

        group.bench_with_input(BenchmarkId::new("encrypt", size), size, |b, _| {
            b.iter(|| {
                let mut out = Vec::with_capacity(text.len());
                encrypt_stream(&public_key, &mut plaintext.as_slice(), &mut out, &config, &mut rng)
                    .unwrap();
                out
            });
        });

        group.bench_with_input(BenchmarkId::new("decrypt", size), size, |b, _| {
            b.iter(|| {
                let mut out = Vec::with_capacity(*size);
                decrypt_stream(&secret_key, &mut text.as_slice(), &mut out).unwrap();
                out
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_pek);
criterion_main!(benches);
