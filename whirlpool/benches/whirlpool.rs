use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use whirlpool::{Digest, Hasher, Whirlpool};

fn bench_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("whirlpool");
    for &size in &[10usize, 100, 1000, 10000] {
        let data = vec![0u8; size];
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("digest", size), &data, |b, data| {
            let mut hasher = Whirlpool::new();
            b.iter(|| hasher.update(data));
        });
        group.bench_with_input(BenchmarkId::new("hasher", size), &data, |b, data| {
            let mut hasher = Hasher::new();
            b.iter(|| hasher.update(data));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_update);
criterion_main!(benches);
