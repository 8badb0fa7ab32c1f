use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use soundpixel_core::{embed_in_audio, extract_from_audio, pack_to_image, unpack_from_image};

const SIZES: [usize; 4] = [1 << 10, 64 << 10, 1 << 20, 4 << 20];

fn payload(size: usize) -> Vec<u8> {
    (0..size).map(|i| (i as u32).wrapping_mul(2654435761).to_be_bytes()[0]).collect()
}

pub fn pixel_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("pixel");
    for size in SIZES.iter() {
        let data = payload(*size);
        let png = pack_to_image(&data, "bench.bin", None).map(|e| e.png).unwrap();
        group.throughput(Throughput::Bytes(*size as u64));
        group.bench_with_input(BenchmarkId::new("pack", size), size, |b, &_size| {
            b.iter(|| pack_to_image(black_box(&data), "bench.bin", None))
        });
        group.bench_with_input(BenchmarkId::new("unpack", size), size, |b, &_size| {
            b.iter(|| unpack_from_image(black_box(&png), None))
        });
    }
    group.finish();
}

pub fn trailing_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("trailing");
    let host = payload(3 << 20);
    for size in SIZES.iter() {
        let data = payload(*size);
        let carrier = embed_in_audio(&host, &data, "bench.png", None)
            .map(|e| e.carrier)
            .unwrap();
        group.throughput(Throughput::Bytes(*size as u64));
        group.bench_with_input(BenchmarkId::new("embed", size), size, |b, &_size| {
            b.iter(|| embed_in_audio(black_box(&host), black_box(&data), "bench.png", None))
        });
        group.bench_with_input(BenchmarkId::new("extract", size), size, |b, &_size| {
            b.iter(|| extract_from_audio(black_box(&carrier), None))
        });
    }
    group.finish();
}

pub fn envelope_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("envelope");
    group.sample_size(10);
    let data = payload(64 << 10);
    group.bench_function("pack_sealed_64k", |b| {
        b.iter(|| pack_to_image(black_box(&data), "bench.bin", Some("password")))
    });
    group.finish();
}

criterion_group!(benches, pixel_benchmark, trailing_benchmark, envelope_benchmark);
criterion_main!(benches);
