use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{RngCore, SeedableRng};
use secded_core::stream::{decode_stream, encode_stream};
use secded_core::{DataWidth, DecoderConfig};

fn bench_stream(c: &mut Criterion) {
    let mut group = c.benchmark_group("stream");
    let mut rng = rand::rngs::StdRng::seed_from_u64(7);

    for size in [256usize, 4096, 65536] {
        let mut data = vec![0u8; size];
        rng.fill_bytes(&mut data);

        group.throughput(Throughput::Bytes(size as u64));
        for width in [DataWidth::W8, DataWidth::W32] {
            let encoded = encode_stream(&data, width);

            group.bench_with_input(
                BenchmarkId::new(format!("encode_w{}", width), size),
                &data,
                |b, d| b.iter(|| encode_stream(black_box(d), width)),
            );
            group.bench_with_input(
                BenchmarkId::new(format!("decode_w{}", width), size),
                &encoded,
                |b, s| b.iter(|| decode_stream(black_box(s), DecoderConfig::default()).unwrap()),
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_stream);
criterion_main!(benches);
