use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use zlatlong::{decode, encode, Encoder, Point};

/// Random walk resembling a road route: ~10 m steps with occasional turns
fn route(count: usize) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut lat = 47.6;
    let mut lon = -122.3;
    (0..count)
        .map(|_| {
            lat += rng.gen_range(-0.0002..0.0002);
            lon += rng.gen_range(-0.0002..0.0002);
            Point::new(lat, lon)
        })
        .collect()
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    for count in [100, 1000, 10000] {
        let points = route(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_function(format!("{count}_points"), |b| b.iter(|| black_box(encode(black_box(&points)))));
    }
    group.finish();
}

fn bench_push(c: &mut Criterion) {
    let points = route(1000);

    let mut group = c.benchmark_group("push");
    group.throughput(Throughput::Elements(1000));
    group.bench_function("1000_points", |b| {
        b.iter(|| {
            let mut enc = Encoder::with_capacity(8 * 1000);
            for &p in &points {
                enc.push(black_box(p));
            }
            black_box(enc.into_bytes())
        })
    });
    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let bytes = encode(&route(10000));

    let mut group = c.benchmark_group("decode");
    group.throughput(Throughput::Elements(10000));
    group.bench_function("10000_points", |b| b.iter(|| black_box(decode(black_box(&bytes)))));
    group.finish();
}

fn bench_decode_whole_earth(c: &mut Criterion) {
    // Long jumps produce 10-11 symbol groups
    let mut rng = StdRng::seed_from_u64(42);
    let points: Vec<Point> = (0..1000)
        .map(|_| Point::new(rng.gen_range(-90.0..90.0), rng.gen_range(-180.0..180.0)))
        .collect();
    let bytes = encode(&points);

    let mut group = c.benchmark_group("decode_whole_earth");
    group.throughput(Throughput::Elements(1000));
    group.bench_function("1000_points", |b| b.iter(|| black_box(decode(black_box(&bytes)))));
    group.finish();
}

fn bench_roundtrip(c: &mut Criterion) {
    let points = route(1000);

    let mut group = c.benchmark_group("roundtrip");
    group.throughput(Throughput::Elements(1000));
    group.bench_function("1000_points", |b| {
        b.iter(|| {
            let bytes = encode(black_box(&points));
            black_box(decode(&bytes))
        })
    });
    group.finish();
}

criterion_group!(benches, bench_encode, bench_push, bench_decode, bench_decode_whole_earth, bench_roundtrip);
criterion_main!(benches);
