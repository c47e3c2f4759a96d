use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use loligo_fec::{hamming, parity, rs, triple, ParityRule};

fn random_payload(len: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(len);
    let mut state: u64 = 42;
    for _ in 0..len {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
        data.push((state >> 33) as u8);
    }
    data
}

fn random_dna(len: usize) -> Vec<u8> {
    let bases = [b'A', b'C', b'G', b'T'];
    let mut seq = Vec::with_capacity(len);
    let mut state: u64 = 42;
    for _ in 0..len {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
        seq.push(bases[((state >> 33) % 4) as usize]);
    }
    seq
}

fn bench_hamming(c: &mut Criterion) {
    let mut group = c.benchmark_group("hamming");

    let payload = random_payload(100_000);
    group.throughput(Throughput::Bytes(payload.len() as u64));
    group.bench_function("encode_100kB", |b| {
        b.iter(|| hamming::encode(black_box(&payload)))
    });

    let (encoded, pad_bits) = hamming::encode(&payload);
    group.bench_function("decode_100kB", |b| {
        b.iter(|| hamming::decode(black_box(&encoded), pad_bits).unwrap())
    });

    group.finish();
}

fn bench_triple(c: &mut Criterion) {
    let mut group = c.benchmark_group("triple");

    let seq = random_dna(100_000);
    group.throughput(Throughput::Bytes(seq.len() as u64));
    group.bench_function("encode_100k_bases", |b| {
        b.iter(|| triple::encode(black_box(&seq)))
    });

    let encoded = triple::encode(&seq);
    group.bench_function("decode_100k_bases", |b| {
        b.iter(|| triple::decode(black_box(&encoded)).unwrap())
    });

    group.finish();
}

fn bench_parity(c: &mut Criterion) {
    let mut group = c.benchmark_group("parity");

    let seq = random_dna(100_000);
    group.throughput(Throughput::Bytes(seq.len() as u64));
    group.bench_function("add_k8", |b| {
        b.iter(|| parity::add(black_box(&seq), 8, ParityRule::GcCount).unwrap())
    });

    let with_parity = parity::add(&seq, 8, ParityRule::GcCount).unwrap();
    group.bench_function("strip_k8", |b| {
        b.iter(|| parity::strip(black_box(&with_parity), 8, ParityRule::GcCount).unwrap())
    });

    group.finish();
}

fn bench_reed_solomon(c: &mut Criterion) {
    let mut group = c.benchmark_group("reed_solomon");

    let payload = random_payload(100_000);
    group.throughput(Throughput::Bytes(payload.len() as u64));
    group.bench_function("encode_100kB_p16", |b| {
        b.iter(|| rs::encode(black_box(&payload), 16).unwrap())
    });

    let encoded = rs::encode(&payload, 16).unwrap();
    group.bench_function("decode_100kB_p16", |b| {
        b.iter(|| rs::decode(black_box(&encoded), 16).unwrap())
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_hamming,
    bench_triple,
    bench_parity,
    bench_reed_solomon
);
criterion_main!(benches);
