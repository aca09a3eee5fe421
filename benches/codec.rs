use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use rs255::{decode, encode, verify, K};

struct Lcg(u64);

impl Lcg {
    fn next_u64(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }

    fn fill_buffer(&mut self, buf: &mut [u8]) {
        for b in buf.iter_mut() {
            *b = self.next_u64() as u8;
        }
    }
}

fn test_message() -> Vec<u8> {
    let mut message = vec![0u8; K];
    Lcg(0x123456789ABCDEF0).fill_buffer(&mut message);
    message
}

fn bench_encode(c: &mut Criterion) {
    let message = test_message();
    let mut group = c.benchmark_group("encode");
    group.throughput(Throughput::Bytes(K as u64));
    group.bench_function("full_block", |b| {
        b.iter(|| encode(black_box(&message)).unwrap())
    });
    group.finish();
}

fn bench_verify(c: &mut Criterion) {
    let codeword = encode(&test_message()).unwrap();
    c.bench_function("verify", |b| b.iter(|| verify(black_box(&codeword))));
}

fn bench_decode(c: &mut Criterion) {
    let codeword = encode(&test_message()).unwrap();
    let mut group = c.benchmark_group("decode");
    group.throughput(Throughput::Bytes(K as u64));
    for errors in [0usize, 8, 16] {
        let mut received = codeword.clone();
        for k in 0..errors {
            received[k * 15] ^= 0x5a;
        }
        group.bench_with_input(BenchmarkId::from_parameter(errors), &received, |b, r| {
            b.iter(|| decode(black_box(r)).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_encode, bench_verify, bench_decode);
criterion_main!(benches);
