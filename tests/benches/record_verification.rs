//! # Record Verification Benchmarks
//!
//! | Operation | Target |
//! |-----------|--------|
//! | Decode 10 KiB record | < 50us |
//! | Ed25519 / secp256k1 / P-256 verify | < 1ms |
//! | RSA-2048 verify | < 1ms |
//! | Batch of 500 | scales with cores |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ipns_crypto::KeyType;
use ipns_record::{
    BatchItem, BatchVerificationRequest, RecordCodec, RecordVerificationApi, MAX_RECORD_SIZE,
};
use ipns_tests::fixtures::{default_service, identity_of, keypair, RecordBuilder, ALL_KEY_TYPES};
use rand::Rng;
use std::time::Duration;

// ============================================================================
// Decoding
// ============================================================================

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("record-decode");

    for value_len in [64usize, 1024, 8 * 1024] {
        let value: Vec<u8> = (0..value_len).map(|_| rand::thread_rng().gen()).collect();
        let bytes = RecordBuilder::new()
            .value(value)
            .encode(keypair(KeyType::Ed25519));
        assert!(bytes.len() <= MAX_RECORD_SIZE);

        group.throughput(Throughput::Bytes(bytes.len() as u64));
        group.bench_with_input(BenchmarkId::new("decode", value_len), &bytes, |b, bytes| {
            b.iter(|| black_box(RecordCodec::decode(bytes)))
        });
    }

    group.finish();
}

// ============================================================================
// Single Record Verification
// ============================================================================

fn bench_verify_single(c: &mut Criterion) {
    let mut group = c.benchmark_group("record-verify");
    group.measurement_time(Duration::from_secs(10));
    let service = default_service();

    for key_type in ALL_KEY_TYPES {
        let signer = keypair(key_type);
        let identity = identity_of(signer);
        let bytes = RecordBuilder::new().ttl(3_600_000_000_000).encode(signer);

        group.bench_function(BenchmarkId::new("verify", key_type), |b| {
            b.iter(|| black_box(service.verify(&identity, &bytes).is_ok()))
        });
    }

    group.finish();
}

// ============================================================================
// Batch Verification
// ============================================================================

fn bench_batch_verify(c: &mut Criterion) {
    let mut group = c.benchmark_group("record-batch-verify");
    group.measurement_time(Duration::from_secs(10));
    let service = default_service();
    let signer = keypair(KeyType::Ed25519);
    let identity = identity_of(signer);

    for size in [10u64, 50, 100, 500] {
        let items: Vec<_> = (0..size)
            .map(|sequence| BatchItem {
                identity: identity.clone(),
                record: RecordBuilder::new()
                    .value(format!("/ipfs/value-{sequence}"))
                    .sequence(sequence)
                    .encode(signer),
            })
            .collect();
        let request = BatchVerificationRequest { items };

        group.throughput(Throughput::Elements(size));
        group.bench_with_input(
            BenchmarkId::new("batch_verify", size),
            &request,
            |b, request| b.iter(|| black_box(service.batch_verify(request).valid_count)),
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_decode,
    bench_verify_single,
    bench_batch_verify
);
criterion_main!(benches);
