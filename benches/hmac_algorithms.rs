//! HMAC algorithm benchmarks (HMAC-SHA256, HMAC-SHA512, HMAC-MD5)
//!
//! Compares issuance and verification cost across the supported keyed-hash
//! primitives.

use criterion::{criterion_group, criterion_main, Criterion};
use jwtmint::{check_token_with, default_check, AlgorithmId, TokenBuilder};

const ALGORITHMS: [AlgorithmId; 3] = [
    AlgorithmId::HmacSha256,
    AlgorithmId::HmacSha512,
    AlgorithmId::HmacMd5,
];

fn issue(algorithm: AlgorithmId) -> String {
    TokenBuilder::new()
        .algorithm(algorithm)
        .issuer("bench")
        .subject("user-12345")
        .audience("bench-api")
        .internal_claim("role", "admin")
        .external_claim("tenant", "acme")
        .secret("bench-secret-with-plausible-length")
        .issue()
        .expect("issue failed")
        .render()
        .to_string()
}

fn bench_issuance(c: &mut Criterion) {
    let mut group = c.benchmark_group("issue");

    for algorithm in ALGORITHMS {
        group.bench_function(algorithm.as_str(), |b| {
            b.iter(|| issue(algorithm));
        });
    }

    group.finish();
}

fn bench_verification(c: &mut Criterion) {
    let mut group = c.benchmark_group("check");

    for algorithm in ALGORITHMS {
        let token = issue(algorithm);
        group.bench_function(algorithm.as_str(), |b| {
            b.iter(|| {
                check_token_with(
                    &token,
                    "bench-secret-with-plausible-length",
                    default_check,
                )
                .expect("check failed")
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_issuance, bench_verification);
criterion_main!(benches);
