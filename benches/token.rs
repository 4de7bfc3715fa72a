use digit_token::rng::Csprng;
use digit_token::token::{Sampler, default_byte_budget};
use digit_token::{TokenOptions, generate_token, generate_token_with};

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_os_token(c: &mut Criterion) {
    let options = TokenOptions::default();

    c.bench_function("token 6 digits (os)", |b| {
        b.iter(|| generate_token(black_box(6), &options))
    });
}

pub fn bench_csprng_token(c: &mut Criterion) {
    let options = TokenOptions::default();
    let mut rng = Csprng::from_seed([0x42u8; 32]);

    for length in [6, 64, 1000] {
        c.bench_function(&format!("token {length} digits (csprng)"), |b| {
            b.iter(|| generate_token_with(black_box(length), &options, &mut rng))
        });
    }
}

pub fn bench_sampler_reuse(c: &mut Criterion) {
    let sampler = Sampler::new(6, default_byte_budget(6)).unwrap();
    let mut rng = Csprng::from_seed([0x42u8; 32]);

    c.bench_function("sample 6 digits (cached sampler)", |b| {
        b.iter(|| sampler.sample(&mut rng))
    });
}

criterion_group!(benches, bench_os_token, bench_csprng_token, bench_sampler_reuse);
criterion_main!(benches);
