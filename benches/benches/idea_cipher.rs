use std::hint::black_box;

use benches::{SAMPLE_BLOCK, SAMPLE_KEY, sample_buffer};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use idea_cipher::{KeySchedule, Mode, decrypt_block, encrypt, encrypt_block, expand_key, invert_key};

fn key_schedule(c: &mut Criterion) {
    let mut group = c.benchmark_group("idea_cipher/key_schedule");

    group.bench_function("expand_key", |b| b.iter(|| expand_key(black_box(&SAMPLE_KEY))));

    let encryption = expand_key(&SAMPLE_KEY);
    group.bench_function("invert_key", |b| b.iter(|| invert_key(black_box(&encryption))));

    group.finish();
}

fn single_block(c: &mut Criterion) {
    let mut group = c.benchmark_group("idea_cipher/block");

    group.bench_function("encrypt_block", |b| {
        b.iter(|| encrypt_block(black_box(SAMPLE_BLOCK), black_box(&SAMPLE_KEY)))
    });

    group.bench_function("decrypt_block", |b| {
        b.iter(|| decrypt_block(black_box(SAMPLE_BLOCK), black_box(&SAMPLE_KEY)))
    });

    let schedule = KeySchedule::new(&SAMPLE_KEY);
    group.bench_function("schedule_apply", |b| {
        b.iter(|| schedule.apply(black_box(SAMPLE_BLOCK), Mode::Encryption))
    });

    group.finish();
}

fn buffers(c: &mut Criterion) {
    let mut group = c.benchmark_group("idea_cipher/buffer");

    for blocks in [1usize, 64, 1024] {
        let data = sample_buffer(blocks);
        group.throughput(Throughput::Bytes(data.len() as u64));

        group.bench_with_input(BenchmarkId::new("encrypt", blocks), &data, |b, data| {
            b.iter(|| encrypt(black_box(data), &SAMPLE_KEY))
        });
    }

    group.finish();
}

criterion_group!(idea_benches, key_schedule, single_block, buffers);
criterion_main!(idea_benches);
