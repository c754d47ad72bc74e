//! Steady-state access benchmark.
//!
//! Measures what a caller pays for `instance()` once the payload exists —
//! the cost the double-checked fast path is designed to keep small — against
//! the one-time-initialized variants.

use std::hint::black_box;
use std::sync::LazyLock;

use criterion::{criterion_group, criterion_main, Criterion};
use sole_holders::{GlobalHolder, LockedHolder};

struct Config {
    retries: u32,
}

fn load() -> sole_core::Result<Config> {
    Ok(Config { retries: 3 })
}

fn defaults() -> Config {
    Config { retries: 3 }
}

static LOCKED: LockedHolder<Config> = LockedHolder::new(load);
static GLOBAL: GlobalHolder<Config> = GlobalHolder::new(defaults);
static LAZY: LazyLock<Config> = LazyLock::new(defaults);

fn bench_steady_state(c: &mut Criterion) {
    // Prime every holder so only the post-creation path is measured.
    LOCKED.instance().expect("priming cannot fail");
    GLOBAL.instance();
    LazyLock::force(&LAZY);

    let mut group = c.benchmark_group("steady_state_access");
    group.bench_function("locked_holder", |b| {
        b.iter(|| black_box(LOCKED.instance().expect("already created").retries))
    });
    group.bench_function("global_holder", |b| {
        b.iter(|| black_box(GLOBAL.instance().retries))
    });
    group.bench_function("lazy_lock", |b| b.iter(|| black_box(LAZY.retries)));
    group.finish();
}

criterion_group!(benches, bench_steady_state);
criterion_main!(benches);
