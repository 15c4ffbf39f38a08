use anchor_lang::prelude::Pubkey;
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion, Throughput};
use twab_controller::math::U192;
use twab_controller::state::account::TwabAccount;
use twab_controller::state::observation::Observation;
use twab_controller::utils::constants::RING_CAPACITY;

// Multiplier controlling how many times we overwrite the ring during the
// sustained benchmark, exercising wraparound rather than one-off fill cost.
const OVERWRITE_MULTIPLIER: usize = 16;

fn empty_account() -> TwabAccount {
    TwabAccount {
        vault: Pubkey::default(),
        holder: Pubkey::default(),
        balance: 0,
        delegate_balance: 0,
        next_index: 0,
        cardinality: 0,
        bump: 0,
        _padding: [0; 7],
        ring: [Observation::ZERO; RING_CAPACITY],
    }
}

fn deterministic_observation(seed: u64) -> Observation {
    Observation::new(seed, U192::from_u128(seed as u128 * 1_000))
}

// Two complementary scenarios, matching the shape of an account's real
// lifetime: filling an empty ring from zero to capacity (append only), then
// sustained overwrite/wraparound once the ring is full (append that recycles
// a slot every call). `append` and `overwrite_newest` are both O(1); this
// benchmark exists to confirm that holds as written, not to chase a target
// number.
fn bench_twab_ring_push(c: &mut Criterion) {
    let mut group = c.benchmark_group("twab_ring_push");

    group.throughput(Throughput::Elements(RING_CAPACITY as u64));
    group.bench_function("fill_empty_ring", |b| {
        b.iter_batched(
            empty_account,
            |mut account| {
                for idx in 0..RING_CAPACITY as u64 {
                    account.append(deterministic_observation(idx));
                }
                black_box(account)
            },
            BatchSize::SmallInput,
        );
    });

    let total_writes = RING_CAPACITY * OVERWRITE_MULTIPLIER;
    group.throughput(Throughput::Elements(total_writes as u64));
    group.bench_function("sustained_wraparound_append", |b| {
        b.iter_batched(
            empty_account,
            |mut account| {
                for idx in 0..total_writes as u64 {
                    account.append(deterministic_observation(idx));
                }
                black_box(account)
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("repeated_overwrite_newest", |b| {
        b.iter_batched(
            || {
                let mut account = empty_account();
                account.append(deterministic_observation(0));
                account
            },
            |mut account| {
                for idx in 1..=total_writes as u64 {
                    account.overwrite_newest(deterministic_observation(idx));
                }
                black_box(account)
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_twab_ring_push);
criterion_main!(benches);
