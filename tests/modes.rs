use deepwoods_rng::{shared_rng, Probability, RandomSource, SharedRng, FIFTY_FIFTY};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const SEED: u32 = 3_476_331_340;

fn host(seed: u64) -> SharedRng {
    shared_rng(ChaCha8Rng::seed_from_u64(seed))
}

fn shared_draws(source: &mut RandomSource, interleave: bool) -> Vec<i32> {
    let mut out = Vec::new();
    for step in 0..200 {
        out.push(source.range(0, 1_000));
        out.push(source.choose(&[7, 8, 9], Some(FIFTY_FIFTY)));
        out.push(i32::from(source.chance(Probability::percent(30))));

        if interleave {
            source.enter_authoritative();
            for _ in 0..(step % 5) {
                source.range(0, 1_000);
            }
            {
                let mut nested = source.authoritative();
                nested.choose(&[1, 2, 3, 4], None);
                nested.chance(FIFTY_FIFTY);
            }
            source.leave_authoritative();
        }
    }
    out
}

#[test]
fn authoritative_draws_do_not_perturb_the_shared_stream() {
    let mut plain = RandomSource::from_seed(SEED, host(1));
    let mut interleaved = RandomSource::from_seed(SEED, host(2));

    assert_eq!(shared_draws(&mut plain, false), shared_draws(&mut interleaved, true));
    assert_eq!(interleaved.authoritative_depth(), 0);
}

#[test]
fn authoritative_draws_consume_the_host_stream() {
    let shared = host(3);
    let mut a = RandomSource::from_seed(1, shared.clone());
    let mut b = RandomSource::from_seed(2, shared);

    let mut from_hosts = Vec::new();
    from_hosts.push(a.authoritative().range(0, i32::MAX));
    from_hosts.push(b.authoritative().range(0, i32::MAX));

    let mut reference = RandomSource::from_seed(0, host(3));
    reference.enter_authoritative();
    let expected = vec![reference.range(0, i32::MAX), reference.range(0, i32::MAX)];
    assert_eq!(from_hosts, expected);
}

#[test]
fn reentrant_counter_returns_to_normal() {
    let mut source = RandomSource::from_seed(SEED, host(4));
    source.enter_authoritative();
    source.enter_authoritative();
    source.leave_authoritative();
    source.leave_authoritative();
    assert!(!source.is_authoritative());
    assert!(source.try_leave_authoritative().is_err());
    assert_eq!(source.authoritative_depth(), 0);
}

#[test]
fn chance_extremes_in_both_modes() {
    let mut source = RandomSource::from_seed(SEED, host(5));
    for _ in 0..500 {
        assert!(!source.chance(Probability::new(0, 100)));
        assert!(source.chance(Probability::new(100, 100)));
    }
    let mut scope = source.authoritative();
    for _ in 0..500 {
        assert!(!scope.chance(Probability::new(0, 100)));
        assert!(scope.chance(Probability::new(100, 100)));
    }
}

#[test]
fn biased_choice_splits_evenly_between_first_and_rest() {
    let mut source = RandomSource::from_seed(SEED, host(6));
    let trials: u32 = 100_000;
    let mut counts = [0u32; 3];
    for _ in 0..trials {
        let value = source.choose(&[7, 8, 9], Some(FIFTY_FIFTY));
        counts[(value - 7) as usize] += 1;
    }

    let first_share = f64::from(counts[0]) / f64::from(trials);
    assert!((0.48..0.52).contains(&first_share), "share of 7 = {first_share}");
    assert!((23_000..27_000).contains(&counts[1]), "{counts:?}");
    assert!((23_000..27_000).contains(&counts[2]), "{counts:?}");
}

#[test]
fn failed_bias_draws_only_from_the_rest() {
    let mut chooser = RandomSource::from_seed(SEED, host(7));
    let mut replay = RandomSource::from_seed(SEED, host(7));
    for _ in 0..10_000 {
        let picked = chooser.choose(&[7, 8, 9], Some(FIFTY_FIFTY));
        if replay.chance(FIFTY_FIFTY) {
            assert_eq!(picked, 7);
        } else {
            let index = replay.range(1, 3);
            assert_eq!(picked, [7, 8, 9][index as usize]);
            assert_ne!(picked, 7);
        }
    }
}
