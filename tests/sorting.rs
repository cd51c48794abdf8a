// End-to-end properties of the sort engine and controller

use std::time::{Duration, Instant};

use rand::rngs::SmallRng;
use rand::SeedableRng;

use sort_viz::config::Config;
use sort_viz::controller::{Controller, Mode};
use sort_viz::engine::{Algorithm, BarArray, SortSession, Stats};
use sort_viz::generator::{self, HeightRange};
use sort_viz::input::Intent;

const ALGORITHMS: [Algorithm; 2] = [Algorithm::Selection, Algorithm::Bubble];

fn generated(seed: u64, count: usize) -> BarArray {
    let mut rng = SmallRng::seed_from_u64(seed);
    generator::generate(&mut rng, count, HeightRange::new(20, 500)).expect("valid range")
}

fn running(seed: u64, algorithm: Algorithm) -> Controller {
    let mut controller = Controller::new(Config {
        seed: Some(seed),
        ..Config::default()
    })
    .expect("default config is valid");
    controller.apply(Intent::Select(algorithm)).unwrap();
    controller.apply(Intent::TogglePause).unwrap();
    controller
}

/// Tick once per simulated second until the session finishes.
fn drive_to_end(controller: &mut Controller, mut now: Instant) -> Instant {
    while !controller.is_finished() {
        now += Duration::from_secs(1);
        controller.tick(now);
    }
    now
}

#[test]
fn every_generated_array_ends_sorted() {
    for algorithm in ALGORITHMS {
        for seed in 0..20 {
            let mut bars = generated(seed, 20);
            let mut session = SortSession::new(algorithm);
            session.run_to_end(&mut bars);
            assert!(bars.is_sorted(), "{algorithm} seed {seed}: {:?}", bars.heights());
            assert!(bars.all_sorted(), "{algorithm} seed {seed} left unsorted marks");
        }
    }
}

#[test]
fn comparisons_are_triangular() {
    for algorithm in ALGORITHMS {
        for n in [0usize, 1, 2, 5, 13, 20] {
            let mut bars = generated(n as u64, n);
            let stats = SortSession::new(algorithm).run_to_end(&mut bars);
            assert_eq!(stats.comparisons, n * n.saturating_sub(1) / 2, "{algorithm} n={n}");
            assert!(stats.swaps <= stats.comparisons);
        }
    }
}

#[test]
fn sorted_input_needs_no_swaps() {
    for algorithm in ALGORITHMS {
        let mut bars = BarArray::from_heights((1..=15).map(|h| h * 10));
        let stats = SortSession::new(algorithm).run_to_end(&mut bars);
        assert_eq!(stats.swaps, 0, "{algorithm}");
    }
}

#[test]
fn same_seed_same_counts_after_reset() {
    for algorithm in ALGORITHMS {
        let mut results: Vec<(Stats, Vec<u32>)> = Vec::new();
        for _ in 0..2 {
            let mut controller = running(99, algorithm);
            let now = drive_to_end(&mut controller, Instant::now());
            controller.apply(Intent::Reset).unwrap();
            controller.apply(Intent::TogglePause).unwrap();
            drive_to_end(&mut controller, now);
            results.push((controller.stats(), controller.bars().heights()));
        }
        assert_eq!(results[0], results[1], "{algorithm}");
    }
}

#[test]
fn pausing_does_not_skip_or_repeat_steps() {
    for algorithm in ALGORITHMS {
        let mut straight = running(7, algorithm);
        drive_to_end(&mut straight, Instant::now());

        let mut interrupted = running(7, algorithm);
        let mut now = Instant::now();
        let mut ticks = 0;
        while !interrupted.is_finished() {
            now += Duration::from_secs(1);
            interrupted.tick(now);
            ticks += 1;
            if ticks % 17 == 0 {
                interrupted.apply(Intent::TogglePause).unwrap();
                for _ in 0..3 {
                    now += Duration::from_secs(1);
                    assert!(interrupted.tick(now).is_none());
                }
                interrupted.apply(Intent::TogglePause).unwrap();
            }
        }

        assert_eq!(interrupted.stats(), straight.stats(), "{algorithm}");
        assert_eq!(interrupted.bars().heights(), straight.bars().heights());
    }
}

#[test]
fn menu_round_trip_starts_a_fresh_session() {
    let mut controller = running(5, Algorithm::Bubble);
    let now = Instant::now() + Duration::from_secs(1);
    controller.tick(now);
    assert_eq!(controller.stats().comparisons, 1);

    controller.apply(Intent::ReturnToMenu).unwrap();
    assert_eq!(controller.ui().mode, Mode::Menu);
    assert_eq!(controller.stats(), Stats::default());

    controller.apply(Intent::Select(Algorithm::Selection)).unwrap();
    assert_eq!(controller.ui().mode, Mode::Running);
    assert_eq!(controller.algorithm(), Some(Algorithm::Selection));
    assert_eq!(controller.stats(), Stats::default());
}
