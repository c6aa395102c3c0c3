use crate::search::Strategy;
use crate::verify::{run_battery, verify_strategy, Battery};
use itertools::Itertools;

#[test]
fn standard_battery_every_strategy() {
    for strategy in Strategy::ALL {
        assert_eq!(verify_strategy(strategy, &Battery::standard()).unwrap(), 21);
    }
}

#[test]
fn exhaustive_small_sequences() {
    // 1 + 4 + 10 + 20 + 35 + 56 + 84 sorted sequences over {0,1,2,3}, 6 queries each
    let battery = Battery::exhaustive(6, 0..4);
    assert_eq!(battery.len(), 210 * 6);
    run_battery(&battery).unwrap();
}

#[test]
fn strategies_agree_on_long_runs_of_duplicates() {
    let data = (0..40_i64).flat_map(|v| std::iter::repeat(v).take(5)).collect_vec();
    for query in -1..41 {
        let results = Strategy::ALL
            .iter()
            .map(|s| s.search(query, &data))
            .collect_vec();
        assert!(results.iter().all_equal(), "{} -> {:?}", query, results);
        let expected = if (0..40).contains(&query) { query as isize * 5 } else { -1 };
        assert_eq!(results[0], expected);
    }
}

#[test]
fn other_integer_types() {
    let bytes = [0_u8, 0, 255, 255];
    let wide = [i128::MIN, -1, -1, 0, i128::MAX];
    for strategy in Strategy::ALL {
        assert_eq!(strategy.search(255, &bytes), 2);
        assert_eq!(strategy.search(1, &bytes), -1);
        assert_eq!(strategy.search(-1, &wide), 1);
        assert_eq!(strategy.search(i128::MAX, &wide), 4);
    }
}

#[test]
fn unsorted_input_does_not_panic() {
    let data = [9, 1, 8, 2, 7, 3];
    for strategy in Strategy::ALL {
        for query in 0..10 {
            let result = strategy.search(query, &data);
            assert!((-1..data.len() as isize).contains(&result));
        }
    }
}
