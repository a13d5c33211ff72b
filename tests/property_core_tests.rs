use std::collections::VecDeque;

use proptest::prelude::*;
use stripchart::core::{Sample, Series, domains_for, nearest_point};

fn ascending_samples(max_len: usize) -> impl Strategy<Value = Vec<Sample>> {
    proptest::collection::btree_set(0u32..10_000, 0..max_len).prop_map(|times| {
        times
            .into_iter()
            .map(|t| Sample::new(f64::from(t), f64::from(t % 97) - 48.0))
            .collect()
    })
}

fn non_empty_samples(max_len: usize) -> impl Strategy<Value = Vec<Sample>> {
    ascending_samples(max_len).prop_filter("non-empty", |samples| !samples.is_empty())
}

proptest! {
    #[test]
    fn merge_preserves_strict_ascending_timestamps(
        window in ascending_samples(40),
        batch in ascending_samples(40)
    ) {
        let mut series = Series::new("prop", 128);
        series.merge(&window);
        series.merge(&batch);

        let times: Vec<f64> = series.points_for_display().map(|s| s.time).collect();
        prop_assert!(times.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn merge_empty_batch_is_identity(window in ascending_samples(40)) {
        let mut series = Series::new("prop", 128);
        series.merge(&window);
        let before: Vec<Sample> = series.points_for_display().collect();

        let outcome = series.merge(&[]);

        prop_assert_eq!(outcome.retained_lead_in, before.len());
        prop_assert_eq!(outcome.appended, 0);
        prop_assert_eq!(series.points_for_display().collect::<Vec<_>>(), before);
    }

    #[test]
    fn locator_round_trips_every_member_sample(
        window in non_empty_samples(40),
        index in any::<prop::sample::Index>()
    ) {
        let points: VecDeque<Sample> = window.iter().copied().collect();
        let target = window[index.index(window.len())];

        let found = nearest_point(&points, target.time).expect("non-empty series");
        prop_assert_eq!(found, target);
    }

    #[test]
    fn locator_clamps_queries_outside_the_range(window in non_empty_samples(40)) {
        let points: VecDeque<Sample> = window.iter().copied().collect();

        prop_assert_eq!(nearest_point(&points, -1.0), window.first().copied());
        prop_assert_eq!(nearest_point(&points, 1e9), window.last().copied());
    }

    #[test]
    fn domains_never_depend_on_the_window_head(
        window in ascending_samples(40).prop_filter("len >= 2", |w| w.len() >= 2)
    ) {
        let mut series = Series::new("prop", 128);
        series.merge(&window);

        let domains = domains_for([&series]).expect("eligible points");

        // Brute force over everything except the head sample.
        let rest = &window[1..];
        let time_min = rest.iter().map(|s| s.time).fold(f64::INFINITY, f64::min);
        let time_max = rest.iter().map(|s| s.time).fold(f64::NEG_INFINITY, f64::max);
        prop_assert!((domains.time.min - time_min).abs() <= 1e-9);
        prop_assert!((domains.time.max - time_max).abs() <= 1e-9);

        let values: Vec<f64> = rest.iter().filter_map(|s| s.value).collect();
        let bounds = domains.value.expect("every generated sample is defined");
        let value_min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let value_max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        prop_assert!((bounds.min - value_min).abs() <= 1e-9);
        prop_assert!((bounds.max - value_max).abs() <= 1e-9);
    }
}
