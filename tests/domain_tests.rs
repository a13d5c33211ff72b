use approx::assert_abs_diff_eq;
use stripchart::core::{Sample, Series, domains_for};

fn series_from(name: &str, samples: Vec<Sample>) -> Series {
    let mut series = Series::new(name, 64);
    series.merge(&samples);
    series
}

#[test]
fn domains_exclude_each_windows_first_point() {
    let series = series_from(
        "cpu",
        vec![
            Sample::new(0.0, 100.0),
            Sample::new(10.0, 5.0),
            Sample::new(20.0, 7.0),
        ],
    );

    let domains = domains_for([&series]).expect("eligible points");

    // The head sample (t=0, v=100) is about to retire and must not steer
    // either axis.
    assert_abs_diff_eq!(domains.time.min, 10.0, epsilon = 1e-9);
    assert_abs_diff_eq!(domains.time.max, 20.0, epsilon = 1e-9);
    let value = domains.value.expect("defined values");
    assert_abs_diff_eq!(value.min, 5.0, epsilon = 1e-9);
    assert_abs_diff_eq!(value.max, 7.0, epsilon = 1e-9);
}

#[test]
fn domains_union_across_series() {
    let a = series_from(
        "cpu",
        vec![
            Sample::new(0.0, 1.0),
            Sample::new(10.0, 5.0),
            Sample::new(20.0, 7.0),
        ],
    );
    let b = series_from(
        "mem",
        vec![Sample::new(5.0, -3.0), Sample::new(15.0, 50.0)],
    );

    let domains = domains_for([&a, &b]).expect("eligible points");

    assert_abs_diff_eq!(domains.time.min, 10.0, epsilon = 1e-9);
    assert_abs_diff_eq!(domains.time.max, 20.0, epsilon = 1e-9);
    let value = domains.value.expect("defined values");
    assert_abs_diff_eq!(value.min, 5.0, epsilon = 1e-9);
    assert_abs_diff_eq!(value.max, 50.0, epsilon = 1e-9);
}

#[test]
fn gap_values_keep_time_slot_but_not_value() {
    let series = series_from(
        "cpu",
        vec![
            Sample::new(0.0, 1.0),
            Sample::gap(10.0),
            Sample::new(20.0, 3.0),
        ],
    );

    let domains = domains_for([&series]).expect("eligible points");

    assert_abs_diff_eq!(domains.time.min, 10.0, epsilon = 1e-9);
    assert_abs_diff_eq!(domains.time.max, 20.0, epsilon = 1e-9);
    let value = domains.value.expect("defined values");
    assert_abs_diff_eq!(value.min, 3.0, epsilon = 1e-9);
    assert_abs_diff_eq!(value.max, 3.0, epsilon = 1e-9);
}

#[test]
fn single_gap_point_contributes_time_only() {
    let series = series_from("cpu", vec![Sample::gap(5.0)]);

    let domains = domains_for([&series]).expect("time slot still counts");

    assert_abs_diff_eq!(domains.time.min, 5.0, epsilon = 1e-9);
    assert_abs_diff_eq!(domains.time.max, 5.0, epsilon = 1e-9);
    assert!(domains.value.is_none());
}

#[test]
fn empty_input_yields_no_domains() {
    let no_series: [&Series; 0] = [];
    assert!(domains_for(no_series).is_none());

    let empty = Series::new("cpu", 64);
    assert!(domains_for([&empty]).is_none());
}
