use stripchart::api::{DataSource, StripChart, StripChartConfig};
use stripchart::core::{Sample, SeriesBatch, Viewport};
use stripchart::render::NullRenderer;

struct NoSource;

impl DataSource for NoSource {
    fn fetch(&mut self) -> stripchart::StripResult<Vec<SeriesBatch>> {
        Ok(Vec::new())
    }
}

fn chart_with(
    batches: Vec<SeriesBatch>,
) -> StripChart<NoSource, NullRenderer> {
    let config = StripChartConfig::new(Viewport::new(800, 300));
    let mut chart =
        StripChart::new(NoSource, NullRenderer::default(), config).expect("engine init");
    if !batches.is_empty() {
        chart.ingest(batches).expect("ingest");
    }
    chart
}

fn batch(name: &str, points: &[(f64, f64)]) -> SeriesBatch {
    SeriesBatch::new(
        name,
        points.iter().map(|(t, v)| Sample::new(*t, *v)).collect(),
    )
}

#[test]
fn snap_inverts_pixel_through_the_time_scale() {
    let chart = chart_with(vec![batch(
        "cpu",
        &[(0.0, 1.0), (10.0, 2.0), (20.0, 3.0), (30.0, 4.0)],
    )]);

    // Visible time domain is 10..30 (head excluded), plot body 30..770 px.
    let pointer_x = 30.0 + (20.0 - 10.0) / 20.0 * 740.0;
    let snaps = chart.snaps_at_pixel(pointer_x).expect("snaps");

    assert_eq!(snaps.len(), 1);
    assert!((snaps[0].sample.time - 20.0).abs() <= 1e-9);
    assert!((snaps[0].x_px - pointer_x).abs() <= 1e-9);
    // Value domain 2..4 maps onto 270..30 px; v=3 sits in the middle.
    let y = snaps[0].y_px.expect("defined value");
    assert!((y - 150.0).abs() <= 1e-9);
}

#[test]
fn snap_on_a_gap_sample_has_no_y_coordinate() {
    let chart = chart_with(vec![SeriesBatch::new(
        "cpu",
        vec![
            Sample::new(0.0, 1.0),
            Sample::gap(10.0),
            Sample::new(20.0, 3.0),
        ],
    )]);

    let snaps = chart.snaps_at_pixel(30.0).expect("snaps");

    assert_eq!(snaps.len(), 1);
    assert!((snaps[0].sample.time - 10.0).abs() <= 1e-9);
    assert!(snaps[0].y_px.is_none());
}

#[test]
fn nearest_snap_picks_the_closest_series() {
    let chart = chart_with(vec![
        batch("cpu", &[(0.0, 1.0), (10.0, 2.0), (20.0, 3.0)]),
        batch("mem", &[(0.0, 5.0), (14.0, 6.0), (28.0, 7.0)]),
    ]);

    // Pointer sits almost exactly on cpu's t=20 sample.
    let pointer_x = 30.0 + (20.0 - 10.0) / 18.0 * 740.0;
    let winner = chart
        .nearest_snap_at_pixel(pointer_x)
        .expect("snaps")
        .expect("non-empty chart");

    assert_eq!(winner.series, "cpu");
    assert!((winner.sample.time - 20.0).abs() <= 1e-9);
}

#[test]
fn empty_chart_yields_no_snaps() {
    let chart = chart_with(Vec::new());

    assert!(chart.snaps_at_pixel(400.0).expect("snaps").is_empty());
    assert!(chart.nearest_snap_at_pixel(400.0).expect("snaps").is_none());
}
