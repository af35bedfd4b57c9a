use chart_options::axes::NumericAxis;
use chart_options::plot_options::{BarOptions, BoxPlotOptions};
use chart_options::schema::SchemaNode;
use criterion::{Criterion, criterion_group, criterion_main};
use serde_json::json;
use std::hint::black_box;

fn bench_bar_options_round_trip(c: &mut Criterion) {
    let wire = json!({
        "pointPadding": 0.1,
        "borderWidth": 2.0,
        "colorByPoint": false,
        "stacking": "normal",
        "color": "#7cb5ec",
        "edgeWidth": 1.0,
        "visible": true
    });
    let map = wire.as_object().expect("object").clone();

    c.bench_function("bar_options_round_trip", |b| {
        b.iter(|| {
            let bar = BarOptions::from_wire(black_box(&map)).expect("valid options");
            let _ = black_box(bar.to_wire());
        })
    });
}

fn bench_numeric_axis_with_100_plot_bands(c: &mut Criterion) {
    let bands: Vec<_> = (0..100)
        .map(|i| {
            json!({
                "from": i as f64,
                "to": (i + 1) as f64,
                "color": "#efefef",
                "zIndex": 1
            })
        })
        .collect();
    let wire = json!({ "tickInterval": 10, "plotBands": bands });
    let map = wire.as_object().expect("object").clone();

    c.bench_function("numeric_axis_100_plot_bands", |b| {
        b.iter(|| {
            let axis = NumericAxis::from_wire(black_box(&map)).expect("valid axis");
            let _ = black_box(axis.to_wire());
        })
    });
}

fn bench_box_plot_json_boundary(c: &mut Criterion) {
    let payload = r##"{
        "whiskerLength": "50%",
        "stemWidth": 1.5,
        "medianColor": "#222222",
        "boxDashStyle": "ShortDash",
        "pointPadding": 0.05,
        "grouping": false
    }"##;

    c.bench_function("box_plot_json_boundary", |b| {
        b.iter(|| {
            let opts = BoxPlotOptions::from_json(black_box(payload)).expect("valid options");
            let _ = black_box(opts.to_json().expect("serializable"));
        })
    });
}

criterion_group!(
    benches,
    bench_bar_options_round_trip,
    bench_numeric_axis_with_100_plot_bands,
    bench_box_plot_json_boundary
);
criterion_main!(benches);
