use chart_options::axes::NumericAxis;
use chart_options::plot_options::{BarOptions, BoxPlotOptions};
use chart_options::schema::SchemaNode;
use proptest::prelude::*;
use serde_json::{Value, json};

proptest! {
    #[test]
    fn bar_options_survive_a_wire_round_trip(
        point_padding in 0.0f64..1.0,
        border_width in 0.0f64..20.0,
        color_by_point in any::<bool>(),
        grouping in any::<bool>()
    ) {
        let bar = BarOptions::from_wire(
            json!({
                "pointPadding": point_padding,
                "borderWidth": border_width,
                "colorByPoint": color_by_point,
                "grouping": grouping
            })
            .as_object()
            .expect("object"),
        )
        .expect("valid options");

        let wire = bar.to_wire();
        let restored = BarOptions::from_wire(&wire).expect("round trip");
        prop_assert_eq!(&restored, &bar);
        prop_assert_eq!(restored.to_wire(), wire);
    }

    #[test]
    fn trimmed_output_never_contains_empty_entries(
        opposite in any::<bool>(),
        tick_interval in proptest::option::of(0.5f64..100.0),
        band_count in 0usize..4
    ) {
        let bands: Vec<Value> = (0..band_count)
            .map(|i| json!({ "from": i as f64, "to": (i + 1) as f64 }))
            .collect();
        let axis = NumericAxis::from_wire(
            json!({
                "opposite": opposite,
                "tickInterval": tick_interval,
                "plotBands": bands
            })
            .as_object()
            .expect("object"),
        )
        .expect("valid axis");

        for (key, value) in axis.to_wire() {
            prop_assert!(!value.is_null(), "null leaked through {key}");
            if let Value::Array(items) = &value {
                prop_assert!(!items.is_empty(), "empty array leaked through {key}");
            }
            if let Value::Object(map) = &value {
                prop_assert!(!map.is_empty(), "empty mapping leaked through {key}");
            }
        }
    }

    #[test]
    fn whisker_percentages_round_trip_textually(percent in 0u32..1000) {
        let text = format!("{percent}%");
        let opts = BoxPlotOptions::from_wire(
            json!({ "whiskerLength": text.clone() }).as_object().expect("object"),
        )
        .expect("valid options");
        let wire = opts.to_wire();
        prop_assert_eq!(wire.get("whiskerLength"), Some(&json!(text)));
    }

    #[test]
    fn serialization_is_idempotent(
        threshold in -1000.0f64..1000.0,
        visible in any::<bool>(),
        stacking in proptest::sample::select(vec!["normal", "overlap", "percent", "stream"])
    ) {
        let bar = BarOptions::from_wire(
            json!({
                "threshold": threshold,
                "visible": visible,
                "stacking": stacking
            })
            .as_object()
            .expect("object"),
        )
        .expect("valid options");

        let once = bar.to_wire();
        let twice = BarOptions::from_wire(&once).expect("round trip").to_wire();
        prop_assert_eq!(once, twice);
    }
}
