use chart_options::plot_options::{
    BarOptions, ColumnOptions, VariwideOptions, WaterfallOptions, XRangeOptions,
};
use chart_options::schema::SchemaNode;
use chart_options::utility::ColorInput;
use serde_json::{Value, json};

#[test]
fn null_attributes_are_trimmed_but_false_survives() {
    let bar = BarOptions::from_json(
        r##"{ "pointPadding": 0.1, "borderWidth": null, "colorByPoint": false }"##,
    )
    .expect("valid options");

    let wire = bar.to_wire();
    assert_eq!(wire.get("pointPadding"), Some(&json!(0.1)));
    assert_eq!(wire.get("colorByPoint"), Some(&json!(false)));
    assert!(!wire.contains_key("borderWidth"));
    assert_eq!(wire.len(), 2);
}

#[test]
fn validation_failure_reports_the_snake_case_attribute() {
    let err = BarOptions::from_json(r##"{ "pointPadding": "wide" }"##)
        .expect_err("non-numeric padding");
    assert!(err.to_string().contains("point_padding"));
}

#[test]
fn inherited_and_own_attributes_flow_through_one_wire_mapping() {
    let bar = BarOptions::from_json(
        r##"{
            "className": "sales",
            "stacking": "normal",
            "edgeWidth": 1,
            "groupPadding": 0.2
        }"##,
    )
    .expect("valid options");

    assert_eq!(bar.base().base().base().class_name(), Some("sales"));
    assert_eq!(bar.base().base().stacking(), Some("normal"));
    assert_eq!(bar.edge_width(), Some(1.0));

    let wire = bar.to_wire();
    assert_eq!(wire.get("className"), Some(&json!("sales")));
    assert_eq!(wire.get("stacking"), Some(&json!("normal")));
    assert_eq!(wire.get("edgeWidth"), Some(&json!(1.0)));
    assert_eq!(wire.get("groupPadding"), Some(&json!(0.2)));
}

#[test]
fn column_leaf_shares_the_bar_shape() {
    let column = ColumnOptions::from_json(r##"{ "depth": 25, "edgeColor": "#666666" }"##)
        .expect("valid options");
    assert_eq!(column.base().depth(), Some(25.0));
    assert_eq!(column.base().edge_color(), Some("#666666"));
    assert_eq!(ColumnOptions::wire_keys(), BarOptions::wire_keys());
}

#[test]
fn variwide_does_not_speak_the_bar_level_keys() {
    let wires: Vec<&str> = VariwideOptions::wire_keys()
        .iter()
        .map(|entry| entry.wire)
        .collect();
    assert!(wires.contains(&"pointPadding"));
    assert!(!wires.contains(&"edgeColor"));
    assert!(!wires.contains(&"depth"));
}

#[test]
fn waterfall_resolves_its_extra_colors_polymorphically() {
    let waterfall = WaterfallOptions::from_json(
        r##"{
            "lineColor": "#333333",
            "upColor": {
                "linearGradient": { "x1": 0.0, "y1": 0.0, "x2": 0.0, "y2": 1.0 },
                "stops": [[0.0, "#00cc00"], [1.0, "#006600"]]
            }
        }"##,
    )
    .expect("valid options");

    assert_eq!(
        waterfall.line_color(),
        Some(&ColorInput::Plain("#333333".to_owned()))
    );
    assert!(matches!(
        waterfall.up_color(),
        Some(ColorInput::Gradient(_))
    ));

    let wire = waterfall.to_wire();
    assert_eq!(wire.get("lineColor"), Some(&json!("#333333")));
    assert!(wire.get("upColor").is_some_and(Value::is_object));
}

#[test]
fn x_range_round_trips_its_partial_fill_block() {
    let xr = XRangeOptions::from_json(
        r##"{ "groupZPadding": 4, "partialFill": { "fill": "#336699" } }"##,
    )
    .expect("valid options");
    assert_eq!(
        xr.partial_fill().and_then(|pf| pf.fill()),
        Some(&ColorInput::Plain("#336699".to_owned()))
    );

    let wire = xr.to_wire();
    assert_eq!(wire.get("partialFill"), Some(&json!({ "fill": "#336699" })));
}

#[test]
fn empty_options_serialize_to_an_empty_mapping() {
    let bar = BarOptions::default();
    assert!(bar.to_wire().is_empty());
    assert_eq!(bar.to_json().expect("serializable"), "{}");
}

#[test]
fn mixed_color_cycle_round_trips() {
    let bar = BarOptions::from_json(
        r##"{ "colors": ["#ff0000", { "patternOptions": { "opacity": 0.5 } }] }"##,
    )
    .expect("valid options");
    let colors = bar.base().colors().expect("two entries");
    assert_eq!(colors.len(), 2);
    assert!(matches!(colors[0], ColorInput::Plain(_)));
    assert!(matches!(colors[1], ColorInput::Pattern(_)));

    let wire = bar.to_wire();
    let emitted = wire.get("colors").and_then(Value::as_array).expect("array");
    assert_eq!(emitted.len(), 2);
}
