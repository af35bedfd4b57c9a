use chart_options::axes::NumericAxis;
use chart_options::schema::SchemaNode;
use serde_json::{Value, json};

#[test]
fn plot_bands_speak_the_documented_key_both_ways() {
    let axis = NumericAxis::from_json(
        r##"{ "plotBands": [{ "from": 0, "to": 10, "color": "#eeeeee" }] }"##,
    )
    .expect("valid axis");

    let bands = axis.plot_bands().expect("one band");
    assert_eq!(bands.len(), 1);
    assert_eq!(bands[0].from(), Some(0.0));
    assert_eq!(bands[0].to(), Some(10.0));

    let wire = axis.to_wire();
    assert!(wire.contains_key("plotBands"));
    assert!(!wire.contains_key("plotPands"));
}

#[test]
fn single_bare_plot_band_wraps_into_a_sequence() {
    let axis = NumericAxis::from_json(r##"{ "plotBands": { "from": 5, "to": 6 } }"##)
        .expect("valid axis");
    assert_eq!(axis.plot_bands().map(<[_]>::len), Some(1));

    let wire = axis.to_wire();
    assert!(wire.get("plotBands").is_some_and(Value::is_array));
}

#[test]
fn axis_title_keeps_its_irregular_html_key() {
    let axis = NumericAxis::from_json(
        r##"{ "title": { "text": "Revenue", "useHTML": true, "align": "high" } }"##,
    )
    .expect("valid axis");

    let title = axis.title().expect("title block");
    assert_eq!(title.text(), Some("Revenue"));
    assert_eq!(title.use_html(), Some(true));
    assert_eq!(title.align(), Some("high"));

    let emitted = axis.to_wire();
    let title_wire = emitted
        .get("title")
        .and_then(Value::as_object)
        .expect("nested mapping");
    assert_eq!(title_wire.get("useHTML"), Some(&json!(true)));
    assert!(!title_wire.contains_key("useHtml"));
}

#[test]
fn breaks_and_inherited_attributes_combine() {
    let axis = NumericAxis::from_json(
        r##"{
            "breaks": [{ "from": 100, "to": 200, "breakSize": 5 }],
            "reversed": true,
            "tickInterval": 10
        }"##,
    )
    .expect("valid axis");

    let breaks = axis.breaks().expect("one break");
    assert_eq!(breaks[0].break_size(), Some(5.0));
    assert_eq!(axis.base().reversed(), Some(true));
    assert_eq!(axis.base().tick_interval(), Some(10.0));
}

#[test]
fn tick_boundary_toggles_are_carried_both_ways() {
    let axis = NumericAxis::from_json(r##"{ "startOnTick": true, "endOnTick": false }"##)
        .expect("valid axis");
    assert_eq!(axis.base().start_on_tick(), Some(true));
    assert_eq!(axis.base().end_on_tick(), Some(false));

    let wire = axis.to_wire();
    assert_eq!(wire.get("startOnTick"), Some(&json!(true)));
    assert_eq!(wire.get("endOnTick"), Some(&json!(false)));
}

#[test]
fn invalid_start_of_week_is_rejected() {
    let err = NumericAxis::from_json(r##"{ "startOfWeek": 9 }"##).expect_err("out of range");
    assert!(err.to_string().contains("start_of_week"));
}

#[test]
fn empty_collections_are_trimmed_away() {
    let axis = NumericAxis::from_json(r##"{ "categories": [], "opposite": true }"##)
        .expect("valid axis");
    let wire = axis.to_wire();
    assert_eq!(wire.get("opposite"), Some(&json!(true)));
    assert!(!wire.contains_key("categories"));
}
