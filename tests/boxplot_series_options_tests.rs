use chart_options::plot_options::{BoxPlotOptions, ErrorBarOptions, WhiskerLength};
use chart_options::schema::SchemaNode;
use chart_options::utility::DashStyle;
use serde_json::json;

#[test]
fn whisker_length_keeps_its_dual_form_across_the_wire() {
    let pixels = BoxPlotOptions::from_json(r##"{ "whiskerLength": 9 }"##).expect("pixel length");
    assert_eq!(pixels.whisker_length(), Some(&WhiskerLength::Pixels(9.0)));
    assert_eq!(pixels.to_wire().get("whiskerLength"), Some(&json!(9.0)));

    let percent = BoxPlotOptions::from_json(r##"{ "whiskerLength": "50%" }"##).expect("percentage");
    assert_eq!(
        percent.whisker_length(),
        Some(&WhiskerLength::Percent("50%".to_owned()))
    );
    assert_eq!(percent.to_wire().get("whiskerLength"), Some(&json!("50%")));
}

#[test]
fn dash_styles_are_validated_against_the_renderer_vocabulary() {
    let opts = BoxPlotOptions::from_json(
        r##"{ "boxDashStyle": "ShortDash", "medianDashStyle": "Solid" }"##,
    )
    .expect("valid styles");
    assert_eq!(opts.box_dash_style(), Some(DashStyle::ShortDash));
    assert_eq!(opts.median_dash_style(), Some(DashStyle::Solid));

    let err = BoxPlotOptions::from_json(r##"{ "stemDashStyle": "Wavy" }"##)
        .expect_err("unknown style");
    assert!(err.to_string().contains("stem_dash_style"));
}

#[test]
fn failed_whisker_assignment_leaves_the_prior_value() {
    let mut opts = BoxPlotOptions::from_json(r##"{ "whiskerLength": "25%" }"##).expect("valid");
    assert!(opts.set_whisker_length(&json!("wide%")).is_err());
    assert_eq!(
        opts.whisker_length(),
        Some(&WhiskerLength::Percent("25%".to_owned()))
    );
}

#[test]
fn error_bar_is_wire_compatible_with_box_plot() {
    assert_eq!(ErrorBarOptions::wire_keys(), BoxPlotOptions::wire_keys());

    let eb = ErrorBarOptions::from_json(
        r##"{ "whiskerColor": "#888888", "stemWidth": 1.5, "grouping": false }"##,
    )
    .expect("valid options");
    let wire = eb.to_wire();
    assert_eq!(wire.get("whiskerColor"), Some(&json!("#888888")));
    assert_eq!(wire.get("stemWidth"), Some(&json!(1.5)));
    assert_eq!(wire.get("grouping"), Some(&json!(false)));
}
