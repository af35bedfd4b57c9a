use std::collections::HashSet;

use chart_options::axes::{AxisBreak, AxisTitle, GenericAxis, NumericAxis, PlotBand, PlotLine};
use chart_options::plot_options::{
    BarOptions, BaseBarOptions, BoxPlotOptions, ColumnOptions, ColumnPyramidOptions,
    ColumnRangeOptions, CylinderOptions, ErrorBarOptions, GenericTypeOptions, PartialFillOptions,
    SeriesOptions, VariwideOptions, WaterfallOptions, XRangeOptions,
};
use chart_options::schema::{SchemaNode, verify_wire_keys};
use chart_options::utility::{Gradient, LinearGradientCoords, Pattern, PatternOptions,
    RadialGradientCoords};

fn assert_key_table_is_consistent<T: SchemaNode>() {
    verify_wire_keys::<T>().expect("no schema level may redeclare a key");
    for entry in T::wire_keys() {
        assert!(!entry.attribute.is_empty());
        assert!(!entry.wire.is_empty());
        assert!(
            !entry.attribute.contains(char::is_uppercase),
            "attribute names are snake_case: {}",
            entry.attribute
        );
    }
}

#[test]
fn every_class_declares_a_conflict_free_key_table() {
    assert_key_table_is_consistent::<AxisTitle>();
    assert_key_table_is_consistent::<AxisBreak>();
    assert_key_table_is_consistent::<PlotBand>();
    assert_key_table_is_consistent::<PlotLine>();
    assert_key_table_is_consistent::<GenericAxis>();
    assert_key_table_is_consistent::<NumericAxis>();
    assert_key_table_is_consistent::<GenericTypeOptions>();
    assert_key_table_is_consistent::<SeriesOptions>();
    assert_key_table_is_consistent::<BaseBarOptions>();
    assert_key_table_is_consistent::<BarOptions>();
    assert_key_table_is_consistent::<ColumnOptions>();
    assert_key_table_is_consistent::<ColumnPyramidOptions>();
    assert_key_table_is_consistent::<ColumnRangeOptions>();
    assert_key_table_is_consistent::<CylinderOptions>();
    assert_key_table_is_consistent::<VariwideOptions>();
    assert_key_table_is_consistent::<WaterfallOptions>();
    assert_key_table_is_consistent::<XRangeOptions>();
    assert_key_table_is_consistent::<PartialFillOptions>();
    assert_key_table_is_consistent::<BoxPlotOptions>();
    assert_key_table_is_consistent::<ErrorBarOptions>();
    assert_key_table_is_consistent::<LinearGradientCoords>();
    assert_key_table_is_consistent::<RadialGradientCoords>();
    assert_key_table_is_consistent::<Gradient>();
    assert_key_table_is_consistent::<PatternOptions>();
    assert_key_table_is_consistent::<Pattern>();
}

#[test]
fn derived_tables_are_supersets_of_their_parents() {
    let series: HashSet<&str> = SeriesOptions::wire_keys().iter().map(|k| k.wire).collect();
    for entry in GenericTypeOptions::wire_keys() {
        assert!(series.contains(entry.wire), "missing inherited {}", entry.wire);
    }

    let boxplot: HashSet<&str> = BoxPlotOptions::wire_keys().iter().map(|k| k.wire).collect();
    for entry in BarOptions::wire_keys() {
        assert!(boxplot.contains(entry.wire), "missing inherited {}", entry.wire);
    }

    let numeric: HashSet<&str> = NumericAxis::wire_keys().iter().map(|k| k.wire).collect();
    for entry in GenericAxis::wire_keys() {
        assert!(numeric.contains(entry.wire), "missing inherited {}", entry.wire);
    }
}

#[test]
fn ancestor_keys_come_first_in_declaration_order() {
    let table = BarOptions::wire_keys();
    let parent_len = BaseBarOptions::wire_keys().len();
    assert_eq!(&table[..parent_len], BaseBarOptions::wire_keys().as_slice());
    assert!(table.len() > parent_len);
}

#[test]
fn fully_populated_leaf_emits_every_declared_key_exactly_once() {
    let band = PlotBand::from_json(
        r##"{
            "borderColor": "#999999",
            "borderWidth": 1,
            "className": "shaded",
            "color": "#f5f5f5",
            "from": 0,
            "id": "band-1",
            "to": 10,
            "zIndex": 3
        }"##,
    )
    .expect("valid band");

    let wire = band.to_wire();
    let emitted: Vec<&String> = wire.keys().collect();
    let declared: Vec<&str> = PlotBand::wire_keys().iter().map(|k| k.wire).collect();
    assert_eq!(emitted.len(), declared.len());
    for key in declared {
        assert!(emitted.iter().any(|k| k.as_str() == key), "missing {key}");
    }
}

#[test]
fn unknown_wire_keys_are_ignored() {
    let axis = NumericAxis::from_json(r##"{ "tickInterval": 5, "madeUpKey": "ignored" }"##)
        .expect("unknown keys never fail construction");
    assert_eq!(axis.base().tick_interval(), Some(5.0));
    assert!(!axis.to_wire().contains_key("madeUpKey"));
}

#[test]
fn emitted_keys_are_always_declared() {
    let boxplot = BoxPlotOptions::from_json(
        r##"{
            "whiskerLength": "40%",
            "stemWidth": 2,
            "pointPadding": 0.05,
            "stacking": "percent",
            "visible": true
        }"##,
    )
    .expect("valid options");

    let declared: HashSet<&str> = BoxPlotOptions::wire_keys().iter().map(|k| k.wire).collect();
    for key in boxplot.to_wire().keys() {
        assert!(declared.contains(key.as_str()), "undeclared key {key}");
    }
}
