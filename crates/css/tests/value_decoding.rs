#![cfg(test)]

use atomic_css::value_decoder::{DashNormalization, NegativeEncoding, PercentEncoding};
use atomic_css::{DecodeStep, UnitPolicy, ValueDecoder};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn standard_steps_run_in_order() {
    assert_eq!(
        ValueDecoder::default().step_names(),
        ["dashes", "decimal", "percent", "negative", "color", "units"]
    );
}

#[test]
fn decodes_spacing_decimals_and_keywords() {
    init_logging();
    let decoder = ValueDecoder::default();
    assert_eq!(decoder.decode("padding", "1-10-10-5"), "1 10 10 5");
    assert_eq!(decoder.decode("height", "7_25rem"), "7.25rem");
    assert_eq!(decoder.decode("font-weight", "bold"), "bold");
    assert_eq!(decoder.decode("font-weight", "-bold"), "bold");
    assert_eq!(decoder.decode("white-space", "nowrap-"), "nowrap");
}

#[test]
fn decodes_percentages_and_negatives() {
    init_logging();
    let decoder = ValueDecoder::default();
    assert_eq!(decoder.decode("padding", "1p-10p-3p-1p"), "1% 10% 3% 1%");
    assert_eq!(decoder.decode("margin", "n9in"), "-9in");
    assert_eq!(decoder.decode("margin", "n5cm-n6cm"), "-5cm -6cm");
    assert_eq!(decoder.decode("margin", "n5_25cm-n6_1cm"), "-5.25cm -6.1cm");
}

#[test]
fn letter_markers_need_a_digit() {
    assert_eq!(PercentEncoding.apply("display", "flex-wrap".to_owned()), "flex-wrap");
    assert_eq!(NegativeEncoding.apply("display", "none".to_owned()), "none");
    assert_eq!(NegativeEncoding.apply("margin", "n9in".to_owned()), "-9in");
    assert_eq!(DashNormalization.apply("margin", "-1-2-".to_owned()), "1 2");
}

#[test]
fn expands_colours() {
    init_logging();
    let decoder = ValueDecoder::default();
    assert_eq!(decoder.decode("color", "hfff"), "#fff");
    assert_eq!(decoder.decode("background-color", "h00ff00"), "#00ff00");
    assert_eq!(
        decoder.decode("color", "rgba-255-0-0-0_5"),
        "rgba(255, 0, 0, 0.5)"
    );
    // Only colour properties are expanded.
    assert_eq!(decoder.decode("font-family", "hfff"), "hfff");
}

#[test]
fn converts_pixels_to_ems() {
    let decoder = ValueDecoder::default();
    assert_eq!(decoder.decode("padding", "10px"), "0.625em");
    assert_eq!(decoder.decode("padding", "16px-8px"), "1em 0.5em");
    assert_eq!(decoder.decode("padding", "1-10-10-5"), "1 10 10 5");
}

#[test]
fn inserts_default_units_when_enabled() {
    let decoder = ValueDecoder::new(UnitPolicy {
        insert_default_units: true,
        ..UnitPolicy::default()
    });
    assert_eq!(decoder.decode("padding", "10"), "0.625em");
    assert_eq!(decoder.decode("padding", "0-16"), "0 1em");
    assert_eq!(decoder.decode("opacity", "5"), "5");

    let pixels = ValueDecoder::new(UnitPolicy {
        insert_default_units: true,
        px_to_em: false,
        ..UnitPolicy::default()
    });
    assert_eq!(pixels.decode("padding", "10"), "10px");
}

#[test]
fn custom_step_lists_are_honoured() {
    let decoder = ValueDecoder::with_steps(vec![Box::new(DashNormalization)]);
    assert_eq!(decoder.step_names(), ["dashes"]);
    assert_eq!(decoder.decode("padding", "1p-n2"), "1p n2");
}
