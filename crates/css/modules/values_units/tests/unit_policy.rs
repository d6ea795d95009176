#![cfg(test)]

use css_values_units::{
    LengthUnit, ParseError, PolicyError, UnitPolicy, default_unit, format_number, is_length_unit,
    parse_dimension_word, parse_ident_word, parse_number_word, parse_percentage_word, px_to_em,
};

#[test]
fn classifies_lone_numbers_only() {
    assert_eq!(parse_number_word("10").map(|number| number.0), Ok(10.0));
    assert_eq!(parse_number_word("-5").map(|number| number.0), Ok(-5.0));
    assert_eq!(parse_number_word("10px"), Err(ParseError::UnexpectedToken));
    assert_eq!(parse_number_word("0,"), Err(ParseError::TrailingInput));
    assert_eq!(parse_number_word("bold"), Err(ParseError::UnexpectedToken));
}

#[test]
fn dimensions_keep_lowercased_unit() {
    let dimension = parse_dimension_word("12PX").unwrap();
    assert_eq!(dimension.unit, "px");
    assert!((dimension.value - 12.0).abs() < f32::EPSILON);
    parse_dimension_word("12%").unwrap_err();
}

#[test]
fn numbers_render_without_trailing_zeros() {
    assert_eq!(format_number(0.625), "0.625");
    assert_eq!(format_number(1.0), "1");
    assert_eq!(format_number(10.0), "10");
    assert_eq!(format_number(-0.0), "0");
    assert_eq!(format_number(1.0 / 3.0), "0.3333");
}

#[test]
fn default_policy_converts_pixels_and_leaves_bare_numbers() {
    let policy = UnitPolicy::default();
    assert_eq!(policy.add_units("padding", "10px 16px"), "0.625em 1em");
    assert_eq!(policy.add_units("padding", "1 10 10 5"), "1 10 10 5");
    assert_eq!(policy.add_units("height", "7.25rem"), "7.25rem");
}

#[test]
fn inserting_default_units_respects_unitless_properties_and_zero() {
    let policy = UnitPolicy {
        insert_default_units: true,
        ..UnitPolicy::default()
    };
    assert_eq!(policy.add_units("padding", "0 10 n"), "0 0.625em n");
    assert_eq!(policy.add_units("margin", "-16"), "-1em");
    assert_eq!(policy.add_units("font-weight", "700"), "700");
    assert_eq!(policy.add_units("line-height", "1.5"), "1.5");

    let pixels = UnitPolicy {
        px_to_em: false,
        insert_default_units: true,
        ..UnitPolicy::default()
    };
    assert_eq!(pixels.add_units("width", "50"), "50px");
    assert_eq!(pixels.add_units("width", "50px"), "50px");
}

#[test]
fn non_numeric_words_pass_through() {
    let policy = UnitPolicy {
        insert_default_units: true,
        ..UnitPolicy::default()
    };
    assert_eq!(
        policy.add_units("border", "1 solid rgb(0, 0, 0)"),
        "0.0625em solid rgb(0, 0, 0)"
    );
    assert_eq!(policy.add_units("width", "50% auto"), "50% auto");
}

#[test]
fn only_length_properties_have_default_units() {
    assert_eq!(default_unit("padding-top"), Some(LengthUnit::Pixels));
    assert_eq!(default_unit("opacity"), None);
    assert_eq!(default_unit("color"), None);
}

#[test]
fn policy_deserializes_with_defaults() {
    let policy: UnitPolicy = serde_json::from_str(r#"{ "insert_default_units": true }"#).unwrap();
    assert!(policy.px_to_em);
    assert!(policy.insert_default_units);
    assert!((policy.base_font_size_px - 16.0).abs() < f32::EPSILON);
}

#[test]
fn percentages_and_identifiers_are_single_words() {
    assert_eq!(parse_percentage_word("50%").map(|percent| percent.0), Ok(0.5));
    assert_eq!(parse_percentage_word("50"), Err(ParseError::UnexpectedToken));
    assert_eq!(parse_percentage_word("5%%"), Err(ParseError::TrailingInput));
    assert_eq!(parse_ident_word("Bold").map(|ident| ident.0), Ok("bold".to_owned()));
    assert_eq!(parse_ident_word("5cm"), Err(ParseError::UnexpectedToken));
    assert_eq!(parse_ident_word("rgb(0"), Err(ParseError::UnexpectedToken));
}

#[test]
fn length_units_are_known() {
    assert!(parse_dimension_word("5cm").unwrap().is_length());
    assert!(parse_dimension_word("2REM").unwrap().is_length());
    assert!(!parse_dimension_word("5deg").unwrap().is_length());
    assert!(!parse_dimension_word("5s").unwrap().is_length());
    assert!(is_length_unit("vmin"));
    assert!(!is_length_unit("x"));
}

#[test]
fn overflowing_lengths_are_not_lengths() {
    let word = format!("{}px", "9".repeat(60));
    let dimension = parse_dimension_word(&word).unwrap();
    assert!(!dimension.value.is_finite());
    assert!(!dimension.is_length());
}

#[test]
fn pixel_conversion_needs_a_usable_base() {
    assert_eq!(px_to_em(8.0, 16.0), Some(0.5));
    assert_eq!(px_to_em(10.0, 0.0), None);
    assert_eq!(px_to_em(10.0, -16.0), None);
    assert_eq!(px_to_em(10.0, f32::NAN), None);
    assert_eq!(px_to_em(f32::MAX, f32::MIN_POSITIVE), None);
}

#[test]
fn unusable_base_font_size_is_reported_and_leaves_pixels_alone() {
    assert_eq!(UnitPolicy::default().validate(), Ok(()));
    for base in [0.0, -4.0, f32::INFINITY] {
        let policy = UnitPolicy {
            base_font_size_px: base,
            ..UnitPolicy::default()
        };
        assert_eq!(policy.validate(), Err(PolicyError::BaseFontSize(base)));
        assert_eq!(policy.add_units("padding", "10px 2"), "10px 2");
    }
    let nan = UnitPolicy {
        base_font_size_px: f32::NAN,
        insert_default_units: true,
        ..UnitPolicy::default()
    };
    nan.validate().unwrap_err();
    assert_eq!(nan.add_units("padding", "10px 4"), "10px 4");
    assert!(
        PolicyError::BaseFontSize(0.0)
            .to_string()
            .contains("base_font_size_px")
    );
}

#[test]
fn non_finite_words_are_left_untouched() {
    let word = format!("{}px", "9".repeat(60));
    let policy = UnitPolicy::default();
    assert_eq!(policy.add_units("width", &word), word);

    let number = "9".repeat(60);
    let inserting = UnitPolicy {
        insert_default_units: true,
        ..UnitPolicy::default()
    };
    assert_eq!(inserting.add_units("width", &number), number);
}
