#![cfg(test)]

use css_syntax::{
    CssGrammarValidator, Priority, PropertyValidator, SyntaxError, ValueProblem,
    check_property_value, check_value, parse_declaration,
};

fn not_allowed(property: &str, word: &str) -> Result<(), ValueProblem> {
    Err(ValueProblem::NotAllowed {
        property: property.to_owned(),
        word: word.to_owned(),
    })
}

#[test]
fn parses_single_declaration_with_importance() {
    let declaration = parse_declaration("Padding: 1px 2px !important").unwrap();
    assert_eq!(declaration.name, "padding");
    assert_eq!(declaration.value, "1px 2px");
    assert!(declaration.important);
}

#[test]
fn rejects_text_that_is_not_a_declaration() {
    assert!(matches!(
        parse_declaration("padding 1px"),
        Err(SyntaxError::Unparsable(_))
    ));
    assert_eq!(
        parse_declaration("padding: 1px; color: red"),
        Err(SyntaxError::TrailingInput)
    );
}

#[test]
fn accepts_decoded_values() {
    let validator = CssGrammarValidator;
    assert_eq!(
        validator.validate("padding", "1 10 10 5", Priority::Important),
        Ok(true)
    );
    assert_eq!(validator.validate("height", "7.25rem", Priority::Normal), Ok(true));
    assert_eq!(validator.validate("color", "#fff", Priority::Normal), Ok(true));
    assert_eq!(
        validator.validate("color", "rgba(255, 0, 0, 0.5)", Priority::Normal),
        Ok(true)
    );
    assert_eq!(
        validator.validate("margin", "-5cm -6cm", Priority::Normal),
        Ok(true)
    );
}

#[test]
fn readable_but_unacceptable_values_are_invalid() {
    let validator = CssGrammarValidator;
    assert_eq!(validator.validate("color", "#ff", Priority::Normal), Ok(false));
    assert_eq!(validator.validate("padding", "", Priority::Normal), Ok(false));
    assert_eq!(validator.validate("width", "calc(1 @x)", Priority::Normal), Ok(false));
}

#[test]
fn values_must_match_the_property() {
    let validator = CssGrammarValidator;
    for (property, value) in [
        ("color", "h12345"),
        ("color", "bold"),
        ("color", "fff"),
        ("font-weight", "5cm"),
        ("opacity", "hidden"),
        ("z-index", "bold"),
        ("z-index", "1.5"),
        ("display", "10"),
        ("padding", "i"),
        ("width", "5deg"),
    ] {
        assert_eq!(
            validator.validate(property, value, Priority::Normal),
            Ok(false),
            "{property}: {value}"
        );
    }
    assert_eq!(
        validator.validate("Font-Weight", "700", Priority::Important),
        Ok(true)
    );
}

#[test]
fn property_values_report_the_offending_word() {
    assert_eq!(check_property_value("font-weight", "5cm"), not_allowed("font-weight", "5cm"));
    assert_eq!(check_property_value("padding", "1px auto"), not_allowed("padding", "auto"));
    assert_eq!(check_property_value("color", "red"), Ok(()));
    assert_eq!(
        check_property_value("color", "red blue"),
        Err(ValueProblem::TooManyWords {
            property: "color".to_owned(),
            found: 2,
            max: 1,
        })
    );
    assert_eq!(
        not_allowed("opacity", "hidden").unwrap_err().to_string(),
        "'hidden' is not a valid opacity value"
    );
}

#[test]
fn property_values_accept_each_kind() {
    for (property, value) in [
        ("color", "#fff"),
        ("color", "currentcolor"),
        ("border-color", "red #000 rgb(0, 0, 0) transparent"),
        ("padding", "1 10 10 5"),
        ("padding", "1% 0.625em"),
        ("margin", "-5cm auto"),
        ("line-height", "1.5"),
        ("opacity", "50%"),
        ("z-index", "-2"),
        ("font-weight", "bolder"),
        ("display", "inline flex"),
        ("width", "calc(100% - 2px)"),
        ("color", "var(--accent)"),
        ("z-index", "inherit"),
    ] {
        assert_eq!(check_property_value(property, value), Ok(()), "{property}: {value}");
    }
}

#[test]
fn unknown_properties_are_only_token_checked() {
    assert_eq!(check_property_value("border", "1px solid red"), Ok(()));
    assert_eq!(check_property_value("text-decoration", "underline"), Ok(()));
    assert_eq!(check_property_value("--custom", "anything at all"), Ok(()));
}

#[test]
fn non_finite_lengths_are_not_lengths() {
    let value = format!("{}px", "9".repeat(60));
    assert_eq!(check_property_value("width", &value), not_allowed("width", &value));
    assert!(matches!(
        check_property_value("opacity", &"9".repeat(60)),
        Err(ValueProblem::NotAllowed { .. })
    ));
}

#[test]
fn importance_smuggled_in_the_value_is_a_syntax_error() {
    let validator = CssGrammarValidator;
    assert_eq!(
        validator.validate("color", "red !important", Priority::Normal),
        Err(SyntaxError::PriorityMismatch)
    );
    assert_eq!(
        validator.validate("color", "red; width: 1px", Priority::Normal),
        Err(SyntaxError::TrailingInput)
    );
}

#[test]
fn value_check_reports_first_problem() {
    assert_eq!(check_value("   "), Err(ValueProblem::Empty));
    assert_eq!(check_value("1px )"), Err(ValueProblem::Unbalanced));
    assert_eq!(
        check_value("rgb(#12)"),
        Err(ValueProblem::InvalidHash("12".to_owned()))
    );
    assert_eq!(check_value("1% 10% 3% 1%"), Ok(()));
}

#[test]
fn priority_literal_matches_importance() {
    assert_eq!(Priority::from_important(true).as_str(), "IMPORTANT");
    assert_eq!(Priority::from_important(false).as_str(), "");
    assert_eq!(Priority::Important.css_suffix(), " !important");
}
