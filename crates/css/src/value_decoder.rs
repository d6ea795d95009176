//! Decoding of encoded values into CSS property values.
//!
//! Encoded values such as `bold`, `1-5-1-5`, `1_32rem`, `1p-10p-3p-1p`,
//! `n12px` or `n5_25cm-n6_1cm` are rewritten by a fixed sequence of steps.
//! Order matters: each step assumes the output shape of the ones before it.

use core::fmt;
use css_values_units::UnitPolicy;
use tracing::trace;

/// One rewrite applied to a value on its way to CSS.
pub trait DecodeStep: Send + Sync {
    /// Short name used in traces.
    fn name(&self) -> &'static str;

    /// Rewrite `value`, a value of `property` as produced by earlier steps.
    fn apply(&self, property: &str, value: String) -> String;
}

fn contains_a_digit(value: &str) -> bool {
    value.chars().any(|ch| ch.is_ascii_digit())
}

/// Dashes separate words: `-bold` → `bold`, `white-` → `white`, `1-5-1-5` → `1 5 1 5`.
#[derive(Clone, Copy, Debug, Default)]
pub struct DashNormalization;

impl DecodeStep for DashNormalization {
    fn name(&self) -> &'static str {
        "dashes"
    }

    fn apply(&self, _property: &str, value: String) -> String {
        let trimmed = value.strip_prefix('-').unwrap_or(value.as_str());
        let trimmed = trimmed.strip_suffix('-').unwrap_or(trimmed);
        trimmed.replace('-', " ")
    }
}

/// `_` marks a decimal point: `1_32rem` → `1.32rem`.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnderscoreDecimal;

impl DecodeStep for UnderscoreDecimal {
    fn name(&self) -> &'static str {
        "decimal"
    }

    fn apply(&self, _property: &str, value: String) -> String {
        if contains_a_digit(&value) {
            value.replace('_', ".")
        } else {
            value
        }
    }
}

/// `p` marks a percentage: `1p 10p 3p 1p` → `1% 10% 3% 1%`.
#[derive(Clone, Copy, Debug, Default)]
pub struct PercentEncoding;

impl DecodeStep for PercentEncoding {
    fn name(&self) -> &'static str {
        "percent"
    }

    fn apply(&self, _property: &str, value: String) -> String {
        if !contains_a_digit(&value) {
            return value;
        }
        let replaced = value.replace("p ", "% ");
        match replaced.strip_suffix('p') {
            Some(head) => format!("{head}%"),
            None => replaced,
        }
    }
}

/// `n` marks a minus sign: `n5cm n6cm` → `-5cm -6cm`, `n9in` → `-9in`.
///
/// A trailing `n` belongs to a unit (`9in`) and is left alone.
#[derive(Clone, Copy, Debug, Default)]
pub struct NegativeEncoding;

impl DecodeStep for NegativeEncoding {
    fn name(&self) -> &'static str {
        "negative"
    }

    fn apply(&self, _property: &str, value: String) -> String {
        if !contains_a_digit(&value) {
            return value;
        }
        let replaced = value.replace(" n", " -");
        match replaced.strip_prefix('n') {
            Some(tail) => format!("-{tail}"),
            None => replaced,
        }
    }
}

/// Hex colours and colour functions, via `css_color`.
#[derive(Clone, Copy, Debug, Default)]
pub struct ColorExpansion;

impl DecodeStep for ColorExpansion {
    fn name(&self) -> &'static str {
        "color"
    }

    fn apply(&self, property: &str, value: String) -> String {
        css_color::expand_color(property, &value)
    }
}

/// Units, via `css_values_units`.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnitInsertion {
    policy: UnitPolicy,
}

impl UnitInsertion {
    pub const fn new(policy: UnitPolicy) -> Self {
        Self { policy }
    }
}

impl DecodeStep for UnitInsertion {
    fn name(&self) -> &'static str {
        "units"
    }

    fn apply(&self, property: &str, value: String) -> String {
        self.policy.add_units(property, &value)
    }
}

/// An ordered list of decode steps.
pub struct ValueDecoder {
    steps: Vec<Box<dyn DecodeStep>>,
}

impl Default for ValueDecoder {
    fn default() -> Self {
        Self::new(UnitPolicy::default())
    }
}

impl fmt::Debug for ValueDecoder {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_list()
            .entries(self.steps.iter().map(|step| step.name()))
            .finish()
    }
}

impl ValueDecoder {
    /// The standard pipeline: dashes, decimals, percentages, negatives,
    /// colours, then units under `policy`.
    pub fn new(policy: UnitPolicy) -> Self {
        Self::with_steps(vec![
            Box::new(DashNormalization),
            Box::new(UnderscoreDecimal),
            Box::new(PercentEncoding),
            Box::new(NegativeEncoding),
            Box::new(ColorExpansion),
            Box::new(UnitInsertion::new(policy)),
        ])
    }

    /// A decoder running exactly `steps`, in order.
    pub fn with_steps(steps: Vec<Box<dyn DecodeStep>>) -> Self {
        Self { steps }
    }

    /// Names of the configured steps, in order.
    pub fn step_names(&self) -> Vec<&'static str> {
        self.steps.iter().map(|step| step.name()).collect()
    }

    /// Decode `encoded` as a value of `property`.
    pub fn decode(&self, property: &str, encoded: &str) -> String {
        self.steps
            .iter()
            .fold(encoded.to_owned(), |value, step| {
                let next = step.apply(property, value);
                trace!(step = step.name(), property, value = %next, "decode step");
                next
            })
    }
}
