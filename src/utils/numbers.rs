use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Optional sign, digits with at most one `.`, optional exponent
    static ref LEADING_NUMBER: Regex =
        Regex::new(r"^[+-]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?")
            .expect("leading number pattern is valid");
}

/// Parse the longest decimal number at the start of `text`, ignoring
/// leading whitespace and anything after the number.
///
/// `"1.2.3"` reads as `1.2` and `"12.5 ha"` as `12.5`; text that does not
/// start with a number gives `None`.
pub fn leading_number(text: &str) -> Option<f64> {
    let found = LEADING_NUMBER.find(text.trim_start())?;
    found.as_str().parse::<f64>().ok()
}
